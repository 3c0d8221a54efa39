use g2s_class::{neut_reaction_code, ClassifyInput};
use g2s_core::DiagSink;
use g2s_event::EventParticles;

/// probe, target, lepton, struck proton: enough for the table rows that
/// never look at the hadronic final state.
fn quiet_event(probe_pdg: i32) -> EventParticles {
    EventParticles::from_codes(&[probe_pdg, 1_000_060_120, 13, 2212], &[0, 0, 0, 0])
}

fn classify(
    reaction_code: i32,
    particles: &EventParticles,
    cc: bool,
    struck: Option<usize>,
    charge: Option<i32>,
) -> (Result<i32, g2s_core::ConvError>, DiagSink) {
    let mut diags = DiagSink::new();
    let result = neut_reaction_code(
        &ClassifyInput {
            reaction_code,
            particles,
            is_charged_current: cc,
            struck_nucleon: struck,
            primary_prod_charge: charge,
        },
        &mut diags,
    );
    (result, diags)
}

#[test]
fn quasi_elastic_cc_is_deterministic() {
    // Ancestry and struck-nucleon data never change the CCQE answer.
    let nu = quiet_event(14);
    assert_eq!(classify(1, &nu, true, None, None).0.unwrap(), 1);
    assert_eq!(classify(1, &nu, true, Some(3), Some(1)).0.unwrap(), 1);
    let nubar = quiet_event(-14);
    assert_eq!(classify(1, &nubar, true, Some(3), None).0.unwrap(), -1);
}

#[test]
fn ncel_splits_on_the_struck_nucleon() {
    let nu = EventParticles::from_codes(&[14, 1_000_060_120, 14, 2212], &[0, 0, 0, 0]);
    assert_eq!(classify(1, &nu, false, Some(3), None).0.unwrap(), 51);
    let neutron = EventParticles::from_codes(&[14, 1_000_060_120, 14, 2112], &[0, 0, 0, 0]);
    assert_eq!(classify(1, &neutron, false, Some(3), None).0.unwrap(), 52);
    // No struck-nucleon info defaults to the neutron branch.
    assert_eq!(classify(1, &nu, false, None, None).0.unwrap(), 52);
    let nubar = EventParticles::from_codes(&[-14, 1_000_060_120, -14, 2212], &[0, 0, 0, 0]);
    assert_eq!(classify(1, &nubar, false, Some(3), None).0.unwrap(), -51);
}

#[test]
fn delta_with_known_charge_uses_the_tables() {
    let nu = quiet_event(14);
    let nubar = quiet_event(-14);
    assert_eq!(classify(2, &nu, true, None, Some(2)).0.unwrap(), 11);
    assert_eq!(classify(2, &nu, true, None, Some(1)).0.unwrap(), 12);
    assert_eq!(classify(2, &nubar, true, None, Some(0)).0.unwrap(), -12);
    assert_eq!(classify(2, &nubar, true, None, Some(-1)).0.unwrap(), -11);
    assert_eq!(classify(2, &nu, false, None, Some(0)).0.unwrap(), 31);
    assert_eq!(classify(2, &nu, false, None, Some(1)).0.unwrap(), 32);
    assert_eq!(classify(2, &nubar, false, None, Some(0)).0.unwrap(), -31);
    assert_eq!(classify(2, &nubar, false, None, Some(1)).0.unwrap(), -32);
}

#[test]
fn impossible_delta_charges_are_fatal() {
    let nu = quiet_event(14);
    let nubar = quiet_event(-14);
    // A neutrino cannot lower the nucleon charge in CC.
    assert!(classify(2, &nu, true, None, Some(0)).0.is_err());
    assert!(classify(2, &nu, true, None, Some(-1)).0.is_err());
    assert!(classify(2, &nubar, true, None, Some(2)).0.is_err());
    assert!(classify(2, &nu, false, None, Some(2)).0.is_err());
    assert!(classify(2, &nubar, false, None, Some(-1)).0.is_err());
}

#[test]
fn higher_resonances_offset_by_charge() {
    let nu = quiet_event(14);
    for code in [3, 17, 31] {
        assert_eq!(classify(code, &nu, true, None, Some(-1)).0.unwrap(), 4);
        assert_eq!(classify(code, &nu, true, None, Some(0)).0.unwrap(), 5);
        assert_eq!(classify(code, &nu, true, None, Some(1)).0.unwrap(), 6);
        assert_eq!(classify(code, &nu, true, None, Some(2)).0.unwrap(), 7);
        // Unknown charge contributes nothing.
        assert_eq!(classify(code, &nu, true, None, None).0.unwrap(), 5);
        assert_eq!(classify(code, &nu, false, None, Some(1)).0.unwrap(), 49);
    }
    let nubar = quiet_event(-14);
    assert_eq!(classify(12, &nubar, true, None, Some(1)).0.unwrap(), -6);
}

#[test]
fn out_of_range_resonance_charges_are_fatal() {
    let nu = quiet_event(14);
    assert!(classify(7, &nu, true, None, Some(3)).0.is_err());
    assert!(classify(7, &nu, true, None, Some(-2)).0.is_err());
    assert!(classify(7, &nu, true, None, Some(-10)).0.is_err());
}

#[test]
fn single_pion_background() {
    let nu = quiet_event(14);
    assert_eq!(classify(32, &nu, true, None, None).0.unwrap(), 10);
    assert_eq!(classify(33, &nu, false, None, None).0.unwrap(), 30);
}

#[test]
fn deep_inelastic_scattering() {
    let nu = quiet_event(14);
    let nubar = quiet_event(-14);
    assert_eq!(classify(34, &nu, true, None, None).0.unwrap(), 26);
    assert_eq!(classify(34, &nu, false, None, None).0.unwrap(), 46);
    assert_eq!(classify(34, &nubar, false, None, None).0.unwrap(), -46);
}

#[test]
fn two_nucleon_knockout_has_no_nc_offset() {
    // Unlike every other channel, 2p2h keeps code 2 for NC as well.
    let nu = quiet_event(14);
    let nubar = quiet_event(-14);
    for code in [35, 36] {
        assert_eq!(classify(code, &nu, true, None, None).0.unwrap(), 2);
        assert_eq!(classify(code, &nu, false, None, None).0.unwrap(), 2);
        assert_eq!(classify(code, &nubar, true, None, None).0.unwrap(), -2);
        assert_eq!(classify(code, &nubar, false, None, None).0.unwrap(), -2);
    }
}

#[test]
fn multi_pion_production() {
    let nu = quiet_event(14);
    assert_eq!(classify(37, &nu, true, None, None).0.unwrap(), 21);
    assert_eq!(classify(37, &nu, false, None, None).0.unwrap(), 41);
}

#[test]
fn unknown_codes_return_zero_with_a_dump() {
    let nu = quiet_event(14);
    let (result, diags) = classify(99, &nu, true, None, None);
    assert_eq!(result.unwrap(), 0);
    assert_eq!(diags.warning_count(), 1);
    let dump = diags.entries()[0].detail.as_deref().expect("event dump");
    assert!(dump.contains("reaction code: 99"));
}

#[test]
fn delta_heuristic_result_is_sign_scaled_and_nc_shifted() {
    // One generation-1 pi+ paired with a generation-1 Delta-decay proton.
    let pdg = [14, 1_000_060_120, 13, 2212, 211, 2212];
    let history = [0, 0, 0, 0, 1_000_002, 1_000_002];
    let nu = EventParticles::from_codes(&pdg, &history);
    assert_eq!(classify(2, &nu, true, Some(3), None).0.unwrap(), 11);
    assert_eq!(classify(2, &nu, false, Some(3), None).0.unwrap(), 31);

    let mut pdg_bar = pdg;
    pdg_bar[0] = -14;
    let nubar = EventParticles::from_codes(&pdg_bar, &history);
    assert_eq!(classify(2, &nubar, true, Some(3), None).0.unwrap(), -11);
}
