use g2s_class::{neut_reaction_code, ClassifyInput};
use g2s_core::DiagSink;
use g2s_event::EventParticles;

fn classify(reaction_code: i32, probe_pdg: i32, cc: bool, charge: Option<i32>) -> i32 {
    // A Delta-decay pair keeps the heuristic rows exercised too.
    let pdg = [probe_pdg, 1_000_060_120, 13, 2212, 211, 2212];
    let history = [0, 0, 0, 0, 1_000_002, 1_000_002];
    let particles = EventParticles::from_codes(&pdg, &history);
    let mut diags = DiagSink::new();
    neut_reaction_code(
        &ClassifyInput {
            reaction_code,
            particles: &particles,
            is_charged_current: cc,
            struck_nucleon: Some(3),
            primary_prod_charge: charge,
        },
        &mut diags,
    )
    .expect("classify")
}

#[test]
fn negating_the_probe_negates_the_code() {
    let rows: &[(i32, Option<i32>)] = &[
        (1, None),
        (2, None),
        (3, Some(1)),
        (17, Some(0)),
        (31, Some(2)),
        (32, None),
        (33, None),
        (34, None),
        (37, None),
    ];
    for &(reaction, charge) in rows {
        for cc in [true, false] {
            let nu = classify(reaction, 14, cc, charge);
            let nubar = classify(reaction, -14, cc, charge);
            assert_eq!(nu, -nubar, "reaction {reaction}, cc {cc}");
            assert_ne!(nu, 0, "reaction {reaction}, cc {cc}");
        }
    }
}

#[test]
fn two_nucleon_knockout_is_sign_scaled_even_for_nc() {
    // Easy to get wrong: the NC 2p2h row is still signed by the probe.
    for code in [35, 36] {
        for cc in [true, false] {
            assert_eq!(classify(code, 14, cc, None), 2);
            assert_eq!(classify(code, -14, cc, None), -2);
        }
    }
}
