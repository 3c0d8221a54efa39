use g2s_class::infer_delta_mode;
use g2s_core::DiagSink;
use g2s_event::EventParticles;

fn infer(pdg: &[i32], history: &[i64]) -> (i32, DiagSink) {
    let particles = EventParticles::from_codes(pdg, history);
    let mut diags = DiagSink::new();
    let mode = infer_delta_mode(&particles, &mut diags);
    (mode, diags)
}

const HEADER_PDG: [i32; 4] = [14, 1_000_060_120, 13, 2212];
const HEADER_HIST: [i64; 4] = [0, 0, 0, 0];

fn with_header(pdg: &[i32], history: &[i64]) -> (Vec<i32>, Vec<i64>) {
    let mut all_pdg = HEADER_PDG.to_vec();
    all_pdg.extend_from_slice(pdg);
    let mut all_hist = HEADER_HIST.to_vec();
    all_hist.extend_from_slice(history);
    (all_pdg, all_hist)
}

#[test]
fn first_generation_pair_resolves_immediately() {
    // pi+ and proton, both generation-1 Delta children.
    let (pdg, history) = with_header(&[211, 2212], &[1_000_002, 1_000_002]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 11);
    assert!(diags.is_empty());
}

#[test]
fn first_generation_pion_with_neutron_selects_the_neutron_channel() {
    let (pdg, history) = with_header(&[211, 2112], &[1_000_002, 1_000_002]);
    assert_eq!(infer(&pdg, &history).0, 13);
}

#[test]
fn lone_first_generation_pion_still_resolves_with_a_warning() {
    // No nucleon candidate: pi+ resolves to the proton channel, flagged.
    let (pdg, history) = with_header(&[211], &[1_000_002]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 11);
    assert_eq!(diags.warning_count(), 1);
}

#[test]
fn neutral_pion_with_neutron_is_flagged_as_ambiguous() {
    let (pdg, history) = with_header(&[111, 2112], &[1_000_002, 1_000_002]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 12);
    assert_eq!(diags.warning_count(), 1);
}

#[test]
fn second_stage_pairs_decay_pions_by_generation() {
    // Nothing at generation 1; a generation-2 Delta decay pair.
    let (pdg, history) = with_header(&[211, 2112], &[2_000_002, 2_000_002]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 13);
    assert!(diags.is_empty());
}

#[test]
fn eta_and_sigma_decay_pions_reclassify_as_multi_pion() {
    for meson in [102i64, 104] {
        let (pdg, history) = with_header(&[211], &[2_000_000 + meson]);
        let (mode, diags) = infer(&pdg, &history);
        assert_eq!(mode, 21);
        assert_eq!(diags.warning_count(), 1);
    }
}

#[test]
fn other_background_parents_are_skipped_with_a_warning() {
    // A rho-decay pi+ resolves only through the shared-parent stage.
    let (pdg, history) = with_header(&[211, 2112], &[2_000_103, 2_000_103]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 13);
    // One warning for the non-Delta parent, one for the stage-3 guess.
    assert_eq!(diags.warning_count(), 2);
}

#[test]
fn shared_parent_stage_matches_exact_parents() {
    // Decay pion and nucleon both from a higher resonance (species 7).
    let (pdg, history) = with_header(&[111, 2212], &[3_000_007, 3_000_007]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 12);
    assert!(diags.warning_count() >= 1);
}

#[test]
fn nucleon_only_fallback_uses_the_lowest_generation() {
    // No usable pions anywhere; generation-2 Delta-decay proton wins over
    // the generation-3 neutron.
    let (pdg, history) = with_header(&[2212, 2112], &[2_000_002, 3_000_002]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 11);
    assert_eq!(diags.warning_count(), 1);
}

#[test]
fn fallback_defaults_to_the_neutron_channel() {
    // Nothing to pair at all: the guess is 12, with a warning.
    let (pdg, history) = with_header(&[], &[]);
    let (mode, diags) = infer(&pdg, &history);
    assert_eq!(mode, 12);
    assert_eq!(diags.warning_count(), 1);
}

#[test]
fn the_chain_always_terminates_with_a_nonzero_mode() {
    let finals: &[(&[i32], &[i64])] = &[
        (&[211, 2212], &[1_000_002, 1_000_002]),
        (&[-211], &[1_000_002]),
        (&[111], &[-2_000_003]),
        (&[2112], &[4_000_002]),
        (&[22, 321], &[2_000_105, 3_000_110]),
        (&[], &[]),
    ];
    for &(tail_pdg, tail_hist) in finals {
        let (pdg, history) = with_header(tail_pdg, tail_hist);
        assert_ne!(infer(&pdg, &history).0, 0);
    }
}
