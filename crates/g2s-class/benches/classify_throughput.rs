use criterion::{criterion_group, criterion_main, Criterion};
use g2s_class::{neut_reaction_code, ClassifyInput};
use g2s_core::DiagSink;
use g2s_event::query::EventParticles;

/// A Delta event without recorded production charge: probe, target, lepton,
/// struck nucleon, then a pion/nucleon pair from a generation-1 Delta decay.
fn delta_event() -> EventParticles {
    let pdg = [14, 1_000_060_120, 13, 2212, 211, 2212, 2112];
    let history = [0, 0, 0, 0, 1_000_002, 1_000_002, 2_001_001];
    EventParticles::from_codes(&pdg, &history)
}

fn classify_heuristic(c: &mut Criterion) {
    let particles = delta_event();
    c.bench_function("classify_delta_heuristic", |b| {
        b.iter(|| {
            let mut diags = DiagSink::new();
            let input = ClassifyInput {
                reaction_code: 2,
                particles: &particles,
                is_charged_current: true,
                struck_nucleon: Some(3),
                primary_prod_charge: None,
            };
            neut_reaction_code(&input, &mut diags).expect("classify")
        })
    });
}

criterion_group!(benches, classify_heuristic);
criterion_main!(benches);
