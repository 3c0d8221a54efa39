use g2s_core::{DiagSink, Severity};

#[test]
fn sink_collects_in_order() {
    let mut sink = DiagSink::new();
    sink.info("reading file");
    sink.warn("species 9999 has no PDG code");
    sink.warn_with("giving up on this Delta resonance", "reaction code: 2");

    let entries = sink.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].severity, Severity::Info);
    assert_eq!(entries[1].severity, Severity::Warning);
    assert_eq!(entries[2].detail.as_deref(), Some("reaction code: 2"));
    assert_eq!(sink.warning_count(), 2);
}

#[test]
fn drain_empties_the_sink() {
    let mut sink = DiagSink::new();
    sink.warn("one");
    let drained = sink.drain();
    assert_eq!(drained.len(), 1);
    assert!(sink.is_empty());
}

#[test]
fn sinks_are_independent_per_call() {
    // Two sinks never observe each other's records, so per-event
    // classification can run on any thread without shared state.
    let mut a = DiagSink::new();
    let mut b = DiagSink::new();
    a.warn("from a");
    b.info("from b");
    assert_eq!(a.entries().len(), 1);
    assert_eq!(b.entries().len(), 1);
    assert_ne!(a.entries()[0].message, b.entries()[0].message);
}

#[test]
fn diagnostics_serialise() {
    let mut sink = DiagSink::new();
    sink.warn("pattern matched no input files");
    let json = serde_json::to_string(&sink).expect("encode");
    assert!(json.contains("\"severity\":\"warning\""));
}
