//! Per-call diagnostics channel.
//!
//! Classification regularly has to make a best guess (resonance charge
//! inference, unmapped species) without failing the event. Those guesses are
//! reported through a [`DiagSink`] passed into each call, so callers can
//! audit how much of their output is confident versus inferred. Nothing in
//! here touches global state; sinks are cheap to create per event.

use serde::{Deserialize, Serialize};

/// Importance of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Progress and bookkeeping notes.
    Info,
    /// A recoverable oddity or a best-guess result.
    Warning,
}

/// One diagnostic record emitted during parsing, assembly or classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Importance of the record.
    pub severity: Severity,
    /// Single-line description.
    pub message: String,
    /// Optional multi-line payload, typically an event dump.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Collects [`Diagnostic`] records for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagSink {
    entries: Vec<Diagnostic>,
}

impl DiagSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an informational note.
    pub fn info(&mut self, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity: Severity::Info,
            message: message.into(),
            detail: None,
        });
    }

    /// Records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            detail: None,
        });
    }

    /// Records a warning with an attached payload such as an event dump.
    pub fn warn_with(&mut self, message: impl Into<String>, detail: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            detail: Some(detail.into()),
        });
    }

    /// Returns the collected records.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of warnings in the sink.
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Removes and returns all collected records.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}
