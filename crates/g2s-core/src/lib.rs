//! Shared building blocks for the gibuu2stdhep workspace: the canonical
//! error type, the per-call diagnostics channel and PDG numbering helpers.

pub mod diag;
pub mod errors;
pub mod pdg;

pub use diag::{DiagSink, Diagnostic, Severity};
pub use errors::{ConvError, ErrorInfo};
