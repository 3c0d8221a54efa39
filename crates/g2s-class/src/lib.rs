//! NEUT-convention reaction-code classification.
//!
//! Maps the simulator's primary reaction taxonomy (quasi-elastic, Δ and
//! higher resonances, single-pion background, DIS, two-nucleon knockout,
//! multi-pion) onto the NEUT mode numbering used by downstream analysis
//! tools. Resonance events without a recorded production charge go through
//! an ordered ancestry-based fallback chain.

pub mod classifier;
pub mod escat;
pub mod heuristic;

pub use classifier::{neut_reaction_code, ClassifyInput};
pub use escat::neut_reaction_code_escat;
pub use heuristic::infer_delta_mode;
