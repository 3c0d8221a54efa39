//! Raw per-particle records as read from a `FinalEvents` file.

use serde::{Deserialize, Serialize};

/// Four-momentum in GeV, `(px, py, pz, e)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FourMomentum {
    /// x momentum component.
    pub px: f64,
    /// y momentum component.
    pub py: f64,
    /// z momentum component.
    pub pz: f64,
    /// Energy.
    pub e: f64,
}

/// One particle line of a `FinalEvents` file, field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawParticle {
    /// Run index the event belongs to.
    pub run: i32,
    /// Event number within the run.
    pub event_number: i32,
    /// GiBUU species code.
    pub species: i32,
    /// Electric charge in elementary-charge units.
    pub charge: i32,
    /// Per-event cross-section weight.
    pub per_weight: f64,
    /// Production position inside the nucleus (fm).
    pub position: [f64; 3],
    /// Four-momentum of the particle.
    pub four_mom: FourMomentum,
    /// Packed production-history code.
    pub history: i64,
    /// Primary reaction code of the event this particle belongs to.
    pub reaction_code: i32,
    /// Energy of the incoming probe.
    pub probe_energy: f64,
    /// Charge of the primary produced particle, when the file carries it.
    pub prod_charge: Option<i32>,
    /// Source line number, for error reporting.
    pub line_number: usize,
}
