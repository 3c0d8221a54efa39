//! Packed production-history codec.
//!
//! GiBUU tags every outgoing particle with a single integer describing how
//! it was produced: the generation (collision depth inside the nucleus) in
//! the millions digits and the one or two parent species codes in the two
//! low 3-digit fields. Negative values replace the parent fields with a
//! three-body production class. A code of `0` is reserved for particles
//! born at the elementary interaction vertex and must never be read as
//! "generation 0 with parents 0/0".

use serde::{Deserialize, Serialize};

use crate::species::species_to_pdg;

/// Three-body production classes carried by negative history codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreeBodyClass {
    /// N N N
    NNN,
    /// N N Δ
    NNDelta,
    /// N N π
    NNPion,
    /// Any class the simulator did not label.
    Unknown,
}

impl ThreeBodyClass {
    /// Decodes the packed class field.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ThreeBodyClass::NNN,
            2 => ThreeBodyClass::NNDelta,
            3 => ThreeBodyClass::NNPion,
            _ => ThreeBodyClass::Unknown,
        }
    }

    /// Canonical packed value of the class.
    pub fn code(self) -> i32 {
        match self {
            ThreeBodyClass::NNN => 1,
            ThreeBodyClass::NNDelta => 2,
            ThreeBodyClass::NNPion => 3,
            ThreeBodyClass::Unknown => 4,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ThreeBodyClass::NNN => "(N N N)",
            ThreeBodyClass::NNDelta => "(N N Delta)",
            ThreeBodyClass::NNPion => "(N N Pion)",
            ThreeBodyClass::Unknown => "Unknown",
        }
    }
}

/// Decoded production history of one particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum History {
    /// Produced at the elementary interaction vertex (code `0`).
    Elementary,
    /// Two-body production or decay. `mother` is the larger of the two
    /// packed species codes, `father` the smaller; `father == 0` means a
    /// single parent.
    Decay {
        /// Collision generation, `>= 0`.
        generation: i32,
        /// Larger parent species code.
        mother: i32,
        /// Smaller parent species code, `0` when absent.
        father: i32,
    },
    /// Three-body production.
    ThreeBody {
        /// Collision generation, `>= 0`.
        generation: i32,
        /// Production class.
        class: ThreeBodyClass,
    },
}

impl History {
    /// Collision generation; elementary particles sit at generation 0.
    pub fn generation(&self) -> i32 {
        match self {
            History::Elementary => 0,
            History::Decay { generation, .. } | History::ThreeBody { generation, .. } => {
                *generation
            }
        }
    }
}

/// Unpacks a history code.
pub fn decompose(code: i64) -> History {
    if code == 0 {
        return History::Elementary;
    }
    let magnitude = code.abs();
    let generation = (magnitude / 1_000_000) as i32;
    let low = (magnitude % 1_000_000) as i32;
    if code > 0 {
        let p2 = low / 1_000;
        let p1 = low % 1_000;
        History::Decay {
            generation,
            mother: p1.max(p2),
            father: p1.min(p2),
        }
    } else {
        History::ThreeBody {
            generation,
            class: ThreeBodyClass::from_code(low),
        }
    }
}

/// Packs a decoded history back into its integer form. Exact inverse of
/// [`decompose`]; mostly useful for building test fixtures.
pub fn compose(history: &History) -> i64 {
    match history {
        History::Elementary => 0,
        History::Decay {
            generation,
            mother,
            father,
        } => i64::from(*generation) * 1_000_000 + i64::from(*mother) * 1_000 + i64::from(*father),
        History::ThreeBody { generation, class } => {
            -(i64::from(*generation) * 1_000_000 + i64::from(class.code()))
        }
    }
}

/// Renders a history code for diagnostics, with parent species converted to
/// PDG codes where possible.
pub fn format_history(code: i64) -> String {
    let rendered = match decompose(code) {
        History::Elementary => "[Elementary interaction]".to_string(),
        History::Decay {
            generation,
            mother,
            father,
        } => {
            let mother_pdg = species_to_pdg(mother, 0).pdg_or_zero();
            if father != 0 {
                let father_pdg = species_to_pdg(father, 0).pdg_or_zero();
                format!("[Gen: {generation}, Mother: {mother_pdg}, Father: {father_pdg}]")
            } else {
                format!("[Gen: {generation}, Mother: {mother_pdg}]")
            }
        }
        History::ThreeBody { generation, class } => {
            format!("[Gen: {generation}, 3Body Process: {}]", class.label())
        }
    };
    format!("{rendered} -- ({code})")
}
