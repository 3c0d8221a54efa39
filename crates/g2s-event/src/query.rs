//! Read-only ancestry queries over one event.
//!
//! All scans run over the event's PDG column and the decoded history
//! column. Nothing here mutates the event; result vectors are transient
//! per-call scratch.

use std::fmt::Write as _;

use g2s_core::pdg;

use crate::history::{decompose, format_history, History};
use crate::species::pdg_to_species;

/// One particle seen through [`EventParticles::generation_members`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationMember {
    /// PDG code of the particle.
    pub pdg: i32,
    /// Larger parent species code; `-1` for three-body production.
    pub mother: i32,
    /// Smaller parent species code, or the three-body class code.
    pub father: i32,
}

/// One final-state pion produced by a single-parent decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DecayPion {
    /// Collision generation of the pion.
    pub generation: i32,
    /// Pion PDG code.
    pub pdg: i32,
    /// Species code of the decaying parent.
    pub parent: i32,
}

/// Per-event particle columns with pre-decoded histories.
#[derive(Debug, Clone)]
pub struct EventParticles {
    pdg: Vec<i32>,
    codes: Vec<i64>,
    history: Vec<History>,
}

impl EventParticles {
    /// Builds the view from the PDG column and raw history codes.
    pub fn from_codes(pdg: &[i32], history: &[i64]) -> Self {
        debug_assert_eq!(pdg.len(), history.len());
        Self {
            pdg: pdg.to_vec(),
            codes: history.to_vec(),
            history: history.iter().map(|&code| decompose(code)).collect(),
        }
    }

    /// Number of particle slots.
    pub fn len(&self) -> usize {
        self.pdg.len()
    }

    /// True when the event carries no particles.
    pub fn is_empty(&self) -> bool {
        self.pdg.is_empty()
    }

    /// PDG code of the incoming probe (slot 0), `0` for an empty event.
    pub fn probe_pdg(&self) -> i32 {
        self.pdg.first().copied().unwrap_or(0)
    }

    /// PDG code at a slot.
    pub fn pdg(&self, index: usize) -> Option<i32> {
        self.pdg.get(index).copied()
    }

    /// All particles of one collision generation, with their parent slots.
    ///
    /// Three-body members report `(-1, class)` in the parent slots;
    /// elementary members belong to generation 0 with parents `(0, 0)`.
    pub fn generation_members(&self, generation: i32) -> Vec<GenerationMember> {
        self.pdg
            .iter()
            .zip(&self.history)
            .filter(|(_, history)| history.generation() == generation)
            .map(|(&pdg, history)| match *history {
                History::Elementary => GenerationMember {
                    pdg,
                    mother: 0,
                    father: 0,
                },
                History::Decay { mother, father, .. } => GenerationMember {
                    pdg,
                    mother,
                    father,
                },
                History::ThreeBody { class, .. } => GenerationMember {
                    pdg,
                    mother: -1,
                    father: class.code(),
                },
            })
            .collect()
    }

    /// Counts how often a species code appears in the event, either as a
    /// decoded two-body parent or as the species of a final-state particle.
    pub fn count_species_code(&self, species: i32) -> usize {
        let mut count = 0;
        for (&pdg, history) in self.pdg.iter().zip(&self.history) {
            if let History::Decay { mother, father, .. } = *history {
                count += usize::from(mother == species);
                count += usize::from(father == species);
            }
            count += usize::from(pdg_to_species(pdg) == species);
        }
        count
    }

    /// Final-state pions with a single two-body decay parent, excluding the
    /// primary vertex generation. Sorted by `(generation, pdg, parent)` so
    /// downstream pairing is deterministic.
    pub fn final_state_decay_pions(&self) -> Vec<DecayPion> {
        let mut pions: Vec<DecayPion> = self
            .pdg
            .iter()
            .zip(&self.history)
            .filter_map(|(&pdg, history)| match *history {
                History::Decay {
                    generation,
                    mother,
                    father: 0,
                } if pdg::is_pion(pdg) && generation != 0 => Some(DecayPion {
                    generation,
                    pdg,
                    parent: mother,
                }),
                _ => None,
            })
            .collect();
        pions.sort();
        pions
    }

    /// Multi-line dump of the event for diagnostics: one line per slot with
    /// its PDG code and rendered production history.
    pub fn describe(&self, reaction_code: i32) -> String {
        let mut out = format!("reaction code: {reaction_code}\n");
        for (&pdg, &code) in self.pdg.iter().zip(&self.codes) {
            let _ = writeln!(out, "\t({pdg:>5}): {}", format_history(code));
        }
        out
    }

    /// Final-state nucleons from pure two-body Δ decays, as
    /// `(generation, pdg)` sorted by generation.
    pub fn delta_decay_nucleons(&self) -> Vec<(i32, i32)> {
        let mut nucleons: Vec<(i32, i32)> = self
            .pdg
            .iter()
            .zip(&self.history)
            .filter_map(|(&pdg, history)| match *history {
                History::Decay {
                    generation,
                    mother: crate::species::DELTA,
                    father: 0,
                } if pdg::is_nucleon(pdg) => Some((generation, pdg)),
                _ => None,
            })
            .collect();
        nucleons.sort();
        nucleons
    }
}
