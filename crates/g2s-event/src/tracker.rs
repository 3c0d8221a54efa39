//! Assembled StdHep-style event record.
//!
//! The output table mirrors the rooTracker layout: slot 0 is the incoming
//! probe, slot 1 the nuclear target, slot 2 the outgoing lepton and the
//! remaining slots the hadronic final state (slot 3 is the struck nucleon
//! when the input carries initial-state information).

use g2s_core::pdg::nuclear_pdg;
use g2s_core::{ConvError, DiagSink, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::history::{decompose, History};
use crate::query::EventParticles;
use crate::record::{FourMomentum, RawParticle};
use crate::species::{species_to_pdg, PdgLookup};

/// Hard cap on particle slots per event.
pub const MAX_PARTICLES: usize = 100;

/// Status of an initial-state particle.
pub const STATUS_INITIAL: i32 = 0;
/// Status of a final-state particle.
pub const STATUS_FINAL: i32 = 1;
/// Status of the initial-state struck nucleon.
pub const STATUS_STRUCK_NUCLEON: i32 = 11;

/// Slot of the struck nucleon when initial-state info is present.
pub const STRUCK_NUCLEON_SLOT: usize = 3;

/// One slot of the assembled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerParticle {
    /// PDG code, `0` for species without a PDG assignment.
    pub pdg: i32,
    /// StdHep status code.
    pub status: i32,
    /// Four-momentum.
    pub four_mom: FourMomentum,
    /// Raw history code, passed through for archival columns.
    pub history: i64,
    /// Decoded collision generation.
    pub generation: i32,
    /// PDG of the larger parent, `-1` for three-body production.
    pub mother_pdg: i32,
    /// PDG of the smaller parent, or the three-body class code.
    pub father_pdg: i32,
}

/// Multiplicative weights attached to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EventWeights {
    /// Cross-section weight reported by the simulator.
    pub per_weight: f64,
    /// `1 / NRuns` statistics normalisation.
    pub num_runs_weight: f64,
    /// Per-file weight from the run configuration.
    pub file_weight: f64,
    /// Product of all weights, the one to apply downstream.
    pub total: f64,
    /// Fraction of the composite flux carried by this probe species.
    pub species: f64,
    /// Within-flavour fraction for muon (anti)neutrinos.
    pub species_numu: f64,
    /// Within-flavour fraction for electron (anti)neutrinos.
    pub species_nue: f64,
}

/// Flags describing what the input file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyOptions {
    /// Input contains the struck nucleon as the first hadron line.
    pub struck_nucleon_info: bool,
    /// Input carries the primary production charge column.
    pub prod_charge_info: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            struck_nucleon_info: true,
            prod_charge_info: true,
        }
    }
}

/// One fully assembled event, ready for classification and writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerEvent {
    /// Event number from the input vector.
    pub event_number: i32,
    /// Primary reaction code reported by the simulator.
    pub reaction_code: i32,
    /// NEUT-convention reaction code, `0` until classified.
    pub neut_code: i32,
    /// Charge of the primary produced particle, when known.
    pub primary_prod_charge: Option<i32>,
    /// Energy of the incoming probe.
    pub probe_energy: f64,
    /// Particle slots.
    pub particles: Vec<TrackerParticle>,
    /// Event weights.
    pub weights: EventWeights,
}

impl TrackerEvent {
    /// Assembles the tracker record for one parsed event.
    ///
    /// `probe_pdg`, `target_z` and `target_a` come from the per-file run
    /// configuration. Weights are left at their defaults and the NEUT code
    /// at `0`; the conversion driver fills both in.
    pub fn assemble(
        raw: &[RawParticle],
        probe_pdg: i32,
        target_z: i32,
        target_a: i32,
        options: &AssemblyOptions,
        diags: &mut DiagSink,
    ) -> Result<Self, ConvError> {
        let first = raw.first().ok_or_else(|| {
            ConvError::Parse(ErrorInfo::new("event-empty", "event contained no particles"))
        })?;

        let mut particles = Vec::with_capacity(raw.len() + 2);
        particles.push(TrackerParticle {
            pdg: probe_pdg,
            status: STATUS_INITIAL,
            four_mom: FourMomentum {
                px: 0.0,
                py: 0.0,
                pz: first.probe_energy,
                e: first.probe_energy,
            },
            history: 0,
            generation: 0,
            mother_pdg: 0,
            father_pdg: 0,
        });
        particles.push(TrackerParticle {
            pdg: nuclear_pdg(target_z, target_a),
            status: STATUS_INITIAL,
            four_mom: FourMomentum {
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                e: f64::from(target_a),
            },
            history: 0,
            generation: 0,
            mother_pdg: 0,
            father_pdg: 0,
        });

        for part in raw {
            let slot = particles.len();
            if slot == MAX_PARTICLES {
                diags.warn(format!(
                    "event {} contained too many final state particles ({}), ignoring the last {}",
                    first.event_number,
                    raw.len(),
                    raw.len() + 2 - MAX_PARTICLES,
                ));
                break;
            }

            let status = if options.struck_nucleon_info && slot == STRUCK_NUCLEON_SLOT {
                STATUS_STRUCK_NUCLEON
            } else {
                STATUS_FINAL
            };

            let lookup = species_to_pdg(part.species, part.charge);
            if lookup == PdgLookup::Unknown && part.species != 0 {
                diags.warn(format!(
                    "species {} (charge {}) on line {} has no PDG code",
                    part.species, part.charge, part.line_number,
                ));
            }

            let (generation, mother_pdg, father_pdg) = ancestry_columns(part.history);
            particles.push(TrackerParticle {
                pdg: lookup.pdg_or_zero(),
                status,
                four_mom: part.four_mom,
                history: part.history,
                generation,
                mother_pdg,
                father_pdg,
            });
        }

        Ok(Self {
            event_number: first.event_number,
            reaction_code: first.reaction_code,
            neut_code: 0,
            primary_prod_charge: if options.prod_charge_info {
                first.prod_charge
            } else {
                None
            },
            probe_energy: first.probe_energy,
            particles,
            weights: EventWeights {
                per_weight: first.per_weight,
                ..EventWeights::default()
            },
        })
    }

    /// Ancestry-query view over the assembled slots.
    pub fn particles_view(&self) -> EventParticles {
        let pdg: Vec<i32> = self.particles.iter().map(|p| p.pdg).collect();
        let history: Vec<i64> = self.particles.iter().map(|p| p.history).collect();
        EventParticles::from_codes(&pdg, &history)
    }

    /// Slot of the struck nucleon, when the input carried one.
    pub fn struck_nucleon_slot(&self, options: &AssemblyOptions) -> Option<usize> {
        (options.struck_nucleon_info && self.particles.len() > STRUCK_NUCLEON_SLOT)
            .then_some(STRUCK_NUCLEON_SLOT)
    }
}

/// Derived ancestry columns for the output table.
fn ancestry_columns(history: i64) -> (i32, i32, i32) {
    match decompose(history) {
        History::Elementary => (0, 0, 0),
        History::Decay {
            generation,
            mother,
            father,
        } => (
            generation,
            species_to_pdg(mother, 0).pdg_or_zero(),
            species_to_pdg(father, 0).pdg_or_zero(),
        ),
        History::ThreeBody { generation, class } => (generation, -1, class.code()),
    }
}
