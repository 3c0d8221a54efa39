//! CSV event table writer: one row per particle slot, fixed schema.

use std::path::Path;

use g2s_core::{ConvError, ErrorInfo};
use g2s_event::tracker::TrackerEvent;
use serde::Serialize;

/// One row of the output table.
#[derive(Debug, Serialize)]
struct ParticleRow {
    event: i32,
    neut_code: i32,
    reaction_code: i32,
    slot: usize,
    pdg: i32,
    status: i32,
    e: f64,
    px: f64,
    py: f64,
    pz: f64,
    history: i64,
    generation: i32,
    mother_pdg: i32,
    father_pdg: i32,
    per_weight: f64,
    total_weight: f64,
    species_weight: f64,
    species_weight_numu: f64,
    species_weight_nue: f64,
}

/// Streaming writer for the event table.
pub struct TableWriter {
    inner: csv::Writer<std::fs::File>,
}

impl TableWriter {
    /// Creates the table file, truncating any previous run.
    pub fn create(path: &Path) -> Result<Self, ConvError> {
        let inner = csv::Writer::from_path(path).map_err(|err| {
            ConvError::Output(
                ErrorInfo::new("create-table", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Ok(Self { inner })
    }

    /// Appends every slot of one classified event.
    pub fn write_event(&mut self, event: &TrackerEvent) -> Result<(), ConvError> {
        for (slot, particle) in event.particles.iter().enumerate() {
            let row = ParticleRow {
                event: event.event_number,
                neut_code: event.neut_code,
                reaction_code: event.reaction_code,
                slot,
                pdg: particle.pdg,
                status: particle.status,
                e: particle.four_mom.e,
                px: particle.four_mom.px,
                py: particle.four_mom.py,
                pz: particle.four_mom.pz,
                history: particle.history,
                generation: particle.generation,
                mother_pdg: particle.mother_pdg,
                father_pdg: particle.father_pdg,
                per_weight: event.weights.per_weight,
                total_weight: event.weights.total,
                species_weight: event.weights.species,
                species_weight_numu: event.weights.species_numu,
                species_weight_nue: event.weights.species_nue,
            };
            self.inner.serialize(row).map_err(|err| {
                ConvError::Output(ErrorInfo::new("write-table", err.to_string()))
            })?;
        }
        Ok(())
    }

    /// Flushes the table to disk.
    pub fn finish(mut self) -> Result<(), ConvError> {
        self.inner
            .flush()
            .map_err(|err| ConvError::Output(ErrorInfo::new("flush-table", err.to_string())))
    }
}
