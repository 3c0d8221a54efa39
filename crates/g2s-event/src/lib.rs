//! Event-level data model for the gibuu2stdhep converter: the GiBUU
//! species↔PDG tables, the packed production-history codec, read-only
//! ancestry queries and the assembled tracker record.

pub mod history;
pub mod query;
pub mod record;
pub mod species;
pub mod tracker;

pub use history::{compose, decompose, format_history, History, ThreeBodyClass};
pub use query::{DecayPion, EventParticles, GenerationMember};
pub use record::RawParticle;
pub use species::{pdg_to_species, species_to_pdg, PdgLookup};
pub use tracker::{AssemblyOptions, EventWeights, TrackerEvent, TrackerParticle};
