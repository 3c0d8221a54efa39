//! Line-oriented reader for GiBUU `FinalEvents.dat` vectors.

pub mod events;
pub mod line;

pub use events::{count_runs, EventReader};
pub use line::parse_particle_line;
