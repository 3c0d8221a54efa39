//! YAML run configuration.
//!
//! One conversion run combines any number of input files, each with its own
//! probe species, target nucleus, current type and weight. Patterns expand
//! to multiple files sharing the descriptor, weighted down by the match
//! count so the combined statistics stay per-file-set.

use std::fs;
use std::path::{Path, PathBuf};

use g2s_core::{ConvError, ErrorInfo};
use log::warn;
use serde::{Deserialize, Serialize};

/// One input file set sharing beam, target and weight settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDescriptor {
    /// File path or glob pattern of `FinalEvents` files.
    pub pattern: String,
    /// Probe PDG code (sign selects particle or antiparticle beam).
    pub probe_pdg: i32,
    /// Target mass number.
    pub target_a: i32,
    /// Target charge number.
    pub target_z: i32,
    /// Charged-current files (`false` for NC runs).
    #[serde(default = "default_true")]
    pub charged_current: bool,
    /// Extra per-file weight, e.g. nuclei per molecule in composite targets.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// One input flux spectrum for composite-sample normalisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluxDescriptor {
    /// Spectrum name; the conventional names select the probe species.
    pub name: String,
    /// Path of the two-column flux file.
    pub path: PathBuf,
}

/// Top-level run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Output directory for the table and manifest.
    pub output: PathBuf,
    /// Weight applied to every event, e.g. `1/14` to rescale a CH2 target
    /// back to per-nucleon cross sections.
    #[serde(default = "default_weight")]
    pub overall_weight: f64,
    /// Abort the run on the first bad event instead of skipping it.
    #[serde(default = "default_true")]
    pub strict: bool,
    /// Input files carry the struck nucleon as their first hadron line.
    #[serde(default = "default_true")]
    pub struck_nucleon_info: bool,
    /// Input files carry the primary production charge column.
    #[serde(default = "default_true")]
    pub prod_charge_info: bool,
    /// Electron-scattering input (fixed probe energy, no current split).
    #[serde(default)]
    pub electron_scattering: bool,
    /// Input file sets.
    pub files: Vec<InputDescriptor>,
    /// Input flux spectra.
    #[serde(default)]
    pub fluxes: Vec<FluxDescriptor>,
}

fn default_true() -> bool {
    true
}

fn default_weight() -> f64 {
    1.0
}

/// One concrete input file after pattern expansion.
#[derive(Debug, Clone)]
pub struct InputFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Probe PDG code.
    pub probe_pdg: i32,
    /// Target mass number.
    pub target_a: i32,
    /// Target charge number.
    pub target_z: i32,
    /// Charged-current flag.
    pub charged_current: bool,
    /// Per-file weight from the descriptor.
    pub weight: f64,
    /// `1 / N` share for patterns matching N files.
    pub share_weight: f64,
}

impl RunConfig {
    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConvError> {
        let text = fs::read_to_string(path).map_err(|err| {
            ConvError::Config(
                ErrorInfo::new("read-config", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config: RunConfig = serde_yaml::from_str(&text).map_err(|err| {
            ConvError::Config(
                ErrorInfo::new("parse-config", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        if config.files.is_empty() {
            return Err(ConvError::Config(ErrorInfo::new(
                "no-inputs",
                "run configuration lists no input files",
            )));
        }
        Ok(config)
    }

    /// Expands every descriptor pattern into concrete input files.
    pub fn expand_inputs(&self) -> Result<Vec<InputFile>, ConvError> {
        let mut inputs = Vec::new();
        for descriptor in &self.files {
            let matches: Vec<PathBuf> = glob::glob(&descriptor.pattern)
                .map_err(|err| {
                    ConvError::Config(
                        ErrorInfo::new("bad-pattern", err.to_string())
                            .with_context("pattern", descriptor.pattern.clone()),
                    )
                })?
                .filter_map(Result::ok)
                .collect();
            if matches.is_empty() {
                warn!("pattern {:?} matched no input files", descriptor.pattern);
                continue;
            }
            let share_weight = 1.0 / matches.len() as f64;
            for path in matches {
                inputs.push(InputFile {
                    path,
                    probe_pdg: descriptor.probe_pdg,
                    target_a: descriptor.target_a,
                    target_z: descriptor.target_z,
                    charged_current: descriptor.charged_current,
                    weight: descriptor.weight,
                    share_weight,
                });
            }
        }
        if inputs.is_empty() {
            return Err(ConvError::Config(ErrorInfo::new(
                "no-inputs",
                "no descriptor pattern matched any input file",
            )));
        }
        Ok(inputs)
    }
}
