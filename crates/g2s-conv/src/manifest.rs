//! JSON run manifest with input provenance.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use g2s_core::{ConvError, ErrorInfo};
use g2s_flux::{CompositeWeights, FluxSpectrum};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Semantic version of the manifest and table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for fixes.
    pub patch: u32,
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self {
            major: 1,
            minor: 0,
            patch: 0,
        }
    }
}

/// Provenance entry for one converted input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputProvenance {
    /// Path of the input file.
    pub path: String,
    /// SHA-256 of the file contents.
    pub sha256: String,
    /// Probe PDG code used for the file.
    pub probe_pdg: i32,
    /// Charged-current flag used for the file.
    pub charged_current: bool,
    /// Simulator runs found in the file.
    pub runs: u32,
    /// Events written from the file.
    pub events: u64,
}

/// Summary artifact written next to the event table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Schema version of manifest and table.
    pub schema_version: SchemaVersion,
    /// Provenance per converted input file.
    pub inputs: Vec<InputProvenance>,
    /// Total events written.
    pub total_events: u64,
    /// Events dropped (malformed or unclassifiable in non-strict runs).
    pub skipped_events: u64,
    /// Events per NEUT reaction code, for auditing the mode mix.
    pub neut_code_counts: BTreeMap<i32, u64>,
    /// Warnings recorded while converting, per message kind count.
    pub warning_count: u64,
    /// Composite species weights derived from the input fluxes.
    pub composite_weights: CompositeWeights,
    /// Parsed input flux spectra, passed through for downstream use.
    pub fluxes: Vec<FluxSpectrum>,
}

impl RunManifest {
    /// Counts one written event with its NEUT code.
    pub fn record_event(&mut self, neut_code: i32) {
        self.total_events += 1;
        *self.neut_code_counts.entry(neut_code).or_insert(0) += 1;
    }

    /// Serialises the manifest to pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConvError> {
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            ConvError::Output(ErrorInfo::new("encode-manifest", err.to_string()))
        })?;
        fs::write(path, json).map_err(|err| {
            ConvError::Output(
                ErrorInfo::new("write-manifest", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}

/// SHA-256 of a file's contents, hex encoded.
pub fn sha256_file(path: &Path) -> Result<String, ConvError> {
    let map_err = |err: std::io::Error| {
        ConvError::Output(
            ErrorInfo::new("hash-input", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    };
    let mut file = File::open(path).map_err(map_err)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 64 * 1024];
    loop {
        let read = file.read(&mut buffer).map_err(map_err)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}
