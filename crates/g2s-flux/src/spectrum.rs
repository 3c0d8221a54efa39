//! Input flux spectra.
//!
//! A flux file is a two-column text table of bin centers and values,
//! optionally preceded by an integral comment written by the flux tool:
//!
//! ```text
//! # input flux integral: 1.23 (width integral: 0.456)
//! 0.25 0.9
//! 0.75 1.4
//! ```
//!
//! The width integral feeds the composite species weights; a spectrum
//! without the comment cannot be normalised correctly in a multi-species
//! sample, which is reported but not fatal.

use std::io::BufRead;

use g2s_core::{ConvError, ErrorInfo};
use log::warn;
use serde::{Deserialize, Serialize};

const INTEGRAL_PREFIX: &str = "# input flux integral:";
const WIDTH_MARKER: &str = "(width integral: ";

/// One parsed flux spectrum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxSpectrum {
    /// Spectrum name (e.g. `numu_flux`), used to pick the probe species.
    pub name: String,
    /// Bin centers in GeV.
    pub centers: Vec<f64>,
    /// Flux values per bin.
    pub values: Vec<f64>,
    /// Plain integral from the header comment, `0` when absent.
    pub integral: f64,
    /// Width-weighted integral from the header comment, `0` when absent.
    pub width_integral: f64,
}

impl FluxSpectrum {
    /// Probe PDG code encoded in the conventional spectrum names.
    pub fn probe_pdg(&self) -> Option<i32> {
        match self.name.as_str() {
            "numu_flux" => Some(14),
            "numub_flux" => Some(-14),
            "nue_flux" => Some(12),
            "nueb_flux" => Some(-12),
            _ => None,
        }
    }

    /// Bin low edges reconstructed from the centers (the first and last bin
    /// reuse their neighbour's width).
    pub fn bin_edges(&self) -> Vec<f64> {
        let centers = &self.centers;
        if centers.len() < 2 {
            return centers
                .first()
                .map(|&c| vec![c - 0.5, c + 0.5])
                .unwrap_or_default();
        }
        let mut edges = vec![0.0; centers.len() + 1];
        for bin in 1..centers.len() {
            edges[bin] = centers[bin - 1] + (centers[bin] - centers[bin - 1]) / 2.0;
        }
        edges[0] = centers[0] - (edges[1] - centers[0]);
        edges[centers.len()] =
            centers[centers.len() - 1] + (centers[centers.len() - 1] - edges[centers.len() - 1]);
        edges
    }

    /// Values rescaled so that they sum to the header integral. Returns the
    /// values unchanged when no integral was recorded.
    pub fn normalised_values(&self) -> Vec<f64> {
        let sum: f64 = self.values.iter().sum();
        if self.integral <= 1e-8 || sum == 0.0 {
            return self.values.clone();
        }
        self.values
            .iter()
            .map(|v| v / sum * self.integral)
            .collect()
    }
}

/// Parses the integral header comment, returning `(integral, width integral)`.
fn parse_integral_line(line: &str, name: &str) -> (f64, f64) {
    if !line.starts_with(INTEGRAL_PREFIX) {
        warn!(
            "flux file for {name} has no integral comment; it will not be \
             normalisable in a multi-species sample"
        );
        return (0.0, 0.0);
    }
    let rest = &line[INTEGRAL_PREFIX.len()..];
    let Some(width_at) = rest.find(WIDTH_MARKER) else {
        warn!("flux file for {name} has a malformed integral comment: {line}");
        return (0.0, 0.0);
    };
    let integral = rest[..width_at].trim().parse().unwrap_or_else(|_| {
        warn!("could not parse the flux integral for {name} from: {line}");
        0.0
    });
    let width_part = &rest[width_at + WIDTH_MARKER.len()..];
    let width_integral = width_part
        .trim_end()
        .trim_end_matches(')')
        .trim()
        .parse()
        .unwrap_or_else(|_| {
            warn!("could not parse the flux width integral for {name} from: {line}");
            0.0
        });
    (integral, width_integral)
}

/// Reads a flux spectrum from a two-column text stream.
pub fn parse_spectrum(name: &str, reader: impl BufRead) -> Result<FluxSpectrum, ConvError> {
    let mut centers = Vec::new();
    let mut values = Vec::new();
    let mut integral = 0.0;
    let mut width_integral = 0.0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| {
            ConvError::Flux(
                ErrorInfo::new("read-flux", err.to_string()).with_context("name", name),
            )
        })?;
        if line.starts_with('#') {
            if index == 0 {
                (integral, width_integral) = parse_integral_line(&line, name);
            }
            continue;
        }
        let columns: Vec<f64> = line
            .split([' ', '\t', ','])
            .filter(|t| !t.is_empty())
            .filter_map(|t| t.parse().ok())
            .collect();
        if columns.len() != 2 {
            warn!("ignoring line {} of the {name} flux file: {line:?}", index + 1);
            continue;
        }
        centers.push(columns[0]);
        values.push(columns[1]);
    }

    if centers.is_empty() {
        return Err(ConvError::Flux(
            ErrorInfo::new("empty-flux", "found no data lines in flux file")
                .with_context("name", name),
        ));
    }

    Ok(FluxSpectrum {
        name: name.to_string(),
        centers,
        values,
        integral,
        width_integral,
    })
}
