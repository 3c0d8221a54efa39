//! Bin-edge to bin-center flux conversion.
//!
//! Flux tables published as histograms (one bin edge per row) have to be
//! rewritten as center/value pairs before GiBUU will accept them. The
//! converter reads configurable columns, reconstructs bin widths when only
//! low edges are given, and can normalise the output to a PDF or to unit
//! integral. The integral comment it writes is what
//! [`crate::spectrum::parse_spectrum`] later reads back.

use std::io::{BufRead, Write};

use g2s_core::{ConvError, ErrorInfo};

/// Column selection and normalisation options.
#[derive(Debug, Clone, Copy)]
pub struct RebinOptions {
    /// Column of the lower bin edge.
    pub low_edge_column: usize,
    /// Column of the upper bin edge, when the table carries one.
    pub up_edge_column: Option<usize>,
    /// Column of the flux value.
    pub value_column: usize,
    /// Divide by integral and bin width (probability density output).
    pub pdf: bool,
    /// Divide by the integral only.
    pub unit_normalise: bool,
}

impl Default for RebinOptions {
    fn default() -> Self {
        Self {
            low_edge_column: 0,
            up_edge_column: None,
            value_column: 1,
            pdf: false,
            unit_normalise: false,
        }
    }
}

/// A flux histogram in center/width/value form.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedFlux {
    /// Bin centers.
    pub centers: Vec<f64>,
    /// Bin widths.
    pub widths: Vec<f64>,
    /// Flux values.
    pub values: Vec<f64>,
}

impl BinnedFlux {
    /// Plain sum of the values.
    pub fn integral(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Width-weighted sum of the values.
    pub fn width_integral(&self) -> f64 {
        self.widths
            .iter()
            .zip(&self.values)
            .map(|(w, v)| w * v)
            .sum()
    }
}

/// Reads an edge-format flux table.
///
/// With only low edges available, each bin is as wide as the gap to the
/// next low edge, and the last bin reuses the width of its predecessor.
pub fn read_edge_flux(reader: impl BufRead, options: &RebinOptions) -> Result<BinnedFlux, ConvError> {
    let needed = options
        .low_edge_column
        .max(options.value_column)
        .max(options.up_edge_column.unwrap_or(0));

    let mut low_edges = Vec::new();
    let mut up_edges = Vec::new();
    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| {
            ConvError::Flux(ErrorInfo::new("read-flux", err.to_string()))
        })?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let columns: Vec<f64> = line
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        if columns.len() <= needed {
            return Err(ConvError::Flux(
                ErrorInfo::new(
                    "flux-columns",
                    format!("need at least {} columns for the current options", needed + 1),
                )
                .with_context("line_number", (index + 1).to_string())
                .with_context("line", line.clone()),
            ));
        }
        low_edges.push(columns[options.low_edge_column]);
        if let Some(up) = options.up_edge_column {
            up_edges.push(columns[up]);
        }
        values.push(columns[options.value_column]);
    }

    if low_edges.is_empty() {
        return Err(ConvError::Flux(ErrorInfo::new(
            "empty-flux",
            "found no data lines in flux file",
        )));
    }

    let count = low_edges.len();
    let mut widths = vec![0.0; count];
    for bin in 0..count {
        widths[bin] = if options.up_edge_column.is_some() {
            up_edges[bin] - low_edges[bin]
        } else if bin + 1 != count {
            low_edges[bin + 1] - low_edges[bin]
        } else if count > 1 {
            low_edges[bin] - low_edges[bin - 1]
        } else {
            1.0
        };
    }
    let centers = low_edges
        .iter()
        .zip(&widths)
        .map(|(low, width)| low + width / 2.0)
        .collect();

    Ok(BinnedFlux {
        centers,
        widths,
        values,
    })
}

/// Writes the center-format flux table with its integral comment.
pub fn write_center_flux(
    mut writer: impl Write,
    flux: &BinnedFlux,
    options: &RebinOptions,
) -> Result<(), ConvError> {
    let integral = flux.integral();
    let width_integral = flux.width_integral();

    let emit = |err: std::io::Error| {
        ConvError::Output(ErrorInfo::new("write-flux", err.to_string()))
    };
    writeln!(
        writer,
        "# input flux integral: {integral} (width integral: {width_integral})"
    )
    .map_err(emit)?;
    for ((center, width), value) in flux.centers.iter().zip(&flux.widths).zip(&flux.values) {
        let mut out = *value;
        if options.pdf {
            out /= integral;
            out /= width;
        } else if options.unit_normalise {
            out /= integral;
        }
        writeln!(writer, "{center} {out}").map_err(emit)?;
    }
    Ok(())
}
