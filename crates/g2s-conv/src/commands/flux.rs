//! `flux` subcommand: rewrite an edge-format flux table as bin centers.

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Args;
use g2s_flux::{read_edge_flux, write_center_flux, RebinOptions};
use log::info;

#[derive(Args, Debug)]
pub struct FluxArgs {
    /// Input text flux table (bin edges and values in columns).
    #[arg(long)]
    pub input: PathBuf,
    /// Output bin-center flux file.
    #[arg(long)]
    pub out: PathBuf,
    /// Column holding the lower bin edge.
    #[arg(long, default_value_t = 0)]
    pub low_edge_column: usize,
    /// Column holding the upper bin edge; widths are inferred from the
    /// lower edges when absent.
    #[arg(long)]
    pub up_edge_column: Option<usize>,
    /// Column holding the flux value.
    #[arg(long, default_value_t = 1)]
    pub value_column: usize,
    /// Normalise the output to a probability density.
    #[arg(long, conflicts_with = "unit_normalise")]
    pub pdf: bool,
    /// Normalise the output to unit integral.
    #[arg(long)]
    pub unit_normalise: bool,
}

pub fn run(args: &FluxArgs) -> Result<(), Box<dyn Error>> {
    let options = RebinOptions {
        low_edge_column: args.low_edge_column,
        up_edge_column: args.up_edge_column,
        value_column: args.value_column,
        pdf: args.pdf,
        unit_normalise: args.unit_normalise,
    };

    let input = File::open(&args.input)?;
    let flux = read_edge_flux(BufReader::new(input), &options)?;
    info!(
        "flux integral: {}, width integral: {}",
        flux.integral(),
        flux.width_integral()
    );

    let output = File::create(&args.out)?;
    write_center_flux(BufWriter::new(output), &flux, &options)?;
    Ok(())
}
