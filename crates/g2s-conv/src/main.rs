use clap::{Parser, Subcommand};
use commands::{convert, flux};

mod commands;
mod config;
mod manifest;
mod writer;

#[derive(Parser, Debug)]
#[command(name = "g2s-conv", about = "GiBUU FinalEvents to StdHep-style table converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert FinalEvents vectors into the classified event table.
    Convert(convert::ConvertArgs),
    /// Rewrite an edge-format flux table as bin centers with an integral
    /// header.
    Flux(flux::FluxArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Convert(args) => convert::run(&args),
        Command::Flux(args) => flux::run(&args),
    };
    if let Err(err) = result {
        log::error!("{err}");
        std::process::exit(1);
    }
}
