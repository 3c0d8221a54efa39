//! `convert` subcommand: FinalEvents vectors into the classified event table.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;
use g2s_class::{neut_reaction_code, neut_reaction_code_escat, ClassifyInput};
use g2s_core::diag::Severity;
use g2s_core::pdg;
use g2s_core::{ConvError, DiagSink, ErrorInfo};
use g2s_event::tracker::{AssemblyOptions, EventWeights, TrackerEvent};
use g2s_flux::{parse_spectrum, CompositeWeights, FluxSpectrum};
use g2s_reader::{count_runs, EventReader};
use log::{info, warn};

use crate::config::{InputFile, RunConfig};
use crate::manifest::{sha256_file, InputProvenance, RunManifest};
use crate::writer::TableWriter;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// YAML run configuration describing inputs, targets and weights.
    #[arg(long)]
    pub config: PathBuf,
    /// Output directory overriding the configuration.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ConvertArgs) -> Result<(), Box<dyn Error>> {
    let mut config = RunConfig::load(&args.config)?;
    if let Some(out) = &args.out {
        config.output = out.clone();
    }
    fs::create_dir_all(&config.output)?;

    // Fluxes come first so the composite normalisation is known before any
    // event is written.
    let (composite, spectra) = load_fluxes(&config)?;
    let inputs = config.expand_inputs()?;

    let mut writer = TableWriter::create(&config.output.join("events.csv"))?;
    let mut manifest = RunManifest {
        composite_weights: composite.clone(),
        fluxes: spectra,
        ..RunManifest::default()
    };

    let options = AssemblyOptions {
        struck_nucleon_info: config.struck_nucleon_info,
        prod_charge_info: config.prod_charge_info,
    };

    let mut escat_energy: Option<f64> = None;
    for input in &inputs {
        let runs = count_runs(&input.path)?;
        let events =
            convert_file(
                &config,
                input,
                runs,
                &options,
                &composite,
                &mut escat_energy,
                &mut writer,
                &mut manifest,
            )?;
        info!("found {events} events in {}", input.path.display());
        manifest.inputs.push(InputProvenance {
            path: input.path.display().to_string(),
            sha256: sha256_file(&input.path)?,
            probe_pdg: input.probe_pdg,
            charged_current: input.charged_current,
            runs,
            events,
        });
    }

    writer.finish()?;
    manifest.save(&config.output.join("manifest.json"))?;
    info!(
        "saved {} events ({} skipped) to {}",
        manifest.total_events,
        manifest.skipped_events,
        config.output.display()
    );
    Ok(())
}

/// Parses the configured flux spectra and derives the composite weights.
fn load_fluxes(
    config: &RunConfig,
) -> Result<(CompositeWeights, Vec<FluxSpectrum>), Box<dyn Error>> {
    let mut integrals = BTreeMap::new();
    let mut spectra = Vec::new();
    for descriptor in &config.fluxes {
        let file = File::open(&descriptor.path).map_err(|err| {
            ConvError::Flux(
                ErrorInfo::new("open-flux", err.to_string())
                    .with_context("path", descriptor.path.display().to_string()),
            )
        })?;
        let spectrum = parse_spectrum(&descriptor.name, BufReader::new(file))?;
        match spectrum.probe_pdg() {
            Some(pdg) => {
                if integrals.insert(pdg, spectrum.width_integral).is_some() {
                    warn!(
                        "already read a flux spectrum named {}, overwriting",
                        descriptor.name
                    );
                }
            }
            None => warn!(
                "cannot infer a probe species from flux name {:?}",
                descriptor.name
            ),
        }
        spectra.push(spectrum);
    }
    Ok((CompositeWeights::from_width_integrals(&integrals), spectra))
}

/// Streams one input file into the table. Returns the events written.
#[allow(clippy::too_many_arguments)]
fn convert_file(
    config: &RunConfig,
    input: &InputFile,
    runs: u32,
    options: &AssemblyOptions,
    composite: &CompositeWeights,
    escat_energy: &mut Option<f64>,
    writer: &mut TableWriter,
    manifest: &mut RunManifest,
) -> Result<u64, Box<dyn Error>> {
    let mut events = 0u64;
    for block in EventReader::open(&input.path, config.prod_charge_info)? {
        let raw = match block {
            Ok(raw) => raw,
            Err(err) => {
                if config.strict {
                    return Err(err.into());
                }
                warn!("skipping event in {}: {err}", input.path.display());
                manifest.skipped_events += 1;
                continue;
            }
        };

        let mut diags = DiagSink::new();
        let mut event =
            TrackerEvent::assemble(&raw, input.probe_pdg, input.target_z, input.target_a, options, &mut diags)?;
        apply_weights(&mut event, config, input, runs, composite);

        if config.electron_scattering {
            check_probe_energy(escat_energy, &event, input)?;
            event.neut_code = neut_reaction_code_escat(event.reaction_code, input.probe_pdg);
        } else {
            let particles = event.particles_view();
            let classify = ClassifyInput {
                reaction_code: event.reaction_code,
                particles: &particles,
                is_charged_current: input.charged_current,
                struck_nucleon: event.struck_nucleon_slot(options),
                primary_prod_charge: event.primary_prod_charge,
            };
            match neut_reaction_code(&classify, &mut diags) {
                Ok(code) => event.neut_code = code,
                Err(err) => {
                    if config.strict {
                        return Err(err.into());
                    }
                    warn!(
                        "skipping event {} in {}: {err}",
                        event.event_number,
                        input.path.display()
                    );
                    manifest.skipped_events += 1;
                    continue;
                }
            }
        }

        drain_diags(&mut diags, manifest);
        writer.write_event(&event)?;
        manifest.record_event(event.neut_code);
        events += 1;
        if manifest.total_events % 10_000 == 0 {
            info!("read {} events", manifest.total_events);
        }
    }
    Ok(events)
}

/// Fills in the multiplicative event weights.
fn apply_weights(
    event: &mut TrackerEvent,
    config: &RunConfig,
    input: &InputFile,
    runs: u32,
    composite: &CompositeWeights,
) {
    let num_runs_weight = input.share_weight / f64::from(runs.max(1));
    let per_weight = event.weights.per_weight;
    let escat_scale = if config.electron_scattering { 1e5 } else { 1.0 };
    let probe = input.probe_pdg;
    event.weights = EventWeights {
        per_weight,
        num_runs_weight,
        file_weight: input.weight,
        total: per_weight * num_runs_weight * input.weight * config.overall_weight * escat_scale,
        species: composite.species_fraction(probe),
        species_numu: if probe.abs() == pdg::NU_MU {
            composite.flavour_fraction(probe)
        } else {
            0.0
        },
        species_nue: if probe.abs() == pdg::NU_E {
            composite.flavour_fraction(probe)
        } else {
            0.0
        },
    };
}

/// Electron runs carry one fixed input energy; a differing event means the
/// wrong files were combined.
fn check_probe_energy(
    expected: &mut Option<f64>,
    event: &TrackerEvent,
    input: &InputFile,
) -> Result<(), ConvError> {
    match expected {
        None => {
            *expected = Some(event.probe_energy);
            Ok(())
        }
        Some(energy) if (*energy - event.probe_energy).abs() <= 1e-5 => Ok(()),
        Some(energy) => Err(ConvError::Config(
            ErrorInfo::new("probe-energy", "differing input energies between events")
                .with_context("expected", energy.to_string())
                .with_context("found", event.probe_energy.to_string())
                .with_context("event", event.event_number.to_string())
                .with_context("path", input.path.display().to_string()),
        )),
    }
}

/// Forwards collected diagnostics to the log and the manifest counters.
fn drain_diags(diags: &mut DiagSink, manifest: &mut RunManifest) {
    for diagnostic in diags.drain() {
        match diagnostic.severity {
            Severity::Warning => {
                manifest.warning_count += 1;
                match diagnostic.detail {
                    Some(detail) => warn!("{}\n{detail}", diagnostic.message),
                    None => warn!("{}", diagnostic.message),
                }
            }
            Severity::Info => info!("{}", diagnostic.message),
        }
    }
}
