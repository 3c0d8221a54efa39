//! Flux-file handling: input spectra for composite-sample normalisation and
//! the bin-edge to bin-center conversion tool.

pub mod rebin;
pub mod spectrum;
pub mod weights;

pub use rebin::{read_edge_flux, write_center_flux, BinnedFlux, RebinOptions};
pub use spectrum::{parse_spectrum, FluxSpectrum};
pub use weights::CompositeWeights;
