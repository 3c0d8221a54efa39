//! Composite-sample species weights.
//!
//! When neutrino and antineutrino (or muon and electron flavour) runs are
//! combined into one output, every event carries the fraction of the total
//! flux its probe species contributes, so downstream tools can renormalise
//! per species. Fractions are built from the width integrals of the input
//! flux spectra; a species without a spectrum weighs zero.

use std::collections::BTreeMap;

use g2s_core::pdg::{NU_E, NU_MU};
use serde::{Deserialize, Serialize};

/// The four probe species taking part in composite weighting.
const SPECIES: [i32; 4] = [NU_MU, -NU_MU, NU_E, -NU_E];

/// Per-species flux fractions of a composite sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    /// Fraction of the summed flux per species, `Σ = 1` over contributing
    /// species.
    species: BTreeMap<i32, f64>,
    /// Fraction within the same-flavour particle/antiparticle pair.
    flavour: BTreeMap<i32, f64>,
}

impl CompositeWeights {
    /// Builds the fractions from per-species flux width integrals.
    pub fn from_width_integrals(integrals: &BTreeMap<i32, f64>) -> Self {
        let value = |pdg: i32| integrals.get(&pdg).copied().unwrap_or(0.0);
        let total: f64 = SPECIES.iter().map(|&pdg| value(pdg)).sum();

        let mut species = BTreeMap::new();
        let mut flavour = BTreeMap::new();
        for &pdg in &SPECIES {
            let own = value(pdg);
            let pair = own + value(-pdg);
            species.insert(pdg, if own != 0.0 { own / total } else { 0.0 });
            flavour.insert(pdg, if own != 0.0 { own / pair } else { 0.0 });
        }
        Self { species, flavour }
    }

    /// Fraction of the composite flux carried by a probe species.
    pub fn species_fraction(&self, pdg: i32) -> f64 {
        self.species.get(&pdg).copied().unwrap_or(0.0)
    }

    /// Fraction within the probe's particle/antiparticle flavour pair.
    pub fn flavour_fraction(&self, pdg: i32) -> f64 {
        self.flavour.get(&pdg).copied().unwrap_or(0.0)
    }
}
