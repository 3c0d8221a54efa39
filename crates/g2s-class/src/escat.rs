//! Electron-scattering variant of the mode mapping.
//!
//! Electron runs carry no current distinction and no resonance-charge
//! bookkeeping, so the mapping collapses to one mode per reaction family,
//! sign-scaled by the probe.

use crate::classifier::reaction;

/// Maps a reaction code onto the electron-scattering mode numbering.
///
/// `probe_pdg` is the PDG code in slot 0; a negative value (positron beam)
/// negates the mode. Unknown reaction codes map to `0`.
pub fn neut_reaction_code_escat(reaction_code: i32, probe_pdg: i32) -> i32 {
    let sign = if probe_pdg > 0 { 1 } else { -1 };
    let mode = match reaction_code {
        reaction::QE => 1,
        reaction::DELTA => 11,
        reaction::RES_FIRST..=reaction::RES_LAST => 4,
        reaction::ONE_PI_BKG_NUCLEON | reaction::ONE_PI_BKG_DELTA => 10,
        reaction::DIS => 26,
        reaction::TWO_NUCLEON_A | reaction::TWO_NUCLEON_B => 2,
        reaction::MULTI_PI => 21,
        _ => 0,
    };
    sign * mode
}
