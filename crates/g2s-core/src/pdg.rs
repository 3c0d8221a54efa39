//! PDG numbering constants used throughout the converter.

/// Proton.
pub const PROTON: i32 = 2212;
/// Neutron.
pub const NEUTRON: i32 = 2112;
/// Positive pion.
pub const PI_PLUS: i32 = 211;
/// Neutral pion.
pub const PI_ZERO: i32 = 111;
/// Negative pion.
pub const PI_MINUS: i32 = -211;

/// Muon neutrino.
pub const NU_MU: i32 = 14;
/// Electron neutrino.
pub const NU_E: i32 = 12;

/// True for the three pion species.
pub fn is_pion(pdg: i32) -> bool {
    matches!(pdg, PI_PLUS | PI_ZERO | PI_MINUS)
}

/// True for protons and neutrons.
pub fn is_nucleon(pdg: i32) -> bool {
    matches!(pdg, PROTON | NEUTRON)
}

/// Nuclear PDG code in the 10LZZZAAAI convention.
pub fn nuclear_pdg(z: i32, a: i32) -> i32 {
    1_000_000_000 + z * 10_000 + a * 10
}
