//! GiBUU species-code ↔ PDG translation.
//!
//! The GiBUU transport code numbers particles with its own scheme
//! (<https://gibuu.hepforge.org/trac/wiki/ParticleIDs>): baryons 1–61,
//! mesons 101–122, leptons 901/902/911–913, photon 999. Charge states of a
//! species share one code, so the electric charge is needed to pick the
//! PDG member.

/// Simulator species code of the nucleon.
pub const NUCLEON: i32 = 1;
/// Simulator species code of the Δ(1232) resonance.
pub const DELTA: i32 = 2;
/// Simulator species code of the pion.
pub const PION: i32 = 101;
/// Simulator species code of the η meson.
pub const ETA: i32 = 102;
/// Simulator species code of the σ meson.
pub const SIGMA_MESON: i32 = 104;

/// Result of a species-to-PDG lookup.
///
/// Two distinct "no PDG" answers exist and must not be conflated while the
/// event is being assembled: [`PdgLookup::NoEntry`] marks a documented
/// species with no PDG assignment, [`PdgLookup::Unknown`] marks a code the
/// table has never heard of. Both collapse to `0` in the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdgLookup {
    /// The species maps onto this PDG code.
    Mapped(i32),
    /// A known species with no entry in the PDG tables.
    NoEntry,
    /// An unrecognised species code.
    Unknown,
}

impl PdgLookup {
    /// Collapses both "no PDG" sentinels to `0`, the output convention.
    pub fn pdg_or_zero(self) -> i32 {
        match self {
            PdgLookup::Mapped(pdg) => pdg,
            PdgLookup::NoEntry | PdgLookup::Unknown => 0,
        }
    }

    /// Raw sentinel encoding: PDG, `-1` for [`PdgLookup::NoEntry`], `0` for
    /// [`PdgLookup::Unknown`].
    pub fn raw(self) -> i32 {
        match self {
            PdgLookup::Mapped(pdg) => pdg,
            PdgLookup::NoEntry => -1,
            PdgLookup::Unknown => 0,
        }
    }

    /// True when the lookup found a real PDG code.
    pub fn is_mapped(self) -> bool {
        matches!(self, PdgLookup::Mapped(_))
    }
}

/// Picks a PDG member from the four Δ-like charge states, defaulting to the
/// neutral member on out-of-range charges.
fn quartet(charge: i32, pp: i32, p: i32, zero: i32, minus: i32) -> i32 {
    match charge {
        2 => pp,
        1 => p,
        0 => zero,
        -1 => minus,
        _ => zero,
    }
}

/// Picks a PDG member from a (+, 0, −) isospin triplet.
fn triplet(charge: i32, plus: i32, zero: i32, minus: i32) -> i32 {
    if charge == 0 {
        zero
    } else if charge > 0 {
        plus
    } else {
        minus
    }
}

/// Converts a GiBUU species code plus electric charge to a PDG code.
pub fn species_to_pdg(species: i32, charge: i32) -> PdgLookup {
    use PdgLookup::{Mapped, NoEntry, Unknown};

    let pdg = match species {
        // Baryons.
        1 => {
            if charge > 0 {
                2212
            } else {
                2112
            }
        }
        2 => quartet(charge, 2224, 2214, 2114, 1114),
        3 => positive_or(charge, 202212, 202112),
        4 => positive_or(charge, 102212, 102112),
        5 => positive_or(charge, 122212, 122112),
        7 => positive_or(charge, 102214, 102114),
        8 => positive_or(charge, 112214, 112114),
        10 => positive_or(charge, 102216, 102116),
        12 => positive_or(charge, 212212, 212112),
        14 => positive_or(charge, 212214, 212114),
        16 => positive_or(charge, 202216, 202116),
        19 => quartet(charge, 112222, 112212, 112112, 111112),
        21 => quartet(charge, 122224, 122214, 122114, 121114),
        26 => quartet(charge, 222222, 222212, 222112, 221112),
        27 => quartet(charge, 202224, 202214, 202114, 201114),
        28 => quartet(charge, 222224, 222214, 222114, 221114),
        30 => quartet(charge, 212226, 212216, 212116, 211116),
        31 => quartet(charge, 202228, 202218, 202118, 201118),
        32 => 3122,
        33 => triplet(charge, 3222, 3212, 3112),
        34 => triplet(charge, 3224, 3214, 3114),
        35 | 36 => 102134,
        37 => 203122,
        38 => 103122,
        39 => 103124,
        40 => 213122,
        41 => 203126,
        42 => 103126,
        43 => triplet(charge, 103224, 103214, 103114),
        44 => triplet(charge, 103226, 103216, 103116),
        45 => triplet(charge, 203228, 203218, 203118),
        46 => 123122,
        47 => 213124,
        50 => triplet(charge, 203222, 203212, 203112),
        51 => triplet(charge, 113222, 113212, 113112),
        52 => triplet(charge, 203226, 203216, 203116),
        53 => positive_or(charge, 3322, 3312),
        54 => positive_or(charge, 3324, 3314),
        55 => 3334,
        56 => 4122,
        57 => triplet(charge, 4222, 4212, 4112),
        58 => triplet(charge, 4224, 4214, 4114),
        59 => positive_or(charge, 4232, 4132),
        60 => positive_or(charge, 4324, 4314),
        61 => 3334,

        // Mesons.
        101 => triplet(charge, 211, 111, -211),
        102 => 221,
        103 => triplet(charge, 213, 113, -213),
        104 => 9_000_221,
        105 => 223,
        106 => 331,
        107 => 333,
        108 => 441,
        109 => 443,
        110 => charged_or(charge, 321, 311),
        111 => charged_or(charge, -321, -311),
        112 => charged_or(charge, 323, 313),
        113 => charged_or(charge, -323, -313),
        114 => charged_or(charge, 411, 421),
        115 => charged_or(charge, -411, -421),
        116 => charged_or(charge, 413, 423),
        117 => charged_or(charge, -413, -423),
        118 => 431,
        119 => -431,
        120 => 433,
        121 => -433,
        122 => 225,

        // Leptons and the photon.
        901 => {
            if charge < 0 {
                11
            } else {
                -11
            }
        }
        902 => {
            if charge < 0 {
                13
            } else {
                -13
            }
        }
        911 => 12,
        912 => 14,
        913 => 16,
        -911 => -12,
        -912 => -14,
        -913 => -16,
        999 => 22,

        // Documented species with no PDG assignment, plus the undocumented
        // codes observed in GiBUU 2016 output.
        6 | 9 | 11 | 13 | 15 | 17 | 18 | 20 | 22 | 23 | 24 | 25 | 29 | 48 | 49 => {
            return NoEntry
        }
        201 | 202 | 232 | 233 | 234 => return NoEntry,

        _ => return Unknown,
    };
    Mapped(pdg)
}

/// Two-member multiplets split on the sign of the charge.
fn positive_or(charge: i32, plus: i32, other: i32) -> i32 {
    if charge > 0 {
        plus
    } else {
        other
    }
}

/// Two-member multiplets split on charged versus neutral.
fn charged_or(charge: i32, charged: i32, neutral: i32) -> i32 {
    if charge != 0 {
        charged
    } else {
        neutral
    }
}

/// Inverse lookup: PDG code back to the GiBUU species code, `0` when no
/// species maps onto the PDG code.
pub fn pdg_to_species(pdg: i32) -> i32 {
    match pdg {
        2212 | 2112 => 1,
        2224 | 2214 | 2114 | 1114 => 2,
        202212 | 202112 => 3,
        102212 | 102112 => 4,
        122212 | 122112 => 5,
        102214 | 102114 => 7,
        112214 | 112114 => 8,
        102216 | 102116 => 10,
        212212 | 212112 => 12,
        212214 | 212114 => 14,
        202216 | 202116 => 16,
        112222 | 112212 | 112112 | 111112 => 19,
        122224 | 122214 | 122114 | 121114 => 21,
        222222 | 222212 | 222112 | 221112 => 26,
        202224 | 202214 | 202114 | 201114 => 27,
        222224 | 222214 | 222114 | 221114 => 28,
        212226 | 212216 | 212116 | 211116 => 30,
        202228 | 202218 | 202118 | 201118 => 31,
        3122 => 32,
        3222 | 3212 | 3112 => 33,
        3224 | 3214 | 3114 => 34,
        102134 => 36,
        211 | 111 | -211 => 101,
        221 => 102,
        213 | 113 | -213 => 103,
        9_000_221 => 104,
        223 => 105,
        331 => 106,
        321 | 311 => 110,
        -321 | -311 => 111,
        323 | 313 => 112,
        11 | -11 => 901,
        13 | -13 => 902,
        12 => 911,
        14 => 912,
        16 => 913,
        -12 => -911,
        -14 => -912,
        -16 => -913,
        22 => 999,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_charge_states() {
        assert_eq!(species_to_pdg(2, 2), PdgLookup::Mapped(2224));
        assert_eq!(species_to_pdg(2, 1), PdgLookup::Mapped(2214));
        assert_eq!(species_to_pdg(2, 0), PdgLookup::Mapped(2114));
        assert_eq!(species_to_pdg(2, -1), PdgLookup::Mapped(1114));
        // Out-of-range charges default to the neutral member.
        assert_eq!(species_to_pdg(2, 5), PdgLookup::Mapped(2114));
    }

    #[test]
    fn unknown_species_is_not_an_error() {
        assert_eq!(species_to_pdg(9999, 1), PdgLookup::Unknown);
        assert_eq!(species_to_pdg(9999, 1).pdg_or_zero(), 0);
    }

    #[test]
    fn no_entry_collapses_to_zero() {
        assert_eq!(species_to_pdg(6, 1), PdgLookup::NoEntry);
        assert_eq!(species_to_pdg(6, 1).raw(), -1);
        assert_eq!(species_to_pdg(6, 1).pdg_or_zero(), 0);
    }

    #[test]
    fn inverse_covers_forward_nucleons_and_pions() {
        for (species, charge) in [(1, 1), (1, 0), (101, 1), (101, 0), (101, -1)] {
            let pdg = species_to_pdg(species, charge).pdg_or_zero();
            assert_eq!(pdg_to_species(pdg), species);
        }
    }
}
