//! Charge inference for Δ-resonance events.
//!
//! Older event files do not record the charge of the primary resonance, so
//! the single-pion mode has to be reconstructed from the ancestry forest.
//! The inference is a strictly ordered fallback chain; the first stage to
//! resolve wins, and the final stage always resolves, so the chain as a
//! whole always produces a nonzero mode.

use g2s_core::pdg;
use g2s_core::DiagSink;
use g2s_event::query::EventParticles;
use g2s_event::species;

use crate::classifier::reaction;

/// Single-pion mode resolved from a pion/nucleon pairing.
struct ResMode {
    code: i32,
    /// The pairing was resolvable but not watertight (missing nucleon, or a
    /// π0 against a neutron); worth an audit trail entry.
    ambiguous: bool,
}

/// Maps a decay pion plus its nucleon partner onto a single-pion mode.
///
/// A missing partner is passed as `0`: π+ still resolves (to the proton
/// channel) but is flagged, π− never resolves.
fn pion_to_res_mode(pion_pdg: i32, nucleon_pdg: i32) -> Option<ResMode> {
    let mut ambiguous = nucleon_pdg == 0;
    let code = match pion_pdg {
        pdg::PI_PLUS => {
            if nucleon_pdg == pdg::NEUTRON {
                13
            } else {
                11
            }
        }
        pdg::PI_ZERO => {
            if nucleon_pdg == pdg::NEUTRON {
                ambiguous = true;
            }
            12
        }
        _ => return None,
    };
    Some(ResMode { code, ambiguous })
}

/// Working state of the fallback chain.
struct DeltaInference<'a, 'd> {
    parts: &'a EventParticles,
    diags: &'d mut DiagSink,
    /// Nucleon PDG found by the first stage; reused by the final fallback.
    candidate_nucleon: i32,
}

type Stage = fn(&mut DeltaInference<'_, '_>) -> Option<i32>;

/// The ordered fallback stages. First nonzero result wins; the
/// nucleon-only fallback runs after all of these and cannot fail.
const STAGES: [Stage; 3] = [
    first_generation_pairing,
    decay_pion_same_generation,
    decay_pion_shared_parent,
];

/// Pair any first-generation pion with a first-generation Δ-decay nucleon.
fn first_generation_pairing(inf: &mut DeltaInference<'_, '_>) -> Option<i32> {
    let members = inf.parts.generation_members(1);
    inf.candidate_nucleon = members
        .iter()
        .find(|m| m.mother == species::DELTA && pdg::is_nucleon(m.pdg))
        .map(|m| m.pdg)
        .unwrap_or(0);

    for member in &members {
        if let Some(mode) = pion_to_res_mode(member.pdg, inf.candidate_nucleon) {
            if mode.ambiguous {
                inf.diags.warn_with(
                    format!(
                        "first-generation pairing resolved mode {} with nucleon {}",
                        mode.code, inf.candidate_nucleon,
                    ),
                    inf.parts.describe(reaction::DELTA),
                );
            }
            return Some(mode.code);
        }
    }
    None
}

/// Pair each final-state decay pion with a Δ-decay nucleon from the same
/// generation. Pions from η/σ decays reclassify the whole event as
/// multi-pion.
fn decay_pion_same_generation(inf: &mut DeltaInference<'_, '_>) -> Option<i32> {
    for decay_pi in inf.parts.final_state_decay_pions() {
        if decay_pi.parent != species::DELTA {
            inf.diags.warn(format!(
                "Delta event produced a decay pion whose parent ({}) is not a Delta",
                decay_pi.parent,
            ));
            if decay_pi.parent == species::ETA || decay_pi.parent == species::SIGMA_MESON {
                return Some(21);
            }
            continue;
        }
        let nucleon = inf
            .parts
            .generation_members(decay_pi.generation)
            .iter()
            .find(|m| m.mother == species::DELTA && pdg::is_nucleon(m.pdg))
            .map(|m| m.pdg)
            .unwrap_or(0);
        if let Some(mode) = pion_to_res_mode(decay_pi.pdg, nucleon) {
            if mode.ambiguous {
                inf.diags.warn_with(
                    format!(
                        "decay-pion pairing resolved mode {} with same-generation nucleon {}",
                        mode.code, nucleon,
                    ),
                    inf.parts.describe(reaction::DELTA),
                );
            }
            return Some(mode.code);
        }
    }
    None
}

/// Pair each final-state decay pion with a same-generation nucleon that
/// shares the pion's exact decay parent.
fn decay_pion_shared_parent(inf: &mut DeltaInference<'_, '_>) -> Option<i32> {
    for decay_pi in inf.parts.final_state_decay_pions() {
        let nucleon = inf
            .parts
            .generation_members(decay_pi.generation)
            .iter()
            .find(|m| m.mother == decay_pi.parent && pdg::is_nucleon(m.pdg))
            .map(|m| m.pdg)
            .unwrap_or(0);
        if let Some(mode) = pion_to_res_mode(decay_pi.pdg, nucleon) {
            inf.diags.warn_with(
                format!(
                    "shared-parent pairing resolved mode {} with nucleon {} from decay parent {}",
                    mode.code, nucleon, decay_pi.parent,
                ),
                inf.parts.describe(reaction::DELTA),
            );
            return Some(mode.code);
        }
    }
    None
}

/// Last resort: guess from the lowest-generation Δ-decay nucleon.
fn nucleon_only_fallback(inf: &mut DeltaInference<'_, '_>) -> i32 {
    if inf.candidate_nucleon == 0 {
        inf.candidate_nucleon = inf
            .parts
            .delta_decay_nucleons()
            .first()
            .map(|&(_, nucleon)| nucleon)
            .unwrap_or(0);
    }
    let code = if inf.candidate_nucleon == pdg::PROTON {
        11
    } else {
        12
    };
    inf.diags.warn_with(
        format!(
            "giving up on this Delta resonance, returning {} (found nucleon: {})",
            code, inf.candidate_nucleon,
        ),
        inf.parts.describe(reaction::DELTA),
    );
    code
}

/// Infers the single-pion mode of a Δ event with unknown production charge.
///
/// Always returns a nonzero mode: the stages in [`STAGES`] run in order
/// with early return, and the nucleon-only fallback closes the chain.
pub fn infer_delta_mode(parts: &EventParticles, diags: &mut DiagSink) -> i32 {
    let mut inference = DeltaInference {
        parts,
        diags,
        candidate_nucleon: 0,
    };
    for stage in STAGES {
        if let Some(mode) = stage(&mut inference) {
            return mode;
        }
    }
    nucleon_only_fallback(&mut inference)
}
