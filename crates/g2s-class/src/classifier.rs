//! Primary reaction-code to NEUT mode classification.

use g2s_core::{ConvError, DiagSink, ErrorInfo};
use g2s_core::pdg;
use g2s_event::query::EventParticles;

use crate::heuristic::infer_delta_mode;

/// Simulator primary reaction codes.
pub mod reaction {
    /// Quasi-elastic scattering.
    pub const QE: i32 = 1;
    /// Δ(1232) production.
    pub const DELTA: i32 = 2;
    /// First of the higher-resonance codes.
    pub const RES_FIRST: i32 = 3;
    /// Last of the higher-resonance codes.
    pub const RES_LAST: i32 = 31;
    /// Non-resonant single-pion background (π at the vertex).
    pub const ONE_PI_BKG_NUCLEON: i32 = 32;
    /// Non-resonant single-pion background (π in the exchange).
    pub const ONE_PI_BKG_DELTA: i32 = 33;
    /// Deep inelastic scattering.
    pub const DIS: i32 = 34;
    /// Two-nucleon knockout, pp/pn.
    pub const TWO_NUCLEON_A: i32 = 35;
    /// Two-nucleon knockout, nn/np.
    pub const TWO_NUCLEON_B: i32 = 36;
    /// Multi-pion production.
    pub const MULTI_PI: i32 = 37;
}

/// Inputs to one classification call.
///
/// Slot 0 of the particle columns is always the incoming probe; the sign of
/// its PDG code separates particle from antiparticle beams.
#[derive(Debug)]
pub struct ClassifyInput<'a> {
    /// Simulator primary reaction code.
    pub reaction_code: i32,
    /// Assembled particle columns.
    pub particles: &'a EventParticles,
    /// Charged-current (true) or neutral-current event.
    pub is_charged_current: bool,
    /// Slot of the initial-state struck nucleon, when known.
    pub struck_nucleon: Option<usize>,
    /// Charge of the primary produced particle, when recorded.
    pub primary_prod_charge: Option<i32>,
}

/// Classifies one event into the NEUT mode numbering.
///
/// Returns `Ok(0)` with a diagnostic dump when the reaction code lies
/// outside the known taxonomy. A recorded resonance charge that is
/// impossible for the event's current/beam combination is fatal: it means
/// corrupted upstream data or an unmodelled channel, and the caller decides
/// whether to abort the run or skip the event.
pub fn neut_reaction_code(
    input: &ClassifyInput<'_>,
    diags: &mut DiagSink,
) -> Result<i32, ConvError> {
    let is_nu = input.particles.probe_pdg() > 0;
    let sign = if is_nu { 1 } else { -1 };
    let nc = !input.is_charged_current;

    let code = match input.reaction_code {
        reaction::QE => {
            if input.is_charged_current {
                sign
            } else {
                let struck = input
                    .struck_nucleon
                    .and_then(|slot| input.particles.pdg(slot))
                    .unwrap_or(0);
                sign * if struck == pdg::PROTON { 51 } else { 52 }
            }
        }
        reaction::DELTA => match input.primary_prod_charge {
            None => sign * (infer_delta_mode(input.particles, diags) + if nc { 20 } else { 0 }),
            // The known-charge tables are pre-signed; antineutrino rows
            // already carry their minus sign.
            Some(charge) => delta_mode_from_charge(input, is_nu, charge)?,
        },
        code @ reaction::RES_FIRST..=reaction::RES_LAST => {
            let charge = match input.primary_prod_charge {
                Some(charge @ -1..=2) => charge,
                Some(charge) => {
                    return Err(ConvError::Classify(
                        ErrorInfo::new(
                            "resonance-charge",
                            "higher resonance with a charge outside -1..=2",
                        )
                        .with_context("reaction_code", code.to_string())
                        .with_context("prod_charge", charge.to_string()),
                    ))
                }
                None => 0,
            };
            sign * (5 + charge + if nc { 43 } else { 0 })
        }
        reaction::ONE_PI_BKG_NUCLEON | reaction::ONE_PI_BKG_DELTA => {
            sign * (10 + if nc { 20 } else { 0 })
        }
        reaction::DIS => sign * (26 + if nc { 20 } else { 0 }),
        // 2p2h carries no NC offset, unlike every other channel; both
        // current types map onto +-2. Kept as observed, pending domain
        // review.
        reaction::TWO_NUCLEON_A | reaction::TWO_NUCLEON_B => sign * 2,
        reaction::MULTI_PI => sign * (21 + if nc { 20 } else { 0 }),
        unknown => {
            diags.warn_with(
                format!("no NEUT equivalent for reaction code {unknown}"),
                input.particles.describe(unknown),
            );
            0
        }
    };
    Ok(code)
}

/// Known-charge Δ tables, split by current and beam.
fn delta_mode_from_charge(
    input: &ClassifyInput<'_>,
    is_nu: bool,
    charge: i32,
) -> Result<i32, ConvError> {
    let mode = match (input.is_charged_current, is_nu, charge) {
        (true, true, 2) => Some(11),
        (true, true, 1) => Some(12),
        (true, false, 0) => Some(-12),
        (true, false, -1) => Some(-11),
        (false, true, 0) => Some(31),
        (false, true, 1) => Some(32),
        (false, false, 0) => Some(-31),
        (false, false, 1) => Some(-32),
        _ => None,
    };
    mode.ok_or_else(|| {
        ConvError::Classify(
            ErrorInfo::new("delta-charge", "unexpected Delta charge state")
                .with_context("charged_current", input.is_charged_current.to_string())
                .with_context("neutrino", is_nu.to_string())
                .with_context("prod_charge", charge.to_string()),
        )
    })
}
