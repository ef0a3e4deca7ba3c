//! Single-round combat resolution
//!
//! A round is a pure pass over the roster: no engine-side state survives
//! between rounds. The iteration order and removal policy are part of the
//! observable behavior and must not change:
//!
//! - the roster is walked in reverse registration order (latest join first)
//! - an eliminated combatant is swap-removed, so the roster's tail entry
//!   (already evaluated this round) drops into the vacated slot
//! - the moment the roster shrinks to one, the round ends and every
//!   not-yet-evaluated combatant is left untouched

use tracing::debug;

use crate::combatant::{CombatantRegistry, CombatantState};
use crate::core::constants::{ATTRIBUTE_COUNT, MIN_HEALTH};
use crate::core::types::CombatantId;
use crate::modifiers::{ModifierTable, Scenario};
use crate::randomness::RoundDraws;

/// Result of resolving one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// More than one combatant remains; the next round must be requested
    Continuing,
    /// Exactly one combatant remains; the engagement is over
    Survivor(CombatantId),
}

/// Combatants eliminated this round, in evaluation order
#[derive(Debug, Clone, Default)]
pub struct RoundReport {
    pub eliminated: Vec<CombatantId>,
}

/// Resolve one combat round against a fulfilled draw vector
///
/// Mutates combatant healths through the registry and shrinks `roster` as
/// eliminations land. Eliminated combatants revert to NotReady with health
/// restored, making them re-eligible for future engagements.
pub fn resolve_round(
    roster: &mut Vec<CombatantId>,
    registry: &mut CombatantRegistry,
    table: &ModifierTable,
    scenario: Scenario,
    draws: &RoundDraws,
) -> (RoundOutcome, RoundReport) {
    let mut report = RoundReport::default();

    let mut index = roster.len();
    while index > 0 {
        index -= 1;
        if index >= roster.len() {
            continue;
        }
        let combatant_id = roster[index];
        let eliminated = apply_draws(registry, combatant_id, table, scenario, draws);

        if eliminated {
            roster.swap_remove(index);
            report.eliminated.push(combatant_id);
            if let Some(combatant) = registry.get_mut(combatant_id) {
                combatant.reset();
            }
            debug!(combatant = combatant_id.0, "combatant eliminated");

            if roster.len() == 1 {
                return (RoundOutcome::Survivor(roster[0]), report);
            }
        }
    }

    (RoundOutcome::Continuing, report)
}

/// Run one combatant's attribute checks; returns true if it was eliminated
fn apply_draws(
    registry: &mut CombatantRegistry,
    combatant_id: CombatantId,
    table: &ModifierTable,
    scenario: Scenario,
    draws: &RoundDraws,
) -> bool {
    let Some(combatant) = registry.get_mut(combatant_id) else {
        return false;
    };
    debug_assert_eq!(combatant.state, CombatantState::InEngagement);

    for attribute in 0..ATTRIBUTE_COUNT {
        let adjusted = table.adjusted(scenario, attribute, combatant.attributes[attribute]);
        if draws[attribute] > adjusted {
            if combatant.health > MIN_HEALTH {
                combatant.health -= 1;
            } else {
                // At the floor: this hit eliminates, remaining attributes
                // are not evaluated.
                return true;
            }
        }
    }
    false
}
