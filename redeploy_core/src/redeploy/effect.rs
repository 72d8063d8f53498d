//! RedeployResult - HP and cost outcome of a single redeployment

use super::is_cost_exhausted;
use crate::types::Character;
use serde::{Deserialize, Serialize};

/// Annotation attached to a redeploy for display
///
/// Renderers translate these into localized text. Nothing in this crate
/// branches on them except through the helper methods on [`RedeployResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "cost", rename_all = "snake_case")]
pub enum RedeployNote {
    /// Opening deployment of both units (turn 0)
    StartingHp,
    /// Returned with reduced HP, converted at the given cost
    CostOver(f64),
    /// Team cost left after this fall is below the unit's full cost
    EffectiveCostOver(f64),
    /// The pool is empty after this fall
    ZeroRemainingCost,
    /// The pool was already empty; nothing was deployed
    CannotDeploy,
    /// Inputs were not usable numbers
    CalculationError,
}

/// Outcome of one redeploy against the team cost pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeployResult {
    /// HP the unit comes back with
    pub hp_gained: u32,
    /// Cost taken out of the pool
    pub cost_consumed: f64,
    /// Display annotations, in order
    pub notes: Vec<RedeployNote>,
    /// Pool after this redeploy, floored at 0
    pub remaining_cost_after_consumption: f64,
}

impl RedeployResult {
    /// Terminal result for an empty pool
    fn cannot_deploy(remaining_cost: f64) -> Self {
        RedeployResult {
            hp_gained: 0,
            cost_consumed: 0.0,
            notes: vec![RedeployNote::CannotDeploy],
            remaining_cost_after_consumption: remaining_cost,
        }
    }

    fn calculation_error() -> Self {
        RedeployResult {
            hp_gained: 0,
            cost_consumed: 0.0,
            notes: vec![RedeployNote::CalculationError],
            remaining_cost_after_consumption: 0.0,
        }
    }

    /// Whether the pool was empty before this redeploy
    pub fn is_cannot_deploy(&self) -> bool {
        self.notes.contains(&RedeployNote::CannotDeploy)
    }

    pub fn is_error(&self) -> bool {
        self.notes.contains(&RedeployNote::CalculationError)
    }

    /// Cost the HP was converted at, if the unit came back short
    pub fn cost_over(&self) -> Option<f64> {
        self.notes.iter().find_map(|note| match note {
            RedeployNote::CostOver(cost) => Some(*cost),
            _ => None,
        })
    }
}

/// Calculate the effect of redeploying `character` with `remaining_team_cost` left
///
/// Two HP policies:
/// - team scenario: the cost left *after* this unit's own cost is paid decides
///   the HP fraction, `min(max(0, remaining - cost), cost) / cost`
/// - direct allocation: the remaining cost itself is the allocation,
///   `min(remaining, cost) / cost`
///
/// Cost consumed is the full unit cost when the pool covers it, otherwise
/// whatever is left. Never fails: a non-finite or negative pool yields a
/// zeroed result tagged [`RedeployNote::CalculationError`].
pub fn calculate_redeploy_effect(
    character: &Character,
    remaining_team_cost: f64,
    is_team_scenario: bool,
) -> RedeployResult {
    if !remaining_team_cost.is_finite() || remaining_team_cost < 0.0 {
        return RedeployResult::calculation_error();
    }
    // An empty pool carries exactly one note, whatever else would apply
    if is_cost_exhausted(remaining_team_cost) {
        return RedeployResult::cannot_deploy(remaining_team_cost);
    }

    let full_cost = character.cost.value();

    let cost_for_hp = if is_team_scenario {
        (remaining_team_cost - full_cost).max(0.0).min(full_cost)
    } else {
        remaining_team_cost
    };
    let effective_cost = cost_for_hp.clamp(0.0, full_cost);

    let hp_gained = if full_cost <= 0.0 {
        0
    } else {
        (f64::from(character.hp) * effective_cost / full_cost).round() as u32
    };

    let cost_consumed = if remaining_team_cost >= full_cost {
        full_cost
    } else {
        remaining_team_cost
    };
    let remaining_after = (remaining_team_cost - cost_consumed).max(0.0);

    let mut notes = Vec::new();
    if effective_cost < full_cost {
        notes.push(RedeployNote::CostOver(effective_cost));
    }
    if is_team_scenario && !is_cost_exhausted(remaining_after) && remaining_after < full_cost {
        notes.push(RedeployNote::EffectiveCostOver(remaining_after));
    }
    if is_cost_exhausted(remaining_after) {
        notes.push(RedeployNote::ZeroRemainingCost);
    }

    RedeployResult {
        hp_gained,
        cost_consumed,
        notes,
        remaining_cost_after_consumption: remaining_after,
    }
}

/// HP and cost of a redeploy the player chose to spend `allocated_cost` on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleRedeployResult {
    pub calculated_hp: u32,
    pub actual_cost_consumed: f64,
    pub notes: Vec<RedeployNote>,
}

/// Direct-allocation redeploy used by the standalone redeploy simulator
pub fn calculate_single_redeploy_hp(character: &Character, allocated_cost: f64) -> SingleRedeployResult {
    let effect = calculate_redeploy_effect(character, allocated_cost, false);
    SingleRedeployResult {
        calculated_hp: effect.hp_gained,
        actual_cost_consumed: effect.cost_consumed,
        notes: effect.notes,
    }
}
