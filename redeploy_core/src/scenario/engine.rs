//! Scenario engine - builds the four team HP scenarios for a pair

use super::order::{fall_order, FallOrder};
use super::result::{ContinuationStrategy, Scenario, ScenarioKind, TeamHpScenarios};
use crate::redeploy::constants::MAX_TEAM_COST;
use crate::redeploy::is_cost_exhausted;
use crate::sequence::{
    simulate_alternating, simulate_continuous, simulate_minimum, Participant, SequenceOutcome,
    SequenceState, SequenceStep,
};
use crate::types::Character;

/// Calculate ideal, compromise, bomb and lowest team HP for a pair
///
/// Returns `None` when either side has no character selected. Every call
/// recomputes from scratch; identical inputs give identical results.
pub fn calculate_team_hp_scenarios(
    player: Option<&Character>,
    partner: Option<&Character>,
) -> Option<TeamHpScenarios> {
    let player = Participant::player(player?);
    let partner = Participant::partner(partner?);

    let (ideal_first, ideal_second) = fall_order(player, partner, FallOrder::HigherFirst);
    let (low_first, low_second) = fall_order(player, partner, FallOrder::LowerFirst);

    Some(TeamHpScenarios {
        ideal_scenario: two_fall_scenario(ScenarioKind::Ideal, ideal_first, ideal_second),
        compromise_scenario: two_fall_scenario(ScenarioKind::Compromise, low_first, low_second),
        bomb_scenario: bomb_scenario(player, partner, low_first),
        lowest_scenario: lowest_scenario(player, partner),
    })
}

/// Opening falls in a fixed order, then the best continuation
fn two_fall_scenario(kind: ScenarioKind, first: Participant<'_>, second: Participant<'_>) -> Scenario {
    let starting_hp = first.character.hp.saturating_add(second.character.hp);
    let mut outcome = SequenceOutcome::empty(SequenceState::full_pool());
    outcome.push(SequenceStep::starting(starting_hp, MAX_TEAM_COST));

    for unit in [first, second] {
        if is_cost_exhausted(outcome.state.remaining_cost) {
            break;
        }
        let step = outcome.state.fall(unit);
        outcome.push(step);
    }

    let mut continuation = None;
    if !is_cost_exhausted(outcome.state.remaining_cost) {
        let (strategy, rest) = best_continuation(first, second, outcome.state);
        log::debug!(
            "{} scenario continues with {:?} (+{} hp)",
            kind,
            strategy,
            rest.total_hp
        );
        outcome.total_hp = outcome.total_hp.saturating_add(rest.total_hp);
        outcome.sequence.extend(rest.sequence);
        continuation = Some(strategy);
    }

    let scenario = Scenario::new(kind, &first.character.name, outcome.total_hp, outcome.sequence);
    match continuation {
        Some(strategy) => scenario.with_continuation(strategy),
        None => scenario,
    }
}

/// Highest-yield continuation; ties keep the earlier candidate
fn best_continuation(
    first: Participant<'_>,
    second: Participant<'_>,
    state: SequenceState,
) -> (ContinuationStrategy, SequenceOutcome) {
    let candidates = [
        (
            ContinuationStrategy::Alternating,
            simulate_alternating(first, second, state),
        ),
        (
            ContinuationStrategy::ContinuousFirst,
            simulate_continuous(first, state),
        ),
        (
            ContinuationStrategy::ContinuousSecond,
            simulate_continuous(second, state),
        ),
    ];

    let mut best: Option<(ContinuationStrategy, SequenceOutcome)> = None;
    for (strategy, outcome) in candidates {
        let better = best
            .as_ref()
            .map_or(true, |(_, current)| outcome.total_hp > current.total_hp);
        if better {
            best = Some((strategy, outcome));
        }
    }
    best.unwrap_or_else(|| (ContinuationStrategy::Alternating, SequenceOutcome::empty(state)))
}

/// Both units fielded, only `target` ever falls
fn bomb_scenario(player: Participant<'_>, partner: Participant<'_>, target: Participant<'_>) -> Scenario {
    let starting_hp = player.character.hp.saturating_add(partner.character.hp);
    focused_scenario(ScenarioKind::Bomb, target, starting_hp)
}

/// Each unit absorbing every fall alone; the smaller total wins
fn lowest_scenario(player: Participant<'_>, partner: Participant<'_>) -> Scenario {
    let via_player = focused_scenario(ScenarioKind::Lowest, player, player.character.hp);
    let via_partner = focused_scenario(ScenarioKind::Lowest, partner, partner.character.hp);

    if via_partner.total_hp < via_player.total_hp {
        via_partner
    } else {
        via_player
    }
}

fn focused_scenario(kind: ScenarioKind, target: Participant<'_>, starting_hp: u32) -> Scenario {
    let falls = simulate_minimum(target);

    let mut sequence = Vec::with_capacity(falls.sequence.len() + 1);
    sequence.push(SequenceStep::starting(starting_hp, MAX_TEAM_COST));
    sequence.extend(falls.sequence);

    let total_hp = starting_hp.saturating_add(falls.total_hp);
    Scenario::new(kind, &target.character.name, total_hp, sequence)
}
