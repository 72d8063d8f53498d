//! Simulators - continuous, alternating and focused fall sequences

use super::constants::{ALTERNATING_MAX_ATTEMPTS, CONTINUOUS_MAX_ATTEMPTS, MINIMUM_MAX_ATTEMPTS};
use super::step::{Participant, SequenceOutcome, SequenceState};
use crate::redeploy::is_cost_exhausted;

/// One unit falls repeatedly until the pool is empty
pub fn simulate_continuous(unit: Participant<'_>, state: SequenceState) -> SequenceOutcome {
    run_sequence(&[unit], state, CONTINUOUS_MAX_ATTEMPTS)
}

/// Two units fall in strict turn order: first, second, first, ...
pub fn simulate_alternating(
    first: Participant<'_>,
    second: Participant<'_>,
    state: SequenceState,
) -> SequenceOutcome {
    run_sequence(&[first, second], state, ALTERNATING_MAX_ATTEMPTS)
}

/// Only `unit` ever falls, starting from a full team cost pool
pub fn simulate_minimum(unit: Participant<'_>) -> SequenceOutcome {
    run_sequence(&[unit], SequenceState::full_pool(), MINIMUM_MAX_ATTEMPTS)
}

/// Cycle through `units`, one fall per attempt
///
/// The first attempt is always logged, so a sequence started on an empty
/// pool still carries one "cannot deploy" entry.
fn run_sequence(
    units: &[Participant<'_>],
    state: SequenceState,
    max_attempts: u32,
) -> SequenceOutcome {
    let mut outcome = SequenceOutcome::empty(state);
    if units.is_empty() {
        return outcome;
    }

    for (attempt, unit) in units.iter().cycle().take(max_attempts as usize).enumerate() {
        if attempt > 0 && is_cost_exhausted(outcome.state.remaining_cost) {
            return outcome;
        }
        let step = outcome.state.fall(*unit);
        outcome.push(step);
    }

    if !is_cost_exhausted(outcome.state.remaining_cost) {
        log::debug!(
            "sequence stopped after {} attempts with {:.1} cost left",
            max_attempts,
            outcome.state.remaining_cost
        );
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redeploy::RedeployNote;
    use crate::types::{CharRole, Character, Cost};

    #[test]
    fn test_continuous_three_cost_from_full_pool() {
        let alpha = Character::new("Alpha", 3000, Cost::Three);
        let outcome = simulate_continuous(Participant::player(&alpha), SequenceState::full_pool());

        // 6.0 -> 3.0 (full HP) -> 0.0 (no HP)
        assert_eq!(outcome.sequence.len(), 2);
        assert_eq!(outcome.total_hp, 3000);
        assert_eq!(outcome.sequence[0].hp_gained, 3000);
        assert_eq!(outcome.sequence[1].hp_gained, 0);
        assert!(outcome.state.remaining_cost.abs() < f64::EPSILON);
        assert_eq!(outcome.sequence[1].fall_count, 2);
    }

    #[test]
    fn test_alternating_order() {
        let a = Character::new("A", 1000, Cost::OneFive);
        let b = Character::new("B", 1200, Cost::OneFive);
        let outcome = simulate_alternating(
            Participant::player(&a),
            Participant::partner(&b),
            SequenceState::full_pool(),
        );

        let names: Vec<&str> = outcome.sequence.iter().map(|s| s.char_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "A", "B"]);

        let roles: Vec<CharRole> = outcome.sequence.iter().map(|s| s.char_type).collect();
        assert_eq!(
            roles,
            vec![CharRole::Player, CharRole::Partner, CharRole::Player, CharRole::Partner]
        );

        // 1000 + 1200 + 1000 + 0
        assert_eq!(outcome.total_hp, 3200);
        let turns: Vec<u32> = outcome.sequence.iter().map(|s| s.turn).collect();
        assert_eq!(turns, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_minimum_focuses_one_unit() {
        let beta = Character::new("Beta", 2000, Cost::OneFive);
        let outcome = simulate_minimum(Participant::partner(&beta));

        // 6.0 -> 4.5 -> 3.0 -> 1.5 at full HP, then the last fall empties the pool
        assert_eq!(outcome.sequence.len(), 4);
        assert_eq!(outcome.total_hp, 6000);
        let remaining: Vec<String> = outcome
            .sequence
            .iter()
            .map(|s| s.remaining_cost_label())
            .collect();
        assert_eq!(remaining, vec!["4.5", "3.0", "1.5", "0.0"]);
        assert!(outcome.sequence.iter().all(|s| s.char_type == CharRole::Partner));
    }

    #[test]
    fn test_empty_pool_logs_one_entry() {
        let alpha = Character::new("Alpha", 3000, Cost::Three);
        let outcome = simulate_continuous(Participant::player(&alpha), SequenceState::new(0.0));

        assert_eq!(outcome.sequence.len(), 1);
        assert_eq!(outcome.total_hp, 0);
        assert_eq!(outcome.sequence[0].notes, vec![RedeployNote::CannotDeploy]);
    }

    #[test]
    fn test_attempt_bound_truncates() {
        // A pool far beyond a real match still stops at the bound
        let beta = Character::new("Beta", 2000, Cost::OneFive);
        let outcome = simulate_continuous(Participant::player(&beta), SequenceState::new(100.0));

        assert_eq!(outcome.sequence.len(), CONTINUOUS_MAX_ATTEMPTS as usize);
        assert_eq!(outcome.total_hp, 2000 * CONTINUOUS_MAX_ATTEMPTS);
        assert!(outcome.state.remaining_cost > 90.0);
    }

    #[test]
    fn test_continues_turn_numbering() {
        let alpha = Character::new("Alpha", 3000, Cost::Three);
        let mut state = SequenceState::new(3.0);
        state.next_turn = 3;
        state.falls.player = 1;

        let outcome = simulate_continuous(Participant::player(&alpha), state);
        assert_eq!(outcome.sequence[0].turn, 3);
        assert_eq!(outcome.sequence[0].fall_count, 2);
        assert_eq!(outcome.state.next_turn, 4);
    }
}
