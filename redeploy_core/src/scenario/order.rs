//! Who falls first

use crate::sequence::Participant;
use std::cmp::Ordering;

/// Ordering policy for the first fall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOrder {
    /// Higher cost first, then higher HP
    HigherFirst,
    /// Lower cost first, then lower HP
    LowerFirst,
}

/// Split a pair into (first faller, second faller)
///
/// Precedence: cost, then HP, then the player over the partner.
pub fn fall_order<'a>(
    player: Participant<'a>,
    partner: Participant<'a>,
    order: FallOrder,
) -> (Participant<'a>, Participant<'a>) {
    let p = player.character;
    let q = partner.character;
    let by_stats = p.cost.cmp(&q.cost).then(p.hp.cmp(&q.hp));

    let player_first = match order {
        FallOrder::HigherFirst => by_stats != Ordering::Less,
        FallOrder::LowerFirst => by_stats != Ordering::Greater,
    };

    if player_first {
        (player, partner)
    } else {
        (partner, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Character, Cost};

    fn names<'a>(pair: (Participant<'a>, Participant<'a>)) -> (&'a str, &'a str) {
        (pair.0.character.name.as_str(), pair.1.character.name.as_str())
    }

    #[test]
    fn test_cost_decides_first() {
        let p = Character::new("P", 2000, Cost::OneFive);
        let q = Character::new("Q", 3000, Cost::Three);
        let (pp, qq) = (Participant::player(&p), Participant::partner(&q));

        assert_eq!(names(fall_order(pp, qq, FallOrder::HigherFirst)), ("Q", "P"));
        assert_eq!(names(fall_order(pp, qq, FallOrder::LowerFirst)), ("P", "Q"));
    }

    #[test]
    fn test_hp_breaks_cost_tie() {
        let p = Character::new("P", 1000, Cost::OneFive);
        let q = Character::new("Q", 1200, Cost::OneFive);
        let (pp, qq) = (Participant::player(&p), Participant::partner(&q));

        assert_eq!(names(fall_order(pp, qq, FallOrder::HigherFirst)), ("Q", "P"));
        assert_eq!(names(fall_order(pp, qq, FallOrder::LowerFirst)), ("P", "Q"));
    }

    #[test]
    fn test_player_breaks_full_tie() {
        let p = Character::new("P", 2000, Cost::Two);
        let q = Character::new("Q", 2000, Cost::Two);
        let (pp, qq) = (Participant::player(&p), Participant::partner(&q));

        assert_eq!(names(fall_order(pp, qq, FallOrder::HigherFirst)), ("P", "Q"));
        assert_eq!(names(fall_order(pp, qq, FallOrder::LowerFirst)), ("P", "Q"));
    }
}
