//! SequenceStep - One entry of a scenario's fall log

use crate::redeploy::constants::MAX_TEAM_COST;
use crate::redeploy::{calculate_redeploy_effect, RedeployNote, RedeployResult};
use crate::types::{CharRole, Character};
use serde::{Deserialize, Serialize};

/// A unit taking part in a sequence, with the side it is labeled as
#[derive(Debug, Clone, Copy)]
pub struct Participant<'a> {
    pub character: &'a Character,
    pub role: CharRole,
}

impl<'a> Participant<'a> {
    pub fn new(character: &'a Character, role: CharRole) -> Self {
        Participant { character, role }
    }

    pub fn player(character: &'a Character) -> Self {
        Participant::new(character, CharRole::Player)
    }

    pub fn partner(character: &'a Character) -> Self {
        Participant::new(character, CharRole::Partner)
    }
}

/// Per-side fall counts, used for step labels only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallCounter {
    pub player: u32,
    pub partner: u32,
    pub unassigned: u32,
}

impl FallCounter {
    /// Count a fall and return that side's new total
    pub fn record(&mut self, role: CharRole) -> u32 {
        let slot = match role {
            CharRole::Player => &mut self.player,
            CharRole::Partner => &mut self.partner,
            CharRole::Unassigned => &mut self.unassigned,
        };
        *slot += 1;
        *slot
    }

    pub fn total(&self) -> u32 {
        self.player + self.partner + self.unassigned
    }
}

/// Cursor threaded through direct falls and simulators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceState {
    pub remaining_cost: f64,
    /// Turn number the next fall is logged under
    pub next_turn: u32,
    pub falls: FallCounter,
}

impl SequenceState {
    /// Start right after the turn-0 starting entry
    pub fn new(remaining_cost: f64) -> Self {
        SequenceState {
            remaining_cost,
            next_turn: 1,
            falls: FallCounter::default(),
        }
    }

    /// Fresh match: full team cost
    pub fn full_pool() -> Self {
        SequenceState::new(MAX_TEAM_COST)
    }

    /// Resolve one team-mode fall of `unit` and advance the cursor
    pub fn fall(&mut self, unit: Participant<'_>) -> SequenceStep {
        let effect = calculate_redeploy_effect(unit.character, self.remaining_cost, true);
        let fall_count = self.falls.record(unit.role);
        let step = SequenceStep::from_redeploy(self.next_turn, unit, fall_count, &effect);

        log::trace!(
            "turn {}: {} falls with {:.1} left, returns with {} hp ({:.1} left)",
            self.next_turn,
            unit.character.name,
            self.remaining_cost,
            effect.hp_gained,
            effect.remaining_cost_after_consumption
        );

        self.remaining_cost = effect.remaining_cost_after_consumption;
        self.next_turn += 1;
        step
    }
}

/// One entry in a scenario's sequence log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStep {
    pub turn: u32,
    pub char_name: String,
    pub char_type: CharRole,
    pub char_cost: f64,
    pub hp_gained: u32,
    pub cost_consumed: f64,
    /// Pool after this step; serialized fixed to one decimal place
    #[serde(with = "fixed_cost")]
    pub remaining_cost: f64,
    /// n-th fall of this character in the sequence (0 for the starting entry)
    pub fall_count: u32,
    pub notes: Vec<RedeployNote>,
}

impl SequenceStep {
    /// Synthetic turn-0 entry holding the HP both units start with
    pub fn starting(total_hp: u32, remaining_cost: f64) -> Self {
        SequenceStep {
            turn: 0,
            char_name: String::new(),
            char_type: CharRole::Unassigned,
            char_cost: 0.0,
            hp_gained: total_hp,
            cost_consumed: 0.0,
            remaining_cost,
            fall_count: 0,
            notes: vec![RedeployNote::StartingHp],
        }
    }

    pub fn from_redeploy(
        turn: u32,
        unit: Participant<'_>,
        fall_count: u32,
        effect: &RedeployResult,
    ) -> Self {
        SequenceStep {
            turn,
            char_name: unit.character.name.clone(),
            char_type: unit.role,
            char_cost: unit.character.cost.value(),
            hp_gained: effect.hp_gained,
            cost_consumed: effect.cost_consumed,
            remaining_cost: effect.remaining_cost_after_consumption,
            fall_count,
            notes: effect.notes.clone(),
        }
    }

    /// Remaining cost as displayed, e.g. "4.5"
    pub fn remaining_cost_label(&self) -> String {
        fixed_cost::format(self.remaining_cost)
    }
}

/// Result of running a simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceOutcome {
    /// HP gained across all logged falls
    pub total_hp: u32,
    pub sequence: Vec<SequenceStep>,
    /// Cursor after the last fall
    pub state: SequenceState,
}

impl SequenceOutcome {
    pub fn empty(state: SequenceState) -> Self {
        SequenceOutcome {
            total_hp: 0,
            sequence: Vec::new(),
            state,
        }
    }

    pub fn push(&mut self, step: SequenceStep) {
        self.total_hp = self.total_hp.saturating_add(step.hp_gained);
        self.sequence.push(step);
    }
}

/// Serde adapter: cost as a one-decimal string
mod fixed_cost {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: f64) -> String {
        format!("{:.1}", value)
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
