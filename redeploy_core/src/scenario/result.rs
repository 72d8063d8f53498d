//! Scenario results handed to renderers

use crate::sequence::SequenceStep;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four scenarios computed for every pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Ideal,
    Compromise,
    Bomb,
    Lowest,
}

impl ScenarioKind {
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::Ideal,
            ScenarioKind::Compromise,
            ScenarioKind::Bomb,
            ScenarioKind::Lowest,
        ]
    }

    /// Whether the scenario keeps falling a single unit
    pub fn is_focused(self) -> bool {
        matches!(self, ScenarioKind::Bomb | ScenarioKind::Lowest)
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioKind::Ideal => "ideal",
            ScenarioKind::Compromise => "compromise",
            ScenarioKind::Bomb => "bomb",
            ScenarioKind::Lowest => "lowest",
        };
        f.write_str(label)
    }
}

/// Strategy appended after the two opening falls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationStrategy {
    Alternating,
    ContinuousFirst,
    ContinuousSecond,
}

/// One simulated scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Display label naming the unit that fell first or was focused
    pub name: String,
    /// Name of that unit
    pub focus: String,
    pub total_hp: u32,
    /// Strategy chosen after the opening falls (two-fall scenarios only)
    pub continuation: Option<ContinuationStrategy>,
    pub sequence: Vec<SequenceStep>,
}

impl Scenario {
    pub fn new(kind: ScenarioKind, focus: &str, total_hp: u32, sequence: Vec<SequenceStep>) -> Self {
        let name = if kind.is_focused() {
            format!("{}: {} focused", kind, focus)
        } else {
            format!("{}: {} falls first", kind, focus)
        };
        Scenario {
            kind,
            name,
            focus: focus.to_string(),
            total_hp,
            continuation: None,
            sequence,
        }
    }

    pub fn with_continuation(mut self, strategy: ContinuationStrategy) -> Self {
        self.continuation = Some(strategy);
        self
    }

    /// Number of logged falls, excluding the starting entry
    pub fn fall_count(&self) -> usize {
        self.sequence.iter().filter(|s| s.turn > 0).count()
    }
}

/// All four scenarios for one pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamHpScenarios {
    pub ideal_scenario: Scenario,
    pub compromise_scenario: Scenario,
    pub bomb_scenario: Scenario,
    pub lowest_scenario: Scenario,
}

impl TeamHpScenarios {
    pub fn get(&self, kind: ScenarioKind) -> &Scenario {
        match kind {
            ScenarioKind::Ideal => &self.ideal_scenario,
            ScenarioKind::Compromise => &self.compromise_scenario,
            ScenarioKind::Bomb => &self.bomb_scenario,
            ScenarioKind::Lowest => &self.lowest_scenario,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        ScenarioKind::all().iter().map(move |kind| self.get(*kind))
    }

    /// (smallest, largest) total HP across the four scenarios
    pub fn hp_range(&self) -> (u32, u32) {
        self.iter()
            .map(|s| s.total_hp)
            .fold((u32::MAX, 0), |(min, max), hp| (min.min(hp), max.max(hp)))
    }

    /// Serialize for an external renderer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
