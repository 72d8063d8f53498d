//! Redeploy checkpoints - HP a unit returns with at typical leftover costs

use super::effect::calculate_single_redeploy_hp;
use crate::types::{Character, Cost};
use serde::{Deserialize, Serialize};

/// Remaining-cost checkpoints for one unit cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointEntry {
    pub cost: Cost,
    /// Leftover team costs to evaluate, ascending
    pub remaining: Vec<f64>,
}

/// Cost -> checkpoint lookup supplied alongside the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointTable(Vec<CheckpointEntry>);

impl Default for CheckpointTable {
    fn default() -> Self {
        let entry = |cost, remaining: &[f64]| CheckpointEntry {
            cost,
            remaining: remaining.to_vec(),
        };
        CheckpointTable(vec![
            entry(Cost::Three, &[0.5, 1.0, 1.5]),
            entry(Cost::TwoFive, &[0.5, 1.0, 1.5, 2.0]),
            entry(Cost::Two, &[0.5, 1.0, 1.5]),
            entry(Cost::OneFive, &[0.5, 1.0]),
        ])
    }
}

/// One row of a unit's redeploy table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointRow {
    pub remaining_cost: f64,
    pub hp: u32,
    /// HP as a percentage of the unit's max HP
    pub hp_percent: f64,
}

impl CheckpointTable {
    pub fn new(entries: Vec<CheckpointEntry>) -> Self {
        CheckpointTable(entries)
    }

    pub fn entries(&self) -> &[CheckpointEntry] {
        &self.0
    }

    /// Checkpoints for a cost; empty if the table has none
    pub fn get(&self, cost: Cost) -> &[f64] {
        self.0
            .iter()
            .find(|e| e.cost == cost)
            .map(|e| e.remaining.as_slice())
            .unwrap_or(&[])
    }

    /// Redeploy HP for each checkpoint of the character's cost
    pub fn rows_for(&self, character: &Character) -> Vec<CheckpointRow> {
        self.get(character.cost)
            .iter()
            .map(|&remaining_cost| {
                let hp = calculate_single_redeploy_hp(character, remaining_cost).calculated_hp;
                let hp_percent = if character.hp == 0 {
                    0.0
                } else {
                    f64::from(hp) / f64::from(character.hp) * 100.0
                };
                CheckpointRow {
                    remaining_cost,
                    hp,
                    hp_percent,
                }
            })
            .collect()
    }
}
