//! Awakening bonus tables

use super::ConfigError;
use crate::awakening::constants::{AVERAGE_GAUGE_COEFFICIENT, AWAKENING_THRESHOLD, MAX_GAUGE};
use crate::types::Cost;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gauge bonus granted at one unit cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBonus {
    pub cost: Cost,
    pub bonus: u32,
}

/// Cost -> bonus lookup, one entry per cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostBonusTable(Vec<CostBonus>);

impl CostBonusTable {
    /// Build from (cost, bonus) pairs
    pub fn from_pairs(pairs: &[(Cost, u32)]) -> Self {
        CostBonusTable(
            pairs
                .iter()
                .map(|&(cost, bonus)| CostBonus { cost, bonus })
                .collect(),
        )
    }

    /// Bonus for a cost; 0 if the table has no entry
    pub fn get(&self, cost: Cost) -> u32 {
        self.0
            .iter()
            .find(|entry| entry.cost == cost)
            .map_or(0, |entry| entry.bonus)
    }

    /// Every cost must appear exactly once, with a bonus no larger than the gauge
    fn validate(&self, table: &str) -> Result<(), ConfigError> {
        if let Some(entry) = self.0.iter().find(|entry| entry.bonus > MAX_GAUGE) {
            return Err(ConfigError::ValidationError(format!(
                "{} bonus {} for cost {} exceeds the gauge maximum {}",
                table, entry.bonus, entry.cost, MAX_GAUGE
            )));
        }
        for cost in Cost::all() {
            let count = self.0.iter().filter(|entry| entry.cost == *cost).count();
            if count != 1 {
                return Err(ConfigError::ValidationError(format!(
                    "{} table has {} entries for cost {}",
                    table, count, cost
                )));
            }
        }
        Ok(())
    }
}

/// Own-down bonus pinned to one character regardless of cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedBonus {
    pub name: String,
    pub bonus: u32,
}

/// Tunable inputs of the awakening gauge prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwakeningTables {
    #[serde(default = "default_coefficient")]
    pub average_gauge_coefficient: f64,
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    /// Allowed values for the damage-dealt bonus
    #[serde(default = "default_damage_dealt_options")]
    pub damage_dealt_options: Vec<u32>,
    pub own_down: CostBonusTable,
    #[serde(default)]
    pub own_down_overrides: Vec<NamedBonus>,
    pub partner_down: CostBonusTable,
}

impl Default for AwakeningTables {
    fn default() -> Self {
        AwakeningTables {
            average_gauge_coefficient: AVERAGE_GAUGE_COEFFICIENT,
            threshold: AWAKENING_THRESHOLD,
            damage_dealt_options: default_damage_dealt_options(),
            own_down: CostBonusTable::from_pairs(&[
                (Cost::Three, 22),
                (Cost::TwoFive, 22),
                (Cost::Two, 20),
                (Cost::OneFive, 15),
            ]),
            own_down_overrides: Vec::new(),
            partner_down: CostBonusTable::from_pairs(&[
                (Cost::Three, 10),
                (Cost::TwoFive, 9),
                (Cost::Two, 7),
                (Cost::OneFive, 5),
            ]),
        }
    }
}

fn default_coefficient() -> f64 {
    AVERAGE_GAUGE_COEFFICIENT
}
fn default_threshold() -> u32 {
    AWAKENING_THRESHOLD
}
fn default_damage_dealt_options() -> Vec<u32> {
    vec![0, 1, 2, 3, 4, 5]
}

impl AwakeningTables {
    /// Own-down bonus, honoring the named overrides first
    pub fn own_down_bonus(&self, name: Option<&str>, cost: Cost) -> u32 {
        name.and_then(|name| self.own_down_overrides.iter().find(|o| o.name == name))
            .map_or_else(|| self.own_down.get(cost), |o| o.bonus)
    }

    pub fn partner_down_bonus(&self, cost: Cost) -> u32 {
        self.partner_down.get(cost)
    }

    pub fn is_allowed_damage_dealt(&self, value: u32) -> bool {
        self.damage_dealt_options.contains(&value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficient = self.average_gauge_coefficient;
        if !coefficient.is_finite() || coefficient <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "average_gauge_coefficient must be positive, got {}",
                coefficient
            )));
        }
        if self.threshold > MAX_GAUGE {
            return Err(ConfigError::ValidationError(format!(
                "threshold {} exceeds the gauge maximum {}",
                self.threshold, MAX_GAUGE
            )));
        }
        if let Some(value) = self.damage_dealt_options.iter().find(|&&v| v > MAX_GAUGE) {
            return Err(ConfigError::ValidationError(format!(
                "damage dealt option {} exceeds the gauge maximum {}",
                value, MAX_GAUGE
            )));
        }
        if let Some(o) = self.own_down_overrides.iter().find(|o| o.bonus > MAX_GAUGE) {
            return Err(ConfigError::ValidationError(format!(
                "own-down override for {} has bonus {} above the gauge maximum {}",
                o.name, o.bonus, MAX_GAUGE
            )));
        }
        self.own_down.validate("own_down")?;
        self.partner_down.validate("partner_down")?;
        Ok(())
    }
}

/// Load awakening tables from a TOML file
pub fn load_awakening_tables(path: &Path) -> Result<AwakeningTables, ConfigError> {
    let tables: AwakeningTables = super::load_toml(path)?;
    tables.validate()?;
    Ok(tables)
}

/// Load awakening tables from a TOML string
pub fn parse_awakening_tables(content: &str) -> Result<AwakeningTables, ConfigError> {
    let tables: AwakeningTables = super::parse_toml(content)?;
    tables.validate()?;
    Ok(tables)
}

/// Get the bundled awakening tables
pub fn default_awakening_tables() -> AwakeningTables {
    let toml = include_str!("../../config/awakening.toml");
    parse_awakening_tables(toml).unwrap_or_else(|err| {
        log::warn!("bundled awakening tables rejected, using built-ins: {}", err);
        AwakeningTables::default()
    })
}
