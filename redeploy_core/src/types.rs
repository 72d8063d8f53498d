//! Core types shared by the redeploy and awakening calculators

use crate::error::{require_finite, InputError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fielding cost of a unit
///
/// Held as tenths internally so lookups never key on floating-point values.
/// Serializes as the decimal number (`3.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Cost {
    OneFive,
    Two,
    TwoFive,
    Three,
}

impl Cost {
    /// Get all unit costs, cheapest first
    pub fn all() -> &'static [Cost] {
        &[Cost::OneFive, Cost::Two, Cost::TwoFive, Cost::Three]
    }

    /// Cost in tenths (15, 20, 25, 30)
    pub fn tenths(self) -> u32 {
        match self {
            Cost::OneFive => 15,
            Cost::Two => 20,
            Cost::TwoFive => 25,
            Cost::Three => 30,
        }
    }

    /// Cost as a decimal value
    pub fn value(self) -> f64 {
        f64::from(self.tenths()) / 10.0
    }

    pub fn from_tenths(tenths: u32) -> Option<Cost> {
        match tenths {
            15 => Some(Cost::OneFive),
            20 => Some(Cost::Two),
            25 => Some(Cost::TwoFive),
            30 => Some(Cost::Three),
            _ => None,
        }
    }
}

impl TryFrom<f64> for Cost {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let value = require_finite("cost", value)?;
        let scaled = value * 10.0;
        let tenths = scaled.round();
        if tenths < 0.0 || (scaled - tenths).abs() > 1e-6 {
            return Err(InputError::InvalidCost(value));
        }
        Cost::from_tenths(tenths as u32).ok_or(InputError::InvalidCost(value))
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.value()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// A playable unit: immutable reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name, also the identity used for override tables
    pub name: String,
    /// Maximum HP
    pub hp: u32,
    /// Cost to field this unit
    pub cost: Cost,
}

impl Character {
    pub fn new(name: impl Into<String>, hp: u32, cost: Cost) -> Self {
        Character {
            name: name.into(),
            hp,
            cost,
        }
    }

    /// Check the invariants external data must satisfy
    pub fn validate(&self) -> Result<(), InputError> {
        if self.hp == 0 {
            return Err(InputError::ZeroHp);
        }
        Ok(())
    }
}

/// Which side of the team a sequence step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharRole {
    #[serde(rename = "self")]
    Player,
    #[serde(rename = "partner")]
    Partner,
    #[default]
    #[serde(rename = "")]
    Unassigned,
}
