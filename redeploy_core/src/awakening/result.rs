//! AwakeningResult - Predicted gauge with a per-component breakdown

use serde::{Deserialize, Serialize};

/// A fixed bonus and whether the caller switched it on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeBonus {
    pub enabled: bool,
    /// Gauge actually added (0 when disabled)
    pub value: u32,
}

impl GaugeBonus {
    pub fn new(enabled: bool, value: u32) -> Self {
        GaugeBonus {
            enabled,
            value: if enabled { value } else { 0 },
        }
    }
}

/// Every component that went into the prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwakeningBreakdown {
    pub gauge_before_shotdown: f64,
    /// Damage after clamping to max HP
    pub damage_taken: f64,
    pub damage_ratio_percent: f64,
    pub damage_gauge: u32,
    pub own_down: GaugeBonus,
    pub damage_dealt: GaugeBonus,
    pub partner_down: GaugeBonus,
    /// Sum before flooring and clamping
    pub raw_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwakeningResult {
    /// Predicted gauge, 0..=100
    pub final_predicted_gauge: u32,
    pub is_threshold_met: bool,
    /// Inputs were rejected; the gauge is 0
    pub error: bool,
    /// Damage input as received (unclamped)
    pub validated_damage_taken: f64,
    /// Absent on error
    pub breakdown: Option<AwakeningBreakdown>,
}

impl AwakeningResult {
    pub(crate) fn rejected(damage_taken_input: f64) -> Self {
        AwakeningResult {
            final_predicted_gauge: 0,
            is_threshold_met: false,
            error: true,
            validated_damage_taken: damage_taken_input,
            breakdown: None,
        }
    }

    /// Gauge still missing before awakening is available
    pub fn shortfall(&self, threshold: u32) -> u32 {
        threshold.saturating_sub(self.final_predicted_gauge)
    }
}
