//! Gauge calculation

use super::constants::MAX_GAUGE;
use super::result::{AwakeningBreakdown, AwakeningResult, GaugeBonus};
use crate::config::AwakeningTables;
use crate::error::{require_finite, InputError};
use crate::types::{Character, Cost};
use serde::{Deserialize, Serialize};

/// Everything the gauge prediction needs from the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwakeningInputs {
    /// Gauge held when the unit was shot down (0-100)
    pub gauge_before_shotdown: f64,
    pub damage_taken_input_value: f64,
    /// Max HP of the unit as fielded (after any cost-over reduction)
    pub original_char_actual_max_hp: f64,
    pub char_cost: Cost,
    /// Used to look up named own-down overrides
    #[serde(default)]
    pub char_name: Option<String>,
    pub consider_own_down: bool,
    pub consider_damage_dealt: bool,
    #[serde(default)]
    pub damage_dealt_awaken_bonus_value: u32,
    pub consider_partner_down: bool,
}

impl AwakeningInputs {
    /// Inputs with no damage, no gauge and every bonus off
    pub fn new(char_cost: Cost, max_hp: f64) -> Self {
        AwakeningInputs {
            gauge_before_shotdown: 0.0,
            damage_taken_input_value: 0.0,
            original_char_actual_max_hp: max_hp,
            char_cost,
            char_name: None,
            consider_own_down: false,
            consider_damage_dealt: false,
            damage_dealt_awaken_bonus_value: 0,
            consider_partner_down: false,
        }
    }

    /// Inputs for a unit that came back from a redeploy with `redeployed_hp`
    pub fn for_redeployed(character: &Character, redeployed_hp: u32) -> Self {
        AwakeningInputs {
            char_name: Some(character.name.clone()),
            ..AwakeningInputs::new(character.cost, f64::from(redeployed_hp))
        }
    }

    fn validate(&self) -> Result<(), InputError> {
        let max_hp = require_finite("original_char_actual_max_hp", self.original_char_actual_max_hp)?;
        if max_hp <= 0.0 {
            return Err(InputError::OutOfRange {
                field: "original_char_actual_max_hp",
                value: max_hp,
            });
        }

        let gauge = require_finite("gauge_before_shotdown", self.gauge_before_shotdown)?;
        if !(0.0..=f64::from(MAX_GAUGE)).contains(&gauge) {
            return Err(InputError::OutOfRange {
                field: "gauge_before_shotdown",
                value: gauge,
            });
        }

        let damage = require_finite("damage_taken_input_value", self.damage_taken_input_value)?;
        if damage < 0.0 {
            return Err(InputError::OutOfRange {
                field: "damage_taken_input_value",
                value: damage,
            });
        }
        Ok(())
    }
}

/// Predict the awakening gauge using the built-in bonus tables
pub fn calculate_awakening_gauge(inputs: &AwakeningInputs) -> AwakeningResult {
    calculate_awakening_gauge_with(inputs, &AwakeningTables::default())
}

/// Predict the awakening gauge against caller-supplied tables
///
/// `floor(damage% * coefficient)` plus each enabled bonus plus the gauge held
/// before the shotdown, floored and clamped to 0..=100. Invalid inputs give a
/// zero gauge with `error` set.
pub fn calculate_awakening_gauge_with(
    inputs: &AwakeningInputs,
    tables: &AwakeningTables,
) -> AwakeningResult {
    if let Err(err) = inputs.validate() {
        log::debug!("awakening inputs rejected: {}", err);
        return AwakeningResult::rejected(inputs.damage_taken_input_value);
    }

    let max_hp = inputs.original_char_actual_max_hp;
    let damage_taken = inputs.damage_taken_input_value.clamp(0.0, max_hp);
    let damage_ratio_percent = damage_taken / max_hp * 100.0;
    let damage_gauge = (damage_ratio_percent * tables.average_gauge_coefficient).floor() as u32;

    let own_down = GaugeBonus::new(
        inputs.consider_own_down,
        tables.own_down_bonus(inputs.char_name.as_deref(), inputs.char_cost),
    );

    let dealt = inputs.damage_dealt_awaken_bonus_value;
    let dealt_allowed = tables.is_allowed_damage_dealt(dealt);
    if inputs.consider_damage_dealt && !dealt_allowed {
        log::warn!("damage dealt bonus {} is not an allowed value, ignoring", dealt);
    }
    let damage_dealt = GaugeBonus::new(
        inputs.consider_damage_dealt,
        if dealt_allowed { dealt } else { 0 },
    );

    let partner_down = GaugeBonus::new(
        inputs.consider_partner_down,
        tables.partner_down_bonus(inputs.char_cost),
    );

    let bonuses = damage_gauge
        .saturating_add(own_down.value)
        .saturating_add(damage_dealt.value)
        .saturating_add(partner_down.value);
    let raw_total = inputs.gauge_before_shotdown + f64::from(bonuses);
    let final_predicted_gauge = raw_total.floor().clamp(0.0, f64::from(MAX_GAUGE)) as u32;

    AwakeningResult {
        final_predicted_gauge,
        is_threshold_met: final_predicted_gauge >= tables.threshold,
        error: false,
        validated_damage_taken: damage_taken,
        breakdown: Some(AwakeningBreakdown {
            gauge_before_shotdown: inputs.gauge_before_shotdown,
            damage_taken,
            damage_ratio_percent,
            damage_gauge,
            own_down,
            damage_dealt,
            partner_down,
            raw_total,
        }),
    }
}
