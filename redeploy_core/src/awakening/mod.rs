//! Awakening gauge - prediction of the gauge after being shot down

mod gauge;
mod result;

pub use gauge::{calculate_awakening_gauge, calculate_awakening_gauge_with, AwakeningInputs};
pub use result::{AwakeningBreakdown, AwakeningResult, GaugeBonus};

/// Awakening gauge constants
pub mod constants {
    /// Gauge gained per percent of max HP taken as damage
    pub const AVERAGE_GAUGE_COEFFICIENT: f64 = 0.598;

    /// Gauge needed to awaken
    pub const AWAKENING_THRESHOLD: u32 = 50;

    /// Gauge ceiling
    pub const MAX_GAUGE: u32 = 100;
}
