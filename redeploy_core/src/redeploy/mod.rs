//! Redeploy calculation - HP a fallen unit returns with, given the team cost left

mod checkpoints;
mod effect;

pub use checkpoints::{CheckpointEntry, CheckpointRow, CheckpointTable};
pub use effect::{
    calculate_redeploy_effect, calculate_single_redeploy_hp, RedeployNote, RedeployResult,
    SingleRedeployResult,
};

/// Team cost constants
pub mod constants {
    /// Shared team cost pool at the start of a match
    pub const MAX_TEAM_COST: f64 = 6.0;

    /// Remaining cost below this is treated as zero
    pub const COST_EPSILON: f64 = 0.001;
}

/// Whether a remaining team cost counts as exhausted
pub fn is_cost_exhausted(remaining_cost: f64) -> bool {
    remaining_cost < constants::COST_EPSILON
}
