//! redeploy_core - Team cost, redeploy HP and awakening calculations
//!
//! This library provides:
//! - Redeploy: HP a fallen unit returns with for the team cost left
//! - Sequence simulators: continuous, alternating and focused fall chains
//! - Scenarios: ideal, compromise, bomb and lowest team HP for a pair
//! - Awakening: gauge prediction after a shotdown
//!
//! Every calculation is a pure function of its arguments.

pub mod awakening;
pub mod config;
pub mod error;
pub mod prelude;
pub mod redeploy;
pub mod scenario;
pub mod sequence;
pub mod types;

// Re-export core types for convenience
pub use awakening::{
    calculate_awakening_gauge, calculate_awakening_gauge_with, AwakeningBreakdown,
    AwakeningInputs, AwakeningResult, GaugeBonus,
};
pub use config::{default_awakening_tables, default_roster, AwakeningTables, ConfigError, Roster};
pub use error::InputError;
pub use redeploy::{
    calculate_redeploy_effect, calculate_single_redeploy_hp, CheckpointTable, RedeployNote,
    RedeployResult, SingleRedeployResult,
};
pub use scenario::{calculate_team_hp_scenarios, Scenario, ScenarioKind, TeamHpScenarios};
pub use sequence::{
    simulate_alternating, simulate_continuous, simulate_minimum, Participant, SequenceOutcome,
    SequenceState, SequenceStep,
};
pub use types::{CharRole, Character, Cost};
