//! Prelude module for convenient imports
//!
//! ```rust
//! use redeploy_core::prelude::*;
//! ```

// Core types
pub use crate::types::{CharRole, Character, Cost};

// Redeploy
pub use crate::redeploy::constants::MAX_TEAM_COST;
pub use crate::redeploy::{calculate_redeploy_effect, calculate_single_redeploy_hp, RedeployNote, RedeployResult};

// Sequences and scenarios
pub use crate::scenario::{calculate_team_hp_scenarios, Scenario, ScenarioKind, TeamHpScenarios};
pub use crate::sequence::{Participant, SequenceState, SequenceStep};

// Awakening
pub use crate::awakening::constants::AWAKENING_THRESHOLD;
pub use crate::awakening::{calculate_awakening_gauge, AwakeningInputs, AwakeningResult};

// Config
pub use crate::config::{default_roster, Roster};
