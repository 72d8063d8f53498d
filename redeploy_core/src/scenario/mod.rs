//! Team HP scenarios - best and worst case totals for a player/partner pair

mod engine;
mod order;
mod result;

pub use engine::calculate_team_hp_scenarios;
pub use order::{fall_order, FallOrder};
pub use result::{ContinuationStrategy, Scenario, ScenarioKind, TeamHpScenarios};
