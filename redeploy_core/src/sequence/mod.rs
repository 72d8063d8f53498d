//! Sequence simulation - repeated redeploys until the team cost runs out

mod simulator;
mod step;

pub use simulator::{simulate_alternating, simulate_continuous, simulate_minimum};
pub use step::{FallCounter, Participant, SequenceOutcome, SequenceState, SequenceStep};

/// Attempt bounds; a safety net, not a game rule
pub mod constants {
    /// Max falls simulated by the continuous strategy per call
    pub const CONTINUOUS_MAX_ATTEMPTS: u32 = 5;

    /// Max falls simulated by the alternating strategy per call
    pub const ALTERNATING_MAX_ATTEMPTS: u32 = 5;

    /// Max falls simulated by the focused strategy per call
    pub const MINIMUM_MAX_ATTEMPTS: u32 = 10;
}
