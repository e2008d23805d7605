//! Round events: every input the state machine reacts to.
//!
//! Events come from two sources: the display layer (start, typing,
//! submit, reset) and the timer tasks (ticks and the post-submission
//! advance). This module only names them; `rules` interprets them.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// One input to the round state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Begin a round at the given tier.
    StartRound(Difficulty),
    /// Store the raw answer text as typed, without validation.
    UpdateAnswerText(String),
    /// Score the stored answer text against the current problem.
    SubmitAnswer,
    /// Swap in a fresh problem after the post-submission delay.
    AdvanceProblem,
    /// One whole second of countdown has elapsed.
    Tick,
    /// Return to the idle difficulty-selection state.
    Reset,
}
