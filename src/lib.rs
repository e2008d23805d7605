//! # math-blitz
//!
//! A timed multiplication quiz engine.
//!
//! The player picks a difficulty tier, answers a stream of multiplication
//! problems, and races a countdown; when the clock hits zero the round is
//! over and the totals are final.
//!
//! ## Design Principles
//!
//! 1. **One state owner**: every transition is serialized through the
//!    session mutex; nothing ever observes a half-applied event.
//!
//! 2. **Deterministic core**: the rules are a function of state, event,
//!    and the seeded RNG stream. Same seed, same round.
//!
//! 3. **Timers re-validate**: the tick and the post-submission advance
//!    both check that the round is still live when they fire, not when
//!    they were scheduled, and both hang off a per-round cancellation
//!    token.
//!
//! ## Modules
//!
//! - `core`: difficulty tiers, RNG, problems, events, round state
//! - `rules`: the state machine applying events to state
//! - `driver`: tokio timer wiring (countdown loop, advance delay, session)
//!
//! The display layer stays outside the crate: it feeds events in and
//! renders read-only `RoundState` snapshots.

pub mod core;
pub mod rules;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, Event, Feedback, ParseDifficultyError, Problem, ProblemRng, RoundPhase,
    RoundState, RoundSummary,
};

pub use crate::rules::{QuizRules, POINTS_PER_CORRECT};

pub use crate::driver::QuizSession;
