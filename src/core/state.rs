//! Round state: the single mutable entity of a quiz session.
//!
//! ## RoundState
//!
//! Everything the display layer renders:
//! - Selected tier, current problem, raw answer text
//! - Remaining seconds, score, question totals
//! - Lifecycle phase and last-submission feedback
//!
//! Accuracy and the end-of-round summary are derived on demand, never
//! stored.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::problem::Problem;

/// Lifecycle phase of a round.
///
/// The phase is the whole truth about liveness: a round cannot be both
/// running and finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    /// No difficulty chosen yet.
    #[default]
    Idle,
    /// Clock running, answers accepted.
    Active,
    /// Clock expired; input ignored until reset.
    Over,
}

/// Outcome marker for the most recent submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// The submitted answer matched the product.
    Correct,
    /// The submitted answer was wrong or unparseable.
    Wrong,
}

/// Complete observable state of one quiz round.
///
/// Created in the idle shape at session start, re-initialized on round
/// start, and handed to the display layer as a read-only snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Selected tier. `None` until a round starts.
    pub difficulty: Option<Difficulty>,
    /// Current question. `None` while idle.
    pub problem: Option<Problem>,
    /// Raw answer text as typed. May be transiently non-numeric.
    pub answer_text: String,
    /// Remaining whole seconds on the clock.
    pub time_left: u32,
    /// Cumulative score, 10 points per correct answer.
    pub score: u32,
    /// Questions answered this round, right or wrong.
    pub total_questions: u32,
    /// Questions answered correctly this round.
    pub correct_count: u32,
    /// Lifecycle phase.
    pub phase: RoundPhase,
    /// Outcome of the most recent submission; cleared on every new problem.
    pub feedback: Option<Feedback>,
}

impl RoundState {
    /// The idle shape: no difficulty, zeroed counters, cleared flags.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            difficulty: None,
            problem: None,
            answer_text: String::new(),
            time_left: 0,
            score: 0,
            total_questions: 0,
            correct_count: 0,
            phase: RoundPhase::Idle,
            feedback: None,
        }
    }

    /// Is the clock running and input accepted?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// Has the clock expired?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    /// Share of answers that were correct, rounded to the nearest whole
    /// percent. `0` before the first submission.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (self.correct_count * 100 + self.total_questions / 2) / self.total_questions
    }

    /// End-of-round totals, available once the clock has expired.
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        if !self.is_over() {
            return None;
        }
        Some(RoundSummary {
            score: self.score,
            total_questions: self.total_questions,
            correct_count: self.correct_count,
            accuracy_percent: self.accuracy_percent(),
        })
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Totals for a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Final score.
    pub score: u32,
    /// Questions answered, right or wrong.
    pub total_questions: u32,
    /// Questions answered correctly.
    pub correct_count: u32,
    /// Rounded percentage of correct answers.
    pub accuracy_percent: u32,
}
