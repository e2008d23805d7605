//! The session: the one owner every transition serializes through.
//!
//! `QuizSession` wraps the rules and state behind a mutex and owns the
//! round's timers. The lock is never held across an await, so transitions
//! apply atomically and in arrival order.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::core::{Difficulty, Event, ProblemRng, RoundState, RoundSummary};
use crate::driver::countdown;
use crate::rules::QuizRules;

/// Mutex-guarded round internals shared with the timer tasks.
pub(crate) struct Inner {
    rules: QuizRules,
    pub(crate) state: RoundState,
    /// Guard for the live round's timers; cancelled on reset or timeout.
    round_guard: CancellationToken,
}

impl Inner {
    pub(crate) fn apply(&mut self, event: &Event) {
        self.rules.apply(&mut self.state, event);
    }

    pub(crate) fn round_guard(&self) -> CancellationToken {
        self.round_guard.clone()
    }
}

/// A running quiz session.
///
/// Clones are cheap handles onto the same round. Must be used inside a
/// tokio runtime: starting a round spawns the countdown task.
#[derive(Clone)]
pub struct QuizSession {
    shared: Arc<Mutex<Inner>>,
}

impl QuizSession {
    /// Create a session with an entropy-seeded problem stream.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ProblemRng::from_entropy())
    }

    /// Create a session with a caller-provided RNG, for deterministic
    /// problem sequences.
    #[must_use]
    pub fn with_rng(rng: ProblemRng) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Inner {
                rules: QuizRules::new(rng),
                state: RoundState::idle(),
                round_guard: CancellationToken::new(),
            })),
        }
    }

    /// Start (or restart) a round at `difficulty` and arm the countdown.
    ///
    /// Any previous round's timers are cancelled first, so there is only
    /// ever one live tick source.
    pub async fn start_round(&self, difficulty: Difficulty) {
        let token = {
            let mut inner = self.shared.lock().await;
            inner.round_guard.cancel();
            inner.round_guard = CancellationToken::new();
            inner.apply(&Event::StartRound(difficulty));
            inner.round_guard()
        };
        countdown::spawn_countdown(Arc::clone(&self.shared), token);
    }

    /// Store the raw answer text as typed, without validation.
    pub async fn set_answer_text(&self, text: impl Into<String>) {
        let event = Event::UpdateAnswerText(text.into());
        self.shared.lock().await.apply(&event);
    }

    /// Score the stored answer and schedule the advance delay.
    ///
    /// A no-op outside an active round. The scheduled advance is tied to
    /// the round guard and re-validates the phase when it fires, so a
    /// round that times out in the meantime stays finished.
    pub async fn submit_answer(&self) {
        let token = {
            let mut inner = self.shared.lock().await;
            if !inner.state.is_active() {
                return;
            }
            inner.apply(&Event::SubmitAnswer);
            inner.round_guard()
        };
        countdown::spawn_advance(Arc::clone(&self.shared), token);
    }

    /// Cancel all round timers and return to the idle state.
    pub async fn reset(&self) {
        let mut inner = self.shared.lock().await;
        inner.round_guard.cancel();
        inner.apply(&Event::Reset);
    }

    /// Read-only copy of the current round state.
    pub async fn snapshot(&self) -> RoundState {
        self.shared.lock().await.state.clone()
    }

    /// End-of-round totals, once the clock has expired.
    pub async fn summary(&self) -> Option<RoundSummary> {
        self.shared.lock().await.state.summary()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
