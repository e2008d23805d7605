//! The round state machine.
//!
//! `QuizRules` applies events to a `RoundState`. Every application runs to
//! completion, so callers never observe a half-applied transition. Events
//! that arrive in the wrong phase are rejected as logged no-ops rather
//! than errors: there is no fatal path anywhere in the machine.
//!
//! The two timer-driven events (`Tick`, `AdvanceProblem`) re-validate the
//! phase at application time, because the round can end between a timer
//! being scheduled and its firing.

use tracing::{debug, info, trace};

use crate::core::{Difficulty, Event, Feedback, Problem, ProblemRng, RoundPhase, RoundState};

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Applies round events to state.
///
/// Owns the RNG stream used for problem draws, so a rules instance built
/// from `ProblemRng::new(seed)` replays the identical problem sequence.
/// Given the same RNG stream, `apply` is deterministic.
#[derive(Clone, Debug)]
pub struct QuizRules {
    rng: ProblemRng,
}

impl QuizRules {
    /// Create a rules instance drawing problems from `rng`.
    #[must_use]
    pub fn new(rng: ProblemRng) -> Self {
        Self { rng }
    }

    /// Apply one event to the state.
    ///
    /// Infallible: every event either transforms the state or is a no-op.
    pub fn apply(&mut self, state: &mut RoundState, event: &Event) {
        match event {
            Event::StartRound(difficulty) => self.start_round(state, *difficulty),
            Event::UpdateAnswerText(text) => state.answer_text.clone_from(text),
            Event::SubmitAnswer => self.submit_answer(state),
            Event::AdvanceProblem => self.advance_problem(state),
            Event::Tick => Self::tick(state),
            Event::Reset => Self::reset(state),
        }
    }

    /// Re-initialize the round for `difficulty`.
    ///
    /// Accepted from every phase: idle selection, a finished round being
    /// restarted directly, or a running round being restarted. The
    /// operation is a full re-initialization either way.
    fn start_round(&mut self, state: &mut RoundState, difficulty: Difficulty) {
        let problem = Problem::generate(difficulty, &mut self.rng);
        *state = RoundState {
            difficulty: Some(difficulty),
            problem: Some(problem),
            time_left: difficulty.time_limit_secs(),
            phase: RoundPhase::Active,
            ..RoundState::idle()
        };
        info!(
            %difficulty,
            time_limit = difficulty.time_limit_secs(),
            "round started"
        );
    }

    /// Score the stored answer text against the current problem.
    ///
    /// An empty or non-numeric answer is simply not equal to the product:
    /// it scores wrong, it is never an error.
    fn submit_answer(&mut self, state: &mut RoundState) {
        if !state.is_active() {
            debug!(phase = ?state.phase, "submit ignored outside active round");
            return;
        }
        let Some(problem) = state.problem else {
            return;
        };

        let correct = state
            .answer_text
            .trim()
            .parse::<i64>()
            .is_ok_and(|guess| problem.is_correct(guess));

        if correct {
            state.correct_count += 1;
            state.score += POINTS_PER_CORRECT;
            state.feedback = Some(Feedback::Correct);
        } else {
            state.feedback = Some(Feedback::Wrong);
        }
        state.total_questions += 1;

        debug!(
            correct,
            score = state.score,
            total = state.total_questions,
            "answer scored"
        );
    }

    /// Swap in a fresh problem and reset the clock to the full tier limit.
    ///
    /// Each question gets the whole time budget again; the clock never
    /// carries over between problems.
    fn advance_problem(&mut self, state: &mut RoundState) {
        if !state.is_active() {
            debug!(phase = ?state.phase, "advance ignored outside active round");
            return;
        }
        let Some(difficulty) = state.difficulty else {
            return;
        };

        state.problem = Some(Problem::generate(difficulty, &mut self.rng));
        state.time_left = difficulty.time_limit_secs();
        state.answer_text.clear();
        state.feedback = None;

        debug!(time_left = state.time_left, "advanced to next problem");
    }

    /// Count down one second; the step from 1 ends the round.
    fn tick(state: &mut RoundState) {
        if !state.is_active() {
            trace!(phase = ?state.phase, "tick ignored outside active round");
            return;
        }

        if state.time_left <= 1 {
            state.time_left = 0;
            state.phase = RoundPhase::Over;
            info!(
                score = state.score,
                total = state.total_questions,
                accuracy = state.accuracy_percent(),
                "time up"
            );
        } else {
            state.time_left -= 1;
            trace!(time_left = state.time_left, "tick");
        }
    }

    /// Restore the idle shape, from any phase.
    fn reset(state: &mut RoundState) {
        *state = RoundState::idle();
        debug!("round reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_round(seed: u64, difficulty: Difficulty) -> (QuizRules, RoundState) {
        let mut rules = QuizRules::new(ProblemRng::new(seed));
        let mut state = RoundState::idle();
        rules.apply(&mut state, &Event::StartRound(difficulty));
        (rules, state)
    }

    #[test]
    fn test_start_round_initializes_active_state() {
        let (_, state) = active_round(42, Difficulty::Medium);

        assert_eq!(state.difficulty, Some(Difficulty::Medium));
        assert!(state.problem.is_some());
        assert_eq!(state.time_left, 20);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_questions, 0);
        assert_eq!(state.correct_count, 0);
        assert_eq!(state.feedback, None);
        assert!(state.is_active());
        assert!(!state.is_over());
    }

    #[test]
    fn test_correct_submission_scores() {
        let (mut rules, mut state) = active_round(42, Difficulty::Easy);
        let product = state.problem.unwrap().product;

        rules.apply(&mut state, &Event::UpdateAnswerText(product.to_string()));
        rules.apply(&mut state, &Event::SubmitAnswer);

        assert_eq!(state.score, 10);
        assert_eq!(state.correct_count, 1);
        assert_eq!(state.total_questions, 1);
        assert_eq!(state.feedback, Some(Feedback::Correct));
    }

    #[test]
    fn test_wrong_submission_counts_the_question_only() {
        let (mut rules, mut state) = active_round(42, Difficulty::Easy);
        let wrong = state.problem.unwrap().product + 1;

        rules.apply(&mut state, &Event::UpdateAnswerText(wrong.to_string()));
        rules.apply(&mut state, &Event::SubmitAnswer);

        assert_eq!(state.score, 0);
        assert_eq!(state.correct_count, 0);
        assert_eq!(state.total_questions, 1);
        assert_eq!(state.feedback, Some(Feedback::Wrong));
    }

    #[test]
    fn test_unparseable_answers_score_wrong() {
        let (mut rules, mut state) = active_round(42, Difficulty::Easy);

        for text in ["", "   ", "12a", "ten", "1.5"] {
            rules.apply(&mut state, &Event::UpdateAnswerText(text.to_string()));
            rules.apply(&mut state, &Event::SubmitAnswer);
            assert_eq!(state.feedback, Some(Feedback::Wrong), "input {text:?}");
        }

        assert_eq!(state.total_questions, 5);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_submit_is_a_noop_when_idle_or_over() {
        let mut rules = QuizRules::new(ProblemRng::new(1));
        let mut state = RoundState::idle();

        rules.apply(&mut state, &Event::SubmitAnswer);
        assert_eq!(state, RoundState::idle());

        state.phase = RoundPhase::Over;
        let before = state.clone();
        rules.apply(&mut state, &Event::SubmitAnswer);
        assert_eq!(state, before);
    }

    #[test]
    fn test_tick_expires_exactly_once() {
        let (mut rules, mut state) = active_round(42, Difficulty::Hard);

        for expected in (0..10).rev() {
            rules.apply(&mut state, &Event::Tick);
            assert_eq!(state.time_left, expected);
        }
        assert!(state.is_over());

        let frozen = state.clone();
        rules.apply(&mut state, &Event::Tick);
        rules.apply(&mut state, &Event::Tick);
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_advance_after_over_is_a_noop() {
        let (mut rules, mut state) = active_round(42, Difficulty::Hard);

        for _ in 0..10 {
            rules.apply(&mut state, &Event::Tick);
        }
        assert!(state.is_over());

        let frozen = state.clone();
        rules.apply(&mut state, &Event::AdvanceProblem);
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_advance_resets_clock_and_clears_transients() {
        let (mut rules, mut state) = active_round(42, Difficulty::Easy);

        rules.apply(&mut state, &Event::Tick);
        rules.apply(&mut state, &Event::Tick);
        rules.apply(&mut state, &Event::UpdateAnswerText("99".to_string()));
        rules.apply(&mut state, &Event::SubmitAnswer);
        assert_eq!(state.time_left, 58);
        assert!(state.feedback.is_some());

        rules.apply(&mut state, &Event::AdvanceProblem);

        assert_eq!(state.time_left, 60);
        assert_eq!(state.answer_text, "");
        assert_eq!(state.feedback, None);
        assert_eq!(state.total_questions, 1);
        assert!(state.is_active());
    }

    #[test]
    fn test_reset_restores_idle_from_any_phase() {
        let (mut rules, mut state) = active_round(42, Difficulty::Medium);
        rules.apply(&mut state, &Event::Reset);
        assert_eq!(state, RoundState::idle());

        let (mut rules, mut state) = active_round(42, Difficulty::Hard);
        for _ in 0..10 {
            rules.apply(&mut state, &Event::Tick);
        }
        rules.apply(&mut state, &Event::Reset);
        assert_eq!(state, RoundState::idle());
    }

    #[test]
    fn test_restart_from_over_zeroes_the_round() {
        let (mut rules, mut state) = active_round(42, Difficulty::Hard);

        let product = state.problem.unwrap().product;
        rules.apply(&mut state, &Event::UpdateAnswerText(product.to_string()));
        rules.apply(&mut state, &Event::SubmitAnswer);
        for _ in 0..10 {
            rules.apply(&mut state, &Event::Tick);
        }
        assert!(state.is_over());

        rules.apply(&mut state, &Event::StartRound(Difficulty::Easy));

        assert_eq!(state.difficulty, Some(Difficulty::Easy));
        assert_eq!(state.time_left, 60);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_questions, 0);
        assert!(state.is_active());
    }

    #[test]
    fn test_update_answer_text_stores_verbatim_in_any_phase() {
        let mut rules = QuizRules::new(ProblemRng::new(1));
        let mut state = RoundState::idle();

        rules.apply(&mut state, &Event::UpdateAnswerText("  not a number ".to_string()));
        assert_eq!(state.answer_text, "  not a number ");
    }

    #[test]
    fn test_same_seed_replays_the_same_problems() {
        let (mut rules1, mut state1) = active_round(1234, Difficulty::Hard);
        let (mut rules2, mut state2) = active_round(1234, Difficulty::Hard);

        for _ in 0..5 {
            assert_eq!(state1.problem, state2.problem);
            rules1.apply(&mut state1, &Event::AdvanceProblem);
            rules2.apply(&mut state2, &Event::AdvanceProblem);
        }
    }
}
