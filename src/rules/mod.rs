//! Round rules: how events transform state.

pub mod engine;

pub use engine::{QuizRules, POINTS_PER_CORRECT};
