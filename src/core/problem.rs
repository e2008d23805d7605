//! Multiplication problems: an operand pair and its exact product.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::rng::ProblemRng;

/// One multiplication question.
///
/// Operands and product always change together: a new question is a new
/// `Problem` value, never an edit of the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Left operand.
    pub num1: u32,
    /// Right operand.
    pub num2: u32,
    /// Exact product of the operands.
    pub product: u64,
}

impl Problem {
    /// Draw a fresh problem for the given tier.
    ///
    /// Both operands are drawn independently and uniformly from the tier's
    /// inclusive operand range. Never fails: the largest product
    /// (999 × 999) is nowhere near overflow.
    #[must_use]
    pub fn generate(difficulty: Difficulty, rng: &mut ProblemRng) -> Self {
        let num1 = rng.gen_inclusive(difficulty.operand_range());
        let num2 = rng.gen_inclusive(difficulty.operand_range());
        Self {
            num1,
            num2,
            product: u64::from(num1) * u64::from(num2),
        }
    }

    /// Check a parsed guess against the product.
    ///
    /// Negative guesses can never match.
    #[must_use]
    pub fn is_correct(&self, guess: i64) -> bool {
        u64::try_from(guess).map_or(false, |g| g == self.product)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.num1, self.num2)
    }
}
