//! Difficulty tiers: time limits and operand magnitudes.
//!
//! The three tiers are fixed at process start. Easy and Medium share the
//! two-digit operand range and differ only in time pressure; Hard moves to
//! three-digit operands on the shortest clock.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quiz difficulty tier.
///
/// Each tier fixes the round time limit and the operand magnitude the
/// problem generator draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 60 seconds, two-digit operands.
    Easy,
    /// 20 seconds, two-digit operands.
    Medium,
    /// 10 seconds, three-digit operands.
    Hard,
}

impl Difficulty {
    /// All tiers, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Round time limit in whole seconds.
    #[must_use]
    pub const fn time_limit_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 20,
            Difficulty::Hard => 10,
        }
    }

    /// Inclusive range both operands are drawn from.
    #[must_use]
    pub const fn operand_range(self) -> RangeInclusive<u32> {
        match self {
            Difficulty::Easy | Difficulty::Medium => 10..=99,
            Difficulty::Hard => 100..=999,
        }
    }

    /// Lowercase tier name; round-trips through `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a difficulty name does not match any tier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}`, expected one of: easy, medium, hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
