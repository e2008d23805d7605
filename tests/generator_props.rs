//! Property tests for the problem generator.

use math_blitz::{Difficulty, Problem, ProblemRng};
use proptest::prelude::*;

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

proptest! {
    /// Operands stay inside the tier's inclusive range and the product is
    /// exact, for any seed and tier.
    #[test]
    fn operands_in_range_product_exact(seed in any::<u64>(), tier in any_difficulty()) {
        let mut rng = ProblemRng::new(seed);
        let range = tier.operand_range();

        for _ in 0..16 {
            let problem = Problem::generate(tier, &mut rng);
            prop_assert!(range.contains(&problem.num1));
            prop_assert!(range.contains(&problem.num2));
            prop_assert_eq!(
                problem.product,
                u64::from(problem.num1) * u64::from(problem.num2)
            );
        }
    }

    /// The same seed replays the identical problem sequence.
    #[test]
    fn same_seed_same_sequence(seed in any::<u64>(), tier in any_difficulty()) {
        let mut rng1 = ProblemRng::new(seed);
        let mut rng2 = ProblemRng::new(seed);

        for _ in 0..8 {
            prop_assert_eq!(
                Problem::generate(tier, &mut rng1),
                Problem::generate(tier, &mut rng2)
            );
        }
    }

    /// The exact product is the only accepted guess.
    #[test]
    fn only_the_product_is_correct(seed in any::<u64>(), guess in any::<i64>()) {
        let mut rng = ProblemRng::new(seed);
        let problem = Problem::generate(Difficulty::Hard, &mut rng);

        let matches = i64::try_from(problem.product).map_or(false, |p| p == guess);
        prop_assert_eq!(problem.is_correct(guess), matches);
    }
}
