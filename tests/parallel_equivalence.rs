#![cfg(feature = "parallel")]

use proptest::prelude::*;
use tiered_dp::{
    problems::{
        number_bank::{BestSum, NumberBank},
        word_bank::{CountConstruct, WordBank},
    },
    SolverBuilder, Strategy as Tier, Tiered,
};

proptest! {
    #[test]
    fn parallel_tiers_match_serial_calls(
        words in prop::collection::vec("[xy]{1,3}", 0..4),
        target in "[xy]{0,8}",
    ) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let solver = CountConstruct::new(WordBank::new(&target, &refs));
        let all = solver.run_all_tiers();
        prop_assert_eq!(all.naive, solver.naive());
        prop_assert_eq!(all.memoized, solver.memoized(None));
        prop_assert_eq!(all.tabulated, solver.tabulated());
        prop_assert!(all.agree());
    }

    #[test]
    fn parallel_best_sum_lengths(numbers in prop::collection::vec(2i64..9, 0..4), target in 0i64..=16) {
        let solver = SolverBuilder::<_, tiered_dp::outcome::Shortest>::new(
            NumberBank::new(target, &numbers).unwrap(),
        )
        .with_strategy(Tier::Memoized)
        .build();
        let serial = BestSum::new(NumberBank::new(target, &numbers).unwrap()).run();
        let all = solver.run_all_tiers().map(|b| b.map(|b| b.len()));
        prop_assert!(all.agree());
        prop_assert_eq!(all.memoized, serial.map(|b| b.len()));
    }
}

#[test]
fn solvers_are_shareable_across_threads() {
    let words = ["ab", "a", "b", "ba"];
    let solver = CountConstruct::new(WordBank::new("abababab", &words));
    let expected = solver.tabulated();
    let solver = &solver;
    std::thread::scope(|scope| {
        let handles: Vec<_> = Tier::ALL
            .into_iter()
            .map(|tier| scope.spawn(move || solver.solve(tier)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
