use tiered_dp::{
    problems::{fibonacci::Fibonacci, grid_traveler::GridTraveler},
    Strategy, Tiered,
};

#[test]
fn fibonacci_reference_terms() {
    for (n, want) in [(6, 8u128), (7, 13), (8, 21)] {
        let fib = Fibonacci::new(n).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(fib.solve(strategy), want);
        }
    }
}

#[test]
fn fibonacci_large_index_without_recursion() {
    // F(150) exceeds u64 but fits u128
    let fib = Fibonacci::new(150).unwrap();
    assert_eq!(fib.tabulated(), 9_969_216_677_189_303_386_214_405_760_200);
    assert_eq!(fib.memoized(None), fib.tabulated());
}

#[test]
fn fibonacci_tiers_agree_up_to_the_last_term_in_range() {
    for n in [185, 186] {
        let fib = Fibonacci::new(n).unwrap();
        assert_eq!(fib.index(), n as usize);
        assert_eq!(fib.memoized(None), fib.tabulated(), "F({n})");
    }
    assert_eq!(Fibonacci::new(187).unwrap().tabulated(), u128::MAX);
}

#[test]
fn grid_tiers_agree_near_the_count_limit() {
    for (r, c) in [(66, 66), (66, 67), (67, 66)] {
        let grid = GridTraveler::new(r, c).unwrap();
        assert_eq!(grid.memoized(None), grid.tabulated(), "{:?}", grid.dims());
    }
    assert_eq!(GridTraveler::new(67, 67).unwrap().memoized(None), u128::MAX);
}

#[test]
fn fibonacci_satisfies_its_recurrence() {
    let terms: Vec<u128> = (0..60)
        .map(|n| Fibonacci::new(n).unwrap().tabulated())
        .collect();
    for w in terms.windows(3) {
        assert_eq!(w[2], w[0] + w[1]);
    }
}

#[test]
fn grid_reference_counts() {
    for (r, c, want) in [(1, 1, 1u128), (2, 3, 3), (3, 2, 3), (3, 3, 6)] {
        let grid = GridTraveler::new(r, c).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(grid.solve(strategy), want);
        }
    }
}

#[test]
fn grid_is_symmetric_and_binomial() {
    fn choose(n: u128, k: u128) -> u128 {
        (1..=k).fold(1, |acc, i| acc * (n + 1 - i) / i)
    }
    for r in 1..12i64 {
        for c in 1..12i64 {
            let a = GridTraveler::new(r, c).unwrap().tabulated();
            let b = GridTraveler::new(c, r).unwrap().memoized(None);
            assert_eq!(a, b);
            assert_eq!(a, choose((r + c - 2) as u128, (r - 1) as u128));
        }
    }
}

#[test]
fn zero_dimension_grids_have_no_paths() {
    for (r, c) in [(0, 0), (0, 5), (5, 0)] {
        let grid = GridTraveler::new(r, c).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(grid.solve(strategy), 0);
        }
    }
}
