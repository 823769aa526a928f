//! Property tests for part number validation and dispatch

use advent_solver::{
    AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt,
    SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Solver whose part count comes from a const generic
struct Counted<const N: u8>;

impl<const N: u8> AocParser for Counted<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<(), ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Counted<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut (), part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => Counted::<1>::solve_part_checked_range(&mut (), part),
        2 => Counted::<2>::solve_part_checked_range(&mut (), part),
        _ => Counted::<3>::solve_part_checked_range(&mut (), part),
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
        advent_solver::input::parse_lines(input, |l| l.parse::<i64>())
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn out_of_range_parts_are_rejected(parts in 1u8..=3, part in any::<u8>()) {
        let result = checked(parts, part);
        if part == 0 || part > parts {
            prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    #[test]
    fn derived_dispatch_matches_direct_call(
        numbers in prop::collection::vec(-20i64..20, 1..8),
        part in 1u8..=2,
    ) {
        let input = numbers.iter().map(i64::to_string).collect::<Vec<_>>().join("\n");

        let mut via_solver = SumProduct::parse(&input).unwrap();
        let mut direct = SumProduct::parse(&input).unwrap();

        let dispatched = SumProduct::solve_part(&mut via_solver, part).unwrap();
        let expected = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut direct).unwrap(),
            _ => <SumProduct as PartSolver<2>>::solve(&mut direct).unwrap(),
        };
        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn registry_rejects_parts_beyond_the_solver(part in 3u8..=255) {
        let registry = SolverRegistryBuilder::new()
            .register::<SumProduct>(2020, 1)
            .unwrap()
            .build();
        let mut solver = registry.create_solver(2020, 1, "2\n3").unwrap();
        prop_assert!(matches!(solver.solve(part), Err(SolveError::PartOutOfRange(p)) if p == part));
    }
}

#[test]
fn timings_are_ordered() {
    let registry = SolverRegistryBuilder::new()
        .register::<SumProduct>(2020, 1)
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2020, 1, "2\n3\n7").unwrap();

    assert!(solver.parse_start() <= solver.parse_end());
    let result = solver.solve(2).unwrap();
    assert_eq!(result.answer, "42");
    assert!(result.duration() >= chrono::TimeDelta::zero());
    assert_eq!((solver.year(), solver.day()), (2020, 1));
}
