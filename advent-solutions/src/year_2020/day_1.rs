//! Day 1: Report Repair

use std::cmp::Ordering;

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

const TARGET: u32 = 2020;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["search"])]
pub struct Solver;

impl AocParser for Solver {
    /// Expense entries, sorted ascending
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut entries = parse_lines(input, |line| line.parse::<u32>())?;
        entries.sort_unstable();
        Ok(entries)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        pair_with_sum(shared, TARGET)
            .map(|(a, b)| (u64::from(a) * u64::from(b)).to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("no two entries sum to {TARGET}")))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        triple_with_sum(shared, TARGET)
            .map(|(a, b, c)| (u64::from(a) * u64::from(b) * u64::from(c)).to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("no three entries sum to {TARGET}")))
    }
}

/// Two entries at different positions of `sorted` adding up to `target`
fn pair_with_sum(sorted: &[u32], target: u32) -> Option<(u32, u32)> {
    let mut lo = 0;
    let mut hi = sorted.len().checked_sub(1)?;
    while lo < hi {
        match (u64::from(sorted[lo]) + u64::from(sorted[hi])).cmp(&u64::from(target)) {
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
            Ordering::Equal => return Some((sorted[lo], sorted[hi])),
        }
    }
    None
}

fn triple_with_sum(sorted: &[u32], target: u32) -> Option<(u32, u32, u32)> {
    sorted.iter().enumerate().find_map(|(i, &a)| {
        let rest = target.checked_sub(a)?;
        pair_with_sum(&sorted[i + 1..], rest).map(|(b, c)| (a, b, c))
    })
}
