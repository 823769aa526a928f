//! Day 5: Binary Boarding

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::bail;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 5, tags = ["binary"])]
pub struct Solver;

/// Seat id of a boarding pass: F/L are 0 bits, B/R are 1 bits
fn seat_id(pass: &str) -> anyhow::Result<u16> {
    if pass.len() != 10 {
        bail!("boarding pass must be 10 characters, got {}", pass.len());
    }
    pass.bytes().try_fold(0u16, |id, c| match c {
        b'F' | b'L' => Ok(id << 1),
        b'B' | b'R' => Ok((id << 1) | 1),
        other => bail!("unexpected boarding pass character {:?}", other as char),
    })
}

impl AocParser for Solver {
    /// Seat ids, sorted ascending
    type SharedData<'a> = Vec<u16>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ids = parse_lines(input, seat_id)?;
        ids.sort_unstable();
        Ok(ids)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .last()
            .map(u16::to_string)
            .ok_or_else(|| SolveError::NoSolution("no boarding passes".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .windows(2)
            .find(|pair| pair[1] - pair[0] == 2)
            .map(|pair| (pair[0] + 1).to_string())
            .ok_or_else(|| SolveError::NoSolution("no free seat between two taken ones".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    #[test]
    fn decodes_example_passes() {
        assert_eq!(seat_id("FBFBBFFRLR").unwrap(), 357);
        assert_eq!(seat_id("BFFFBBFRRR").unwrap(), 567);
        assert_eq!(seat_id("FFFBBBFRRR").unwrap(), 119);
        assert_eq!(seat_id("BBFFBBFRLL").unwrap(), 820);
    }

    #[test]
    fn highest_seat() {
        let mut shared = Solver::parse("FBFBBFFRLR\nBFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "820");
    }

    #[test]
    fn finds_the_gap() {
        // 356, 357, 359
        let mut shared = Solver::parse("FBFBBFFRLL\nFBFBBFFRLR\nFBFBBFFRRR\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "358");

        let mut full = Solver::parse("FBFBBFFRLL\nFBFBBFFRLR\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut full, 2),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn rejects_bad_passes() {
        assert!(seat_id("FBFBBFFRL").is_err());
        assert!(seat_id("FBFBBFFRLX").is_err());
    }
}
