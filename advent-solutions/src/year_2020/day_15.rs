//! Day 15: Rambunctious Recitation

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 15, tags = ["simulation"])]
pub struct Solver;

/// Number spoken on turn `turns` of the memory game
///
/// `last_seen[n]` holds the turn `n` was last spoken before the previous
/// turn, or 0 if never.
pub fn spoken(start: &[u32], turns: u32) -> u32 {
    let Some((&first_last, opening)) = start.split_last() else {
        return 0;
    };
    if (turns as usize) <= start.len() {
        return start[turns as usize - 1];
    }

    let size = (turns as usize).max(start.iter().max().map_or(0, |&m| m as usize + 1));
    let mut last_seen = vec![0u32; size];
    for (turn, &n) in (1u32..).zip(opening) {
        last_seen[n as usize] = turn;
    }

    let mut last = first_last;
    for turn in start.len() as u32..turns {
        let previous = std::mem::replace(&mut last_seen[last as usize], turn);
        last = if previous == 0 { 0 } else { turn - previous };
    }
    last
}

fn play(games: &[Vec<u32>], turns: u32) -> String {
    games.iter().map(|start| spoken(start, turns)).join(",")
}

impl AocParser for Solver {
    /// One starting sequence per input line
    type SharedData<'a> = Vec<Vec<u32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let games = parse_lines(input, |line| {
            line.split(',')
                .map(|n| n.trim().parse::<u32>())
                .collect::<Result<Vec<_>, _>>()
        })?;
        if games.is_empty() {
            return Err(ParseError::MissingData("no starting numbers".into()));
        }
        Ok(games)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(play(shared, 2020))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(play(shared, 30_000_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    #[test]
    fn first_turns_of_example() {
        let spoken_seq: Vec<u32> = (1..=10).map(|t| spoken(&[0, 3, 6], t)).collect();
        assert_eq!(spoken_seq, vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0]);
    }

    #[test]
    fn examples_at_2020() {
        let mut shared =
            Solver::parse("0,3,6\n1,3,2\n2,1,3\n1,2,3\n2,3,1\n3,2,1\n3,1,2\n").unwrap();
        assert_eq!(
            Solver::solve_part(&mut shared, 1).unwrap(),
            "436,1,10,27,78,438,1836"
        );
    }

    #[test]
    #[ignore = "thirty million turns are slow in debug builds"]
    fn example_at_thirty_million() {
        assert_eq!(spoken(&[0, 3, 6], 30_000_000), 175594);
    }

    #[test]
    fn large_starting_numbers_fit() {
        assert_eq!(spoken(&[5000, 1], 4), 0);
        assert_eq!(spoken(&[5000, 1], 5), 1);
        assert_eq!(spoken(&[5000, 1], 6), 3);
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(Solver::parse("0,a,6").is_err());
    }
}
