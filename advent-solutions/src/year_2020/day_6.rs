//! Day 6: Custom Customs

use advent_solver::input::blocks;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 6, tags = ["sets"])]
pub struct Solver;

/// One bitmask of answered questions per person, grouped
pub type Groups = Vec<Vec<u32>>;

fn answers(person: &str) -> Result<u32, ParseError> {
    person.bytes().try_fold(0u32, |mask, c| {
        if c.is_ascii_lowercase() {
            Ok(mask | (1 << (c - b'a')))
        } else {
            Err(ParseError::InvalidFormat(format!(
                "unexpected answer {:?} in {person:?}",
                c as char
            )))
        }
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Groups;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        blocks(input)
            .into_iter()
            .map(|group| group.into_iter().map(answers).collect())
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|g| g.iter().fold(0, |acc, m| acc | m).count_ones())
            .sum::<u32>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|g| g.iter().fold(u32::MAX, |acc, m| acc & m).count_ones())
            .sum::<u32>()
            .to_string())
    }
}
