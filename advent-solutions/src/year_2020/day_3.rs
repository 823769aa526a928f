//! Day 3: Toboggan Trajectory

use advent_solver::input::grid;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["grid"])]
pub struct Solver;

/// Tree map that repeats to the right forever
pub struct Forest {
    trees: Vec<Vec<bool>>,
}

impl Forest {
    fn trees_on_slope(&self, right: usize, down: usize) -> usize {
        self.trees
            .iter()
            .step_by(down)
            .enumerate()
            .filter(|(step, row)| row[(step * right) % row.len()])
            .count()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Forest;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows = grid(input)?;
        let trees = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                row.into_iter()
                    .map(|cell| match cell {
                        b'#' => Ok(true),
                        b'.' => Ok(false),
                        other => Err(ParseError::at_line(
                            idx + 1,
                            format!("unexpected map cell {:?}", other as char),
                        )),
                    })
                    .collect()
            })
            .collect::<Result<Vec<Vec<bool>>, _>>()?;
        Ok(Forest { trees })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.trees_on_slope(3, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(SLOPES
            .iter()
            .map(|&(right, down)| shared.trees_on_slope(right, down) as u64)
            .product::<u64>()
            .to_string())
    }
}
