//! Example demonstrating the plugin system and builder pattern
//!
//! Two solvers register themselves through `#[derive(AutoRegisterSolver)]`;
//! the registry is then built with and without a tag filter.
//!
//! Run with: cargo run --example plugin_system

use advent_solver::input::{blocks, parse_lines};
use advent_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

// ============================================================================
// Calories: one number per line, elves separated by blank lines
// ============================================================================

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["easy", "sum"])]
pub struct Calories;

impl AocParser for Calories {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Vec<u64>, ParseError> {
        let mut totals = blocks(input)
            .iter()
            .map(|elf| parse_lines(&elf.join("\n"), |l| l.parse::<u64>()).map(|v| v.iter().sum()))
            .collect::<Result<Vec<u64>, _>>()?;
        totals.sort_unstable_by(|a, b| b.cmp(a));
        Ok(totals)
    }
}

impl PartSolver<1> for Calories {
    fn solve(shared: &mut Vec<u64>) -> Result<String, SolveError> {
        shared
            .first()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::NoSolution("no elves".into()))
    }
}

impl PartSolver<2> for Calories {
    fn solve(shared: &mut Vec<u64>) -> Result<String, SolveError> {
        Ok(shared.iter().take(3).sum::<u64>().to_string())
    }
}

// ============================================================================
// Depths: count increases, borrowing nothing
// ============================================================================

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2021, day = 1, tags = ["easy"])]
pub struct Depths;

impl AocParser for Depths {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Vec<u32>, ParseError> {
        parse_lines(input, |l| l.parse::<u32>())
    }
}

impl PartSolver<1> for Depths {
    fn solve(shared: &mut Vec<u32>) -> Result<String, SolveError> {
        Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let all = SolverRegistryBuilder::new().register_all_plugins()?.build();
    println!("Registered solvers:");
    for info in all.iter_info() {
        println!("  {}/{:02} ({} parts)", info.year, info.day, info.parts);
    }

    let summing = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"sum"))?
        .build();
    println!("Tagged `sum`: {} solver(s)", summing.len());

    let mut solver = summing.create_solver(2022, 1, "1000\n2000\n\n4000\n\n5000\n6000\n")?;
    for part in 1..=solver.parts() {
        let result = solver.solve(part)?;
        println!("2022/01 Part {part}: {} ({:?})", result.answer, result.duration());
    }

    let mut solver = all.create_solver(2021, 1, "199\n200\n208\n210\n200\n207\n")?;
    println!("2021/01 Part 1: {}", solver.solve(1)?.answer);
    Ok(())
}
