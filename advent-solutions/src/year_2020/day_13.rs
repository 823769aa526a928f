//! Day 13: Shuttle Search

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 13, tags = ["math"])]
pub struct Solver;

#[derive(Debug, PartialEq, Eq)]
pub struct Schedule {
    earliest: u64,
    /// (bus id, offset in the schedule list); `x` entries are skipped
    buses: Vec<(u64, u64)>,
}

fn parse_buses(line: &str) -> Result<Vec<(u64, u64)>, ParseError> {
    let buses: Vec<(u64, u64)> = line
        .split(',')
        .zip(0u64..)
        .filter(|(id, _)| id.trim() != "x")
        .map(|(id, offset)| match id.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(ParseError::at_line(2, format!("bad bus id {id:?}"))),
            Ok(bus) => Ok((bus, offset)),
        })
        .collect::<Result<_, _>>()?;
    if buses.is_empty() {
        return Err(ParseError::MissingData("no buses in service".into()));
    }
    Ok(buses)
}

/// Earliest timestamp where every bus departs at its offset
///
/// Buses are folded in one at a time: once a timestamp satisfies the buses
/// seen so far, stepping by the product of their ids keeps them satisfied.
fn aligned_departure(buses: &[(u64, u64)]) -> Option<u64> {
    let (mut timestamp, mut step) = (0u64, 1u64);
    for &(bus, offset) in buses {
        let found = (0..bus)
            .map(|k| timestamp + k * step)
            .find(|t| (t + offset) % bus == 0)?;
        timestamp = found;
        step = step.checked_mul(bus)?;
    }
    Some(timestamp)
}

impl AocParser for Solver {
    type SharedData<'a> = Schedule;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim);
        let earliest = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("earliest departure".into()))?
            .parse::<u64>()
            .map_err(|e| ParseError::at_line(1, e))?;
        let buses = parse_buses(
            lines
                .next()
                .ok_or_else(|| ParseError::MissingData("bus list".into()))?,
        )?;
        Ok(Schedule { earliest, buses })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .buses
            .iter()
            // A bus departing exactly at `earliest` is caught with no wait,
            // not one full cycle later
            .map(|&(bus, _)| (bus, (bus - shared.earliest % bus) % bus))
            .min_by_key(|&(_, wait)| wait)
            .map(|(bus, wait)| (bus * wait).to_string())
            .ok_or_else(|| SolveError::NoSolution("no buses".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        aligned_departure(&shared.buses)
            .map(|t| t.to_string())
            .ok_or_else(|| {
                SolveError::NoSolution("bus offsets can never line up".into())
            })
    }
}
