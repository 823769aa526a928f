//! Day 12: Rain Risk

use std::str::FromStr;

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow, bail};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 12, tags = ["navigation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move by (east, north)
    Shift(i64, i64),
    /// Counter-clockwise quarter turns, 0..4
    Turn(u8),
    Forward(i64),
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (code, value) = line
            .split_at_checked(1)
            .ok_or_else(|| anyhow!("empty navigation instruction"))?;
        let value: i64 = value
            .parse()
            .with_context(|| format!("bad value in {line:?}"))?;

        let quarter_turns = |degrees: i64| -> anyhow::Result<u8> {
            if degrees % 90 != 0 {
                bail!("turns must be multiples of 90 degrees, got {degrees}");
            }
            Ok((degrees / 90).rem_euclid(4) as u8)
        };

        Ok(match code {
            "N" => Action::Shift(0, value),
            "S" => Action::Shift(0, -value),
            "E" => Action::Shift(value, 0),
            "W" => Action::Shift(-value, 0),
            "L" => Action::Turn(quarter_turns(value)?),
            "R" => Action::Turn(quarter_turns(-value)?),
            "F" => Action::Forward(value),
            other => bail!("unknown action {other:?}"),
        })
    }
}

/// Rotate (east, north) counter-clockwise by `turns` quarter turns
fn rotate((east, north): (i64, i64), turns: u8) -> (i64, i64) {
    (0..turns).fold((east, north), |(e, n), _| (-n, e))
}

/// Sail with `vector` steering; `shift_vector` says whether compass moves
/// apply to the vector (waypoint) or to the ship
fn sail(actions: &[Action], vector: (i64, i64), shift_vector: bool) -> i64 {
    let mut ship = (0i64, 0i64);
    let mut vector = vector;
    for action in actions {
        match *action {
            Action::Shift(de, dn) if shift_vector => vector = (vector.0 + de, vector.1 + dn),
            Action::Shift(de, dn) => ship = (ship.0 + de, ship.1 + dn),
            Action::Turn(turns) => vector = rotate(vector, turns),
            Action::Forward(times) => {
                ship = (ship.0 + vector.0 * times, ship.1 + vector.1 * times);
            }
        }
    }
    ship.0.abs() + ship.1.abs()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Action>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse::<Action>)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sail(shared, (1, 0), false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sail(shared, (10, 1), true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "F10\nN3\nF7\nR90\nF11\n";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "25");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "286");
    }

    #[test]
    fn turns_normalise_to_quarter_turns() {
        assert_eq!("L270".parse::<Action>().unwrap(), Action::Turn(3));
        assert_eq!("R90".parse::<Action>().unwrap(), Action::Turn(3));
        assert_eq!("R180".parse::<Action>().unwrap(), Action::Turn(2));
        assert_eq!("L360".parse::<Action>().unwrap(), Action::Turn(0));
        assert_eq!(rotate((10, 4), 3), (4, -10));
    }

    #[test]
    fn rejects_odd_angles_and_codes() {
        assert!("L45".parse::<Action>().is_err());
        assert!("X10".parse::<Action>().is_err());
        assert!(matches!(
            Solver::parse("F10\nR30\n"),
            Err(ParseError::InvalidLine { line: 2, .. })
        ));
    }
}
