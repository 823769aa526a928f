//! Day 17: Conway Cubes

use std::collections::{HashMap, HashSet};

use advent_solver::input::grid;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

const CYCLES: usize = 6;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 17, tags = ["automaton"])]
pub struct Solver;

/// Active cells of the starting slice as (x, y)
pub type Slice = Vec<(i32, i32)>;

/// Every offset in {-1, 0, 1}^D except the origin
fn neighbour_offsets<const D: usize>() -> Vec<[i32; D]> {
    (0..3usize.pow(D as u32))
        .map(|mut code| {
            let mut offset = [0i32; D];
            for axis in offset.iter_mut() {
                *axis = (code % 3) as i32 - 1;
                code /= 3;
            }
            offset
        })
        .filter(|offset| offset.iter().any(|&d| d != 0))
        .collect()
}

/// One cycle: active cells stay with 2 or 3 active neighbours, inactive
/// cells activate with exactly 3
fn step<const D: usize>(active: &HashSet<[i32; D]>, offsets: &[[i32; D]]) -> HashSet<[i32; D]> {
    let mut counts: HashMap<[i32; D], u8> = HashMap::new();
    for cell in active {
        for offset in offsets {
            let mut neighbour = *cell;
            for (axis, d) in neighbour.iter_mut().zip(offset) {
                *axis += d;
            }
            *counts.entry(neighbour).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(cell, n)| *n == 3 || (*n == 2 && active.contains(cell)))
        .map(|(cell, _)| cell)
        .collect()
}

/// Active cubes after `cycles` cycles in `D` dimensions
pub fn simulate<const D: usize>(slice: &[(i32, i32)], cycles: usize) -> usize {
    let offsets = neighbour_offsets::<D>();
    let mut active: HashSet<[i32; D]> = slice
        .iter()
        .map(|&(x, y)| {
            let mut cell = [0; D];
            cell[0] = x;
            cell[1] = y;
            cell
        })
        .collect();
    for cycle in 1..=cycles {
        active = step(&active, &offsets);
        log::trace!("{D}-d cycle {cycle}: {} active", active.len());
    }
    active.len()
}

impl AocParser for Solver {
    type SharedData<'a> = Slice;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut slice = Vec::new();
        for (y, row) in grid(input)?.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                match cell {
                    b'#' => slice.push((x as i32, y as i32)),
                    b'.' => {}
                    other => {
                        return Err(ParseError::at_line(
                            y + 1,
                            format!("unexpected cube {:?}", other as char),
                        ));
                    }
                }
            }
        }
        Ok(slice)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate::<3>(shared, CYCLES).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate::<4>(shared, CYCLES).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = ".#.\n..#\n###\n";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "112");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "848");
    }

    #[test]
    fn first_cycle_in_three_dimensions() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(simulate::<3>(&shared, 1), 11);
        assert_eq!(simulate::<3>(&shared, 0), 5);
    }

    #[test]
    fn offsets_cover_the_neighbourhood() {
        assert_eq!(neighbour_offsets::<2>().len(), 8);
        assert_eq!(neighbour_offsets::<3>().len(), 26);
        assert_eq!(neighbour_offsets::<4>().len(), 80);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn simulation_is_deterministic(
            cells in prop::collection::hash_set((0i32..5, 0i32..5), 0..12),
            cycles in 0usize..3,
        ) {
            let slice: Vec<_> = cells.into_iter().collect();
            let mut reversed = slice.clone();
            reversed.reverse();
            prop_assert_eq!(simulate::<3>(&slice, cycles), simulate::<3>(&reversed, cycles));
        }

        #[test]
        fn lone_cubes_die(x in -20i32..20, y in -20i32..20) {
            prop_assert_eq!(simulate::<4>(&[(x, y)], 1), 0);
        }
    }
}
