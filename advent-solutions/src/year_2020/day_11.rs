//! Day 11: Seating System

use advent_solver::input::grid;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 11, tags = ["grid", "automaton"])]
pub struct Solver;

/// Seats only; floor cells are dropped after neighbour lists are built
#[derive(Debug)]
pub struct SeatChart {
    initial: Vec<bool>,
    adjacent: Vec<Vec<usize>>,
    visible: Vec<Vec<usize>>,
}

impl SeatChart {
    fn from_grid(cells: &[Vec<u8>]) -> Result<Self, ParseError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        let mut index = vec![vec![None; width]; height];
        let mut initial = Vec::new();

        for (r, row) in cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                match cell {
                    b'.' => {}
                    b'L' | b'#' => {
                        index[r][c] = Some(initial.len());
                        initial.push(cell == b'#');
                    }
                    other => {
                        return Err(ParseError::at_line(
                            r + 1,
                            format!("unexpected seat {:?}", other as char),
                        ));
                    }
                }
            }
        }

        let step = |r: usize, c: usize, (dr, dc): (isize, isize)| {
            let r = r.checked_add_signed(dr).filter(|&r| r < height)?;
            let c = c.checked_add_signed(dc).filter(|&c| c < width)?;
            Some((r, c))
        };

        let mut adjacent = Vec::with_capacity(initial.len());
        let mut visible = Vec::with_capacity(initial.len());
        for r in 0..height {
            for c in 0..width {
                if index[r][c].is_none() {
                    continue;
                }
                adjacent.push(
                    DIRECTIONS
                        .iter()
                        .filter_map(|&d| step(r, c, d).and_then(|(nr, nc)| index[nr][nc]))
                        .collect(),
                );
                visible.push(
                    DIRECTIONS
                        .iter()
                        .filter_map(|&d| {
                            let mut pos = step(r, c, d)?;
                            loop {
                                if let Some(seat) = index[pos.0][pos.1] {
                                    return Some(seat);
                                }
                                pos = step(pos.0, pos.1, d)?;
                            }
                        })
                        .collect(),
                );
            }
        }

        Ok(Self {
            initial,
            adjacent,
            visible,
        })
    }
}

/// Run rounds until nothing changes and count occupied seats
fn settle(initial: &[bool], neighbours: &[Vec<usize>], tolerance: usize) -> usize {
    let mut occupied = initial.to_vec();
    let mut next = occupied.clone();
    let mut rounds = 0;

    loop {
        let mut changed = false;
        for (seat, around) in neighbours.iter().enumerate() {
            let busy = around.iter().filter(|&&n| occupied[n]).count();
            next[seat] = match occupied[seat] {
                false if busy == 0 => true,
                true if busy >= tolerance => false,
                state => state,
            };
            changed |= next[seat] != occupied[seat];
        }
        std::mem::swap(&mut occupied, &mut next);
        rounds += 1;
        if !changed {
            break;
        }
    }

    log::debug!("seating settled after {rounds} rounds");
    occupied.iter().filter(|&&o| o).count()
}

impl AocParser for Solver {
    type SharedData<'a> = SeatChart;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        SeatChart::from_grid(&grid(input)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(settle(&shared.initial, &shared.adjacent, 4).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(settle(&shared.initial, &shared.visible, 5).to_string())
    }
}
