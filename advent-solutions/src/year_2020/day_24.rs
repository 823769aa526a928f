//! Day 24: Lobby Layout
//!
//! Hex tiles use axial coordinates `(q, r)`; the six neighbours of a tile
//! differ by one of [`Direction::offset`].

use std::collections::{HashMap, HashSet};

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 24, tags = ["grid", "automaton"])]
pub struct Solver;

const DAYS: usize = 100;

type Hex = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    const ALL: [Direction; 6] = [
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    fn offset(self) -> Hex {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, 0),
            Direction::SouthEast => (-1, 0),
            Direction::SouthWest => (-1, -1),
        }
    }
}

fn parse_path(line: &str) -> anyhow::Result<Vec<Direction>> {
    let mut path = Vec::new();
    let mut bytes = line.bytes();
    while let Some(b) = bytes.next() {
        let direction = match b {
            b'e' => Direction::East,
            b'w' => Direction::West,
            b'n' | b's' => match (b, bytes.next()) {
                (b'n', Some(b'e')) => Direction::NorthEast,
                (b'n', Some(b'w')) => Direction::NorthWest,
                (b's', Some(b'e')) => Direction::SouthEast,
                (b's', Some(b'w')) => Direction::SouthWest,
                _ => return Err(anyhow!("`{}` must be followed by e or w", b as char)),
            },
            other => return Err(anyhow!("unexpected direction {:?}", other as char)),
        };
        path.push(direction);
    }
    Ok(path)
}

fn walk(path: &[Direction]) -> Hex {
    path.iter().fold((0, 0), |(q, r), d| {
        let (dq, dr) = d.offset();
        (q + dq, r + dr)
    })
}

fn neighbours((q, r): Hex) -> impl Iterator<Item = Hex> {
    Direction::ALL.into_iter().map(move |d| {
        let (dq, dr) = d.offset();
        (q + dq, r + dr)
    })
}

/// Tiles flipped an odd number of times
fn black_tiles(paths: &[Vec<Direction>]) -> HashSet<Hex> {
    let mut black = HashSet::new();
    for tile in paths.iter().map(|p| walk(p)) {
        if !black.remove(&tile) {
            black.insert(tile);
        }
    }
    black
}

fn next_day(black: &HashSet<Hex>) -> HashSet<Hex> {
    let mut counts: HashMap<Hex, usize> = HashMap::new();
    for &tile in black {
        for n in neighbours(tile) {
            *counts.entry(n).or_insert(0) += 1;
        }
    }
    // Black tiles with no black neighbours never show up in `counts`
    counts
        .into_iter()
        .filter(|&(tile, count)| count == 2 || (count == 1 && black.contains(&tile)))
        .map(|(tile, _)| tile)
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Direction>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_path)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(black_tiles(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut black = black_tiles(shared);
        for day in 1..=DAYS {
            black = next_day(&black);
            log::trace!("day {day}: {} black tiles", black.len());
        }
        Ok(black.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
sesenwnenenewseeswwswswwnenewsewsw
neeenesenwnwwswnenewnwwsewnenwseswesw
seswneswswsenwwnwse
nwnwneseeswswnenewneswwnewseswneseene
swweswneswnenwsewnwneneseenw
eesenwseswswnenwswnwnwsewwnwsene
sewnenenenesenwsewnenwwwse
wenwwweseeeweswwwnwwe
wsweesenenewnwwnwsenewsenwwsesesenwne
neeswseenwwswnwswswnw
nenwswwsewswnenenewsenwsenwnesesenew
enewnwewneswsewnwswenweswnenwsenwsw
sweneswneswneneenwnewenewwneswswnese
swwesenesewenwneswnwwneseswwne
enesenwswwswneneswsenwnewswseenwsese
wnwnesenesenenwwnenwsewesewsesesew
nenewswnwewswnenesenwnesewesw
eneswnwswnwsenenwnwnwwseeswneewsenese
neswnwewnwnwseenwseesewsenwsweewe
wseweeenwnesenwwwswnew
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "10");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2208");
    }

    #[test]
    fn first_days_of_the_example() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let mut black = black_tiles(&shared);
        let mut counts = Vec::new();
        for _ in 0..5 {
            black = next_day(&black);
            counts.push(black.len());
        }
        assert_eq!(counts, vec![15, 12, 25, 14, 23]);
    }

    #[test]
    fn paths_can_return_to_the_reference_tile() {
        assert_eq!(walk(&parse_path("nwwswee").unwrap()), (0, 0));
        assert_eq!(walk(&parse_path("esew").unwrap()), walk(&parse_path("se").unwrap()));
    }

    #[test]
    fn lone_pairs_grow() {
        let paths = vec![parse_path("e").unwrap(), parse_path("ee").unwrap()];
        let black = black_tiles(&paths);
        assert_eq!(black.len(), 2);
        assert_eq!(next_day(&black).len(), 4);
    }

    #[test]
    fn rejects_bad_directions() {
        assert!(parse_path("nx").is_err());
        assert!(parse_path("s").is_err());
        assert!(parse_path("ex").is_err());
    }

    fn direction() -> impl Strategy<Value = Direction> {
        (0usize..6).prop_map(|i| Direction::ALL[i])
    }

    proptest! {
        #[test]
        fn walking_is_order_independent(mut path in prop::collection::vec(direction(), 0..30)) {
            let end = walk(&path);
            path.reverse();
            prop_assert_eq!(walk(&path), end);
        }

        #[test]
        fn every_tile_has_six_distinct_neighbours(q in -50i32..50, r in -50i32..50) {
            let all: HashSet<Hex> = neighbours((q, r)).collect();
            prop_assert_eq!(all.len(), 6);
            prop_assert!(!all.contains(&(q, r)));
        }
    }
}
