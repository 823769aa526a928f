//! Day 20: Jurassic Jigsaw
//!
//! Tiles are square grids whose borders line up with their neighbours after
//! some rotation or flip. Assembly starts from a corner and fills the image
//! row by row, matching each new tile against the tiles left of and above it.

use std::collections::{HashMap, HashSet};

use advent_solver::input::blocks;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

/// Sea monster cells as (row, column) offsets in a 3 x 20 box
const MONSTER: [(usize, usize); 15] = [
    (0, 18),
    (1, 0),
    (1, 5),
    (1, 6),
    (1, 11),
    (1, 12),
    (1, 17),
    (1, 18),
    (1, 19),
    (2, 1),
    (2, 4),
    (2, 7),
    (2, 10),
    (2, 13),
    (2, 16),
];
const MONSTER_HEIGHT: usize = 3;
const MONSTER_WIDTH: usize = 20;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 20, tags = ["grid", "search"])]
pub struct Solver;

type Pixels = Vec<Vec<bool>>;

fn rotate(pixels: &Pixels) -> Pixels {
    let n = pixels.len();
    (0..n)
        .map(|r| (0..n).map(|c| pixels[n - 1 - c][r]).collect())
        .collect()
}

fn flip(pixels: &Pixels) -> Pixels {
    pixels
        .iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect()
}

/// The 8 rotations and reflections of a square grid
fn orientations(pixels: &Pixels) -> Vec<Pixels> {
    let mut all = Vec::with_capacity(8);
    let mut current = pixels.clone();
    for _ in 0..4 {
        all.push(flip(&current));
        let next = rotate(&current);
        all.push(std::mem::replace(&mut current, next));
    }
    all
}

fn top(p: &Pixels) -> Vec<bool> {
    p[0].clone()
}

fn bottom(p: &Pixels) -> Vec<bool> {
    p[p.len() - 1].clone()
}

fn left(p: &Pixels) -> Vec<bool> {
    p.iter().map(|row| row[0]).collect()
}

fn right(p: &Pixels) -> Vec<bool> {
    p.iter().map(|row| row[row.len() - 1]).collect()
}

/// Border read either way round, so flipped tiles share the same key
fn canonical(edge: Vec<bool>) -> Vec<bool> {
    let reversed: Vec<bool> = edge.iter().rev().copied().collect();
    edge.min(reversed)
}

#[derive(Debug, Clone)]
pub struct Tile {
    id: u64,
    pixels: Pixels,
}

impl Tile {
    fn edges(&self) -> [Vec<bool>; 4] {
        [
            top(&self.pixels),
            right(&self.pixels),
            bottom(&self.pixels),
            left(&self.pixels),
        ]
        .map(canonical)
    }
}

#[derive(Debug)]
pub struct SharedData {
    tiles: Vec<Tile>,
    /// How many tiles carry each canonical border
    edge_counts: HashMap<Vec<bool>, usize>,
}

impl SharedData {
    fn new(tiles: Vec<Tile>) -> Self {
        let mut edge_counts = HashMap::new();
        for edge in tiles.iter().flat_map(Tile::edges) {
            *edge_counts.entry(edge).or_insert(0) += 1;
        }
        Self { tiles, edge_counts }
    }

    fn is_outer(&self, edge: Vec<bool>) -> bool {
        self.edge_counts.get(&canonical(edge)) == Some(&1)
    }

    /// Tiles with exactly two borders shared with another tile
    fn corners(&self) -> Vec<&Tile> {
        self.tiles
            .iter()
            .filter(|t| t.edges().into_iter().filter(|e| self.edge_counts[e] > 1).count() == 2)
            .collect()
    }

    /// Place every tile, returning the oriented tiles row by row
    fn assemble(&self) -> Result<Vec<Vec<Pixels>>, SolveError> {
        let side = (1..=self.tiles.len())
            .find(|s| s * s >= self.tiles.len())
            .filter(|s| s * s == self.tiles.len())
            .ok_or_else(|| {
                SolveError::NoSolution(format!("{} tiles do not form a square", self.tiles.len()))
            })?;

        let corner = *self
            .corners()
            .first()
            .ok_or_else(|| SolveError::NoSolution("no corner tile".into()))?;
        let start = orientations(&corner.pixels)
            .into_iter()
            .find(|p| self.is_outer(top(p)) && self.is_outer(left(p)))
            .ok_or_else(|| SolveError::NoSolution(format!("tile {} cannot start", corner.id)))?;

        let mut used = HashSet::from([corner.id]);
        let mut rows: Vec<Vec<Pixels>> = vec![vec![start]];

        for r in 0..side {
            for c in 0..side {
                if r == 0 && c == 0 {
                    continue;
                }
                let want_left = (c > 0).then(|| right(&rows[r][c - 1]));
                let want_top = (r > 0).then(|| bottom(&rows[r - 1][c]));

                let (id, placed) = self
                    .tiles
                    .iter()
                    .filter(|t| !used.contains(&t.id))
                    .find_map(|t| {
                        orientations(&t.pixels)
                            .into_iter()
                            .find(|p| {
                                // Sides with no neighbour must face the border, or a
                                // palindromic shared edge admits the mirrored tile
                                let left_fits = match &want_left {
                                    Some(edge) => left(p) == *edge,
                                    None => self.is_outer(left(p)),
                                };
                                let top_fits = match &want_top {
                                    Some(edge) => top(p) == *edge,
                                    None => self.is_outer(top(p)),
                                };
                                left_fits && top_fits
                            })
                            .map(|p| (t.id, p))
                    })
                    .ok_or_else(|| {
                        SolveError::NoSolution(format!("no tile fits at row {r}, column {c}"))
                    })?;

                log::trace!("tile {id} placed at ({r}, {c})");
                used.insert(id);
                if c == 0 {
                    rows.push(vec![placed]);
                } else {
                    rows[r].push(placed);
                }
            }
        }
        Ok(rows)
    }
}

/// Join the placed tiles with their borders removed
fn stitch(rows: &[Vec<Pixels>]) -> Pixels {
    let mut image = Vec::new();
    for row in rows {
        let Some(size) = row.first().map(Vec::len) else {
            continue;
        };
        for y in 1..size - 1 {
            image.push(
                row.iter()
                    .flat_map(|tile| tile[y][1..size - 1].iter().copied())
                    .collect(),
            );
        }
    }
    image
}

/// Cells covered by at least one sea monster
fn monster_cells(image: &Pixels) -> HashSet<(usize, usize)> {
    let mut cells = HashSet::new();
    let height = image.len();
    let width = image.first().map_or(0, Vec::len);
    if height < MONSTER_HEIGHT || width < MONSTER_WIDTH {
        return cells;
    }
    for r in 0..=height - MONSTER_HEIGHT {
        for c in 0..=width - MONSTER_WIDTH {
            if MONSTER.iter().all(|&(dr, dc)| image[r + dr][c + dc]) {
                cells.extend(MONSTER.iter().map(|&(dr, dc)| (r + dr, c + dc)));
            }
        }
    }
    cells
}

/// Rough water left once monsters are found in some orientation of the image
fn roughness(image: &Pixels) -> Option<usize> {
    let total = image.iter().flatten().filter(|&&p| p).count();
    orientations(image)
        .iter()
        .map(monster_cells)
        .find(|cells| !cells.is_empty())
        .map(|cells| total - cells.len())
}

fn parse_tile(lines: &[&str]) -> Result<Tile, ParseError> {
    let (header, rows) = lines
        .split_first()
        .ok_or_else(|| ParseError::MissingData("tile".into()))?;
    let id = header
        .strip_prefix("Tile ")
        .and_then(|h| h.strip_suffix(':'))
        .and_then(|id| id.parse::<u64>().ok())
        .ok_or_else(|| ParseError::InvalidFormat(format!("bad tile header {header:?}")))?;

    let pixels = rows
        .iter()
        .map(|row| {
            row.bytes()
                .map(|b| match b {
                    b'#' => Ok(true),
                    b'.' => Ok(false),
                    other => Err(ParseError::InvalidFormat(format!(
                        "tile {id}: unexpected pixel {:?}",
                        other as char
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Pixels, _>>()?;

    if pixels.len() < 3 || pixels.iter().any(|row| row.len() != pixels.len()) {
        return Err(ParseError::InvalidFormat(format!(
            "tile {id} is not a square of at least 3 x 3"
        )));
    }
    Ok(Tile { id, pixels })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let tiles = blocks(input)
            .iter()
            .map(|lines| parse_tile(lines))
            .collect::<Result<Vec<_>, _>>()?;
        if tiles.is_empty() {
            return Err(ParseError::MissingData("no tiles".into()));
        }
        let size = tiles[0].pixels.len();
        if tiles.iter().any(|t| t.pixels.len() != size) {
            return Err(ParseError::InvalidFormat("tiles differ in size".into()));
        }
        Ok(SharedData::new(tiles))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let corners = shared.corners();
        if corners.len() != 4 {
            return Err(SolveError::NoSolution(format!(
                "expected 4 corner tiles, found {}",
                corners.len()
            )));
        }
        Ok(corners.iter().map(|t| t.id).product::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let image = stitch(&shared.assemble()?);
        roughness(&image)
            .map(|r| r.to_string())
            .ok_or_else(|| SolveError::NoSolution("no sea monsters in any orientation".into()))
    }
}
