//! Part 2 reusing work part 1 stored in the shared data

use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct Seats {
    ids: Vec<u32>,
    sorted: bool,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SeatFinder;

impl AocParser for SeatFinder {
    type SharedData<'a> = Seats;

    fn parse(input: &str) -> Result<Seats, ParseError> {
        let ids = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected seat id".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Seats { ids, sorted: false })
    }
}

impl PartSolver<1> for SeatFinder {
    fn solve(shared: &mut Seats) -> Result<String, SolveError> {
        shared.ids.sort_unstable();
        shared.sorted = true;
        shared
            .ids
            .last()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::NoSolution("no seats".into()))
    }
}

impl PartSolver<2> for SeatFinder {
    fn solve(shared: &mut Seats) -> Result<String, SolveError> {
        if !shared.sorted {
            shared.ids.sort_unstable();
        }
        shared
            .ids
            .windows(2)
            .find(|w| w[1] - w[0] == 2)
            .map(|w| (w[0] + 1).to_string())
            .ok_or_else(|| SolveError::NoSolution("no gap".into()))
    }
}

#[test]
fn part1_leaves_sorted_ids_behind() {
    let mut shared = SeatFinder::parse("9\n5\n7\n4").unwrap();
    assert_eq!(SeatFinder::solve_part(&mut shared, 1).unwrap(), "9");
    assert!(shared.sorted);
    assert_eq!(shared.ids, vec![4, 5, 7, 9]);
}

#[test]
fn part2_works_with_and_without_part1() {
    let mut after_part1 = SeatFinder::parse("9\n5\n7\n4").unwrap();
    SeatFinder::solve_part(&mut after_part1, 1).unwrap();
    assert_eq!(SeatFinder::solve_part(&mut after_part1, 2).unwrap(), "6");

    let mut fresh = SeatFinder::parse("9\n5\n7\n4").unwrap();
    assert_eq!(SeatFinder::solve_part(&mut fresh, 2).unwrap(), "6");
}

#[test]
fn no_solution_is_propagated() {
    let mut shared = SeatFinder::parse("1\n2\n3").unwrap();
    assert!(matches!(
        SeatFinder::solve_part(&mut shared, 2),
        Err(SolveError::NoSolution(_))
    ));
}
