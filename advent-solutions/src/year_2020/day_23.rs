//! Day 23: Crab Cups
//!
//! The circle is stored as a successor array: `next[label]` is the label of
//! the cup clockwise of `label`. Index 0 is unused.

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 23, tags = ["simulation", "linked-list"])]
pub struct Solver;

const SHORT_GAME: usize = 100;
const MILLION: usize = 1_000_000;
const LONG_GAME: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cups {
    next: Vec<usize>,
    current: usize,
}

impl Cups {
    /// Circle of `labels` followed by every label up to `total`
    fn new(labels: &[usize], total: usize) -> Self {
        let total = total.max(labels.len());
        let mut next = vec![0; total + 1];
        let order = labels.iter().copied().chain(labels.len() + 1..=total);
        let mut prev: Option<usize> = None;
        let mut first = 0;
        for label in order {
            match prev {
                Some(p) => next[p] = label,
                None => first = label,
            }
            prev = Some(label);
        }
        if let Some(last) = prev {
            next[last] = first;
        }
        Self {
            next,
            current: first,
        }
    }

    fn len(&self) -> usize {
        self.next.len() - 1
    }

    fn play(&mut self, moves: usize) {
        let highest = self.len();
        for _ in 0..moves {
            let a = self.next[self.current];
            let b = self.next[a];
            let c = self.next[b];

            let mut destination = self.current;
            loop {
                destination = if destination == 1 { highest } else { destination - 1 };
                if destination != a && destination != b && destination != c {
                    break;
                }
            }

            self.next[self.current] = self.next[c];
            self.next[c] = self.next[destination];
            self.next[destination] = a;
            self.current = self.next[self.current];
        }
    }

    /// Labels clockwise from cup 1, excluding it
    fn after_one(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.next[1]), |&label| Some(self.next[label]))
            .take_while(|&label| label != 1)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let line = input.trim();
        let labels = line
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as usize)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("cup label {c:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut sorted = labels.clone();
        sorted.sort_unstable();
        if sorted.is_empty() || !sorted.iter().copied().eq(1..=labels.len()) {
            return Err(ParseError::InvalidFormat(format!(
                "cups must be labelled 1 to {}, got {line:?}",
                labels.len()
            )));
        }
        if labels.len() < 5 {
            return Err(ParseError::InvalidFormat("at least 5 cups are needed".into()));
        }
        Ok(labels)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut cups = Cups::new(shared, shared.len());
        cups.play(SHORT_GAME);
        Ok(cups.after_one().map(|label| label.to_string()).collect())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut cups = Cups::new(shared, MILLION);
        cups.play(LONG_GAME);
        let first = cups.next[1];
        let second = cups.next[first];
        log::debug!("stars are under cups {first} and {second}");
        Ok((first as u64 * second as u64).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "389125467\n";

    fn labels_after(moves: usize) -> String {
        let labels = Solver::parse(EXAMPLE).unwrap();
        let mut cups = Cups::new(&labels, labels.len());
        cups.play(moves);
        cups.after_one().map(|l| l.to_string()).collect()
    }

    #[test]
    fn example_short_games() {
        assert_eq!(labels_after(10), "92658374");
        assert_eq!(labels_after(100), "67384529");
    }

    #[test]
    fn part1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "67384529");
    }

    #[test]
    #[ignore = "ten million moves; slow without optimisations"]
    fn part2() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "149245887792");
    }

    #[test]
    fn extra_cups_follow_the_given_ones() {
        let cups = Cups::new(&[3, 1, 2], 6);
        assert_eq!(cups.current, 3);
        assert_eq!(cups.after_one().collect::<Vec<_>>(), vec![2, 4, 5, 6, 3]);
    }

    #[test]
    fn labels_must_be_a_permutation() {
        assert!(Solver::parse("389125467").is_ok());
        assert!(Solver::parse("389125461").is_err());
        assert!(Solver::parse("38912546x").is_err());
        assert!(Solver::parse("").is_err());
    }
}
