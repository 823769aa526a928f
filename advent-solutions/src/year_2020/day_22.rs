//! Day 22: Crab Combat

use std::collections::{HashSet, VecDeque};

use advent_solver::input::blocks;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 22, tags = ["simulation", "recursion"])]
pub struct Solver;

type Deck = VecDeque<u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

/// Sum of each card times its position counted from the bottom
fn score(deck: &Deck) -> u64 {
    deck.iter()
        .rev()
        .zip(1u64..)
        .map(|(&card, position)| u64::from(card) * position)
        .sum()
}

fn combat(mut one: Deck, mut two: Deck) -> (Player, Deck) {
    while let (Some(&a), Some(&b)) = (one.front(), two.front()) {
        one.pop_front();
        two.pop_front();
        if a > b {
            one.extend([a, b]);
        } else {
            two.extend([b, a]);
        }
    }
    if two.is_empty() {
        (Player::One, one)
    } else {
        (Player::Two, two)
    }
}

/// Play recursive combat; a state seen before in the same game ends it in
/// favour of player one
fn recursive_combat(mut one: Deck, mut two: Deck, depth: usize) -> (Player, Deck) {
    let mut seen: HashSet<(Deck, Deck)> = HashSet::new();

    while !one.is_empty() && !two.is_empty() {
        if !seen.insert((one.clone(), two.clone())) {
            log::trace!("repeated state at depth {depth}");
            return (Player::One, one);
        }

        let (Some(a), Some(b)) = (one.pop_front(), two.pop_front()) else {
            break;
        };
        let winner = if one.len() >= a as usize && two.len() >= b as usize {
            let sub_one = one.iter().take(a as usize).copied().collect();
            let sub_two = two.iter().take(b as usize).copied().collect();
            recursive_combat(sub_one, sub_two, depth + 1).0
        } else if a > b {
            Player::One
        } else {
            Player::Two
        };

        match winner {
            Player::One => one.extend([a, b]),
            Player::Two => two.extend([b, a]),
        }
    }

    if two.is_empty() {
        (Player::One, one)
    } else {
        (Player::Two, two)
    }
}

fn parse_deck(lines: &[&str], player: &str) -> Result<Deck, ParseError> {
    let (header, cards) = lines
        .split_first()
        .ok_or_else(|| ParseError::MissingData(format!("deck for {player}")))?;
    if *header != format!("{player}:") {
        return Err(ParseError::InvalidFormat(format!(
            "expected `{player}:`, found {header:?}"
        )));
    }
    cards
        .iter()
        .map(|card| {
            card.parse::<u32>()
                .map_err(|e| ParseError::InvalidFormat(format!("{player} card {card:?}: {e}")))
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = (Deck, Deck);

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        match blocks(input).as_slice() {
            [one, two] => Ok((parse_deck(one, "Player 1")?, parse_deck(two, "Player 2")?)),
            other => Err(ParseError::InvalidFormat(format!(
                "expected two decks, found {}",
                other.len()
            ))),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (winner, deck) = combat(shared.0.clone(), shared.1.clone());
        log::debug!("{winner:?} wins combat");
        Ok(score(&deck).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (winner, deck) = recursive_combat(shared.0.clone(), shared.1.clone(), 0);
        log::debug!("{winner:?} wins recursive combat");
        Ok(score(&deck).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "306");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "291");
    }

    #[test]
    fn plain_combat_winner() {
        let (one, two) = Solver::parse(EXAMPLE).unwrap();
        let (winner, deck) = combat(one, two);
        assert_eq!(winner, Player::Two);
        assert_eq!(deck, VecDeque::from([3, 2, 10, 6, 8, 5, 9, 4, 7, 1]));
    }

    #[test]
    fn repeated_state_ends_the_game() {
        let one = VecDeque::from([43, 19]);
        let two = VecDeque::from([2, 29, 14]);
        let (winner, _) = recursive_combat(one, two, 0);
        assert_eq!(winner, Player::One);
    }

    #[test]
    fn decks_must_be_labelled() {
        assert!(Solver::parse("Player 1:\n1\n\nPlayer 3:\n2\n").is_err());
        assert!(Solver::parse("Player 1:\n1\n").is_err());
        assert!(Solver::parse("Player 1:\nx\n\nPlayer 2:\n2\n").is_err());
    }
}
