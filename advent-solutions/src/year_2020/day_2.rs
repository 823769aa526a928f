//! Day 2: Password Philosophy

use std::sync::LazyLock;

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};
use regex::Regex;

static POLICY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)-(\d+) ([a-z]): ([a-z]*)$").expect("valid policy regex")
});

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 2, tags = ["strings"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    lo: usize,
    hi: usize,
    letter: u8,
    password: &'a str,
}

impl<'a> Entry<'a> {
    fn parse(line: &'a str) -> anyhow::Result<Self> {
        let caps = POLICY
            .captures(line)
            .ok_or_else(|| anyhow!("expected `lo-hi c: password`, got {line:?}"))?;
        let number = |i: usize| caps[i].parse::<usize>().context("policy bound out of range");
        let password = caps.get(4).map_or("", |m| m.as_str());
        Ok(Entry {
            lo: number(1)?,
            hi: number(2)?,
            letter: caps[3].as_bytes()[0],
            password,
        })
    }

    fn count_policy(&self) -> bool {
        let count = self.password.bytes().filter(|&b| b == self.letter).count();
        (self.lo..=self.hi).contains(&count)
    }

    /// Exactly one of the 1-based positions holds the letter
    fn position_policy(&self) -> bool {
        let at = |pos: usize| {
            pos.checked_sub(1)
                .and_then(|i| self.password.as_bytes().get(i))
                == Some(&self.letter)
        };
        at(self.lo) != at(self.hi)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, Entry::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.count_policy()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.position_policy()).count().to_string())
    }
}
