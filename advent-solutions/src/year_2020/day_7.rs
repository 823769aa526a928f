//! Day 7: Handy Haversacks

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::LazyLock;

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};
use regex::Regex;

use crate::utils::memo::{DpCache, DpProblem, HashMapBackend};

const TARGET: &str = "shiny gold";

static RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+ \w+) bags contain (.+)\.$").expect("valid rule regex")
});
static CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) (\w+ \w+) bags?$").expect("valid content regex"));

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 7, tags = ["graph", "memo"])]
pub struct Solver;

/// Bag color to the (count, color) pairs it must directly contain
pub type Rules<'a> = HashMap<&'a str, Vec<(u64, &'a str)>>;

fn parse_rule(line: &str) -> anyhow::Result<(&str, Vec<(u64, &str)>)> {
    let caps = RULE
        .captures(line)
        .ok_or_else(|| anyhow!("expected `<color> bags contain ...`, got {line:?}"))?;
    let (Some(outer), Some(contents)) = (caps.get(1), caps.get(2)) else {
        return Err(anyhow!("incomplete rule {line:?}"));
    };

    if contents.as_str() == "no other bags" {
        return Ok((outer.as_str(), Vec::new()));
    }

    let inner = contents
        .as_str()
        .split(", ")
        .map(|part| {
            let caps = CONTENT
                .captures(part)
                .ok_or_else(|| anyhow!("expected `<n> <color> bags`, got {part:?}"))?;
            let count = caps[1].parse::<u64>().context("bag count out of range")?;
            let color = caps.get(2).map_or("", |m| m.as_str());
            Ok((count, color))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok((outer.as_str(), inner))
}

/// Colors other than `target` that can hold it at any depth
fn holders<'a>(rules: &Rules<'a>, target: &str) -> HashSet<&'a str> {
    let mut parents: HashMap<&str, Vec<&'a str>> = HashMap::new();
    for (&outer, contents) in rules {
        for &(_, inner) in contents {
            parents.entry(inner).or_default().push(outer);
        }
    }

    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([target]);
    while let Some(color) = queue.pop_front() {
        for &parent in parents.get(color).into_iter().flatten() {
            if parent != target && seen.insert(parent) {
                queue.push_back(parent);
            }
        }
    }
    seen
}

/// A color reachable from `start` that ends up containing itself
fn cycle_from<'a>(rules: &Rules<'a>, start: &'a str) -> Option<&'a str> {
    enum Mark {
        Open,
        Done,
    }

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    // (color, children already pushed)
    let mut stack = vec![(start, false)];
    while let Some((color, expanded)) = stack.pop() {
        if expanded {
            marks.insert(color, Mark::Done);
            continue;
        }
        match marks.get(color) {
            Some(Mark::Done) => continue,
            Some(Mark::Open) => return Some(color),
            None => {}
        }
        marks.insert(color, Mark::Open);
        stack.push((color, true));
        for &(_, inner) in rules.get(color).into_iter().flatten() {
            match marks.get(inner) {
                Some(Mark::Open) => return Some(inner),
                Some(Mark::Done) => {}
                None => stack.push((inner, false)),
            }
        }
    }
    None
}

/// Number of bags nested inside one bag of a color
struct NestedBags<'r, 'a> {
    rules: &'r Rules<'a>,
}

impl<'a> DpProblem<&'a str, u64> for NestedBags<'_, 'a> {
    fn deps(&self, color: &&'a str) -> Vec<&'a str> {
        self.rules
            .get(color)
            .map(|contents| contents.iter().map(|&(_, inner)| inner).collect())
            .unwrap_or_default()
    }

    fn compute(&self, color: &&'a str, deps: Vec<u64>) -> u64 {
        self.rules
            .get(color)
            .into_iter()
            .flatten()
            .zip(deps)
            .map(|(&(count, _), nested)| count * (1 + nested))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Rules<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(parse_lines(input, parse_rule)?.into_iter().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(holders(shared, TARGET).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.contains_key(TARGET) {
            return Err(SolveError::NoSolution(format!("no rule for {TARGET} bags")));
        }
        if let Some(color) = cycle_from(shared, TARGET) {
            return Err(SolveError::NoSolution(format!(
                "{color} bags end up containing themselves"
            )));
        }
        let cache = DpCache::new(HashMapBackend::new(), NestedBags { rules: shared });
        let total = cache.get(&TARGET);
        log::debug!("resolved {} bag colors", cache.cached());
        Ok(total.to_string())
    }
}
