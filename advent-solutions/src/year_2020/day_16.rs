//! Day 16: Ticket Translation

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use advent_solver::input::blocks;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

static RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z ]+): (\d+)-(\d+) or (\d+)-(\d+)$").expect("valid rule regex")
});

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 16, tags = ["constraints"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    name: &'a str,
    ranges: [RangeInclusive<u64>; 2],
}

impl Rule<'_> {
    fn accepts(&self, value: u64) -> bool {
        self.ranges.iter().any(|r| r.contains(&value))
    }
}

#[derive(Debug)]
pub struct Notes<'a> {
    rules: Vec<Rule<'a>>,
    mine: Vec<u64>,
    nearby: Vec<Vec<u64>>,
}

impl<'a> Notes<'a> {
    fn matches_any(&self, value: u64) -> bool {
        self.rules.iter().any(|r| r.accepts(value))
    }

    /// Rule name for each ticket position
    ///
    /// Candidates are narrowed by every valid ticket, then positions with a
    /// single candidate remove that rule from all other positions until
    /// nothing changes.
    fn field_order(&self) -> Result<Vec<&'a str>, SolveError> {
        let all_rules = u64::MAX >> (64 - self.rules.len());
        let mut candidates = vec![all_rules; self.mine.len()];

        let valid = std::iter::once(&self.mine)
            .chain(&self.nearby)
            .filter(|t| t.len() == self.mine.len() && t.iter().all(|&v| self.matches_any(v)));
        for ticket in valid {
            for (slot, &value) in candidates.iter_mut().zip(ticket) {
                for (bit, rule) in self.rules.iter().enumerate() {
                    if !rule.accepts(value) {
                        *slot &= !(1 << bit);
                    }
                }
            }
        }

        let mut resolved = 0u64;
        while let Some(single) = candidates
            .iter()
            .copied()
            .find(|c| c.count_ones() == 1 && c & resolved == 0)
        {
            resolved |= single;
            for slot in candidates.iter_mut().filter(|c| **c != single) {
                *slot &= !single;
            }
        }

        let order = candidates
            .iter()
            .enumerate()
            .map(|(pos, c)| match c.count_ones() {
                1 => Ok(self.rules[c.trailing_zeros() as usize].name),
                0 => Err(SolveError::NoSolution(format!(
                    "no rule fits ticket position {pos}"
                ))),
                n => Err(SolveError::NoSolution(format!(
                    "ticket position {pos} is ambiguous between {n} rules"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !order.iter().all_unique() {
            return Err(SolveError::NoSolution(
                "one rule is claimed by several ticket positions".into(),
            ));
        }
        Ok(order)
    }
}

fn parse_rule(line: &str) -> Result<Rule<'_>, ParseError> {
    let bad = || ParseError::InvalidFormat(format!("bad ticket rule {line:?}"));
    let caps = RULE.captures(line).ok_or_else(bad)?;
    let num = |i: usize| caps[i].parse::<u64>().map_err(|_| bad());
    Ok(Rule {
        name: caps.get(1).map_or("", |m| m.as_str()),
        ranges: [num(2)?..=num(3)?, num(4)?..=num(5)?],
    })
}

fn parse_ticket(line: &str) -> Result<Vec<u64>, ParseError> {
    line.split(',')
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidFormat(format!("bad ticket {line:?}")))
        })
        .collect()
}

fn section<'a>(
    block: Option<&Vec<&'a str>>,
    header: &str,
) -> Result<Vec<&'a str>, ParseError> {
    match block.map(Vec::as_slice) {
        Some([first, rest @ ..]) if *first == header => Ok(rest.to_vec()),
        _ => Err(ParseError::MissingData(format!("`{header}` section"))),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Notes<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let sections = blocks(input);
        let rules = sections
            .first()
            .ok_or_else(|| ParseError::MissingData("ticket rules".into()))?
            .iter()
            .map(|&line| parse_rule(line))
            .collect::<Result<Vec<_>, _>>()?;
        if rules.is_empty() || rules.len() > 64 {
            return Err(ParseError::InvalidFormat(format!(
                "expected 1 to 64 rules, got {}",
                rules.len()
            )));
        }

        let mine = section(sections.get(1), "your ticket:")?
            .first()
            .ok_or_else(|| ParseError::MissingData("your ticket".into()))
            .and_then(|line| parse_ticket(line))?;
        let nearby = section(sections.get(2), "nearby tickets:")?
            .into_iter()
            .map(parse_ticket)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Notes {
            rules,
            mine,
            nearby,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .nearby
            .iter()
            .flatten()
            .filter(|&&v| !shared.matches_any(v))
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let order = shared.field_order()?;
        log::debug!("ticket fields: {order:?}");
        Ok(order
            .iter()
            .zip(&shared.mine)
            .filter(|(name, _)| name.starts_with("departure"))
            .map(|(_, &value)| value)
            .product::<u64>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use pretty_assertions::assert_eq;

    const ERROR_RATE: &str = "\
class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12
";

    const FIELDS: &str = "\
class: 0-1 or 4-19
row: 0-5 or 8-19
seat: 0-13 or 16-19

your ticket:
11,12,13

nearby tickets:
3,9,18
15,1,5
5,14,9
";

    #[test]
    fn error_rate() {
        let mut shared = Solver::parse(ERROR_RATE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "71");
    }

    #[test]
    fn deduces_field_order() {
        let notes = Solver::parse(FIELDS).unwrap();
        assert_eq!(notes.field_order().unwrap(), vec!["row", "class", "seat"]);
    }

    #[test]
    fn departure_product() {
        let input = FIELDS.replace("class:", "departure class:").replace("seat:", "departure seat:");
        let mut shared = Solver::parse(&input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), (12 * 13).to_string());
    }

    #[test]
    fn ambiguous_fields_have_no_solution() {
        let input = "a: 0-5 or 10-20\nb: 0-5 or 10-20\n\nyour ticket:\n1,2\n\nnearby tickets:\n3,4\n";
        let notes = Solver::parse(input).unwrap();
        assert!(matches!(notes.field_order(), Err(SolveError::NoSolution(_))));
    }

    #[test]
    fn missing_sections_are_reported() {
        assert!(matches!(
            Solver::parse("a: 1-2 or 3-4\n\nnearby tickets:\n1\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
