//! Day 4: Passport Processing

use std::collections::HashMap;
use std::sync::LazyLock;

use advent_solver::input::blocks;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];
const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

static HAIR_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").expect("valid hair color regex"));
static PASSPORT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").expect("valid passport id regex"));

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 4, tags = ["validation"])]
pub struct Solver;

#[derive(Debug, Default)]
pub struct Passport<'a> {
    fields: HashMap<&'a str, &'a str>,
}

impl Passport<'_> {
    fn has_required_fields(&self) -> bool {
        REQUIRED.iter().all(|key| self.fields.contains_key(key))
    }

    fn is_valid(&self) -> bool {
        self.has_required_fields()
            && self
                .fields
                .iter()
                .all(|(key, value)| field_is_valid(key, value))
    }
}

fn year_in(value: &str, lo: u32, hi: u32) -> bool {
    value.len() == 4 && value.parse::<u32>().is_ok_and(|y| (lo..=hi).contains(&y))
}

fn height_is_valid(value: &str) -> bool {
    let (number, range) = if let Some(cm) = value.strip_suffix("cm") {
        (cm, 150..=193)
    } else if let Some(inches) = value.strip_suffix("in") {
        (inches, 59..=76)
    } else {
        return false;
    };
    number.parse::<u32>().is_ok_and(|h| range.contains(&h))
}

/// Unknown keys (including `cid`) are accepted as-is
fn field_is_valid(key: &str, value: &str) -> bool {
    match key {
        "byr" => year_in(value, 1920, 2002),
        "iyr" => year_in(value, 2010, 2020),
        "eyr" => year_in(value, 2020, 2030),
        "hgt" => height_is_valid(value),
        "hcl" => HAIR_COLOR.is_match(value),
        "ecl" => EYE_COLORS.contains(&value),
        "pid" => PASSPORT_ID.is_match(value),
        _ => true,
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        blocks(input)
            .into_iter()
            .enumerate()
            .map(|(idx, lines)| {
                let mut passport = Passport::default();
                for token in lines.iter().flat_map(|l| l.split_whitespace()) {
                    let (key, value) = token.split_once(':').ok_or_else(|| {
                        ParseError::InvalidFormat(format!(
                            "passport {}: expected key:value, got {token:?}",
                            idx + 1
                        ))
                    })?;
                    passport.fields.insert(key, value);
                }
                Ok(passport)
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|p| p.has_required_fields())
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.is_valid()).count().to_string())
    }
}
