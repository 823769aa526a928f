//! Day 21: Allergen Assessment

use std::collections::{BTreeMap, HashSet};

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::anyhow;
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 21, tags = ["sets"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food<'a> {
    ingredients: Vec<&'a str>,
    allergens: Vec<&'a str>,
}

fn parse_food(line: &str) -> anyhow::Result<Food<'_>> {
    let (ingredients, allergens) = match line.split_once(" (contains ") {
        Some((ingredients, rest)) => {
            let list = rest
                .strip_suffix(')')
                .ok_or_else(|| anyhow!("unclosed allergen list"))?;
            (ingredients, list.split(", ").collect())
        }
        None => (line, Vec::new()),
    };
    let ingredients: Vec<&str> = ingredients.split_whitespace().collect();
    if ingredients.is_empty() {
        return Err(anyhow!("food without ingredients"));
    }
    Ok(Food {
        ingredients,
        allergens,
    })
}

#[derive(Debug)]
pub struct SharedData<'a> {
    foods: Vec<Food<'a>>,
    /// Ingredients that could carry each allergen, keyed in allergen order
    candidates: BTreeMap<&'a str, HashSet<&'a str>>,
}

impl<'a> SharedData<'a> {
    fn new(foods: Vec<Food<'a>>) -> Self {
        let mut candidates: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
        for food in &foods {
            let here: HashSet<&str> = food.ingredients.iter().copied().collect();
            for &allergen in &food.allergens {
                candidates
                    .entry(allergen)
                    .and_modify(|set| set.retain(|i| here.contains(i)))
                    .or_insert_with(|| here.clone());
            }
        }
        Self { foods, candidates }
    }

    /// Resolve allergens one at a time, always picking one with a single candidate
    fn dangerous(&self) -> Result<BTreeMap<&'a str, &'a str>, SolveError> {
        let mut open = self.candidates.clone();
        let mut resolved = BTreeMap::new();

        while !open.is_empty() {
            let (allergen, ingredient) = open
                .iter()
                .find_map(|(&allergen, set)| match set.iter().exactly_one() {
                    Ok(&ingredient) => Some((allergen, ingredient)),
                    Err(_) => None,
                })
                .ok_or_else(|| {
                    SolveError::NoSolution(format!(
                        "cannot pin down {}",
                        open.keys().join(", ")
                    ))
                })?;

            log::trace!("{allergen} is in {ingredient}");
            open.remove(allergen);
            for set in open.values_mut() {
                set.remove(ingredient);
            }
            resolved.insert(allergen, ingredient);
        }
        Ok(resolved)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let foods = parse_lines(input, parse_food)?;
        if foods.is_empty() {
            return Err(ParseError::MissingData("no foods".into()));
        }
        Ok(SharedData::new(foods))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let suspicious: HashSet<&str> = shared.candidates.values().flatten().copied().collect();
        let safe = shared
            .foods
            .iter()
            .flat_map(|food| &food.ingredients)
            .filter(|i| !suspicious.contains(*i))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.dangerous()?.values().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = "\
mxmxvkd kfcds sqjhc nhms (contains dairy, fish)
trh fvjkl sbzzf mxmxvkd (contains dairy)
sqjhc fvjkl (contains soy)
sqjhc mxmxvkd sbzzf (contains fish)
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
        assert_eq!(
            Solver::solve_part(&mut shared, 2).unwrap(),
            "mxmxvkd,sqjhc,fvjkl"
        );
    }

    #[test]
    fn candidates_are_intersections() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            shared.candidates["dairy"],
            HashSet::from(["mxmxvkd"])
        );
        assert_eq!(
            shared.candidates["fish"],
            HashSet::from(["mxmxvkd", "sqjhc"])
        );
    }

    #[test]
    fn foods_without_allergen_list_parse() {
        let food = parse_food("a b c").unwrap();
        assert_eq!(food.ingredients, vec!["a", "b", "c"]);
        assert!(food.allergens.is_empty());
        assert!(parse_food("a b (contains fish").is_err());
    }

    #[test]
    fn ambiguous_allergens_have_no_solution() {
        let mut shared = Solver::parse("a b (contains fish, soy)\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(_))
        ));
    }
}
