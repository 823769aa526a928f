//! Day 10: Adapter Array

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::memo::{DpCache, DpProblem, VecBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 10, tags = ["memo"])]
pub struct Solver;

/// Outlet (0), every adapter in ascending order, then the device
pub type Chain = Vec<u64>;

/// Ways to reach chain position `i` from the outlet
struct Arrangements<'c> {
    chain: &'c [u64],
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, &i: &usize) -> Vec<usize> {
        (i.saturating_sub(3)..i)
            .filter(|&j| self.chain[i] - self.chain[j] <= 3)
            .collect()
    }

    fn compute(&self, &i: &usize, deps: Vec<u64>) -> u64 {
        if i == 0 { 1 } else { deps.iter().sum() }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Chain;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut chain = parse_lines(input, |line| line.parse::<u64>())?;
        chain.push(0);
        chain.sort_unstable();
        let device = chain.last().copied().unwrap_or_default() + 3;
        chain.push(device);

        if let Some(gap) = chain.windows(2).find(|w| w[1] - w[0] > 3 || w[1] == w[0]) {
            return Err(ParseError::InvalidFormat(format!(
                "adapters {} and {} cannot be chained",
                gap[0], gap[1]
            )));
        }
        Ok(chain)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts = [0u64; 4];
        for pair in shared.windows(2) {
            counts[(pair[1] - pair[0]) as usize] += 1;
        }
        Ok((counts[1] * counts[3]).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cache = DpCache::new(
            VecBackend::with_capacity(shared.len()),
            Arrangements { chain: shared },
        );
        Ok(cache.get(&(shared.len() - 1)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const SMALL: &str = "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n";
    const LARGE: &str = "28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n4\n2\n34\n10\n3\n";

    #[test]
    fn small_example() {
        let mut shared = Solver::parse(SMALL).unwrap();
        assert_eq!(shared.first(), Some(&0));
        assert_eq!(shared.last(), Some(&22));
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "35");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "8");
    }

    #[test]
    fn large_example() {
        let mut shared = Solver::parse(LARGE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "220");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "19208");
    }

    #[test]
    fn runs_of_ones_multiply() {
        // runs of length 1..=5 give 1, 1, 2, 4, 7 arrangements
        let mut shared = Solver::parse("1\n2\n3\n4\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "7");
    }

    #[test]
    fn unreachable_adapter_is_rejected() {
        assert!(matches!(
            Solver::parse("1\n5\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
