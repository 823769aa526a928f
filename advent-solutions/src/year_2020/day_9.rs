//! Day 9: Encoding Error

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

const PREAMBLE: usize = 25;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 9, tags = ["search"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    numbers: Vec<u64>,
    preamble: usize,
    invalid: Option<u64>,
}

impl SharedData {
    fn new(numbers: Vec<u64>, preamble: usize) -> Self {
        Self {
            numbers,
            preamble,
            invalid: None,
        }
    }

    /// First number that is not the sum of two different numbers in the
    /// `preamble` numbers before it; remembered for part 2
    fn invalid(&mut self) -> Result<u64, SolveError> {
        if let Some(invalid) = self.invalid {
            return Ok(invalid);
        }
        let invalid = self
            .numbers
            .windows(self.preamble + 1)
            .find_map(|window| {
                let (candidate, previous) = window.split_last()?;
                (!is_pair_sum(previous, *candidate)).then_some(*candidate)
            })
            .ok_or_else(|| SolveError::NoSolution("every number follows the rule".into()))?;
        log::debug!("first invalid number: {invalid}");
        Ok(*self.invalid.insert(invalid))
    }
}

fn is_pair_sum(previous: &[u64], target: u64) -> bool {
    previous.iter().enumerate().any(|(i, &a)| {
        previous[i + 1..]
            .iter()
            .any(|&b| a != b && a + b == target)
    })
}

/// Contiguous run of at least two numbers adding up to `target`
fn contiguous_sum(numbers: &[u64], target: u64) -> Option<&[u64]> {
    let (mut start, mut sum) = (0, 0u64);
    for (end, &n) in numbers.iter().enumerate() {
        sum += n;
        while sum > target && start < end {
            sum -= numbers[start];
            start += 1;
        }
        if sum == target && end > start {
            return Some(&numbers[start..=end]);
        }
    }
    None
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let numbers = parse_lines(input, |line| line.parse::<u64>())?;
        if numbers.len() <= PREAMBLE {
            return Err(ParseError::MissingData(format!(
                "need more than {PREAMBLE} numbers, got {}",
                numbers.len()
            )));
        }
        Ok(SharedData::new(numbers, PREAMBLE))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.invalid().map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let invalid = shared.invalid()?;
        let range = contiguous_sum(&shared.numbers, invalid)
            .ok_or_else(|| SolveError::NoSolution("no qualifying contiguous range found".into()))?;
        let min = range.iter().min().copied().unwrap_or_default();
        let max = range.iter().max().copied().unwrap_or_default();
        Ok((min + max).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: [u64; 20] = [
        35, 20, 15, 25, 47, 40, 62, 55, 65, 95, 102, 117, 150, 182, 127, 219, 299, 277, 309, 576,
    ];

    #[test]
    fn example() {
        let mut shared = SharedData::new(EXAMPLE.to_vec(), 5);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "127");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "62");
    }

    #[test]
    fn part2_alone_computes_the_invalid_number() {
        let mut shared = SharedData::new(EXAMPLE.to_vec(), 5);
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "62");
        assert_eq!(shared.invalid, Some(127));
    }

    #[test]
    fn single_number_is_not_a_range() {
        assert_eq!(contiguous_sum(&[1, 5, 9], 5), None);
        assert_eq!(contiguous_sum(&[1, 5, 9], 14), Some(&[5, 9][..]));
    }

    #[test]
    fn missing_range_is_reported() {
        let mut shared = SharedData::new(vec![1, 2, 3, 100, 7], 3);
        assert_eq!(shared.invalid().unwrap(), 100);
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(msg)) if msg.contains("contiguous")
        ));
    }

    #[test]
    fn equal_numbers_do_not_pair() {
        assert!(!is_pair_sum(&[5, 5, 1], 10));
        assert!(is_pair_sum(&[4, 6, 1], 10));
    }

    #[test]
    fn short_input_is_rejected() {
        assert!(matches!(
            Solver::parse("1\n2\n3"),
            Err(ParseError::MissingData(_))
        ));
    }
}
