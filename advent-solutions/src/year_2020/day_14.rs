//! Day 14: Docking Data

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow, bail};
use regex::Regex;

const WIDTH: usize = 36;

static MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mask = ([01X]{36})$").expect("valid mask regex"));
static WRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mem\[(\d+)\] = (\d+)$").expect("valid write regex"));

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 14, tags = ["bits"])]
pub struct Solver;

/// A 36-bit mask split into its forced-one, forced-zero and floating bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mask {
    ones: u64,
    zeros: u64,
    floating: u64,
}

impl FromStr for Mask {
    type Err = anyhow::Error;

    fn from_str(bits: &str) -> Result<Self, Self::Err> {
        if bits.len() != WIDTH {
            bail!("mask must be {WIDTH} bits, got {}", bits.len());
        }
        bits.bytes().try_fold(Mask::default(), |m, c| {
            let shifted = Mask {
                ones: m.ones << 1,
                zeros: m.zeros << 1,
                floating: m.floating << 1,
            };
            Ok(match c {
                b'1' => Mask {
                    ones: shifted.ones | 1,
                    ..shifted
                },
                b'0' => Mask {
                    zeros: shifted.zeros | 1,
                    ..shifted
                },
                b'X' => Mask {
                    floating: shifted.floating | 1,
                    ..shifted
                },
                other => bail!("unexpected mask bit {:?}", other as char),
            })
        })
    }
}

impl Mask {
    /// Version 1 decoder: 1 and 0 overwrite the value, X keeps it
    fn apply_to_value(&self, value: u64) -> u64 {
        (value & !self.zeros) | self.ones
    }

    /// Version 2 decoder: 1 overwrites, 0 keeps, X takes both values
    fn addresses(&self, address: u64) -> impl Iterator<Item = u64> + use<> {
        let base = (address | self.ones) & !self.floating;
        let floating = self.floating;
        // Walk every submask of the floating bits, ending with the empty one
        let mut next = Some(floating);
        std::iter::from_fn(move || {
            let current = next?;
            next = (current != 0).then(|| (current - 1) & floating);
            Some(base | current)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetMask(Mask),
    Write { address: u64, value: u64 },
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = MASK.captures(line) {
            return Ok(Command::SetMask(caps[1].parse()?));
        }
        let caps = WRITE
            .captures(line)
            .ok_or_else(|| anyhow!("expected `mask = ...` or `mem[a] = v`, got {line:?}"))?;
        Ok(Command::Write {
            address: caps[1].parse().context("address out of range")?,
            value: caps[2].parse().context("value out of range")?,
        })
    }
}

/// Run the program and sum memory; `store` performs one write under a mask
fn run<F>(program: &[Command], mut store: F) -> u64
where
    F: FnMut(&mut HashMap<u64, u64>, &Mask, u64, u64),
{
    let mut memory = HashMap::new();
    let mut mask = Mask::default();
    for command in program {
        match *command {
            Command::SetMask(m) => mask = m,
            Command::Write { address, value } => store(&mut memory, &mask, address, value),
        }
    }
    log::debug!("{} memory cells written", memory.len());
    memory.values().sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let program = parse_lines(input, str::parse::<Command>)?;
        if let Some(idx) = program
            .iter()
            .take_while(|c| !matches!(c, Command::SetMask(_)))
            .position(|c| matches!(c, Command::Write { .. }))
        {
            return Err(ParseError::at_line(idx + 1, "memory write before the first mask"));
        }
        Ok(program)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = run(shared, |memory, mask, address, value| {
            memory.insert(address, mask.apply_to_value(value));
        });
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = run(shared, |memory, mask, address, value| {
            memory.extend(mask.addresses(address).map(|a| (a, value)));
        });
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const VALUES: &str = "\
mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0
";

    const ADDRESSES: &str = "\
mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1
";

    #[test]
    fn value_decoder() {
        let mut shared = Solver::parse(VALUES).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "165");
    }

    #[test]
    fn address_decoder() {
        let mut shared = Solver::parse(ADDRESSES).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "208");
    }

    #[test]
    fn floating_addresses() {
        let mask: Mask = "000000000000000000000000000000X1001X".parse().unwrap();
        let decoded: BTreeSet<u64> = mask.addresses(42).collect();
        assert_eq!(decoded, BTreeSet::from([26, 27, 58, 59]));
    }

    #[test]
    fn write_before_mask_is_rejected() {
        assert!(matches!(
            Solver::parse("mem[1] = 2\n"),
            Err(ParseError::InvalidLine { line: 1, .. })
        ));
        assert!("mask = 0101".parse::<Command>().is_err());
    }

    /// Expand floating bits one at a time, in the given bit order
    fn expand_in_order(base: u64, bits: &[u32]) -> BTreeSet<u64> {
        bits.iter().fold(BTreeSet::from([base]), |set, &bit| {
            set.into_iter()
                .flat_map(|a| [a & !(1 << bit), a | (1 << bit)])
                .collect()
        })
    }

    proptest! {
        #[test]
        fn address_set_does_not_depend_on_expansion_order(
            floating in prop::collection::btree_set(0u32..36, 0..8),
            ones in 0u64..(1 << 36),
            address in 0u64..(1 << 36),
            seed in any::<u64>(),
        ) {
            let floating_bits = floating.iter().fold(0u64, |m, &b| m | (1 << b));
            let mask = Mask { ones: ones & !floating_bits, zeros: 0, floating: floating_bits };

            let decoded: Vec<u64> = mask.addresses(address).collect();
            let unique: BTreeSet<u64> = decoded.iter().copied().collect();
            prop_assert_eq!(decoded.len(), 1 << floating.len());
            prop_assert_eq!(unique.len(), decoded.len());

            let mut order: Vec<u32> = floating.into_iter().collect();
            let rotate_by = (seed as usize) % order.len().max(1);
            order.rotate_left(rotate_by);
            order.reverse();
            let base = address | mask.ones;
            prop_assert_eq!(unique, expand_in_order(base, &order));
        }
    }
}
