//! Day 8: Handheld Halting
//!
//! A three-instruction console: `acc` adds to the accumulator, `jmp` moves
//! the program counter by a relative offset and `nop` does nothing.

use std::str::FromStr;

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 8, tags = ["vm"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

impl Instruction {
    /// `jmp` and `nop` swapped; `acc` has no counterpart
    fn flipped(self) -> Option<Self> {
        match self {
            Instruction::Acc(_) => None,
            Instruction::Jmp(arg) => Some(Instruction::Nop(arg)),
            Instruction::Nop(arg) => Some(Instruction::Jmp(arg)),
        }
    }
}

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (op, arg) = line
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected `<op> <arg>`, got {line:?}"))?;
        let arg: i64 = arg
            .parse()
            .with_context(|| format!("bad argument {arg:?}"))?;
        match op {
            "acc" => Ok(Instruction::Acc(arg)),
            "jmp" => Ok(Instruction::Jmp(arg)),
            "nop" => Ok(Instruction::Nop(arg)),
            other => Err(anyhow!("unknown instruction {other:?}")),
        }
    }
}

/// How a run of the program ended, with the accumulator at that point
///
/// Each instruction runs at most once, so the sum of `i64` arguments always
/// fits the wider accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The program counter left the program
    Halted(i128),
    /// An instruction was about to run a second time
    Looped(i128),
}

pub fn run(program: &[Instruction]) -> Outcome {
    let mut visited = vec![false; program.len()];
    let mut acc = 0i128;
    let mut pc = 0usize;

    loop {
        let Some(instruction) = program.get(pc) else {
            return Outcome::Halted(acc);
        };
        if std::mem::replace(&mut visited[pc], true) {
            return Outcome::Looped(acc);
        }
        let offset = match *instruction {
            Instruction::Acc(arg) => {
                acc += i128::from(arg);
                1
            }
            Instruction::Jmp(arg) => arg,
            Instruction::Nop(_) => 1,
        };
        let next = isize::try_from(offset)
            .ok()
            .and_then(|offset| pc.checked_add_signed(offset));
        pc = match next {
            Some(next) => next,
            None => return Outcome::Halted(acc),
        };
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse::<Instruction>)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match run(shared) {
            Outcome::Looped(acc) => Ok(acc.to_string()),
            Outcome::Halted(acc) => Err(SolveError::NoSolution(format!(
                "program halted with accumulator {acc} instead of looping"
            ))),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        for idx in 0..shared.len() {
            let Some(patched) = shared[idx].flipped() else {
                continue;
            };
            let original = std::mem::replace(&mut shared[idx], patched);
            let outcome = run(shared);
            shared[idx] = original;

            if let Outcome::Halted(acc) = outcome {
                log::debug!("patching {original:?} at {idx} to {patched:?} halts the program");
                return Ok(acc.to_string());
            }
        }
        Err(SolveError::NoSolution(
            "no single jmp/nop swap makes the program halt".into(),
        ))
    }
}
