//! Day 18: Operation Order

use advent_solver::input::parse_lines;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{anyhow, bail};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 18, tags = ["parser"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, lhs: u64, rhs: u64) -> anyhow::Result<u64> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Mul => lhs.checked_mul(rhs),
        }
        .ok_or_else(|| anyhow!("overflow evaluating {lhs} {self:?} {rhs}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Num(u64),
    Op(Op),
    Open,
    Close,
}

/// Split an expression into tokens and check that it is well formed
fn tokenize(line: &str) -> anyhow::Result<Vec<Token>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let token = match bytes[i] {
            b' ' => {
                i += 1;
                continue;
            }
            b'+' => Token::Op(Op::Add),
            b'*' => Token::Op(Op::Mul),
            b'(' => Token::Open,
            b')' => Token::Close,
            b'0'..=b'9' => {
                let end = bytes[i..]
                    .iter()
                    .position(|b| !b.is_ascii_digit())
                    .map_or(bytes.len(), |len| i + len);
                let value = line[i..end].parse()?;
                i = end;
                tokens.push(Token::Num(value));
                continue;
            }
            other => bail!("unexpected character {:?}", other as char),
        };
        tokens.push(token);
        i += 1;
    }
    check_shape(&tokens)?;
    Ok(tokens)
}

/// Operands and operators alternate and parentheses balance
fn check_shape(tokens: &[Token]) -> anyhow::Result<()> {
    let mut depth = 0usize;
    let mut want_operand = true;
    for (pos, token) in tokens.iter().enumerate() {
        match (token, want_operand) {
            (Token::Num(_), true) => want_operand = false,
            (Token::Open, true) => depth += 1,
            (Token::Op(_), false) => want_operand = true,
            (Token::Close, false) if depth > 0 => depth -= 1,
            _ => bail!("unexpected {token:?} at token {}", pos + 1),
        }
    }
    if want_operand || depth != 0 {
        bail!("incomplete expression");
    }
    Ok(())
}

/// Shunting-yard evaluation; a higher `precedence` binds tighter and equal
/// precedence associates to the left
pub fn evaluate(tokens: &[Token], precedence: fn(Op) -> u8) -> anyhow::Result<u64> {
    fn reduce(values: &mut Vec<u64>, op: Op) -> anyhow::Result<()> {
        let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
            bail!("operator {op:?} is missing an operand");
        };
        values.push(op.apply(lhs, rhs)?);
        Ok(())
    }

    let mut values = Vec::new();
    // None marks an open parenthesis
    let mut ops: Vec<Option<Op>> = Vec::new();

    for &token in tokens {
        match token {
            Token::Num(n) => values.push(n),
            Token::Open => ops.push(None),
            Token::Close => loop {
                match ops.pop() {
                    Some(Some(op)) => reduce(&mut values, op)?,
                    Some(None) => break,
                    None => bail!("unbalanced `)`"),
                }
            },
            Token::Op(op) => {
                while let Some(&Some(top)) = ops.last() {
                    if precedence(top) < precedence(op) {
                        break;
                    }
                    ops.pop();
                    reduce(&mut values, top)?;
                }
                ops.push(Some(op));
            }
        }
    }
    while let Some(op) = ops.pop() {
        reduce(&mut values, op.ok_or_else(|| anyhow!("unbalanced `(`"))?)?;
    }
    match values.as_slice() {
        [value] => Ok(*value),
        _ => bail!("expression left {} values", values.len()),
    }
}

fn flat(_: Op) -> u8 {
    0
}

fn addition_first(op: Op) -> u8 {
    match op {
        Op::Add => 1,
        Op::Mul => 0,
    }
}

fn sum_all(expressions: &[Vec<Token>], precedence: fn(Op) -> u8) -> Result<String, SolveError> {
    expressions
        .iter()
        .try_fold(0u64, |total, tokens| {
            let value = evaluate(tokens, precedence)?;
            total
                .checked_add(value)
                .ok_or_else(|| anyhow!("sum of expressions overflows"))
        })
        .map(|total| total.to_string())
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Token>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, tokenize)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_all(shared, flat)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_all(shared, addition_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLES: [(&str, u64, u64); 6] = [
        ("1 + 2 * 3 + 4 * 5 + 6", 71, 231),
        ("1 + (2 * 3) + (4 * (5 + 6))", 51, 51),
        ("2 * 3 + (4 * 5)", 26, 46),
        ("5 + (8 * 3 + 9 + 3 * 4 * 3)", 437, 1445),
        ("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))", 12240, 669060),
        ("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2", 13632, 23340),
    ];

    #[test]
    fn examples() {
        for (expr, flat_value, addition_value) in EXAMPLES {
            let tokens = tokenize(expr).unwrap();
            assert_eq!(evaluate(&tokens, flat).unwrap(), flat_value, "{expr}");
            assert_eq!(
                evaluate(&tokens, addition_first).unwrap(),
                addition_value,
                "{expr}"
            );
        }
    }

    #[test]
    fn sums_every_line() {
        let input = EXAMPLES.map(|(expr, _, _)| expr).join("\n");
        let mut shared = Solver::parse(&input).unwrap();
        let flat_total: u64 = EXAMPLES.iter().map(|e| e.1).sum();
        let addition_total: u64 = EXAMPLES.iter().map(|e| e.2).sum();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), flat_total.to_string());
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), addition_total.to_string());
    }

    #[test]
    fn multi_digit_numbers() {
        let tokens = tokenize("12 * (30 + 4)").unwrap();
        assert_eq!(evaluate(&tokens, flat).unwrap(), 408);
    }

    #[test]
    fn malformed_expressions_are_parse_errors() {
        for bad in ["1 +", "(1 + 2", "1 + 2)", "* 3", "1 2", "1 - 2", "()"] {
            assert!(tokenize(bad).is_err(), "{bad}");
        }
        assert!(matches!(
            Solver::parse("1 + 2\n(3"),
            Err(ParseError::InvalidLine { line: 2, .. })
        ));
    }
}
