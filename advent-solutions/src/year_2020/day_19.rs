//! Day 19: Monster Messages

use std::collections::{BTreeSet, HashMap, HashSet};

use advent_solver::input::blocks;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 19, tags = ["grammar"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Char(u8),
    /// Alternatives, each a sequence of rule ids
    Alt(Vec<Vec<u32>>),
}

#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: HashMap<u32, Rule>,
}

impl Grammar {
    /// Every position where a match of `rule` starting at `start` can end
    ///
    /// Tracking all end positions instead of a single one lets alternatives
    /// and recursive rules backtrack naturally. `active` holds the
    /// `(rule, start)` pairs being expanded; re-entering one of them would
    /// consume nothing, so that branch matches nothing instead of looping.
    fn ends(
        &self,
        rule: u32,
        message: &[u8],
        start: usize,
        active: &mut HashSet<(u32, usize)>,
    ) -> BTreeSet<usize> {
        let alternatives = match self.rules.get(&rule) {
            None => return BTreeSet::new(),
            Some(Rule::Char(c)) => {
                return match message.get(start) {
                    Some(m) if m == c => BTreeSet::from([start + 1]),
                    _ => BTreeSet::new(),
                };
            }
            Some(Rule::Alt(alternatives)) => alternatives,
        };
        if !active.insert((rule, start)) {
            return BTreeSet::new();
        }

        let mut found = BTreeSet::new();
        for sequence in alternatives {
            let mut positions = BTreeSet::from([start]);
            for &part in sequence {
                let mut next = BTreeSet::new();
                for p in positions.into_iter().filter(|&p| p < message.len()) {
                    next.extend(self.ends(part, message, p, active));
                }
                positions = next;
            }
            found.extend(positions);
        }

        active.remove(&(rule, start));
        found
    }

    pub fn matches(&self, message: &str) -> bool {
        self.ends(0, message.as_bytes(), 0, &mut HashSet::new())
            .contains(&message.len())
    }

    /// Grammar with the looping versions of rules 8 and 11
    fn with_loops(&self) -> Result<Self, SolveError> {
        if let Some(missing) = [42, 31].into_iter().find(|id| !self.rules.contains_key(id)) {
            return Err(SolveError::NoSolution(format!(
                "rule {missing} is needed for the looping rules"
            )));
        }
        let mut rules = self.rules.clone();
        rules.insert(8, Rule::Alt(vec![vec![42], vec![42, 8]]));
        rules.insert(11, Rule::Alt(vec![vec![42, 31], vec![42, 11, 31]]));
        Ok(Self { rules })
    }
}

fn parse_rule(line: &str) -> anyhow::Result<(u32, Rule)> {
    let (id, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `<id>: <rule>`, got {line:?}"))?;
    let id = id.trim().parse().context("bad rule id")?;
    let body = body.trim();

    if let Some(literal) = body.strip_prefix('"').and_then(|b| b.strip_suffix('"')) {
        return match literal.as_bytes() {
            [c] => Ok((id, Rule::Char(*c))),
            _ => Err(anyhow!("terminal must be one character, got {literal:?}")),
        };
    }

    let alternatives = body
        .split('|')
        .map(|seq| {
            seq.split_whitespace()
                .map(|r| r.parse::<u32>().with_context(|| format!("bad rule reference {r:?}")))
                .collect::<anyhow::Result<Vec<_>>>()
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if alternatives.iter().any(Vec::is_empty) {
        return Err(anyhow!("empty alternative in rule {id}"));
    }
    Ok((id, Rule::Alt(alternatives)))
}

#[derive(Debug)]
pub struct SharedData<'a> {
    grammar: Grammar,
    messages: Vec<&'a str>,
}

fn count_matching(grammar: &Grammar, messages: &[&str]) -> usize {
    messages.iter().filter(|m| grammar.matches(m)).count()
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut sections = blocks(input).into_iter();
        let rule_lines = sections
            .next()
            .ok_or_else(|| ParseError::MissingData("grammar rules".into()))?;
        let rules = rule_lines
            .iter()
            .enumerate()
            .map(|(idx, line)| parse_rule(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect::<Result<HashMap<_, _>, _>>()?;
        if !rules.contains_key(&0) {
            return Err(ParseError::MissingData("rule 0".into()));
        }
        let messages = sections.next().unwrap_or_default();
        Ok(SharedData {
            grammar: Grammar { rules },
            messages,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_matching(&shared.grammar, &shared.messages).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let looping = shared.grammar.with_loops()?;
        Ok(count_matching(&looping, &shared.messages).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "\
0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: \"a\"
5: \"b\"

ababbb
bababa
abbbab
aaabbb
aaaabbb
";

    const LOOPING: &str = "\
42: \"a\"
31: \"b\"
0: 8 11
8: 42
11: 42 31

aab
aaabb
ab
abb
aaab
";

    const LOOP_EXAMPLE: &str = "\
42: 9 14 | 10 1
9: 14 27 | 1 26
10: 23 14 | 28 1
1: \"a\"
11: 42 31
5: 1 14 | 15 1
19: 14 1 | 14 14
12: 24 14 | 19 1
16: 15 1 | 14 14
31: 14 17 | 1 13
6: 14 14 | 1 14
2: 1 24 | 14 4
0: 8 11
13: 14 3 | 1 12
15: 1 | 14
17: 14 2 | 1 7
23: 25 1 | 22 14
28: 16 1
4: 1 1
20: 14 14 | 1 15
3: 5 14 | 16 1
27: 1 6 | 14 18
14: \"b\"
21: 14 1 | 1 14
25: 1 1 | 1 14
22: 14 14
8: 42
26: 14 22 | 1 20
18: 15 15
7: 14 5 | 1 21
24: 14 1

abbbbbabbbaaaababbaabbbbabababbbabbbbbbabaaaa
bbabbbbaabaabba
babbbbaabbbbbabbbbbbaabaaabaaa
aaabbbbbbaaaabaababaabababbabaaabbababababaaa
bbbbbbbaaaabbbbaaabbabaaa
bbbababbbbaaaaaaaabbababaaababaabab
ababaaaaaabaaab
ababaaaaabbbaba
baabbaaaabbaaaababbaababb
abbbbabbbbaaaababbbbbbaaaababb
aaaaabbaabaaaaababaa
aaaabbaaaabbaaa
aaaabbaabbaaaaaaabbbabbbaaabbaabaaa
babaaabbbaaabaababbaabababaaab
aabbbbbaabbbaaaaaabbbbbababaaaaabbaaabba
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn example_lacks_the_looping_rules() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn looping_rules_accept_repetition() {
        let mut shared = Solver::parse(LOOPING).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");

        let looping = shared.grammar.with_loops().unwrap();
        assert!(looping.matches("aaaaabbb"));
        assert!(!looping.matches("aabbb"));
    }

    #[test]
    fn loop_example() {
        let mut shared = Solver::parse(LOOP_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "12");

        let looping = shared.grammar.with_loops().unwrap();
        assert!(looping.matches("babbbbaabbbbbabbbbbbaabaaabaaa"));
        assert!(!looping.matches("aaaabbaaaabbaaa"));
    }

    #[test]
    fn rules_that_only_refer_to_each_other_match_nothing() {
        let mut shared = Solver::parse("0: 1 | 2\n1: 0\n2: \"a\"\n\na\nb\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");

        let mut shared = Solver::parse("0: 1\n1: 0\n\na\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "0");
    }

    #[test]
    fn rule_syntax() {
        assert_eq!(parse_rule("4: \"a\"").unwrap(), (4, Rule::Char(b'a')));
        assert_eq!(
            parse_rule("1: 2 3 | 3 2").unwrap(),
            (1, Rule::Alt(vec![vec![2, 3], vec![3, 2]]))
        );
        assert!(parse_rule("1: 2 |").is_err());
        assert!(parse_rule("x: 1").is_err());
        assert!(parse_rule("4: \"ab\"").is_err());
    }
}
