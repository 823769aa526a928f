use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Vec<&str>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(words)
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Vec<&str>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Vec<&str>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|w| w.len()).max().unwrap_or(0).to_string())
    }
}

impl PartSolver<3> for Words {
    fn solve(shared: &mut Vec<&str>) -> Result<String, SolveError> {
        Ok(shared.join("-"))
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<Words as Solver>::PARTS, 3);
}

#[test]
fn borrowed_shared_data_is_dispatched_per_part() {
    let input = String::from("red green blue");
    let mut shared = Words::parse(&input).unwrap();

    assert_eq!(Words::solve_part(&mut shared, 1).unwrap(), "3");
    assert_eq!(Words::solve_part(&mut shared, 2).unwrap(), "5");
    assert_eq!(Words::solve_part(&mut shared, 3).unwrap(), "red-green-blue");
}

#[test]
fn unknown_parts_are_not_implemented() {
    let mut shared = Words::parse("x").unwrap();
    assert!(matches!(
        Words::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
    assert!(matches!(
        Words::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
}

#[test]
fn parse_errors_surface_unchanged() {
    assert_eq!(
        Words::parse("  \n").err(),
        Some(ParseError::MissingData("no words".into()))
    );
}
