//! Helpers for turning raw puzzle input into parsed records
//!
//! Every puzzle input is plain text. These helpers cover the three shapes
//! that show up again and again: one record per line, blank-line separated
//! blocks, and rectangular character grids.

use crate::error::ParseError;

/// Parse every input line with `f`, keeping input order
///
/// Lines are trimmed before being handed to `f`. Trailing empty lines are
/// ignored, interior empty lines are passed through. The first failure is
/// reported with its 1-based line number.
///
/// ```
/// use advent_solver::input::parse_lines;
///
/// let numbers: Vec<u32> = parse_lines("1\n 2 \n3\n", |l| l.parse()).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
///
/// let err = parse_lines::<u32, _, _>("1\nx\n", |l| l.parse()).unwrap_err();
/// assert!(err.to_string().contains("line 2"));
/// ```
pub fn parse_lines<'a, T, E, F>(input: &'a str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> Result<T, E>,
    E: std::fmt::Display,
{
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(idx, line)| f(line.trim()).map_err(|e| ParseError::at_line(idx + 1, e)))
        .collect()
}

/// Split input into groups of lines separated by blank lines
///
/// ```
/// use advent_solver::input::blocks;
///
/// let groups = blocks("a\nb\n\nc\n\n\nd\n");
/// assert_eq!(groups, vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
/// ```
pub fn blocks(input: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for line in input.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Read a rectangular grid of ASCII characters
///
/// Returns the rows as byte vectors. Ragged rows are rejected.
pub fn grid(input: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let rows: Vec<Vec<u8>> = input
        .trim()
        .lines()
        .map(|line| line.trim().as_bytes().to_vec())
        .collect();

    let width = rows
        .first()
        .map(Vec::len)
        .ok_or_else(|| ParseError::MissingData("empty grid".into()))?;

    if let Some(idx) = rows.iter().position(|row| row.len() != width) {
        return Err(ParseError::at_line(
            idx + 1,
            format!("expected {} columns, found {}", width, rows[idx].len()),
        ));
    }
    Ok(rows)
}
