//! Local puzzle input lookup

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}/day{day:02}.txt`, with the flat
/// `{input_dir}/{year}_day{day:02}.txt` accepted as a fallback.
pub struct InputStore {
    input_dir: PathBuf,
    /// Used for every lookup when set
    file: Option<PathBuf>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            file: None,
        }
    }

    /// Read every input from `file` instead of the directory
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    /// Paths tried for a year/day, in lookup order
    pub fn candidates(&self, year: u16, day: u8) -> Vec<PathBuf> {
        match &self.file {
            Some(file) => vec![file.clone()],
            None => vec![
                self.input_dir
                    .join(year.to_string())
                    .join(format!("day{day:02}.txt")),
                self.input_dir.join(format!("{year}_day{day:02}.txt")),
            ],
        }
    }

    /// Read the first candidate that exists
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let tried = self.candidates(year, day);
        for path in &tried {
            match fs::read_to_string(path) {
                Ok(content) => {
                    log::debug!("{year}/{day:02}: reading {}", path.display());
                    return Ok(content);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(InputError::Read {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }
        Err(InputError::Missing { year, day, tried })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn candidate_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(
            store.candidates(2020, 3),
            vec![
                PathBuf::from("inputs/2020/day03.txt"),
                PathBuf::from("inputs/2020_day03.txt"),
            ]
        );

        let store = store.with_file(Some(PathBuf::from("mine.txt")));
        assert_eq!(store.candidates(2020, 25), vec![PathBuf::from("mine.txt")]);
    }

    #[test]
    fn nested_layout_wins_over_flat() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        fs::write(temp.path().join("2020_day01.txt"), "flat").unwrap();
        assert_eq!(store.read(2020, 1).unwrap(), "flat");

        fs::create_dir(temp.path().join("2020")).unwrap();
        fs::write(temp.path().join("2020").join("day01.txt"), "nested").unwrap();
        assert_eq!(store.read(2020, 1).unwrap(), "nested");
    }

    #[test]
    fn missing_input_lists_every_candidate() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        match store.read(2020, 9) {
            Err(InputError::Missing { year, day, tried }) => {
                assert_eq!((year, day), (2020, 9));
                assert_eq!(tried.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2020").join("day04.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(matches!(store.read(2020, 4), Err(InputError::Read { .. })));
    }
}
