//! Error types for the CLI

use itertools::Itertools;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// At least one selected solver did not produce an answer
    #[error("{failed} of {total} result(s) failed")]
    Failures { failed: usize, total: usize },
}

/// Input lookup errors
#[derive(Error, Debug)]
pub enum InputError {
    /// None of the candidate files exist
    #[error("no input for {year}/{day:02} (looked in {})", display_paths(.tried))]
    Missing {
        year: u16,
        day: u8,
        tried: Vec<PathBuf>,
    },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display()).join(", ")
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded; shared by every part of the day
    #[error("{0}")]
    Input(String),

    /// The solver could not be created, usually a parse failure
    #[error("{0}")]
    Setup(String),

    /// Solving the part failed
    #[error(transparent)]
    Solve(#[from] advent_solver::SolveError),
}
