//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is not given
pub const INPUT_DIR_ENV: &str = "ADVENT_INPUT_DIR";
/// Input directory used when neither the flag nor the environment sets one
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory searched for `{year}/dayDD.txt` inputs
    pub input_dir: PathBuf,
    /// Explicit input file for a single selected day
    pub input_file: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_filter: &'static str,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var_os(INPUT_DIR_ENV))
    }

    /// Build config with an explicit value for `ADVENT_INPUT_DIR`
    pub fn resolve(args: Args, env_input_dir: Option<OsString>) -> Result<Self, CliError> {
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "--input needs a single day; pass --year and --day as well".to_string(),
            ));
        }

        let input_dir = args
            .input_dir
            .or_else(|| env_input_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            quiet: args.quiet,
            log_filter: log_filter(args.verbose),
        })
    }
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("advent").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn input_dir_prefers_flag_then_env_then_default() {
        let flag = Config::resolve(args(&["--input-dir", "puzzles"]), Some("env".into())).unwrap();
        assert_eq!(flag.input_dir, PathBuf::from("puzzles"));

        let env = Config::resolve(args(&[]), Some("env".into())).unwrap();
        assert_eq!(env.input_dir, PathBuf::from("env"));

        let empty_env = Config::resolve(args(&[]), Some("".into())).unwrap();
        assert_eq!(empty_env.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));

        let default = Config::resolve(args(&[]), None).unwrap();
        assert_eq!(default.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("a/~")), PathBuf::from("a/~"));
    }

    #[test]
    fn explicit_input_requires_a_single_day() {
        assert!(matches!(
            Config::resolve(args(&["--input", "day.txt"]), None),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            Config::resolve(args(&["--input", "day.txt", "--year", "2020"]), None),
            Err(CliError::Config(_))
        ));

        let config =
            Config::resolve(args(&["--input", "day.txt", "-y", "2020", "-d", "3"]), None).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("day.txt")));
    }

    #[test]
    fn verbosity_raises_the_log_filter() {
        assert_eq!(Config::resolve(args(&[]), None).unwrap().log_filter, "warn");
        assert_eq!(Config::resolve(args(&["-v"]), None).unwrap().log_filter, "info");
        assert_eq!(Config::resolve(args(&["-vv"]), None).unwrap().log_filter, "debug");
        assert_eq!(Config::resolve(args(&["-vvvv"]), None).unwrap().log_filter, "trace");
    }
}
