//! Advent CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::{OutputFormatter, Summary};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter))
        .init();

    let registry = build_registry(&config.tags)?;
    log::info!("{} solver(s) registered", registry.len());

    let executor = Executor::new(registry, &config);
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(config.quiet);
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let results = executor.execute(&work_items, |result| formatter.print_result(result));

    let summary = Summary::from_results(&results);
    formatter.print_summary(&summary);

    if summary.failed > 0 {
        return Err(CliError::Failures {
            failed: summary.failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<advent_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_2020_day_is_registered() {
        let registry = build_registry(&[]).unwrap();
        let days: Vec<u8> = registry
            .iter_info()
            .filter(|info| info.year == 2020)
            .map(|info| info.day)
            .collect();
        assert_eq!(days, (1..=24).collect::<Vec<_>>());
        assert!(registry.iter_info().all(|info| info.parts == 2));
    }

    #[test]
    fn tags_must_all_match() {
        let vm = build_registry(&["vm".to_string()]).unwrap();
        assert!(vm.contains(2020, 8));
        assert!(!vm.contains(2020, 1));

        let none = build_registry(&["vm".to_string(), "no-such-tag".to_string()]).unwrap();
        assert!(none.is_empty());
    }
}
