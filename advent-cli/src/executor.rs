//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::input::InputStore;
use advent_solver::SolverRegistry;
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ExecutorError>,
    /// Set on the first part of a day only, so totals count each parse once
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected year/day in order on the current thread
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()).with_file(config.input_file.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata, ordered by (year, day)
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Run every work item, handing each result to `on_result` as soon as it exists
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F) -> Vec<SolverResult>
    where
        F: FnMut(&SolverResult),
    {
        let mut results = Vec::new();
        for work in work_items {
            for result in self.run_solver(work) {
                on_result(&result);
                results.push(result);
            }
        }
        results
    }

    /// Run a single solver for the selected parts
    fn run_solver(&self, work: &WorkItem) -> Vec<SolverResult> {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.read(year, day) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("{e}");
                let message = e.to_string();
                return make_error_results(work, || ExecutorError::Input(message.clone()));
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                let message = e.to_string();
                return make_error_results(work, || ExecutorError::Setup(message.clone()));
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        work.parts
            .clone()
            .map(|part| {
                let (answer, solve_duration) = match solver.solve(part) {
                    Ok(result) => {
                        let duration = result.duration();
                        (Ok(result.answer), duration)
                    }
                    Err(e) => (Err(ExecutorError::from(e)), TimeDelta::zero()),
                };
                SolverResult {
                    year,
                    day,
                    part,
                    answer,
                    parse_duration: parse_duration.take(),
                    solve_duration,
                }
            })
            .collect()
    }
}

/// One error result for each selected part of a day that could not start
fn make_error_results(
    work: &WorkItem,
    error: impl Fn() -> ExecutorError,
) -> Vec<SolverResult> {
    work.parts
        .clone()
        .map(|part| SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        })
        .collect()
}
