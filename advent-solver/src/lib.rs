//! Advent of Code Solver Library
//!
//! A small, type-safe framework every puzzle plugs into. A puzzle is a type
//! that knows how to parse its input into shared data ([`AocParser`]) and how
//! to answer each part ([`PartSolver`]); the `AocSolver` derive glues the
//! parts together into a [`Solver`].
//!
//! The life of one puzzle run is linear: load the input text, parse and
//! pre-process it once, then solve part 1 and part 2 against the same data.
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//! use advent_solver::input::parse_lines;
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
//!         parse_lines(input, |line| line.parse::<i64>())
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Sums>(2020, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2020, 1, "1\n2\n3\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "10");
//! assert_eq!(solver.solve(2).unwrap().answer, "24");
//! ```
//!
//! # Plugins
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//! `inventory`, so a binary only needs to link the solutions crate and call
//! [`SolverRegistryBuilder::register_all_plugins`]:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2020, day = 8, tags = ["vm"])]
//! pub struct Solver;
//! ```

mod error;
pub mod input;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the derive macros
pub use inventory;

pub use advent_solver_macros::{AocSolver, AutoRegisterSolver};
