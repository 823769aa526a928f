//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Every day derives `AutoRegisterSolver`,
//! so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find them.

pub mod utils;

#[cfg(feature = "year-2020")]
pub mod year_2020;
