//! Memoized evaluation over a dependency DAG
//!
//! A [`DpProblem`] says which indices a value depends on and how to combine
//! the dependency values; [`DpCache`] resolves dependencies on demand and
//! computes every index at most once.
//!
//! The dependency graph must be acyclic. A cycle recurses until the stack
//! overflows.
//!
//! # Example
//!
//! ```
//! use advent_solutions::utils::memo::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::new(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&50), 12_586_269_025);
//! ```

mod backend;
mod cache;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpProblem};
