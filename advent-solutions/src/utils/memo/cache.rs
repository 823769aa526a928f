//! Single-threaded memoizing evaluator

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;

/// Dependency structure and combine step of a memoized computation
///
/// - `I`: index type
/// - `K`: value type
pub trait DpProblem<I, K> {
    /// Indices this index depends on; empty for base cases
    fn deps(&self, index: &I) -> Vec<I>;

    /// Combine the resolved dependency values, given in `deps()` order
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Lazily computes and caches [`DpProblem`] values
///
/// Each index is computed once; later lookups clone the cached value.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, resolving dependencies first if it is not cached
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow is held across the recursion
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        let value = self.problem.compute(index, dep_values);

        self.backend
            .borrow_mut()
            .insert(index.clone(), value.clone());
        value
    }

    /// Number of values computed so far
    pub fn cached(&self) -> usize {
        self.backend.borrow().len()
    }
}
