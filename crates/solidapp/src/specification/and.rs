//! Conjunction of specifications.

use super::Specification;
use std::fmt;

/// Satisfied when every wrapped specification is satisfied.
///
/// Holds two or more borrowed specifications, evaluated left to right and
/// stopping at the first one that fails.
pub struct AndSpecification<'a, T> {
    specs: Vec<&'a dyn Specification<T>>,
}

impl<'a, T> AndSpecification<'a, T> {
    pub fn new(first: &'a dyn Specification<T>, second: &'a dyn Specification<T>) -> Self {
        Self {
            specs: vec![first, second],
        }
    }

    /// Append another specification to the end of the conjunction.
    pub fn with(mut self, spec: &'a dyn Specification<T>) -> Self {
        self.specs.push(spec);
        self
    }

    /// Number of wrapped specifications (always at least two).
    pub fn arity(&self) -> usize {
        self.specs.len()
    }
}

impl<T> Specification<T> for AndSpecification<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

impl<T> fmt::Debug for AndSpecification<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndSpecification")
            .field("arity", &self.arity())
            .finish()
    }
}
