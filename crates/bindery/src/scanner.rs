//! Namespace scanning port
//!
//! Discovery is a port so resolution logic can be exercised against synthetic
//! tables in tests. The default scanner reads the compile-time registration
//! table; both queries are pure (no caching here, memoization lives in the
//! registry).

use std::any::TypeId;

use tracing::trace;

use crate::registration::{IMPLEMENTATIONS, Registration};

/// Discovery port for implementation candidates
pub trait ImplementationScanner: Send + Sync {
    /// Enumerate the implementations of `capability` registered under `namespace`
    ///
    /// This is the scan the registry falls back to when no override exists.
    fn find_implementations(
        &self,
        capability: TypeId,
        namespace: &str,
    ) -> Vec<&'static Registration>;

    /// Locate implementations of `capability` by registered name, in any namespace
    ///
    /// Override bindings are looked up through this query, never through
    /// `find_implementations`.
    fn find_named(&self, capability: TypeId, name: &str) -> Vec<&'static Registration>;
}

/// Scanner backed by the compile-time registration table
///
/// Candidates are returned in implementation-name order so diagnostics do not
/// depend on link order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableScanner;

impl ImplementationScanner for TableScanner {
    fn find_implementations(
        &self,
        capability: TypeId,
        namespace: &str,
    ) -> Vec<&'static Registration> {
        let mut candidates: Vec<&'static Registration> = IMPLEMENTATIONS
            .iter()
            .filter(|entry| entry.satisfies(capability) && entry.in_namespace(namespace))
            .collect();
        candidates.sort_by_key(|entry| entry.name);
        trace!("Scanned namespace '{}': {} candidates", namespace, candidates.len());
        candidates
    }

    fn find_named(&self, capability: TypeId, name: &str) -> Vec<&'static Registration> {
        IMPLEMENTATIONS
            .iter()
            .filter(|entry| entry.satisfies(capability) && entry.name == name)
            .collect()
    }
}
