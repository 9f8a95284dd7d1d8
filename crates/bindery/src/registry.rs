//! Capability resolution
//!
//! The registry owns the override map and the resolved-mapping cache and
//! implements the lookup order: cache, explicit override, namespace scan. A
//! capability resolves to exactly one registration or the attempt fails;
//! successful bindings are permanent for the registry's lifetime, failures
//! cache nothing and are re-attempted on the next call.

use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::capability::Capability;
use crate::error::{Error, Result};
use crate::registration::Registration;
use crate::scanner::{ImplementationScanner, TableScanner};

/// Explicit capability-to-implementation bindings
///
/// Keyed by capability name, valued by implementation name, so configuration
/// files can express overrides directly (e.g. `removal = "aggressive"`).
/// Read-only once handed to a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    bindings: BTreeMap<String, String>,
}

impl Overrides {
    /// Create an empty override map
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind capability `C` to a named implementation
    pub fn assign<C>(self, implementation: impl Into<String>) -> Self
    where
        C: Capability + ?Sized,
    {
        self.assign_named(C::NAME, implementation)
    }

    /// Bind a capability by name to a named implementation
    pub fn assign_named(
        mut self,
        capability: impl Into<String>,
        implementation: impl Into<String>,
    ) -> Self {
        self.bindings
            .insert(capability.into(), implementation.into());
        self
    }

    /// The implementation name bound for `capability`, if any
    pub fn target(&self, capability: &str) -> Option<&str> {
        self.bindings.get(capability).map(String::as_str)
    }

    /// Whether no overrides are present
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate the (capability, implementation) bindings in capability order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(capability, implementation)| (capability.as_str(), implementation.as_str()))
    }
}

/// Registry resolving capabilities to bound registrations
///
/// Constructed once with a namespace, an override map, and a scanner; the
/// only state that changes afterwards is the resolved-mapping cache. The
/// whole lookup runs under one lock, so concurrent callers resolving the
/// same unbound capability cannot scan-and-bind independently and never
/// observe a half-written binding.
pub struct ImplementationRegistry {
    /// Module-path prefix the scan is confined to
    namespace: String,
    /// Explicit bindings consulted before any scan
    overrides: Overrides,
    /// Discovery port
    scanner: Arc<dyn ImplementationScanner>,
    /// Resolved-mapping cache, keyed by capability `TypeId`
    bound: Mutex<HashMap<TypeId, &'static Registration>>,
}

impl ImplementationRegistry {
    /// Create a registry over the compile-time registration table
    pub fn new(namespace: impl Into<String>, overrides: Overrides) -> Self {
        Self::with_scanner(namespace, overrides, Arc::new(TableScanner))
    }

    /// Create a registry with an injected scanner
    pub fn with_scanner(
        namespace: impl Into<String>,
        overrides: Overrides,
        scanner: Arc<dyn ImplementationScanner>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            overrides,
            scanner,
            bound: Mutex::new(HashMap::new()),
        }
    }

    /// The namespace this registry scans
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The override map this registry was constructed with
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Whether capability `C` is already in the resolved-mapping cache
    pub fn is_bound<C>(&self) -> bool
    where
        C: Capability + ?Sized,
    {
        self.cache().contains_key(&TypeId::of::<C>())
    }

    /// Resolve the registration bound to capability `C`
    ///
    /// Lookup order: resolved-mapping cache, then the override map (a direct
    /// named lookup, never a scan), then a namespace scan. Scan and override
    /// lookup must both yield exactly one candidate; zero or more than one
    /// fail with [`Error::Resolution`] and nothing is cached.
    pub fn resolve<C>(&self) -> Result<&'static Registration>
    where
        C: Capability + ?Sized,
    {
        let capability = TypeId::of::<C>();
        let mut bound = self.cache();
        if let Some(registration) = bound.get(&capability).copied() {
            trace!(
                "Capability '{}' already bound to '{}'",
                C::NAME,
                registration.name
            );
            return Ok(registration);
        }

        let registration = match self.overrides.target(C::NAME) {
            Some(target) => self.lookup_override(C::NAME, capability, target)?,
            None => self.scan(C::NAME, capability)?,
        };
        bound.insert(capability, registration);
        debug!(
            "Bound capability '{}' to implementation '{}'",
            C::NAME,
            registration.name
        );
        Ok(registration)
    }

    // Bindings are inserted whole, so a poisoned cache only ever holds
    // completed entries and the lock can be reclaimed.
    fn cache(&self) -> MutexGuard<'_, HashMap<TypeId, &'static Registration>> {
        match self.bound.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lookup_override(
        &self,
        capability_name: &'static str,
        capability: TypeId,
        target: &str,
    ) -> Result<&'static Registration> {
        let candidates = self.scanner.find_named(capability, target);
        if candidates.len() != 1 {
            warn!(
                "Override for capability '{}' selects '{}' but {} registrations match",
                capability_name,
                target,
                candidates.len()
            );
        }
        self.exactly_one(capability_name, candidates)
    }

    fn scan(
        &self,
        capability_name: &'static str,
        capability: TypeId,
    ) -> Result<&'static Registration> {
        let candidates = self
            .scanner
            .find_implementations(capability, &self.namespace);
        self.exactly_one(capability_name, candidates)
    }

    fn exactly_one(
        &self,
        capability_name: &'static str,
        candidates: Vec<&'static Registration>,
    ) -> Result<&'static Registration> {
        match candidates.as_slice() {
            [registration] => Ok(*registration),
            _ => Err(Error::resolution(
                capability_name,
                self.namespace.clone(),
                candidates.iter().map(|entry| entry.name).collect(),
            )),
        }
    }
}

impl std::fmt::Debug for ImplementationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound = self.cache().len();
        f.debug_struct("ImplementationRegistry")
            .field("namespace", &self.namespace)
            .field("overrides", &self.overrides)
            .field("bound", &bound)
            .finish()
    }
}
