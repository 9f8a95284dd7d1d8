//! Object construction
//!
//! The factory is the construction boundary callers hold. Capabilities go
//! through the registry (resolve, run the registered factory, downcast);
//! concrete types are constructed directly and never touch the registry. One
//! factory owns one registry for its lifetime and is shared by reference.

use tracing::trace;

use crate::capability::Capability;
use crate::error::{Error, Result};
use crate::registry::{ImplementationRegistry, Overrides};

/// Construction entry point holding one registry
///
/// Explicitly constructed and explicitly passed; there is no process-wide
/// instance. Every call produces a fresh instance; only the
/// capability-to-implementation binding is memoized, in the registry.
#[derive(Debug)]
pub struct ObjectFactory {
    registry: ImplementationRegistry,
}

impl ObjectFactory {
    /// Create a factory over the compile-time registration table
    pub fn new(namespace: impl Into<String>, overrides: Overrides) -> Self {
        Self::with_registry(ImplementationRegistry::new(namespace, overrides))
    }

    /// Create a factory around an existing registry
    pub fn with_registry(registry: ImplementationRegistry) -> Self {
        Self { registry }
    }

    /// The registry this factory resolves through
    pub fn registry(&self) -> &ImplementationRegistry {
        &self.registry
    }

    /// Create an instance of the implementation bound to capability `C`
    ///
    /// Resolution may trigger a one-time namespace scan and a cache write.
    /// Fails with [`Error::Resolution`] when the capability does not resolve
    /// to exactly one registration, and with [`Error::Construction`] when the
    /// registered factory fails or produces an instance of another
    /// capability.
    pub fn create<C>(&self) -> Result<Box<C>>
    where
        C: Capability + ?Sized,
    {
        let registration = self.registry.resolve::<C>()?;
        let instance = (registration.factory)()
            .map_err(|reason| Error::construction(C::NAME, registration.name, reason))?;
        match instance.downcast::<Box<C>>() {
            Ok(object) => {
                trace!(
                    "Constructed '{}' for capability '{}'",
                    registration.name,
                    C::NAME
                );
                Ok(*object)
            }
            Err(_) => Err(Error::construction(
                C::NAME,
                registration.name,
                "registered factory produced an instance of another capability",
            )),
        }
    }

    /// Construct a concrete type directly
    ///
    /// The concrete path never consults the registry and cannot fail at
    /// runtime; types without a niladic constructor are rejected at compile
    /// time by the `Default` bound.
    pub fn construct<T: Default>(&self) -> T {
        trace!("Constructed concrete type '{}'", std::any::type_name::<T>());
        T::default()
    }
}
