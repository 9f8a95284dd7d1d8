//! Capability identity
//!
//! A capability is an object-safe trait that callers depend on without naming
//! a concrete type. Implementing [`Capability`] for the trait object gives it
//! a stable name used in configuration, logs, and error messages; the
//! [`capability!`](macro@crate::capability) macro writes that impl.

/// Marker trait identifying a resolvable abstract type
///
/// Implemented for `dyn Trait` objects, not for concrete types. The
/// `Send + Sync + 'static` bounds let resolved instances cross threads and be
/// type-erased for the registration table.
pub trait Capability: Send + Sync + 'static {
    /// Stable capability name, unique within the linked program
    ///
    /// This is the key override maps and diagnostics use (e.g. "announcer").
    const NAME: &'static str;
}

/// Declare a trait object as a resolvable capability
///
/// Expands to the [`Capability`] impl for the trait object, fixing its stable
/// name. The trait must be object-safe and `Send + Sync`.
///
/// # Example
///
/// ```ignore
/// pub trait Announcer: Send + Sync {
///     fn announce(&self, message: &str);
/// }
///
/// bindery::capability!(dyn Announcer as "announcer");
/// ```
#[macro_export]
macro_rules! capability {
    ($capability:ty as $name:expr) => {
        impl $crate::Capability for $capability {
            const NAME: &'static str = $name;
        }
    };
}
