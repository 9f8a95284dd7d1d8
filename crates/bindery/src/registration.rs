//! Implementation registration table
//!
//! Auto-registration of capability implementations using linkme distributed
//! slices. Implementations register themselves via the
//! [`implementation!`](macro@crate::implementation) macro and are discovered
//! at runtime by the [scanner](crate::scanner). The table is complete at link
//! time; nothing registers or unregisters while the process runs.

use std::any::{Any, TypeId};

/// Type-erased constructed instance
///
/// A registration's factory wraps the concrete object as `Box<dyn C>` for its
/// capability `C`, then boxes that again so one table can carry every
/// capability. [`ObjectFactory::create`](crate::factory::ObjectFactory::create)
/// recovers the inner `Box<C>` by downcast.
pub type BoxedInstance = Box<dyn Any + Send + Sync>;

/// Registry entry for one capability implementation
///
/// Usually declared through [`implementation!`](macro@crate::implementation);
/// all fields are public so entries with hand-written factories can be
/// declared directly with `#[linkme::distributed_slice(IMPLEMENTATIONS)]`.
pub struct Registration {
    /// Stable name of the capability this implementation satisfies
    pub capability: &'static str,
    /// Accessor for the capability's `TypeId` (not const-constructible)
    pub capability_id: fn() -> TypeId,
    /// Unique implementation name within the capability (e.g. "console")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Module path of the registration site; the namespace scans match on it
    pub module_path: &'static str,
    /// Factory producing a [`BoxedInstance`] holding a `Box<dyn C>`
    pub factory: fn() -> Result<BoxedInstance, String>,
}

impl Registration {
    /// Whether this registration lies within `namespace`
    ///
    /// Matching is segment-aware on the registering module path: `"a::b"`
    /// contains `"a::b"` and `"a::b::c"` but not `"a::bc"`. The empty
    /// namespace contains every registration.
    pub fn in_namespace(&self, namespace: &str) -> bool {
        if namespace.is_empty() {
            return true;
        }
        match self.module_path.strip_prefix(namespace) {
            Some(rest) => rest.is_empty() || rest.starts_with("::"),
            None => false,
        }
    }

    /// Whether this registration satisfies the capability with the given `TypeId`
    pub fn satisfies(&self, capability: TypeId) -> bool {
        (self.capability_id)() == capability
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("capability", &self.capability)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("module_path", &self.module_path)
            .finish()
    }
}

// Auto-collection via linkme distributed slices - implementations submit entries at compile time
#[linkme::distributed_slice]
pub static IMPLEMENTATIONS: [Registration] = [..];

/// List every registration linked into the current binary
///
/// Sorted by capability name, then implementation name, so catalogs and
/// diagnostics are deterministic regardless of link order.
pub fn implementations() -> Vec<&'static Registration> {
    let mut entries: Vec<&'static Registration> = IMPLEMENTATIONS.iter().collect();
    entries.sort_by_key(|entry| (entry.capability, entry.name));
    entries
}

/// List the registrations for one capability name, sorted by implementation name
pub fn implementations_of(capability: &str) -> Vec<&'static Registration> {
    let mut entries: Vec<&'static Registration> = IMPLEMENTATIONS
        .iter()
        .filter(|entry| entry.capability == capability)
        .collect();
    entries.sort_by_key(|entry| entry.name);
    entries
}

/// Register a default-constructible implementation for a capability
///
/// Declares a [`Registration`] static in the calling module and submits it to
/// [`IMPLEMENTATIONS`]. The registration's namespace is the calling module's
/// path; its factory default-constructs the implementation and erases it as a
/// [`BoxedInstance`]. The capability must have been declared with
/// [`capability!`](macro@crate::capability).
///
/// # Example
///
/// ```ignore
/// #[derive(Default)]
/// pub struct ConsoleAnnouncer;
///
/// impl Announcer for ConsoleAnnouncer {
///     fn announce(&self, message: &str) {
///         println!("{message}");
///     }
/// }
///
/// bindery::implementation! {
///     static CONSOLE_ANNOUNCER for dyn Announcer {
///         implementation: ConsoleAnnouncer,
///         name: "console",
///         description: "prints announcements to standard output",
///     }
/// }
/// ```
#[macro_export]
macro_rules! implementation {
    (
        $(#[$attr:meta])*
        static $entry:ident for $capability:ty {
            implementation: $implementation:ty,
            name: $name:expr,
            description: $description:expr $(,)?
        }
    ) => {
        $(#[$attr])*
        #[linkme::distributed_slice($crate::IMPLEMENTATIONS)]
        static $entry: $crate::Registration = $crate::Registration {
            capability: <$capability as $crate::Capability>::NAME,
            capability_id: || ::core::any::TypeId::of::<$capability>(),
            name: $name,
            description: $description,
            module_path: ::core::module_path!(),
            factory: || {
                let instance: $crate::BoxedInstance = ::std::boxed::Box::new(
                    ::std::boxed::Box::new(
                        <$implementation as ::core::default::Default>::default(),
                    ) as ::std::boxed::Box<$capability>,
                );
                ::core::result::Result::Ok(instance)
            },
        };
    };
}
