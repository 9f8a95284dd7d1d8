//! Bindery - capability resolution and object construction
//!
//! A minimal construction facility: callers ask for an abstract capability (a
//! trait), bindery resolves exactly one registered concrete implementation,
//! constructs it, and hands it back. Discovery runs over a compile-time
//! registration table, so there is no runtime reflection and no global
//! mutable state.
//!
//! ## Architecture
//!
//! - `registration`: the compile-time implementation table (linkme
//!   distributed slice) and the `capability!` / `implementation!` macros that
//!   populate it
//! - `scanner`: the discovery port; the default scanner reads the table
//! - `registry`: override map + resolved-mapping cache + the exactly-one
//!   ambiguity rule
//! - `factory`: the construction boundary callers hold
//! - `error`: the two failure kinds (resolution, construction)
//!
//! ## Resolution order
//!
//! ```text
//! create::<dyn C>()
//!     |
//!     v
//! resolved-mapping cache ----hit----> construct bound implementation
//!     | miss
//!     v
//! override map ----named lookup----> bind, cache, construct
//!     | no override
//!     v
//! namespace scan ----exactly one---> bind, cache, construct
//!     | zero or many
//!     v
//! Error::Resolution (nothing cached, re-attempted next call)
//! ```
//!
//! Successful bindings are permanent for the registry's lifetime; every
//! `create` call constructs a fresh instance.
//!
//! ## Usage
//!
//! ```ignore
//! pub trait Announcer: Send + Sync {
//!     fn announce(&self, message: &str);
//! }
//! bindery::capability!(dyn Announcer as "announcer");
//!
//! #[derive(Default)]
//! struct ConsoleAnnouncer;
//! impl Announcer for ConsoleAnnouncer {
//!     fn announce(&self, message: &str) {
//!         println!("{message}");
//!     }
//! }
//! bindery::implementation! {
//!     static CONSOLE_ANNOUNCER for dyn Announcer {
//!         implementation: ConsoleAnnouncer,
//!         name: "console",
//!         description: "prints announcements to standard output",
//!     }
//! }
//!
//! let factory = ObjectFactory::new("my_app", Overrides::new());
//! let announcer = factory.create::<dyn Announcer>()?;
//! announcer.announce("it works");
//! ```

pub mod capability;
pub mod error;
pub mod factory;
pub mod registration;
pub mod registry;
pub mod scanner;

pub use capability::Capability;
pub use error::{Error, Result};
pub use factory::ObjectFactory;
pub use registration::{
    BoxedInstance, IMPLEMENTATIONS, Registration, implementations, implementations_of,
};
pub use registry::{ImplementationRegistry, Overrides};
pub use scanner::{ImplementationScanner, TableScanner};
