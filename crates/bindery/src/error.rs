//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the bindery construction facility
#[derive(Error, Debug)]
pub enum Error {
    /// A capability could not be resolved to exactly one implementation
    #[error(
        "capability '{capability}' has {found} candidate implementations, expected exactly one: {candidates:?}"
    )]
    Resolution {
        /// Stable name of the capability being resolved
        capability: &'static str,
        /// Namespace the owning registry scans
        namespace: String,
        /// Number of candidate implementations found
        found: usize,
        /// Names of the candidate implementations found
        candidates: Vec<&'static str>,
    },

    /// A resolved implementation could not be constructed
    #[error("failed to construct implementation '{implementation}' for capability '{capability}': {reason}")]
    Construction {
        /// Stable name of the capability being constructed
        capability: &'static str,
        /// Name of the implementation whose constructor failed
        implementation: &'static str,
        /// Description of the construction failure
        reason: String,
    },
}

// Error creation methods
impl Error {
    /// Create a resolution error
    pub fn resolution(
        capability: &'static str,
        namespace: impl Into<String>,
        candidates: Vec<&'static str>,
    ) -> Self {
        Self::Resolution {
            capability,
            namespace: namespace.into(),
            found: candidates.len(),
            candidates,
        }
    }

    /// Create a construction error
    pub fn construction(
        capability: &'static str,
        implementation: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Construction {
            capability,
            implementation,
            reason: reason.into(),
        }
    }
}
