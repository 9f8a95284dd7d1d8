//! Demo binary constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "decon.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bindery";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DECON";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "DECON_LOG";

// ============================================================================
// DRILL CONSTANTS
// ============================================================================

/// Namespace scanned for implementations unless configured otherwise
pub const DEFAULT_NAMESPACE: &str = "bindery_decon";

/// Room the drill runs over unless configured otherwise
pub const DEFAULT_ROOM: &str = "isolation ward";
