//! Configuration defaults and environment variable names.

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".picdiff.yaml";

/// Forces the client version instead of asking `p version -c`.
pub const ENV_FORCE_VERSION: &str = "FORCE_PICCOLO_VERSION";

/// Skips the installation and version checks.
pub const ENV_ENABLE: &str = "ENABLE_POSTREVIEWPICCOLOCLIENT";

/// Disables piccolo support entirely.
pub const ENV_DISABLE: &str = "DISABLE_POSTREVIEWPICCOLOCLIENT";

/// Login name used as the default submitter.
pub const ENV_USER: &str = "USER";

/// Shared build account that never submits reviews itself.
pub const SHARED_ACCOUNT: &str = "ingres";

// Default value functions for serde
pub(crate) fn default_binary() -> String {
    "p".to_string()
}
pub(crate) fn default_server() -> String {
    "usilsuxx:1666".to_string()
}
pub(crate) fn default_review_server() -> String {
    "http://reviewboard.ingres.prv".to_string()
}
pub(crate) fn default_min_version() -> String {
    crate::version::MIN_PICCOLO_VERSION.to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
