//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for picdiff.
///
/// This struct represents the contents of `.picdiff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Piccolo client
    // =========================================================================
    /// Command used to run the piccolo client. May include leading
    /// arguments (shell-words syntax).
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Piccolo server, reported as the repository path.
    #[serde(default = "default_server")]
    pub server: String,

    /// Minimum accepted client version.
    #[serde(default = "default_min_version")]
    pub min_version: String,

    /// Client version to assume instead of asking the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_version: Option<String>,

    /// Whether to check that the client is installed and recent enough.
    #[serde(default = "default_true")]
    pub check_install: bool,

    /// Whether piccolo support is enabled at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    // =========================================================================
    // Diff settings
    // =========================================================================
    /// Drop added files from describe diffs instead of failing.
    #[serde(default)]
    pub skip_file_additions: bool,

    /// Build compare diffs even when `p wneed` lists files.
    #[serde(default)]
    pub ignore_wneed: bool,

    // =========================================================================
    // Review settings
    // =========================================================================
    /// Review server URL.
    #[serde(default = "default_review_server")]
    pub review_server: String,

    /// User to submit reviews as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_as: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            server: default_server(),
            min_version: default_min_version(),
            force_version: None,
            check_install: true,
            enabled: true,
            skip_file_additions: false,
            ignore_wneed: false,
            review_server: default_review_server(),
            submit_as: None,
        }
    }
}
