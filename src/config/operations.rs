//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{
    DEFAULT_CONFIG_FILE, ENV_DISABLE, ENV_ENABLE, ENV_FORCE_VERSION, ENV_USER, SHARED_ACCOUNT,
};
use crate::diff::AdditionPolicy;
use crate::error::{PicdiffError, Result};
use crate::version::VersionNumber;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PicdiffError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PicdiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the explicit config file, or `.picdiff.yaml` in `dir` when it
    /// exists, or the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PicdiffError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PicdiffError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `binary` must split into at least one word
    /// - `min_version` must be non-empty
    /// - `force_version`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        self.command_words()?;

        if self.min_version.trim().is_empty() {
            return Err(PicdiffError::UserError(
                "config validation failed: min_version must be non-empty".to_string(),
            ));
        }

        if let Some(forced) = &self.force_version {
            if forced.trim().is_empty() {
                return Err(PicdiffError::UserError(
                    "config validation failed: force_version must be non-empty when set"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// - `FORCE_PICCOLO_VERSION` sets `force_version`
    /// - `ENABLE_POSTREVIEWPICCOLOCLIENT` turns off `check_install`
    /// - `DISABLE_POSTREVIEWPICCOLOCLIENT` turns off `enabled`
    /// - `USER` fills `submit_as` unless it is the shared build account
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |name: &str| lookup(name).is_some_and(|value| !value.is_empty());

        if let Some(forced) = lookup(ENV_FORCE_VERSION).filter(|v| !v.trim().is_empty()) {
            self.force_version = Some(forced);
        }
        if is_set(ENV_ENABLE) {
            self.check_install = false;
        }
        if is_set(ENV_DISABLE) {
            self.enabled = false;
        }
        if self.submit_as.is_none() {
            self.submit_as = lookup(ENV_USER)
                .filter(|user| !user.is_empty() && !user.eq_ignore_ascii_case(SHARED_ACCOUNT));
        }
    }

    /// The client command split into program and leading arguments.
    pub fn command_words(&self) -> Result<Vec<String>> {
        let words = shell_words::split(&self.binary).map_err(|e| {
            PicdiffError::UserError(format!(
                "config validation failed: cannot parse binary '{}': {}",
                self.binary, e
            ))
        })?;

        if words.is_empty() {
            return Err(PicdiffError::UserError(
                "config validation failed: binary must be non-empty".to_string(),
            ));
        }

        Ok(words)
    }

    /// Minimum accepted client version.
    pub fn min_version(&self) -> VersionNumber {
        VersionNumber::parse(&self.min_version)
    }

    /// Forced client version, if any.
    pub fn forced_version(&self) -> Option<VersionNumber> {
        self.force_version.as_deref().map(VersionNumber::parse)
    }

    /// How describe diffs treat added files.
    pub fn addition_policy(&self) -> AdditionPolicy {
        AdditionPolicy::from_skip(self.skip_file_additions)
    }
}
