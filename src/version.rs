//! Dotted version numbers as reported by the piccolo client.
//!
//! Client versions are not always purely numeric (`2.2.0b14`), so parsing
//! never fails: a component that is not a plain integer keeps only its
//! leading run of digits, and a component without one counts as zero.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Minimum client version: the first release with `rcompare -i`.
pub const MIN_PICCOLO_VERSION: &str = "2.3.5";

/// First client version whose `rcompare` understands `-i` for integrated files.
pub const INTEGRATED_DIFF_VERSION: &str = "2.3.5";

/// Prefix `p version -c` prints when the client predates the `-c` flag.
const INVALID_OPTION_PREFIX: &str = "Invalid option:";

/// A parsed dotted version.
///
/// Ordering compares components in sequence; when one version is a strict
/// prefix of the other the shorter one is less, so `2.3 < 2.3.0`.
#[derive(Debug, Clone)]
pub struct VersionNumber {
    components: Vec<u64>,
    original: String,
}

impl VersionNumber {
    /// Parse a dotted version string.
    pub fn parse(s: &str) -> Self {
        Self {
            components: s.split('.').map(parse_component).collect(),
            original: s.to_string(),
        }
    }

    /// The numeric components.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The string this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Whether this version is at least `min`.
    pub fn meets(&self, min: &VersionNumber) -> bool {
        self >= min
    }
}

/// Compare two versions component by component.
pub fn compare(a: &VersionNumber, b: &VersionNumber) -> Ordering {
    a.cmp(b)
}

fn parse_component(component: &str) -> u64 {
    if let Ok(value) = component.parse::<u64>() {
        return value;
    }

    let digits: &str = match component.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &component[..end],
        None => component,
    };

    if digits.is_empty() {
        0
    } else {
        // Only overflow can fail here.
        digits.parse().unwrap_or(u64::MAX)
    }
}

impl PartialEq for VersionNumber {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for VersionNumber {}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl FromStr for VersionNumber {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Outcome of reading `p version -c` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionReport {
    /// The client printed a version; its last word is the version string.
    Version(VersionNumber),
    /// The client rejected `-c`, which means it is older than 2.2.0.
    OptionUnsupported,
}

/// Extract the client version from `p version -c` output.
///
/// The version is the last space-separated word, e.g.
/// `Piccolo client version 2.2.0b14`.
pub fn parse_version_report(text: &str) -> VersionReport {
    if text.starts_with(INVALID_OPTION_PREFIX) {
        return VersionReport::OptionUnsupported;
    }

    let trimmed = text.trim();
    let token = trimmed.rsplit(' ').next().unwrap_or(trimmed);
    VersionReport::Version(VersionNumber::parse(token))
}
