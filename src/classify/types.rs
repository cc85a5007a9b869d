//! Combined classification result.

use serde::Serialize;
use std::collections::BTreeSet;

use super::guess::{guess_branch, guess_bugs, guess_group, join_sorted};

/// Routing fields derived from a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoutingMetadata {
    /// Review groups, sorted.
    pub groups: BTreeSet<String>,
    /// Branch of the first file.
    pub branch: String,
    /// Referenced bug and SIR numbers, string-sorted.
    pub bugs: BTreeSet<String>,
}

impl RoutingMetadata {
    /// Run all three classifiers over the diff text.
    pub fn classify(diff_text: &str) -> Self {
        Self {
            groups: guess_group(diff_text),
            branch: guess_branch(diff_text),
            bugs: guess_bugs(diff_text),
        }
    }

    /// Groups as `a,b,c`.
    pub fn groups_csv(&self) -> String {
        join_sorted(&self.groups)
    }

    /// Bugs as `a,b,c`.
    pub fn bugs_csv(&self) -> String {
        join_sorted(&self.bugs)
    }
}
