//! Transformer configuration and output types.

use serde::{Deserialize, Serialize};

/// How the transformer treats headers of newly added files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionPolicy {
    /// Fail with `UnsupportedFileAddition` (default).
    #[default]
    Reject,
    /// Drop the added file's header and content from the diff.
    Skip,
}

impl AdditionPolicy {
    /// Policy for a `skip_file_additions` flag.
    pub fn from_skip(skip: bool) -> Self {
        if skip { Self::Skip } else { Self::Reject }
    }
}

/// Output of a transformer pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformedDiff {
    /// Output lines, without trailing newlines.
    pub lines: Vec<String>,
    /// The input ended on an addition header with no content after it, and
    /// the output was rewritten into the bulk-add form.
    pub addition_pending: bool,
    /// Raw header lines of added files that were dropped.
    pub skipped_additions: Vec<String>,
}

impl TransformedDiff {
    /// The diff as text, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
