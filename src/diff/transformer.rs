//! Line-by-line rewrite of a describe report's diff body.

use crate::error::{PicdiffError, Result};
use tracing::{debug, warn};

use super::header::{classify_line, DiffLine, HeaderKind, ROOT_TREE_PREFIX};
use super::types::{AdditionPolicy, TransformedDiff};

/// Transformer state between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransformState {
    /// Emitting headers and hunk lines.
    Normal,
    /// Dropping the content of an added file until the next root tree header.
    SuppressingAddition { discarded: usize },
    /// Input ended on an addition header with nothing after it.
    AdditionPendingAtEnd,
}

impl TransformState {
    /// State after the last input line.
    fn finish(self) -> Self {
        match self {
            TransformState::SuppressingAddition { discarded: 0 } => {
                TransformState::AdditionPendingAtEnd
            }
            TransformState::SuppressingAddition { .. } => TransformState::Normal,
            other => other,
        }
    }
}

/// Rewrites piccolo diff bodies into `=== tree file rev N ====` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffTransformer {
    policy: AdditionPolicy,
}

impl DiffTransformer {
    pub fn new(policy: AdditionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AdditionPolicy {
        self.policy
    }

    /// Transform the lines that follow the differences marker and its blank
    /// separator.
    ///
    /// Blank lines are dropped, hunk lines pass through, change headers are
    /// replaced by a header naming the baseline revision (one less than the
    /// recorded revision).
    ///
    /// # Returns
    ///
    /// * `Ok(TransformedDiff)` - The rewritten diff
    /// * `Err(PicdiffError::MalformedHeaderLine)` - A line is neither hunk nor header
    /// * `Err(PicdiffError::UnsupportedFileAddition)` - An addition under `AdditionPolicy::Reject`
    pub fn transform<S: AsRef<str>>(&self, lines: &[S]) -> Result<TransformedDiff> {
        let mut state = TransformState::Normal;
        let mut output: Vec<String> = Vec::new();
        let mut skipped_additions = Vec::new();

        for line in lines.iter().map(AsRef::as_ref) {
            if line.is_empty() {
                continue;
            }

            if let TransformState::SuppressingAddition { discarded } = state {
                if !line.starts_with(ROOT_TREE_PREFIX) {
                    state = TransformState::SuppressingAddition {
                        discarded: discarded + 1,
                    };
                    continue;
                }
                debug!(discarded, "end of added file content");
                state = TransformState::Normal;
            }

            match classify_line(line)? {
                DiffLine::Hunk(hunk) => output.push(hunk.to_string()),
                DiffLine::Header(header) => match header.kind {
                    HeaderKind::Change => {
                        debug!(
                            tree = %header.tree,
                            filename = %header.filename,
                            revision = header.revision,
                            "file header"
                        );
                        output.push(header.baseline_header());
                    }
                    HeaderKind::Addition => match self.policy {
                        AdditionPolicy::Reject => {
                            return Err(PicdiffError::UnsupportedFileAddition {
                                line: line.to_string(),
                            });
                        }
                        AdditionPolicy::Skip => {
                            warn!(line = %line, "ignoring added file");
                            skipped_additions.push(line.to_string());
                            state = TransformState::SuppressingAddition { discarded: 0 };
                        }
                    },
                },
            }
        }

        match state.finish() {
            TransformState::AdditionPendingAtEnd => Ok(TransformedDiff {
                lines: bulk_add(&output),
                addition_pending: true,
                skipped_additions,
            }),
            _ => Ok(TransformedDiff {
                lines: output,
                addition_pending: false,
                skipped_additions,
            }),
        }
    }
}

/// Present collected lines as one block added at the top of an empty file.
fn bulk_add(lines: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(lines.len() + 1);
    result.push(format!("0a{},{}", 1, lines.len()));
    result.extend(lines.iter().map(|line| format!("> {}", line)));
    result
}
