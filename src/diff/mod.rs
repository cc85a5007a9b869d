//! Diff rewriting for piccolo change reports.
//!
//! The diff section of `p describe -s full` mixes file headers such as
//!
//! ```text
//! ingres!main!common!gwf gwfora.c gwfora.c 7
//! ```
//!
//! with classic `diff` hunks (`12a13,14`, `> added`, `< removed`, `---`).
//! The transformer keeps the hunks verbatim and replaces each header with a
//! synthetic `=== <tree> <filename> rev <revision-1> ====` line, the form the
//! review server expects. Hunk bodies are never parsed.

mod header;
mod transformer;
mod types;


// Re-export public API
pub use header::{
    classify_line, is_hunk_line, DiffLine, HeaderKind, HeaderLine, ROOT_TREE, ROOT_TREE_PREFIX,
    TREE_SEPARATOR,
};
pub use transformer::DiffTransformer;
pub use types::{AdditionPolicy, TransformedDiff};
