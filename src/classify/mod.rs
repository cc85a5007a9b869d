//! Routing metadata guessed from a transformed diff.
//!
//! Three independent classifiers read the final diff text, never the raw
//! report:
//! - `guess_group`: review groups from every `=== tree path rev N ====` header
//! - `guess_branch`: branch from the first header only
//! - `guess_bugs`: bug/SIR numbers mentioned on added (`>`) lines
//!
//! They never fail; no match yields an empty set or string. The patterns
//! they share are tabulated in `patterns`.

pub mod patterns;

mod guess;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use guess::{guess_branch, guess_bugs, guess_group, join_sorted};
pub use patterns::{BugRefKind, BugReference};
pub use types::RoutingMetadata;
