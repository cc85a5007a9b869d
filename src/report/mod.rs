//! Section scanning for `p describe -s full` reports.
//!
//! A report is line oriented:
//!
//! ```text
//! <header lines>          (at least 4)
//! - description -
//! <description body>
//! - differences -
//! <blank line>
//! <diff body>
//! ```
//!
//! The scanner locates the two marker lines and splits the report into
//! header, description, and diff regions. It performs no I/O.

mod scanner;


pub use scanner::{
    find_marker, ChangeReport, SectionBounds, ADDITIONS_STRIPPED_NOTICE,
    DESCRIPTION_MARKER, DESCRIPTION_SEARCH_START, DIFFERENCES_MARKER,
};
