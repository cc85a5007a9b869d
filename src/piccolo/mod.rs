//! Piccolo client integration.
//!
//! This is the collaborator behind the transformation core: it runs the `p`
//! binary and hands back raw report text. The core modules never call it.

mod client;
mod runner;


// Re-export public API
pub use client::{FileSelector, PiccoloCli, ReportSource};
pub use runner::{PiccoloCommand, PiccoloOutput};
