//! Error types for picdiff.
//!
//! Uses thiserror for derive macros. Report and transform failures carry the
//! offending raw line so the user can find it in the `p describe` output.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for picdiff operations.
#[derive(Error, Debug)]
pub enum PicdiffError {
    /// A required section marker is absent from the report.
    #[error("marker '{marker}' not found after line {start}")]
    MarkerNotFound { marker: String, start: usize },

    /// A diff body line is neither a hunk line nor a valid file header.
    #[error("malformed header line: {line:?}")]
    MalformedHeaderLine { line: String },

    /// The change adds a file and additions are not being skipped.
    #[error(
        "change has a file addition, extracting file addition diffs is not supported. Line:\n  {line:?}"
    )]
    UnsupportedFileAddition { line: String },

    /// User provided invalid arguments, input, or configuration.
    #[error("{0}")]
    UserError(String),

    /// The piccolo client failed or could not be run.
    #[error("piccolo command failed: {0}")]
    ToolError(String),

    /// The installed piccolo client is older than required.
    #[error("piccolo version too old. Found version {found}, need version {required}")]
    VersionTooOld { found: String, required: String },

    /// Opened files need integrating before they can be reviewed.
    #[error(
        "opened files are not at headrevs, integration needed before submission.\n\n\
         These files need integrating:\n\n{0}\n\
         Ignore this check with --ignore-wneed."
    )]
    IntegrationNeeded(String),
}

impl PicdiffError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PicdiffError::MarkerNotFound { .. }
            | PicdiffError::MalformedHeaderLine { .. }
            | PicdiffError::UnsupportedFileAddition { .. } => exit_codes::REPORT_FAILURE,
            PicdiffError::UserError(_) => exit_codes::USER_ERROR,
            PicdiffError::ToolError(_) | PicdiffError::VersionTooOld { .. } => {
                exit_codes::TOOL_FAILURE
            }
            PicdiffError::IntegrationNeeded(_) => exit_codes::INTEGRATION_NEEDED,
        }
    }
}

/// Result type alias for picdiff operations.
pub type Result<T> = std::result::Result<T, PicdiffError>;
