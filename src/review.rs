//! Review drafts built from piccolo reports.
//!
//! A draft is everything the review server needs for one request: summary,
//! description, the rewritten diff, and the routing fields guessed from it.

use crate::classify::RoutingMetadata;
use crate::diff::{AdditionPolicy, DiffTransformer};
use crate::error::{PicdiffError, Result};
use crate::report::ChangeReport;
use serde::Serialize;
use tracing::{info, warn};

/// A review request ready for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewDraft {
    /// One-line summary (empty for compare drafts).
    pub summary: String,
    /// Description text.
    pub description: String,
    /// Diff text in review server form.
    pub diff: String,
    /// The diff is in bulk-add form.
    pub addition_pending: bool,
    /// Raw header lines of added files left out of the diff.
    pub skipped_additions: Vec<String>,
    /// Groups, branch, and bugs guessed from the diff.
    pub routing: RoutingMetadata,
    /// User the review is filed for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_as: Option<String>,
}

impl ReviewDraft {
    /// Record the submitting user.
    pub fn with_submitter(mut self, submit_as: Option<String>) -> Self {
        self.submit_as = submit_as;
        self
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PicdiffError::UserError(format!("failed to serialize draft: {}", e)))
    }
}

/// Build a draft from `p describe -s full` output.
///
/// When added files are skipped the description is framed by a notice so
/// reviewers know the diff is incomplete.
pub fn draft_from_describe(report_text: &str, policy: AdditionPolicy) -> Result<ReviewDraft> {
    let report = ChangeReport::parse(report_text)?;
    let transformed = DiffTransformer::new(policy).transform(report.diff_body())?;

    let description = if transformed.skipped_additions.is_empty() {
        report.description()
    } else {
        warn!(
            count = transformed.skipped_additions.len(),
            "added files left out of the review diff"
        );
        report.description_with_notice()
    };

    let diff = transformed.text();
    let routing = RoutingMetadata::classify(&diff);
    info!(
        groups = %routing.groups_csv(),
        branch = %routing.branch,
        bugs = %routing.bugs_csv(),
        "built review draft from change"
    );

    Ok(ReviewDraft {
        summary: report.summary(),
        description,
        diff,
        addition_pending: transformed.addition_pending,
        skipped_additions: transformed.skipped_additions,
        routing,
        submit_as: None,
    })
}

/// Build a draft from a compare report, which is already in review form.
pub fn draft_from_compare(diff_text: &str) -> ReviewDraft {
    let routing = RoutingMetadata::classify(diff_text);
    info!(
        groups = %routing.groups_csv(),
        branch = %routing.branch,
        bugs = %routing.bugs_csv(),
        "built review draft from working files"
    );

    ReviewDraft {
        diff: diff_text.to_string(),
        routing,
        ..Default::default()
    }
}
