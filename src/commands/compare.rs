//! Implementation of the `picdiff compare` command.
//!
//! Compare reports come back from the client already in review form, so
//! they skip the rewrite and go straight to classification.

use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::{PicdiffError, Result};
use crate::piccolo::{FileSelector, ReportSource};
use crate::review::{draft_from_compare, ReviewDraft};
use tracing::info;

use super::{prepare_client, read_input, render_draft};

/// Execute the `picdiff compare` command.
pub fn cmd_compare(config: &Config, args: CompareArgs) -> Result<()> {
    let draft = match &args.diff_file {
        Some(path) => draft_from_compare(&read_input(Some(path))?),
        None => {
            let client = prepare_client(config, true)?;

            if args.ignore_wneed || config.ignore_wneed {
                info!("skipping integration check");
            } else {
                check_integration(&client.integration_report()?)?;
            }

            let selector = FileSelector::from_args(args.files, args.file_list.as_deref())?;
            compare_draft(&client, &selector)?
        }
    };

    let draft = draft.with_submitter(config.submit_as.clone());
    print!("{}", render_draft(&draft, args.json)?);
    Ok(())
}

/// Fail when `p wneed` listed files.
pub(super) fn check_integration(report: &str) -> Result<()> {
    let report = report.trim();
    if report.is_empty() {
        Ok(())
    } else {
        Err(PicdiffError::IntegrationNeeded(report.to_string()))
    }
}

/// Fetch the compare report from `source` and classify it.
pub(super) fn compare_draft<S: ReportSource>(
    source: &S,
    selector: &FileSelector,
) -> Result<ReviewDraft> {
    let diff = source.compare_report(selector)?;
    Ok(draft_from_compare(&diff))
}
