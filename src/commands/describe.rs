//! Implementation of the `picdiff describe` command.

use crate::cli::DescribeArgs;
use crate::config::Config;
use crate::diff::AdditionPolicy;
use crate::error::Result;
use crate::piccolo::ReportSource;
use crate::review::{draft_from_describe, ReviewDraft};

use super::{prepare_client, render_draft};

/// Execute the `picdiff describe` command.
///
/// Describing an existing change needs no particular client version, so the
/// install and version checks are skipped.
pub fn cmd_describe(config: &Config, args: DescribeArgs) -> Result<()> {
    let client = prepare_client(config, false)?;
    let policy = if args.skip_additions {
        AdditionPolicy::Skip
    } else {
        config.addition_policy()
    };

    let draft = describe_draft(&client, &args.change, policy)?
        .with_submitter(config.submit_as.clone());
    print!("{}", render_draft(&draft, args.json)?);
    Ok(())
}

/// Fetch the change report from `source` and turn it into a draft.
pub(super) fn describe_draft<S: ReportSource>(
    source: &S,
    change: &str,
    policy: AdditionPolicy,
) -> Result<ReviewDraft> {
    let report = source.describe_report(change)?;
    draft_from_describe(&report, policy)
}
