//! Implementation of the `picdiff classify` command.

use crate::classify::RoutingMetadata;
use crate::cli::ClassifyArgs;
use crate::error::{PicdiffError, Result};

use super::read_input;

/// Execute the `picdiff classify` command.
pub fn cmd_classify(args: ClassifyArgs) -> Result<()> {
    let diff = read_input(args.path.as_deref())?;
    let routing = RoutingMetadata::classify(&diff);
    print!("{}", render_routing(&routing, args.json)?);
    Ok(())
}

pub(super) fn render_routing(routing: &RoutingMetadata, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(routing).map_err(|e| {
            PicdiffError::UserError(format!("failed to serialize metadata: {}", e))
        })?;
        out.push('\n');
        return Ok(out);
    }

    Ok(format!(
        "Groups: {}\nBranch: {}\nBugs: {}\n",
        routing.groups_csv(),
        routing.branch,
        routing.bugs_csv()
    ))
}
