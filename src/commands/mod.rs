//! Command implementations for picdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config and client setup they share.

mod check;
mod classify;
mod compare;
mod describe;


use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{PicdiffError, Result};
use crate::piccolo::PiccoloCli;
use crate::review::ReviewDraft;
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Config is loaded
/// once here and handed to each handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Describe(args) => describe::cmd_describe(&config, args),
        Command::Compare(args) => compare::cmd_compare(&config, args),
        Command::Classify(args) => classify::cmd_classify(args),
        Command::Check => check::cmd_check(&config),
    }
}

/// Load config from `explicit` or the current directory, then apply
/// environment overrides.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().map_err(|e| {
        PicdiffError::UserError(format!("cannot determine current directory: {}", e))
    })?;

    let mut config = Config::discover(explicit, &cwd)?;
    config.apply_env(|name| std::env::var(name).ok());
    debug!(?config, "effective config");
    Ok(config)
}

/// Build a piccolo client. With `verify`, also run the install and version
/// checks the config asks for.
///
/// A forced version is not checked against `min_version`. It only decides
/// whether `rcompare` gets `-i`.
fn prepare_client(config: &Config, verify: bool) -> Result<PiccoloCli> {
    if !config.enabled {
        return Err(PicdiffError::UserError(
            "piccolo support is disabled (DISABLE_POSTREVIEWPICCOLOCLIENT is set)".to_string(),
        ));
    }

    let client = PiccoloCli::from_config(config)?;
    if !verify || !config.check_install {
        return Ok(client);
    }

    if !client.is_installed() {
        return Err(PicdiffError::ToolError(format!(
            "piccolo client '{}' is not installed or not runnable",
            config.binary
        )));
    }

    if let Some(forced) = config.forced_version() {
        debug!(version = %forced, "using forced piccolo version");
        return Ok(client);
    }

    let version = client.ensure_version(&config.min_version())?;
    // Later calls reuse the checked version.
    Ok(client.with_version(version))
}

/// Render a draft as JSON or plain text.
fn render_draft(draft: &ReviewDraft, json: bool) -> Result<String> {
    if json {
        return draft.to_json();
    }

    let mut out = String::new();
    if !draft.summary.is_empty() {
        out.push_str(&format!("Summary: {}\n", draft.summary));
    }
    out.push_str(&format!("Groups: {}\n", draft.routing.groups_csv()));
    out.push_str(&format!("Branch: {}\n", draft.routing.branch));
    out.push_str(&format!("Bugs: {}\n", draft.routing.bugs_csv()));
    if let Some(user) = &draft.submit_as {
        out.push_str(&format!("Submit as: {}\n", user));
    }
    for line in &draft.skipped_additions {
        out.push_str(&format!("Skipped addition: {}\n", line));
    }
    if !draft.description.is_empty() {
        out.push_str("\nDescription:\n");
        out.push_str(&draft.description);
        if !draft.description.ends_with('\n') {
            out.push('\n');
        }
    }
    out.push_str("\nDiff:\n");
    out.push_str(&draft.diff);
    if !draft.diff.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Read a file, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path).map_err(|e| {
            PicdiffError::UserError(format!("failed to read '{}': {}", path.display(), e))
        }),
        _ => std::io::read_to_string(std::io::stdin())
            .map_err(|e| PicdiffError::UserError(format!("failed to read stdin: {}", e))),
    }
}
