//! CLI argument parsing for picdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Picdiff: turn Piccolo change reports into review-ready diffs.
///
/// Reads `p describe` or `p rcompare` output, rewrites the file headers into
/// the form the review server expects, and guesses the review groups, branch,
/// and bug numbers for the request.
#[derive(Parser, Debug)]
#[command(name = "picdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: .picdiff.yaml in the current directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for picdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a review draft from a submitted or pending change.
    ///
    /// Runs `p describe -s full` and rewrites its differences section.
    Describe(DescribeArgs),

    /// Build a review draft from opened working files.
    ///
    /// Runs `p working` piped into `p rcompare`, or reads a saved diff.
    Compare(CompareArgs),

    /// Guess routing metadata for an already rewritten diff.
    Classify(ClassifyArgs),

    /// Check the piccolo client install and version.
    Check,
}

/// Arguments for `picdiff describe`.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Change number.
    pub change: String,

    /// Leave added files out of the diff instead of failing.
    #[arg(long)]
    pub skip_additions: bool,

    /// Print the draft as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `picdiff compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Working files to compare (default: all opened files).
    pub files: Vec<String>,

    /// File listing the files to compare, one per line.
    #[arg(short = 'l', long = "file-list", value_name = "FILELIST")]
    pub file_list: Option<PathBuf>,

    /// Use a saved compare report instead of running the client.
    #[arg(long, value_name = "PATH", conflicts_with_all = ["files", "file_list"])]
    pub diff_file: Option<PathBuf>,

    /// Skip the check for files needing integration.
    #[arg(long)]
    pub ignore_wneed: bool,

    /// Print the draft as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `picdiff classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Diff file (stdin when omitted or `-`).
    pub path: Option<PathBuf>,

    /// Print the metadata as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_describe() {
        let cli = Cli::try_parse_from(["picdiff", "describe", "493916", "--skip-additions"]).unwrap();
        match cli.command {
            Command::Describe(args) => {
                assert_eq!(args.change, "493916");
                assert!(args.skip_additions);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_compare_with_globals() {
        let cli = Cli::try_parse_from([
            "picdiff", "compare", "-l", "sc", "--ignore-wneed", "-v", "--config", "c.yaml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        match cli.command {
            Command::Compare(args) => {
                assert!(args.files.is_empty());
                assert_eq!(args.file_list, Some(PathBuf::from("sc")));
                assert!(args.ignore_wneed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn diff_file_conflicts_with_file_names() {
        let result = Cli::try_parse_from(["picdiff", "compare", "a.c", "--diff-file", "d.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_classify_stdin() {
        let cli = Cli::try_parse_from(["picdiff", "classify"]).unwrap();
        match cli.command {
            Command::Classify(args) => assert!(args.path.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn describe_requires_change() {
        assert!(Cli::try_parse_from(["picdiff", "describe"]).is_err());
    }
}
