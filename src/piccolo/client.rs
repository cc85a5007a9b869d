//! Piccolo client wrapper and the report source contract.

use crate::config::Config;
use crate::error::{PicdiffError, Result};
use crate::version::{
    parse_version_report, VersionNumber, VersionReport, INTEGRATED_DIFF_VERSION,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::runner::{PiccoloCommand, INFORMATIONAL, SUCCESS_ONLY};

/// Source of raw report text.
///
/// The transformation core only ever sees the text these methods return.
pub trait ReportSource {
    /// Raw `describe -s full` report for an existing change.
    fn describe_report(&self, change_id: &str) -> Result<String>;

    /// Raw compare report for the selected working files.
    fn compare_report(&self, selector: &FileSelector) -> Result<String>;
}

/// Which working files a compare report covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelector {
    /// Every opened (reserved) file.
    AllWorking,
    /// Files named on the command line.
    Files(Vec<String>),
    /// Files listed in a file, one per line.
    FileList(PathBuf),
}

impl FileSelector {
    /// Build a selector from command-line inputs.
    ///
    /// A file list wins over file names. The list `-` is not supported: it
    /// is dropped with a warning and the file names (or all working files)
    /// are used instead.
    pub fn from_args(files: Vec<String>, file_list: Option<&Path>) -> Result<Self> {
        let file_list = file_list.filter(|path| {
            let is_stdin = path.as_os_str() == "-";
            if is_stdin {
                warn!("file list '-' is not supported, ignoring it");
            }
            !is_stdin
        });

        match file_list {
            Some(path) => {
                let absolute = std::path::absolute(path).map_err(|e| {
                    PicdiffError::UserError(format!(
                        "cannot resolve file list '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(FileSelector::FileList(absolute))
            }
            None if files.is_empty() => Ok(FileSelector::AllWorking),
            None => Ok(FileSelector::Files(files)),
        }
    }

    /// Arguments for `p working`.
    pub fn working_args(&self) -> Vec<String> {
        match self {
            FileSelector::AllWorking => Vec::new(),
            FileSelector::Files(files) => files.clone(),
            FileSelector::FileList(path) => {
                vec!["-l".to_string(), path.display().to_string()]
            }
        }
    }
}

/// The `p` command-line client.
#[derive(Debug, Clone)]
pub struct PiccoloCli {
    command: PiccoloCommand,
    known_version: Option<VersionNumber>,
}

impl PiccoloCli {
    /// Build a client from config. A forced version is used instead of
    /// asking the client.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            command: PiccoloCommand::from_words(config.command_words()?)?,
            known_version: config.forced_version(),
        })
    }

    /// Use `version` instead of asking the client.
    pub fn with_version(mut self, version: VersionNumber) -> Self {
        self.known_version = Some(version);
        self
    }

    /// Whether the client can be run at all (`p help`).
    pub fn is_installed(&self) -> bool {
        match self.command.run(&["help"], None, INFORMATIONAL) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "piccolo install check failed");
                false
            }
        }
    }

    /// Client version, from config or `p version -c`.
    pub fn version(&self) -> Result<VersionNumber> {
        if let Some(version) = &self.known_version {
            return Ok(version.clone());
        }

        let output = self.command.run(&["version", "-c"], None, INFORMATIONAL)?;
        info!(report = %output.stdout.trim(), "piccolo version");

        match parse_version_report(&output.stdout) {
            VersionReport::Version(version) => Ok(version),
            VersionReport::OptionUnsupported => Err(PicdiffError::VersionTooOld {
                found: "unknown (version -c unsupported)".to_string(),
                required: "2.2.0".to_string(),
            }),
        }
    }

    /// Fail unless the client is at least `min`; returns the client version.
    pub fn ensure_version(&self, min: &VersionNumber) -> Result<VersionNumber> {
        let version = self.version()?;
        debug!(found = %version, required = %min, "checking piccolo version");

        if version.meets(min) {
            Ok(version)
        } else {
            Err(PicdiffError::VersionTooOld {
                found: version.to_string(),
                required: min.to_string(),
            })
        }
    }

    /// Files that need integrating before review (`p wneed`), trimmed.
    pub fn integration_report(&self) -> Result<String> {
        let output = self.command.run(&["wneed"], None, INFORMATIONAL)?;
        Ok(output.stdout.trim().to_string())
    }

    /// Client information (`p here`), trimmed.
    pub fn here(&self) -> Result<String> {
        let output = self.command.run(&["here"], None, INFORMATIONAL)?;
        Ok(output.stdout.trim().to_string())
    }
}

impl ReportSource for PiccoloCli {
    fn describe_report(&self, change_id: &str) -> Result<String> {
        let args = ["describe", "-s", "full", change_id];
        let output = self.command.run(&args, None, SUCCESS_ONLY)?;
        Ok(output.stdout)
    }

    fn compare_report(&self, selector: &FileSelector) -> Result<String> {
        let integrated = self
            .version()?
            .meets(&VersionNumber::parse(INTEGRATED_DIFF_VERSION));

        let working_args = selector.working_args();
        let mut args: Vec<&str> = vec!["working"];
        args.extend(working_args.iter().map(String::as_str));
        let working = self.command.run(&args, None, SUCCESS_ONLY)?;

        let mut rcompare: Vec<&str> = vec!["rcompare"];
        if integrated {
            rcompare.push("-i");
        }
        rcompare.extend(["-l", "-"]);

        let output = self
            .command
            .run(&rcompare, Some(&working.stdout), INFORMATIONAL)?;
        Ok(output.stdout)
    }
}
