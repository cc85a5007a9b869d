//! Process runner for the piccolo client.
//!
//! All `p` invocations go through `PiccoloCommand::run`, which captures stdout and
//! stderr and maps failures to `PicdiffError::ToolError`.

use crate::error::{PicdiffError, Result};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::thread;
use tracing::debug;

/// Exit codes for commands that must succeed outright.
pub const SUCCESS_ONLY: &[i32] = &[0];

/// Exit codes for commands that exit with 1 on informational results
/// (e.g. `wneed` listing files, `rcompare` finding differences).
pub const INFORMATIONAL: &[i32] = &[0, 1];

/// Captured output of a piccolo command.
#[derive(Debug, Clone)]
pub struct PiccoloOutput {
    /// Standard output, untouched (diff content is whitespace sensitive).
    pub stdout: String,
    /// Standard error (trimmed).
    pub stderr: String,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
}

impl PiccoloOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code(),
        }
    }
}

/// The client command: program plus leading arguments from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiccoloCommand {
    program: String,
    base_args: Vec<String>,
}

impl PiccoloCommand {
    /// Build from split command words; the first word is the program.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        let mut words = words.into_iter();
        let program = words
            .next()
            .ok_or_else(|| PicdiffError::UserError("piccolo binary is empty".to_string()))?;

        Ok(Self {
            program,
            base_args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run a piccolo subcommand, optionally feeding `stdin`.
    ///
    /// # Returns
    ///
    /// * `Ok(PiccoloOutput)` - The command exited with a code in `accepted`
    /// * `Err(PicdiffError::ToolError)` - Spawn failure or any other exit status
    pub fn run(
        &self,
        args: &[&str],
        stdin: Option<&str>,
        accepted: &[i32],
    ) -> Result<PiccoloOutput> {
        let subcommand = args.first().copied().unwrap_or("");
        debug!(program = %self.program, args = ?args, "running piccolo");

        let mut child = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                PicdiffError::ToolError(format!(
                    "failed to execute {} {}: {}",
                    self.program, subcommand, e
                ))
            })?;

        // stdin is written from its own thread while stdout is drained.
        let writer = match (stdin, child.stdin.take()) {
            (Some(input), Some(mut pipe)) => {
                let input = input.to_string();
                Some(thread::spawn(move || pipe.write_all(input.as_bytes())))
            }
            _ => None,
        };

        let output = child.wait_with_output().map_err(|e| {
            PicdiffError::ToolError(format!(
                "failed to wait for {} {}: {}",
                self.program, subcommand, e
            ))
        })?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Ok(())) => {}
                // The child may exit without reading all of its input.
                Ok(Err(e)) => debug!(error = %e, "piccolo stdin closed early"),
                Err(_) => debug!("piccolo stdin writer panicked"),
            }
        }

        let piccolo_output = PiccoloOutput::from_output(&output);
        match piccolo_output.exit_code {
            Some(code) if accepted.contains(&code) => Ok(piccolo_output),
            code => {
                let detail = if piccolo_output.stderr.is_empty() {
                    piccolo_output.stdout.trim().to_string()
                } else {
                    piccolo_output.stderr.clone()
                };
                Err(PicdiffError::ToolError(format!(
                    "{} {} failed (exit code {}): {}",
                    self.program,
                    subcommand,
                    code.map_or_else(|| "none".to_string(), |c| c.to_string()),
                    detail
                )))
            }
        }
    }
}
