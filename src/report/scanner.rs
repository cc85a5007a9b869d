//! Marker scanning and report section extraction.

use crate::error::{PicdiffError, Result};
use std::ops::Range;

/// Marker line that opens the description section.
pub const DESCRIPTION_MARKER: &str = "- description -";

/// Marker line that opens the differences section.
pub const DIFFERENCES_MARKER: &str = "- differences -";

/// Index the description search starts after; the header spans at least
/// this many lines.
pub const DESCRIPTION_SEARCH_START: usize = 3;

/// Line of the report holding the change summary.
const SUMMARY_LINE: usize = 3;

/// Width of the status column (`"   V  "`) in front of the summary.
const SUMMARY_PREFIX_WIDTH: usize = 6;

/// Notice placed around descriptions of changes whose added files were
/// dropped from the diff.
pub const ADDITIONS_STRIPPED_NOTICE: &str = "WARNING files that were ADDED have been stripped out";

/// Find the first line equal to `marker` strictly after `start`.
///
/// # Returns
///
/// * `Ok(usize)` - Index of the marker line
/// * `Err(PicdiffError::MarkerNotFound)` - The marker does not occur after `start`
pub fn find_marker<S: AsRef<str>>(lines: &[S], start: usize, marker: &str) -> Result<usize> {
    lines
        .iter()
        .enumerate()
        .skip(start.saturating_add(1))
        .find(|(_, line)| line.as_ref() == marker)
        .map(|(index, _)| index)
        .ok_or_else(|| PicdiffError::MarkerNotFound {
            marker: marker.to_string(),
            start,
        })
}

/// Line indices of the two section markers in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Index of the `- description -` line.
    pub description: usize,
    /// Index of the `- differences -` line.
    pub differences: usize,
    /// Total number of lines in the report.
    pub len: usize,
}

impl SectionBounds {
    /// Locate both markers in a report.
    pub fn locate<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let description = find_marker(lines, DESCRIPTION_SEARCH_START, DESCRIPTION_MARKER)?;
        let differences = find_marker(lines, description, DIFFERENCES_MARKER)?;

        Ok(Self {
            description,
            differences,
            len: lines.len(),
        })
    }

    /// Lines before the description marker.
    pub fn header(&self) -> Range<usize> {
        0..self.description
    }

    /// The description marker up to (not including) the differences marker.
    pub fn description(&self) -> Range<usize> {
        self.description..self.differences
    }

    /// The differences marker through the end of the report.
    pub fn diff(&self) -> Range<usize> {
        self.differences..self.len
    }

    /// Description body: skips the marker and the line after it, and stops
    /// before the line preceding the differences marker.
    fn description_body(&self) -> Range<usize> {
        let start = self.description + 2;
        let end = self.differences.saturating_sub(1).max(start);
        start..end
    }

    /// Diff body: everything after the differences marker and its blank
    /// separator line.
    fn diff_body(&self) -> Range<usize> {
        let start = (self.differences + 2).min(self.len);
        start..self.len
    }
}

/// A `p describe -s full` report split into its sections.
#[derive(Debug, Clone)]
pub struct ChangeReport {
    lines: Vec<String>,
    bounds: SectionBounds,
}

impl ChangeReport {
    /// Split raw report text into lines and locate its sections.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let bounds = SectionBounds::locate(&lines)?;
        Ok(Self { lines, bounds })
    }

    /// All report lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Marker positions.
    pub fn bounds(&self) -> SectionBounds {
        self.bounds
    }

    /// Header lines (before the description marker).
    pub fn header(&self) -> &[String] {
        &self.lines[self.bounds.header()]
    }

    /// One-line change summary with its status column removed.
    pub fn summary(&self) -> String {
        self.lines
            .get(SUMMARY_LINE)
            .map(|line| {
                line.char_indices()
                    .nth(SUMMARY_PREFIX_WIDTH)
                    .map(|(offset, _)| line[offset..].to_string())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// Description text (descriptive comments and release notes).
    pub fn description(&self) -> String {
        self.lines[self.bounds.description_body()].join("\n")
    }

    /// Description framed by the added-files notice.
    pub fn description_with_notice(&self) -> String {
        let rule = "-".repeat(65);
        format!(
            "{notice}\n\n{rule}\n\n{body}\n{rule}\n\n{notice}\n\n",
            notice = ADDITIONS_STRIPPED_NOTICE,
            rule = rule,
            body = self.description(),
        )
    }

    /// Lines of the diff body, ready for the transformer.
    pub fn diff_body(&self) -> &[String] {
        &self.lines[self.bounds.diff_body()]
    }
}
