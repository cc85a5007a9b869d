//! Classification of individual diff body lines.

use crate::error::{PicdiffError, Result};

/// Separator between segments of a piccolo tree path.
pub const TREE_SEPARATOR: char = '!';

/// First segment of every tree in the main repository.
pub const ROOT_TREE: &str = "ingres";

/// A header line for a file in the main repository starts with this.
pub const ROOT_TREE_PREFIX: &str = "ingres!";

/// What a file header describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// An existing file changed: `<tree> <filename> <ignored> <revision>`.
    Change,
    /// A new file: `<tree> <filename> <ignored> <ignored> <ignored> <revision>.`
    Addition,
}

/// A parsed file header from the diff body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub tree: String,
    pub filename: String,
    /// Revision recorded by the change.
    pub revision: i64,
    pub kind: HeaderKind,
}

impl HeaderLine {
    /// Parse a header line.
    ///
    /// Four whitespace-separated tokens make a change header, six make an
    /// addition header whose revision ends in a period. The revision must be
    /// an integer and the tree must contain at least one `!`.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let malformed = || PicdiffError::MalformedHeaderLine {
            line: line.to_string(),
        };

        let (tree, filename, revision, kind) = match tokens.as_slice() {
            [tree, filename, _, revision] => (*tree, *filename, *revision, HeaderKind::Change),
            [tree, filename, _, _, _, revision] => {
                let revision = revision.strip_suffix('.').unwrap_or(*revision);
                (*tree, *filename, revision, HeaderKind::Addition)
            }
            _ => return Err(malformed()),
        };

        let revision: i64 = revision.parse().map_err(|_| malformed())?;
        // The baseline revision must be representable.
        if revision.checked_sub(1).is_none() {
            return Err(malformed());
        }

        if !tree.contains(TREE_SEPARATOR) {
            return Err(malformed());
        }

        Ok(Self {
            tree: tree.to_string(),
            filename: filename.to_string(),
            revision,
            kind,
        })
    }

    /// The revision the change was made against.
    pub fn baseline_revision(&self) -> i64 {
        self.revision - 1
    }

    /// Synthetic header naming the baseline revision.
    pub fn baseline_header(&self) -> String {
        format!(
            "=== {} {} rev {} ====",
            self.tree,
            self.filename,
            self.baseline_revision()
        )
    }
}

/// A non-blank line of the diff body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine<'a> {
    /// Opaque hunk content, passed through unchanged.
    Hunk(&'a str),
    /// A file header.
    Header(HeaderLine),
}

/// Whether a line is hunk content rather than a file header.
///
/// Hunk lines start with `>`, `<`, `---`, or a digit (`12a13,14`).
pub fn is_hunk_line(line: &str) -> bool {
    line.starts_with('>')
        || line.starts_with('<')
        || line.starts_with("---")
        || line.starts_with(|c: char| c.is_ascii_digit())
}

/// Classify a non-blank diff body line.
pub fn classify_line(line: &str) -> Result<DiffLine<'_>> {
    if is_hunk_line(line) {
        Ok(DiffLine::Hunk(line))
    } else {
        HeaderLine::parse(line).map(DiffLine::Header)
    }
}
