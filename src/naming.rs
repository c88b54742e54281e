use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Only this many leading characters of the source text feed the slug.
pub const SLUG_SOURCE_CHARS: usize = 50;
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    TestSuite,
    FailureReport,
}

impl ArtifactKind {
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::TestSuite => "generated",
            Self::FailureReport => "failure",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::TestSuite => ".cy.js",
            Self::FailureReport => ".md",
        }
    }
}

/// Reduces free text to a lowercase, hyphenated path segment.
///
/// Characters other than ASCII alphanumerics, spaces and hyphens are dropped outright;
/// surrounding spaces are trimmed and each remaining space becomes a hyphen.
pub fn slugify(input: &str) -> String {
    let kept: String = input
        .chars()
        .take(SLUG_SOURCE_CHARS)
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == ' ' || *ch == '-')
        .collect();
    kept.trim().replace(' ', "-").to_ascii_lowercase()
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// `<prefix>-<slug>-<timestamp><ext>`; the slug segment is left out when it filters to nothing.
pub fn file_name(kind: ArtifactKind, source_text: &str, timestamp: &NaiveDateTime) -> String {
    let slug = slugify(source_text);
    let stamp = format_timestamp(timestamp);
    if slug.is_empty() {
        format!("{}-{stamp}{}", kind.file_prefix(), kind.extension())
    } else {
        format!("{}-{slug}-{stamp}{}", kind.file_prefix(), kind.extension())
    }
}

pub fn artifact_path(
    output_dir: &Path,
    kind: ArtifactKind,
    source_text: &str,
    timestamp: &NaiveDateTime,
) -> PathBuf {
    output_dir.join(file_name(kind, source_text, timestamp))
}

#[cfg(test)]
#[path = "../tests/unit/naming_tests.rs"]
mod tests;
