use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::artifact_io::write_text_file_creating_parents;
use crate::client::TextGenerator;
use crate::config::ToolSettings;
use crate::error::{QaError, Result};
use crate::extract::{ExtractionSource, Extractor};
use crate::naming::{self, ArtifactKind};
use crate::prompts;

/// Feature to generate a Cypress suite for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRequest {
    pub description: String,
}

/// A failing test, with its source when it could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRequest {
    pub test_name: String,
    pub error_message: String,
    pub test_source: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    /// Relative output directories resolve against this; empty means the working directory.
    pub root: &'a Path,
    pub settings: &'a ToolSettings,
    pub timestamp: NaiveDateTime,
}

/// A suite written to disk, with the rule that pulled it out of the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSuite {
    pub path: PathBuf,
    pub code: String,
    /// Labeled fence, generic fence, or the whole reply.
    pub source: ExtractionSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub path: PathBuf,
    pub analysis: String,
    pub document: String,
}

pub fn generate_test_suite<G>(
    generator: &G,
    request: &FeatureRequest,
    ctx: &RunContext<'_>,
) -> Result<GeneratedSuite>
where
    G: TextGenerator + ?Sized,
{
    let kind = ArtifactKind::TestSuite;
    let prompt = prompts::build_test_generation_prompt(&request.description);
    let raw = generator.generate(&prompt)?;
    let extracted = Extractor::for_artifact(kind).extract(&raw)?;
    debug!(source = ?extracted.source, chars = extracted.text.len(), "extracted test suite");

    let path = destination(ctx, kind, &request.description);
    persist(&path, &extracted.text)?;
    Ok(GeneratedSuite {
        path,
        code: extracted.text,
        source: extracted.source,
    })
}

pub fn analyze_failure<G>(
    generator: &G,
    request: &FailureRequest,
    ctx: &RunContext<'_>,
) -> Result<FailureReport>
where
    G: TextGenerator + ?Sized,
{
    let kind = ArtifactKind::FailureReport;
    let prompt = prompts::build_failure_analysis_prompt(request);
    let raw = generator.generate(&prompt)?;
    let extracted = Extractor::for_artifact(kind).extract(&raw)?;
    debug!(source = ?extracted.source, chars = extracted.text.len(), "extracted analysis");

    let document = render_report(request, &extracted.text, &ctx.timestamp);
    let path = destination(ctx, kind, &request.test_name);
    persist(&path, &document)?;
    Ok(FailureReport {
        path,
        analysis: extracted.text,
        document,
    })
}

/// Markdown report: header with test name, date and the verbatim error, then the analysis.
pub fn render_report(request: &FailureRequest, analysis: &str, timestamp: &NaiveDateTime) -> String {
    let fence = "`".repeat(longest_backtick_run(&request.error_message).max(2) + 1);
    format!(
        "# Test Failure Analysis\n\n\
         **Test:** {}\n\
         **Date:** {}\n\n\
         **Error:**\n\n\
         {fence}text\n{}\n{fence}\n\n\
         ---\n\n\
         {analysis}\n",
        request.test_name,
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        request.error_message,
    )
}

// The error block's fence must outrun any backtick sequence inside the message.
fn longest_backtick_run(text: &str) -> usize {
    text.split(|ch: char| ch != '`')
        .map(str::len)
        .max()
        .unwrap_or(0)
}

fn destination(ctx: &RunContext<'_>, kind: ArtifactKind, source_text: &str) -> PathBuf {
    let relative = naming::artifact_path(
        &ctx.settings.output_dir,
        kind,
        source_text,
        &ctx.timestamp,
    );
    ctx.root.join(relative)
}

fn persist(path: &Path, contents: &str) -> Result<()> {
    write_text_file_creating_parents(path, contents).map_err(|source| QaError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline_tests.rs"]
mod tests;
