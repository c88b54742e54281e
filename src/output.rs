//! Terminal status text. Everything here writes to a caller-supplied sink so the
//! binaries can hand in stdout/stderr and tests can hand in a buffer.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::CREDENTIAL_ENV_VAR;
use crate::error::QaError;

pub const BANNER_WIDTH: usize = 70;
const FEATURE_PREVIEW_CHARS: usize = 100;

pub const GENERATOR_EXAMPLES: &str = "\
Examples:
  cypress-test-generator 'Eva chatbot timing questions'
  cypress-test-generator 'User login with 2FA'
  cypress-test-generator 'Test results display with biomarkers'";

pub const ANALYZER_EXAMPLES: &str = "\
Examples:
  failure-analyzer \\
    'Eva responds to TSH question' \\
    'TimeoutError: locator.click: Timeout 30000ms exceeded'

  failure-analyzer \\
    'User login test' \\
    'Error: Element not found' \\
    tests/login.spec.js";

fn rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub fn print_banner<W: Write>(out: &mut W, icon: &str, title: &str) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{icon} {}", title.bold())?;
    writeln!(out, "{}", rule())?;
    writeln!(out)
}

/// Shortens the description for the progress line, marking the cut with an ellipsis.
pub fn feature_preview(description: &str) -> String {
    let mut chars = description.chars();
    let preview: String = chars.by_ref().take(FEATURE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}

pub fn print_generation_started<W: Write>(out: &mut W, description: &str) -> io::Result<()> {
    writeln!(out, "🤖 Generating tests with Claude AI...")?;
    writeln!(out, "📝 Feature: {}", feature_preview(description))?;
    writeln!(out)
}

pub fn print_generation_summary<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    let shown = path.display();
    writeln!(out, "{}", "✅ Tests generated successfully!".green().bold())?;
    writeln!(out)?;
    writeln!(out, "📁 Saved to: {shown}")?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  1. Review the generated tests: cat {shown}")?;
    writeln!(out, "  2. Run the tests: npx cypress run --spec {shown}")?;
    writeln!(out, "  3. Debug if needed: npx cypress open")?;
    writeln!(out)?;
    writeln!(
        out,
        "💡 Tip: Always review AI-generated tests before running in production!"
    )?;
    writeln!(out)
}

pub fn print_reading_source<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "📖 Reading test file: {}", path.display())
}

pub fn print_source_warning<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "⚠️  Warning: Could not read {}, continuing without test code",
            path.display()
        )
        .yellow()
    )
}

pub fn print_analysis_started<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🤖 Analyzing failure with Claude AI...")?;
    writeln!(out)
}

/// Frames the analysis between two rules under a heading.
pub fn format_analysis(analysis: &str) -> String {
    let rule = rule();
    [
        rule.as_str(),
        "🔍 TEST FAILURE ANALYSIS",
        rule.as_str(),
        "",
        analysis,
        "",
        rule.as_str(),
    ]
    .join("\n")
}

pub fn print_analysis<W: Write>(out: &mut W, analysis: &str) -> io::Result<()> {
    writeln!(out, "{}", format_analysis(analysis))
}

pub fn print_analysis_saved<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "💾 Analysis saved to: {}", path.display())?;
    writeln!(out)?;
    writeln!(
        out,
        "💡 Tip: Review the suggestions and test them incrementally!"
    )?;
    writeln!(out)
}

pub fn report_error<W: Write>(out: &mut W, err: &QaError) -> io::Result<()> {
    writeln!(out, "{}", format!("❌ Error: {err}").red())?;
    if err.is_missing_credential() {
        writeln!(out)?;
        writeln!(out, "Set it with:")?;
        writeln!(out, "  export {CREDENTIAL_ENV_VAR}='your-api-key-here'")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/output_tests.rs"]
mod tests;
