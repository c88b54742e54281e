use super::*;
use std::path::PathBuf;

use crate::error::ConfigError;

fn captured<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    write(&mut buf).expect("write to buffer");
    String::from_utf8(buf).expect("utf8 output")
}

#[test]
fn feature_preview_keeps_short_descriptions_intact() {
    assert_eq!(feature_preview("User login with 2FA"), "User login with 2FA");
    let exactly = "a".repeat(FEATURE_PREVIEW_CHARS);
    assert_eq!(feature_preview(&exactly), exactly);
}

#[test]
fn feature_preview_truncates_long_descriptions_with_ellipsis() {
    let long = "é".repeat(FEATURE_PREVIEW_CHARS + 5);
    let preview = feature_preview(&long);
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), FEATURE_PREVIEW_CHARS + 3);
}

#[test]
fn banner_is_framed_by_rules() {
    let text = captured(|out| print_banner(out, "🧪", "AI-Powered Cypress Test Generator"));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "=".repeat(BANNER_WIDTH));
    assert!(lines[1].starts_with("🧪 "));
    assert!(lines[1].contains("AI-Powered Cypress Test Generator"));
    assert_eq!(lines[2], "=".repeat(BANNER_WIDTH));
}

#[test]
fn generation_summary_lists_next_steps_for_the_written_path() {
    let path = PathBuf::from("cypress/e2e/generated-login-20261016_143005.cy.js");
    let text = captured(|out| print_generation_summary(out, &path));
    assert!(text.contains("Tests generated successfully!"));
    assert!(text.contains("📁 Saved to: cypress/e2e/generated-login-20261016_143005.cy.js"));
    assert!(text.contains(
        "npx cypress run --spec cypress/e2e/generated-login-20261016_143005.cy.js"
    ));
    assert!(text.contains("npx cypress open"));
}

#[test]
fn analysis_is_framed_with_heading() {
    let framed = format_analysis("## Root Cause\nslow network");
    let lines: Vec<&str> = framed.lines().collect();
    assert_eq!(lines.first(), Some(&rule().as_str()));
    assert_eq!(lines[1], "🔍 TEST FAILURE ANALYSIS");
    assert_eq!(lines[4], "## Root Cause");
    assert_eq!(lines.last(), Some(&rule().as_str()));
}

#[test]
fn source_warning_names_the_path() {
    let text = captured(|out| print_source_warning(out, Path::new("tests/missing.spec.js")));
    assert!(text.contains("Could not read tests/missing.spec.js, continuing without test code"));
}

#[test]
fn missing_credential_error_explains_how_to_set_it() {
    let err = QaError::from(ConfigError::MissingCredential {
        var: CREDENTIAL_ENV_VAR,
    });
    let text = captured(|out| report_error(out, &err));
    assert!(text.contains("ANTHROPIC_API_KEY environment variable not set"));
    assert!(text.contains("export ANTHROPIC_API_KEY='your-api-key-here'"));
}

#[test]
fn other_errors_skip_the_credential_hint() {
    let err = QaError::Write {
        path: PathBuf::from("analysis/x.md"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    let text = captured(|out| report_error(out, &err));
    assert!(text.contains("Error: "));
    assert!(!text.contains("export"));
}
