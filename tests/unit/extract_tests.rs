use super::*;

fn test_suite() -> Extractor {
    Extractor::for_artifact(ArtifactKind::TestSuite)
}

fn failure_report() -> Extractor {
    Extractor::for_artifact(ArtifactKind::FailureReport)
}

#[test]
fn labeled_fence_body_is_returned_trimmed() {
    let raw = "Here you go:\n```javascript\ndescribe('Login', () => {});\n```\nEnjoy!";
    let extracted = test_suite().extract(raw).expect("should extract");
    assert_eq!(extracted.text, "describe('Login', () => {});");
    assert_eq!(extracted.source, ExtractionSource::Labeled("javascript"));
}

#[test]
fn generic_fence_drops_other_language_label() {
    let extracted = test_suite()
        .extract("```lang\nBODY\n```")
        .expect("should extract");
    assert_eq!(extracted.text, "BODY");
    assert_eq!(extracted.source, ExtractionSource::Generic);
}

#[test]
fn generic_fence_without_label_returns_body() {
    let extracted = test_suite()
        .extract("Intro\n```\nit('works', () => {});\n```")
        .expect("should extract");
    assert_eq!(extracted.text, "it('works', () => {});");
}

#[test]
fn generic_fence_keeps_code_on_opener_line() {
    let extracted = test_suite()
        .extract("```cy.get('a').click();\ncy.get('b');```")
        .expect("should extract");
    assert_eq!(extracted.text, "cy.get('a').click();\ncy.get('b');");
}

#[test]
fn labeled_fence_wins_over_earlier_generic_fence() {
    let raw = "```text\nnotes\n```\n```javascript\nconst a = 1;\n```";
    let extracted = test_suite().extract(raw).expect("should extract");
    assert_eq!(extracted.text, "const a = 1;");
}

#[test]
fn unfenced_reply_is_returned_trimmed() {
    let extracted = test_suite()
        .extract("\n\n  describe('x', () => {});  \n")
        .expect("should extract");
    assert_eq!(extracted.text, "describe('x', () => {});");
    assert_eq!(extracted.source, ExtractionSource::Unfenced);
}

#[test]
fn unclosed_fence_falls_back_to_whole_reply() {
    let raw = "```javascript\ndescribe('cut off', () => {";
    let extracted = test_suite().extract(raw).expect("should extract");
    assert_eq!(extracted.text, raw);
    assert_eq!(extracted.source, ExtractionSource::Unfenced);
}

#[test]
fn empty_fence_body_is_not_a_match() {
    let raw = "```javascript\n```\nconsole.log('outside');";
    let extracted = test_suite().extract(raw).expect("should extract");
    assert_eq!(extracted.source, ExtractionSource::Unfenced);
    assert_eq!(extracted.text, raw);
}

#[test]
fn blank_reply_is_an_error() {
    assert_eq!(test_suite().extract("  \n\t "), Err(ExtractError::Empty));
}

#[test]
fn failure_report_keeps_embedded_code_examples() {
    let raw = "## Root Cause\nThe selector is stale.\n\n```javascript\ncy.get('[data-testid=send]');\n```\n\nMore notes.";
    let extracted = failure_report().extract(raw).expect("should extract");
    assert_eq!(extracted.text, raw);
    assert_eq!(extracted.source, ExtractionSource::Unfenced);
}

#[test]
fn failure_report_unwraps_markdown_fence() {
    let raw = "```markdown\n## Root Cause\nTimeout.\n```";
    let extracted = failure_report().extract(raw).expect("should extract");
    assert_eq!(extracted.text, "## Root Cause\nTimeout.");
    assert_eq!(extracted.source, ExtractionSource::Labeled("markdown"));
}

#[test]
fn strategy_lists_are_ordered_per_artifact() {
    assert_eq!(
        test_suite().strategies(),
        &[FenceStrategy::Labeled("javascript"), FenceStrategy::Generic]
    );
    assert_eq!(
        failure_report().strategies(),
        &[FenceStrategy::Labeled("markdown")]
    );
}

#[test]
fn markdown_wrapper_keeps_nested_code_examples() {
    let raw = "```markdown\n## Root Cause\nSelector changed.\n\n## Immediate Fix\n```javascript\ncy.get('[data-testid=send]').click();\n```\n\n## Robustness Improvements\nWait for the reply bubble.\n```\nThanks!";
    let extracted = failure_report().extract(raw).expect("should extract");
    assert_eq!(extracted.source, ExtractionSource::Labeled("markdown"));
    assert!(extracted.text.starts_with("## Root Cause"));
    assert!(extracted.text.contains("cy.get('[data-testid=send]').click();\n```"));
    assert!(extracted.text.ends_with("## Robustness Improvements\nWait for the reply bubble."));
    assert!(!extracted.text.contains("Thanks!"));
}

#[test]
fn longer_label_is_not_taken_for_the_expected_one() {
    let extracted = test_suite()
        .extract("```javascriptreact\ndescribe('x', () => {});\n```")
        .expect("should extract");
    assert_eq!(extracted.text, "describe('x', () => {});");
    assert_eq!(extracted.source, ExtractionSource::Generic);
}

#[test]
fn exact_label_after_a_longer_one_still_matches() {
    let raw = "```javascriptreact\n<App />\n```\n```javascript  \nit('runs', () => {});\n```";
    let extracted = test_suite().extract(raw).expect("should extract");
    assert_eq!(extracted.text, "it('runs', () => {});");
    assert_eq!(extracted.source, ExtractionSource::Labeled("javascript"));
}
