use crate::pipeline::FailureRequest;

const ANALYSIS_CHECKLIST: &str = "\
1. **Root Cause Analysis**
   - What is the most likely cause of this failure?
   - Is this a test issue, application issue, or environmental issue?
   - Are there any red flags in the error message?

2. **Immediate Fix**
   - Specific code changes to fix this issue
   - Include the exact code with corrections
   - Explain why this fix works

3. **Robustness Improvements**
   - How to make this test more reliable
   - Better selectors or waiting strategies
   - Error handling improvements
   - Retry logic if appropriate

4. **Additional Test Coverage**
   - What related scenarios should also be tested?
   - Are there edge cases this failure revealed?
   - Suggestions for preventing similar issues

5. **Healthcare-Specific Considerations** (if applicable)
   - Does this affect patient data handling?
   - Could this impact medical advice accuracy?
   - Any compliance concerns (HIPAA, etc.)?";

pub(crate) fn build_failure_analysis_prompt(request: &FailureRequest) -> String {
    let code_section = request
        .test_source
        .as_deref()
        .map(|source| format!("\n\nTest Code:\n```javascript\n{source}\n```\n"))
        .unwrap_or_default();
    format!(
        "You are an expert QA debugging specialist for Playwright tests in healthcare applications.\n\n\
         A test has failed and needs analysis:\n\n\
         Test Name: {}\n\n\
         Error Message:\n\
         {}\n\
         {code_section}\n\n\
         Please provide a comprehensive analysis including:\n\n\
         {ANALYSIS_CHECKLIST}\n\n\
         Be specific and actionable. Provide code examples where helpful.\n",
        request.test_name, request.error_message,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/failure_analysis_prompt_tests.rs"]
mod tests;
