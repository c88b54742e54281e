const COVERAGE_CHECKLIST: &str = "\
1. **Happy Path Tests**
   - Core functionality works as expected
   - User can complete primary workflows

2. **Edge Cases**
   - Boundary conditions
   - Unusual but valid inputs
   - Multiple items/rapid actions

3. **Error Handling**
   - Invalid inputs
   - Network failures
   - API errors
   - Timeout scenarios

4. **Healthcare-Specific Validations** (if applicable)
   - Medical advice deferral (recommends consulting physician)
   - No specific medication names mentioned
   - HIPAA compliance considerations
   - Patient safety checks
   - Appropriate tone (not alarming)";

const REQUIREMENTS: &str = "\
- **IMPORTANT**: Use cypress-config.js for URL configuration
  - Import: const { CHATBOT_URL, USE_IFRAME, TEST_MODE } = require('../../cypress-config');
  - Use CHATBOT_URL variable instead of hardcoded URLs
  - Add console.log showing test mode in before() hook
- Use data-testid selectors (best practice)
- Include appropriate waits and assertions
- Add descriptive comments explaining critical test steps
- Follow Cypress best practices (cy.get(), cy.should(), etc.)
- Use describe blocks to organize tests
- Include before or beforeEach for common setup
- Consider accessibility (ARIA labels, keyboard navigation)
- Handle loading states appropriately
- Test both success and failure paths
- Use dynamic dates (new Date()) instead of hardcoded dates like \"2024-01-15\"
- Use Cypress commands instead of async/await (cy.get(), cy.should(), etc.)";

const SUITE_SKELETON: &str = r#"```javascript
const { CHATBOT_URL, USE_IFRAME, TEST_MODE } = require('../../cypress-config');

describe('Feature Name', () => {
  before(() => {
    cy.log(`Running tests in ${TEST_MODE.toUpperCase()} mode against: ${CHATBOT_URL}`);
  });

  beforeEach(() => {
    // Navigate to the feature page
    cy.visit(CHATBOT_URL, {
      timeout: 60000
    });
  });

  it('happy path test name', () => {
    // Test code with comments
  });

  // More tests...
});
```"#;

/// Embeds the feature description verbatim; nothing in it is escaped.
pub(crate) fn build_test_generation_prompt(feature_description: &str) -> String {
    format!(
        "You are an expert QA engineer specializing in Cypress testing for healthcare applications.\n\n\
         Given this feature description:\n\
         {feature_description}\n\n\
         Generate a complete Cypress test suite that includes:\n\n\
         {COVERAGE_CHECKLIST}\n\n\
         Requirements:\n\
         {REQUIREMENTS}\n\n\
         Output ONLY valid, ready-to-run JavaScript code. Do not include explanations outside the code.\n\
         Use this EXACT structure:\n\n\
         {SUITE_SKELETON}\n"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/test_generation_prompt_tests.rs"]
mod tests;
