pub const DEFAULT_CONFIG_TOML: &str = r#"[api]
base_url = "https://api.anthropic.com/v1"
version = "2023-06-01"
model = "claude-sonnet-4-20250514"
timeout_secs = 600

[generator]
max_tokens = 4000
output_dir = "cypress/e2e"

[analyzer]
max_tokens = 3000
output_dir = "analysis"
"#;
