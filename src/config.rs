use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::artifact_io::read_text_file;
use crate::default_config::DEFAULT_CONFIG_TOML;
use crate::error::ConfigError;
use crate::naming::ArtifactKind;

pub const CREDENTIAL_ENV_VAR: &str = "ANTHROPIC_API_KEY";
pub const CONFIG_PATH_ENV_VAR: &str = "QA_ASSIST_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QaConfig {
    pub api: ApiConfig,
    pub generator: ToolSettings,
    pub analyzer: ToolSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub version: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Per-tool knobs: token budget for the single remote call and where the artifact lands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolSettings {
    pub max_tokens: u32,
    pub output_dir: PathBuf,
}

/// One-run overrides taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub output_dir: Option<PathBuf>,
}

impl QaConfig {
    /// Loads the embedded defaults, overlaid with the file at `path` when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Self::from_toml_str("");
        };
        let text = read_text_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_override_text(&text, &path.display().to_string())
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::from_override_text(text, "inline config")
    }

    fn from_override_text(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let mut merged = parse_toml_table(DEFAULT_CONFIG_TOML, "embedded defaults")?;
        let override_value = parse_toml_table(text, origin)?;
        merge_toml_tables(&mut merged, override_value);
        let config: QaConfig = merged.try_into().map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        Ok(config)
    }

    pub fn tool(&self, kind: ArtifactKind) -> &ToolSettings {
        match kind {
            ArtifactKind::TestSuite => &self.generator,
            ArtifactKind::FailureReport => &self.analyzer,
        }
    }

    pub fn apply_overrides(&mut self, kind: ArtifactKind, overrides: &RunOverrides) {
        if let Some(model) = overrides
            .model
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            self.api.model = model.to_string();
        }
        let tool = match kind {
            ArtifactKind::TestSuite => &mut self.generator,
            ArtifactKind::FailureReport => &mut self.analyzer,
        };
        if let Some(max_tokens) = overrides.max_tokens {
            tool.max_tokens = max_tokens;
        }
        if let Some(output_dir) = &overrides.output_dir {
            tool.output_dir = output_dir.clone();
        }
    }
}

/// Picks the override file: an explicit flag wins over the environment variable.
pub fn resolve_config_path<F>(flag: Option<&Path>, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    lookup(CONFIG_PATH_ENV_VAR)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[derive(Clone)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(CREDENTIAL_ENV_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(Self)
            .ok_or(ConfigError::MissingCredential {
                var: CREDENTIAL_ENV_VAR,
            })
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(<redacted>)")
    }
}

fn parse_toml_table(text: &str, origin: &str) -> Result<toml::Value, ConfigError> {
    if text.trim().is_empty() {
        return Ok(toml::Value::Table(toml::map::Map::new()));
    }
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })
}

fn merge_toml_tables(base: &mut toml::Value, override_value: toml::Value) {
    match (base, override_value) {
        (toml::Value::Table(base_map), toml::Value::Table(override_map)) => {
            for (key, override_item) in override_map {
                if let Some(base_item) = base_map.get_mut(&key) {
                    merge_toml_tables(base_item, override_item);
                } else {
                    base_map.insert(key, override_item);
                }
            }
        }
        (base_slot, override_item) => {
            *base_slot = override_item;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config_tests.rs"]
mod tests;
