use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QaError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} environment variable not set")]
    MissingCredential { var: &'static str },

    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Failures of the remote generation call.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("API Error: {status} {kind}: {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode model reply: {0}")]
    MalformedReply(String),

    #[error("model reply contained no text segment")]
    EmptyReply,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("model reply was empty after removing code fences")]
    Empty,
}

#[derive(Debug, Error)]
pub enum QaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write to terminal: {0}")]
    Terminal(#[from] io::Error),
}

impl QaError {
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::Config(ConfigError::MissingCredential { .. }))
    }
}
