//! Prompt-driven QA helpers: a Cypress test generator and a test-failure analyzer,
//! both backed by a single blocking call to the Anthropic messages API.

pub mod app;
pub mod artifact_io;
pub mod cli;
pub mod client;
pub mod config;
mod default_config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod naming;
pub mod output;
pub mod pipeline;
mod prompts;
