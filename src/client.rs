use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ApiConfig, ApiCredential, ToolSettings};
use crate::error::{GenerateError, QaError};

/// Anything that turns a prompt into reply text with a single remote exchange.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_version: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn for_tool(api: &ApiConfig, tool: &ToolSettings) -> Self {
        Self {
            base_url: api.base_url.trim().to_string(),
            api_version: api.version.clone(),
            model: api.model.clone(),
            max_tokens: tool.max_tokens,
            timeout: Duration::from_secs(api.timeout_secs),
        }
    }

    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url.trim_end_matches('/'))
    }
}

pub struct AnthropicClient {
    config: ClientConfig,
    credential: ApiCredential,
    http: reqwest::blocking::Client,
}

impl AnthropicClient {
    pub fn new(config: ClientConfig, credential: ApiCredential) -> Result<Self, GenerateError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config,
            credential,
            http,
        })
    }

    /// Same as [`AnthropicClient::new`], shaped for the binaries' connect step.
    pub fn connect(config: ClientConfig, credential: ApiCredential) -> Result<Self, QaError> {
        Ok(Self::new(config, credential)?)
    }
}

impl TextGenerator for AnthropicClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = build_request(&self.config, prompt);
        debug!(
            model = %self.config.model,
            max_tokens = self.config.max_tokens,
            prompt_chars = prompt.chars().count(),
            "sending messages request"
        );
        let response = self
            .http
            .post(self.config.messages_url())
            .header("x-api-key", self.credential.expose())
            .header("anthropic-version", self.config.api_version.as_str())
            .json(&request)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), body_bytes = body.len(), "received reply");
        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &body));
        }
        first_text_segment(&body)
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

fn build_request<'a>(config: &'a ClientConfig, prompt: &'a str) -> MessagesRequest<'a> {
    MessagesRequest {
        model: &config.model,
        max_tokens: config.max_tokens,
        messages: vec![RequestMessage {
            role: "user",
            content: prompt,
        }],
    }
}

fn parse_api_error(status: u16, body: &str) -> GenerateError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => GenerateError::Api {
            status,
            kind: envelope.error.kind,
            message: envelope.error.message,
        },
        Err(_) => {
            let trimmed = body.trim();
            GenerateError::Api {
                status,
                kind: "http_error".to_string(),
                message: if trimmed.is_empty() {
                    "no response body".to_string()
                } else {
                    trimmed.to_string()
                },
            }
        }
    }
}

fn first_text_segment(body: &str) -> Result<String, GenerateError> {
    let reply: MessagesResponse = serde_json::from_str(body)
        .map_err(|err| GenerateError::MalformedReply(err.to_string()))?;
    reply
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or(GenerateError::EmptyReply)
}

#[cfg(test)]
#[path = "../tests/unit/client_tests.rs"]
mod tests;
