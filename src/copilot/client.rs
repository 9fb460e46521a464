/// Blocking HTTP client shared by both Copilot round-trips.
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

use super::errors::{CopilotError, Step};
use crate::config::Config;

/// Client identity header sent on every request.
pub const EDITOR_VERSION_HEADER: &str = "editor-version";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client bound to one configuration.
#[derive(Debug, Clone)]
pub struct CopilotClient {
    http: Client,
    authority_url: String,
    editor_version: String,
    user_agent: String,
}

impl CopilotClient {
    /// Build a client from `config` with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `CopilotError::Client` if the underlying HTTP client cannot be built.
    pub fn new(config: &Config, timeout: Duration) -> Result<Self, CopilotError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CopilotError::Client)?;
        Ok(Self {
            http,
            authority_url: config.authority_url.clone(),
            editor_version: config.editor_version.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Base URL of the token authority.
    #[must_use]
    pub fn authority_url(&self) -> &str {
        &self.authority_url
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Start a GET request carrying the `editor-version` header.
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .header(EDITOR_VERSION_HEADER, &self.editor_version)
    }

    /// Send `request` and parse a successful body as JSON.
    ///
    /// Non-success statuses carry the raw body back to the caller. No retries.
    ///
    /// # Errors
    ///
    /// - `CopilotError::Transport` if no response could be read
    /// - `CopilotError::Status` on a non-2xx status
    /// - `CopilotError::MalformedResponse` if the body is not JSON
    pub(crate) fn send_json(&self, request: RequestBuilder, step: Step) -> Result<Value, CopilotError> {
        let response = request
            .send()
            .map_err(|source| CopilotError::Transport { step, source })?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|source| CopilotError::Transport { step, source })?;

        if !status.is_success() {
            tracing::debug!(%status, %step, "request rejected");
            return Err(CopilotError::Status {
                step,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|err| CopilotError::MalformedResponse {
            step,
            reason: format!("body is not valid JSON ({err})"),
        })
    }
}

/// Join a base URL and a path with exactly one `/` between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
