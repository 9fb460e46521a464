/// Errors from the Copilot HTTP layer.
use std::fmt;

use thiserror::Error;

/// Which of the two round-trips an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Credential exchange against the token authority.
    TokenExchange,
    /// Models listing against the `api` endpoint.
    ListModels,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TokenExchange => "Copilot token",
            Self::ListModels => "models",
        })
    }
}

/// Errors that can occur while talking to the token authority or the models endpoint.
#[derive(Debug, Error)]
pub enum CopilotError {
    /// The HTTP client could not be constructed (TLS backend, invalid settings).
    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Failed to get {step}: {source}")]
    Transport {
        /// Step that failed.
        step: Step,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Failed to get {step}: {status} {body}")]
    Status {
        /// Step that failed.
        step: Step,
        /// HTTP status code.
        status: u16,
        /// Response body as text, possibly empty.
        body: String,
    },

    /// The body was not JSON or lacked a required field.
    #[error("Unexpected {step} response: {reason}")]
    MalformedResponse {
        /// Step that failed.
        step: Step,
        /// What was wrong with the body.
        reason: String,
    },

    /// The token response did not advertise the endpoint role we need.
    #[error("Token response has no '{role}' endpoint")]
    MissingEndpoint {
        /// Role name that was looked up.
        role: String,
    },
}
