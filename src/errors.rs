/// Top-level error aggregating every layer, with CLI exit code mapping.
use thiserror::Error;

use crate::config::ConfigError;
use crate::copilot::CopilotError;
use crate::persist::PersistError;

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be read. Raised before any network call.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One of the HTTP round-trips failed.
    #[error(transparent)]
    Copilot(#[from] CopilotError),

    /// Writing or formatting the output file failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl AppError {
    /// Return the CLI exit code for this error.
    ///
    /// A failing formatter hands its own exit code through.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Persist(PersistError::FormatterFailed {
                code: Some(code), ..
            }) if *code != 0 => *code,
            Self::Copilot(_) | Self::Persist(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "missing_config",
            Self::Copilot(CopilotError::Client(_)) => "client_error",
            Self::Copilot(CopilotError::Transport { .. }) => "transport_error",
            Self::Copilot(CopilotError::Status { .. }) => "http_status",
            Self::Copilot(CopilotError::MalformedResponse { .. }) => "malformed_response",
            Self::Copilot(CopilotError::MissingEndpoint { .. }) => "missing_endpoint",
            Self::Persist(PersistError::Serialize(_) | PersistError::Write { .. }) => "write_failed",
            Self::Persist(PersistError::FormatterSpawn { .. } | PersistError::FormatterFailed { .. }) => {
                "formatter_failed"
            }
        }
    }

    /// HTTP status carried by the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Copilot(CopilotError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::copilot::errors::Step;

    #[test]
    fn test_exit_codes() {
        let missing: AppError = ConfigError::Missing {
            name: "GITHUB_TOKEN",
        }
        .into();
        assert_eq!(missing.exit_code(), 2);

        let rejected: AppError = CopilotError::Status {
            step: Step::ListModels,
            status: 404,
            body: String::new(),
        }
        .into();
        assert_eq!(rejected.exit_code(), 1);
        assert_eq!(rejected.status(), Some(404));

        let formatter = |code| -> AppError {
            PersistError::FormatterFailed {
                formatter: PathBuf::from("prettier"),
                code,
            }
            .into()
        };
        assert_eq!(formatter(Some(2)).exit_code(), 2);
        assert_eq!(formatter(None).exit_code(), 1);
        assert_eq!(formatter(None).code(), "formatter_failed");
    }
}
