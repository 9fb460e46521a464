/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the raw API records and session types.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Summary of a completed `fetch` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOutput {
    /// Always `true`.
    pub ok: bool,
    /// File the records were written to.
    pub path: String,
    /// Number of records written.
    pub count: usize,
    /// Whether the formatter ran successfully on the file.
    pub formatted: bool,
    /// Resolved formatter path, when one ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    /// Per-record display rows.
    pub models: Vec<ModelRowOutput>,
}

/// Display fields picked out of an opaque model record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRowOutput {
    /// Model identifier, e.g. `"gpt-4o"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Vendor, e.g. `"Azure OpenAI"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl ModelRowOutput {
    /// Pick `id`, `name` and `vendor` out of a record. Absent or non-string fields are `None`.
    #[must_use]
    pub fn from_record(record: &Value) -> Self {
        let field = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            id: field("id"),
            name: field("name"),
            vendor: field("vendor"),
        }
    }
}

/// Result of the `token` command. The token itself is always redacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenOutput {
    /// First characters of the session token followed by `...`.
    pub token: String,
    /// Expiry as a Unix timestamp, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// Role name to base URL.
    pub endpoints: BTreeMap<String, String>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status, for rejected requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                status: err.status(),
            },
        }
    }
}
