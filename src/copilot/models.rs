/// Models listing: fetch the `data` array from `<api>/models`.
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;

use super::client::{CopilotClient, join_url};
use super::errors::{CopilotError, Step};
use super::token::SessionToken;

/// Endpoint role that serves the models listing.
pub const API_ROLE: &str = "api";
/// Path of the listing, relative to the `api` endpoint.
pub const MODELS_PATH: &str = "/models";

/// Model records in server order, each an opaque JSON object.
pub type ModelList = Vec<Value>;

#[derive(Debug, Deserialize)]
struct ModelsEnvelope {
    data: ModelList,
}

/// Fetch the model records advertised to `session`.
///
/// # Errors
///
/// Returns `CopilotError` if the `api` endpoint is missing, on transport failure,
/// on a non-2xx status, or when the body has no `data` array.
pub fn list_models(
    client: &CopilotClient,
    session: &SessionToken,
) -> Result<ModelList, CopilotError> {
    let url = join_url(session.endpoint(API_ROLE)?, MODELS_PATH);
    tracing::debug!(%url, "listing models");

    let request = client
        .get(&url)
        .header(AUTHORIZATION, format!("Bearer {}", session.token.expose()))
        .header(CONTENT_TYPE, "application/json")
        .header(USER_AGENT, client.user_agent());
    let body = client.send_json(request, Step::ListModels)?;

    let envelope: ModelsEnvelope =
        serde_json::from_value(body).map_err(|err| CopilotError::MalformedResponse {
            step: Step::ListModels,
            reason: err.to_string(),
        })?;
    Ok(envelope.data)
}
