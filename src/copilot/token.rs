/// Credential exchange: trade the long-lived GitHub credential for a Copilot session.
use std::collections::BTreeMap;

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use super::client::{CopilotClient, join_url};
use super::errors::{CopilotError, Step};
use crate::config::Secret;

/// Path of the token exchange endpoint, relative to the authority.
pub const TOKEN_PATH: &str = "/copilot_internal/v2/token";

/// Short-lived session returned by the authority. Lives for a single run.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionToken {
    /// Bearer token for downstream endpoints.
    pub token: Secret,
    /// Role name (e.g. `"api"`) to base URL.
    pub endpoints: BTreeMap<String, String>,
    /// Unix timestamp at which the token expires, when the authority reports one.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl SessionToken {
    /// Base URL advertised for `role`.
    ///
    /// # Errors
    ///
    /// Returns `CopilotError::MissingEndpoint` if the role is not advertised.
    pub fn endpoint(&self, role: &str) -> Result<&str, CopilotError> {
        self.endpoints
            .get(role)
            .map(String::as_str)
            .ok_or_else(|| CopilotError::MissingEndpoint {
                role: role.to_owned(),
            })
    }
}

/// Exchange `credential` for a session token.
///
/// Sends `GET <authority>/copilot_internal/v2/token` with `Authorization: token <credential>`.
///
/// # Errors
///
/// Returns `CopilotError` on transport failure, non-2xx status, or a body missing
/// `token` or `endpoints`.
pub fn exchange_token(
    client: &CopilotClient,
    credential: &Secret,
) -> Result<SessionToken, CopilotError> {
    let url = join_url(client.authority_url(), TOKEN_PATH);
    tracing::debug!(%url, "exchanging credential");

    let request = client
        .get(&url)
        .header(AUTHORIZATION, format!("token {}", credential.expose()));
    let body = client.send_json(request, Step::TokenExchange)?;

    serde_json::from_value(body).map_err(|err| CopilotError::MalformedResponse {
        step: Step::TokenExchange,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::Matcher;

    use super::*;
    use crate::copilot::test_support::config_for;

    fn client_for(server: &mockito::ServerGuard) -> CopilotClient {
        CopilotClient::new(&config_for(&server.url()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_exchange_sends_identity_headers() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", TOKEN_PATH)
            .match_header("authorization", "token ghu_test")
            .match_header("editor-version", "vscode/1.97.2")
            .with_status(200)
            .with_body(
                r#"{"token":"tid=abc;exp=1","expires_at":1700000000,
                    "endpoints":{"api":"https://api.individual.githubcopilot.com","proxy":"https://proxy"}}"#,
            )
            .create();

        let session = exchange_token(&client_for(&server), &Secret::new("ghu_test")).unwrap();

        mock.assert();
        assert_eq!(session.token.expose(), "tid=abc;exp=1");
        assert_eq!(session.expires_at, Some(1_700_000_000));
        assert_eq!(
            session.endpoint("api").unwrap(),
            "https://api.individual.githubcopilot.com"
        );
    }

    #[test]
    fn test_exchange_rejected() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", TOKEN_PATH)
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create();

        let err = exchange_token(&client_for(&server), &Secret::new("ghu_test")).unwrap_err();
        assert!(matches!(
            err,
            CopilotError::Status {
                step: Step::TokenExchange,
                status: 401,
                ..
            }
        ));
        assert!(err.to_string().contains("Bad credentials"));
    }

    #[test]
    fn test_exchange_missing_endpoints() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", TOKEN_PATH)
            .match_header("authorization", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"token":"abc"}"#)
            .create();

        let err = exchange_token(&client_for(&server), &Secret::new("ghu_test")).unwrap_err();
        match err {
            CopilotError::MalformedResponse { step, reason } => {
                assert_eq!(step, Step::TokenExchange);
                assert!(reason.contains("endpoints"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_role() {
        let session = SessionToken {
            token: Secret::new("abc"),
            endpoints: BTreeMap::new(),
            expires_at: None,
        };
        assert!(matches!(
            session.endpoint("api"),
            Err(CopilotError::MissingEndpoint { .. })
        ));
    }
}
