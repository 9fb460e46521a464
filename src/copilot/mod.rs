/// Copilot API layer: credential exchange and models listing.
pub mod client;
pub mod errors;
pub mod models;
pub mod token;

pub use client::CopilotClient;
pub use errors::CopilotError;
pub use models::list_models;
pub use token::exchange_token;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{Config, Secret};

    /// Configuration pointing the authority at a local stub server.
    pub(crate) fn config_for(url: &str) -> Config {
        Config {
            credential: Secret::new("ghu_test"),
            authority_url: url.to_owned(),
            editor_version: "vscode/1.97.2".to_owned(),
            user_agent: "VSCode/1.97.2".to_owned(),
        }
    }
}
