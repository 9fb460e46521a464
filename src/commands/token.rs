/// `token` command: run the credential exchange only and show the session.
use std::time::Duration;

use crate::cli::OutputCtx;
use crate::cli::args::TokenArgs;
use crate::cli::output::write_token;
use crate::config::Config;
use crate::copilot::{CopilotClient, exchange_token};
use crate::errors::AppError;
use crate::types::TokenOutput;

/// Run `copilot-models token`.
///
/// # Errors
///
/// Returns `AppError` if the exchange fails.
pub fn run(args: &TokenArgs, config: &Config, ctx: &OutputCtx) -> Result<(), AppError> {
    let client = CopilotClient::new(config, Duration::from_secs(args.http.timeout))?;

    let _t_exchange = ctx.timer("token_exchange");
    let session = exchange_token(&client, &config.credential)?;
    drop(_t_exchange);

    let output = TokenOutput {
        token: session.token.redacted(),
        expires_at: session.expires_at,
        endpoints: session.endpoints,
    };
    write_token(&output, ctx);
    Ok(())
}
