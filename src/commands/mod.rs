/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod fetch;
pub mod token;

use crate::cli::OutputCtx;
use crate::cli::args::{Command, FetchArgs};
use crate::config::Config;
use crate::errors::AppError;

/// Load configuration, then dispatch a parsed `Command` to its handler.
///
/// No subcommand runs `fetch` with its defaults.
///
/// # Errors
///
/// Returns `AppError` on any command failure. Configuration errors are raised
/// before any network call.
pub fn dispatch(command: Option<&Command>, ctx: &OutputCtx) -> Result<(), AppError> {
    let config = Config::load()?;
    match command {
        None => fetch::run(&FetchArgs::default(), &config, ctx),
        Some(Command::Fetch(args)) => fetch::run(args, &config, ctx),
        Some(Command::Token(args)) => token::run(args, &config, ctx),
    }
}
