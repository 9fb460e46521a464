#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! copilot-models — exchange a GitHub token for a Copilot session and save the models list.

mod cli;
mod commands;
mod config;
mod copilot;
mod errors;
mod logging;
mod persist;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(cli.command.as_ref(), &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_app_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
