/// `fetch` command: exchange the credential, list models, save and format the file.
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::cli::OutputCtx;
use crate::cli::args::FetchArgs;
use crate::cli::output::write_fetch;
use crate::config::Config;
use crate::copilot::{CopilotClient, exchange_token, list_models};
use crate::errors::AppError;
use crate::persist::{find_on_path, run_formatter, write_records};
use crate::types::{FetchOutput, ModelRowOutput};

/// Run `copilot-models fetch`.
///
/// Steps run strictly in order and the first failure aborts the run: the file
/// is only written once both requests succeeded, and the formatter only runs
/// after the file is written.
///
/// # Errors
///
/// Returns `AppError` on HTTP failure, malformed responses, I/O failure, or a
/// failing formatter (unless `--allow-format-failure`).
pub fn run(args: &FetchArgs, config: &Config, ctx: &OutputCtx) -> Result<(), AppError> {
    let client = CopilotClient::new(config, Duration::from_secs(args.http.timeout))?;

    let _t_exchange = ctx.timer("token_exchange");
    let session = exchange_token(&client, &config.credential)?;
    drop(_t_exchange);
    info!(token = %session.token.redacted(), "Copilot token obtained");
    info!(endpoints = ?session.endpoints, "endpoints");

    let _t_list = ctx.timer("list_models");
    let models = list_models(&client, &session)?;
    drop(_t_list);
    info!(count = models.len(), "models list fetched");

    let _t_write = ctx.timer("write_records");
    write_records(&args.out, &models)?;
    drop(_t_write);
    info!(path = %args.out.display(), "saved");

    let _t_format = ctx.timer("formatter");
    let formatter = format_output(args, &args.out)?;
    drop(_t_format);

    let summary = FetchOutput {
        ok: true,
        path: args.out.display().to_string(),
        count: models.len(),
        formatted: formatter.is_some(),
        formatter: formatter.map(|p| p.display().to_string()),
        models: models.iter().map(ModelRowOutput::from_record).collect(),
    };
    write_fetch(&summary, ctx);
    Ok(())
}

/// Run the formatter on `path` if enabled and discoverable.
///
/// Returns the formatter path when it ran successfully.
fn format_output(args: &FetchArgs, path: &Path) -> Result<Option<PathBuf>, AppError> {
    if args.no_format {
        info!("formatting disabled, skipping");
        return Ok(None);
    }

    let Some(formatter) = find_on_path(&args.formatter) else {
        info!(formatter = %args.formatter, "formatter not found, skipping formatting");
        return Ok(None);
    };

    info!(formatter = %formatter.display(), "running formatter");
    match run_formatter(&formatter, path) {
        Ok(()) => {
            info!("formatting complete");
            Ok(Some(formatter))
        }
        Err(err) if args.allow_format_failure => {
            warn!(error = %err, "formatter failed, keeping unformatted file");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
