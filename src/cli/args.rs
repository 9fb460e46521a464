/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::copilot::client::DEFAULT_TIMEOUT_SECS;
use crate::persist::formatter::DEFAULT_FORMATTER;
use crate::persist::write::DEFAULT_OUTPUT;

/// copilot-models: fetch the Copilot models list and save it as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "copilot-models",
    about = "Exchange GITHUB_TOKEN for a Copilot session and save the models list",
    version
)]
pub struct Cli {
    /// Output format for the run summary. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Debug-level logs and per-step timing on stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Defaults to `fetch` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
    /// Model ids only, one per line.
    Id,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Exchange the credential, list models, write them to a file and format it.
    Fetch(FetchArgs),
    /// Exchange the credential and show the (redacted) session token and endpoints.
    Token(TokenArgs),
}

/// Arguments for `copilot-models fetch`.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// File to write the models list to.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Formatter binary to run as `<FORMATTER> --write <PATH>` when found on PATH.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FORMATTER)]
    pub formatter: String,

    /// Never run the formatter.
    #[arg(long)]
    pub no_format: bool,

    /// Log a warning instead of failing when the formatter exits unsuccessfully.
    #[arg(long)]
    pub allow_format_failure: bool,

    #[command(flatten)]
    pub http: HttpArgs,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUTPUT),
            formatter: DEFAULT_FORMATTER.to_owned(),
            no_format: false,
            allow_format_failure: false,
            http: HttpArgs::default(),
        }
    }
}

/// Arguments for `copilot-models token`.
#[derive(Debug, Args)]
pub struct TokenArgs {
    #[command(flatten)]
    pub http: HttpArgs,
}

/// HTTP client settings shared by subcommands.
#[derive(Debug, Clone, Args)]
pub struct HttpArgs {
    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl Default for HttpArgs {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_fetch_defaults() {
        let cli = Cli::parse_from(["copilot-models"]);
        assert!(cli.command.is_none());
        let args = FetchArgs::default();
        assert_eq!(args.out, PathBuf::from("models.json"));
        assert_eq!(args.formatter, "prettier");
        assert_eq!(args.http.timeout, 30);
    }

    #[test]
    fn test_fetch_flags() {
        let cli = Cli::parse_from([
            "copilot-models",
            "--json",
            "fetch",
            "--out",
            "out/m.json",
            "--no-format",
            "--timeout",
            "5",
        ]);
        assert!(cli.json);
        match cli.command {
            Some(Command::Fetch(args)) => {
                assert_eq!(args.out, PathBuf::from("out/m.json"));
                assert!(args.no_format);
                assert!(!args.allow_format_failure);
                assert_eq!(args.http.timeout, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
