/// Output formatting: JSON, table and id modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, FetchOutput, TokenOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print step timing to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Fetch summary ---

/// Write the summary of a completed fetch to stdout.
pub fn write_fetch(summary: &FetchOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Compact => print_compact_json(summary),
        OutputFormat::Id => {
            for model in &summary.models {
                if let Some(id) = &model.id {
                    println!("{id}");
                }
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_fetch_table(summary, ctx),
    }
}

fn write_fetch_table(summary: &FetchOutput, ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["ID", "NAME", "VENDOR"]);
    }
    for model in &summary.models {
        table.add_row([
            model.id.as_deref().unwrap_or(""),
            model.name.as_deref().unwrap_or(""),
            model.vendor.as_deref().unwrap_or(""),
        ]);
    }
    println!("{table}");

    let formatted = if summary.formatted { ", formatted" } else { "" };
    println!(
        "Saved {} models to {}{formatted}",
        summary.count, summary.path
    );
}

// --- Token ---

/// Write the redacted session token and its endpoints to stdout.
pub fn write_token(token: &TokenOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(token),
        OutputFormat::Compact => print_compact_json(token),
        OutputFormat::Id => println!("{}", token.token),
        OutputFormat::Table | OutputFormat::Auto => {
            println!("Copilot token obtained: {}", token.token);
            if let Some(expires_at) = token.expires_at {
                println!("Expires at: {expires_at}");
            }
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["ROLE", "URL"]);
            }
            for (role, url) in &token.endpoints {
                table.add_row([role.as_str(), url.as_str()]);
            }
            println!("{table}");
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
