//! Reads HTML bytes from stdin and prints the reading view as JSON.
//!
//! Usage: `extract_stdin [--base-url URL] [--config options.json] < page.html`
//!
//! On failure prints `{"error": "..."}` and exits with status 1. Logging goes
//! to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use rs_readermode::{extract_bytes_with_options, Options};
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Serialize)]
struct ErrorOutput {
    error: String,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

fn options_from_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut base_url = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base-url" => {
                base_url = Some(args.next().ok_or("--base-url requires a value")?);
            }
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                let json = fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
                options = Options::from_json(&json).map_err(|e| e.to_string())?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    if base_url.is_some() {
        options.base_url = base_url;
    }
    Ok(options)
}

fn run() -> Result<String, String> {
    let options = options_from_args(env::args().skip(1))?;

    let mut html = Vec::new();
    io::stdin()
        .read_to_end(&mut html)
        .map_err(|e| format!("failed to read stdin: {e}"))?;

    let result = extract_bytes_with_options(&html, &options).map_err(|e| e.to_string())?;
    serde_json::to_string(&result.to_view()).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(%error, "extraction failed");
            let json = serde_json::to_string(&ErrorOutput { error }).unwrap_or_default();
            println!("{json}");
            ExitCode::FAILURE
        }
    }
}
