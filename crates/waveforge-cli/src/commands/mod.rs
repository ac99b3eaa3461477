//! CLI command implementations.
//!
//! Each command exposes `run(...) -> anyhow::Result<ExitCode>`; domain
//! failures (bad parameter files) report through the exit code after
//! printing diagnostics, while unexpected failures (I/O) bubble up as
//! errors for the binary to print.

pub mod info;
pub mod render;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use waveforge_spec::SoundParams;

/// Loads and parses a parameter file, without validating domains.
fn load_params(path: &str) -> anyhow::Result<SoundParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read parameter file '{path}'"))?;
    SoundParams::from_json(&text)
        .with_context(|| format!("failed to parse parameter file '{path}'"))
}

/// Derives the default WAV output path from the parameter file path.
///
/// `sounds/zap.json` becomes `sounds/zap.wav`; a missing extension gets
/// `.wav` appended.
fn default_out_path(params_path: &str) -> PathBuf {
    Path::new(params_path).with_extension("wav")
}

/// Prints a domain failure in the requested output mode.
fn report_failure(message: &str, json: bool) {
    use colored::Colorize;

    if json {
        println!("{}", serde_json::json!({ "ok": false, "error": message }));
    } else {
        eprintln!("{}: {message}", "failed".red().bold());
    }
}
