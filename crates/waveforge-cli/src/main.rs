//! Waveforge CLI - render procedural sound effects from parameter files.
//!
//! This binary provides commands for validating parameter documents and
//! rendering them to WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use waveforge_cli::commands;

/// Waveforge - deterministic sound-effect synthesizer
#[derive(Parser)]
#[command(name = "waveforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a parameter file to a WAV file
    Render {
        /// Path to the parameter file (JSON)
        #[arg(short, long)]
        params: String,

        /// Output WAV path (default: parameter file with .wav extension)
        #[arg(short, long)]
        out: Option<String>,

        /// Override the noise seed (default: the fixed preview seed)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a parameter file without rendering
    Validate {
        /// Path to the parameter file (JSON)
        #[arg(short, long)]
        params: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render in memory and print statistics without writing output
    Info {
        /// Path to the parameter file (JSON)
        #[arg(short, long)]
        params: String,

        /// Override the noise seed (default: the fixed preview seed)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            params,
            out,
            seed,
            json,
        } => commands::render::run(&params, out.as_deref(), seed, json),
        Commands::Validate { params, json } => commands::validate::run(&params, json),
        Commands::Info { params, seed, json } => commands::info::run(&params, seed, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from(["waveforge", "render", "--params", "zap.json"]).unwrap();
        match cli.command {
            Commands::Render {
                params,
                out,
                seed,
                json,
            } => {
                assert_eq!(params, "zap.json");
                assert!(out.is_none());
                assert!(seed.is_none());
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_render_with_options() {
        let cli = Cli::try_parse_from([
            "waveforge",
            "render",
            "--params",
            "zap.json",
            "--out",
            "zap.wav",
            "--seed",
            "42",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                params,
                out,
                seed,
                json,
            } => {
                assert_eq!(params, "zap.json");
                assert_eq!(out.as_deref(), Some("zap.wav"));
                assert_eq!(seed, Some(42));
                assert!(json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_requires_params_for_render() {
        let err = Cli::try_parse_from(["waveforge", "render"]).err().unwrap();
        assert!(err.to_string().contains("--params"));
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from(["waveforge", "validate", "--params", "zap.json"]).unwrap();
        match cli.command {
            Commands::Validate { params, json } => {
                assert_eq!(params, "zap.json");
                assert!(!json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_validate_with_json() {
        let cli =
            Cli::try_parse_from(["waveforge", "validate", "--params", "zap.json", "--json"])
                .unwrap();
        match cli.command {
            Commands::Validate { params, json } => {
                assert_eq!(params, "zap.json");
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_info() {
        let cli = Cli::try_parse_from(["waveforge", "info", "--params", "zap.json", "--seed", "7"])
            .unwrap();
        match cli.command {
            Commands::Info { params, seed, json } => {
                assert_eq!(params, "zap.json");
                assert_eq!(seed, Some(7));
                assert!(!json);
            }
            _ => panic!("expected info command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["waveforge", "transmogrify"]).is_err());
    }
}
