//! `waveforge validate` - check a parameter file without rendering.

use std::process::ExitCode;

use colored::Colorize;

use super::{load_params, report_failure};

pub fn run(params_path: &str, json: bool) -> anyhow::Result<ExitCode> {
    let params = match load_params(params_path) {
        Ok(params) => params,
        Err(e) => {
            report_failure(&format!("{e:#}"), json);
            return Ok(ExitCode::from(1));
        }
    };

    if let Err(e) = params.validate() {
        report_failure(&e.to_string(), json);
        return Ok(ExitCode::from(1));
    }

    if json {
        println!(
            "{}",
            serde_json::json!({ "ok": true, "waveform": params.waveform.as_str() })
        );
    } else {
        println!(
            "{} {} ({} waveform)",
            "valid".green().bold(),
            params_path,
            params.waveform
        );
    }

    Ok(ExitCode::SUCCESS)
}
