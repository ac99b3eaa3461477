//! `waveforge render` - render a parameter file to a WAV file.

use std::process::ExitCode;

use colored::Colorize;
use waveforge_synth::{render, render_with_seed, WavResult};

use super::{default_out_path, load_params, report_failure};

pub fn run(
    params_path: &str,
    out: Option<&str>,
    seed: Option<u32>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let params = match load_params(params_path) {
        Ok(params) => params,
        Err(e) => {
            report_failure(&format!("{e:#}"), json);
            return Ok(ExitCode::from(1));
        }
    };

    let rendered = match seed {
        Some(seed) => render_with_seed(&params, seed),
        None => render(&params),
    };
    let rendered = match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            report_failure(&e.to_string(), json);
            return Ok(ExitCode::from(1));
        }
    };

    let wav = WavResult::from_rendered(&rendered);
    let out_path = out
        .map(Into::into)
        .unwrap_or_else(|| default_out_path(params_path));
    std::fs::write(&out_path, &wav.wav_data)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "out": out_path,
                "numSamples": wav.num_samples,
                "durationSeconds": wav.duration_seconds(),
                "peak": rendered.peak(),
                "renderTimeMs": rendered.render_time_ms,
                "pcmHash": wav.pcm_hash,
            })
        );
    } else {
        println!(
            "{} {} ({} samples, {:.3}s, peak {:.3}, {} ms)",
            "rendered".green().bold(),
            out_path.display(),
            wav.num_samples,
            wav.duration_seconds(),
            rendered.peak(),
            rendered.render_time_ms,
        );
        println!("  pcm hash: {}", wav.pcm_hash.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}
