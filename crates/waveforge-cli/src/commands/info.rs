//! `waveforge info` - render in memory and report statistics.

use std::process::ExitCode;

use colored::Colorize;
use waveforge_synth::{render, render_with_seed, WavResult};

use super::{load_params, report_failure};

pub fn run(params_path: &str, seed: Option<u32>, json: bool) -> anyhow::Result<ExitCode> {
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

    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "waveform": params.waveform.as_str(),
                "sampleRate": rendered.sample_rate,
                "numSamples": rendered.num_samples(),
                "durationSeconds": rendered.duration_seconds(),
                "peak": rendered.peak(),
                "renderTimeMs": rendered.render_time_ms,
                "pcmHash": wav.pcm_hash,
            })
        );
    } else {
        println!("{}", params_path.bold());
        println!("  waveform:  {}", params.waveform);
        println!("  rate:      {} Hz", rendered.sample_rate);
        println!("  samples:   {}", rendered.num_samples());
        println!("  duration:  {:.3} s", rendered.duration_seconds());
        println!("  peak:      {:.3}", rendered.peak());
        println!("  rendered:  {} ms", rendered.render_time_ms);
        println!("  pcm hash:  {}", wav.pcm_hash.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}
