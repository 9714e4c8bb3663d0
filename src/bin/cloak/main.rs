//! cloak - render or preview a cloaked voice mix
//!
//! Run with: cargo run -- render --voice talk.mp4 --noise rain.mp3
//! Set RUST_LOG=debug for per-stage output.

mod args;
mod preview;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use args::{Cli, Command, MixArgs};
use cloak_dsp::{
    io::{MediaSource, OutputSink, WavSink},
    CloakConfig, CloakPipeline, CloakRequest, MixPlan,
};

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CloakConfig::load(path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => CloakConfig::default(),
    };

    match cli.command {
        Command::Render { mix, output } => {
            let request = build_request(&mix, &mut config)?;
            let output = output.unwrap_or_else(|| PathBuf::from(request.suggested_filename()));

            let pipeline = CloakPipeline::symphonia(config);
            let result = pipeline.process(request)?;

            WavSink::new(&output)
                .consume(result)
                .wrap_err_with(|| format!("failed to write {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
        Command::Preview { mix } => {
            let request = build_request(&mix, &mut config)?;
            let quality = config.resample_quality;

            let pipeline = CloakPipeline::symphonia(config);
            let result = pipeline.process(request)?;
            println!("Playing...");

            preview::play(result, quality)?;
        }
    }

    Ok(())
}

/// Fold CLI overrides into the config and assemble the request.
fn build_request(mix: &MixArgs, config: &mut CloakConfig) -> EyreResult<CloakRequest> {
    if let Some(rate) = mix.sample_rate {
        config.sample_rate = rate.max(1);
    }

    let plan = MixPlan::from_form(
        mix.voice_volume.as_deref(),
        mix.noise_left_volume.as_deref(),
        mix.noise_right_volume.as_deref(),
        &config.plan,
    )?;

    log::debug!(
        "mix: voice {}%, noise L {}%, noise R {}% @ {} Hz",
        plan.voice().percent(),
        plan.noise_left().percent(),
        plan.noise_right().percent(),
        config.sample_rate
    );

    Ok(CloakRequest::new(mix.voice.clone().map(MediaSource::from_path))
        .noise(mix.noise.clone().map(MediaSource::from_path))
        .plan(plan))
}
