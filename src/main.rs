use anyhow::{bail, Context, Result};
use clap::Parser;

use piano_stage::animation::AnimationState;
use piano_stage::cli::Cli;
use piano_stage::config::AnimationConfig;
use piano_stage::core::FixedStepFrames;
use piano_stage::input::KeyBindings;
use piano_stage::script::{InputScript, ScriptedController};
use piano_stage::simulation::Simulation;

/// Extra simulated time after the script ends, so released keys settle
const SETTLE_SECONDS: f32 = 1.0;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !(cli.fps > 0.0) {
        bail!("--fps must be positive, got {}", cli.fps);
    }

    let config = match &cli.config {
        Some(path) => AnimationConfig::load(path)?,
        None => AnimationConfig::default(),
    };
    if config.lamp_speed / cli.fps >= 360.0 {
        bail!(
            "--fps {} is too low: lamps would turn {:.0}° per frame",
            cli.fps,
            config.lamp_speed / cli.fps
        );
    }

    let script = match &cli.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::default(),
    };

    let frames = cli
        .frames
        .unwrap_or_else(|| ((script.end_time() + SETTLE_SECONDS) * cli.fps).ceil() as u64);

    let state = AnimationState::from_config(&config).context("Invalid animation config")?;
    let frames = FixedStepFrames::new(cli.fps, frames);
    log::info!(
        "Simulating {:.2}s at {} fps with {} lamps",
        frames.duration(),
        cli.fps,
        state.lamp_count()
    );

    let mut simulation = Simulation::new(state, KeyBindings::default()).quiet(cli.quiet);
    let mut controller = ScriptedController::new(script);
    let report = simulation.run(frames, &mut controller)?;

    let json = serde_json::to_string_pretty(&report)?;
    match &cli.report {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
