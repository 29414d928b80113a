// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "piano-stage")]
#[command(about = "Headless piano stage animation runner", long_about = None)]
pub struct Cli {
    /// Animation config (JSON). Missing fields use the reference values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Input script (JSON) with timed button holds
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Number of frames to simulate. Defaults to the script length plus one second
    #[arg(long)]
    pub frames: Option<u64>,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Write the JSON report here instead of stdout
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Disable periodic progress logging
    #[arg(long = "quiet", default_value = "false")]
    pub quiet: bool,
}
