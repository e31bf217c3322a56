//! CLI argument definitions for the output side.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// What to do when appending to an output file fails.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteErrorPolicy {
    /// Stop the simulator with an error
    #[default]
    Abort,
    /// Log a warning and keep going
    Skip,
}

/// Output arguments shared by the continuous and burst modes.
#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Directory the log files are written to (created if missing)
    #[arg(long, short = 'o', env = "NGINX_LOG_SIM_OUTPUT_DIR", default_value = "logs")]
    pub output_dir: PathBuf,

    /// Disable the structured (JSON) access log
    #[arg(long)]
    pub no_json: bool,

    /// Also write the legacy combined format access log
    #[arg(long)]
    pub legacy: bool,

    /// Profile YAML file overriding sampling probabilities and file names
    #[arg(long, short = 'p')]
    pub profile: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// What to do when a write fails
    #[arg(long, value_enum, default_value_t = WriteErrorPolicy::Abort)]
    pub on_write_error: WriteErrorPolicy,
}
