//! Command-line interface for nginx-log-sim
//!
//! # Usage Examples
//!
//! ```bash
//! # Continuous mode, JSON access log plus error logs in ./logs
//! nginx-log-sim --interval 0.5
//!
//! # Stop by itself after five minutes
//! nginx-log-sim --duration 5m
//!
//! # Legacy combined format only, into /var/log/nginx-sim
//! nginx-log-sim --no-json --legacy --output-dir /var/log/nginx-sim
//!
//! # Reproducible burst of 100 entries
//! nginx-log-sim --burst 100 --seed 42
//! ```

use clap::Parser;
use log_populate::OutputArgs;
use nginx_log_sim::config::{parse_duration, parse_seconds};
use nginx_log_sim::simulate::{self, Mode};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "nginx-log-sim")]
#[command(about = "Generate realistic nginx access and error logs for log pipeline testing")]
#[command(long_about = None)]
struct Cli {
    /// How long to run, e.g. "300", "30m", "1h" (default: run forever)
    #[arg(long, short = 'd', value_parser = parse_duration)]
    duration: Option<Duration>,

    /// Interval between log entries in seconds
    #[arg(long, short = 'i', default_value = "1.0", value_parser = parse_seconds)]
    interval: Duration,

    /// Generate a burst of N log entries and exit
    #[arg(long, short = 'b', value_parser = clap::value_parser!(u64).range(1..))]
    burst: Option<u64>,

    /// Seconds between entries in burst mode
    #[arg(long, short = 'r', default_value = "0.01", value_parser = parse_seconds)]
    burst_rate: Duration,

    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    fn mode(&self) -> Mode {
        match self.burst {
            Some(count) => Mode::Burst {
                count,
                interval: self.burst_rate,
            },
            None => Mode::Continuous {
                interval: self.interval,
                duration: self.duration,
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mode = cli.mode();

    let mut populator = simulate::prepare(&cli.output)?;
    tracing::info!("Output directory: {}", populator.targets().dir().display());
    if let Some(seed) = cli.output.seed {
        tracing::info!("Using seed {seed}");
    }

    simulate::print_banner(populator.targets(), &mode);
    let report = simulate::run(&mut populator, mode, simulate::shutdown_signal()).await?;
    simulate::print_summary(&report, &mode);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_are_continuous() {
        let cli = Cli::parse_from(["nginx-log-sim"]);

        assert_eq!(
            cli.mode(),
            Mode::Continuous {
                interval: Duration::from_secs(1),
                duration: None,
            }
        );
        assert_eq!(cli.output.output_dir, std::path::PathBuf::from("logs"));
        assert!(!cli.output.no_json);
        assert!(!cli.output.legacy);
    }

    #[test]
    fn test_burst_flags() {
        let cli = Cli::parse_from(["nginx-log-sim", "-b", "100", "-r", "0"]);

        assert_eq!(
            cli.mode(),
            Mode::Burst {
                count: 100,
                interval: Duration::ZERO,
            }
        );
    }

    #[test]
    fn test_continuous_flags() {
        let cli = Cli::parse_from([
            "nginx-log-sim",
            "--duration",
            "5m",
            "--interval",
            "0.25",
            "--no-json",
            "--legacy",
            "--seed",
            "7",
            "--on-write-error",
            "skip",
        ]);

        assert_eq!(
            cli.mode(),
            Mode::Continuous {
                interval: Duration::from_millis(250),
                duration: Some(Duration::from_secs(300)),
            }
        );
        assert!(cli.output.no_json);
        assert!(cli.output.legacy);
        assert_eq!(cli.output.seed, Some(7));
        assert_eq!(cli.output.on_write_error, log_populate::WriteErrorPolicy::Skip);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["nginx-log-sim", "-b", "0"]).is_err());
        assert!(Cli::try_parse_from(["nginx-log-sim", "-i", "-1"]).is_err());
        assert!(Cli::try_parse_from(["nginx-log-sim", "-d", "soon"]).is_err());
    }
}
