//! The emission loop.
//!
//! One iteration appends a batch of records through the [`LogPopulator`],
//! prints a progress line, then sleeps. Continuous mode stops after an
//! optional duration, burst mode after a fixed count. Either stops early when
//! the shutdown future resolves.

use anyhow::Context;
use log_core::Profile;
use log_generator::LogGenerator;
use log_populate::{
    Emission, LogPopulator, OutputArgs, OutputTargets, PopulateMetrics, PopulatorError,
};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

/// How long and how fast to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One iteration every `interval` until `duration` has elapsed, or
    /// forever when no duration is set.
    Continuous {
        interval: Duration,
        duration: Option<Duration>,
    },
    /// Exactly `count` iterations, `interval` apart.
    Burst { count: u64, interval: Duration },
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    /// Iterations completed.
    pub entries: u64,
    /// Iterations that also emitted an error entry.
    pub errors: u64,
    pub elapsed: Duration,
    /// Whether the run was cut short by the shutdown signal.
    pub interrupted: bool,
    pub metrics: PopulateMetrics,
}

/// Load the profile, resolve and create the output directory, and build the
/// populator described by the command-line arguments.
pub fn prepare(args: &OutputArgs) -> anyhow::Result<LogPopulator> {
    let profile = match &args.profile {
        Some(path) => Profile::from_file(path)
            .with_context(|| format!("Failed to load profile from {path:?}"))?,
        None => Profile::default(),
    };

    if args.no_json && !args.legacy {
        warn!("--no-json without --legacy disables every access log; only error entries will be written");
    }

    let targets = OutputTargets::new(&args.output_dir, &profile.files, !args.no_json, args.legacy);
    targets.ensure_dir()?;

    let generator = LogGenerator::with_seed(profile.coverage, args.seed);
    Ok(LogPopulator::new(generator, targets, args.on_write_error))
}

/// Print where output goes and how the run is paced.
pub fn print_banner(targets: &OutputTargets, mode: &Mode) {
    match mode {
        Mode::Continuous { interval, duration } => {
            println!("Starting nginx log simulator...");
            if let Some(path) = targets.access_json() {
                println!("Enhanced JSON logs: {}", path.display());
            }
            if let Some(path) = targets.access() {
                println!("Legacy access logs: {}", path.display());
            }
            println!("Error logs: {}", targets.error().display());
            println!("Interval: {}s", interval.as_secs_f64());
            match duration {
                Some(duration) => println!("Duration: {}s", duration.as_secs_f64()),
                None => println!("Duration: ∞"),
            }
            println!("Press Ctrl+C to stop\n");
        }
        Mode::Burst { count, .. } => {
            println!("Starting nginx log burst simulator...");
            println!("Generating {count} log entries...");
        }
    }
}

/// Progress line printed after each iteration.
pub fn progress_line(entry: u64, emission: Emission) -> String {
    match (emission.access, emission.error) {
        (true, true) => format!("[{entry}] Generated access + error log"),
        (true, false) => format!("[{entry}] Generated access log"),
        (false, true) => format!("[{entry}] Generated error log"),
        (false, false) => format!("[{entry}] Generated no log output"),
    }
}

/// Run the emission loop until the mode says stop or `shutdown` resolves.
///
/// `shutdown` is polled once before the first iteration, so a signal handler
/// it installs is live for the whole run, and then only while sleeping
/// between iterations. An iteration that has started always finishes writing.
pub async fn run<F>(
    populator: &mut LogPopulator,
    mode: Mode,
    shutdown: F,
) -> Result<SimulationReport, PopulatorError>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let interval = match mode {
        Mode::Continuous { interval, .. } | Mode::Burst { interval, .. } => interval,
    };

    info!("Simulation started: {:?}", mode);
    let start = Instant::now();
    let mut entries = 0u64;
    let mut errors = 0u64;
    let mut interrupted = false;

    tokio::select! {
        biased;
        _ = &mut shutdown => interrupted = true,
        _ = std::future::ready(()) => {}
    }

    while !interrupted {
        if let Mode::Burst { count, .. } = mode {
            if entries >= count {
                break;
            }
        }

        let emission = populator.emit_once()?;
        entries += 1;

        if emission.error {
            errors += 1;
        }
        println!("{}", progress_line(entries, emission));

        match mode {
            Mode::Continuous {
                duration: Some(duration),
                ..
            } if start.elapsed() >= duration => break,
            Mode::Burst { count, .. } if entries >= count => break,
            _ => {}
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => interrupted = true,
            _ = sleep(interval) => {}
        }
    }

    let elapsed = start.elapsed();
    let metrics = populator.metrics().clone();
    info!(
        "Simulation finished: {} entries, {} errors, {} bytes in {:?}",
        entries, errors, metrics.bytes_written, elapsed
    );
    if metrics.write_failures > 0 {
        warn!("{} writes failed and were skipped", metrics.write_failures);
    }

    Ok(SimulationReport {
        entries,
        errors,
        elapsed,
        interrupted,
        metrics,
    })
}

/// Print the closing summary for a finished run.
pub fn print_summary(report: &SimulationReport, mode: &Mode) {
    let secs = report.elapsed.as_secs_f64();

    if report.interrupted {
        println!(
            "\n\nStopped by user. Generated {} log entries in {secs:.1}s",
            report.entries
        );
        return;
    }

    match mode {
        Mode::Continuous { .. } => {
            println!(
                "\nCompleted! Generated {} log entries in {secs:.1}s",
                report.entries
            );
        }
        Mode::Burst { .. } => {
            println!(
                "Completed! Generated {} log entries in {secs:.2}s",
                report.entries
            );
            println!(
                "Rate: {:.1} logs/second",
                report.metrics.entries_per_second(report.elapsed)
            );
        }
    }
}

/// Resolves on Ctrl+C.
///
/// If the handler cannot be installed the future never resolves, so the run
/// continues and can only end by its own limits.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received interrupt signal (Ctrl+C)"),
        Err(e) => {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_reflects_emission() {
        let line = |access, error| progress_line(3, Emission { access, error });

        assert_eq!(line(true, true), "[3] Generated access + error log");
        assert_eq!(line(true, false), "[3] Generated access log");
        assert_eq!(line(false, true), "[3] Generated error log");
        assert_eq!(line(false, false), "[3] Generated no log output");
    }
}
