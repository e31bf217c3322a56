//! Per-iteration emission of generated records.

use crate::args::WriteErrorPolicy;
use crate::error::PopulatorError;
use crate::targets::{append_line, OutputTargets};
use log_generator::LogGenerator;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Counters accumulated across iterations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulateMetrics {
    /// Number of iterations run.
    pub entries: u64,
    /// Structured access lines written.
    pub access_json_written: u64,
    /// Legacy access lines written.
    pub access_written: u64,
    /// Iterations that also emitted an error entry.
    pub errors_emitted: u64,
    /// Appends that failed under [`WriteErrorPolicy::Skip`].
    pub write_failures: u64,
    /// Bytes appended across all files.
    pub bytes_written: u64,
}

impl PopulateMetrics {
    /// Calculate entries per second over `elapsed`.
    pub fn entries_per_second(&self, elapsed: Duration) -> f64 {
        if elapsed.as_secs_f64() > 0.0 {
            self.entries as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// What a single iteration emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emission {
    /// At least one access line was written.
    pub access: bool,
    /// An error entry (flat and structured) was written.
    pub error: bool,
}

/// Appends generated records to the output targets.
pub struct LogPopulator {
    generator: LogGenerator,
    targets: OutputTargets,
    on_write_error: WriteErrorPolicy,
    metrics: PopulateMetrics,
}

impl LogPopulator {
    pub fn new(
        generator: LogGenerator,
        targets: OutputTargets,
        on_write_error: WriteErrorPolicy,
    ) -> Self {
        Self {
            generator,
            targets,
            on_write_error,
            metrics: PopulateMetrics::default(),
        }
    }

    pub fn targets(&self) -> &OutputTargets {
        &self.targets
    }

    pub fn metrics(&self) -> &PopulateMetrics {
        &self.metrics
    }

    /// Run one iteration.
    ///
    /// Writes a structured access record and a legacy access line for the
    /// enabled targets, then rolls the error gate and, when it lands, writes
    /// one flat and one structured error entry. Every line is flushed before
    /// this returns.
    pub fn emit_once(&mut self) -> Result<Emission, PopulatorError> {
        let mut emission = Emission::default();

        if let Some(path) = self.targets.access_json().map(Path::to_path_buf) {
            let line = self.generator.access_record().to_json()?;
            if self.append(&path, &line)? {
                self.metrics.access_json_written += 1;
                emission.access = true;
            }
        }

        if let Some(path) = self.targets.access().map(Path::to_path_buf) {
            let line = self.generator.legacy_access_line().to_string();
            if self.append(&path, &line)? {
                self.metrics.access_written += 1;
                emission.access = true;
            }
        }

        self.metrics.entries += 1;

        if self.generator.should_emit_error() {
            let flat = self.generator.error_record().to_line();
            let structured = self.generator.error_record().to_json()?;

            let path = self.targets.error().to_path_buf();
            let wrote_flat = self.append(&path, &flat)?;
            let path = self.targets.error_json().to_path_buf();
            let wrote_structured = self.append(&path, &structured)?;

            if wrote_flat || wrote_structured {
                self.metrics.errors_emitted += 1;
                emission.error = true;
            }
        }

        if self.metrics.entries % 10_000 == 0 {
            debug!("Emitted {} entries", self.metrics.entries);
        }

        Ok(emission)
    }

    /// Append a line, applying the write error policy.
    ///
    /// Returns `Ok(false)` when the write failed and the policy says to skip.
    fn append(&mut self, path: &Path, line: &str) -> Result<bool, PopulatorError> {
        match append_line(path, line) {
            Ok(bytes) => {
                self.metrics.bytes_written += bytes;
                Ok(true)
            }
            Err(e) => match self.on_write_error {
                WriteErrorPolicy::Abort => Err(e),
                WriteErrorPolicy::Skip => {
                    warn!("{e}; skipping line");
                    self.metrics.write_failures += 1;
                    Ok(false)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_core::{Coverage, OutputFiles, ACCESS_FIELDS};
    use std::fs;
    use tempfile::TempDir;

    fn populator(dir: &Path, coverage: Coverage, legacy: bool, policy: WriteErrorPolicy) -> LogPopulator {
        let targets = OutputTargets::new(dir, &OutputFiles::default(), true, legacy);
        targets.ensure_dir().unwrap();
        LogPopulator::new(LogGenerator::new(coverage, 42), targets, policy)
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_metrics_rate() {
        let metrics = PopulateMetrics {
            entries: 1000,
            ..Default::default()
        };

        assert_eq!(metrics.entries_per_second(Duration::from_secs(10)), 100.0);
        assert_eq!(metrics.entries_per_second(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_emit_structured_only() {
        let temp_dir = TempDir::new().unwrap();
        let coverage = Coverage {
            error_rate: 0.0,
            ..Default::default()
        };
        let mut populator = populator(temp_dir.path(), coverage, false, WriteErrorPolicy::Abort);

        for _ in 0..10 {
            let emission = populator.emit_once().unwrap();
            assert!(emission.access);
            assert!(!emission.error);
        }

        let lines = read_lines(&temp_dir.path().join("access.json.log"));
        assert_eq!(lines.len(), 10);
        for line in lines {
            let json: serde_json::Value = serde_json::from_str(&line).unwrap();
            assert_eq!(json.as_object().unwrap().len(), ACCESS_FIELDS.len());
        }
        assert!(!temp_dir.path().join("access.log").exists());
        assert!(!temp_dir.path().join("error.log").exists());
        assert_eq!(populator.metrics().entries, 10);
        assert_eq!(populator.metrics().access_json_written, 10);
    }

    #[test]
    fn test_emit_legacy_and_errors() {
        let temp_dir = TempDir::new().unwrap();
        let coverage = Coverage {
            error_rate: 1.0,
            ..Default::default()
        };
        let mut populator = populator(temp_dir.path(), coverage, true, WriteErrorPolicy::Abort);

        for _ in 0..5 {
            let emission = populator.emit_once().unwrap();
            assert!(emission.access && emission.error);
        }

        let legacy = read_lines(&temp_dir.path().join("access.log"));
        assert_eq!(legacy.len(), 5);
        assert!(legacy.iter().all(|l| l.contains(" HTTP/1.1\" ")));

        let errors = read_lines(&temp_dir.path().join("error.log"));
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|l| l.contains("] ") && l.contains('#')));

        let error_json = read_lines(&temp_dir.path().join("error.json.log"));
        assert_eq!(error_json.len(), 5);
        for line in error_json {
            let json: serde_json::Value = serde_json::from_str(&line).unwrap();
            assert!(json.get("cid").is_some());
        }

        assert_eq!(populator.metrics().errors_emitted, 5);
        assert!(populator.metrics().bytes_written > 0);
    }

    #[test]
    fn test_abort_on_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("logs");
        let mut populator = populator(&dir, Coverage::default(), false, WriteErrorPolicy::Abort);

        fs::remove_dir_all(&dir).unwrap();
        let result = populator.emit_once();
        assert!(matches!(result, Err(PopulatorError::Write { .. })));
    }

    #[test]
    fn test_skip_on_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("logs");
        let coverage = Coverage {
            error_rate: 0.0,
            ..Default::default()
        };
        let mut populator = populator(&dir, coverage, false, WriteErrorPolicy::Skip);

        fs::remove_dir_all(&dir).unwrap();
        let emission = populator.emit_once().unwrap();

        assert!(!emission.access);
        assert_eq!(populator.metrics().entries, 1);
        assert_eq!(populator.metrics().write_failures, 1);
        assert_eq!(populator.metrics().access_json_written, 0);
    }
}
