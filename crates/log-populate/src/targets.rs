//! Output file layout and line appends.

use crate::error::PopulatorError;
use log_core::OutputFiles;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolved paths of the log files inside the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTargets {
    dir: PathBuf,
    /// Structured access log, `None` when disabled
    access_json: Option<PathBuf>,
    /// Legacy access log, `None` unless enabled
    access: Option<PathBuf>,
    error: PathBuf,
    error_json: PathBuf,
}

impl OutputTargets {
    /// Resolve the targets for `dir`.
    pub fn new<P: AsRef<Path>>(dir: P, files: &OutputFiles, structured: bool, legacy: bool) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self {
            access_json: structured.then(|| dir.join(&files.access_json)),
            access: legacy.then(|| dir.join(&files.access)),
            error: dir.join(&files.error),
            error_json: dir.join(files.error_json()),
            dir,
        }
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), PopulatorError> {
        if self.dir.is_dir() {
            debug!("Output directory {} already exists", self.dir.display());
            return Ok(());
        }

        fs::create_dir_all(&self.dir).map_err(|source| PopulatorError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        info!("Created directory: {}", self.dir.display());
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn access_json(&self) -> Option<&Path> {
        self.access_json.as_deref()
    }

    pub fn access(&self) -> Option<&Path> {
        self.access.as_deref()
    }

    pub fn error(&self) -> &Path {
        &self.error
    }

    pub fn error_json(&self) -> &Path {
        &self.error_json
    }
}

/// Append one line to `path` and flush it.
///
/// The file is opened and closed on every call so no handle outlives the
/// iteration that wrote it. Returns the number of bytes written.
pub fn append_line(path: &Path, line: &str) -> Result<u64, PopulatorError> {
    let write = || -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()
    };

    write().map_err(|source| PopulatorError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(line.len() as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let targets = OutputTargets::new("logs", &OutputFiles::default(), true, false);

        assert_eq!(targets.access_json(), Some(Path::new("logs/access.json.log")));
        assert_eq!(targets.access(), None);
        assert_eq!(targets.error(), Path::new("logs/error.log"));
        assert_eq!(targets.error_json(), Path::new("logs/error.json.log"));
    }

    #[test]
    fn test_legacy_only_layout() {
        let targets = OutputTargets::new("out", &OutputFiles::default(), false, true);

        assert_eq!(targets.access_json(), None);
        assert_eq!(targets.access(), Some(Path::new("out/access.log")));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("logs");
        let targets = OutputTargets::new(&dir, &OutputFiles::default(), true, false);

        targets.ensure_dir().unwrap();
        assert!(dir.is_dir());
        targets.ensure_dir().unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();

        let targets = OutputTargets::new(&blocker, &OutputFiles::default(), true, false);
        assert!(matches!(
            targets.ensure_dir(),
            Err(PopulatorError::CreateDir { .. })
        ));
    }

    #[test]
    fn test_append_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("error.log");

        assert_eq!(append_line(&path, "first").unwrap(), 6);
        append_line(&path, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_append_line_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone").join("error.log");

        let result = append_line(&path, "line");
        assert!(matches!(result, Err(PopulatorError::Write { .. })));
    }
}
