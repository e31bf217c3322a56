//! Core types for the nginx log simulator.
//!
//! This crate provides the foundational types shared by the generator and
//! the populator:
//!
//! - [`AccessRecord`] - Enhanced access log entry, one JSON object per line
//! - [`LegacyAccessLine`] - Combined log format access line
//! - [`ErrorRecord`] - Error log entry with flat and structured renderings
//! - [`Profile`] - Sampling probabilities and output file names loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! log-core (this crate)
//!    │
//!    ├─── log-generator  (builds records from reference tables)
//!    │
//!    └─── log-populate   (serializes records and appends them to files)
//! ```
//!
//! # Example
//!
//! ```rust
//! use log_core::Profile;
//!
//! let profile = Profile::from_yaml(r#"
//! coverage:
//!   error_rate: 0.5
//! "#).unwrap();
//!
//! assert_eq!(profile.coverage.error_rate, 0.5);
//! assert_eq!(profile.files.error_json(), "error.json.log");
//! ```

pub mod profile;
pub mod records;

// Re-exports for convenience
pub use profile::{Coverage, OutputFiles, Profile, ProfileError};
pub use records::{
    AccessRecord, ErrorLevel, ErrorRecord, LegacyAccessLine, ACCESS_FIELDS, ERROR_FIELDS,
};
