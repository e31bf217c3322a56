//! Generation profile: sampling probabilities and output file names.
//!
//! A profile is normally the built-in default. It can be overridden from a
//! YAML document where every key is optional:
//!
//! ```yaml
//! coverage:
//!   tls: 0.5
//!   error_rate: 0.25
//! files:
//!   access_json: access.json.log
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Error reading profile file
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Probability outside of [0, 1]
    #[error("Probability '{field}' must be within [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    /// Two output targets resolve to the same file name
    #[error("Output files '{first}' and '{second}' both resolve to '{name}'")]
    FileCollision {
        first: &'static str,
        second: &'static str,
        name: String,
    },
}

// ============================================================================
// Coverage
// ============================================================================

/// Probabilities that decide which optional fields a record carries.
///
/// The defaults model partial instrumentation of a real gateway: not every
/// API call is attributed to a broker, not every connection is encrypted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coverage {
    /// Chance that `remote_user` is "admin" instead of "-"
    pub remote_user: f64,
    /// Chance that a gzip ratio is logged
    pub gzip: f64,
    /// Chance that the request came over TLS
    pub tls: f64,
    /// Chance, per upstream timing field, that it is logged
    pub upstream: f64,
    /// Chance that an API request carries any broker/developer/api key data
    pub correlation: f64,
    /// Chance that a correlated API request names its broker
    pub broker_id: f64,
    /// Chance that a correlated API request names its developer
    pub developer_id: f64,
    /// Chance that a correlated API request carries its API key
    pub api_key: f64,
    /// Chance that an API request is assigned a trace id
    pub request_id: f64,
    /// Chance that an API request is geolocated
    pub geo: f64,
    /// Chance that an error entry references a connection id
    pub connection_id: f64,
    /// Chance that an iteration also emits an error entry
    pub error_rate: f64,
}

impl Default for Coverage {
    fn default() -> Self {
        Self {
            remote_user: 0.1,
            gzip: 0.7,
            tls: 0.3,
            upstream: 0.7,
            correlation: 0.6,
            broker_id: 0.4,
            developer_id: 0.6,
            api_key: 0.5,
            request_id: 1.0,
            geo: 0.7,
            connection_id: 0.7,
            error_rate: 0.15,
        }
    }
}

impl Coverage {
    /// Check that every probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fields: [(&'static str, f64); 12] = [
            ("remote_user", self.remote_user),
            ("gzip", self.gzip),
            ("tls", self.tls),
            ("upstream", self.upstream),
            ("correlation", self.correlation),
            ("broker_id", self.broker_id),
            ("developer_id", self.developer_id),
            ("api_key", self.api_key),
            ("request_id", self.request_id),
            ("geo", self.geo),
            ("connection_id", self.connection_id),
            ("error_rate", self.error_rate),
        ];

        for (field, value) in fields {
            // NaN fails the range check as well
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::InvalidProbability { field, value });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Output Files
// ============================================================================

/// File names of the output targets, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    /// Structured access log
    pub access_json: String,
    /// Legacy combined format access log
    pub access: String,
    /// Flat error log
    pub error: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            access_json: "access.json.log".to_string(),
            access: "access.log".to_string(),
            error: "error.log".to_string(),
        }
    }
}

impl OutputFiles {
    /// Name of the structured error log.
    ///
    /// Derived from the structured access log name so the two always sit
    /// side by side (`access.json.log` -> `error.json.log`).
    pub fn error_json(&self) -> String {
        self.access_json.replace("access", "error")
    }

    /// Check that every target gets its own file.
    ///
    /// A structured access name without "access" in it derives an identical
    /// structured error name, which would interleave error records into the
    /// access stream.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let names: [(&'static str, String); 4] = [
            ("access_json", self.access_json.clone()),
            ("access", self.access.clone()),
            ("error", self.error.clone()),
            ("error_json", self.error_json()),
        ];

        for (i, (first, name)) in names.iter().enumerate() {
            for (second, other) in &names[i + 1..] {
                if name == other {
                    return Err(ProfileError::FileCollision {
                        first: *first,
                        second: *second,
                        name: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Complete generation profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub coverage: Coverage,
    pub files: OutputFiles,
}

impl Profile {
    /// Load a profile from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a profile from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let profile: Profile = serde_yaml::from_str(yaml)?;
        profile.coverage.validate()?;
        profile.files.validate()?;
        Ok(profile)
    }
}
