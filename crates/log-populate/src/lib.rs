//! Output side of the nginx log simulator.
//!
//! This crate resolves the output files, and appends one iteration worth of
//! generated records to them at a time.
//!
//! # Example
//!
//! ```ignore
//! use log_core::Profile;
//! use log_generator::LogGenerator;
//! use log_populate::{LogPopulator, OutputTargets, WriteErrorPolicy};
//!
//! let profile = Profile::default();
//! let targets = OutputTargets::new("logs", &profile.files, true, false);
//! targets.ensure_dir()?;
//!
//! let generator = LogGenerator::new(profile.coverage, 42);
//! let mut populator = LogPopulator::new(generator, targets, WriteErrorPolicy::Abort);
//! let emission = populator.emit_once()?;
//! println!("error emitted: {}", emission.error);
//! ```

pub mod args;
pub mod error;
pub mod populator;
pub mod targets;

pub use args::{OutputArgs, WriteErrorPolicy};
pub use error::PopulatorError;
pub use populator::{Emission, LogPopulator, PopulateMetrics};
pub use targets::OutputTargets;
