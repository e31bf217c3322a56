//! nginx-log-sim library
//!
//! Fabricates nginx access and error logs and appends them to files at a
//! configurable pace, for exercising log collection pipelines such as
//! FluentBit.
//!
//! # Crates
//!
//! - `log_core` - record types and the sampling profile
//! - `log_generator` - reference tables and record builders
//! - `log_populate` - output files and per-iteration emission
//!
//! # CLI Usage
//!
//! ```bash
//! # One entry per second, forever
//! nginx-log-sim
//!
//! # Ten minutes at five entries per second, with the legacy access log
//! nginx-log-sim --duration 10m --interval 0.2 --legacy
//!
//! # A burst of 1000 entries as fast as possible
//! nginx-log-sim --burst 1000 --burst-rate 0
//! ```

pub mod config;
pub mod simulate;

pub use simulate::{prepare, run, Mode, SimulationReport};
