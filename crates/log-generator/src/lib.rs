//! Record builders for the nginx log simulator.
//!
//! This crate provides the `LogGenerator` which fabricates access and error
//! log records by sampling from static reference tables. The generator owns a
//! `StdRng`; seeding it makes the output reproducible for a fixed clock.
//!
//! # Architecture
//!
//! ```text
//!   tables (static reference data)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │   LogGenerator   │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - coverage      │
//! └────────┬─────────┘
//!          │
//!          ▼
//!  AccessRecord / LegacyAccessLine / ErrorRecord
//! ```
//!
//! # Example
//!
//! ```rust
//! use log_core::Coverage;
//! use log_generator::LogGenerator;
//!
//! let mut generator = LogGenerator::new(Coverage::default(), 42);
//! let record = generator.access_record();
//! assert!(record.request.ends_with(" HTTP/1.1"));
//! ```

pub mod generator;
pub mod generators;
pub mod tables;

// Re-exports for convenience
pub use generator::LogGenerator;
