//! Runtime bootstrap for the command-line binary.

pub mod error;
pub mod telemetry;
