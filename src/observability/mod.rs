//! Observability module
//!
//! Structured logging setup for the library and the `circq` binary.

pub mod telemetry;
