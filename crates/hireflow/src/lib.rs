//! Core library for the HireFlow sourcing and scoring notification pipeline.
//!
//! The `workflows::sourcing` module holds the pipeline itself: webhook intake,
//! outbound channel notification, proof-of-work question materialization, and
//! the candidate progress model. `config`, `telemetry`, and `error` carry the
//! service-wide plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
