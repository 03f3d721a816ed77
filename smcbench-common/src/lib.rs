//! Common types and utilities for smcbench
//!
//! This crate provides the error type, logging setup and YAML configuration
//! shared by the testbench and the integration tests.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CapabilityProfile, TestbenchConfig};
pub use error::Error;
pub use logging::{format_hex_compact, init_logging, init_logging_with_filter, LogLevel};
