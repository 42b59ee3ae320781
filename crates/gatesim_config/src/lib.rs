//! Parsing and validation of `gatesim.toml` configuration files.
//!
//! This crate reads the optional configuration file and produces a
//! strongly-typed [`GatesimConfig`] controlling the convergence pass budget
//! and how degraded netlists are treated.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
