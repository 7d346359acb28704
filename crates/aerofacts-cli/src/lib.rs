//! Aerofacts CLI library.
//!
//! This library provides the core functionality for the aerofacts
//! command-line interface: argument parsing, configuration loading, and
//! the pipeline-driving `run` command.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::AerofactsConfig;
pub use error::{CliError, Result};
