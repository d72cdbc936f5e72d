//! bundlecfg CLI - build descriptors for cjs, esm and umd library builds.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `generate` and `check`
//! - [`config`] - options layering (file, environment, flags)
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
