//! Fantasy Football CLI Library
//!
//! Terminal front-end over the fantasy football view models.
//!
//! This library exposes the command surface and handlers for testing purposes.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use app::{App, StdinConfirm};
pub use cli::{Cli, Commands};
pub use config::CliConfig;
pub use error::{CliError, Result};
