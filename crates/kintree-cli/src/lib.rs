//! Kintree CLI library.
//!
//! This library provides the command-line and interactive front end for
//! kintree: argument parsing, configuration, command execution and output
//! formatting. The genealogical logic itself lives in `kintree-store` and
//! `kintree-engine`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
