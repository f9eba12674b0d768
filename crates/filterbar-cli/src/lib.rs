//! # filterbar-cli
//!
//! Library half of the `filterbar` command.
//!
//! - [`cli`]: argument definitions
//! - [`config`]: the TOML configuration file
//! - [`config_handlers`]: `filterbar config ...`
//! - [`commands`]: `serve`, `render` and `download`
//! - [`logging`]: subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction};
pub use config::FilterbarConfig;
pub use error::{Error, Result};
