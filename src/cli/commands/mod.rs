//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration for the working directory
//! 2. Validates command-specific arguments
//! 3. Runs the request and formats the output

mod completion;
mod config_cmd;
mod route;
mod stations;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use route::{route, RouteArgs};
pub use stations::stations;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::config::Config;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Route {
            from,
            to,
            color,
            network,
            terminal,
            json,
        } => route::route(
            ctx,
            RouteArgs {
                from,
                to,
                color,
                network,
                terminal,
                json,
            },
        ),
        Command::Stations { network } => stations::stations(ctx, network.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load configuration for the working directory.
fn load_config(dir: &Path) -> Result<Config> {
    Config::load(Some(dir)).context("Failed to load config")
}

/// Network document for this run: the flag wins over configuration.
///
/// Relative paths are resolved against the working directory.
fn network_path(dir: &Path, config: &Config, flag: Option<&Path>) -> PathBuf {
    let path = flag.map(Path::to_path_buf).unwrap_or_else(|| config.network());
    if path.is_relative() {
        dir.join(path)
    } else {
        path
    }
}
