//! cli
//!
//! Command-line interface layer for forkroute.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and build the routing request
//! - Map failures to exit codes
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and hands the
//! routing work to [`crate::route::RouteRequest`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::route::RouteError;
use crate::ui::output::Verbosity;

/// Exit code for a query no route can answer.
pub const EXIT_INVALID_COMBINATION: u8 = 2;

/// Execution context derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override
    pub cwd: Option<PathBuf>,
    pub debug: bool,
    pub quiet: bool,
    /// Interactive mode forced by flags, `None` to decide from config
    pub interactive: Option<bool>,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Directory commands run in, always absolute.
    ///
    /// A relative `--cwd` is resolved against the process directory.
    pub fn working_dir(&self) -> Result<PathBuf> {
        let current = std::env::current_dir().context("Failed to determine current directory")?;
        Ok(match &self.cwd {
            Some(dir) => current.join(dir),
            None => current,
        })
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    commands::dispatch(cli.command, &ctx)
}

/// Process exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RouteError>() {
        Some(RouteError::InvalidCombination { .. }) => EXIT_INVALID_COMBINATION,
        _ => 1,
    }
}
