//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// forkroute - Shortest routes through rail networks with color-restricted forks
#[derive(Parser, Debug)]
#[command(name = "forkroute")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if forkroute was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Interactive mode as forced by flags.
    ///
    /// Returns `None` when no flag decides it; the caller then falls back
    /// to configuration and whether stdin is a terminal.
    pub fn interactive(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet {
            Some(false)
        } else {
            None
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the shortest route between two stations
    #[command(
        name = "route",
        long_about = "Find the shortest route between two stations.\n\n\
            Candidate routes are built from the network's mainline and each of its \
            fork-groups, keeping only stations the train color may use. The shortest \
            candidate reaching the destination is printed from the initial station \
            to the final one.\n\n\
            Stations and color not given as flags are asked for interactively. \
            When no route connects the stations for that color the command fails \
            with an 'invalid combination' error and exit code 2.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Ask for everything
    forkroute route

    # Fully non-interactive
    forkroute route --from A --to F --color RED

    # Machine-readable output
    forkroute route --from F --to B --color green --json

    # Use another network document
    forkroute route --network data/train_network.json --from A --to F --color 'WITHOUT COLOR'"
    )]
    Route {
        /// Initial station
        #[arg(long)]
        from: Option<String>,

        /// Final station
        #[arg(long)]
        to: Option<String>,

        /// Train color (RED, GREEN, WITHOUT COLOR)
        #[arg(long)]
        color: Option<String>,

        /// Network document to load
        #[arg(long, value_name = "PATH")]
        network: Option<PathBuf>,

        /// Override the network's terminal station
        #[arg(long, value_name = "STATION")]
        terminal: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the network topology and valid colors
    #[command(
        name = "stations",
        long_about = "Print the loaded network as a tree.\n\n\
            Fork-groups are listed under their branch station. Stations restricted \
            to one train color are tagged with it."
    )]
    Stations {
        /// Network document to load
        #[arg(long, value_name = "PATH")]
        network: Option<PathBuf>,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    network         Network document (project scope)
    terminal        Terminal station override (project scope)
    default_color   Color used when --color is not given (project scope)
    interactive     Prompt for missing values (global scope)

WORKFLOW EXAMPLES:
    # Show the effective configuration
    forkroute config list

    # Pin the network document for this directory
    forkroute config set network data/train_network.json"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    forkroute completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    forkroute completion zsh >> ~/.zshrc

    # Fish
    forkroute completion fish > ~/.config/fish/completions/forkroute.fish

    # PowerShell
    forkroute completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_route_flags() {
        let cli = Cli::try_parse_from([
            "forkroute", "route", "--from", "A", "--to", "F", "--color", "RED", "--json",
        ])
        .unwrap();

        match cli.command {
            Command::Route {
                from,
                to,
                color,
                json,
                network,
                terminal,
            } => {
                assert_eq!(from.as_deref(), Some("A"));
                assert_eq!(to.as_deref(), Some("F"));
                assert_eq!(color.as_deref(), Some("RED"));
                assert!(json);
                assert!(network.is_none());
                assert!(terminal.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn interactive_resolution() {
        let cli = Cli::try_parse_from(["forkroute", "stations"]).unwrap();
        assert_eq!(cli.interactive(), None);

        let cli = Cli::try_parse_from(["forkroute", "--interactive", "stations"]).unwrap();
        assert_eq!(cli.interactive(), Some(true));

        let cli = Cli::try_parse_from(["forkroute", "-q", "stations"]).unwrap();
        assert_eq!(cli.interactive(), Some(false));
    }

    #[test]
    fn interactive_flags_conflict() {
        let result =
            Cli::try_parse_from(["forkroute", "--interactive", "--no-interactive", "stations"]);
        assert!(result.is_err());
    }
}
