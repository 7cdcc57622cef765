//! config command - Get, set, or list configuration values

use anyhow::{bail, Context as _, Result};

use super::load_config;
use crate::cli::Context;
use crate::core::config::{Config, ProjectConfig};
use crate::core::types::{StationName, TrainColor};
use crate::ui::output;

/// Keys understood by `config get` and `config set`.
const KEYS: [&str; 4] = ["network", "terminal", "default_color", "interactive"];

/// Effective value of `key`, or `None` when unset.
fn value_of(config: &Config, key: &str) -> Result<Option<String>> {
    let value = match key {
        "network" => Some(config.network().display().to_string()),
        "terminal" => config.terminal().map(str::to_string),
        "default_color" => config.default_color().map(|c| c.to_string()),
        "interactive" => Some(config.interactive().to_string()),
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    };
    Ok(value)
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let dir = ctx.working_dir()?;
    let config = load_config(&dir)?;

    // Key exists but has no value - exit silently
    if let Some(value) = value_of(&config, key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
///
/// `interactive` is stored in the global config, every other key in the
/// project config of the working directory.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let dir = ctx.working_dir()?;
    let config = load_config(&dir)?;

    let path = match key {
        "interactive" => {
            let mut global = config.global.clone();
            global.interactive = Some(
                value
                    .parse::<bool>()
                    .context("Invalid value for interactive, expected true or false")?,
            );
            Config::write_global(&global).context("Failed to write config")?
        }
        "network" | "terminal" | "default_color" => {
            let mut project = config.project.clone().unwrap_or_else(ProjectConfig::default);
            match key {
                "network" => {
                    if value.is_empty() {
                        bail!("Network path cannot be empty");
                    }
                    project.network = Some(value.into());
                }
                "terminal" => {
                    StationName::new(value).context("Invalid terminal station")?;
                    project.terminal = Some(value.to_string());
                }
                _ => {
                    project.default_color =
                        Some(value.parse::<TrainColor>().context("Invalid train color")?);
                }
            }
            Config::write_project(&dir, &project).context("Failed to write config")?
        }
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    };

    output::print(
        format!("Set {} = {} in {}", key, value, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let dir = ctx.working_dir()?;
    let config = load_config(&dir)?;

    println!("# Effective Configuration");
    for key in KEYS {
        match value_of(&config, key)? {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = (not set)", key),
        }
    }

    if !ctx.quiet {
        println!();
        match config.global_config_loaded_from() {
            Some(path) => println!("# global: {}", path.display()),
            None => println!("# global: (defaults)"),
        }
        match config.project_config_loaded_from() {
            Some(path) => println!("# project: {}", path.display()),
            None => println!("# project: (none)"),
        }
    }

    Ok(())
}
