//! route command - Find the shortest route between two stations

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::{load_config, network_path};
use crate::cli::Context;
use crate::core::network::FileNetwork;
use crate::core::types::StationName;
use crate::route::RouteRequest;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{Prompter, QueryPrompt};

/// Arguments of the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub color: Option<String>,
    pub network: Option<PathBuf>,
    pub terminal: Option<String>,
    pub json: bool,
}

/// Find and print the shortest route.
pub fn route(ctx: &Context, args: RouteArgs) -> Result<()> {
    let dir = ctx.working_dir()?;
    let verbosity = ctx.verbosity();
    let config = load_config(&dir)?;

    let path = network_path(&dir, &config, args.network.as_deref());
    output::debug(format!("Network document: {}", path.display()), verbosity);

    let terminal = args
        .terminal
        .as_deref()
        .or(config.terminal())
        .map(StationName::new)
        .transpose()
        .context("Invalid terminal station")?;

    let interactive = ctx
        .interactive
        .unwrap_or_else(|| config.interactive() && std::io::stdin().is_terminal());

    let network = FileNetwork::new(path);
    let mut query = QueryPrompt::new(Prompter::stdio(interactive))
        .with_flags(args.from, args.to, args.color)
        .with_default_color(config.default_color());

    let outcome = RouteRequest {
        network: &network,
        query: &mut query,
        terminal,
        verbosity,
    }
    .handle()?;

    if args.json {
        let json = serde_json::to_string_pretty(&outcome).context("Failed to serialize route")?;
        println!("{}", json);
    } else if verbosity == Verbosity::Quiet {
        println!("{}", outcome.route);
    } else {
        output::print(format!("Shortest route: {}", outcome.route), verbosity);
    }

    Ok(())
}
