//! stations command - Show the network topology

use std::path::Path;

use anyhow::Result;

use super::{load_config, network_path};
use crate::cli::Context;
use crate::core::network::Network;
use crate::ui::output;

/// Print the network as a tree, followed by its terminal and colors.
pub fn stations(ctx: &Context, network: Option<&Path>) -> Result<()> {
    let dir = ctx.working_dir()?;
    let config = load_config(&dir)?;
    let path = network_path(&dir, &config, network);

    let network = Network::load(&path)?;
    let vocabulary = network.vocabulary();

    println!("{}", output::format_network(network.stations()));

    if !ctx.quiet {
        println!();
        if let Some(terminal) = config.terminal().or(network.terminal().map(|t| t.as_str())) {
            println!("Terminal: {}", terminal);
        }
        println!("Colors: {}", vocabulary.color_labels().join(", "));
    }

    Ok(())
}
