//! Command dispatch logic extracted from the binary.

use super::{
    args::Commands,
    handlers::{handle_demo, handle_follows, handle_popular, handle_recommend, handle_show},
};
use crate::config::NetworkConfig;
use crate::exit::FollownetExit;
use crate::network::Network;
use anyhow::Result;
use std::path::Path;

/// Executes the parsed command against the network described in `file`.
///
/// # Errors
/// Returns error if the network file cannot be loaded or the handler fails.
pub fn execute(command: Commands, file: &Path) -> Result<FollownetExit> {
    if let Commands::Demo = command {
        return handle_demo();
    }

    let network = load_network(file)?;
    match command {
        Commands::Show { json } => handle_show(&network, json),
        Commands::Recommend { name } => handle_recommend(&network, &name),
        Commands::Popular => handle_popular(&network),
        Commands::Follows { follower, followee } => handle_follows(&network, &follower, &followee),
        Commands::Demo => handle_demo(),
    }
}

/// Loads and builds the network described in `file`.
///
/// # Errors
/// Returns error if the file is unreadable, malformed, or a seed is rejected.
pub fn load_network(file: &Path) -> Result<Network> {
    let config = NetworkConfig::load(file)?;
    let network = Network::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Rejected seed in {}: {e}", file.display()))?;
    Ok(network)
}
