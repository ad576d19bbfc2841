// src/config.rs
//! TOML description of a network: capacity, limits and seed users.
//!
//! ```toml
//! capacity = 3
//!
//! [[users]]
//! name = "Foo"
//! follows = ["Bar"]
//!
//! [[users]]
//! name = "Bar"
//! ```

use crate::error;
use crate::network::Network;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PATH: &str = "network.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub max_followees: Option<usize>,
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeed {
    pub name: String,
    #[serde(default)]
    pub follows: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_followees: None,
            users: Vec::new(),
        }
    }
}

const fn default_capacity() -> usize { 10 }

impl NetworkConfig {
    /// Parses a network description from TOML text.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid network TOML")
    }

    /// Loads a network description from disk.
    ///
    /// # Errors
    /// Returns error if the file doesn't exist or the TOML is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Network file not found: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
    }
}

impl Network {
    /// Builds a network from its description: all users first, then every
    /// follow edge in file order.
    ///
    /// # Errors
    /// Returns the first rejected addition (capacity, duplicate name,
    /// unknown followee, self-follow, ...).
    pub fn from_config(config: &NetworkConfig) -> error::Result<Self> {
        let mut network = Self::new(config.capacity).with_followee_limit(config.max_followees);

        for seed in &config.users {
            network.try_add_user(&seed.name)?;
        }
        for seed in &config.users {
            for followee in &seed.follows {
                network.try_add_followee(&seed.name, followee)?;
            }
        }

        log::debug!(
            "built network with {} of {} users",
            network.user_count(),
            network.capacity()
        );
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = NetworkConfig::parse("").unwrap();
        assert_eq!(cfg.capacity, 10);
        assert!(cfg.max_followees.is_none());
        assert!(cfg.users.is_empty());
    }

    #[test]
    fn test_follows_default_empty() {
        let cfg = NetworkConfig::parse("[[users]]\nname = \"Foo\"").unwrap();
        assert_eq!(cfg.users.len(), 1);
        assert!(cfg.users[0].follows.is_empty());
    }
}
