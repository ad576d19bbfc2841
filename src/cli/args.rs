use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "follownet", version, about = "Follow graph explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Network description to load
    #[arg(long, short, value_name = "FILE", default_value = crate::config::DEFAULT_PATH)]
    pub file: PathBuf,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every user and who they follow
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Recommend someone for NAME to follow
    Recommend { name: String },
    /// Print the user with the most followers
    Popular,
    /// Check whether FOLLOWER follows FOLLOWEE
    Follows { follower: String, followee: String },
    /// Run against the built-in Foo/Bar/Baz network
    Demo,
}
