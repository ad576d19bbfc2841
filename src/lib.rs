pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod name;
pub mod network;
pub mod user;

pub use error::NetworkError;
pub use network::Network;
pub use user::User;
