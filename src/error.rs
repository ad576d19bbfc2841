// src/error.rs
use thiserror::Error;

/// Why a directory or follow-list mutation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Network is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("User name is empty")]
    EmptyName,

    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    #[error("No user named '{0}'")]
    UnknownUser(String),

    #[error("User '{0}' cannot follow itself")]
    SelfFollow(String),

    #[error("'{follower}' already follows '{followee}'")]
    AlreadyFollowing { follower: String, followee: String },

    #[error("'{name}' reached the limit of {limit} followees")]
    FolloweeLimit { name: String, limit: usize },
}

pub type Result<T> = std::result::Result<T, NetworkError>;
