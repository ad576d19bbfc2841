// src/network/mod.rs
//! The fixed-capacity user directory and the follow graph over it.

pub mod analytics;

use crate::error::{NetworkError, Result};
use crate::name;
use crate::user::User;
use serde::Serialize;
use std::fmt;

const STARTER_USERS: [&str; 3] = ["Foo", "Bar", "Baz"];

/// A directory of users with a capacity fixed at construction.
///
/// Users occupy `users[0..user_count]` in the order they were added
/// (directory order) and are never removed.
#[derive(Debug, Clone, Serialize)]
pub struct Network {
    capacity: usize,
    #[serde(skip)]
    max_followees: Option<usize>,
    users: Vec<User>,
}

impl Network {
    /// Creates an empty network that can hold `max_user_count` users.
    #[must_use]
    pub fn new(max_user_count: usize) -> Self {
        Self {
            capacity: max_user_count,
            max_followees: None,
            users: Vec::new(),
        }
    }

    /// Limits the follow list of every user added from now on.
    #[must_use]
    pub fn with_followee_limit(mut self, limit: Option<usize>) -> Self {
        self.max_followees = limit;
        self
    }

    /// Creates a network pre-seeded with `Foo`, `Bar` and `Baz`, as far as
    /// capacity allows.
    #[must_use]
    pub fn getting_started(max_user_count: usize) -> Self {
        let mut network = Self::new(max_user_count);
        for name in STARTER_USERS {
            network.add_user(name);
        }
        network
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.users.len() >= self.capacity
    }

    /// Users in directory order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Finds the user with the given name. Blank names never match.
    #[must_use]
    pub fn get_user(&self, name: &str) -> Option<&User> {
        if name::is_blank(name) {
            return None;
        }
        self.users.iter().find(|u| name::same(u.name(), name))
    }

    /// Adds a new user with an empty follow list.
    ///
    /// # Errors
    /// Returns error if the network is full, the name is blank, or a user
    /// with that name already exists. The directory is left unchanged.
    pub fn try_add_user(&mut self, name: &str) -> Result<()> {
        if self.is_full() {
            return Err(NetworkError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if name::is_blank(name) {
            return Err(NetworkError::EmptyName);
        }
        if let Some(existing) = self.get_user(name) {
            return Err(NetworkError::DuplicateUser(existing.name().to_string()));
        }

        self.users
            .push(User::new(name).with_followee_limit(self.max_followees));
        log::debug!("added user '{name}' ({}/{})", self.users.len(), self.capacity);
        Ok(())
    }

    /// Adds a new user, returning false if the addition was refused.
    pub fn add_user(&mut self, name: &str) -> bool {
        match self.try_add_user(name) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("add_user rejected: {e}");
                false
            }
        }
    }

    /// Makes `follower` follow `followee`.
    ///
    /// The follow entry stores the followee's registered name.
    ///
    /// # Errors
    /// Returns error if the names are equal, either user is unknown, or the
    /// follower refuses the entry (already following, follow list full).
    pub fn try_add_followee(&mut self, follower: &str, followee: &str) -> Result<()> {
        if name::is_blank(follower) || name::is_blank(followee) {
            return Err(NetworkError::EmptyName);
        }
        if name::same(follower, followee) {
            return Err(NetworkError::SelfFollow(follower.to_string()));
        }

        let target = self
            .get_user(followee)
            .ok_or_else(|| NetworkError::UnknownUser(followee.to_string()))?
            .name()
            .to_string();

        let source = self
            .users
            .iter_mut()
            .find(|u| name::same(u.name(), follower))
            .ok_or_else(|| NetworkError::UnknownUser(follower.to_string()))?;

        source.try_add_followee(&target)?;
        log::debug!("'{}' now follows '{target}'", source.name());
        Ok(())
    }

    /// Makes `follower` follow `followee`, returning false if refused.
    pub fn add_followee(&mut self, follower: &str, followee: &str) -> bool {
        match self.try_add_followee(follower, followee) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("add_followee rejected: {e}");
                false
            }
        }
    }

    /// Renders every user on its own line under a `Network:` header.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network:")?;
        for user in &self.users {
            write!(f, "\n{user}")?;
        }
        Ok(())
    }
}
