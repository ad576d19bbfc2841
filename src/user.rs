// src/user.rs
//! A single member of the network and the names they follow.

use crate::error::{NetworkError, Result};
use crate::name;
use serde::Serialize;
use std::fmt;

/// A named user and their follow list.
///
/// Follow entries are unique under case-insensitive matching and kept in
/// insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    name: String,
    followees: Vec<String>,
    #[serde(skip)]
    max_followees: Option<usize>,
}

impl User {
    /// Creates a user with an empty follow list.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            followees: Vec::new(),
            max_followees: None,
        }
    }

    /// Caps the follow list at `limit` entries (`None` means unlimited).
    #[must_use]
    pub fn with_followee_limit(mut self, limit: Option<usize>) -> Self {
        self.max_followees = limit;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn followees(&self) -> &[String] {
        &self.followees
    }

    #[must_use]
    pub fn followee_count(&self) -> usize {
        self.followees.len()
    }

    /// Returns true if `name` is on this user's follow list.
    #[must_use]
    pub fn follows(&self, name: &str) -> bool {
        self.followees.iter().any(|f| name::same(f, name))
    }

    /// Adds `name` to the follow list.
    ///
    /// # Errors
    /// Returns the reason the entry was refused: blank name, self-follow,
    /// duplicate entry or a full follow list.
    pub fn try_add_followee(&mut self, name: &str) -> Result<()> {
        if name::is_blank(name) {
            return Err(NetworkError::EmptyName);
        }
        if name::same(&self.name, name) {
            return Err(NetworkError::SelfFollow(self.name.clone()));
        }
        if self.follows(name) {
            return Err(NetworkError::AlreadyFollowing {
                follower: self.name.clone(),
                followee: name.to_string(),
            });
        }
        if let Some(limit) = self.max_followees {
            if self.followees.len() >= limit {
                return Err(NetworkError::FolloweeLimit {
                    name: self.name.clone(),
                    limit,
                });
            }
        }

        self.followees.push(name.to_string());
        Ok(())
    }

    /// Adds `name` to the follow list, returning false if it was refused.
    pub fn add_followee(&mut self, name: &str) -> bool {
        match self.try_add_followee(name) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("add_followee rejected: {e}");
                false
            }
        }
    }

    /// Number of names both users follow.
    #[must_use]
    pub fn count_mutual(&self, other: &User) -> usize {
        self.followees.iter().filter(|f| other.follows(f)).count()
    }

    /// Renders the user as `Name -> A B C`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.name)?;
        for followee in &self.followees {
            write!(f, " {followee}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_following(name: &str, followees: &[&str]) -> User {
        let mut u = User::new(name);
        for f in followees {
            assert!(u.add_followee(f), "setup follow {name} -> {f}");
        }
        u
    }

    #[test]
    fn test_add_followee_once() {
        let mut u = User::new("Foo");
        assert!(u.add_followee("Bar"));
        assert!(!u.add_followee("Bar"));
        assert!(!u.add_followee("bar"), "Duplicate check ignores case");
        assert_eq!(u.followee_count(), 1);
        assert!(u.follows("BAR"));
    }

    #[test]
    fn test_rejections_carry_reason() {
        let mut u = User::new("Foo");
        assert_eq!(u.try_add_followee(""), Err(NetworkError::EmptyName));
        assert_eq!(
            u.try_add_followee("foo"),
            Err(NetworkError::SelfFollow("Foo".into()))
        );
        assert!(u.followees().is_empty());
    }

    #[test]
    fn test_followee_limit() {
        let mut u = User::new("Foo").with_followee_limit(Some(2));
        assert!(u.add_followee("A"));
        assert!(u.add_followee("B"));
        assert_eq!(
            u.try_add_followee("C"),
            Err(NetworkError::FolloweeLimit { name: "Foo".into(), limit: 2 })
        );
        assert_eq!(u.followees(), ["A", "B"]);
    }

    #[test]
    fn test_count_mutual_symmetric() {
        let cases = [
            (vec!["B", "C"], vec!["C"], 1),
            (vec!["B", "C", "D"], vec!["d", "c", "E"], 2),
            (vec![], vec!["A"], 0),
            (vec!["X"], vec!["Y"], 0),
        ];
        for (a, b, expected) in cases {
            let ua = user_following("U1", &a);
            let ub = user_following("U2", &b);
            assert_eq!(ua.count_mutual(&ub), expected, "{a:?} vs {b:?}");
            assert_eq!(ub.count_mutual(&ua), expected, "{b:?} vs {a:?}");
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(User::new("Foo").describe(), "Foo ->");
        assert_eq!(user_following("Foo", &["Bar", "Baz"]).describe(), "Foo -> Bar Baz");
    }
}
