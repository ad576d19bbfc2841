// src/network/analytics.rs
//! Aggregate scans over the follow graph: recommendation and popularity.

use super::Network;
use crate::name;

impl Network {
    /// Recommends the user sharing the most followees with `name`.
    ///
    /// Returns `None` for an unknown name, or when no other user shares a
    /// single followee. Ties go to the user added first.
    #[must_use]
    pub fn recommend_who_to_follow(&self, name: &str) -> Option<String> {
        let target = self.get_user(name)?;
        let candidates = self
            .users
            .iter()
            .filter(|c| !name::same(c.name(), target.name()))
            .map(|c| (c.name(), target.count_mutual(c)));

        let (best, mutual) = strict_max(candidates)?;
        log::trace!("recommend for '{}': '{best}' ({mutual} mutual)", target.name());
        Some(best.to_string())
    }

    /// Returns the user followed by the most other users.
    ///
    /// Returns `None` if the network is empty or nobody follows anyone.
    /// Ties go to the user added first.
    #[must_use]
    pub fn most_popular_user(&self) -> Option<String> {
        let (best, followers) = strict_max(self.follower_counts().into_iter())?;
        log::trace!("most popular: '{best}' ({followers} followers)");
        Some(best.to_string())
    }

    /// Follower count of every user, in directory order.
    #[must_use]
    pub fn follower_counts(&self) -> Vec<(&str, usize)> {
        self.users
            .iter()
            .map(|u| (u.name(), self.followee_count(u.name())))
            .collect()
    }

    /// Number of users other than `name` whose follow list contains `name`.
    #[must_use]
    pub fn followee_count(&self, name: &str) -> usize {
        self.users
            .iter()
            .filter(|u| !name::same(u.name(), name) && u.follows(name))
            .count()
    }
}

/// Picks the entry with a count strictly above every earlier one.
/// A zero count never wins.
fn strict_max<'a, I>(entries: I) -> Option<(&'a str, usize)>
where
    I: Iterator<Item = (&'a str, usize)>,
{
    let mut best: Option<(&'a str, usize)> = None;
    let mut best_count = 0;

    for (name, count) in entries {
        if count > best_count {
            best_count = count;
            best = Some((name, count));
        }
    }

    best
}
