// src/name.rs
//! Name matching used for lookup, uniqueness and follow checks.
//!
//! Every comparison of user names in the crate goes through [`same`], so the
//! directory, the follow lists and the self-follow guard agree on identity.

/// Returns true if both names refer to the same user (case-insensitive).
#[must_use]
pub fn same(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// True for the "no name" sentinel: empty or whitespace-only.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
