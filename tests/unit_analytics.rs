// tests/unit_analytics.rs
//! Recommendation and popularity scans.

use follownet_core::Network;

fn build(names: &[&str], edges: &[(&str, &str)]) -> Network {
    let mut net = Network::new(names.len());
    for n in names {
        assert!(net.add_user(n), "setup add {n}");
    }
    for (a, b) in edges {
        assert!(net.add_followee(a, b), "setup follow {a} -> {b}");
    }
    net
}

#[test]
fn test_most_popular_basic() {
    let net = build(&["Foo", "Bar", "Baz"], &[("Foo", "Bar"), ("Baz", "Bar")]);
    assert_eq!(net.most_popular_user().as_deref(), Some("Bar"));
    assert_eq!(net.followee_count("Bar"), 2);
    assert_eq!(net.followee_count("Foo"), 0);
}

#[test]
fn test_most_popular_empty() {
    assert!(Network::new(3).most_popular_user().is_none());
}

#[test]
fn test_most_popular_without_followers() {
    let net = build(&["A", "B"], &[]);
    assert!(net.most_popular_user().is_none());
}

#[test]
fn test_most_popular_tie_goes_to_first() {
    let net = build(
        &["A", "B", "C", "D"],
        &[("A", "C"), ("D", "C"), ("C", "B"), ("D", "B")],
    );
    assert_eq!(net.most_popular_user().as_deref(), Some("B"));
}

#[test]
fn test_follower_counts_order() {
    let net = build(&["A", "B", "C"], &[("A", "B"), ("C", "B"), ("B", "A")]);
    assert_eq!(net.follower_counts(), vec![("A", 1), ("B", 2), ("C", 0)]);
}

#[test]
fn test_recommend_basic() {
    let net = build(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
    assert_eq!(net.recommend_who_to_follow("A").as_deref(), Some("B"));
    assert_eq!(net.recommend_who_to_follow("a").as_deref(), Some("B"));
}

#[test]
fn test_recommend_unknown() {
    let net = build(&["A"], &[]);
    assert!(net.recommend_who_to_follow("Nobody").is_none());
    assert!(net.recommend_who_to_follow("").is_none());
}

#[test]
fn test_recommend_never_zero_mutual() {
    let net = build(&["A", "B", "C"], &[("A", "B"), ("C", "A")]);
    assert!(net.recommend_who_to_follow("A").is_none());
    assert!(net.recommend_who_to_follow("B").is_none());
}

#[test]
fn test_recommend_tie_goes_to_first() {
    let net = build(
        &["U", "X", "Y", "T"],
        &[("U", "T"), ("Y", "T"), ("X", "T")],
    );
    assert_eq!(net.recommend_who_to_follow("U").as_deref(), Some("X"));
}

#[test]
fn test_recommend_prefers_larger_overlap() {
    let net = build(
        &["U", "P", "Q", "R", "S"],
        &[
            ("U", "R"),
            ("U", "S"),
            ("P", "R"),
            ("Q", "R"),
            ("Q", "S"),
        ],
    );
    assert_eq!(net.recommend_who_to_follow("U").as_deref(), Some("Q"));
}

#[test]
fn test_count_mutual_symmetric_across_network() {
    let net = build(
        &["A", "B", "C", "D"],
        &[("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("C", "D"), ("D", "A")],
    );
    for u in net.users() {
        for v in net.users() {
            assert_eq!(u.count_mutual(v), v.count_mutual(u), "{} / {}", u.name(), v.name());
        }
    }
    let a = net.get_user("A").unwrap();
    let b = net.get_user("B").unwrap();
    assert_eq!(a.count_mutual(b), 2);
}
