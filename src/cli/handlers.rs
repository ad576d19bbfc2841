// src/cli/handlers.rs
use crate::exit::FollownetExit;
use crate::network::Network;
use anyhow::Result;
use colored::Colorize;

/// Prints the network, as text or as JSON.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_show(network: &Network, json: bool) -> Result<FollownetExit> {
    if json {
        print_json(network)?;
    } else {
        println!("{}", network.describe());
        println!(
            "{}",
            format!("{} of {} users", network.user_count(), network.capacity()).dimmed()
        );
    }
    Ok(FollownetExit::Success)
}

/// Prints the recommendation for `name`.
///
/// # Errors
/// Infallible today; kept fallible to match the other handlers.
pub fn handle_recommend(network: &Network, name: &str) -> Result<FollownetExit> {
    let Some(user) = network.get_user(name) else {
        eprintln!("{} no user named '{name}'", "Error:".red());
        return Ok(FollownetExit::NotFound);
    };

    match network.recommend_who_to_follow(name) {
        Some(pick) => {
            let mutual = network
                .get_user(&pick)
                .map_or(0, |candidate| user.count_mutual(candidate));
            println!(
                "{} should follow {} ({mutual} mutual)",
                user.name().bold(),
                pick.green().bold()
            );
        }
        None => println!(
            "{}",
            format!("No recommendation for {}: nobody shares a followee", user.name()).yellow()
        ),
    }
    Ok(FollownetExit::Success)
}

/// Prints the most followed user.
///
/// # Errors
/// Infallible today; kept fallible to match the other handlers.
pub fn handle_popular(network: &Network) -> Result<FollownetExit> {
    match network.most_popular_user() {
        Some(name) => {
            let followers = network.followee_count(&name);
            println!("{} ({followers} followers)", name.green().bold());
        }
        None => println!("{}", "No user has any followers".yellow()),
    }
    Ok(FollownetExit::Success)
}

/// Prints whether `follower` follows `followee`.
///
/// # Errors
/// Infallible today; kept fallible to match the other handlers.
pub fn handle_follows(network: &Network, follower: &str, followee: &str) -> Result<FollownetExit> {
    let Some(user) = network.get_user(follower) else {
        eprintln!("{} no user named '{follower}'", "Error:".red());
        return Ok(FollownetExit::NotFound);
    };

    if user.follows(followee) {
        println!("{} follows {followee}", user.name().green());
    } else {
        println!("{} does not follow {followee}", user.name().yellow());
    }
    Ok(FollownetExit::Success)
}

/// Runs the analytics on the starter network.
///
/// # Errors
/// Returns error if a starter follow is rejected.
pub fn handle_demo() -> Result<FollownetExit> {
    let mut network = Network::getting_started(3);
    network.try_add_followee("Foo", "Bar")?;
    network.try_add_followee("Baz", "Bar")?;
    network.try_add_followee("Baz", "Foo")?;

    println!("{}", network.describe());
    println!();
    handle_popular(&network)?;
    handle_recommend(&network, "Foo")
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
