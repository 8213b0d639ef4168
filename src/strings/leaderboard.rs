pub fn getting_leaderboard(username: &str) -> String {
    format!("Getting the leaderboard for u/{username}...")
}

pub fn embed_title(name: &str) -> String {
    format!("Leaderboard for {name}")
}

pub fn embed_message(duration: &str) -> String {
    format!("Here is your leaderboard! ({duration})")
}

/// Separates the top volunteers from the ones around the user.
pub const GAP: &str = "...";

pub fn entry(rank: u64, username: &str, gamma: u64) -> String {
    format!("{rank}. {username} ({gamma})")
}
