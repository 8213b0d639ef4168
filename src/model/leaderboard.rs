//! Leaderboard models as returned by `submission/leaderboard`.

use serde::Deserialize;

/// One volunteer on the leaderboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub username: String,
    pub gamma: u64,
    /// 1-based position on the leaderboard.
    pub rank: u64,
}

/// The leaderboard around a single volunteer.
///
/// `above` and `below` are the neighbours of `user`; entries in `top` may
/// overlap with them for volunteers near the top.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Leaderboard {
    #[serde(default)]
    pub top: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub above: Vec<LeaderboardEntry>,
    pub user: LeaderboardEntry,
    #[serde(default)]
    pub below: Vec<LeaderboardEntry>,
}
