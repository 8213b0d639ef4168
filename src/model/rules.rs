use serde::Deserialize;

/// A rule of a subreddit as listed on `/r/<sub>/about/rules`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubredditRule {
    pub short_name: String,
    #[serde(default)]
    pub description: String,
}

/// Response body of the subreddit rules endpoint.
#[derive(Debug, Deserialize)]
pub struct SubredditRules {
    #[serde(default)]
    pub rules: Vec<SubredditRule>,
}
