pub const FOUND: &str = "I found the post!";

pub fn looking_for_post(url: &str) -> String {
    format!("Looking for post <{url}>...")
}

pub fn not_found(url: &str) -> String {
    format!(
        "Sorry, I couldn't find a post with the URL <{url}>. \
         Please check that your link is correct, it should lead to either a post on \
         r/TranscribersOfReddit, a post on a partner sub or to a transcription."
    )
}

pub const STATUS_UNCLAIMED: &str = "Unclaimed";
pub const STATUS_CLAIMED: &str = "Claimed";
pub const STATUS_COMPLETED: &str = "Completed";

pub fn claimed_by(link: &str) -> String {
    format!("Claimed by {link}")
}

pub fn completed_by(link: &str) -> String {
    format!("Completed by {link}")
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
