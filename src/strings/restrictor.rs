//! # Restrictor messages
//!
//! Sent to the welcome channel when the member is compliant and to the restrict
//! channel otherwise. Every message mentions the member.

fn mention(user_id: u64) -> String {
    format!("<@{user_id}>")
}

pub fn new_member(user_id: u64) -> String {
    format!(
        "Welcome {}! Before you can see the rest of the server, please read our Code of Conduct \
         and accept it with `/accept`. Also change your nickname to `/u/<your Reddit username>`, \
         e.g. `/u/spez`.",
        mention(user_id)
    )
}

pub fn new_lifted(user_id: u64) -> String {
    format!(
        "{} your restrictions have been lifted, welcome to the server! Enjoy your stay.",
        mention(user_id)
    )
}

pub fn coc_accepted(user_id: u64) -> String {
    format!(
        "Thank you for accepting the Code of Conduct, {}!",
        mention(user_id)
    )
}

pub fn correct_nick(user_id: u64) -> String {
    format!("Thanks {}, your nickname has the correct format!", mention(user_id))
}

pub fn wrong_prefix(user_id: u64) -> String {
    format!(
        "{} your nickname starts with `u/`, but it needs to start with `/u/`. \
         Please change it to `/u/<your Reddit username>`.",
        mention(user_id)
    )
}

pub fn wrong_nick(user_id: u64) -> String {
    format!(
        "{} your nickname doesn't have the correct format. \
         Please change it to `/u/<your Reddit username>`, e.g. `/u/spez`.",
        mention(user_id)
    )
}

/// Ephemeral reply to `/accept`; the restrictor posts the actual confirmation.
pub const ACCEPT_ACKNOWLEDGED: &str = "Got it, your acceptance of the Code of Conduct has been recorded.";
