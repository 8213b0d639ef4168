//! Error replies shown to the invoking user.

pub const NOT_AUTHORIZED: &str = "You are not authorized to use this command.";
pub const GENERIC: &str = "Something went wrong, please contact a moderator.";
pub const UNKNOWN_COMMAND: &str = "This command is currently disabled.";
pub const NOT_IN_GUILD: &str = "This command can only be used on the server.";

pub fn invalid_username(display_name: &str) -> String {
    format!(
        "{display_name} is an invalid username! Did you change your display name to the required format?"
    )
}

pub fn user_not_found(username: &str) -> String {
    format!("User u/{username} not found!")
}

pub fn invalid_time(err: &str) -> String {
    format!("{err}. Try something like `2 weeks ago`, `2021-09-13` or `none`.")
}
