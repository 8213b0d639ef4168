//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity guild Member.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username of the user
/// - `nick` - Guild nickname, `None` when unset
/// - `role_ids` - IDs of the member's roles, without `@everyone`
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(u64::to_string).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": nick,
        "roles": roles,
        "joined_at": "2021-06-01T12:00:00.000000+00:00",
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
