//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with the given ID and name.
///
/// Creates a Role object by deserializing JSON. All other fields are set to
/// reasonable defaults (no color, not hoisted, not managed, zero permissions).
///
/// # Arguments
/// - `guild_id` - Discord guild ID the role belongs to
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(1, 123456789, "New User");
/// assert_eq!(role.name, "New User");
/// ```
pub fn create_test_role(guild_id: u64, role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
