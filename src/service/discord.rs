//! Resolving the configured roles and channels of the guild.
//!
//! Roles and channels are configured by name, so they survive being recreated.
//! They are looked up in the cached guild whenever an event needs them.

use serenity::all::{ChannelId, ChannelType, Guild, GuildChannel, Role, RoleId};

use crate::config::{ChannelConfig, RoleConfig};

/// The roles and channels of a guild the bot works with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildSetup {
    pub restrict_role: Option<RoleId>,
    pub accepted_role: Option<RoleId>,
    pub admin_role: Option<RoleId>,
    pub restrict_channel: Option<ChannelId>,
    pub welcome_channel: Option<ChannelId>,
    pub mod_log_channel: Option<ChannelId>,
    /// Channel Discord posts join messages to.
    pub system_channel: Option<ChannelId>,
}

impl GuildSetup {
    /// Looks up the configured roles and channels in the guild.
    ///
    /// Roles and channels missing from the guild stay `None`; the features using
    /// them are skipped.
    pub fn resolve(guild: &Guild, roles: &RoleConfig, channels: &ChannelConfig) -> Self {
        Self {
            restrict_role: find_role_id(guild.roles.values(), &roles.restrict),
            accepted_role: find_role_id(guild.roles.values(), &roles.accepted),
            admin_role: find_role_id(guild.roles.values(), &roles.admin),
            restrict_channel: find_text_channel_id(guild.channels.values(), &channels.restrict),
            welcome_channel: find_text_channel_id(guild.channels.values(), &channels.welcome),
            mod_log_channel: channels
                .mod_log
                .as_deref()
                .and_then(|name| find_text_channel_id(guild.channels.values(), name)),
            system_channel: guild.system_channel_id,
        }
    }
}

/// Finds the role with the name.
pub fn find_role_id<'a>(roles: impl IntoIterator<Item = &'a Role>, name: &str) -> Option<RoleId> {
    roles
        .into_iter()
        .find(|role| role.name == name)
        .map(|role| role.id)
}

/// Finds the text channel with the name.
pub fn find_text_channel_id<'a>(
    channels: impl IntoIterator<Item = &'a GuildChannel>,
    name: &str,
) -> Option<ChannelId> {
    channels
        .into_iter()
        .find(|channel| channel.kind == ChannelType::Text && channel.name == name)
        .map(|channel| channel.id)
}
