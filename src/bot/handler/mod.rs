use serenity::all::{
    Context, EventHandler, GuildId, GuildMemberUpdateEvent, Interaction, Member, Ready, User,
};
use serenity::async_trait;
use std::sync::Arc;

use crate::{
    service::{discord::GuildSetup, modules::Module},
    state::AppState,
};

pub mod interaction;
pub mod member;
pub mod moderation;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: Arc<AppState>,
}

impl Handler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.state, ctx, old, new, event).await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        moderation::handle_guild_ban_addition(&self.state, ctx, guild_id, banned_user).await;
    }

    /// Called when a user is unbanned from a guild
    async fn guild_ban_removal(&self, ctx: Context, guild_id: GuildId, unbanned_user: User) {
        moderation::handle_guild_ban_removal(&self.state, ctx, guild_id, unbanned_user).await;
    }

    /// Called for slash commands and message components
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}

/// Resolves the configured roles and channels from the cached guild.
///
/// # Returns
/// - `GuildSetup` - The resolved IDs, all `None` when the guild isn't cached
pub fn guild_setup(state: &AppState, ctx: &Context, guild_id: GuildId) -> GuildSetup {
    match ctx.cache.guild(guild_id) {
        Some(guild) => GuildSetup::resolve(&guild, &state.config.roles, &state.config.channels),
        None => {
            tracing::warn!("Guild {} is not cached, can't resolve roles and channels", guild_id);
            GuildSetup::default()
        }
    }
}

/// Checks whether the module handling an event is enabled.
pub async fn module_enabled(state: &AppState, module: Module) -> bool {
    state.modules.is_enabled(module).await
}
