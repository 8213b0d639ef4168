//! Ban events, relayed to the mod log.

use serenity::all::{Context, GuildId, User};

use crate::{
    bot::handler::{guild_setup, module_enabled},
    service::{
        modlog::{ModAction, ModLogService},
        modules::Module,
    },
    state::AppState,
};

/// Handles the guild_ban_addition event when a user is banned
pub async fn handle_guild_ban_addition(state: &AppState, ctx: Context, guild_id: GuildId, banned_user: User) {
    relay(state, &ctx, guild_id, ModAction::Banned, &banned_user).await;
}

/// Handles the guild_ban_removal event when a user is unbanned
pub async fn handle_guild_ban_removal(state: &AppState, ctx: Context, guild_id: GuildId, unbanned_user: User) {
    relay(state, &ctx, guild_id, ModAction::Unbanned, &unbanned_user).await;
}

async fn relay(state: &AppState, ctx: &Context, guild_id: GuildId, action: ModAction, user: &User) {
    tracing::info!("{:?} user {} ({})", action, user.name, user.id);

    if !module_enabled(state, Module::ModLog).await {
        return;
    }

    let setup = guild_setup(state, ctx, guild_id);
    if let Err(e) = ModLogService::new(&ctx.http, setup.mod_log_channel)
        .relay(action, user.id.get(), &user.name)
        .await
    {
        tracing::error!("Failed to relay moderation action: {}", e);
    }
}
