//! Ready event handler for bot initialization.
//!
//! Fired once the bot connected to Discord's gateway. Logs the connection, sets
//! the bot's activity and registers the slash commands of the enabled modules.

use serenity::all::{ActivityData, Context, Ready};

use crate::{bot::command, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Application state with the configured guild and enabled modules
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the queue")));

    match command::register_commands(state, &ctx.http).await {
        Ok(count) => {
            tracing::info!("Registered {} slash commands", count);
            tracing::debug!("Enabled commands: {:?}", state.modules.enabled_commands().await);
        }
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
