use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Initializes the Discord bot client
///
/// Builds the client with the event handler, but doesn't connect yet. The HTTP
/// client is returned separately so the scheduler can send messages without a
/// gateway connection of its own.
///
/// # Arguments
/// - `state` - Application state shared with the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - The bot client and its HTTP client
/// - `Err(AppError)` - Building the client failed
pub async fn init_bot(state: Arc<AppState>) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MODERATION
        | GatewayIntents::GUILD_MESSAGES;

    let token = state.config.discord_bot_token.clone();
    let handler = Handler::new(state);

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// Should be called from within a tokio::spawn task since it will block until the
/// bot shuts down.
///
/// # Returns
/// - `Ok(())` - The bot shut down
/// - `Err(AppError)` - Connecting to the gateway failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
