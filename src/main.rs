mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod strings;
mod util;

use std::sync::Arc;

use crate::{config::Config, error::AppError, scheduler::queue_refresh, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client(&config)?;
    let oauth_client = startup::setup_reddit_oauth_client(&config)?;
    let blossom = startup::setup_blossom_client(&config, http_client.clone())?;
    let reddit = startup::setup_reddit_client(http_client, oauth_client)?;
    startup::register_chart_font(&config);

    let state = Arc::new(AppState::new(config, blossom, reddit));

    tracing::info!("Starting Buttercup");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(state.clone()).await?;

    // Start queue refresh scheduler
    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = queue_refresh::start_scheduler(scheduler_state, discord_http).await {
            tracing::error!("Queue refresh scheduler error: {}", e);
        }
    });

    // Runs until the gateway connection is closed for good
    bot::start::start_bot(bot_client).await
}
