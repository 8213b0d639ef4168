use chrono::Utc;
use serenity::all::{
    CommandOptionType, ComponentInteraction, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use std::time::Instant;

use crate::{
    bot::command::CommandContext,
    error::AppError,
    service::search::{
        format::{search_buttons, search_embed},
        SearchService, SearchState, NEXT_BUTTON_ID, PREVIOUS_BUTTON_ID,
    },
    state::AppState,
    strings::search,
    util::format::get_duration_str,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("search")
        .description("Search for transcriptions containing the given text.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "query", "The text to search for.")
                .required(true),
        )
}

/// Searches transcriptions and shows the first page of results with paging buttons.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    let query = cmd.option_str("query").unwrap_or_default().trim().to_string();
    cmd.reply(search::searching(&query)).await?;

    let mut search_state = SearchState::new(&query, cmd.command.user.id.get());
    let page = SearchService::new(&cmd.state.blossom)
        .load_page(&mut search_state)
        .await?;

    if page.total == 0 {
        cmd.edit(EditInteractionResponse::new().content(search::no_results(&query)))
            .await?;
        return Ok(());
    }

    let message = cmd
        .edit(
            EditInteractionResponse::new()
                .content(search::embed_message(page.total, &get_duration_str(start)))
                .embed(search_embed(&query, &page))
                .components(search_buttons(&page)),
        )
        .await?;

    let mut searches = cmd.state.searches.lock().await;
    searches.set(message.id.get(), search_state, Utc::now());
    tracing::debug!("{} searches cached", searches.len());

    Ok(())
}

/// Handles a click on the previous/next button of a search reply.
///
/// Only the user who started the search may page through it; everyone else gets
/// an ephemeral notice, as does anyone clicking on a search that was evicted
/// from the cache.
pub async fn handle_button(state: &AppState, ctx: &Context, component: &ComponentInteraction) -> Result<(), AppError> {
    let message_id = component.message.id.get();
    let cached = state.searches.lock().await.get(message_id).cloned();

    let Some(mut search_state) = cached else {
        return respond_ephemeral(ctx, component, search::SEARCH_EXPIRED).await;
    };
    if search_state.discord_user_id != component.user.id.get() {
        return respond_ephemeral(ctx, component, search::NOT_YOUR_SEARCH).await;
    }

    match component.data.custom_id.as_str() {
        PREVIOUS_BUTTON_ID => search_state.cur_page = search_state.cur_page.saturating_sub(1),
        NEXT_BUTTON_ID => search_state.cur_page += 1,
        other => {
            tracing::warn!("Unknown search button '{}'", other);
            return Ok(());
        }
    }

    let page = SearchService::new(&state.blossom)
        .load_page(&mut search_state)
        .await?;

    let message = CreateInteractionResponseMessage::new()
        .embed(search_embed(&search_state.query, &page))
        .components(search_buttons(&page));
    component
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(message))
        .await?;

    state
        .searches
        .lock()
        .await
        .set(message_id, search_state, Utc::now());

    Ok(())
}

async fn respond_ephemeral(ctx: &Context, component: &ComponentInteraction, content: &str) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}
