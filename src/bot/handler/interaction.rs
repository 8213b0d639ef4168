use serenity::all::{Context, Interaction};

use crate::{
    bot::command::{self, search},
    service::{
        modules::Module,
        search::{NEXT_BUTTON_ID, PREVIOUS_BUTTON_ID},
    },
    state::AppState,
};

/// Handles slash commands and clicks on message components.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => command::dispatch(state, &ctx, &command).await,
        Interaction::Component(component) => {
            let custom_id = component.data.custom_id.as_str();
            if custom_id != PREVIOUS_BUTTON_ID && custom_id != NEXT_BUTTON_ID {
                tracing::debug!("Ignoring component interaction '{}'", custom_id);
                return;
            }

            if !state.modules.is_enabled(Module::Search).await {
                return;
            }

            if let Err(e) = search::handle_button(state, &ctx, &component).await {
                tracing::error!("Failed to change the search page: {}", e);
            }
        }
        _ => {}
    }
}
