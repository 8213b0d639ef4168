use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, EditInteractionResponse,
};
use std::time::Instant;

use crate::{
    bot::command::CommandContext,
    error::AppError,
    service::queue::{message::queue_embed, TrackedMessage},
    strings::queue,
    util::{format::get_duration_str, parse::extract_sub_name},
};

pub fn register() -> CreateCommand {
    CreateCommand::new("queue")
        .description("Show the current status of the queue.")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "source",
            "Only show posts from this subreddit.",
        ))
}

/// Shows the cached queue and keeps the reply up to date.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    let source = cmd
        .option_str("source")
        .map(|source| extract_sub_name(source).to_string())
        .filter(|source| !source.is_empty());
    cmd.reply(queue::GETTING_QUEUE).await?;

    let snapshot = cmd.state.queue.snapshot().await;
    let message = cmd
        .edit(
            EditInteractionResponse::new()
                .content(queue::embed_message(&get_duration_str(start)))
                .embed(queue_embed(snapshot.as_ref(), source.as_deref())),
        )
        .await?;

    cmd.state
        .queue
        .track(TrackedMessage {
            channel_id: message.channel_id,
            message_id: message.id,
            source,
        })
        .await;

    Ok(())
}
