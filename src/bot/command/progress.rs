use chrono::{Duration, Utc};
use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed, EditInteractionResponse,
};
use std::time::Instant;

use crate::{
    bot::command::{rank_colour, CommandContext},
    data::blossom::SubmissionRepository,
    error::AppError,
    strings::progress,
    util::format::{get_duration_str, get_progress_bar, get_username},
};

const BAR_WIDTH: usize = 10;

pub fn register() -> CreateCommand {
    CreateCommand::new("progress")
        .description("Show the transcriptions of the last 24 hours.")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "username",
            "The user to show the progress of, yourself by default.",
        ))
}

/// Shows the volunteer's progress towards the daily goal.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    let username = cmd.username_or_author("username")?;
    cmd.reply(progress::getting_progress(&username)).await?;

    let volunteer = cmd.find_volunteer(&username).await?;
    let since = Utc::now() - Duration::hours(24);
    let count = SubmissionRepository::new(&cmd.state.blossom)
        .completed_count_since(volunteer.id, since)
        .await?;

    let bar = get_progress_bar(count, progress::DAILY_GOAL, BAR_WIDTH, true, true);
    let embed = CreateEmbed::new()
        .title(progress::embed_title(&get_username(Some(&volunteer))))
        .colour(rank_colour(volunteer.gamma))
        .description(progress::embed_description(count, &bar));

    cmd.edit(
        EditInteractionResponse::new()
            .content(progress::embed_message(&get_duration_str(start)))
            .embed(embed),
    )
    .await?;

    Ok(())
}
