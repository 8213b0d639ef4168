use serenity::all::{CreateCommand, CreateEmbed, EditInteractionResponse};
use std::time::Instant;

use crate::{
    bot::command::CommandContext,
    data::blossom::VolunteerRepository,
    error::AppError,
    strings::stats,
    util::format::get_duration_str,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("stats").description("Get stats about all volunteers.")
}

/// Shows the community-wide totals.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    cmd.reply(stats::GETTING_STATS).await?;

    let summary = match VolunteerRepository::new(&cmd.state.blossom).summary().await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Failed to get the summary: {}", e);
            cmd.edit(EditInteractionResponse::new().content(stats::FAILED))
                .await?;
            return Ok(());
        }
    };

    let embed = CreateEmbed::new().title(stats::EMBED_TITLE).description(
        stats::embed_description(
            summary.volunteer_count,
            summary.transcription_count,
            summary.days_since_inception,
        ),
    );

    cmd.edit(
        EditInteractionResponse::new()
            .content(stats::embed_message(&get_duration_str(start)))
            .embed(embed),
    )
    .await?;

    Ok(())
}
