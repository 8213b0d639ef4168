use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, EditInteractionResponse};

use crate::{
    bot::command::CommandContext,
    error::AppError,
    service::lookup::{embed::submission_embed, LookupService},
    strings::find,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("find")
        .description("Find a post on Blossom.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "reddit_url",
                "The URL of the ToR post, the partner post or the transcription.",
            )
            .required(true),
        )
}

/// Looks up a submission by any of its Reddit URLs.
///
/// The reply is refined step by step: first the submission, then its volunteer,
/// then its transcription.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let url = cmd.option_str("reddit_url").unwrap_or_default().trim().to_string();
    cmd.reply(find::looking_for_post(&url)).await?;

    let lookup = LookupService::new(&cmd.state.blossom);
    let Some(submission) = lookup.find_submission_by_url(&url).await? else {
        cmd.edit(EditInteractionResponse::new().content(find::not_found(&url)))
            .await?;
        return Ok(());
    };

    cmd.edit(
        EditInteractionResponse::new()
            .content(find::FOUND)
            .embed(submission_embed(&submission, None, &[])),
    )
    .await?;

    let volunteer = lookup.fetch_volunteer(&submission).await?;
    if volunteer.is_some() {
        cmd.edit(
            EditInteractionResponse::new()
                .content(find::FOUND)
                .embed(submission_embed(&submission, volunteer.as_ref(), &[])),
        )
        .await?;
    }

    let transcriptions = lookup.fetch_transcriptions(&submission).await?;
    if !transcriptions.is_empty() {
        cmd.edit(
            EditInteractionResponse::new()
                .content(find::FOUND)
                .embed(submission_embed(&submission, volunteer.as_ref(), &transcriptions)),
        )
        .await?;
    }

    Ok(())
}
