use chrono::Utc;
use serenity::all::{
    CommandOptionType, CreateAttachment, CreateCommand, CreateCommandOption, CreateEmbed,
    EditInteractionResponse,
};
use std::time::Instant;

use crate::{
    bot::command::{rank_colour, CommandContext},
    data::blossom::VolunteerRepository,
    error::{chart::ChartError, AppError},
    service::chart::history::{build_history, render_history},
    strings::history,
    util::{
        format::{get_duration_str, get_username},
        time::parse_time_constraints,
    },
};

const ATTACHMENT_NAME: &str = "history.png";

pub fn register() -> CreateCommand {
    CreateCommand::new("history")
        .description("Show the gamma history of a volunteer.")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "username",
            "The user to show the history of, yourself by default.",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "after",
            "Start of the time frame, e.g. `2 weeks ago` or `2021-09-13`.",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "before",
            "End of the time frame, e.g. `1 day ago`, `2021-09-13 12:00` or `now`.",
        ))
}

/// Draws the volunteer's gamma over time.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    let username = cmd.username_or_author("username")?;
    let (after, before, time_str) =
        parse_time_constraints(cmd.option_str("after"), cmd.option_str("before"), Utc::now())?;
    cmd.reply(history::getting_history(&username, &time_str)).await?;

    let volunteer = cmd.find_volunteer(&username).await?;
    let rates = VolunteerRepository::new(&cmd.state.blossom)
        .rate(volunteer.id, after, None)
        .await?;
    let points = build_history(volunteer.gamma, &rates, after, before);

    let joined_days = (Utc::now() - volunteer.date_joined).num_days();
    let description =
        history::embed_description(&volunteer.username, volunteer.gamma, joined_days, &time_str);
    let embed = CreateEmbed::new()
        .title(history::embed_title(&get_username(Some(&volunteer))))
        .colour(rank_colour(volunteer.gamma));
    let response = EditInteractionResponse::new()
        .content(history::embed_message(&get_duration_str(start)));

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        cmd.edit(response.embed(embed.description(format!("{description}\n\n{}", history::NO_HISTORY))))
            .await?;
        return Ok(());
    };

    let response = match render_history(&points, &history::embed_title(&format!("u/{}", volunteer.username))) {
        Ok(png) => response
            .embed(
                embed
                    .description(description)
                    .image(format!("attachment://{ATTACHMENT_NAME}")),
            )
            .new_attachment(CreateAttachment::bytes(png, ATTACHMENT_NAME)),
        Err(ChartError::FontUnavailable) => {
            let fallback = history::text_fallback(first.gamma, last.gamma);
            response.embed(embed.description(format!("{description}\n\n{fallback}")))
        }
        Err(e) => return Err(e.into()),
    };

    cmd.edit(response).await?;

    Ok(())
}
