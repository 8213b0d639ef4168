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
    service::chart::heatmap::{build_grid, busiest_slots, render_heatmap},
    strings::heatmap,
    util::{
        format::{get_duration_str, get_username},
        parse::{extract_utc_offset, utc_offset_to_str},
    },
};

const ATTACHMENT_NAME: &str = "heatmap.png";

pub fn register() -> CreateCommand {
    CreateCommand::new("heatmap")
        .description("Show the activity of a volunteer by weekday and hour.")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "username",
            "The user to show the heatmap of, yourself by default.",
        ))
}

/// Shows when the volunteer transcribes, in the invoking user's timezone.
///
/// The timezone is taken from a `UTC+X` in the author's display name. Without a
/// chart font the busiest slots are listed instead of the image.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    let username = cmd.username_or_author("username")?;
    cmd.reply(heatmap::getting_heatmap(&username)).await?;

    let volunteer = cmd.find_volunteer(&username).await?;
    let entries = VolunteerRepository::new(&cmd.state.blossom)
        .heatmap(volunteer.id)
        .await?;

    let utc_offset = extract_utc_offset(&cmd.author_display_name());
    let grid = build_grid(&entries, utc_offset);
    let joined_days = (Utc::now() - volunteer.date_joined).num_days();
    let description = heatmap::embed_description(&utc_offset_to_str(utc_offset), joined_days);

    let embed = CreateEmbed::new()
        .title(heatmap::embed_title(&get_username(Some(&volunteer))))
        .colour(rank_colour(volunteer.gamma));
    let response = EditInteractionResponse::new()
        .content(heatmap::embed_message(&get_duration_str(start)));

    let response = match render_heatmap(&grid) {
        Ok(png) => response
            .embed(
                embed
                    .description(description)
                    .image(format!("attachment://{ATTACHMENT_NAME}")),
            )
            .new_attachment(CreateAttachment::bytes(png, ATTACHMENT_NAME)),
        Err(ChartError::FontUnavailable) => {
            let fallback = heatmap::text_fallback(&busiest_slots(&grid));
            response.embed(embed.description(format!("{description}\n\n{fallback}")))
        }
        Err(e) => return Err(e.into()),
    };

    cmd.edit(response).await?;

    Ok(())
}
