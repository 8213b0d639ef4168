use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed, EditInteractionResponse,
};
use std::time::Instant;

use crate::{
    bot::command::{rank_colour, CommandContext},
    data::blossom::SubmissionRepository,
    error::AppError,
    model::leaderboard::{Leaderboard, LeaderboardEntry},
    strings::leaderboard,
    util::format::{escape_formatting, get_duration_str, get_username},
};

const TOP_COUNT: u32 = 5;
const CONTEXT_COUNT: u32 = 5;

pub fn register() -> CreateCommand {
    CreateCommand::new("leaderboard")
        .description("Show the leaderboard around a volunteer.")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "username",
            "The user to show the leaderboard for, yourself by default.",
        ))
}

/// Shows the top volunteers and the neighbours of the volunteer.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    let username = cmd.username_or_author("username")?;
    cmd.reply(leaderboard::getting_leaderboard(&username)).await?;

    let volunteer = cmd.find_volunteer(&username).await?;
    let board = SubmissionRepository::new(&cmd.state.blossom)
        .leaderboard(volunteer.id, TOP_COUNT, CONTEXT_COUNT, CONTEXT_COUNT)
        .await?;

    let embed = CreateEmbed::new()
        .title(leaderboard::embed_title(&get_username(Some(&volunteer))))
        .colour(rank_colour(volunteer.gamma))
        .description(leaderboard_description(&board));

    cmd.edit(
        EditInteractionResponse::new()
            .content(leaderboard::embed_message(&get_duration_str(start)))
            .embed(embed),
    )
    .await?;

    Ok(())
}

fn format_entry(entry: &LeaderboardEntry) -> String {
    let username = format!("u/{}", escape_formatting(&entry.username));
    leaderboard::entry(entry.rank, &username, entry.gamma)
}

/// Lists the top volunteers, then the neighbourhood of the user in bold.
///
/// Neighbours already listed at the top are skipped, and a gap marks ranks left
/// out between both parts.
fn leaderboard_description(board: &Leaderboard) -> String {
    let mut lines: Vec<String> = board.top.iter().map(format_entry).collect();
    let last_top_rank = board.top.last().map(|entry| entry.rank).unwrap_or(0);

    let neighbourhood: Vec<&LeaderboardEntry> = board
        .above
        .iter()
        .chain(std::iter::once(&board.user))
        .chain(board.below.iter())
        .filter(|entry| entry.rank > last_top_rank)
        .collect();

    if let Some(first) = neighbourhood.first() {
        if !board.top.is_empty() && first.rank > last_top_rank + 1 {
            lines.push(leaderboard::GAP.to_string());
        }
    }

    for entry in neighbourhood {
        if entry.id == board.user.id {
            lines.push(format!("**{}**", format_entry(entry)));
        } else {
            lines.push(format_entry(entry));
        }
    }

    if board.user.rank <= last_top_rank {
        if let Some(line) = board
            .top
            .iter()
            .position(|entry| entry.id == board.user.id)
            .and_then(|index| lines.get_mut(index))
        {
            *line = format!("**{line}**");
        }
    }

    lines.join("\n")
}
