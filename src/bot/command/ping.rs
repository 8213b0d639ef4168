use serenity::all::{Colour, CreateCommand, CreateEmbed, EditInteractionResponse};
use std::time::Instant;

use crate::{
    bot::command::CommandContext,
    error::{blossom::BlossomError, AppError},
    strings::ping,
    util::format::get_duration_str,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Ping the bot and check the connection to Blossom.")
}

/// Replies with "Pong!", then adds how long a ping of Blossom took.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    cmd.reply(ping::TITLE).await?;

    let server_start = Instant::now();
    let embed = match cmd.state.blossom.ping().await {
        Ok(()) => CreateEmbed::new()
            .title(ping::TITLE)
            .colour(Colour::DARK_GREEN)
            .field(
                ping::SERVER_FIELD,
                ping::server_delay(&get_duration_str(server_start)),
                false,
            ),
        Err(e) => {
            tracing::warn!("Blossom ping failed: {}", e);
            CreateEmbed::new()
                .title(ping::TITLE)
                .colour(Colour::RED)
                .field(ping::SERVER_FIELD, ping::server_error(&error_status(&e)), false)
        }
    };

    cmd.edit(EditInteractionResponse::new().content("").embed(embed))
        .await?;

    Ok(())
}

fn error_status(error: &BlossomError) -> String {
    match error {
        BlossomError::Status { status, .. } => format!("Status code {status}"),
        BlossomError::NotFound { .. } => "Status code 404".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the status shown for a failed ping.
    ///
    /// Verifies that an unexpected status code is reported by its number.
    ///
    /// Expected: "Status code 503"
    #[test]
    fn reports_status_code() {
        let error = BlossomError::Status {
            path: "ping/".to_string(),
            status: 503,
        };

        assert_eq!(error_status(&error), "Status code 503");
    }
}
