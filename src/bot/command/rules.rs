use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed, EditInteractionResponse,
};
use std::time::Instant;

use crate::{
    bot::command::CommandContext,
    error::{reddit::RedditError, AppError},
    model::rules::SubredditRule,
    strings::rules,
    util::{
        format::{get_duration_str, limit_str},
        parse::extract_sub_name,
    },
};

/// Discord allows at most 25 fields per embed.
const MAX_RULES: usize = 25;
const FIELD_NAME_LIMIT: usize = 256;
const FIELD_VALUE_LIMIT: usize = 1024;

pub fn register() -> CreateCommand {
    CreateCommand::new("rules")
        .description("Get the rules of a subreddit.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "subreddit",
                "The subreddit to get the rules of, e.g. r/TranscribersOfReddit.",
            )
            .required(true),
        )
}

/// Shows the rules of the subreddit, one embed field per rule.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let start = Instant::now();
    let sub_name = extract_sub_name(cmd.option_str("subreddit").unwrap_or_default()).to_string();
    cmd.reply(rules::getting_rules(&sub_name)).await?;

    let sub_rules = match cmd.state.reddit.subreddit_rules(&sub_name).await {
        Ok(sub_rules) => sub_rules,
        Err(RedditError::SubredditNotFound(_)) => {
            cmd.edit(EditInteractionResponse::new().content(rules::sub_not_found(&sub_name)))
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if sub_rules.is_empty() {
        cmd.edit(EditInteractionResponse::new().content(rules::no_rules(&sub_name)))
            .await?;
        return Ok(());
    }

    cmd.edit(
        EditInteractionResponse::new()
            .content(rules::embed_message(&get_duration_str(start)))
            .embed(rules_embed(&sub_name, &sub_rules)),
    )
    .await?;

    Ok(())
}

fn rules_embed(sub_name: &str, sub_rules: &[SubredditRule]) -> CreateEmbed {
    let fields = sub_rules.iter().take(MAX_RULES).enumerate().map(|(i, rule)| {
        let name = limit_str(&format!("{}. {}", i + 1, rule.short_name), FIELD_NAME_LIMIT);
        let value = if rule.description.trim().is_empty() {
            "-".to_string()
        } else {
            limit_str(rule.description.trim(), FIELD_VALUE_LIMIT)
        };
        (name, value, false)
    });

    CreateEmbed::new()
        .title(rules::embed_title(sub_name))
        .url(format!("https://reddit.com/r/{sub_name}/about/rules"))
        .fields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(short_name: &str, description: &str) -> SubredditRule {
        SubredditRule {
            short_name: short_name.to_string(),
            description: description.to_string(),
        }
    }

    /// Tests the rules embed.
    ///
    /// Verifies that rules are numbered and empty descriptions get a placeholder.
    ///
    /// Expected: two fields "1. Be nice" and "2. No spam" with "-" as second value
    #[test]
    fn numbers_rules() {
        let embed = rules_embed("test", &[rule("Be nice", "Please."), rule("No spam", "  ")]);
        let json = serde_json::to_value(embed).unwrap();

        assert_eq!(json["title"], "Rules of r/test");
        assert_eq!(json["fields"][0]["name"], "1. Be nice");
        assert_eq!(json["fields"][0]["value"], "Please.");
        assert_eq!(json["fields"][1]["name"], "2. No spam");
        assert_eq!(json["fields"][1]["value"], "-");
    }

    /// Tests that only as many rules as an embed can hold are shown.
    #[test]
    fn caps_rule_count() {
        let many: Vec<_> = (0..30).map(|i| rule(&format!("Rule {i}"), "x")).collect();
        let json = serde_json::to_value(rules_embed("test", &many)).unwrap();

        assert_eq!(json["fields"].as_array().unwrap().len(), MAX_RULES);
    }
}
