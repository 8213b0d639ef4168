use crate::error::{config::ConfigError, AppError};

const DEFAULT_BLOSSOM_API_URL: &str = "https://grafeas.org/api/";
const DEFAULT_REDDIT_USER_AGENT: &str = "buttercup (by /u/transcribersofreddit)";
const DEFAULT_CHART_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Bot configuration loaded from the environment.
pub struct Config {
    pub discord_bot_token: String,
    /// Guild to register slash commands in; global registration when unset.
    pub discord_guild_id: Option<u64>,

    pub blossom_api_url: String,
    pub blossom_email: String,
    pub blossom_password: String,
    pub blossom_api_key: String,

    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,

    pub roles: RoleConfig,
    pub channels: ChannelConfig,

    pub chart_font_path: String,
}

/// Names of the guild roles the bot manages or checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleConfig {
    /// Role allowed to use the admin commands.
    pub admin: String,
    /// Role given to members who don't comply with the server rules yet.
    pub restrict: String,
    /// Role given to members the first time their restriction is lifted.
    pub accepted: String,
}

/// Names of the guild channels the bot posts to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    /// Channel restricted members can see.
    pub restrict: String,
    /// Channel compliant members are greeted in.
    pub welcome: String,
    /// Channel moderation actions are relayed to, if any.
    pub mod_log: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_guild_id = match std::env::var("DISCORD_GUILD_ID") {
            Ok(value) if !value.trim().is_empty() => Some(value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "DISCORD_GUILD_ID".to_string(),
                value,
            })?),
            _ => None,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id,
            blossom_api_url: optional("BLOSSOM_API_URL", DEFAULT_BLOSSOM_API_URL),
            blossom_email: required("BLOSSOM_EMAIL")?,
            blossom_password: required("BLOSSOM_PASSWORD")?,
            blossom_api_key: required("BLOSSOM_API_KEY")?,
            reddit_client_id: required("REDDIT_CLIENT_ID")?,
            reddit_client_secret: required("REDDIT_CLIENT_SECRET")?,
            reddit_user_agent: optional("REDDIT_USER_AGENT", DEFAULT_REDDIT_USER_AGENT),
            roles: RoleConfig {
                admin: optional("ADMIN_ROLE", "ToR Mods"),
                restrict: optional("RESTRICT_ROLE", "New User"),
                accepted: optional("ACCEPTED_ROLE", "Visitor (0)"),
            },
            channels: ChannelConfig {
                restrict: optional("RESTRICT_CHANNEL", "new-user"),
                welcome: optional("WELCOME_CHANNEL", "off-topic"),
                mod_log: std::env::var("MOD_LOG_CHANNEL")
                    .ok()
                    .filter(|name| !name.trim().is_empty()),
            },
            chart_font_path: optional("CHART_FONT_PATH", DEFAULT_CHART_FONT_PATH),
        })
    }
}

/// Value of the environment variable, unless unset or blank.
fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required(name: &str) -> Result<String, ConfigError> {
    non_empty(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    non_empty(name).unwrap_or_else(|| default.to_string())
}
