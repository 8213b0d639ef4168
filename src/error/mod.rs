//! Error types and user-facing error messages.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps the error types of every external
//! collaborator (Discord, Blossom, Reddit) and of the bot's own helpers. Command
//! handlers return `Result<(), AppError>`; the interaction handler logs failures
//! and turns them into a short message for the invoking user via
//! [`AppError::user_message`].

pub mod blossom;
pub mod chart;
pub mod config;
pub mod reddit;
pub mod time;

use thiserror::Error;

use crate::error::{
    blossom::BlossomError, chart::ChartError, config::ConfigError, reddit::RedditError,
    time::TimeParseError,
};
use crate::strings::errors;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur while handling events and
/// commands. Most variants use `#[from]` for automatic conversion so handlers can
/// use `?` on any collaborator call.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Blossom API error.
    #[error(transparent)]
    BlossomErr(#[from] BlossomError),

    /// Reddit API error.
    #[error(transparent)]
    RedditErr(#[from] RedditError),

    /// Chart rendering error.
    #[error(transparent)]
    ChartErr(#[from] ChartError),

    /// A time constraint given as a command option couldn't be parsed.
    #[error(transparent)]
    TimeErr(#[from] TimeParseError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The invoking member lacks the role required by the command.
    #[error("Member is not authorized to use this command")]
    NotAuthorized,

    /// The invoking member's display name doesn't follow the `/u/<username>` convention.
    ///
    /// # Fields
    /// - The display name that failed to parse
    #[error("Invalid username in display name '{0}'")]
    InvalidUsername(String),

    /// A Blossom volunteer with the given username doesn't exist.
    #[error("User u/{0} not found")]
    UserNotFound(String),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message describing what was invalid, shown to the user as-is
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message, logged but not shown to the user.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Name of the error variant, for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigErr(_) => "ConfigErr",
            Self::BlossomErr(_) => "BlossomErr",
            Self::RedditErr(_) => "RedditErr",
            Self::ChartErr(_) => "ChartErr",
            Self::TimeErr(_) => "TimeErr",
            Self::DiscordErr(_) => "DiscordErr",
            Self::SchedulerErr(_) => "SchedulerErr",
            Self::NotAuthorized => "NotAuthorized",
            Self::InvalidUsername(_) => "InvalidUsername",
            Self::UserNotFound(_) => "UserNotFound",
            Self::BadRequest(_) => "BadRequest",
            Self::InternalError(_) => "InternalError",
        }
    }

    /// Converts the error into the message shown to the invoking Discord user.
    ///
    /// Authorization failures and input errors get specific messages; every other
    /// error gets a generic message so internal details are only visible in logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAuthorized => errors::NOT_AUTHORIZED.to_string(),
            Self::InvalidUsername(display_name) => errors::invalid_username(display_name),
            Self::UserNotFound(username) => errors::user_not_found(username),
            Self::TimeErr(err) => errors::invalid_time(&err.to_string()),
            Self::BadRequest(msg) => msg.clone(),
            _ => errors::GENERIC.to_string(),
        }
    }
}
