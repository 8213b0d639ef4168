//! Relaying moderation actions to the mod log channel.

use serenity::all::{ChannelId, Http};
use tracing::debug;

use crate::{error::AppError, strings::modlog};

/// A moderation action worth telling the moderators about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModAction {
    Restricted,
    Unrestricted,
    Banned,
    Unbanned,
}

impl ModAction {
    /// Renders the notice for the member.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member, mentioned in the notice
    /// - `name` - Display name of the member, readable even after they left
    pub fn notice(&self, user_id: u64, name: &str) -> String {
        match self {
            ModAction::Restricted => modlog::restricted(user_id, name),
            ModAction::Unrestricted => modlog::unrestricted(user_id, name),
            ModAction::Banned => modlog::banned(user_id, name),
            ModAction::Unbanned => modlog::unbanned(user_id, name),
        }
    }
}

pub struct ModLogService<'a> {
    http: &'a Http,
    /// `None` when no mod log channel is configured or found.
    channel: Option<ChannelId>,
}

impl<'a> ModLogService<'a> {
    pub fn new(http: &'a Http, channel: Option<ChannelId>) -> Self {
        Self { http, channel }
    }

    /// Posts the notice of the action to the mod log channel, if there is one.
    ///
    /// # Returns
    /// - `Ok(true)` - The notice was posted
    /// - `Ok(false)` - There is no mod log channel
    /// - `Err(AppError)` - Posting failed
    pub async fn relay(&self, action: ModAction, user_id: u64, name: &str) -> Result<bool, AppError> {
        let Some(channel) = self.channel else {
            debug!(?action, user_id, "No mod log channel, dropping notice");
            return Ok(false);
        };

        channel.say(self.http, action.notice(user_id, name)).await?;

        Ok(true)
    }
}
