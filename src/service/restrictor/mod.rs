//! Enforcement of the display-name convention and the Code of Conduct.
//!
//! New members are restricted until they accepted the Code of Conduct and set a
//! nickname of the form `/u/<username>`. The restrictor keeps a record per member
//! and acts whenever a record changes: [`plan`] turns the change into actions,
//! [`RestrictorService`] carries them out.

pub mod records;

use serenity::all::{GuildId, Http, UserId};
use tracing::{info, warn};

use crate::{
    error::AppError,
    model::member::MemberRecord,
    service::{
        discord::GuildSetup,
        modlog::{ModAction, ModLogService},
    },
    strings::restrictor,
};

pub use records::{MemberRecords, MemberSnapshot, RecordChange};

/// Prefix members commonly use by mistake instead of `/u/`.
const WRONG_PREFIX: &str = "u/";

/// Channel a restrictor message is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageChannel {
    Welcome,
    Restrict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictorMessage {
    NewMember,
    NewLifted,
    CocAccepted,
    CorrectNick,
    WrongPrefix,
    WrongNick,
}

impl RestrictorMessage {
    pub fn render(self, user_id: u64) -> String {
        match self {
            RestrictorMessage::NewMember => restrictor::new_member(user_id),
            RestrictorMessage::NewLifted => restrictor::new_lifted(user_id),
            RestrictorMessage::CocAccepted => restrictor::coc_accepted(user_id),
            RestrictorMessage::CorrectNick => restrictor::correct_nick(user_id),
            RestrictorMessage::WrongPrefix => restrictor::wrong_prefix(user_id),
            RestrictorMessage::WrongNick => restrictor::wrong_nick(user_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictorAction {
    Restrict,
    Unrestrict,
    GrantAcceptedRole,
    Send(MessageChannel, RestrictorMessage),
}

/// Determines the actions for a changed member record.
///
/// # Arguments
/// - `old` - The record before the change, `None` when it was just created
/// - `new` - The record after the change
/// - `first_time_user` - The member holds no role except the restrict role
///
/// # Returns
/// - The actions in the order they are carried out
pub fn plan(old: Option<&MemberRecord>, new: &MemberRecord, first_time_user: bool) -> Vec<RestrictorAction> {
    use RestrictorAction::*;

    let channel = if new.compliant() {
        MessageChannel::Welcome
    } else {
        MessageChannel::Restrict
    };

    if old.is_none() && new.new_user() {
        return vec![Restrict, Send(channel, RestrictorMessage::NewMember)];
    }

    let mut actions = Vec::new();

    if new.restricted && new.compliant() {
        actions.push(Unrestrict);
        if first_time_user {
            actions.push(Send(channel, RestrictorMessage::NewLifted));
            actions.push(GrantAcceptedRole);
        }
    }
    if !new.restricted && !new.compliant() {
        actions.push(Restrict);
    }

    if let Some(old) = old {
        if old.coc != new.coc {
            actions.push(Send(channel, RestrictorMessage::CocAccepted));
        }

        if let Some(nickname) = &new.nickname {
            if old.nickname.as_ref() != Some(nickname) {
                let message = if new.correct_nickname() {
                    RestrictorMessage::CorrectNick
                } else if nickname.starts_with(WRONG_PREFIX) {
                    RestrictorMessage::WrongPrefix
                } else {
                    RestrictorMessage::WrongNick
                };
                actions.push(Send(channel, message));
            }
        }
    }

    actions
}

/// Carries out restrictor actions for a member of the guild.
pub struct RestrictorService<'a> {
    http: &'a Http,
    guild_id: GuildId,
    setup: &'a GuildSetup,
    /// Whether restrictions are relayed to the mod log.
    relay_to_mod_log: bool,
}

impl<'a> RestrictorService<'a> {
    pub fn new(http: &'a Http, guild_id: GuildId, setup: &'a GuildSetup, relay_to_mod_log: bool) -> Self {
        Self {
            http,
            guild_id,
            setup,
            relay_to_mod_log,
        }
    }

    /// Plans and carries out the actions for each record change of the member.
    ///
    /// # Arguments
    /// - `member` - The member the records belong to
    /// - `changes` - Record changes in the order they happened
    pub async fn handle_changes(&self, member: &MemberSnapshot, changes: &[RecordChange]) -> Result<(), AppError> {
        for change in changes {
            let actions = plan(change.old.as_ref(), &change.new, member.first_time_user);
            for action in actions {
                self.execute(member, action).await?;
            }
        }

        Ok(())
    }

    async fn execute(&self, member: &MemberSnapshot, action: RestrictorAction) -> Result<(), AppError> {
        let user_id = UserId::new(member.user_id);

        match action {
            RestrictorAction::Restrict => {
                let Some(role) = self.setup.restrict_role else {
                    warn!(user_id = member.user_id, "Restrict role not found, can't restrict member");
                    return Ok(());
                };
                self.http
                    .add_member_role(self.guild_id, user_id, role, Some("Member is not compliant"))
                    .await?;
                info!(user_id = member.user_id, "Restricted member");
                self.relay(ModAction::Restricted, member).await?;
            }
            RestrictorAction::Unrestrict => {
                let Some(role) = self.setup.restrict_role else {
                    warn!(user_id = member.user_id, "Restrict role not found, can't unrestrict member");
                    return Ok(());
                };
                self.http
                    .remove_member_role(self.guild_id, user_id, role, Some("Member is compliant"))
                    .await?;
                info!(user_id = member.user_id, "Unrestricted member");
                self.relay(ModAction::Unrestricted, member).await?;
            }
            RestrictorAction::GrantAcceptedRole => {
                let Some(role) = self.setup.accepted_role else {
                    warn!(user_id = member.user_id, "Accepted role not found");
                    return Ok(());
                };
                self.http
                    .add_member_role(self.guild_id, user_id, role, Some("First time unrestricted"))
                    .await?;
            }
            RestrictorAction::Send(channel, message) => {
                let channel_id = match channel {
                    MessageChannel::Welcome => self.setup.welcome_channel,
                    MessageChannel::Restrict => self.setup.restrict_channel,
                };
                let Some(channel_id) = channel_id else {
                    warn!(?channel, ?message, "Restrictor channel not found, dropping message");
                    return Ok(());
                };
                channel_id
                    .say(self.http, message.render(member.user_id))
                    .await?;
            }
        }

        Ok(())
    }

    async fn relay(&self, action: ModAction, member: &MemberSnapshot) -> Result<(), AppError> {
        if !self.relay_to_mod_log {
            return Ok(());
        }

        ModLogService::new(self.http, self.setup.mod_log_channel)
            .relay(action, member.user_id, &member.display_name)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RestrictorAction::*;

    fn record(nickname: Option<&str>, coc: bool, restricted: bool) -> MemberRecord {
        MemberRecord {
            nickname: nickname.map(str::to_string),
            coc,
            restricted,
        }
    }

    #[test]
    fn new_user_is_restricted() {
        let actions = plan(None, &record(None, false, false), true);

        assert_eq!(
            actions,
            vec![
                Restrict,
                Send(MessageChannel::Restrict, RestrictorMessage::NewMember)
            ]
        );
    }

    /// Tests a restricted first-time member becoming compliant.
    ///
    /// Expected: Restriction lifted, welcome message and accepted role
    #[test]
    fn compliant_first_time_user_is_unrestricted() {
        let old = record(Some("/u/spez"), false, true);
        let new = record(Some("/u/spez"), true, true);

        let actions = plan(Some(&old), &new, true);

        assert_eq!(
            actions,
            vec![
                Unrestrict,
                Send(MessageChannel::Welcome, RestrictorMessage::NewLifted),
                GrantAcceptedRole,
                Send(MessageChannel::Welcome, RestrictorMessage::CocAccepted),
            ]
        );
    }

    #[test]
    fn returning_user_is_unrestricted_quietly() {
        let old = record(Some("spez"), true, true);
        let new = record(Some("/u/spez"), true, true);

        let actions = plan(Some(&old), &new, false);

        assert_eq!(
            actions,
            vec![
                Unrestrict,
                Send(MessageChannel::Welcome, RestrictorMessage::CorrectNick)
            ]
        );
    }

    /// Tests an unrestricted member changing to a nickname with the wrong prefix.
    ///
    /// Expected: The member is restricted and told about the `/u/` prefix
    #[test]
    fn wrong_prefix_restricts_member() {
        let old = record(Some("/u/spez"), true, false);
        let new = record(Some("u/spez"), true, false);

        let actions = plan(Some(&old), &new, false);

        assert_eq!(
            actions,
            vec![
                Restrict,
                Send(MessageChannel::Restrict, RestrictorMessage::WrongPrefix)
            ]
        );
    }

    #[test]
    fn wrong_nickname_is_explained() {
        let old = record(None, false, true);
        let new = record(Some("spez"), false, true);

        let actions = plan(Some(&old), &new, true);

        assert_eq!(
            actions,
            vec![Send(MessageChannel::Restrict, RestrictorMessage::WrongNick)]
        );
    }

    /// Tests a newly created record of a member who is already compliant.
    ///
    /// Expected: No actions
    #[test]
    fn existing_compliant_member_is_left_alone() {
        let actions = plan(None, &record(Some("/u/spez"), true, false), false);

        assert!(actions.is_empty());
    }

    #[test]
    fn removed_nickname_sends_nothing() {
        let old = record(Some("/u/spez"), true, false);
        let new = record(None, true, false);

        assert_eq!(plan(Some(&old), &new, false), vec![Restrict]);
    }
}
