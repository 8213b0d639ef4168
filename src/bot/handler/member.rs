use serenity::all::{Context, GuildMemberUpdateEvent, Member};

use crate::{
    bot::handler::{guild_setup, module_enabled},
    error::AppError,
    service::{
        modules::Module,
        restrictor::{MemberSnapshot, RestrictorService},
    },
    state::AppState,
    strings::welcome,
};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Welcomes the member in the guild's system channel and lets the restrictor
/// create their record, restricting them if they are new.
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    let setup = guild_setup(state, &ctx, new_member.guild_id);

    if module_enabled(state, Module::Welcome).await {
        if let Some(channel) = setup.system_channel {
            let message = welcome::welcome(new_member.display_name());
            if let Err(e) = channel.say(&ctx.http, message).await {
                tracing::error!("Failed to welcome member {}: {:?}", new_member.user.id, e);
            }
        }
    }

    if !module_enabled(state, Module::Restrictor).await {
        return;
    }

    let snapshot = MemberSnapshot::from_member(&new_member, setup.restrict_role);
    let changes = state.members.join(&snapshot).await;
    let relay = module_enabled(state, Module::ModLog).await;

    if let Err(e) = RestrictorService::new(&ctx.http, new_member.guild_id, &setup, relay)
        .handle_changes(&snapshot, &changes)
        .await
    {
        tracing::error!("Failed to restrict new member {}: {}", new_member.user.id, e);
    }
}

/// Handles the guild_member_update event when a member's profile changes
///
/// Logs display name changes and lets the restrictor refresh the member's record.
pub async fn handle_guild_member_update(
    state: &AppState,
    ctx: Context,
    old: Option<Member>,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let member = match new {
        Some(member) => member,
        None => match fetch_member(&ctx, &event).await {
            Ok(member) => member,
            Err(e) => {
                tracing::error!("Failed to fetch updated member {}: {}", event.user.id, e);
                return;
            }
        },
    };

    if module_enabled(state, Module::NameValidator).await {
        if let Some(old) = &old {
            if old.display_name() != member.display_name() {
                tracing::info!(
                    "Display name changed from {} to {}",
                    old.display_name(),
                    member.display_name()
                );
            }
        }
    }

    if !module_enabled(state, Module::Restrictor).await {
        return;
    }

    let setup = guild_setup(state, &ctx, member.guild_id);
    let snapshot = MemberSnapshot::from_member(&member, setup.restrict_role);
    let changes = state.members.update(&snapshot).await;
    let relay = module_enabled(state, Module::ModLog).await;

    if let Err(e) = RestrictorService::new(&ctx.http, member.guild_id, &setup, relay)
        .handle_changes(&snapshot, &changes)
        .await
    {
        tracing::error!("Failed to handle update of member {}: {}", member.user.id, e);
    }
}

/// Fetches the member from the API when the update wasn't cached.
async fn fetch_member(ctx: &Context, event: &GuildMemberUpdateEvent) -> Result<Member, AppError> {
    Ok(event.guild_id.member(&ctx.http, event.user.id).await?)
}
