use serenity::all::CreateCommand;

use crate::{
    bot::command::CommandContext,
    error::AppError,
    service::{
        modules::Module,
        restrictor::{MemberSnapshot, RestrictorService},
    },
    strings::{errors, restrictor},
};

pub fn register() -> CreateCommand {
    CreateCommand::new("accept").description("Accept the Code of Conduct.")
}

/// Records that the member accepted the Code of Conduct.
///
/// The restrictor then lifts the restriction if the nickname is correct too.
pub async fn run(cmd: &CommandContext<'_>) -> Result<(), AppError> {
    let (Some(guild_id), Some(member)) = (cmd.command.guild_id, cmd.command.member.as_deref()) else {
        return Err(AppError::BadRequest(errors::NOT_IN_GUILD.to_string()));
    };

    let setup = cmd.guild_setup()?;
    let snapshot = MemberSnapshot::from_member(member, setup.restrict_role);
    cmd.reply_ephemeral(restrictor::ACCEPT_ACKNOWLEDGED).await?;

    let changes = cmd.state.members.accept(&snapshot).await;
    let relay = cmd.state.modules.is_enabled(Module::ModLog).await;

    RestrictorService::new(&cmd.ctx.http, guild_id, &setup, relay)
        .handle_changes(&snapshot, &changes)
        .await
}
