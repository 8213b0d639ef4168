//! Module management: `/load`, `/unload` and `/reload`.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

use crate::{
    bot::command::{register_commands, CommandContext},
    error::AppError,
    service::modules::{available_modules, Module, ModuleRegistry, ToggleOutcome},
    strings::admin,
};

pub fn register() -> Vec<CreateCommand> {
    [
        ("load", "Enable a module."),
        ("unload", "Disable a module."),
        ("reload", "Disable and enable a module again."),
    ]
    .into_iter()
    .map(|(name, description)| {
        CreateCommand::new(name)
            .description(description)
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "module", "Name of the module.")
                    .required(true),
            )
    })
    .collect()
}

/// Toggles a module and registers the commands of the enabled modules again.
///
/// Only members with the admin role may use it.
pub async fn run(cmd: &CommandContext<'_>, name: &str) -> Result<(), AppError> {
    let setup = cmd.guild_setup()?;
    let is_admin = match (&cmd.command.member, setup.admin_role) {
        (Some(member), Some(admin_role)) => member.roles.contains(&admin_role),
        _ => false,
    };
    if !is_admin {
        return Err(AppError::NotAuthorized);
    }

    let module_name = cmd.option_str("module").unwrap_or_default();
    let module: Module = module_name.parse().map_err(|_| {
        AppError::BadRequest(admin::unknown_module(module_name, &available_modules()))
    })?;

    let message = toggle(&cmd.state.modules, name, module).await;
    if let Some(message) = message {
        tracing::info!(command = name, %module, "Module toggled");
        cmd.reply(message).await?;
        let count = register_commands(cmd.state, &cmd.ctx.http).await?;
        tracing::debug!("Registered {} slash commands", count);
    } else {
        cmd.reply_ephemeral(admin::cannot_unload(module.name())).await?;
    }

    Ok(())
}

/// Carries out the toggle, returning the confirmation or `None` if refused.
async fn toggle(modules: &ModuleRegistry, name: &str, module: Module) -> Option<String> {
    match name {
        "load" => {
            modules.load(module).await;
            Some(admin::loaded(module.name()))
        }
        "unload" => match modules.unload(module).await {
            ToggleOutcome::Refused => None,
            ToggleOutcome::Changed | ToggleOutcome::Unchanged => Some(admin::unloaded(module.name())),
        },
        _ => {
            if module.can_unload() {
                modules.unload(module).await;
            }
            modules.load(module).await;
            Some(admin::reloaded(module.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests unloading a module through the admin command.
    ///
    /// Verifies that the module is disabled and the confirmation names it.
    ///
    /// Expected: the stats module is disabled
    #[tokio::test]
    async fn unloads_module() {
        let modules = ModuleRegistry::new();

        let message = toggle(&modules, "unload", Module::Stats).await;

        assert_eq!(message.as_deref(), Some(admin::unloaded("stats").as_str()));
        assert!(!modules.is_enabled(Module::Stats).await);
    }

    /// Tests that the admin module can't be unloaded.
    ///
    /// Expected: no confirmation and the admin module stays enabled
    #[tokio::test]
    async fn refuses_to_unload_admin() {
        let modules = ModuleRegistry::new();

        assert_eq!(toggle(&modules, "unload", Module::Admin).await, None);
        assert!(modules.is_enabled(Module::Admin).await);
    }

    /// Tests reloading a disabled module.
    ///
    /// Expected: the module is enabled afterwards
    #[tokio::test]
    async fn reload_enables_module() {
        let modules = ModuleRegistry::new();
        modules.unload(Module::Queue).await;

        let message = toggle(&modules, "reload", Module::Queue).await;

        assert_eq!(message.as_deref(), Some(admin::reloaded("queue").as_str()));
        assert!(modules.is_enabled(Module::Queue).await);
    }
}
