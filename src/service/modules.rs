//! Runtime module toggles.
//!
//! Every feature of the bot belongs to a module. Admins can disable and enable
//! modules with `/unload` and `/load`; events of disabled modules are ignored and
//! their commands are dropped the next time commands are registered.

use std::{collections::HashSet, fmt, str::FromStr};
use tokio::sync::RwLock;

use crate::util::format::join_items_with_and;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Admin,
    Find,
    Heatmap,
    History,
    Leaderboard,
    ModLog,
    NameValidator,
    Ping,
    Progress,
    Queue,
    Restrictor,
    Rules,
    Search,
    Stats,
    Welcome,
}

impl Module {
    pub const ALL: [Module; 15] = [
        Module::Admin,
        Module::Find,
        Module::Heatmap,
        Module::History,
        Module::Leaderboard,
        Module::ModLog,
        Module::NameValidator,
        Module::Ping,
        Module::Progress,
        Module::Queue,
        Module::Restrictor,
        Module::Rules,
        Module::Search,
        Module::Stats,
        Module::Welcome,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Module::Admin => "admin",
            Module::Find => "find",
            Module::Heatmap => "heatmap",
            Module::History => "history",
            Module::Leaderboard => "leaderboard",
            Module::ModLog => "modlog",
            Module::NameValidator => "name_validator",
            Module::Ping => "ping",
            Module::Progress => "progress",
            Module::Queue => "queue",
            Module::Restrictor => "restrictor",
            Module::Rules => "rules",
            Module::Search => "search",
            Module::Stats => "stats",
            Module::Welcome => "welcome",
        }
    }

    /// Slash commands the module provides.
    pub fn commands(self) -> &'static [&'static str] {
        match self {
            Module::Admin => &["load", "unload", "reload"],
            Module::Find => &["find"],
            Module::Heatmap => &["heatmap"],
            Module::History => &["history"],
            Module::Leaderboard => &["leaderboard"],
            Module::Ping => &["ping"],
            Module::Progress => &["progress"],
            Module::Queue => &["queue"],
            Module::Restrictor => &["accept"],
            Module::Rules => &["rules"],
            Module::Search => &["search"],
            Module::Stats => &["stats"],
            Module::ModLog | Module::NameValidator | Module::Welcome => &[],
        }
    }

    /// Finds the module providing the slash command.
    pub fn for_command(command: &str) -> Option<Module> {
        Module::ALL
            .into_iter()
            .find(|module| module.commands().contains(&command))
    }

    /// Whether the module can be disabled; the admin module must stay enabled so
    /// modules can be enabled again.
    pub fn can_unload(self) -> bool {
        self != Module::Admin
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModule(pub String);

impl FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Module::ALL
            .into_iter()
            .find(|module| module.name() == name)
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}

/// Names of all modules, for listing them to the user.
pub fn available_modules() -> String {
    let names: Vec<String> = Module::ALL
        .iter()
        .map(|module| format!("`{module}`"))
        .collect();
    join_items_with_and(&names)
}

/// Result of toggling a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Changed,
    /// The module already was in the requested state.
    Unchanged,
    /// The module can't be disabled.
    Refused,
}

/// The set of enabled modules.
#[derive(Debug)]
pub struct ModuleRegistry {
    enabled: RwLock<HashSet<Module>>,
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self {
            enabled: RwLock::new(Module::ALL.into_iter().collect()),
        }
    }
}

impl ModuleRegistry {
    /// Creates a registry with every module enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_enabled(&self, module: Module) -> bool {
        self.enabled.read().await.contains(&module)
    }

    pub async fn load(&self, module: Module) -> ToggleOutcome {
        if self.enabled.write().await.insert(module) {
            ToggleOutcome::Changed
        } else {
            ToggleOutcome::Unchanged
        }
    }

    pub async fn unload(&self, module: Module) -> ToggleOutcome {
        if !module.can_unload() {
            return ToggleOutcome::Refused;
        }

        if self.enabled.write().await.remove(&module) {
            ToggleOutcome::Changed
        } else {
            ToggleOutcome::Unchanged
        }
    }

    /// Names of the commands of all enabled modules.
    pub async fn enabled_commands(&self) -> Vec<&'static str> {
        let enabled = self.enabled.read().await;
        Module::ALL
            .into_iter()
            .filter(|module| enabled.contains(module))
            .flat_map(|module| module.commands().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_module_names() {
        assert_eq!("queue".parse(), Ok(Module::Queue));
        assert_eq!(" ModLog ".parse(), Ok(Module::ModLog));
        assert_eq!(
            "cogs.queue".parse::<Module>(),
            Err(UnknownModule("cogs.queue".to_string()))
        );
    }

    #[test]
    fn maps_commands_to_modules() {
        assert_eq!(Module::for_command("accept"), Some(Module::Restrictor));
        assert_eq!(Module::for_command("reload"), Some(Module::Admin));
        assert_eq!(Module::for_command("unknown"), None);
    }

    /// Tests disabling and enabling a module.
    ///
    /// Expected: The module's commands disappear and return
    #[tokio::test]
    async fn toggles_module() {
        let registry = ModuleRegistry::new();

        assert_eq!(registry.unload(Module::Queue).await, ToggleOutcome::Changed);
        assert!(!registry.is_enabled(Module::Queue).await);
        assert!(!registry.enabled_commands().await.contains(&"queue"));
        assert_eq!(registry.unload(Module::Queue).await, ToggleOutcome::Unchanged);

        assert_eq!(registry.load(Module::Queue).await, ToggleOutcome::Changed);
        assert!(registry.enabled_commands().await.contains(&"queue"));
    }

    #[tokio::test]
    async fn admin_module_stays_enabled() {
        let registry = ModuleRegistry::new();

        assert_eq!(registry.unload(Module::Admin).await, ToggleOutcome::Refused);
        assert!(registry.is_enabled(Module::Admin).await);
    }
}
