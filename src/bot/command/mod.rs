//! Slash commands.
//!
//! Every command lives in its own module with a `register` function building the
//! command definition and a `run` function handling an invocation. Commands of
//! disabled modules are neither registered nor run.

pub mod accept;
pub mod admin;
pub mod find;
pub mod heatmap;
pub mod history;
pub mod leaderboard;
pub mod ping;
pub mod progress;
pub mod queue;
pub mod rules;
pub mod search;
pub mod stats;

use serenity::all::{
    Colour, Command, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, GuildId, Message, ResolvedValue,
};
use serenity::http::Http;
use std::time::Instant;

use crate::{
    bot::handler::guild_setup,
    data::blossom::VolunteerRepository,
    error::AppError,
    model::volunteer::Volunteer,
    service::{discord::GuildSetup, modules::Module},
    state::AppState,
    strings::errors,
    util::{
        format::{get_rank, get_rgb_from_hex},
        parse::{extract_username, username_from_display_name},
    },
};

/// A slash command invocation with everything its handler needs.
pub struct CommandContext<'a> {
    pub ctx: &'a Context,
    pub command: &'a CommandInteraction,
    pub state: &'a AppState,
}

impl<'a> CommandContext<'a> {
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction, state: &'a AppState) -> Self {
        Self { ctx, command, state }
    }

    /// Gets the value of a string option, if given.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.command
            .data
            .options
            .iter()
            .find(|option| option.name == name)
            .and_then(|option| option.value.as_str())
    }

    /// Display name of the invoking user, their server nickname when invoked in a guild.
    pub fn author_display_name(&self) -> String {
        match &self.command.member {
            Some(member) => member.display_name().to_string(),
            None => self.command.user.display_name().to_string(),
        }
    }

    /// Determines the Reddit username a command is about.
    ///
    /// # Arguments
    /// - `option` - Name of the optional `username` option
    ///
    /// # Returns
    /// - `Ok(String)` - The username given as option, else the one in the author's display name
    /// - `Err(AppError::InvalidUsername)` - No option given and the display name isn't `/u/<username>`
    pub fn username_or_author(&self, option: &str) -> Result<String, AppError> {
        if let Some(username) = self.option_str(option).and_then(extract_username) {
            return Ok(username);
        }

        let display_name = self.author_display_name();
        username_from_display_name(&display_name).ok_or(AppError::InvalidUsername(display_name))
    }

    /// Finds the Blossom volunteer with the given username.
    ///
    /// # Returns
    /// - `Ok(Volunteer)` - The volunteer exists
    /// - `Err(AppError::UserNotFound)` - No volunteer with this username
    pub async fn find_volunteer(&self, username: &str) -> Result<Volunteer, AppError> {
        VolunteerRepository::new(&self.state.blossom)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))
    }

    /// Roles and channels of the guild the command was invoked in.
    pub fn guild_setup(&self) -> Result<GuildSetup, AppError> {
        let guild_id = self
            .command
            .guild_id
            .ok_or_else(|| AppError::BadRequest(errors::NOT_IN_GUILD.to_string()))?;

        Ok(guild_setup(self.state, self.ctx, guild_id))
    }

    /// Sends the initial reply, visible to everyone.
    pub async fn reply(&self, content: impl Into<String>) -> Result<(), AppError> {
        let message = CreateInteractionResponseMessage::new().content(content);
        self.command
            .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
            .await?;

        Ok(())
    }

    /// Sends the initial reply, only visible to the invoking user.
    pub async fn reply_ephemeral(&self, content: impl Into<String>) -> Result<(), AppError> {
        let message = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true);
        self.command
            .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
            .await?;

        Ok(())
    }

    /// Edits the initial reply.
    pub async fn edit(&self, response: EditInteractionResponse) -> Result<Message, AppError> {
        Ok(self.command.edit_response(&self.ctx.http, response).await?)
    }
}

/// Definitions of all slash commands with the module providing them.
pub fn all_commands() -> Vec<(Module, CreateCommand)> {
    let mut commands = vec![
        (Module::Ping, ping::register()),
        (Module::Stats, stats::register()),
        (Module::Find, find::register()),
        (Module::Search, search::register()),
        (Module::Rules, rules::register()),
        (Module::Leaderboard, leaderboard::register()),
        (Module::Queue, queue::register()),
        (Module::Progress, progress::register()),
        (Module::Heatmap, heatmap::register()),
        (Module::History, history::register()),
        (Module::Restrictor, accept::register()),
    ];
    commands.extend(admin::register().into_iter().map(|command| (Module::Admin, command)));
    commands
}

/// Registers the commands of all enabled modules, replacing the previous ones.
///
/// Commands are registered in the configured guild, which takes effect
/// immediately, or globally when no guild is configured.
///
/// # Returns
/// - `Ok(usize)` - Number of registered commands
/// - `Err(AppError)` - Discord rejected the registration
pub async fn register_commands(state: &AppState, http: &Http) -> Result<usize, AppError> {
    let mut commands = Vec::new();
    for (module, command) in all_commands() {
        if state.modules.is_enabled(module).await {
            commands.push(command);
        }
    }
    let count = commands.len();

    match state.config.discord_guild_id {
        Some(guild_id) => {
            GuildId::new(guild_id).set_commands(http, commands).await?;
        }
        None => {
            Command::set_global_commands(http, commands).await?;
        }
    }

    Ok(count)
}

/// Runs the handler of the invoked command and reports failures to the user.
pub async fn dispatch(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    let name = command.data.name.as_str();
    let start = Instant::now();

    let options: Vec<(String, String)> = command
        .data
        .options()
        .iter()
        .map(|option| (option.name.to_string(), option_value_str(&option.value)))
        .collect();

    tracing::info!(
        command = name,
        user = %command.user.name,
        invocation = %render_invocation(name, &options),
        "Command invoked"
    );

    let enabled = match Module::for_command(name) {
        Some(module) => state.modules.is_enabled(module).await,
        None => false,
    };

    let cmd = CommandContext::new(ctx, command, state);
    let result = if enabled {
        run(&cmd, name).await
    } else {
        Err(AppError::BadRequest(errors::UNKNOWN_COMMAND.to_string()))
    };

    match result {
        Ok(()) => tracing::info!(
            command = name,
            user = %command.user.name,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Command completed"
        ),
        Err(e) => {
            tracing::warn!(
                command = name,
                user = %command.user.name,
                error_type = e.kind(),
                "Command failed: {}",
                e
            );
            report_error(&cmd, &e).await;
        }
    }
}

/// Renders an invocation the way it was typed, e.g. `/history username:foo after:2 weeks`.
fn render_invocation(name: &str, options: &[(String, String)]) -> String {
    let mut rendered = format!("/{name}");
    for (option, value) in options {
        rendered.push_str(&format!(" {option}:{value}"));
    }
    rendered
}

fn option_value_str(value: &ResolvedValue<'_>) -> String {
    match value {
        ResolvedValue::String(text) => text.to_string(),
        ResolvedValue::Integer(number) => number.to_string(),
        ResolvedValue::Number(number) => number.to_string(),
        ResolvedValue::Boolean(flag) => flag.to_string(),
        ResolvedValue::User(user, _) => user.name.clone(),
        other => format!("{other:?}"),
    }
}

async fn run(cmd: &CommandContext<'_>, name: &str) -> Result<(), AppError> {
    match name {
        "ping" => ping::run(cmd).await,
        "stats" => stats::run(cmd).await,
        "find" => find::run(cmd).await,
        "search" => search::run(cmd).await,
        "rules" => rules::run(cmd).await,
        "leaderboard" => leaderboard::run(cmd).await,
        "queue" => queue::run(cmd).await,
        "progress" => progress::run(cmd).await,
        "heatmap" => heatmap::run(cmd).await,
        "history" => history::run(cmd).await,
        "accept" => accept::run(cmd).await,
        "load" | "unload" | "reload" => admin::run(cmd, name).await,
        _ => Err(AppError::BadRequest(errors::UNKNOWN_COMMAND.to_string())),
    }
}

/// Shows the error message in place of the reply, or as a new reply if none was sent yet.
async fn report_error(cmd: &CommandContext<'_>, error: &AppError) {
    let message = error.user_message();

    let edited = cmd
        .edit(EditInteractionResponse::new().content(message.clone()).embeds(Vec::new()))
        .await;

    if edited.is_err() {
        if let Err(e) = cmd.reply_ephemeral(message).await {
            tracing::error!("Failed to report command error: {}", e);
        }
    }
}

/// Embed color of the volunteer's rank.
pub fn rank_colour(gamma: u64) -> Colour {
    get_rgb_from_hex(get_rank(gamma).color)
        .map(|(r, g, b)| Colour::from_rgb(r, g, b))
        .unwrap_or(Colour::LIGHT_GREY)
}
