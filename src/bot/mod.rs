//! Discord bot: gateway events and slash commands.
//!
//! The bot runs in its own tokio task. Its HTTP client is shared with the
//! scheduler, which edits the tracked `/queue` replies.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, role and channel cache used to resolve names
//! - `GUILD_MEMBERS` - Member joins and updates (privileged intent)
//! - `GUILD_MODERATION` - Bans and unbans relayed to the mod log
//! - `GUILD_MESSAGES` - Messages in guild channels
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
