//! Services combining the Blossom and Reddit data with the bot's own logic.
//!
//! Services borrow the clients they need and are created per use; state that
//! outlives a single event (the queue cache, member records, searches, module
//! toggles) lives in [`crate::state::AppState`].

pub mod chart;
pub mod discord;
pub mod lookup;
pub mod modlog;
pub mod modules;
pub mod queue;
pub mod restrictor;
pub mod search;
