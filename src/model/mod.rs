//! Domain models.
//!
//! Blossom and Reddit responses are deserialized straight into these types at
//! the data layer; services and commands only ever see the domain models.

pub mod heatmap;
pub mod leaderboard;
pub mod member;
pub mod paginated;
pub mod queue;
pub mod rate;
pub mod rules;
pub mod submission;
pub mod summary;
pub mod transcription;
pub mod volunteer;
