//! Data layer: thin clients for the external APIs the bot depends on.

pub mod blossom;
pub mod reddit;
