//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod role;

pub use member::create_test_member;
pub use role::create_test_role;
