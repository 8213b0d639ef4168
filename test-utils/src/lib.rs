//! Buttercup Test Utils
//!
//! Provides shared testing utilities for the buttercup bot. The bot talks to
//! Blossom over HTTP, so this crate offers a builder for an in-process mock of
//! the Blossom API serving canned JSON responses, plus factories for the JSON
//! bodies and for the Serenity objects handed to event handlers.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring the mock's responses
//! - **TestContext**: Running mock server with its base URL and request log
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_volunteer() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_json("volunteer/", factory::page(vec![factory::create_volunteer(1, "user")]))
//!         .build()
//!         .await?;
//!
//!     // Point a client at test.base_url and exercise it...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
