//! Factory methods for creating Blossom API response bodies.
//!
//! Each resource has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation. Factories produce
//! `serde_json::Value`s shaped like Blossom's responses, ready to be served by the
//! mock built with `TestBuilder`.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let volunteer = factory::create_volunteer(1, "user");
//! let submission = factory::SubmissionFactory::new(10)
//!     .url("https://reddit.com/r/CuratedTumblr/comments/abc/title/")
//!     .completed_by(1)
//!     .build();
//!
//! let body = factory::page(vec![submission]);
//! ```

pub mod submission;
pub mod transcription;
pub mod volunteer;

use serde_json::{json, Value};

pub use submission::{create_submission, SubmissionFactory};
pub use transcription::{create_transcription, TranscriptionFactory};
pub use volunteer::{create_volunteer, VolunteerFactory};

/// Wraps the results in a single page of a Blossom list response.
pub fn page(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results,
    })
}

/// Wraps the results in a page that claims more pages follow.
///
/// # Arguments
/// - `results` - Results on this page
/// - `count` - Total number of results across all pages
pub fn page_with_next(results: Vec<Value>, count: usize) -> Value {
    json!({
        "count": count,
        "next": "https://grafeas.org/api/next/",
        "previous": null,
        "results": results,
    })
}

/// Builds the Blossom resource URL for the given type and ID.
pub fn resource_url(kind: &str, id: u64) -> String {
    format!("https://grafeas.org/api/{kind}/{id}/")
}
