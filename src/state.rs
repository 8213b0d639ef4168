//! Application state shared by event handlers and the scheduler.
//!
//! The state is created once during startup and shared behind an `Arc`. Clients
//! are cheap to clone; the caches and registries synchronize internally.

use tokio::sync::Mutex;

use crate::{
    config::Config,
    data::{blossom::BlossomClient, reddit::RedditClient},
    service::{
        modules::ModuleRegistry, queue::QueueCache, restrictor::MemberRecords,
        search::SearchCache,
    },
};

/// Number of searches kept for paging.
pub const SEARCH_CACHE_CAPACITY: usize = 100;

pub struct AppState {
    pub config: Config,

    /// Client for the Blossom API, logged in lazily.
    pub blossom: BlossomClient,

    /// Client for the Reddit API, used for subreddit rules.
    pub reddit: RedditClient,

    /// Enabled modules; events and commands of disabled ones are ignored.
    pub modules: ModuleRegistry,

    /// Unclaimed submissions and the `/queue` replies showing them.
    pub queue: QueueCache,

    /// Restrictor records of the guild members.
    pub members: MemberRecords,

    /// Searches that can still be paged through, by reply message ID.
    pub searches: Mutex<SearchCache>,
}

impl AppState {
    /// Creates the application state with empty caches and all modules enabled.
    ///
    /// # Arguments
    /// - `config` - Bot configuration
    /// - `blossom` - Blossom API client
    /// - `reddit` - Reddit API client
    pub fn new(config: Config, blossom: BlossomClient, reddit: RedditClient) -> Self {
        Self {
            config,
            blossom,
            reddit,
            modules: ModuleRegistry::new(),
            queue: QueueCache::new(),
            members: MemberRecords::new(),
            searches: Mutex::new(SearchCache::new(SEARCH_CACHE_CAPACITY)),
        }
    }
}
