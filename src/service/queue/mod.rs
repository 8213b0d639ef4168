//! Queue status.
//!
//! The unclaimed submissions of the last 18 hours are cached and refreshed every
//! minute by the scheduler. `/queue` replies are tracked so the refresh can edit
//! them with the latest status.

pub mod message;

use chrono::{DateTime, Duration, Utc};
use serenity::all::{ChannelId, MessageId};
use std::collections::VecDeque;
use tokio::sync::{Mutex, RwLock};

use crate::{
    data::blossom::{BlossomClient, SubmissionRepository},
    error::blossom::BlossomError,
    model::queue::QueueItem,
};

/// Submissions older than this are archived and leave the queue.
pub const QUEUE_WINDOW_HOURS: i64 = 18;
/// Number of `/queue` replies kept up to date.
pub const MAX_TRACKED_MESSAGES: usize = 5;

/// The queue as of the last refresh.
#[derive(Debug, Clone)]
pub struct QueueSnapshot {
    pub items: Vec<QueueItem>,
    pub updated_at: DateTime<Utc>,
}

/// A `/queue` reply edited on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedMessage {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    /// Source filter given to the command.
    pub source: Option<String>,
}

/// Cached queue and the replies showing it, shared by commands and the scheduler.
#[derive(Debug, Default)]
pub struct QueueCache {
    snapshot: RwLock<Option<QueueSnapshot>>,
    messages: Mutex<VecDeque<TrackedMessage>>,
}

impl QueueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The queue as of the last refresh, `None` before the first one.
    pub async fn snapshot(&self) -> Option<QueueSnapshot> {
        self.snapshot.read().await.clone()
    }

    pub async fn set_snapshot(&self, snapshot: QueueSnapshot) {
        *self.snapshot.write().await = Some(snapshot);
    }

    /// Tracks the reply, dropping the oldest tracked one beyond the limit.
    pub async fn track(&self, message: TrackedMessage) {
        let mut messages = self.messages.lock().await;
        messages.push_back(message);
        while messages.len() > MAX_TRACKED_MESSAGES {
            messages.pop_front();
        }
    }

    /// Stops tracking a reply, e.g. because it was deleted.
    pub async fn untrack(&self, message_id: MessageId) {
        self.messages
            .lock()
            .await
            .retain(|message| message.message_id != message_id);
    }

    pub async fn tracked(&self) -> Vec<TrackedMessage> {
        self.messages.lock().await.iter().cloned().collect()
    }
}

pub struct QueueService<'a> {
    client: &'a BlossomClient,
    cache: &'a QueueCache,
}

impl<'a> QueueService<'a> {
    pub fn new(client: &'a BlossomClient, cache: &'a QueueCache) -> Self {
        Self { client, cache }
    }

    /// Fetches the unclaimed submissions of the queue window and caches them.
    ///
    /// # Arguments
    /// - `now` - Current time, the window ends here
    ///
    /// # Returns
    /// - `Ok(QueueSnapshot)` - The refreshed queue
    /// - `Err(BlossomError)` - Fetching failed; the previous snapshot is kept
    pub async fn refresh(&self, now: DateTime<Utc>) -> Result<QueueSnapshot, BlossomError> {
        let since = now - Duration::hours(QUEUE_WINDOW_HOURS);
        let submissions = SubmissionRepository::new(self.client)
            .unclaimed_since(since)
            .await?;

        let snapshot = QueueSnapshot {
            items: submissions.iter().map(QueueItem::from_submission).collect(),
            updated_at: now,
        };
        self.cache.set_snapshot(snapshot.clone()).await;

        Ok(snapshot)
    }
}

#[cfg(test)]
mod test;
