use chrono::Utc;
use serenity::all::{EditMessage, Http};
use std::{sync::Arc, time::Instant};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{
        modules::Module,
        queue::{message::queue_embed, QueueService},
    },
    state::AppState,
    strings::queue,
    util::format::get_duration_str,
};

/// Starts the queue refresh scheduler
///
/// Every minute the unclaimed submissions are fetched from Blossom and the tracked
/// `/queue` replies are edited with the new status. A failed refresh keeps the
/// previous status and is retried on the next run.
///
/// # Arguments
/// - `state`: Application state holding the Blossom client and queue cache
/// - `discord_http`: Discord HTTP client for editing the tracked replies
pub async fn start_scheduler(state: Arc<AppState>, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let job_http = discord_http.clone();

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = refresh_queue(&state, &http).await {
                tracing::error!("Error refreshing the queue: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Queue refresh scheduler started");

    // The first refresh shouldn't wait for the next full minute
    if let Err(e) = refresh_queue(&state, &discord_http).await {
        tracing::error!("Error refreshing the queue: {}", e);
    }

    Ok(())
}

/// Refreshes the queue cache and edits the tracked replies
async fn refresh_queue(state: &AppState, http: &Http) -> Result<(), AppError> {
    if !state.modules.is_enabled(Module::Queue).await {
        return Ok(());
    }

    let start = Instant::now();
    let snapshot = QueueService::new(&state.blossom, &state.queue)
        .refresh(Utc::now())
        .await?;
    tracing::debug!("Refreshed queue with {} unclaimed submissions", snapshot.items.len());

    for message in state.queue.tracked().await {
        let edit = EditMessage::new()
            .content(queue::embed_message(&get_duration_str(start)))
            .embed(queue_embed(Some(&snapshot), message.source.as_deref()));

        if let Err(e) = message
            .channel_id
            .edit_message(http, message.message_id, edit)
            .await
        {
            // Deleted replies can't be edited again
            tracing::warn!(
                "Failed to update queue message {}, no longer tracking it: {}",
                message.message_id,
                e
            );
            state.queue.untrack(message.message_id).await;
        }
    }

    Ok(())
}
