use chrono::{DateTime, Utc};

use crate::{
    data::blossom::{BlossomClient, Query},
    error::blossom::BlossomError,
    model::{leaderboard::Leaderboard, paginated::Paginated, submission::Submission},
};

/// Page size when fetching the whole queue.
pub const QUEUE_PAGE_SIZE: usize = 500;

pub struct SubmissionRepository<'a> {
    client: &'a BlossomClient,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(client: &'a BlossomClient) -> Self {
        Self { client }
    }

    /// Finds the first submission matching the filter, e.g. `[("url", ...)]`.
    pub async fn find_one(&self, filter: &Query) -> Result<Option<Submission>, BlossomError> {
        let page: Paginated<Submission> = self.client.get("submission/", filter).await?;

        Ok(page.results.into_iter().next())
    }

    /// Gets all unclaimed, unarchived submissions created at or after `since`.
    ///
    /// Pages through the results until a page comes back with fewer than
    /// [`QUEUE_PAGE_SIZE`] submissions.
    pub async fn unclaimed_since(&self, since: DateTime<Utc>) -> Result<Vec<Submission>, BlossomError> {
        let mut submissions = Vec::new();
        let mut page_number = 1usize;

        loop {
            let query = [
                ("page_size", QUEUE_PAGE_SIZE.to_string()),
                ("page", page_number.to_string()),
                ("completed_by__isnull", "true".to_string()),
                ("claimed_by__isnull", "true".to_string()),
                ("archived", "false".to_string()),
                ("create_time__gte", since.to_rfc3339()),
            ];

            let page: Paginated<Submission> = self.client.get("submission/", &query).await?;
            let page_len = page.results.len();
            submissions.extend(page.results);

            if page_len < QUEUE_PAGE_SIZE {
                break;
            }
            page_number += 1;
        }

        Ok(submissions)
    }

    /// Gets the leaderboard around the given volunteer.
    ///
    /// # Arguments
    /// - `user_id` - Blossom ID of the volunteer in the middle of the leaderboard
    /// - `top_count` - Number of volunteers at the top
    /// - `above_count` / `below_count` - Number of neighbours above and below the volunteer
    pub async fn leaderboard(
        &self,
        user_id: u64,
        top_count: u32,
        above_count: u32,
        below_count: u32,
    ) -> Result<Leaderboard, BlossomError> {
        self.client
            .get(
                "submission/leaderboard",
                &[
                    ("user_id", user_id.to_string()),
                    ("top_count", top_count.to_string()),
                    ("above_count", above_count.to_string()),
                    ("below_count", below_count.to_string()),
                ],
            )
            .await
    }

    /// Counts the submissions the volunteer completed at or after `since`.
    pub async fn completed_count_since(
        &self,
        user_id: u64,
        since: DateTime<Utc>,
    ) -> Result<u64, BlossomError> {
        let page: Paginated<Submission> = self
            .client
            .get(
                "submission/",
                &[
                    ("completed_by", user_id.to_string()),
                    ("complete_time__gte", since.to_rfc3339()),
                    ("page_size", "1".to_string()),
                ],
            )
            .await?;

        Ok(page.count)
    }
}
