use chrono::{DateTime, Utc};

use crate::{
    data::blossom::BlossomClient,
    error::blossom::BlossomError,
    model::{
        heatmap::HeatmapEntry, paginated::Paginated, rate::RateEntry, summary::Summary,
        volunteer::Volunteer,
    },
};

/// Page size when collecting all rate buckets of a time range.
const RATE_PAGE_SIZE: u32 = 500;

pub struct VolunteerRepository<'a> {
    client: &'a BlossomClient,
}

impl<'a> VolunteerRepository<'a> {
    pub fn new(client: &'a BlossomClient) -> Self {
        Self { client }
    }

    /// Finds the volunteer with the given Reddit username.
    ///
    /// # Returns
    /// - `Ok(Some(Volunteer))` - The volunteer exists
    /// - `Ok(None)` - No volunteer with this username
    /// - `Err(BlossomError)` - The request failed
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Volunteer>, BlossomError> {
        let page: Paginated<Volunteer> = self
            .client
            .get("volunteer/", &[("username", username.to_string())])
            .await?;

        Ok(page.results.into_iter().next())
    }

    /// Finds the volunteer with the given Blossom ID.
    pub async fn find_by_id(&self, id: u64) -> Result<Option<Volunteer>, BlossomError> {
        let page: Paginated<Volunteer> = self
            .client
            .get("volunteer/", &[("id", id.to_string())])
            .await?;

        Ok(page.results.into_iter().next())
    }

    /// Gets the community-wide totals.
    pub async fn summary(&self) -> Result<Summary, BlossomError> {
        self.client.get("summary/", &[]).await
    }

    /// Gets the number of transcriptions per weekday and hour (UTC) of the volunteer.
    pub async fn heatmap(&self, id: u64) -> Result<Vec<HeatmapEntry>, BlossomError> {
        self.client
            .get("volunteer/heatmap/", &[("id", id.to_string())])
            .await
    }

    /// Gets the volunteer's transcriptions per day, oldest first.
    ///
    /// # Arguments
    /// - `id` - Blossom ID of the volunteer
    /// - `after` - Only count transcriptions completed at or after this time
    /// - `before` - Only count transcriptions completed at or before this time
    ///
    /// # Returns
    /// - `Ok(Vec<RateEntry>)` - One entry per day with at least one transcription
    /// - `Err(BlossomError)` - One of the page requests failed
    pub async fn rate(
        &self,
        id: u64,
        after: Option<DateTime<Utc>>,
        before: Option<DateTime<Utc>>,
    ) -> Result<Vec<RateEntry>, BlossomError> {
        let mut entries = Vec::new();
        let mut page_number = 1u32;

        loop {
            let mut query = vec![
                ("completed_by", id.to_string()),
                ("time_frame", "day".to_string()),
                ("page_size", RATE_PAGE_SIZE.to_string()),
                ("page", page_number.to_string()),
            ];
            if let Some(after) = after {
                query.push(("complete_time__gte", after.to_rfc3339()));
            }
            if let Some(before) = before {
                query.push(("complete_time__lte", before.to_rfc3339()));
            }

            let page: Paginated<RateEntry> = self.client.get("submission/rate/", &query).await?;
            let has_next = page.next.is_some();
            entries.extend(page.results);

            if !has_next {
                break;
            }
            page_number += 1;
        }

        Ok(entries)
    }
}
