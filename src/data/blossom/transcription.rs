use crate::{
    data::blossom::{BlossomClient, Query},
    error::blossom::BlossomError,
    model::{paginated::Paginated, transcription::Transcription},
};

pub struct TranscriptionRepository<'a> {
    client: &'a BlossomClient,
}

impl<'a> TranscriptionRepository<'a> {
    pub fn new(client: &'a BlossomClient) -> Self {
        Self { client }
    }

    /// Gets the transcriptions matching the filter, e.g. `[("submission", id)]`.
    pub async fn find_all(&self, filter: &Query) -> Result<Vec<Transcription>, BlossomError> {
        let page: Paginated<Transcription> = self.client.get("transcription/", filter).await?;

        Ok(page.results)
    }

    /// Searches posted transcriptions containing the text, newest first.
    ///
    /// # Arguments
    /// - `query` - Text to search for, case-insensitive
    /// - `page` - 1-based page number
    /// - `page_size` - Number of transcriptions per page
    ///
    /// # Returns
    /// - `Ok(Paginated<Transcription>)` - The page with the total result count
    /// - `Err(BlossomError::NotFound)` - The page is past the last page
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Paginated<Transcription>, BlossomError> {
        self.client
            .get(
                "transcription/",
                &[
                    ("text__icontains", query.to_string()),
                    ("url__isnull", "false".to_string()),
                    ("ordering", "-create_time".to_string()),
                    ("page_size", page_size.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await
    }
}
