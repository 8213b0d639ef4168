//! Transcription search with pagination.
//!
//! Results are shown five per Discord page, but fetched from Blossom in requests
//! of sixty so paging through a search rarely needs another request. The state of
//! each search is kept in a [`SearchCache`] keyed by the ID of the reply message,
//! so the previous/next buttons can pick up where the last page left off.

pub mod cache;
pub mod format;

use crate::{
    data::blossom::{BlossomClient, TranscriptionRepository},
    error::blossom::BlossomError,
    model::{paginated::Paginated, transcription::Transcription},
};

pub use cache::SearchCache;

/// Transcriptions shown per Discord page.
pub const RESULTS_PER_PAGE: usize = 5;
/// Transcriptions fetched per Blossom request.
pub const REQUEST_PAGE_SIZE: usize = 60;
const PAGES_PER_REQUEST: usize = REQUEST_PAGE_SIZE / RESULTS_PER_PAGE;

/// Custom ID of the button showing the previous page.
pub const PREVIOUS_BUTTON_ID: &str = "search_previous";
/// Custom ID of the button showing the next page.
pub const NEXT_BUTTON_ID: &str = "search_next";

/// Progress of a search through its result pages.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    /// The user who started the search; only they may change the page.
    pub discord_user_id: u64,
    /// Discord page currently shown, 0-based.
    pub cur_page: usize,
    /// Blossom page held in `response`, 1-based.
    pub request_page: usize,
    pub response: Option<Paginated<Transcription>>,
}

impl SearchState {
    pub fn new(query: &str, discord_user_id: u64) -> Self {
        Self {
            query: query.to_string(),
            discord_user_id,
            cur_page: 0,
            request_page: 1,
            response: None,
        }
    }
}

/// One Discord page of search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub results: Vec<Transcription>,
    /// Number of matching transcriptions across all pages.
    pub total: u64,
    /// Page shown, 0-based.
    pub page: usize,
    pub page_count: usize,
}

impl SearchPage {
    /// Position of the first result on this page among all results, 0-based.
    pub fn offset(&self) -> usize {
        self.page * RESULTS_PER_PAGE
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

/// Number of Discord pages needed for the results.
pub fn page_count(total: u64) -> usize {
    (total as usize).div_ceil(RESULTS_PER_PAGE)
}

/// Blossom page holding the Discord page, 1-based.
pub fn request_page_for(page: usize) -> usize {
    page / PAGES_PER_REQUEST + 1
}

pub struct SearchService<'a> {
    client: &'a BlossomClient,
}

impl<'a> SearchService<'a> {
    pub fn new(client: &'a BlossomClient) -> Self {
        Self { client }
    }

    /// Loads the Discord page the state points to.
    ///
    /// The Blossom response is cached in the state and only fetched again when
    /// the page lies in another request page.
    ///
    /// # Arguments
    /// - `state` - Search to load the page for, updated with the fetched response
    ///
    /// # Returns
    /// - `Ok(SearchPage)` - The results of the page, empty when nothing matched
    /// - `Err(BlossomError)` - Fetching the results failed
    pub async fn load_page(&self, state: &mut SearchState) -> Result<SearchPage, BlossomError> {
        let request_page = request_page_for(state.cur_page);

        if state.response.is_none() || state.request_page != request_page {
            let response = TranscriptionRepository::new(self.client)
                .search(&state.query, request_page as u32, REQUEST_PAGE_SIZE as u32)
                .await?;
            state.response = Some(response);
            state.request_page = request_page;
        }

        let (results, total) = match &state.response {
            Some(response) => {
                let start = (state.cur_page % PAGES_PER_REQUEST) * RESULTS_PER_PAGE;
                let results = response
                    .results
                    .iter()
                    .skip(start)
                    .take(RESULTS_PER_PAGE)
                    .cloned()
                    .collect();
                (results, response.count)
            }
            None => (Vec::new(), 0),
        };

        Ok(SearchPage {
            results,
            total,
            page: state.cur_page,
            page_count: page_count(total),
        })
    }
}

#[cfg(test)]
mod test;
