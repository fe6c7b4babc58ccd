use crate::config::SearchSettings;
use crate::interactive::domain::models::{
    DetailRequest, DetailResponse, SearchRequest, SearchResponse,
};
use crate::omdb::MovieApi;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Runs search and detail requests against the movie API.
pub struct SearchService {
    api: Arc<dyn MovieApi>,
    min_query_len: usize,
}

impl SearchService {
    pub fn new(api: Arc<dyn MovieApi>, settings: SearchSettings) -> Self {
        Self {
            api,
            min_query_len: settings.min_query_len,
        }
    }

    /// True when `query` is long enough to be sent.
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_query_len
    }

    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let query = request.query.trim();
        if !self.accepts(query) {
            debug!(id = request.id, "Skipping search for short query");
            return SearchResponse {
                id: request.id,
                outcome: Ok(Vec::new()),
            };
        }

        let started = Instant::now();
        let outcome = self.api.search(query);
        match &outcome {
            Ok(items) => debug!(
                id = request.id,
                query,
                count = items.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Search completed"
            ),
            Err(e) => warn!(id = request.id, query, "Search failed: {e}"),
        }

        SearchResponse {
            id: request.id,
            outcome,
        }
    }

    pub fn detail(&self, request: &DetailRequest) -> DetailResponse {
        let started = Instant::now();
        let outcome = self.api.detail(&request.imdb_id);
        match &outcome {
            Ok(detail) => debug!(
                id = request.id,
                imdb_id = %request.imdb_id,
                title = %detail.title,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Detail loaded"
            ),
            Err(e) => warn!(id = request.id, imdb_id = %request.imdb_id, "Detail failed: {e}"),
        }

        DetailResponse {
            id: request.id,
            outcome,
        }
    }
}
