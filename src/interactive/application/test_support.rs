//! In-memory movie API for tests.

use crate::omdb::{FetchError, MovieApi};
use crate::schemas::{MovieDetail, SearchResultItem};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

type Scripted<T> = (Duration, Result<T, FetchError>);

/// Answers from fixed tables. Unknown queries and ids are `NotFound`.
#[derive(Default)]
pub struct MockMovieApi {
    searches: HashMap<String, Scripted<Vec<SearchResultItem>>>,
    details: HashMap<String, Scripted<MovieDetail>>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockMovieApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, query: &str, outcome: Result<Vec<SearchResultItem>, FetchError>) -> Self {
        self.with_slow_search(query, Duration::ZERO, outcome)
    }

    pub fn with_slow_search(
        mut self,
        query: &str,
        delay: Duration,
        outcome: Result<Vec<SearchResultItem>, FetchError>,
    ) -> Self {
        self.searches.insert(query.to_string(), (delay, outcome));
        self
    }

    pub fn with_detail(self, detail: MovieDetail) -> Self {
        self.with_slow_detail(detail, Duration::ZERO)
    }

    pub fn with_slow_detail(mut self, detail: MovieDetail, delay: Duration) -> Self {
        self.details.insert(detail.id.clone(), (delay, Ok(detail)));
        self
    }

    pub fn with_detail_error(mut self, imdb_id: &str, error: FetchError) -> Self {
        self.details
            .insert(imdb_id.to_string(), (Duration::ZERO, Err(error)));
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl MovieApi for MockMovieApi {
    fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, FetchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        match self.searches.get(query) {
            Some((delay, outcome)) => {
                thread::sleep(*delay);
                outcome.clone()
            }
            None => Err(FetchError::NotFound),
        }
    }

    fn detail(&self, imdb_id: &str) -> Result<MovieDetail, FetchError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        match self.details.get(imdb_id) {
            Some((delay, outcome)) => {
                thread::sleep(*delay);
                outcome.clone()
            }
            None => Err(FetchError::NotFound),
        }
    }
}

pub fn search_item(id: &str, title: &str) -> SearchResultItem {
    SearchResultItem {
        id: id.to_string(),
        title: title.to_string(),
        year: "2008".to_string(),
        poster_url: "N/A".to_string(),
    }
}

pub fn movie_detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        id: id.to_string(),
        title: title.to_string(),
        year: "2008".to_string(),
        poster_url: "N/A".to_string(),
        plot: format!("The plot of {title}."),
        actors: "Someone, Someone Else".to_string(),
        director: "A Director".to_string(),
        genre: "Drama".to_string(),
        released: "18 Jul 2008".to_string(),
        runtime_minutes: Some(152),
        runtime_label: "152 min".to_string(),
        imdb_rating: Some(9.0),
    }
}
