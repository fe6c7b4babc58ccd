use serde::{Deserialize, Serialize};

/// One row of a title search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

/// Full record for a single title, fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub plot: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
    pub released: String,
    pub runtime_minutes: Option<u32>,
    /// Runtime as the API reported it, e.g. "148 min" or "N/A".
    pub runtime_label: String,
    pub imdb_rating: Option<f64>,
}

/// A movie the user rated and kept. Persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub imdb_rating: Option<f64>,
    pub user_rating: u8,
    #[serde(default)]
    pub rating_revision_count: u32,
}

impl WatchedMovie {
    pub fn from_detail(detail: &MovieDetail, user_rating: u8, rating_revision_count: u32) -> Self {
        Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            runtime_minutes: detail.runtime_minutes,
            imdb_rating: detail.imdb_rating,
            user_rating,
            rating_revision_count,
        }
    }
}
