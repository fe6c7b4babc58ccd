//! OMDb access: the [`MovieApi`] seam and its HTTP implementation.

pub mod client;
pub mod error;

#[cfg(test)]
mod client_test;

pub use client::OmdbClient;
pub use error::{FetchError, GENERIC_FETCH_ERROR, NOT_FOUND_ERROR};

use crate::schemas::{MovieDetail, SearchResultItem};

/// Read-only view of the movie database.
///
/// Implementations block; callers run them off the UI thread.
pub trait MovieApi: Send + Sync {
    /// Title search. `Err(FetchError::NotFound)` when nothing matches.
    fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, FetchError>;

    /// Single title lookup by IMDb id.
    fn detail(&self, imdb_id: &str) -> Result<MovieDetail, FetchError>;
}
