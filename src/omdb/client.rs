use anyhow::{Context, Result};
use reqwest::blocking::{Client, Request};
use tracing::{debug, warn};

use super::{FetchError, MovieApi};
use crate::config::ApiConfig;
use crate::schemas::{DetailPayload, MovieDetail, SearchEnvelope, SearchResultItem};

const USER_AGENT: &str = concat!("popcorn/", env!("CARGO_PKG_VERSION"));

/// Blocking OMDb client. The API key and base URL are fixed at construction.
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: api.base_url.clone(),
            api_key: api.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_request(&self, query: &str) -> Result<Request, FetchError> {
        self.http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .build()
            .map_err(FetchError::from)
    }

    pub fn detail_request(&self, imdb_id: &str) -> Result<Request, FetchError> {
        self.http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id)])
            .build()
            .map_err(FetchError::from)
    }

    fn fetch_body(&self, request: Request) -> Result<String, FetchError> {
        let response = self.http.execute(request)?;
        let status = response.status();
        if !status.is_success() {
            warn!("OMDb responded with {status}");
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

impl MovieApi for OmdbClient {
    fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, FetchError> {
        debug!(query, "searching OMDb");
        let body = self.fetch_body(self.search_request(query)?)?;
        decode_search(&body)
    }

    fn detail(&self, imdb_id: &str) -> Result<MovieDetail, FetchError> {
        debug!(imdb_id, "fetching OMDb detail");
        let body = self.fetch_body(self.detail_request(imdb_id)?)?;
        decode_detail(&body, imdb_id)
    }
}

pub fn decode_search(body: &str) -> Result<Vec<SearchResultItem>, FetchError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    if envelope.is_negative() {
        debug!(error = ?envelope.error, "OMDb search returned no matches");
        return Err(FetchError::NotFound);
    }
    Ok(envelope.search.into_iter().map(SearchResultItem::from).collect())
}

pub fn decode_detail(body: &str, imdb_id: &str) -> Result<MovieDetail, FetchError> {
    let payload: DetailPayload = serde_json::from_str(body)?;
    if payload.is_negative() {
        debug!(imdb_id, error = ?payload.error, "OMDb detail lookup failed");
        return Err(FetchError::NotFound);
    }
    Ok(payload.into_detail(imdb_id))
}
