use serde::{Deserialize, Serialize};

use super::movie::{MovieDetail, SearchResultItem};

/// Envelope returned by `?s=<query>` lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchHit>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchEnvelope {
    /// OMDb signals "no matches" (and most request errors) with `Response: "False"`.
    pub fn is_negative(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl From<SearchHit> for SearchResultItem {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.imdb_id,
            title: hit.title,
            year: hit.year,
            poster_url: hit.poster,
        }
    }
}

/// Payload returned by `?i=<imdb id>` lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailPayload {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetailPayload {
    pub fn is_negative(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }

    /// Converts the payload into a [`MovieDetail`]. `requested_id` is used when
    /// the payload does not echo the id back.
    pub fn into_detail(self, requested_id: &str) -> MovieDetail {
        let id = if self.imdb_id.is_empty() {
            requested_id.to_string()
        } else {
            self.imdb_id
        };
        MovieDetail {
            id,
            runtime_minutes: parse_runtime_minutes(&self.runtime),
            imdb_rating: parse_rating(&self.imdb_rating),
            title: self.title,
            year: self.year,
            poster_url: self.poster,
            plot: self.plot,
            actors: self.actors,
            director: self.director,
            genre: self.genre,
            released: self.released,
            runtime_label: self.runtime,
        }
    }
}

/// "142 min" -> 142. "N/A" and anything without a leading number -> None.
pub fn parse_runtime_minutes(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// "7.8" -> 7.8. "N/A" -> None.
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_envelope() {
        let json = r#"{
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "https://example.com/a.jpg"},
                {"Title": "The Batman", "Year": "2022", "imdbID": "tt1877830", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();

        assert!(!envelope.is_negative());
        assert_eq!(envelope.search.len(), 2);
        assert_eq!(envelope.search[0].imdb_id, "tt0372784");
        assert_eq!(envelope.search[1].poster, "N/A");
    }

    #[test]
    fn test_parse_negative_envelope() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();

        assert!(envelope.is_negative());
        assert!(envelope.search.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn test_detail_payload_conversion() {
        let json = r#"{
            "Title": "Inception", "Year": "2010", "Released": "16 Jul 2010",
            "Runtime": "148 min", "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan", "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "Plot": "A thief who steals corporate secrets.", "Poster": "https://example.com/p.jpg",
            "imdbRating": "8.8", "imdbID": "tt1375666", "Response": "True"
        }"#;
        let payload: DetailPayload = serde_json::from_str(json).unwrap();
        let detail = payload.into_detail("tt1375666");

        assert_eq!(detail.id, "tt1375666");
        assert_eq!(detail.title, "Inception");
        assert_eq!(detail.runtime_minutes, Some(148));
        assert_eq!(detail.runtime_label, "148 min");
        assert_eq!(detail.imdb_rating, Some(8.8));
        assert_eq!(detail.director, "Christopher Nolan");
    }

    #[test]
    fn test_detail_payload_falls_back_to_requested_id() {
        let payload = DetailPayload {
            title: "Untitled".to_string(),
            runtime: "N/A".to_string(),
            imdb_rating: "N/A".to_string(),
            ..Default::default()
        };
        let detail = payload.into_detail("tt0000001");

        assert_eq!(detail.id, "tt0000001");
        assert_eq!(detail.runtime_minutes, None);
        assert_eq!(detail.imdb_rating, None);
    }

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("90 min"), Some(90));
        assert_eq!(parse_runtime_minutes(" 7 min"), Some(7));
        assert_eq!(parse_runtime_minutes("N/A"), None);
        assert_eq!(parse_runtime_minutes(""), None);
    }
}
