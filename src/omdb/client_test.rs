#[cfg(test)]
mod tests {
    use super::super::client::*;
    use super::super::FetchError;
    use crate::config::ApiConfig;

    fn create_test_client() -> OmdbClient {
        OmdbClient::new(&ApiConfig {
            base_url: "http://www.omdbapi.com/".to_string(),
            api_key: "test-key".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_search_request_url() {
        let client = create_test_client();
        let request = client.search_request("star wars").unwrap();
        let url = request.url();

        assert_eq!(url.host_str(), Some("www.omdbapi.com"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("apikey".to_string(), "test-key".to_string()),
                ("s".to_string(), "star wars".to_string()),
            ]
        );
    }

    #[test]
    fn test_detail_request_url() {
        let client = create_test_client();
        let request = client.detail_request("tt0111161").unwrap();
        let query = request.url().query().unwrap_or_default().to_string();

        assert_eq!(query, "apikey=test-key&i=tt0111161");
        assert_eq!(request.method(), reqwest::Method::GET);
    }

    #[test]
    fn test_decode_search_success() {
        let body = r#"{"Search":[
            {"Title":"Batman Begins","Year":"2005","imdbID":"tt0372784","Poster":"p1"},
            {"Title":"Batman","Year":"1989","imdbID":"tt0096895","Poster":"p2"}
        ],"totalResults":"2","Response":"True"}"#;

        let results = decode_search(body).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "tt0372784");
        assert_eq!(results[0].title, "Batman Begins");
        assert_eq!(results[1].year, "1989");
        assert_eq!(results[1].poster_url, "p2");
    }

    #[test]
    fn test_decode_search_not_found() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        assert_eq!(decode_search(body), Err(FetchError::NotFound));
    }

    #[test]
    fn test_decode_search_true_without_results() {
        let body = r#"{"Response":"True"}"#;
        assert_eq!(decode_search(body), Ok(Vec::new()));
    }

    #[test]
    fn test_decode_search_garbage() {
        let result = decode_search("<html>oops</html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_detail() {
        let body = r#"{"Title":"Heat","Year":"1995","Runtime":"170 min","imdbRating":"8.3",
            "Genre":"Crime, Drama","Released":"15 Dec 1995","Plot":"A heist.","Actors":"Al Pacino",
            "Director":"Michael Mann","Poster":"p","Response":"True"}"#;

        let detail = decode_detail(body, "tt0113277").unwrap();

        assert_eq!(detail.id, "tt0113277");
        assert_eq!(detail.title, "Heat");
        assert_eq!(detail.runtime_minutes, Some(170));
        assert_eq!(detail.imdb_rating, Some(8.3));
    }

    #[test]
    fn test_decode_detail_not_found() {
        let body = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        assert_eq!(decode_detail(body, "bad"), Err(FetchError::NotFound));
    }
}
