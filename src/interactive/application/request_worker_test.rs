#[cfg(test)]
mod tests {
    use super::super::request_worker::*;
    use super::super::search_service::SearchService;
    use super::super::test_support::{MockMovieApi, movie_detail, search_item};
    use crate::config::SearchSettings;
    use crate::interactive::domain::models::{DetailRequest, SearchRequest};
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    fn create_worker(api: MockMovieApi) -> RequestWorker {
        let service = SearchService::new(Arc::new(api), SearchSettings::default());
        RequestWorker::new(Arc::new(service))
    }

    fn recv_within(worker: &mut RequestWorker, timeout: Duration) -> Option<WorkerEvent> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Some(event) = worker.try_recv() {
                return Some(event);
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    fn search_request(id: u64, query: &str) -> SearchRequest {
        SearchRequest {
            id,
            query: query.to_string(),
        }
    }

    #[test]
    fn test_cancel_flag() {
        let flag = CancelFlag::new();
        let shared = flag.clone();

        assert!(!shared.is_cancelled());
        flag.cancel();
        assert!(shared.is_cancelled());
    }

    #[test]
    fn test_search_response_arrives() {
        let mut worker = create_worker(
            MockMovieApi::new().with_search("bat", Ok(vec![search_item("tt1", "Batman")])),
        );

        worker.spawn_search(search_request(1, "bat"));
        assert_eq!(worker.pending_search(), Some(1));

        match recv_within(&mut worker, Duration::from_secs(2)) {
            Some(WorkerEvent::Search(response)) => {
                assert_eq!(response.id, 1);
                assert_eq!(response.outcome.unwrap().len(), 1);
            }
            other => panic!("Expected search response, got {other:?}"),
        }
        assert_eq!(worker.pending_search(), None);
    }

    #[test]
    fn test_superseded_search_never_responds() {
        let mut worker = create_worker(
            MockMovieApi::new()
                .with_slow_search(
                    "slow",
                    Duration::from_millis(150),
                    Ok(vec![search_item("tt1", "Slow")]),
                )
                .with_search("fast", Ok(vec![search_item("tt2", "Fast")])),
        );

        worker.spawn_search(search_request(1, "slow"));
        worker.spawn_search(search_request(2, "fast"));

        match recv_within(&mut worker, Duration::from_secs(2)) {
            Some(WorkerEvent::Search(response)) => assert_eq!(response.id, 2),
            other => panic!("Expected search response, got {other:?}"),
        }
        assert!(recv_within(&mut worker, Duration::from_millis(300)).is_none());
    }

    #[test]
    fn test_cancel_search_drops_response() {
        let mut worker = create_worker(MockMovieApi::new().with_slow_search(
            "slow",
            Duration::from_millis(100),
            Ok(Vec::new()),
        ));

        worker.spawn_search(search_request(1, "slow"));
        worker.cancel_search();

        assert_eq!(worker.pending_search(), None);
        assert!(recv_within(&mut worker, Duration::from_millis(300)).is_none());
    }

    #[test]
    fn test_detail_response_arrives() {
        let mut worker = create_worker(MockMovieApi::new().with_detail(movie_detail("tt1", "Batman")));

        worker.spawn_detail(DetailRequest {
            id: 4,
            imdb_id: "tt1".to_string(),
        });

        match recv_within(&mut worker, Duration::from_secs(2)) {
            Some(WorkerEvent::Detail(response)) => {
                assert_eq!(response.id, 4);
                assert_eq!(response.outcome.unwrap().id, "tt1");
            }
            other => panic!("Expected detail response, got {other:?}"),
        }
    }

    #[test]
    fn test_search_and_detail_are_independent() {
        let mut worker = create_worker(
            MockMovieApi::new()
                .with_slow_search("bat", Duration::from_millis(50), Ok(Vec::new()))
                .with_detail(movie_detail("tt1", "Batman")),
        );

        worker.spawn_search(search_request(1, "bat"));
        worker.spawn_detail(DetailRequest {
            id: 1,
            imdb_id: "tt1".to_string(),
        });

        let mut seen_search = false;
        let mut seen_detail = false;
        for _ in 0..2 {
            match recv_within(&mut worker, Duration::from_secs(2)) {
                Some(WorkerEvent::Search(_)) => seen_search = true,
                Some(WorkerEvent::Detail(_)) => seen_detail = true,
                None => break,
            }
        }
        assert!(seen_search && seen_detail);
    }
}
