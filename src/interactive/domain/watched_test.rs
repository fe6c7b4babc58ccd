#[cfg(test)]
mod tests {
    use super::super::watched::*;
    use crate::schemas::WatchedMovie;

    fn create_test_movie(id: &str, user_rating: u8) -> WatchedMovie {
        WatchedMovie {
            id: id.to_string(),
            title: format!("Movie {id}"),
            year: "1999".to_string(),
            poster_url: "N/A".to_string(),
            runtime_minutes: Some(100),
            imdb_rating: Some(8.0),
            user_rating,
            rating_revision_count: 1,
        }
    }

    #[test]
    fn test_upsert_appends_new_id() {
        let mut list = WatchedList::default();

        assert!(!list.upsert(create_test_movie("tt1", 5)));
        assert!(!list.upsert(create_test_movie("tt2", 6)));

        assert_eq!(list.len(), 2);
        assert_eq!(list.movies()[1].id, "tt2");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut list = WatchedList::new(vec![
            create_test_movie("tt1", 5),
            create_test_movie("tt2", 6),
        ]);

        assert!(list.upsert(create_test_movie("tt1", 9)));

        assert_eq!(list.len(), 2);
        assert_eq!(list.movies()[0].id, "tt1");
        assert_eq!(list.user_rating_for("tt1"), Some(9));
    }

    #[test]
    fn test_new_collapses_duplicate_ids() {
        let list = WatchedList::new(vec![
            create_test_movie("tt1", 5),
            create_test_movie("tt1", 7),
        ]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.user_rating_for("tt1"), Some(7));
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut list = WatchedList::new(vec![create_test_movie("tt1", 5)]);

        assert!(!list.remove("tt404"));
        assert_eq!(list.len(), 1);

        assert!(list.remove("tt1"));
        assert!(list.is_empty());
        assert!(!list.contains("tt1"));
    }

    #[test]
    fn test_summary_of_empty_list() {
        let summary = WatchedList::default().summary();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_imdb_rating, None);
        assert_eq!(summary.avg_user_rating, None);
        assert_eq!(summary.avg_runtime_minutes, None);
    }

    #[test]
    fn test_summary_skips_missing_values() {
        let mut second = create_test_movie("tt2", 4);
        second.imdb_rating = None;
        second.runtime_minutes = Some(140);
        let list = WatchedList::new(vec![create_test_movie("tt1", 8), second]);

        let summary = list.summary();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg_imdb_rating, Some(8.0));
        assert_eq!(summary.avg_user_rating, Some(6.0));
        assert_eq!(summary.avg_runtime_minutes, Some(120.0));
    }
}
