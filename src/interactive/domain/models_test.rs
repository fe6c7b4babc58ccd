#[cfg(test)]
mod tests {
    use super::super::models::*;

    #[test]
    fn test_focus_cycle_with_detail_open() {
        assert_eq!(Focus::Search.next(true, true), Focus::Detail);
        assert_eq!(Focus::Detail.next(true, true), Focus::Search);
    }

    #[test]
    fn test_focus_cycle_without_detail() {
        assert_eq!(Focus::Search.next(false, true), Focus::Watched);
        assert_eq!(Focus::Watched.next(false, true), Focus::Search);
    }

    #[test]
    fn test_focus_stays_on_search_when_side_collapsed() {
        assert_eq!(Focus::Search.next(true, false), Focus::Search);
        assert_eq!(Focus::Search.next(false, false), Focus::Search);
    }
}
