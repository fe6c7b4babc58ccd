#[cfg(test)]
mod tests {
    use super::super::list_item::{ListItem, truncate_text};
    use super::super::list_viewer::ListViewer;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    #[derive(Clone)]
    struct MockListItem {
        title: String,
        year: String,
    }

    impl ListItem for MockListItem {
        fn primary_text(&self) -> &str {
            &self.title
        }

        fn secondary_text(&self) -> String {
            format!("({})", self.year)
        }
    }

    fn create_mock_items(count: usize) -> Vec<MockListItem> {
        (0..count)
            .map(|i| MockListItem {
                title: format!("Movie #{}", i + 1),
                year: format!("{}", 1990 + i),
            })
            .collect()
    }

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    #[test]
    fn test_navigation_bounds() {
        let mut viewer = ListViewer::new("Test".to_string(), "Empty".to_string());
        viewer.set_items(create_mock_items(3));

        assert!(!viewer.move_up());
        assert!(viewer.move_down());
        assert!(viewer.move_down());
        assert!(!viewer.move_down());
        assert_eq!(viewer.selected_index(), 2);
        assert!(viewer.move_to_start());
        assert_eq!(viewer.selected_index(), 0);
        assert!(viewer.move_to_end());
        assert_eq!(viewer.get_selected_item().unwrap().title, "Movie #3");
    }

    #[test]
    fn test_paging() {
        let mut viewer = ListViewer::new("Test".to_string(), "Empty".to_string());
        viewer.set_items(create_mock_items(25));

        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index(), 10);
        assert!(viewer.page_down());
        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index(), 24);
        assert!(!viewer.page_down());
        assert!(viewer.page_up());
        assert_eq!(viewer.selected_index(), 14);
    }

    #[test]
    fn test_set_items_keeps_valid_selection() {
        let mut viewer = ListViewer::new("Test".to_string(), "Empty".to_string());
        viewer.set_items(create_mock_items(5));
        viewer.set_selected_index(3);

        viewer.set_items(create_mock_items(5));
        assert_eq!(viewer.selected_index(), 3);

        viewer.set_items(create_mock_items(2));
        assert_eq!(viewer.selected_index(), 0);
    }

    #[test]
    fn test_set_selected_index_out_of_range() {
        let mut viewer = ListViewer::new("Test".to_string(), "Empty".to_string());
        viewer.set_items(create_mock_items(2));

        viewer.set_selected_index(7);
        assert_eq!(viewer.selected_index(), 0);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut viewer = ListViewer::new("Test".to_string(), "Empty".to_string());
        viewer.set_items(create_mock_items(20));

        viewer.set_selected_index(12);
        viewer.adjust_scroll_offset(5);
        assert_eq!(viewer.scroll_offset, 8);

        viewer.set_selected_index(2);
        viewer.adjust_scroll_offset(5);
        assert_eq!(viewer.scroll_offset, 2);
    }

    #[test]
    fn test_render_empty_message() {
        let mut viewer: ListViewer<MockListItem> =
            ListViewer::new("Results".to_string(), "Nothing here".to_string());
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();

        terminal.draw(|f| viewer.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Results"));
        assert!(buffer_contains_text(buffer, "Nothing here"));
    }

    #[test]
    fn test_render_items_and_counter() {
        let mut viewer = ListViewer::new("Results".to_string(), "Empty".to_string());
        viewer.set_items(create_mock_items(3));
        viewer.set_selected_index(1);
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();

        terminal.draw(|f| viewer.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Results (2/3)"));
        assert!(buffer_contains_text(buffer, "Movie #1 (1990)"));
        assert!(buffer_contains_text(buffer, "Movie #3 (1992)"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a much longer title", 10), "a much ...");
        assert_eq!(truncate_text("line\nbreak", 20), "line break");
        assert_eq!(truncate_text("abcdef", 2), "ab");
    }
}
