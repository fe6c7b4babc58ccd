#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::help_dialog::*;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
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
    fn test_help_dialog_render() {
        let mut dialog = HelpDialog::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "usePopcorn - Movie Search"));
        assert!(buffer_contains_text(buffer, "Search box:"));
        assert!(buffer_contains_text(buffer, "Movie detail:"));
        assert!(buffer_contains_text(buffer, "Watched list:"));
        assert!(buffer_contains_text(buffer, "Press any key to close"));
    }

    #[test]
    fn test_help_dialog_small_terminal() {
        let mut dialog = HelpDialog::new();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();

        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    }

    #[test]
    fn test_any_key_closes() {
        let mut dialog = HelpDialog::new();

        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q'), KeyCode::F(1)] {
            assert_eq!(
                dialog.handle_key(create_key_event(code)),
                Some(Message::CloseHelp)
            );
        }
    }
}
