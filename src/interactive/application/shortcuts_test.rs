#[cfg(test)]
mod tests {
    use super::super::shortcuts::*;
    use crate::interactive::domain::models::Focus;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_registered_key_dispatches() {
        let registry = ShortcutRegistry::new();
        let _escape = registry.register(KeyCode::Esc, Message::CloseDetail);

        let msg = registry.dispatch(&create_key_event(KeyCode::Esc), Focus::Detail);
        assert_eq!(msg, Some(Message::CloseDetail));

        let msg = registry.dispatch(&create_key_event(KeyCode::Enter), Focus::Detail);
        assert_eq!(msg, None);
    }

    #[test]
    fn test_dropping_guard_deregisters() {
        let registry = ShortcutRegistry::new();
        let escape = registry.register(KeyCode::Esc, Message::CloseDetail);
        assert_eq!(registry.len(), 1);

        drop(escape);

        assert!(registry.is_empty());
        assert_eq!(
            registry.dispatch(&create_key_event(KeyCode::Esc), Focus::Search),
            None
        );
    }

    #[test]
    fn test_rebinding_replaces_previous() {
        let registry = ShortcutRegistry::new();
        let mut slot = Some(registry.register(KeyCode::Esc, Message::CloseDetail));

        slot = None;
        slot.replace(registry.register(KeyCode::Esc, Message::CloseHelp));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.dispatch(&create_key_event(KeyCode::Esc), Focus::Search),
            Some(Message::CloseHelp)
        );
        drop(slot);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_skip_when_focused() {
        let registry = ShortcutRegistry::new();
        let _enter = registry.register_unless(KeyCode::Enter, Focus::Search, Message::FocusSearch);

        assert_eq!(
            registry.dispatch(&create_key_event(KeyCode::Enter), Focus::Search),
            None
        );
        assert_eq!(
            registry.dispatch(&create_key_event(KeyCode::Enter), Focus::Detail),
            Some(Message::FocusSearch)
        );
        assert_eq!(
            registry.dispatch(&create_key_event(KeyCode::Enter), Focus::Watched),
            Some(Message::FocusSearch)
        );
    }

    #[test]
    fn test_char_keys_match_case_insensitively() {
        let registry = ShortcutRegistry::new();
        let _help = registry.register(KeyCode::Char('h'), Message::ShowHelp);

        assert_eq!(
            registry.dispatch(&create_key_event(KeyCode::Char('H')), Focus::Watched),
            Some(Message::ShowHelp)
        );
        assert_eq!(
            registry.dispatch(&create_key_event(KeyCode::Char('h')), Focus::Watched),
            Some(Message::ShowHelp)
        );
    }

    #[test]
    fn test_modified_and_released_keys_ignored() {
        let registry = ShortcutRegistry::new();
        let _escape = registry.register(KeyCode::Esc, Message::CloseDetail);

        let mut with_ctrl = create_key_event(KeyCode::Esc);
        with_ctrl.modifiers = KeyModifiers::CONTROL;
        assert_eq!(registry.dispatch(&with_ctrl, Focus::Detail), None);

        let mut released = create_key_event(KeyCode::Esc);
        released.kind = KeyEventKind::Release;
        assert_eq!(registry.dispatch(&released, Focus::Detail), None);
    }

    #[test]
    fn test_guard_outliving_registry_is_harmless() {
        let registry = ShortcutRegistry::new();
        let guard = registry.register(KeyCode::Esc, Message::CloseDetail);

        drop(registry);
        drop(guard);
    }
}
