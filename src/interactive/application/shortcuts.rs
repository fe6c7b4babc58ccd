use crate::interactive::domain::models::Focus;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Binding {
    id: u64,
    key: KeyCode,
    skip_when: Option<Focus>,
    message: Message,
}

#[derive(Default)]
struct Bindings {
    next_id: u64,
    entries: Vec<Binding>,
}

/// Session-wide single-key bindings.
///
/// Each registration returns a guard; the binding lives exactly as long as
/// its guard.
#[derive(Clone, Default)]
pub struct ShortcutRegistry {
    inner: Rc<RefCell<Bindings>>,
}

/// Keeps one binding registered. Dropping it removes the binding.
pub struct Registration {
    registry: Weak<RefCell<Bindings>>,
    id: u64,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.borrow_mut().entries.retain(|b| b.id != self.id);
        }
    }
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, key: KeyCode, message: Message) -> Registration {
        self.insert(key, None, message)
    }

    /// Like [`register`](Self::register), but the binding stays silent while
    /// `skip_when` has focus.
    pub fn register_unless(&self, key: KeyCode, skip_when: Focus, message: Message) -> Registration {
        self.insert(key, Some(skip_when), message)
    }

    fn insert(&self, key: KeyCode, skip_when: Option<Focus>, message: Message) -> Registration {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.entries.push(Binding {
            id,
            key,
            skip_when,
            message,
        });
        Registration {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Message of the first binding matching `key`, if any.
    ///
    /// Character keys match case-insensitively. Keys held with Ctrl or Alt
    /// never match.
    pub fn dispatch(&self, key: &KeyEvent, focus: Focus) -> Option<Message> {
        if key.kind != KeyEventKind::Press
            || key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|b| b.skip_when != Some(focus))
            .find(|b| keys_match(b.key, key.code))
            .map(|b| b.message.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn keys_match(bound: KeyCode, pressed: KeyCode) -> bool {
    match (bound, pressed) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
        (a, b) => a == b,
    }
}
