use crate::interactive::domain::rating::rating_for_digit;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::Styles;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

const FULL_STAR: &str = "★";
const EMPTY_STAR: &str = "☆";

/// A row of `max` stars. Keys only propose a value; the state decides.
pub struct StarRating {
    value: u8,
    max: u8,
}

impl StarRating {
    pub fn new(max: u8) -> Self {
        Self { value: 0, max }
    }

    pub fn set_value(&mut self, value: u8) {
        self.value = value.min(self.max);
    }

    pub fn set_max(&mut self, max: u8) {
        self.max = max;
        self.value = self.value.min(max);
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn line(&self) -> Line<'static> {
        let filled = usize::from(self.value);
        let empty = usize::from(self.max.saturating_sub(self.value));
        let label = if self.value > 0 {
            self.value.to_string()
        } else {
            String::new()
        };

        Line::from(vec![
            Span::styled(FULL_STAR.repeat(filled), Styles::star()),
            Span::styled(EMPTY_STAR.repeat(empty), Styles::star()),
            Span::raw(" "),
            Span::styled(label, Styles::star()),
        ])
    }

    fn propose(&self, value: u8) -> Option<Message> {
        let value = value.min(self.max);
        (value > 0 && value != self.value).then_some(Message::SetRating(value))
    }
}

impl Component for StarRating {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => {
                self.propose(self.value.saturating_add(1))
            }
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => {
                self.propose(self.value.saturating_sub(1))
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.propose(rating_for_digit(c)?),
            _ => None,
        }
    }
}
