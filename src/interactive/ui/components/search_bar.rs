use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::Styles;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LOGO: &str = "🍿 usePopcorn";
const PLACEHOLDER: &str = "Search movies...";

/// The navigation bar: logo, the query input and the result count.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    result_count: usize,
    focused: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    /// Replaces the query. The cursor moves to the end only when the text
    /// actually changed, so syncing the same query every frame keeps it.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_result_count(&mut self, count: usize) {
        self.result_count = count;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    /// Byte offset of the character at `char_pos`.
    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Deletes the characters in `start..end` and leaves the cursor at `start`.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert_char(&mut self, c: char) -> Option<Message> {
        let byte_pos = self.byte_offset(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn input_spans(&self) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

        if self.query.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(PLACEHOLDER, Styles::dimmed()));
            return spans;
        }

        if !self.focused {
            return vec![Span::raw(self.query.as_str())];
        }

        let split = self.byte_offset(self.cursor_position);
        let (before, after) = self.query.split_at(split);
        let mut after_chars = after.chars();
        let under_cursor = after_chars.next().map(String::from).unwrap_or_else(|| " ".to_string());

        vec![
            Span::raw(before),
            Span::styled(under_cursor, cursor_style),
            Span::raw(after_chars.as_str()),
        ]
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(18), // Logo
                Constraint::Min(20),    // Input
                Constraint::Length(22), // Result count
            ])
            .split(area);

        let logo = Paragraph::new(Line::from(Span::styled(LOGO, Styles::logo())))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(logo, chunks[0]);

        let mut title = "Search".to_string();
        if self.is_loading {
            title.push_str(" [loading...]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let input = Paragraph::new(Line::from(self.input_spans()))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Styles::border(self.focused)),
            )
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(input, chunks[1]);

        let count = Paragraph::new(Line::from(vec![
            Span::raw("Found "),
            Span::styled(self.result_count.to_string(), Styles::title()),
            Span::raw(" results"),
        ]))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(count, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        // Handle Control key combinations
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+A - Move cursor to beginning of line
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                // Ctrl+E - Move cursor to end of line
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                // Ctrl+B - Move cursor backward one character
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                // Ctrl+F - Move cursor forward one character
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                    None
                }
                // Ctrl+H - Delete character before cursor (same as backspace)
                KeyCode::Char('h') if self.cursor_position > 0 => {
                    self.delete_range(self.cursor_position - 1, self.cursor_position)
                }
                // Ctrl+D - Delete character under cursor
                KeyCode::Char('d') => {
                    self.delete_range(self.cursor_position, self.cursor_position + 1)
                }
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
                _ => None,
            };
        }

        // Handle Alt key combinations
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                // Alt+B - Move cursor backward one word
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                // Alt+F - Move cursor forward one word
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace if self.cursor_position > 0 => {
                self.delete_range(self.cursor_position - 1, self.cursor_position)
            }
            KeyCode::Delete => self.delete_range(self.cursor_position, self.cursor_position + 1),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
