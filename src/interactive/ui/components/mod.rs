pub mod help_dialog;
pub mod list_item;
pub mod list_viewer;
pub mod movie_detail;
pub mod result_list;
pub mod search_bar;
pub mod star_rating;
pub mod view_layout;
pub mod watched_list;

#[cfg(test)]
mod help_dialog_test;
#[cfg(test)]
mod list_viewer_test;

use crate::interactive::constants::EXIT_PROMPT;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message.as_deref() == Some(EXIT_PROMPT)
}
