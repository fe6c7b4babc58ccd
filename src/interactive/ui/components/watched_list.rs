use crate::interactive::constants::WATCHED_SUMMARY_HEIGHT;
use crate::interactive::domain::watched::WatchedSummary;
use crate::interactive::ui::components::{
    Component, list_item::ListItem, list_viewer::ListViewer, view_layout::Styles,
};
use crate::interactive::ui::events::Message;
use crate::schemas::WatchedMovie;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

impl ListItem for WatchedMovie {
    fn primary_text(&self) -> &str {
        &self.title
    }

    fn secondary_text(&self) -> String {
        format!(
            "⭐ {} 🌟 {} ⏳ {}",
            format_average(self.imdb_rating, 1),
            self.user_rating,
            self.runtime_minutes
                .map(|m| format!("{m} min"))
                .unwrap_or_else(|| "N/A".to_string())
        )
    }
}

/// Formats an optional average, `N/A` when absent.
pub fn format_average(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Summary block plus the list of watched movies.
pub struct WatchedListView {
    list_viewer: ListViewer<WatchedMovie>,
    summary: Option<WatchedSummary>,
}

impl Default for WatchedListView {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchedListView {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new(
                "Watched".to_string(),
                "Rate a movie and add it to your list".to_string(),
            ),
            summary: None,
        }
    }

    pub fn set_movies(&mut self, movies: Vec<WatchedMovie>, summary: WatchedSummary) {
        self.list_viewer.set_items(movies);
        self.summary = Some(summary);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.list_viewer.set_focused(focused);
    }

    fn selection_message(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectWatched(self.list_viewer.selected_index()))
    }

    fn summary_lines(&self) -> Vec<Line<'static>> {
        let Some(summary) = &self.summary else {
            return Vec::new();
        };
        vec![
            Line::from(Span::styled("Movies you watched", Styles::title())),
            Line::from(vec![
                Span::raw(format!("#️⃣ {} movies  ", summary.count)),
                Span::styled(
                    format!("⭐ {}  ", format_average(summary.avg_imdb_rating, 2)),
                    Styles::star(),
                ),
                Span::styled(
                    format!("🌟 {}  ", format_average(summary.avg_user_rating, 2)),
                    Styles::star(),
                ),
                Span::raw(format!(
                    "⏳ {} min",
                    format_average(summary.avg_runtime_minutes, 0)
                )),
            ]),
        ]
    }
}

impl Component for WatchedListView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(WATCHED_SUMMARY_HEIGHT), // Summary
                Constraint::Min(0),                         // List
            ])
            .split(area);

        let summary = Paragraph::new(self.summary_lines())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(summary, chunks[0]);

        self.list_viewer.render(f, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                let moved = self.list_viewer.move_up();
                self.selection_message(moved)
            }
            KeyCode::Down => {
                let moved = self.list_viewer.move_down();
                self.selection_message(moved)
            }
            KeyCode::Home => {
                let moved = self.list_viewer.move_to_start();
                self.selection_message(moved)
            }
            KeyCode::End => {
                let moved = self.list_viewer.move_to_end();
                self.selection_message(moved)
            }
            KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') => self
                .list_viewer
                .get_selected_item()
                .map(|movie| Message::DeleteWatched(movie.id.clone())),
            KeyCode::Char(' ') => self
                .list_viewer
                .get_selected_item()
                .map(|movie| Message::SelectMovie(movie.id.clone())),
            _ => None,
        }
    }
}
