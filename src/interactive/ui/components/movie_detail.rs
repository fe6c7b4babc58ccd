use crate::interactive::ui::components::star_rating::StarRating;
use crate::interactive::ui::components::{Component, view_layout::Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::MovieDetail;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// The selected movie with its rating control.
pub struct MovieDetailView {
    movie: Option<MovieDetail>,
    is_loading: bool,
    error: Option<String>,
    saved_rating: Option<u8>,
    star_rating: StarRating,
    scroll_offset: u16,
    focused: bool,
}

impl MovieDetailView {
    pub fn new(max_rating: u8) -> Self {
        Self {
            movie: None,
            is_loading: false,
            error: None,
            saved_rating: None,
            star_rating: StarRating::new(max_rating),
            scroll_offset: 0,
            focused: false,
        }
    }

    /// Resets scrolling when a different movie arrives.
    pub fn set_movie(&mut self, movie: Option<MovieDetail>) {
        let changed = self.movie.as_ref().map(|m| &m.id) != movie.as_ref().map(|m| &m.id);
        if changed {
            self.scroll_offset = 0;
        }
        self.movie = movie;
    }

    pub fn set_status(&mut self, is_loading: bool, error: Option<String>) {
        self.is_loading = is_loading;
        self.error = error;
    }

    pub fn set_rating(&mut self, value: u8, max: u8) {
        self.star_rating.set_max(max);
        self.star_rating.set_value(value);
    }

    pub fn set_saved_rating(&mut self, saved: Option<u8>) {
        self.saved_rating = saved;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn movie_lines(&self, movie: &MovieDetail) -> Vec<Line<'static>> {
        let imdb = movie
            .imdb_rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "N/A".to_string());

        let mut lines = vec![
            Line::from(Span::styled(movie.title.clone(), Styles::title())),
            Line::from(format!("{} • {}", movie.released, movie.runtime_label)),
            Line::from(Span::styled(movie.genre.clone(), Styles::label())),
            Line::from(format!("⭐ {imdb} IMDb rating")),
            Line::from(""),
            self.star_rating.line(),
        ];

        if self.star_rating.value() > 0 {
            let action = if self.saved_rating.is_some() {
                "[a] Update rating"
            } else {
                "[a] + Add to list"
            };
            lines.push(Line::from(Span::styled(action, Styles::success())));
        }
        if let Some(saved) = self.saved_rating {
            lines.push(Line::from(Span::styled(
                format!("You rated this movie {saved} ⭐"),
                Styles::dimmed(),
            )));
        }

        lines.extend([
            Line::from(""),
            Line::from(Span::styled(
                movie.plot.clone(),
                Styles::normal().add_modifier(Modifier::ITALIC),
            )),
            Line::from(format!("Starring {}", movie.actors)),
            Line::from(format!("Directed by {}", movie.director)),
        ]);
        lines
    }
}

impl Component for MovieDetailView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Movie (Esc: back)")
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));

        let paragraph = if self.is_loading {
            Paragraph::new(Span::styled("Loading...", Styles::label())).alignment(Alignment::Center)
        } else if let Some(error) = &self.error {
            Paragraph::new(Line::from(vec![
                Span::raw("⛔️ "),
                Span::styled(error.clone(), Styles::error()),
            ]))
            .alignment(Alignment::Center)
        } else if let Some(movie) = &self.movie {
            Paragraph::new(self.movie_lines(movie)).scroll((self.scroll_offset, 0))
        } else {
            Paragraph::new("")
        };

        f.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') if self.movie.is_some() => {
                (self.star_rating.value() > 0).then_some(Message::AddToWatched)
            }
            KeyCode::Backspace => Some(Message::CloseDetail),
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            _ if self.movie.is_some() => self.star_rating.handle_key(key),
            _ => None,
        }
    }
}
