use crate::config::SearchSettings;
use crate::interactive::constants::*;
use crate::interactive::domain::models::{Focus, Panel};
use crate::interactive::domain::rating::RatingDraft;
use crate::interactive::domain::watched::WatchedList;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::omdb::FetchError;
use crate::schemas::{MovieDetail, SearchResultItem, WatchedMovie};
use tracing::{debug, warn};

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub settings: SearchSettings,
    pub search: SearchState,
    pub detail: DetailState,
    pub watched: WatchedState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    pub selected_index: usize,
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_search_id: u64,
}

pub struct DetailState {
    pub selected_id: Option<String>,
    pub movie: Option<MovieDetail>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_request_id: u64,
    pub rating: RatingDraft,
}

pub struct WatchedState {
    pub list: WatchedList,
    pub selected_index: usize,
}

pub struct UiState {
    pub message: Option<String>,
    pub results_open: bool,
    pub side_open: bool,
    pub window_title: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SearchSettings::default(), Vec::new())
    }
}

impl AppState {
    pub fn new(settings: SearchSettings, watched: Vec<WatchedMovie>) -> Self {
        Self {
            mode: Mode::Browse,
            focus: Focus::Search,
            settings,
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                selected_index: 0,
                is_loading: false,
                error: None,
                current_search_id: 0,
            },
            detail: DetailState {
                selected_id: None,
                movie: None,
                is_loading: false,
                error: None,
                current_request_id: 0,
                rating: RatingDraft::new(settings.max_rating, 0),
            },
            watched: WatchedState {
                list: WatchedList::new(watched),
                selected_index: 0,
            },
            ui: UiState {
                message: None,
                results_open: true,
                side_open: true,
                window_title: DEFAULT_WINDOW_TITLE.to_string(),
            },
        }
    }

    pub fn detail_open(&self) -> bool {
        self.detail.selected_id.is_some()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => self.on_query_changed(q),
            Message::SearchRequested => {
                if !self.query_is_searchable() {
                    return Command::None;
                }
                self.search.current_search_id += 1;
                self.search.is_loading = true;
                self.search.error = None;
                Command::ExecuteSearch
            }
            Message::SearchCompleted { id, outcome } => {
                if id != self.search.current_search_id {
                    debug!(id, current = self.search.current_search_id, "Dropping stale search result");
                    return Command::None;
                }
                match outcome {
                    Ok(results) => {
                        self.search.results = results;
                        self.search.selected_index = 0;
                        self.search.error = None;
                        self.search.is_loading = false;
                    }
                    Err(e) => {
                        log_fetch_error("search", &e);
                        self.search.results.clear();
                        self.search.selected_index = 0;
                        self.search.error = Some(e.user_message().to_string());
                        self.search.is_loading = false;
                    }
                }
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::SelectMovie(id) => {
                if self.detail.selected_id.as_deref() == Some(id.as_str()) {
                    return self.close_detail();
                }
                let saved = self.watched.list.user_rating_for(&id).unwrap_or(0);
                self.detail.selected_id = Some(id);
                self.detail.movie = None;
                self.detail.error = None;
                self.detail.is_loading = true;
                self.detail.rating = RatingDraft::new(self.settings.max_rating, saved);
                self.detail.current_request_id += 1;
                self.focus = Focus::Detail;
                self.ui.side_open = true;
                Command::FetchDetail
            }
            Message::DetailLoaded { id, outcome } => {
                if id != self.detail.current_request_id || !self.detail_open() {
                    debug!(id, current = self.detail.current_request_id, "Dropping stale detail");
                    return Command::None;
                }
                match outcome {
                    Ok(movie) => {
                        let title = format!("{MOVIE_TITLE_PREFIX}{}", movie.title);
                        self.detail.movie = Some(movie);
                        self.detail.is_loading = false;
                        self.detail.error = None;
                        self.ui.window_title = title.clone();
                        Command::SetWindowTitle(title)
                    }
                    Err(e) => {
                        log_fetch_error("detail", &e);
                        self.detail.is_loading = false;
                        self.detail.error = Some(e.user_message().to_string());
                        Command::None
                    }
                }
            }
            Message::CloseDetail => {
                if self.detail_open() {
                    self.close_detail()
                } else {
                    Command::None
                }
            }
            Message::SetRating(value) => {
                if self.detail.movie.is_some() {
                    self.detail.rating.set(value);
                }
                Command::None
            }
            Message::AddToWatched => self.add_to_watched(),
            Message::SelectWatched(index) => {
                if index < self.watched.list.len() {
                    self.watched.selected_index = index;
                }
                Command::None
            }
            Message::DeleteWatched(id) => {
                let title = self.watched.list.get(&id).map(|m| m.title.clone());
                if !self.watched.list.remove(&id) {
                    return Command::None;
                }
                let last = self.watched.list.len().saturating_sub(1);
                self.watched.selected_index = self.watched.selected_index.min(last);
                if self.watched.list.is_empty() && self.focus == Focus::Watched {
                    self.focus = Focus::Search;
                }
                self.ui.message = Some(format!("Removed {}", title.unwrap_or(id)));
                Command::Batch(vec![
                    Command::PersistWatched,
                    Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS),
                ])
            }
            Message::FocusSearch => {
                self.focus = Focus::Search;
                let mut commands = vec![self.on_query_changed(String::new())];
                if self.detail_open() {
                    commands.push(self.close_detail());
                }
                Command::Batch(commands)
            }
            Message::CycleFocus => {
                self.focus = self.focus.next(self.detail_open(), self.ui.side_open);
                Command::None
            }
            Message::TogglePanel(Panel::Results) => {
                self.ui.results_open = !self.ui.results_open;
                Command::None
            }
            Message::TogglePanel(Panel::Side) => {
                self.ui.side_open = !self.ui.side_open;
                if !self.ui.side_open {
                    self.focus = Focus::Search;
                }
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Browse;
                Command::None
            }
        }
    }

    fn query_is_searchable(&self) -> bool {
        self.search.query.trim().chars().count() >= self.settings.min_query_len
    }

    fn on_query_changed(&mut self, query: String) -> Command {
        self.search.query = query;
        // Invalidates any response still on its way.
        self.search.current_search_id += 1;

        if !self.query_is_searchable() {
            self.search.results.clear();
            self.search.selected_index = 0;
            self.search.error = None;
            self.search.is_loading = false;
            return Command::CancelSearch;
        }

        // Nothing is outstanding until the debounced request goes out.
        self.search.is_loading = false;
        let mut commands = vec![Command::CancelSearch];
        if self.detail_open() {
            commands.push(self.close_detail());
        }
        if self.settings.debounce_ms == 0 {
            commands.push(self.update(Message::SearchRequested));
        } else {
            commands.push(Command::ScheduleSearch(self.settings.debounce_ms));
        }
        Command::Batch(commands)
    }

    fn close_detail(&mut self) -> Command {
        self.detail.selected_id = None;
        self.detail.movie = None;
        self.detail.is_loading = false;
        self.detail.error = None;
        self.detail.current_request_id += 1;
        self.detail.rating = RatingDraft::new(self.settings.max_rating, 0);
        self.focus = Focus::Search;
        self.ui.window_title = DEFAULT_WINDOW_TITLE.to_string();
        Command::Batch(vec![
            Command::CancelDetail,
            Command::SetWindowTitle(DEFAULT_WINDOW_TITLE.to_string()),
        ])
    }

    fn add_to_watched(&mut self) -> Command {
        let Some(movie) = self.detail.movie.as_ref() else {
            return Command::None;
        };
        if !self.detail.rating.can_submit() {
            return Command::None;
        }

        let watched = WatchedMovie::from_detail(
            movie,
            self.detail.rating.value(),
            self.detail.rating.revisions(),
        );
        let title = watched.title.clone();
        let replaced = self.watched.list.upsert(watched);
        self.ui.message = Some(if replaced {
            format!("Updated rating for {title}")
        } else {
            format!("Added {title} to watched")
        });

        Command::Batch(vec![
            Command::PersistWatched,
            self.close_detail(),
            Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS),
        ])
    }
}

fn log_fetch_error(kind: &str, error: &FetchError) {
    match error {
        FetchError::NotFound => debug!(kind, "Nothing found"),
        other => warn!(kind, "Fetch failed: {other}"),
    }
}
