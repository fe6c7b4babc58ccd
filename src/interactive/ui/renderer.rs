use crate::interactive::constants::EXIT_PROMPT;
use crate::interactive::domain::models::Focus;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component,
    help_dialog::HelpDialog,
    is_exit_prompt,
    movie_detail::MovieDetailView,
    result_list::ResultList,
    search_bar::SearchBar,
    view_layout::{Styles, ViewLayout},
    watched_list::WatchedListView,
};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    movie_detail: MovieDetailView,
    watched_list: WatchedListView,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new(max_rating: u8) -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            movie_detail: MovieDetailView::new(max_rating),
            watched_list: WatchedListView::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_browse(f, state);

        if state.mode == Mode::Help {
            self.help_dialog.render(f, f.area());
        }
    }

    fn render_browse(&mut self, f: &mut Frame, state: &AppState) {
        let areas = ViewLayout::split(f.area(), state.ui.results_open, state.ui.side_open);

        // Navigation bar
        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_loading(state.search.is_loading);
        self.search_bar.set_result_count(state.search.results.len());
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar.set_focused(state.focus == Focus::Search);
        self.search_bar.render(f, areas.nav);

        // Results box
        self.result_list.set_results(state.search.results.clone());
        self.result_list.set_selected_index(state.search.selected_index);
        self.result_list
            .set_status(state.search.is_loading, state.search.error.clone());
        self.result_list.set_empty_message(&empty_results_message(state));
        self.result_list.set_open(state.ui.results_open);
        self.result_list.set_focused(state.focus == Focus::Search);
        self.result_list.render(f, areas.results);

        // Side box: the open movie, otherwise the watched list
        if !state.ui.side_open {
            render_collapsed(f, areas.side, "[+] Watched");
        } else if state.detail_open() {
            self.sync_detail(state);
            self.movie_detail.render(f, areas.side);
        } else {
            self.watched_list
                .set_movies(state.watched.list.movies().to_vec(), state.watched.list.summary());
            self.watched_list
                .set_selected_index(state.watched.selected_index);
            self.watched_list.set_focused(state.focus == Focus::Watched);
            self.watched_list.render(f, areas.side);
        }

        ViewLayout::new(status_hints(state).to_string()).render_status_bar(f, areas.status);
    }

    fn sync_detail(&mut self, state: &AppState) {
        let detail = &state.detail;
        self.movie_detail.set_movie(detail.movie.clone());
        self.movie_detail
            .set_status(detail.is_loading, detail.error.clone());
        self.movie_detail
            .set_rating(detail.rating.value(), detail.rating.max());
        self.movie_detail.set_saved_rating(
            detail
                .selected_id
                .as_deref()
                .and_then(|id| state.watched.list.user_rating_for(id)),
        );
        self.movie_detail.set_focused(state.focus == Focus::Detail);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_movie_detail_mut(&mut self) -> &mut MovieDetailView {
        &mut self.movie_detail
    }

    pub fn get_watched_list_mut(&mut self) -> &mut WatchedListView {
        &mut self.watched_list
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}

fn render_collapsed(f: &mut Frame, area: Rect, title: &str) {
    let collapsed = Paragraph::new("")
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .style(Styles::dimmed());
    f.render_widget(collapsed, area);
}

fn empty_results_message(state: &AppState) -> String {
    let min = state.settings.min_query_len;
    if state.search.query.trim().chars().count() < min {
        format!("Type at least {min} characters to search")
    } else {
        "No results".to_string()
    }
}

fn status_hints(state: &AppState) -> &'static str {
    if is_exit_prompt(&state.ui.message) {
        return EXIT_PROMPT;
    }
    if state.mode == Mode::Help {
        return "Press any key to close help";
    }
    match state.focus {
        Focus::Search => "↑/↓: Select | Enter: Open | Tab: Focus | F1: Help | Ctrl+C x2: Quit",
        Focus::Detail => "←/→ 0-9: Rate | a: Add | Esc: Close | Enter: New search | F1: Help",
        Focus::Watched => "↑/↓: Select | Space: Open | d: Remove | Enter: New search | F1: Help",
    }
}
