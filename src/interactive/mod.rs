use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::{AppConfig, SearchSettings};
use crate::omdb::{MovieApi, OmdbClient};
use crate::schemas::WatchedMovie;
use crate::storage::{FileStorage, PersistedState, Storage, WATCHED_KEY};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::{
    request_worker::{RequestWorker, WorkerEvent},
    search_service::SearchService,
    shortcuts::{Registration, ShortcutRegistry},
    terminal_io::{CrosstermEventSource, EventSource, TerminalTitle, TitleSink},
};
use self::constants::*;
use self::domain::models::{DetailRequest, Focus, Mode, Panel, SearchRequest};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    worker: RequestWorker,
    watched_store: PersistedState<Vec<WatchedMovie>>,
    shortcuts: ShortcutRegistry,
    escape_binding: Option<Registration>,
    _enter_binding: Registration,
    title_sink: Box<dyn TitleSink>,
    scheduled_search: Option<Instant>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api = OmdbClient::new(&config.api)?;
        let storage = FileStorage::new(config.storage_path.clone());
        info!(
            storage = %storage.path().display(),
            endpoint = api.base_url(),
            "Starting interactive session"
        );

        Ok(Self::with_parts(
            config.search,
            Arc::new(api),
            Arc::new(storage),
            Box::new(TerminalTitle),
        ))
    }

    /// Builds a session from its collaborators. The watched list is read
    /// from `storage` once, here.
    pub fn with_parts(
        settings: SearchSettings,
        api: Arc<dyn MovieApi>,
        storage: Arc<dyn Storage>,
        title_sink: Box<dyn TitleSink>,
    ) -> Self {
        let watched_store = PersistedState::load(storage, WATCHED_KEY, Vec::new());
        let state = AppState::new(settings, watched_store.get().clone());
        let service = Arc::new(SearchService::new(api, settings));

        let shortcuts = ShortcutRegistry::new();
        let enter_binding =
            shortcuts.register_unless(KeyCode::Enter, Focus::Search, Message::FocusSearch);

        Self {
            state,
            renderer: Renderer::new(settings.max_rating),
            worker: RequestWorker::new(service),
            watched_store,
            shortcuts,
            escape_binding: None,
            _enter_binding: enter_binding,
            title_sink,
            scheduled_search: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self, initial_query: Option<&str>) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.execute_command(Command::SetWindowTitle(DEFAULT_WINDOW_TITLE.to_string()));
        if let Some(query) = initial_query.filter(|q| !q.is_empty()) {
            self.handle_message(Message::QueryChanged(query.to_string()));
        }

        let result = self.run_loop(&mut terminal, &mut CrosstermEventSource);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Draws, applies finished work and timers, then waits for one input
    /// event. Returns when the user quits or `events` fails.
    pub(crate) fn run_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut dyn EventSource,
    ) -> Result<()> {
        loop {
            terminal
                .draw(|f| self.renderer.render(f, &self.state))
                .map_err(|e| anyhow!("Failed to draw frame: {e}"))?;

            self.tick();

            if let Some(Event::Key(key)) =
                events.next_event(Duration::from_millis(EVENT_POLL_INTERVAL_MS))?
            {
                if self.handle_input(key)? {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Drains finished requests and fires due timers.
    pub(crate) fn tick(&mut self) {
        while let Some(event) = self.worker.try_recv() {
            let msg = match event {
                WorkerEvent::Search(response) => Message::SearchCompleted {
                    id: response.id,
                    outcome: response.outcome,
                },
                WorkerEvent::Detail(response) => Message::DetailLoaded {
                    id: response.id,
                    outcome: response.outcome,
                },
            };
            self.handle_message(msg);
        }

        if let Some(deadline) = self.scheduled_search {
            if Instant::now() >= deadline {
                self.scheduled_search = None;
                self.handle_message(Message::SearchRequested);
            }
        }

        if let Some(timer) = self.message_timer {
            if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                self.execute_command(Command::ClearMessage);
            }
        }
    }

    pub(crate) fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            self.execute_command(Command::ScheduleClearMessage(
                DOUBLE_CTRL_C_TIMEOUT_SECS * 1000,
            ));
            return Ok(false);
        }

        if self.state.mode == Mode::Help {
            if let Some(msg) = self.renderer.get_help_dialog_mut().handle_key(key) {
                self.handle_message(msg);
            }
            return Ok(false);
        }

        // Global keys
        let global = match key.code {
            KeyCode::F(1) => Some(Message::ShowHelp),
            KeyCode::Char('?') if self.state.focus != Focus::Search => Some(Message::ShowHelp),
            KeyCode::F(2) => Some(Message::TogglePanel(Panel::Results)),
            KeyCode::F(3) => Some(Message::TogglePanel(Panel::Side)),
            KeyCode::Tab => Some(Message::CycleFocus),
            _ => self.shortcuts.dispatch(&key, self.state.focus),
        };
        if let Some(msg) = global {
            self.handle_message(msg);
            return Ok(false);
        }

        let message = match self.state.focus {
            Focus::Search => self.handle_search_input(key),
            Focus::Detail => self.renderer.get_movie_detail_mut().handle_key(key),
            Focus::Watched => self.renderer.get_watched_list_mut().handle_key(key),
        };
        if let Some(msg) = message {
            self.handle_message(msg);
        }

        Ok(false)
    }

    fn handle_search_input(&mut self, key: KeyEvent) -> Option<Message> {
        let list_key = match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Enter => {
                true
            }
            KeyCode::Char('p') | KeyCode::Char('n') => key.modifiers == KeyModifiers::CONTROL,
            _ => false,
        };
        if list_key {
            self.renderer.get_result_list_mut().handle_key(key)
        } else {
            self.renderer.get_search_bar_mut().handle_key(key)
        }
    }

    pub(crate) fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
        self.sync_shortcuts();
    }

    fn execute_command(&mut self, command: Command) {
        for command in command.into_list() {
            match command {
                Command::ExecuteSearch => {
                    self.scheduled_search = None;
                    self.worker.spawn_search(SearchRequest {
                        id: self.state.search.current_search_id,
                        query: self.state.search.query.clone(),
                    });
                }
                Command::ScheduleSearch(delay) => {
                    self.scheduled_search = Some(Instant::now() + Duration::from_millis(delay));
                }
                Command::CancelSearch => {
                    self.scheduled_search = None;
                    self.worker.cancel_search();
                }
                Command::FetchDetail => {
                    if let Some(imdb_id) = self.state.detail.selected_id.clone() {
                        self.worker.spawn_detail(DetailRequest {
                            id: self.state.detail.current_request_id,
                            imdb_id,
                        });
                    }
                }
                Command::CancelDetail => self.worker.cancel_detail(),
                Command::PersistWatched => self.persist_watched(),
                Command::SetWindowTitle(title) => {
                    if let Err(e) = self.title_sink.set_title(&title) {
                        warn!("Failed to set window title: {e:#}");
                    }
                }
                Command::ClearMessage => {
                    self.state.ui.message = None;
                    self.message_timer = None;
                }
                Command::ScheduleClearMessage(delay) => {
                    self.message_timer = Some(Instant::now());
                    self.message_clear_delay = delay;
                }
                Command::None | Command::Batch(_) => {}
            }
        }
    }

    fn persist_watched(&mut self) {
        let movies = self.state.watched.list.movies().to_vec();
        let count = movies.len();
        match self.watched_store.set(movies) {
            Ok(()) => debug!(count, "Watched list saved"),
            Err(e) => {
                warn!("{e:#}");
                self.state.ui.message = Some("Failed to save the watched list".to_string());
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = MESSAGE_CLEAR_DELAY_MS;
            }
        }
    }

    /// Escape closes the movie only while one is open.
    fn sync_shortcuts(&mut self) {
        match (self.state.detail_open(), self.escape_binding.is_some()) {
            (true, false) => {
                self.escape_binding =
                    Some(self.shortcuts.register(KeyCode::Esc, Message::CloseDetail));
            }
            (false, true) => self.escape_binding = None,
            _ => {}
        }
    }

    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}
