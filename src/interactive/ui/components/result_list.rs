use crate::interactive::ui::components::{
    Component, list_item::ListItem, list_viewer::ListViewer, view_layout::Styles,
};
use crate::interactive::ui::events::Message;
use crate::schemas::SearchResultItem;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

impl ListItem for SearchResultItem {
    fn primary_text(&self) -> &str {
        &self.title
    }

    fn secondary_text(&self) -> String {
        format!("🗓 {}", self.year)
    }
}

/// What the results box shows instead of (or as) the list.
#[derive(Clone, Debug, Default, PartialEq)]
enum ResultView {
    #[default]
    List,
    Loading,
    Error(String),
}

pub struct ResultList {
    list_viewer: ListViewer<SearchResultItem>,
    view: ResultView,
    open: bool,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new(
                "Results".to_string(),
                "Type at least 3 characters to search".to_string(),
            ),
            view: ResultView::List,
            open: true,
        }
    }

    pub fn set_results(&mut self, results: Vec<SearchResultItem>) {
        self.list_viewer.set_items(results);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    /// Loading wins over an error, an error wins over the list.
    pub fn set_status(&mut self, is_loading: bool, error: Option<String>) {
        self.view = match (is_loading, error) {
            (true, _) => ResultView::Loading,
            (false, Some(message)) => ResultView::Error(message),
            (false, None) => ResultView::List,
        };
    }

    pub fn set_empty_message(&mut self, message: &str) {
        if self.list_viewer.empty_message != message {
            self.list_viewer.empty_message = message.to_string();
        }
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.list_viewer.set_focused(focused);
    }

    pub fn selected_result(&self) -> Option<&SearchResultItem> {
        self.list_viewer.get_selected_item()
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_viewer.selected_index()
    }

    fn selection_message(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index()))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.open {
            let collapsed = Paragraph::new("")
                .block(Block::default().title("[+] Results").borders(Borders::ALL))
                .style(Styles::dimmed());
            f.render_widget(collapsed, area);
            return;
        }

        let block = Block::default().title("Results").borders(Borders::ALL);
        match &self.view {
            ResultView::Loading => {
                let loader = Paragraph::new(Line::from(Span::styled("Loading...", Styles::label())))
                    .alignment(ratatui::layout::Alignment::Center)
                    .block(block);
                f.render_widget(loader, area);
            }
            ResultView::Error(message) => {
                let error = Paragraph::new(Line::from(vec![
                    Span::raw("⛔️ "),
                    Span::styled(message.as_str(), Styles::error()),
                ]))
                .alignment(ratatui::layout::Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
                f.render_widget(error, area);
            }
            ResultView::List => self.list_viewer.render(f, area),
        }
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
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_up();
                self.selection_message(moved)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_down();
                self.selection_message(moved)
            }
            KeyCode::PageUp => {
                let moved = self.list_viewer.page_up();
                self.selection_message(moved)
            }
            KeyCode::PageDown => {
                let moved = self.list_viewer.page_down();
                self.selection_message(moved)
            }
            KeyCode::Enter => self
                .selected_result()
                .map(|item| Message::SelectMovie(item.id.clone())),
            _ => None,
        }
    }
}
