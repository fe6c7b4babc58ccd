use super::list_item::ListItem;
use super::view_layout::Styles;
use crate::interactive::constants::PAGE_SIZE;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

/// Scrollable single-selection list shared by the results and watched boxes.
pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub title: String,
    pub empty_message: String,
    pub focused: bool,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            title,
            empty_message,
            focused: false,
        }
    }

    /// Replaces the items, keeping the selection when it is still in range.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.selected_index >= self.items.len() {
            self.selected_index = 0;
            self.scroll_offset = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn page_down(&mut self) -> bool {
        let new_index = (self.selected_index + PAGE_SIZE).min(self.items.len().saturating_sub(1));
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn move_to_start(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            true
        } else {
            false
        }
    }

    pub fn move_to_end(&mut self) -> bool {
        let last_index = self.items.len().saturating_sub(1);
        if self.selected_index < last_index {
            self.selected_index = last_index;
            true
        } else {
            false
        }
    }

    /// Keeps the selected row inside the visible window.
    pub fn adjust_scroll_offset(&mut self, visible_count: usize) {
        if visible_count == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_count {
            self.scroll_offset = self.selected_index + 1 - visible_count;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));

        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .block(block.title(self.title.clone()))
                .style(Styles::dimmed());
            f.render_widget(empty_message, area);
            return;
        }

        let visible_count = area.height.saturating_sub(2) as usize;
        self.adjust_scroll_offset(visible_count);
        let start = self.scroll_offset;
        let end = (start + visible_count).min(self.items.len());
        let text_width = area.width.saturating_sub(4) as usize;

        let items: Vec<TuiListItem> = self.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let style = if start + offset == self.selected_index && self.focused {
                    Styles::selected()
                } else {
                    Style::default()
                };
                TuiListItem::new(item.create_line(text_width)).style(style)
            })
            .collect();

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.items.len()
        );

        let list = List::new(items).block(block.title(title));
        f.render_widget(list, area);
    }
}
