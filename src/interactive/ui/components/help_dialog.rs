use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "usePopcorn - Movie Search",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Search box:"),
            Line::from("  type        - Search (at least 3 characters)"),
            Line::from("  ↑/↓         - Navigate results"),
            Line::from("  Enter       - Open the highlighted movie"),
            Line::from("  Ctrl+W/U/K  - Delete word / to start / to end"),
            Line::from(""),
            Self::section("Movie detail:"),
            Line::from("  ←/→ or -/+  - Change rating"),
            Line::from("  1-9, 0      - Rate directly (0 = 10)"),
            Line::from("  a           - Add to watched list"),
            Line::from("  Esc         - Close the movie"),
            Line::from("  Enter       - Back to an empty search box"),
            Line::from(""),
            Self::section("Watched list:"),
            Line::from("  ↑/↓         - Navigate"),
            Line::from("  Space       - Open the movie"),
            Line::from("  d / Delete  - Remove from the list"),
            Line::from(""),
            Self::section("Everywhere:"),
            Line::from("  Tab         - Move focus"),
            Line::from("  F1 / ?      - Show this help"),
            Line::from("  F2 / F3     - Collapse results / side box"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
