use crate::interactive::constants::{COLLAPSED_BOX_WIDTH, NAV_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Areas of the main screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenAreas {
    pub nav: Rect,
    pub results: Rect,
    pub side: Rect,
    pub status: Rect,
}

/// Nav bar on top, the two boxes side by side, a hint line at the bottom.
pub struct ViewLayout {
    status_text: String,
}

impl ViewLayout {
    pub fn new(status_text: String) -> Self {
        Self { status_text }
    }

    /// Splits `area`. A collapsed box keeps a narrow strip so it can be
    /// reopened; when both are open they share the width evenly.
    pub fn split(area: Rect, results_open: bool, side_open: bool) -> ScreenAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        let columns = match (results_open, side_open) {
            (true, true) => [Constraint::Percentage(50), Constraint::Percentage(50)],
            (false, true) => [Constraint::Length(COLLAPSED_BOX_WIDTH), Constraint::Min(0)],
            (true, false) => [Constraint::Min(0), Constraint::Length(COLLAPSED_BOX_WIDTH)],
            (false, false) => [
                Constraint::Length(COLLAPSED_BOX_WIDTH),
                Constraint::Length(COLLAPSED_BOX_WIDTH),
            ],
        };
        let boxes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(columns)
            .split(rows[1]);

        ScreenAreas {
            nav: rows[0],
            results: boxes[0],
            side: boxes[1],
            status: rows[2],
        }
    }

    pub fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_bar = Paragraph::new(self.status_text.as_str())
            .style(Styles::dimmed())
            .alignment(Alignment::Center);

        f.render_widget(status_bar, area);
    }
}

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Magenta;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const STAR: Color = Color::Yellow;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn logo() -> Style {
        Style::default()
            .fg(ColorScheme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn star() -> Style {
        Style::default().fg(ColorScheme::STAR)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(ColorScheme::PRIMARY)
        } else {
            Style::default().fg(ColorScheme::TEXT_DIM)
        }
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
