use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Trait for items that can be displayed in a generic list viewer
pub trait ListItem: Clone {
    /// Returns the main text, usually the movie title
    fn primary_text(&self) -> &str;

    /// Returns the dimmed text rendered after the title
    fn secondary_text(&self) -> String;

    /// Returns the color of the main text
    fn primary_color(&self) -> Color {
        Color::White
    }

    /// Creates the single display line, truncating the title to fit
    fn create_line(&self, max_width: usize) -> Line<'static> {
        let secondary = self.secondary_text();
        let secondary_width = secondary.chars().count() + 1;
        let title_width = max_width.saturating_sub(secondary_width).max(4);

        vec![
            Span::styled(
                truncate_text(self.primary_text(), title_width),
                Style::default().fg(self.primary_color()),
            ),
            Span::raw(" "),
            Span::styled(secondary, Style::default().fg(Color::DarkGray)),
        ]
        .into()
    }
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        text
    } else if max_width <= 3 {
        chars.into_iter().take(max_width).collect()
    } else {
        let truncated: String = chars.into_iter().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}
