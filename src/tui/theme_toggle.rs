//! Theme toggle overlay pinned to the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

use super::palette::Palette;

/// The toggle control. Drawn after the page so scrolling never moves it.
pub struct ThemeToggle;

impl ThemeToggle {
    /// Label for the current theme.
    #[must_use]
    pub const fn label(theme: Theme) -> &'static str {
        theme.toggle_label()
    }

    /// Area occupied by the toggle inside `area`.
    #[must_use]
    pub fn area(area: Rect, theme: Theme) -> Rect {
        let width = (Self::label(theme).chars().count() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + 1.min(area.height.saturating_sub(height)),
            width,
            height,
        }
    }

    /// Render the toggle.
    pub fn render(f: &mut Frame, area: Rect, palette: &Palette) {
        let toggle_area = Self::area(area, palette.theme);
        let button = Paragraph::new(Self::label(palette.theme))
            .centered()
            .style(
                Style::default()
                    .fg(palette.text)
                    .bg(palette.surface)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.border))
                    .style(Style::default().bg(palette.surface)),
            );

        f.render_widget(Clear, toggle_area);
        f.render_widget(button, toggle_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_top_right() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = ThemeToggle::area(screen, Theme::Light);
        assert_eq!(area.right(), 79);
        assert_eq!(area.y, 1);
        assert_eq!(area.height, 3);
    }

    #[test]
    fn test_area_fits_tiny_screen() {
        let screen = Rect::new(0, 0, 6, 2);
        let area = ThemeToggle::area(screen, Theme::Dark);
        assert!(area.width <= 6);
        assert!(area.bottom() <= 2);
    }
}
