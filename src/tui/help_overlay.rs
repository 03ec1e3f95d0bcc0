//! Help overlay listing the keyboard shortcuts, opened with `?`.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use crate::branding;
use crate::shortcuts::{self, help_rows};

use super::palette::Palette;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: Self::help_content(&Palette::default()).len(),
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn section_lines(title: &str, context: &str, palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (keys, action) in help_rows(context) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{keys:<14}"), Style::default().fg(palette.success)),
                Span::styled(action.description(), Style::default().fg(palette.text)),
            ]));
        }
        lines.push(Line::from(""));
        lines
    }

    fn help_content(palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} - Help", branding::APP_DISPLAY_NAME),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
        ];
        lines.extend(Self::section_lines("PAGE", shortcuts::PAGE, palette));
        lines.extend(Self::section_lines("CONTACT FORM", shortcuts::FORM, palette));
        lines.push(Line::from(Span::styled(
            "  • External links are copied to the clipboard",
            Style::default().fg(palette.text),
        )));
        lines.push(Line::from(Span::styled(
            format!("  • Report issues: {}", branding::github_issues_url()),
            Style::default().fg(palette.text_muted),
        )));
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Press '?' to close help • Press ↑↓ to scroll",
                Style::default().fg(palette.text_muted),
            ))
            .centered(),
        );
        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let modal_area = super::centered_rect(60, 80, area);
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(Self::help_content(palette))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.primary)),
            )
            .style(palette.base())
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(palette.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_bounds() {
        let mut state = HelpOverlayState::new();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        for _ in 0..1000 {
            state.scroll_down();
        }
        assert_eq!(state.scroll_offset, state.total_lines - 1);
    }

    #[test]
    fn test_content_mentions_toggle_key() {
        let text: String = HelpOverlayState::help_content(&Palette::dark())
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Toggle light/dark theme"));
        assert!(text.contains(&branding::github_issues_url()));
    }
}
