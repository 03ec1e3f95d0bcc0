//! Status bar widget for status messages and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::palette::Palette;
use super::{AppState, Focus};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: error or status text, titled with the current
    /// section anchor.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled(
                    "ERROR: ",
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(error.clone(), Style::default().fg(palette.text)),
            ])
        } else if state.status_message.is_empty() {
            Self::hints_line(state, palette)
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(palette.text),
            ))
        };

        let title = format!(" #{} ", state.current_section().anchor());
        let status = Paragraph::new(line).style(palette.base()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(title, Style::default().fg(palette.primary)))
                .style(palette.base()),
        );

        f.render_widget(status, area);
    }

    fn hints_line(state: &AppState, palette: &Palette) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.focus {
            Focus::Form => &[("Tab", "field"), ("Ctrl+S", "send"), ("Esc", "leave")],
            Focus::Page | Focus::Link(_) => &[
                ("t", "theme"),
                ("Tab", "links"),
                ("1-5", "sections"),
                ("c", "contact"),
                ("?", "help"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(palette.text_muted),
            ));
        }
        Line::from(spans)
    }
}
