//! Contact section: contact details, the message form and the footer.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::contact::ContactField;
use crate::page::Section;
use crate::tui::component::{heading_lines, rule, RenderContext, SectionView};
use crate::tui::palette::icon_glyph;

/// Contact widget.
pub struct ContactView;

impl ContactView {
    fn field_lines(ctx: &RenderContext<'_>, field: ContactField) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let focused = ctx.form_active && ctx.form.focus == field;
        let value = ctx.form.value(field);

        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        let mut lines = vec![Line::from(Span::styled(field.label(), label_style))];

        if value.is_empty() && !focused {
            lines.push(Line::from(Span::styled(
                format!("│ {}", field.placeholder()),
                Style::default().fg(palette.text_muted),
            )));
            return lines;
        }

        let border_style = Style::default().fg(if focused {
            palette.accent
        } else {
            palette.border
        });
        let mut rows: Vec<String> = value.split('\n').map(str::to_string).collect();
        if focused {
            if let Some(last) = rows.last_mut() {
                last.push('█');
            }
        }
        for row in rows {
            lines.push(Line::from(vec![
                Span::styled("│ ", border_style),
                Span::styled(row, Style::default().fg(palette.text)),
            ]));
        }
        lines
    }
}

impl SectionView for ContactView {
    fn section(&self) -> Section {
        Section::Contact
    }

    fn lines(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let mut lines = heading_lines(Section::Contact, palette);

        lines.push(Line::from(Span::styled(
            "Let's work together",
            palette.heading(),
        )));
        lines.push(Line::from(Span::styled(
            "I'm always interested in hearing about new projects and opportunities. \
             Whether you have a question or just want to say hi, feel free to reach out!",
            Style::default().fg(palette.text_muted),
        )));
        lines.push(Line::from(""));

        for detail in &ctx.portfolio.contact_details {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", icon_glyph(detail.icon)),
                    Style::default().fg(palette.primary).bg(palette.tag_bg),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{}: ", detail.label),
                    Style::default().fg(palette.text_muted),
                ),
                Span::styled(
                    detail.value.clone(),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(rule(palette));

        for field in ContactField::ALL {
            lines.extend(Self::field_lines(ctx, field));
            lines.push(Line::from(""));
        }

        let button_style = if ctx.form_active {
            palette.focused()
        } else {
            Style::default()
                .fg(palette.background)
                .bg(palette.primary)
        };
        lines.push(Line::from(vec![
            Span::styled("  Send Message  ", button_style),
            Span::styled(
                if ctx.form_active {
                    "  Ctrl+S send · Tab next field · Esc leave form"
                } else {
                    "  press c to write a message"
                },
                Style::default().fg(palette.text_muted),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(rule(palette));
        lines.push(
            Line::from(Span::styled(
                ctx.portfolio.profile.copyright.clone(),
                Style::default().fg(palette.text_muted),
            ))
            .centered(),
        );
        lines.push(Line::from(""));
        lines
    }
}
