//! About section: biography and highlight cards.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::page::Section;
use crate::tui::component::{card_title, heading_lines, rule, RenderContext, SectionView};
use crate::tui::palette::icon_glyph;

/// About widget.
pub struct AboutView;

impl SectionView for AboutView {
    fn section(&self) -> Section {
        Section::About
    }

    fn lines(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let mut lines = heading_lines(Section::About, palette);

        for paragraph in &ctx.portfolio.profile.bio {
            lines.push(Line::from(Span::styled(
                paragraph.clone(),
                Style::default().fg(palette.text_secondary),
            )));
            lines.push(Line::from(""));
        }

        for highlight in &ctx.portfolio.highlights {
            lines.push(rule(palette));
            lines.push(card_title(icon_glyph(highlight.icon), &highlight.title, palette));
            lines.push(Line::from(Span::styled(
                highlight.description.clone(),
                Style::default().fg(palette.text_muted),
            )));
        }
        lines.push(rule(palette));
        lines
    }
}
