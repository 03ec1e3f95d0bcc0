//! Skills section: one card per category with its ordered tag list.

use ratatui::text::Line;

use crate::page::Section;
use crate::tui::component::{card_title, heading_lines, rule, tag_line, RenderContext, SectionView};
use crate::tui::palette::icon_glyph;

/// Skills widget.
pub struct SkillsView;

impl SectionView for SkillsView {
    fn section(&self) -> Section {
        Section::Skills
    }

    fn lines(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let mut lines = heading_lines(Section::Skills, palette);

        for category in &ctx.portfolio.skills {
            lines.push(rule(palette));
            lines.push(card_title(icon_glyph(category.icon), &category.title, palette));
            lines.push(tag_line(&category.skills, palette));
        }
        lines.push(rule(palette));
        lines
    }
}
