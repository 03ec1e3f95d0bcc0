//! Projects section: one card per project with its two external links.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::page::Section;
use crate::tui::component::{heading_lines, rule, tag_line, RenderContext, SectionView};

/// Projects widget.
pub struct ProjectsView;

impl SectionView for ProjectsView {
    fn section(&self) -> Section {
        Section::Projects
    }

    fn lines(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let mut lines = heading_lines(Section::Projects, palette);

        for (i, project) in ctx.portfolio.projects.iter().enumerate() {
            lines.push(rule(palette));
            // Images can't be drawn here; show the reference instead
            lines.push(Line::from(Span::styled(
                format!("▨ {}", project.image_url),
                Style::default().fg(palette.text_muted),
            )));
            lines.push(Line::from(Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                project.description.clone(),
                Style::default().fg(palette.text_muted),
            )));
            lines.push(Line::from(""));
            lines.push(tag_line(&project.tech, palette));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                ctx.link_span(i * 2),
                Span::raw("   "),
                ctx.link_span(i * 2 + 1),
            ]));
        }
        lines.push(rule(palette));
        lines
    }
}
