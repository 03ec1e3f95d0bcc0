//! Hero section: name, role, calls to action and social links.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::page::Section;
use crate::tui::component::{RenderContext, SectionView};

/// Hero widget.
pub struct HeroView;

impl SectionView for HeroView {
    fn section(&self) -> Section {
        Section::Hero
    }

    fn lines(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let profile = &ctx.portfolio.profile;

        // Links: two calls to action, the social links, then the scroll hint
        let link_count = ctx.links.len();
        let social: Vec<Span<'static>> = (2..link_count.saturating_sub(1))
            .flat_map(|i| [ctx.link_span(i), Span::raw("  ")])
            .collect();

        vec![
            Line::from(""),
            Line::from(""),
            Line::from(vec![
                Span::styled("Hi, I'm ", palette.heading()),
                Span::styled(
                    profile.name.clone(),
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .centered(),
            Line::from(""),
            Line::from(Span::styled(
                profile.role.clone(),
                Style::default()
                    .fg(palette.text_secondary)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(
                profile.tagline.clone(),
                Style::default().fg(palette.text_muted),
            ))
            .centered(),
            Line::from(""),
            Line::from(vec![ctx.link_span(0), Span::raw("   "), ctx.link_span(1)]).centered(),
            Line::from(""),
            Line::from(social).centered(),
            Line::from(""),
            Line::from(ctx.link_span(link_count.saturating_sub(1))).centered(),
            Line::from(""),
        ]
    }
}
