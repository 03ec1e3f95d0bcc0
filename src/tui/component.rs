//! Section widget trait and shared rendering helpers.
//!
//! Sections render to a list of [`Line`]s instead of drawing into a fixed
//! area. The page stacks those lines, wraps them to the terminal width and
//! scrolls through the result, which is how anchors resolve to offsets.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::contact::ContactForm;
use crate::models::Portfolio;
use crate::page::{Link, Section};

use super::palette::{icon_glyph, Palette};

/// Everything a section needs to render itself.
pub struct RenderContext<'a> {
    /// Style scope derived from the active theme
    pub palette: &'a Palette,
    /// Content being rendered
    pub portfolio: &'a Portfolio,
    /// Links of this section with their page-wide index
    pub links: Vec<(usize, Link)>,
    /// Page-wide index of the focused link, if any
    pub focused_link: Option<usize>,
    /// Contact form input
    pub form: &'a ContactForm,
    /// Whether keystrokes currently go to the contact form
    pub form_active: bool,
}

impl RenderContext<'_> {
    /// Renders the section's link at position `nth` (within this section).
    pub fn link_span(&self, nth: usize) -> Span<'static> {
        let Some((index, link)) = self.links.get(nth) else {
            return Span::raw("");
        };

        let text = match link.icon {
            Some(icon) => format!("{} {}", icon_glyph(icon), link.label),
            None => link.label.clone(),
        };
        let text = if link.opens_new_context() {
            format!("[{text} ↗]")
        } else {
            format!("[{text}]")
        };

        let style = if self.focused_link == Some(*index) {
            self.palette.focused()
        } else {
            self.palette.link()
        };
        Span::styled(text, style)
    }
}

/// A page section rendered as lines of styled text.
pub trait SectionView {
    /// Which section this view renders.
    fn section(&self) -> Section;

    /// Renders the section body (the heading is added by [`heading_lines`]).
    fn lines(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>>;
}

/// Heading block shared by every section except the hero.
pub fn heading_lines(section: Section, palette: &Palette) -> Vec<Line<'static>> {
    let title = section.title();
    let (first, last) = title.rsplit_once(' ').unwrap_or(("", title));

    let mut spans = Vec::new();
    if !first.is_empty() {
        spans.push(Span::styled(format!("{first} "), palette.heading()));
    }
    spans.push(Span::styled(
        last.to_string(),
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    ));

    vec![
        Line::from(""),
        Line::from(spans).centered(),
        Line::from(Span::styled(
            format!("#{}", section.anchor()),
            Style::default().fg(palette.text_muted),
        ))
        .centered(),
        Line::from(""),
    ]
}

/// A row of tags, e.g. `[React] [TypeScript]`.
pub fn tag_line(tags: &[String], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {tag} "), palette.tag()));
    }
    Line::from(spans)
}

/// Title line of a card: icon glyph followed by the bold title.
pub fn card_title(glyph: &str, title: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(palette.primary)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Horizontal rule spanning a card.
pub fn rule(palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(palette.border),
    ))
}
