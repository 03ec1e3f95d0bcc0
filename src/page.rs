//! Page composition shared by every presentation layer.
//!
//! The page is the theme toggle followed by five sections in a fixed order.
//! Each section owns a stable anchor so in-page links resolve, and every
//! link on the page is either an in-page jump or an external target that
//! must open outside the current page.

use serde::Serialize;

use crate::models::{Icon, Portfolio};

/// One of the five top-level content blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Name, role and calls to action
    Hero,
    /// Biography and highlight cards
    About,
    /// Skill categories
    Skills,
    /// Project cards
    Projects,
    /// Contact details and form
    Contact,
}

impl Section {
    /// All sections in render order, top to bottom.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Anchor identifier (without `#`).
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Heading text.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About Me",
            Self::Skills => "Technical Skills",
            Self::Projects => "Featured Projects",
            Self::Contact => "Get In Touch",
        }
    }

    /// Resolves an anchor such as `"#skills"` or `"skills"`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Position in render order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

/// Where a link goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Jump within the page
    InPage(Section),
    /// Leave for another site (opened outside the current page)
    External(String),
}

impl LinkTarget {
    /// The `href` form of the target.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::InPage(section) => format!("#{}", section.anchor()),
            Self::External(url) => url.clone(),
        }
    }
}

/// A link rendered somewhere on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Section the link is rendered in
    pub section: Section,
    /// Visible text
    pub label: String,
    /// Optional icon drawn before the label
    pub icon: Option<Icon>,
    /// Destination
    pub target: LinkTarget,
}

impl Link {
    fn in_page(section: Section, label: &str, icon: Option<Icon>, to: Section) -> Self {
        Self {
            section,
            label: label.to_string(),
            icon,
            target: LinkTarget::InPage(to),
        }
    }

    fn external(section: Section, label: &str, icon: Option<Icon>, url: &str) -> Self {
        Self {
            section,
            label: label.to_string(),
            icon,
            target: LinkTarget::External(url.to_string()),
        }
    }

    /// True when activating the link must open a separate browsing context.
    #[must_use]
    pub const fn opens_new_context(&self) -> bool {
        matches!(self.target, LinkTarget::External(_))
    }
}

/// Composition root data: the ordered sections and their links.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    portfolio: &'a Portfolio,
}

impl<'a> Page<'a> {
    /// Composes the page for `portfolio`.
    #[must_use]
    pub const fn new(portfolio: &'a Portfolio) -> Self {
        Self { portfolio }
    }

    /// The content being rendered.
    #[must_use]
    pub const fn portfolio(&self) -> &'a Portfolio {
        self.portfolio
    }

    /// Sections in render order.
    #[must_use]
    pub const fn sections(&self) -> [Section; 5] {
        Section::ALL
    }

    /// Links of a single section, in render order.
    #[must_use]
    pub fn section_links(&self, section: Section) -> Vec<Link> {
        match section {
            Section::Hero => {
                let mut links = vec![
                    Link::in_page(section, "Get In Touch", None, Section::Contact),
                    Link::in_page(section, "View Work", None, Section::Projects),
                ];
                links.extend(self.portfolio.social_links.iter().map(|social| {
                    Link::external(section, &social.label, Some(social.icon), &social.url)
                }));
                links.push(Link::in_page(
                    section,
                    "Scroll down",
                    Some(Icon::ChevronDown),
                    Section::About,
                ));
                links
            }
            Section::Projects => self
                .portfolio
                .projects
                .iter()
                .flat_map(|project| {
                    [
                        Link::external(section, "Code", Some(Icon::Github), &project.github_url),
                        Link::external(
                            section,
                            "Live Demo",
                            Some(Icon::ExternalLink),
                            &project.live_url,
                        ),
                    ]
                })
                .collect(),
            Section::About | Section::Skills | Section::Contact => Vec::new(),
        }
    }

    /// Every link on the page, in render order.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        Section::ALL
            .into_iter()
            .flat_map(|section| self.section_links(section))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_order() {
        assert_eq!(
            Section::ALL,
            [
                Section::Hero,
                Section::About,
                Section::Skills,
                Section::Projects,
                Section::Contact
            ]
        );
    }

    #[test]
    fn test_anchors_unique() {
        let anchors: HashSet<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), 5);
        for expected in ["home", "about", "skills", "projects", "contact"] {
            assert!(anchors.contains(expected));
        }
    }

    #[test]
    fn test_from_anchor() {
        assert_eq!(Section::from_anchor("#contact"), Some(Section::Contact));
        assert_eq!(Section::from_anchor("home"), Some(Section::Hero));
        assert_eq!(Section::from_anchor("#blog"), None);
        assert_eq!(Section::from_anchor(""), None);
    }

    #[test]
    fn test_section_index() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_hero_links() {
        let portfolio = Portfolio::builtin();
        let page = Page::new(&portfolio);
        let links = page.section_links(Section::Hero);

        assert_eq!(links[0].target, LinkTarget::InPage(Section::Contact));
        assert_eq!(links[1].target, LinkTarget::InPage(Section::Projects));
        assert_eq!(links[0].target.href(), "#contact");
        assert_eq!(links[1].target.href(), "#projects");

        let external: Vec<&Link> = links.iter().filter(|l| l.opens_new_context()).collect();
        assert_eq!(external.len(), 2);
        assert_eq!(
            external[0].target.href(),
            "https://github.com/emmanuel-lara-dev"
        );
    }

    #[test]
    fn test_project_links_are_external_literals() {
        let portfolio = Portfolio::builtin();
        let page = Page::new(&portfolio);
        let links = page.section_links(Section::Projects);

        assert_eq!(links.len(), 2);
        assert!(links.iter().all(Link::opens_new_context));
        assert_eq!(
            links[0].target,
            LinkTarget::External("https://github.com/emmanuel-lara-dev/portfolio".to_string())
        );
        assert_eq!(
            links[1].target,
            LinkTarget::External("https://portfolio-beige-nine-ceavcrwpbb.vercel.app".to_string())
        );
    }

    #[test]
    fn test_links_follow_section_order() {
        let portfolio = Portfolio::builtin();
        let page = Page::new(&portfolio);
        let indices: Vec<usize> = page.links().iter().map(|l| l.section.index()).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }
}
