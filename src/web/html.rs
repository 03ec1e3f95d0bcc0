//! Server-side rendering of the page as a single HTML5 document.
//!
//! The theme scope is the `dark` class on the root element. `theme.js`
//! toggles that class in the browser; the server only picks the initial one.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::contact::ContactField;
use crate::models::{Icon, Portfolio};
use crate::page::{Link, Page, Section};
use crate::theme::Theme;

use super::static_files::StaticAssets;

/// How the stylesheet and theme script reach the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetMode {
    /// Linked from `/assets/`, for pages served by the web server
    #[default]
    Linked,
    /// Embedded in the document, for pages opened from disk
    Inline,
}

/// Contents of an embedded asset as text.
fn embedded_text(file: &str) -> Option<String> {
    StaticAssets::get(file)
        .map(|asset| String::from_utf8_lossy(asset.data.as_ref()).into_owned())
}

fn stylesheet(mode: AssetMode) -> String {
    let inline = match mode {
        AssetMode::Inline => embedded_text("style.css"),
        AssetMode::Linked => None,
    };
    inline.map_or_else(
        || r#"<link rel="stylesheet" href="/assets/style.css">"#.to_string(),
        |css| format!("<style>{css}</style>"),
    )
}

fn script(mode: AssetMode) -> String {
    let inline = match mode {
        AssetMode::Inline => embedded_text("theme.js"),
        AssetMode::Linked => None,
    };
    // A literal closing tag inside the script would end the element early
    inline.map_or_else(
        || r#"<script src="/assets/theme.js"></script>"#.to_string(),
        |js| format!("<script>{}</script>", js.replace("</", r"<\/")),
    )
}

/// Inline symbol drawn for an icon.
#[must_use]
pub const fn icon_symbol(icon: Icon) -> &'static str {
    match icon {
        Icon::Code => "&lt;/&gt;",
        Icon::Server => "&#x1F5A5;",
        Icon::Database => "&#x1F5C4;",
        Icon::Globe => "&#x1F310;",
        Icon::Wrench => "&#x1F527;",
        Icon::Github => "&#x2325;",
        Icon::Mail => "&#x2709;",
        Icon::Phone => "&#x260F;",
        Icon::MapPin => "&#x1F4CD;",
        Icon::ExternalLink => "&#x2197;",
        Icon::ChevronDown => "&#x2304;",
    }
}

fn icon_span(icon: Icon) -> String {
    format!(
        r#"<span class="icon icon-{}" aria-hidden="true">{}</span>"#,
        icon.name(),
        icon_symbol(icon)
    )
}

/// Renders an anchor. External targets open in a new browsing context.
fn link_html(link: &Link, class: &str, show_label: bool) -> String {
    let mut html = format!(
        r#"<a class="{class}" href="{}""#,
        attr(&link.target.href())
    );
    if link.opens_new_context() {
        html.push_str(r#" target="_blank" rel="noopener noreferrer""#);
    }
    let _ = write!(html, r#" aria-label="{}">"#, attr(&link.label));
    if let Some(icon) = link.icon {
        html.push_str(&icon_span(icon));
    }
    if show_label {
        let _ = write!(html, "<span>{}</span>", text(&link.label));
    }
    html.push_str("</a>");
    html
}

/// Section heading with the last word highlighted.
fn heading(section: Section) -> String {
    let title = section.title();
    match title.rsplit_once(' ') {
        Some((first, last)) => format!(
            r#"<h2>{} <span class="text-gradient">{}</span></h2>"#,
            text(first),
            text(last)
        ),
        None => format!("<h2>{}</h2>", text(title)),
    }
}

fn tags(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="tag">{}</span>"#, text(item)))
        .collect()
}

fn render_hero(page: &Page<'_>, out: &mut String) {
    let profile = &page.portfolio().profile;
    let links = page.section_links(Section::Hero);
    let count = links.len();

    let _ = write!(
        out,
        r#"<section id="{}" class="hero"><div class="container center">"#,
        Section::Hero.anchor()
    );
    let _ = write!(
        out,
        r#"<h1>Hi, I'm <span class="text-gradient">{}</span></h1><p class="role">{}</p><p class="tagline">{}</p>"#,
        text(&profile.name),
        text(&profile.role),
        text(&profile.tagline)
    );

    out.push_str(r#"<div class="cta">"#);
    if let Some(link) = links.first() {
        out.push_str(&link_html(link, "button primary", true));
    }
    if let Some(link) = links.get(1) {
        out.push_str(&link_html(link, "button secondary", true));
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="social">"#);
    for link in links.iter().take(count.saturating_sub(1)).skip(2) {
        out.push_str(&link_html(link, "social-link", false));
    }
    out.push_str("</div></div>");

    if let Some(link) = links.last().filter(|_| count > 2) {
        out.push_str(&link_html(link, "scroll-hint", false));
    }
    out.push_str("</section>");
}

fn render_about(portfolio: &Portfolio, out: &mut String) {
    let _ = write!(
        out,
        r#"<section id="{}" class="about"><div class="container">{}<div class="grid two">"#,
        Section::About.anchor(),
        heading(Section::About)
    );
    out.push_str("<div>");
    for paragraph in &portfolio.profile.bio {
        let _ = write!(out, "<p>{}</p>", text(paragraph));
    }
    out.push_str(r#"</div><div class="cards">"#);
    for highlight in &portfolio.highlights {
        let _ = write!(
            out,
            r#"<div class="card">{}<h3>{}</h3><p>{}</p></div>"#,
            icon_span(highlight.icon),
            text(&highlight.title),
            text(&highlight.description)
        );
    }
    out.push_str("</div></div></div></section>");
}

fn render_skills(portfolio: &Portfolio, out: &mut String) {
    let _ = write!(
        out,
        r#"<section id="{}" class="skills"><div class="container">{}<div class="grid four">"#,
        Section::Skills.anchor(),
        heading(Section::Skills)
    );
    for category in &portfolio.skills {
        let _ = write!(
            out,
            r#"<div class="card">{}<h3>{}</h3><div class="tags">{}</div></div>"#,
            icon_span(category.icon),
            text(&category.title),
            tags(&category.skills)
        );
    }
    out.push_str("</div></div></section>");
}

fn render_projects(page: &Page<'_>, out: &mut String) {
    let links = page.section_links(Section::Projects);
    let _ = write!(
        out,
        r#"<section id="{}" class="projects"><div class="container">{}<div class="grid three">"#,
        Section::Projects.anchor(),
        heading(Section::Projects)
    );
    for (i, project) in page.portfolio().projects.iter().enumerate() {
        let _ = write!(
            out,
            r#"<article class="card project"><img src="{}" alt="{}" loading="lazy"><h3>{}</h3><p>{}</p><div class="tags">{}</div><div class="project-links">"#,
            attr(&project.image_url),
            attr(&project.title),
            text(&project.title),
            text(&project.description),
            tags(&project.tech)
        );
        for link in links.iter().skip(i * 2).take(2) {
            out.push_str(&link_html(link, "project-link", true));
        }
        out.push_str("</div></article>");
    }
    out.push_str("</div></div></section>");
}

fn render_contact(portfolio: &Portfolio, out: &mut String) {
    let _ = write!(
        out,
        r#"<section id="{}" class="contact"><div class="container">{}<div class="grid two"><div>"#,
        Section::Contact.anchor(),
        heading(Section::Contact)
    );
    out.push_str(
        "<h3>Let's work together</h3><p>I'm always interested in hearing about new projects \
         and opportunities. Whether you have a question or just want to say hi, feel free to \
         reach out!</p>",
    );
    out.push_str(r#"<div class="details">"#);
    for detail in &portfolio.contact_details {
        let _ = write!(
            out,
            r#"<div class="detail">{}<div><p class="label">{}</p><p class="value">{}</p></div></div>"#,
            icon_span(detail.icon),
            text(&detail.label),
            text(&detail.value)
        );
    }
    out.push_str("</div></div>");

    out.push_str(r#"<form id="contact-form" class="contact-form">"#);
    for field in ContactField::ALL {
        let _ = write!(
            out,
            r#"<label for="{id}">{label}</label>"#,
            id = field.id(),
            label = field.label()
        );
        if field == ContactField::Message {
            let _ = write!(
                out,
                r#"<textarea id="{id}" name="{id}" rows="5" placeholder="{}"></textarea>"#,
                attr(field.placeholder()),
                id = field.id()
            );
        } else {
            let kind = if field == ContactField::Email {
                "email"
            } else {
                "text"
            };
            let _ = write!(
                out,
                r#"<input type="{kind}" id="{id}" name="{id}" placeholder="{}">"#,
                attr(field.placeholder()),
                id = field.id()
            );
        }
    }
    out.push_str(
        r#"<button type="submit" class="button primary">Send Message</button><p id="contact-status" role="status"></p></form>"#,
    );
    out.push_str("</div>");
    let _ = write!(
        out,
        r#"<footer><p>{}</p></footer></div></section>"#,
        text(&portfolio.profile.copyright)
    );
}

/// Renders the full page for `theme`, linking the assets served under
/// `/assets/`.
///
/// The toggle button comes first inside `<body>`, followed by the five
/// sections in fixed order.
#[must_use]
pub fn render_page(portfolio: &Portfolio, theme: Theme) -> String {
    render_document(portfolio, theme, AssetMode::Linked)
}

/// Renders a self-contained page with the stylesheet and theme script
/// inlined, so the toggle works when the file is opened from disk.
#[must_use]
pub fn render_standalone_page(portfolio: &Portfolio, theme: Theme) -> String {
    render_document(portfolio, theme, AssetMode::Inline)
}

/// Renders the full page for `theme` with the assets delivered per `mode`.
#[must_use]
pub fn render_document(portfolio: &Portfolio, theme: Theme, mode: AssetMode) -> String {
    let page = Page::new(portfolio);
    let root_class = if theme.is_dark() { r#" class="dark""# } else { "" };

    let mut out = String::with_capacity(16 * 1024);
    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"{root_class}><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{} | {}</title>{}</head><body>"#,
        text(&portfolio.profile.name),
        text(&portfolio.profile.role),
        stylesheet(mode)
    );
    let _ = write!(
        out,
        r#"<button id="theme-toggle" type="button" data-theme="{}">{}</button><main>"#,
        theme.as_str(),
        text(theme.toggle_label())
    );

    for section in page.sections() {
        match section {
            Section::Hero => render_hero(&page, &mut out),
            Section::About => render_about(portfolio, &mut out),
            Section::Skills => render_skills(portfolio, &mut out),
            Section::Projects => render_projects(&page, &mut out),
            Section::Contact => render_contact(portfolio, &mut out),
        }
    }

    out.push_str("</main>");
    out.push_str(&script(mode));
    out.push_str("</body></html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_class_only_when_dark() {
        let portfolio = Portfolio::builtin();
        assert!(render_page(&portfolio, Theme::Dark).contains(r#"<html lang="en" class="dark">"#));
        let light = render_page(&portfolio, Theme::Light);
        assert!(light.contains(r#"<html lang="en">"#));
        assert!(!light.contains(r#"class="dark""#));
    }

    #[test]
    fn test_toggle_label_follows_theme() {
        let portfolio = Portfolio::builtin();
        assert!(render_page(&portfolio, Theme::Light).contains("☀ Light</button>"));
        assert!(render_page(&portfolio, Theme::Dark).contains("☾ Dark</button>"));
    }

    #[test]
    fn test_toggle_precedes_sections_in_order() {
        let html = render_page(&Portfolio::builtin(), Theme::Light);
        let toggle = html.find(r#"id="theme-toggle""#).unwrap();
        let mut last = toggle;
        for section in Section::ALL {
            let marker = format!(r#"<section id="{}""#, section.anchor());
            assert_eq!(html.matches(&marker).count(), 1, "{marker}");
            let pos = html.find(&marker).unwrap();
            assert!(pos > last);
            last = pos;
        }
    }

    #[test]
    fn test_external_links_open_new_context() {
        let html = render_page(&Portfolio::builtin(), Theme::Light);
        assert!(html.contains(
            r#"href="https://github.com/emmanuel-lara-dev/portfolio" target="_blank" rel="noopener noreferrer""#
        ));
        assert!(html.contains(r##"href="#contact" aria-label="Get In Touch">"##));
    }

    #[test]
    fn test_linked_page_references_assets() {
        let html = render_page(&Portfolio::builtin(), Theme::Light);
        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/style.css">"#));
        assert!(html.contains(r#"<script src="/assets/theme.js"></script>"#));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_standalone_page_inlines_assets() {
        let html = render_standalone_page(&Portfolio::builtin(), Theme::Dark);
        assert!(!html.contains("/assets/style.css"));
        assert!(!html.contains("/assets/theme.js"));
        assert!(html.contains("<style>"));
        assert!(html.contains("html.dark"));

        let script_start = html.find("<script>").unwrap();
        let toggle = html.find(r#"id="theme-toggle""#).unwrap();
        assert!(script_start > toggle);
        assert!(html[script_start..].contains(r#"getElementById("theme-toggle")"#));
        assert!(html[script_start..].contains(r#"classList.toggle("dark""#));
        assert!(html.ends_with("</script></body></html>"));
    }

    fn section_html(html: &str, section: Section) -> &str {
        let start = html
            .find(&format!(r#"<section id="{}""#, section.anchor()))
            .unwrap();
        let end = html[start..].find("</section>").unwrap() + start;
        &html[start..end]
    }

    #[test]
    fn test_skills_cards_in_declaration_order() {
        let html = render_page(&Portfolio::builtin(), Theme::Light);
        let skills = section_html(&html, Section::Skills);

        assert_eq!(skills.matches(r#"<div class="card">"#).count(), 4);
        let titles: Vec<&str> = skills
            .split("<h3>")
            .skip(1)
            .filter_map(|part| part.split_once("</h3>").map(|(title, _)| title))
            .collect();
        assert_eq!(titles, ["Frontend", "Backend", "Database", "DevOps &amp; Tools"]);

        let first_tags = skills.split(r#"<div class="tags">"#).nth(1).unwrap();
        assert!(first_tags.starts_with(r#"<span class="tag">React</span>"#));
    }

    #[test]
    fn test_project_card_contents() {
        let portfolio = Portfolio::builtin();
        let project = &portfolio.projects[0];
        let html = render_page(&portfolio, Theme::Light);
        let projects = section_html(&html, Section::Projects);

        assert_eq!(projects.matches(r#"<article class="card project">"#).count(), 1);
        assert!(projects.contains(&format!("<h3>{}</h3>", project.title)));
        for tech in &project.tech {
            assert!(projects.contains(&format!(r#"<span class="tag">{tech}</span>"#)));
        }
        for url in [&project.github_url, &project.live_url] {
            assert!(projects.contains(&format!(
                r#"href="{url}" target="_blank" rel="noopener noreferrer""#
            )));
        }
        assert!(projects.contains(&format!(
            r#"src="{}""#,
            project.image_url.replace('&', "&amp;")
        )));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut portfolio = Portfolio::builtin();
        portfolio.profile.name = "<script>alert(1)</script>".to_string();
        let html = render_page(&portfolio, Theme::Light);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
