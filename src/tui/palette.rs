//! Terminal colors for the light and dark themes.
//!
//! A [`Palette`] is the terminal's style scope: it is derived from the
//! [`ThemeStore`](crate::theme::ThemeStore) on every frame, so toggling the
//! theme re-evaluates the styles of every mounted widget.

use ratatui::style::{Color, Modifier, Style};

use crate::models::Icon;
use crate::theme::Theme;

/// Semantic colors for the page widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Theme this palette was built for
    pub theme: Theme,

    // Brand colors
    /// Primary color for headings, icons and accents
    pub primary: Color,
    /// Accent color for focus and the gradient name
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for body copy
    pub text_secondary: Color,
    /// Muted text color for hints and labels
    pub text_muted: Color,

    // Surfaces
    /// Page background
    pub background: Color,
    /// Card background
    pub surface: Color,
    /// Card and input borders
    pub border: Color,
    /// Skill/tech tag background
    pub tag_bg: Color,
}

impl Palette {
    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            theme: Theme::Dark,
            primary: Color::Rgb(56, 189, 248),
            accent: Color::Rgb(14, 165, 233),
            success: Color::Green,
            error: Color::Red,

            text: Color::Rgb(243, 244, 246),
            text_secondary: Color::Rgb(209, 213, 219),
            text_muted: Color::Rgb(156, 163, 175),

            background: Color::Rgb(3, 7, 18),
            surface: Color::Rgb(31, 41, 55),
            border: Color::Rgb(55, 65, 81),
            tag_bg: Color::Rgb(55, 65, 81),
        }
    }

    /// Palette for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            theme: Theme::Light,
            primary: Color::Rgb(2, 132, 199),
            accent: Color::Rgb(3, 105, 161),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(55, 65, 81),
            text_muted: Color::Rgb(75, 85, 99),

            background: Color::Rgb(249, 250, 251),
            surface: Color::White,
            border: Color::Rgb(229, 231, 235),
            tag_bg: Color::Rgb(243, 244, 246),
        }
    }

    /// Palette for `theme`.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Base style: text on the page background.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Section heading style.
    #[must_use]
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an unfocused link.
    #[must_use]
    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for the focused link or field.
    #[must_use]
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for skill and tech tags.
    #[must_use]
    pub fn tag(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.tag_bg)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

/// Terminal glyph for an icon.
#[must_use]
pub const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Code => "</>",
        Icon::Server => "▤",
        Icon::Database => "⛁",
        Icon::Globe => "◍",
        Icon::Wrench => "⚒",
        Icon::Github => "⌥",
        Icon::Mail => "✉",
        Icon::Phone => "☏",
        Icon::MapPin => "⌖",
        Icon::ExternalLink => "↗",
        Icon::ChevronDown => "⌄",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_theme() {
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::dark());
        assert_eq!(Palette::for_theme(Theme::Light), Palette::light());
        assert_eq!(Palette::default().theme, Theme::Light);
    }

    #[test]
    fn test_palette_contrast() {
        let dark = Palette::dark();
        let light = Palette::light();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
        assert_ne!(dark.text, dark.background);
        assert_ne!(light.text, light.background);
    }

    #[test]
    fn test_focused_style_differs_from_link() {
        let palette = Palette::dark();
        assert_ne!(palette.focused(), palette.link());
    }

    #[test]
    fn test_every_icon_has_glyph() {
        for icon in Icon::ALL {
            assert!(!icon_glyph(icon).is_empty());
        }
    }
}
