//! Icon identifiers attached to content entries.

use serde::{Deserialize, Serialize};

/// An icon variant referenced by content data.
///
/// Content only names the icon; each presentation layer decides how a variant
/// is drawn (a terminal glyph, an HTML symbol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Source code brackets
    Code,
    /// Server rack
    Server,
    /// Database cylinder
    Database,
    /// Globe
    Globe,
    /// Wrench
    Wrench,
    /// GitHub mark
    Github,
    /// Envelope
    Mail,
    /// Telephone
    Phone,
    /// Map pin
    MapPin,
    /// Arrow leaving a box
    ExternalLink,
    /// Downward chevron
    ChevronDown,
}

impl Icon {
    /// Every icon variant.
    pub const ALL: [Self; 11] = [
        Self::Code,
        Self::Server,
        Self::Database,
        Self::Globe,
        Self::Wrench,
        Self::Github,
        Self::Mail,
        Self::Phone,
        Self::MapPin,
        Self::ExternalLink,
        Self::ChevronDown,
    ];

    /// Stable kebab-case name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Server => "server",
            Self::Database => "database",
            Self::Globe => "globe",
            Self::Wrench => "wrench",
            Self::Github => "github",
            Self::Mail => "mail",
            Self::Phone => "phone",
            Self::MapPin => "map-pin",
            Self::ExternalLink => "external-link",
            Self::ChevronDown => "chevron-down",
        }
    }
}
