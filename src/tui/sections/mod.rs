//! The five page sections as terminal widgets.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::AboutView;
pub use contact::ContactView;
pub use hero::HeroView;
pub use projects::ProjectsView;
pub use skills::SkillsView;

use crate::page::Section;

use super::component::SectionView;

/// Returns the widget that renders `section`.
#[must_use]
pub fn view_for(section: Section) -> &'static dyn SectionView {
    match section {
        Section::Hero => &HeroView,
        Section::About => &AboutView,
        Section::Skills => &SkillsView,
        Section::Projects => &ProjectsView,
        Section::Contact => &ContactView,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_for_matches_section() {
        for section in Section::ALL {
            assert_eq!(view_for(section).section(), section);
        }
    }
}
