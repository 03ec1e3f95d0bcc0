//! Data models for the portfolio content.
//!
//! This module contains the content types every section renders. Models are
//! independent of the terminal and HTML presentation layers.

pub mod icon;
pub mod portfolio;

// Re-export all model types
pub use icon::Icon;
pub use portfolio::{
    ContactDetail, Highlight, Portfolio, Profile, Project, SkillCategory, SocialLink,
};
