//! devfolio library
//!
//! A single-page developer portfolio rendered to the terminal (ratatui) and,
//! with the `web` feature, to server-side HTML. Both surfaces share the
//! content model, the page composition and the theme store.

// Module declarations
pub mod branding;
pub mod config;
pub mod contact;
pub mod models;
pub mod page;
pub mod shortcuts;
pub mod theme;
pub mod tui;

#[cfg(feature = "web")]
pub mod web;
