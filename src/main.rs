//! devfolio - personal portfolio page in the terminal.
//!
//! Runs the interactive terminal page by default. With `--export-html` it
//! writes the page as a standalone HTML document instead.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use devfolio::config::Config;
use devfolio::models::Portfolio;
use devfolio::theme::{ConfigThemePersistence, Theme, ThemeStore};
use devfolio::tui;

/// devfolio - personal portfolio page for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial theme (overrides the config file)
    #[arg(short, long, value_name = "light|dark")]
    theme: Option<Theme>,

    /// TOML file with the portfolio content (defaults to the built-in content)
    #[arg(short, long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Write the page as HTML to PATH and exit
    #[arg(long, value_name = "PATH")]
    export_html: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("Failed to load configuration")?;
    let portfolio = Portfolio::load_or_builtin(cli.content.as_deref())?;

    let store = initial_store(&config, cli.theme)?;

    if let Some(path) = &cli.export_html {
        return export_html(&portfolio, store.theme(), path);
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(store, portfolio);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting loop errors
    tui::restore_terminal(terminal)?;

    result
}

/// Builds the theme store. A `--theme` override wins for this run only and
/// never replaces the remembered preference.
fn initial_store(config: &Config, theme_override: Option<Theme>) -> Result<ThemeStore> {
    if !config.ui.remember_theme {
        return Ok(ThemeStore::new(
            theme_override.unwrap_or_else(|| config.initial_theme()),
        ));
    }

    let persistence = Box::new(ConfigThemePersistence::from_default_location()?);
    Ok(match theme_override {
        Some(theme) => ThemeStore::new(theme).persisting(persistence),
        None => ThemeStore::with_persistence(persistence, config.initial_theme()),
    })
}

#[cfg(feature = "web")]
fn export_html(portfolio: &Portfolio, theme: Theme, path: &Path) -> Result<()> {
    let html = devfolio::web::html::render_standalone_page(portfolio, theme);
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write HTML to {}", path.display()))?;
    println!("Wrote {} ({} theme)", path.display(), theme);
    Ok(())
}

#[cfg(not(feature = "web"))]
fn export_html(_portfolio: &Portfolio, _theme: Theme, _path: &Path) -> Result<()> {
    anyhow::bail!("HTML export requires the `web` feature")
}
