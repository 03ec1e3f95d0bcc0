//! devfolio web server binary.
//!
//! Serves the portfolio page and its JSON API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (127.0.0.1:3001, built-in content)
//! devfolio-web
//!
//! # Custom content, dark by default
//! devfolio-web --port 8080 --content me.toml --theme dark
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devfolio::config::{Config, ThemeMode};
use devfolio::models::Portfolio;
use devfolio::theme::Theme;
use devfolio::web;

/// devfolio web server - portfolio page over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to web.port from the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to web.host from the config file)
    #[arg(long)]
    host: Option<String>,

    /// TOML file with the portfolio content (defaults to the built-in content)
    #[arg(short, long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Theme served when a request does not ask for one
    #[arg(short, long, value_name = "light|dark")]
    theme: Option<Theme>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(port) = args.port {
        config.web.port = port;
    }
    if let Some(host) = args.host {
        config.web.host = host;
    }
    if let Some(theme) = args.theme {
        config.ui.theme_mode = match theme {
            Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
        };
    }
    config.validate()?;

    let portfolio = Portfolio::load_or_builtin(args.content.as_deref())?;
    if let Some(path) = &args.content {
        info!("Content file: {}", path.display());
    }

    let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port)
        .parse()
        .context("Invalid listen address")?;

    web::run_server(config, portfolio, addr).await
}
