//! HTTP surface for the portfolio.
//!
//! # Endpoints
//!
//! - `GET /` - The rendered page (optional `?theme=light|dark`)
//! - `GET /health` - Health check
//! - `GET /api/portfolio` - Page content as JSON
//! - `GET /api/sections` - Section anchors and titles in render order
//! - `POST /api/contact` - Submit the contact form
//! - `GET /assets/{file}` - Embedded stylesheet and script

pub mod html;
pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::contact::{ContactBackend, ContactError, ContactMessage, UnconfiguredBackend};
use crate::models::Portfolio;
use crate::page::Section;
use crate::theme::Theme;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    portfolio: Arc<Portfolio>,
    backend: Arc<dyn ContactBackend>,
    default_theme: Theme,
}

impl AppState {
    /// Creates state with the unconfigured contact backend. The default theme
    /// comes from the config's theme mode.
    #[must_use]
    pub fn new(config: Config, portfolio: Portfolio) -> Self {
        let default_theme = config.initial_theme();
        Self {
            config: Arc::new(config),
            portfolio: Arc::new(portfolio),
            backend: Arc::new(UnconfiguredBackend),
            default_theme,
        }
    }

    /// Replaces the contact backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn ContactBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Overrides the theme used when a request does not ask for one.
    #[must_use]
    pub const fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for the page.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Initial theme (`light` or `dark`).
    pub theme: Option<String>,
}

/// One entry of `GET /api/sections`.
#[derive(Debug, Serialize)]
pub struct SectionInfo {
    /// Anchor identifier.
    pub id: &'static str,
    /// Heading text.
    pub title: &'static str,
}

impl From<Section> for SectionInfo {
    fn from(section: Section) -> Self {
        Self {
            id: section.anchor(),
            title: section.title(),
        }
    }
}

/// Successful contact submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Backend reference for the delivered message, if it returned one.
    pub reference: Option<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// HTTP status for a contact backend failure.
#[must_use]
pub const fn contact_error_status(error: &ContactError) -> StatusCode {
    match error {
        ContactError::NotConfigured => StatusCode::NOT_IMPLEMENTED,
        ContactError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContactError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Render the page.
async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Html<String>> {
    let theme = match query.theme.as_deref() {
        None => state.default_theme,
        Some(raw) => raw.parse::<Theme>().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::with_details("Invalid theme", e.to_string())),
            )
        })?,
    };

    Ok(Html(html::render_page(&state.portfolio, theme)))
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/portfolio - Page content.
async fn get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

/// GET /api/sections - Sections in render order.
async fn list_sections() -> Json<Vec<SectionInfo>> {
    Json(Section::ALL.into_iter().map(SectionInfo::from).collect())
}

/// POST /api/contact - Hand a message to the contact backend.
async fn submit_contact(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> ApiResult<Json<ContactResponse>> {
    match state.backend.submit(&message) {
        Ok(ack) => {
            info!(reference = ?ack.reference, "contact message delivered");
            Ok(Json(ContactResponse {
                reference: ack.reference,
            }))
        }
        Err(e) => {
            warn!("contact submission failed: {e}");
            Err((contact_error_status(&e), Json(ApiError::new(e.to_string()))))
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server is meant to run locally
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/portfolio", get(get_portfolio))
        .route("/api/sections", get(list_sections))
        .route("/api/contact", post(submit_contact))
        .route("/assets/{file}", get(static_files::serve_asset))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run_server(config: Config, portfolio: Portfolio, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config, portfolio);
    let app = create_router(state);

    info!("Starting devfolio web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
