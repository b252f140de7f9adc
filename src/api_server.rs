// Axum Site Server
//
// Serves the rendered pages, the Markdown and JSON renderings of each
// project, and the static image directory. The portfolio is loaded once at
// startup and shared read-only through the router state.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::formatters::{JsonFormatter, MarkdownFormatter, ProjectDocument};
use crate::portfolio::Portfolio;
use crate::site::{render_route, PageStatus, RenderError, RenderedPage, Route};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    /// Directory served under `/images`.
    pub asset_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading portfolio...");
        let portfolio = Portfolio::load(config)?;

        tracing::info!("Serving images from {}", config.asset_dir.display());
        Ok(Self::from_portfolio(portfolio, config.asset_dir.clone()))
    }

    pub fn from_portfolio(portfolio: Portfolio, asset_dir: PathBuf) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            asset_dir,
        }
    }
}

// ============================================================================
// Router Setup
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let images = ServeDir::new(&state.asset_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages
        .route("/", get(home_page))
        .route("/project/:id", get(project_page))

        // Alternative renderings
        .route("/project/:id/case-study.md", get(case_study_markdown))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:id", get(get_project))

        // Static assets
        .nest_service("/images", images)

        // Everything else renders the not-found page
        .fallback(not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Page Handlers
// ============================================================================

async fn home_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let page = render_route(&state.portfolio, &Route::Home)?;
    Ok(page_response(page))
}

async fn project_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let page = render_route(&state.portfolio, &Route::Project(id))?;
    Ok(page_response(page))
}

async fn not_found_page(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    // Trailing-slash variants of real routes still resolve here.
    let page = render_route(&state.portfolio, &Route::parse(uri.path()))?;
    Ok(page_response(page))
}

fn page_response(page: RenderedPage) -> Response {
    let status = match page.status {
        PageStatus::Ok => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
    };
    (status, Html(page.html)).into_response()
}

// ============================================================================
// Markdown / JSON Handlers
// ============================================================================

async fn case_study_markdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let project = state
        .portfolio
        .project(&id)
        .ok_or_else(|| AppError::NotFound(format!("Project not found: {}", id)))?;

    let fallback_link = &state.portfolio.profile().default_link;
    let markdown = MarkdownFormatter::format_case_study(project, fallback_link)
        .ok_or_else(|| AppError::NotFound(format!("Project has no case study: {}", id)))?;

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    )
        .into_response())
}

async fn list_projects(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let listing = serde_json::to_value(JsonFormatter::listing(&state.portfolio))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(listing))
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let project = state
        .portfolio
        .project(&id)
        .ok_or_else(|| AppError::NotFound(format!("Project not found: {}", id)))?;

    let document = serde_json::to_value(ProjectDocument::new(project))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(document))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "projects": state.portfolio.registry().len(),
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Render(String),
    Internal(String),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        tracing::error!("Page render failed: {}", err);
        AppError::Render(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Render(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
