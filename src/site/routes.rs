//! Route dispatch shared by the HTTP server and the static export.
//!
//! Route surface:
//! - `/`             -> Listing View
//! - `/project/:id`  -> Detail View (not found when unresolved)
//! - anything else   -> Not-Found view

use crate::portfolio::Portfolio;
use crate::site::pages::{render_home, render_not_found, render_project, RenderError};
use crate::site::view_builder::{build_listing, build_not_found, resolve_detail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Project(String),
    NotFound(String),
}

impl Route {
    /// Parse a request path. A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        if trimmed.is_empty() {
            return Route::Home;
        }

        match trimmed.strip_prefix("/project/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Project(id.to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Project(id) => format!("/project/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

impl PageStatus {
    pub fn code(&self) -> u16 {
        match self {
            PageStatus::Ok => 200,
            PageStatus::NotFound => 404,
        }
    }
}

/// Fully rendered HTML document plus the status it should be served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: PageStatus,
    pub html: String,
}

/// Render any route to a complete page.
pub fn render_route(portfolio: &Portfolio, route: &Route) -> Result<RenderedPage, RenderError> {
    match route {
        Route::Home => Ok(RenderedPage {
            status: PageStatus::Ok,
            html: render_home(build_listing(portfolio))?,
        }),
        Route::Project(id) => match resolve_detail(portfolio, id) {
            Ok(page) => Ok(RenderedPage {
                status: PageStatus::Ok,
                html: render_project(page)?,
            }),
            Err(err) => {
                tracing::debug!("Detail route {} not resolved: {}", route.path(), err);
                Ok(RenderedPage {
                    status: PageStatus::NotFound,
                    html: render_not_found(build_not_found(&route.path(), Some(&err)))?,
                })
            }
        },
        Route::NotFound(path) => Ok(RenderedPage {
            status: PageStatus::NotFound,
            html: render_not_found(build_not_found(path, None))?,
        }),
    }
}

/// Convenience wrapper: parse then render.
pub fn render_path(portfolio: &Portfolio, path: &str) -> Result<RenderedPage, RenderError> {
    render_route(portfolio, &Route::parse(path))
}
