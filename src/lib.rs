//! Portfolio Site
//!
//! Static personal portfolio: a home page listing project cards and one
//! case-study page per project, served over HTTP or exported to disk.
//!
//! - `portfolio/`: project registry, case-study content model, loading
//! - `site/`: view models, Askama pages, route dispatch
//! - `formatters/`: Markdown and JSON renderings
//! - `export`: static site writer
//! - `api_server`: axum router (feature `server`)

pub mod config;
pub mod export;
pub mod formatters;
pub mod logging;
pub mod portfolio;
pub mod site;

#[cfg(feature = "server")]
pub mod api_server;

// Re-export commonly used types
pub use config::{ConfigError, SiteConfig};
pub use export::{export_site, ExportError, ExportReport};
pub use portfolio::{Portfolio, Project, ProjectRegistry};
pub use site::{render_path, render_route, PageStatus, RenderedPage, Route};

#[cfg(feature = "server")]
pub use api_server::{create_router, AppState};
