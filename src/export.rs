//! Static Site Export
//!
//! Renders every route once and writes the result to a directory that any
//! static file host can serve.
//!
//! ## Output layout
//! - `index.html`: listing
//! - `404.html`: generic not-found page
//! - `project/{id}/index.html`: detail page
//! - `project/{id}/case-study.md`: Markdown rendering
//! - `api/projects.json`: ordered project summaries
//!
//! Records without case-study content get no detail files; they are
//! reported in `ExportReport::skipped`.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::formatters::{JsonFormatter, MarkdownFormatter};
use crate::portfolio::Portfolio;
use crate::site::{render_route, PageStatus, RenderError, Route};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to serialize project listing: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    /// Files written, relative to `out_dir`, in write order.
    pub files: Vec<PathBuf>,
    /// Ids of projects whose detail pages were not produced.
    pub skipped: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ExportReport {
    pub fn contains(&self, relative: &str) -> bool {
        self.files.iter().any(|file| file == Path::new(relative))
    }
}

/// Writes the complete static site under `out_dir`.
pub fn export_site(portfolio: &Portfolio, out_dir: &Path) -> Result<ExportReport, ExportError> {
    tracing::info!("Exporting static site to {}", out_dir.display());

    let mut report = ExportReport {
        out_dir: out_dir.to_path_buf(),
        files: Vec::new(),
        skipped: Vec::new(),
        generated_at: Utc::now(),
    };

    let home = render_route(portfolio, &Route::Home)?;
    write_file(&mut report, "index.html", &home.html)?;

    // Served by static hosts for any missing URL, so no requested path.
    let not_found = render_route(portfolio, &Route::NotFound(String::new()))?;
    write_file(&mut report, "404.html", &not_found.html)?;

    for project in portfolio.projects() {
        let page = render_route(portfolio, &Route::Project(project.id.clone()))?;
        let markdown =
            MarkdownFormatter::format_case_study(project, &portfolio.profile().default_link);

        match (page.status, markdown) {
            (PageStatus::Ok, Some(markdown)) => {
                let dir = format!("project/{}", project.id);
                write_file(&mut report, &format!("{}/index.html", dir), &page.html)?;
                write_file(&mut report, &format!("{}/case-study.md", dir), &markdown)?;
                tracing::debug!("Exported {}", project.id);
            }
            _ => {
                tracing::warn!("Skipping {}: no case-study content", project.id);
                report.skipped.push(project.id.clone());
            }
        }
    }

    let listing = JsonFormatter::format_listing(portfolio)?;
    write_file(&mut report, "api/projects.json", &listing)?;

    tracing::info!(
        "Export complete: {} files written, {} projects skipped",
        report.files.len(),
        report.skipped.len()
    );
    Ok(report)
}

fn write_file(report: &mut ExportReport, relative: &str, contents: &str) -> Result<(), ExportError> {
    let path = report.out_dir.join(relative);
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(&path, contents).map_err(io_err)?;

    report.files.push(PathBuf::from(relative));
    Ok(())
}
