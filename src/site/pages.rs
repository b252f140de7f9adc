// Page rendering with Askama
//
// Templates live in templates/pages/*.html and extend templates/base.html.
// Askama escapes every interpolated value; only internally built hrefs are
// marked safe.

use askama::Template;
use thiserror::Error;

use crate::portfolio::ContentBlock;
use crate::site::view_models::{DetailPage, ListingPage, NotFoundPage};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub page_title: String,
    pub listing: ListingPage<'a>,
}

pub fn render_home(listing: ListingPage<'_>) -> Result<String, RenderError> {
    let template = HomeTemplate {
        page_title: listing.profile.name.clone(),
        listing,
    };
    Ok(template.render()?)
}

// ============================================================================
// Project Detail Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/project.html")]
pub struct ProjectTemplate<'a> {
    pub page_title: String,
    pub page: DetailPage<'a>,
}

pub fn render_project(page: DetailPage<'_>) -> Result<String, RenderError> {
    let template = ProjectTemplate {
        page_title: page.title.to_string(),
        page,
    };
    Ok(template.render()?)
}

// ============================================================================
// Not Found Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub page_title: String,
    pub page: NotFoundPage,
}

pub fn render_not_found(page: NotFoundPage) -> Result<String, RenderError> {
    let template = NotFoundTemplate {
        page_title: "Page Not Found".to_string(),
        page,
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Portfolio;
    use crate::site::view_builder::{build_listing, build_not_found, resolve_detail};

    #[test]
    fn test_home_renders_cards_and_profile() {
        let portfolio = Portfolio::builtin().unwrap();
        let html = render_home(build_listing(&portfolio)).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Yerin Lee</title>"));
        assert!(html.contains("Featured Projects"));
        assert_eq!(html.matches("class=\"project-card\"").count(), 2);
        assert!(html.contains("data-project-id=\"manual-processing\""));
    }

    #[test]
    fn test_project_page_escapes_text() {
        let portfolio = Portfolio::builtin().unwrap();
        let page = resolve_detail(&portfolio, "manual-processing").unwrap();
        let html = render_project(page).unwrap();

        assert!(html.contains("<h1>OCR-Based Manual Summarizer</h1>"));
        assert!(html.contains("Summarization &amp; Translation"));
        assert!(html.contains("class=\"project-media image-grid\""));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found(build_not_found("/missing", None)).unwrap();
        assert!(html.contains("<title>Page Not Found</title>"));
        assert!(html.contains("class=\"not-found\""));
    }
}
