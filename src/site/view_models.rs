//! View Models for page templates
//!
//! Borrowed projections of the portfolio that the Askama templates read.
//! Nothing here owns content; every string points back into the registry.

use serde::Serialize;

use crate::portfolio::{Profile, Project, Section};

// ============================================================================
// Listing View
// ============================================================================

/// Home page: profile header plus one card per project.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage<'a> {
    pub profile: &'a Profile,
    pub cards: Vec<ProjectCard<'a>>,
}

/// Summary unit for one project on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub tags: &'a [String],
    pub href: String,
}

impl<'a> ProjectCard<'a> {
    pub fn from_project(project: &'a Project) -> Self {
        Self {
            id: &project.id,
            title: &project.title,
            description: &project.description,
            image_url: &project.image_url,
            tags: &project.tags,
            href: project.detail_href(),
        }
    }
}

// ============================================================================
// Detail View
// ============================================================================

/// Project page: generic hero built from the record, then its case study.
#[derive(Debug, Clone, Serialize)]
pub struct DetailPage<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub source_url: &'a str,
    pub hero_images: Vec<HeroImage<'a>>,
    /// Two or more hero images render side by side.
    pub image_grid: bool,
    pub sections: &'a [Section],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroImage<'a> {
    pub src: &'a str,
    pub alt: &'a str,
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    /// Path the visitor asked for.
    pub requested: String,
    pub message: String,
}
