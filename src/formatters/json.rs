use serde::Serialize;

use crate::portfolio::{Portfolio, Project};
use crate::site::ProjectCard;

/// Full record as exposed by the JSON API, with the derived narrative.
#[derive(Debug, Serialize)]
pub struct ProjectDocument<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub full_description: String,
    pub detail_href: String,
}

impl<'a> ProjectDocument<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            full_description: project.full_description(),
            detail_href: project.detail_href(),
        }
    }
}

/// JSON formatter for portfolio records
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format one full project as pretty-printed JSON
    pub fn format_project(project: &Project) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ProjectDocument::new(project))
    }

    /// Format the ordered project summaries as pretty-printed JSON
    pub fn format_listing(portfolio: &Portfolio) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::listing(portfolio))
    }

    /// Format one full project as compact JSON (no whitespace)
    pub fn format_compact(project: &Project) -> Result<String, serde_json::Error> {
        serde_json::to_string(&ProjectDocument::new(project))
    }

    /// Listing cards in registry order.
    pub fn listing(portfolio: &Portfolio) -> Vec<ProjectCard<'_>> {
        portfolio
            .projects()
            .iter()
            .map(ProjectCard::from_project)
            .collect()
    }
}
