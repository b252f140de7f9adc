//! Portfolio record types: the project record and the profile header.

use serde::{Deserialize, Serialize};

use crate::portfolio::content::CaseStudy;

/// One showcased project.
///
/// `full_description` is not stored; see [`Project::full_description`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Lookup key and `/project/:id` route parameter.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Card image, also the detail hero when the case study has no gallery.
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            tags: Vec::new(),
            link: None,
            case_study: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_case_study(mut self, case_study: CaseStudy) -> Self {
        self.case_study = Some(case_study);
        self
    }

    /// Route of the detail page for this project.
    pub fn detail_href(&self) -> String {
        format!("/project/{}", self.id)
    }

    /// External link, or `fallback` (the profile link) when absent.
    pub fn link_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.link.as_deref().unwrap_or(fallback)
    }

    /// Link for the detail hero button: case-study source first, then `link`.
    pub fn source_link_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.case_study
            .as_ref()
            .and_then(|study| study.source_url.as_deref())
            .unwrap_or_else(|| self.link_or(fallback))
    }

    pub fn has_case_study(&self) -> bool {
        self.case_study.is_some()
    }

    /// Long-form narrative derived from the structured case study.
    ///
    /// Falls back to `description` for records without content.
    pub fn full_description(&self) -> String {
        match &self.case_study {
            Some(study) => study.plain_text(),
            None => self.description.clone(),
        }
    }
}

/// Person the site belongs to (home page header and footer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub photo_url: String,
    /// Used when a project has no `link` of its own.
    pub default_link: String,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
    #[serde(default = "default_projects_heading")]
    pub projects_heading: String,
    #[serde(default)]
    pub footer: String,
}

fn default_projects_heading() -> String {
    "Featured Projects".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub href: String,
}
