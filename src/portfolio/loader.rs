//! Portfolio loading
//!
//! Reads the content document (profile + ordered projects) and builds the
//! immutable `Portfolio`. The default document is embedded at compile time;
//! a file on disk can replace it through `CONTENT_PATH`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::portfolio::registry::{ProjectRegistry, RegistryError};
use crate::portfolio::types::{Profile, Project};

const BUILTIN_CONTENT: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read content file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// How strictly a document is checked while loading.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject documents where any project lacks case-study content.
    pub require_case_studies: bool,
}

/// On-disk shape of the content document.
#[derive(Debug, Deserialize)]
pub struct PortfolioDocument {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

/// Profile plus project registry; everything a page render reads.
#[derive(Debug, Clone)]
pub struct Portfolio {
    profile: Profile,
    registry: ProjectRegistry,
}

impl Portfolio {
    pub fn new(profile: Profile, registry: ProjectRegistry) -> Self {
        Self { profile, registry }
    }

    /// Embedded content shipped with the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json_str(BUILTIN_CONTENT, LoadOptions::default())
    }

    pub fn from_document(doc: PortfolioDocument, options: LoadOptions) -> Result<Self, LoadError> {
        let registry = ProjectRegistry::new(doc.projects)?;
        if options.require_case_studies {
            registry.require_case_studies()?;
        }
        Ok(Self::new(doc.profile, registry))
    }

    pub fn from_json_str(json: &str, options: LoadOptions) -> Result<Self, LoadError> {
        let doc: PortfolioDocument = serde_json::from_str(json)?;
        Self::from_document(doc, options)
    }

    pub fn from_path(path: &Path, options: LoadOptions) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, options)
    }

    /// Loads the document named by `config`, or the embedded one.
    pub fn load(config: &SiteConfig) -> Result<Self, LoadError> {
        let options = LoadOptions {
            require_case_studies: config.strict_content,
        };

        let portfolio = match &config.content_path {
            Some(path) => {
                tracing::info!("Loading portfolio content from {}", path.display());
                Self::from_path(path, options)?
            }
            None => {
                tracing::info!("Loading embedded portfolio content");
                Self::from_json_str(BUILTIN_CONTENT, options)?
            }
        };

        let missing = portfolio.registry.missing_case_studies();
        if !missing.is_empty() {
            tracing::warn!(
                "{} project(s) have no case study and will render as not found: {}",
                missing.len(),
                missing.join(", ")
            );
        }
        tracing::info!("Loaded {} projects", portfolio.registry.len());

        Ok(portfolio)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn projects(&self) -> &[Project] {
        self.registry.projects()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.registry.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Test Person",
            "bio": "Bio",
            "photo_url": "/images/me.jpg",
            "default_link": "https://example.com"
        },
        "projects": [
            { "id": "one", "title": "One", "description": "First", "image_url": "/images/1.jpg" }
        ]
    }"#;

    #[test]
    fn test_builtin_content_loads() {
        let portfolio = Portfolio::builtin().expect("embedded content must be valid");
        assert_eq!(portfolio.profile().name, "Yerin Lee");
        assert_eq!(
            portfolio.registry().ids().collect::<Vec<_>>(),
            vec!["manual-processing", "hydropower-ml"]
        );
        assert!(portfolio.registry().missing_case_studies().is_empty());
    }

    #[test]
    fn test_minimal_document_defaults() {
        let portfolio = Portfolio::from_json_str(MINIMAL, LoadOptions::default()).unwrap();
        assert_eq!(portfolio.profile().projects_heading, "Featured Projects");
        let one = portfolio.project("one").unwrap();
        assert!(one.tags.is_empty());
        assert_eq!(one.link_or(&portfolio.profile().default_link), "https://example.com");
    }

    #[test]
    fn test_strict_mode_rejects_missing_content() {
        let options = LoadOptions {
            require_case_studies: true,
        };
        let err = Portfolio::from_json_str(MINIMAL, options).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Registry(RegistryError::MissingCaseStudies(_))
        ));
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = Portfolio::from_json_str("{ not json", LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Portfolio::from_path(Path::new("/nonexistent/portfolio.json"), LoadOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/portfolio.json"));
    }
}
