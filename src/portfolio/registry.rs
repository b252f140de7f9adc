//! Project Registry
//!
//! Ordered, read-only collection of project records with lookup by id.
//! Built once at startup and shared by every render.
//!
//! # Invariants
//! - Ids are URL-safe slugs and pairwise distinct.
//! - Every table inside a case study is rectangular with an in-range highlight.
//! - No mutation API: records are fixed after `ProjectRegistry::new`.

use std::collections::HashMap;
use thiserror::Error;

use crate::portfolio::content::ContentBlock;
use crate::portfolio::types::Project;

/// Registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("project id is invalid: `{0}` (expected lowercase slug like `hydropower-ml`)")]
    InvalidId(String),
    #[error("project id is duplicated: `{0}`")]
    DuplicateId(String),
    #[error("project `{project}` has a malformed table `{caption}`: {reason}")]
    MalformedTable {
        project: String,
        caption: String,
        reason: String,
    },
    #[error("projects without case-study content: {}", .0.join(", "))]
    MissingCaseStudies(Vec<String>),
}

#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl ProjectRegistry {
    /// Validates and indexes `projects`, preserving their order.
    pub fn new(projects: Vec<Project>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(projects.len());

        for (position, project) in projects.iter().enumerate() {
            if !is_valid_project_id(&project.id) {
                return Err(RegistryError::InvalidId(project.id.clone()));
            }
            if index.insert(project.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicateId(project.id.clone()));
            }
            check_tables(project)?;
        }

        Ok(Self { projects, index })
    }

    /// Records in registry (display) order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.index.get(id).map(|&position| &self.projects[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|project| project.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Ids of records that have no case study (registry order).
    pub fn missing_case_studies(&self) -> Vec<&str> {
        self.projects
            .iter()
            .filter(|project| !project.has_case_study())
            .map(|project| project.id.as_str())
            .collect()
    }

    /// Strict check: every record must carry case-study content.
    pub fn require_case_studies(&self) -> Result<(), RegistryError> {
        let missing = self.missing_case_studies();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::MissingCaseStudies(
                missing.into_iter().map(str::to_string).collect(),
            ))
        }
    }
}

fn check_tables(project: &Project) -> Result<(), RegistryError> {
    let Some(study) = &project.case_study else {
        return Ok(());
    };

    for section in &study.sections {
        for block in &section.blocks {
            if let ContentBlock::Table(table) = block {
                table
                    .check_shape()
                    .map_err(|reason| RegistryError::MalformedTable {
                        project: project.id.clone(),
                        caption: table.caption.clone(),
                        reason,
                    })?;
            }
        }
    }
    Ok(())
}

/// Slug check: `[a-z0-9]` runs separated by single `-`.
pub fn is_valid_project_id(value: &str) -> bool {
    if value.is_empty() || value.starts_with('-') || value.ends_with('-') {
        return false;
    }

    let mut prev_separator = false;
    for c in value.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
            continue;
        }
        if c == '-' && !prev_separator {
            prev_separator = true;
            continue;
        }
        return false;
    }
    true
}
