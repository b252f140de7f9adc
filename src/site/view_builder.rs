//! View Builder - Converts portfolio records to view models
//!
//! The detail resolver is the only decision point of the site: look the id
//! up, then render the record's case study through the generic renderer.
//! A record without content is reported like an unknown id, so every valid
//! route either renders content or the not-found page.

use thiserror::Error;

use crate::portfolio::{Portfolio, Project};
use crate::site::view_models::*;

/// Why a detail route produced no page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no project with id `{0}`")]
    UnknownProject(String),
    #[error("project `{0}` has no case-study content")]
    MissingCaseStudy(String),
}

impl ResolveError {
    pub fn project_id(&self) -> &str {
        match self {
            ResolveError::UnknownProject(id) | ResolveError::MissingCaseStudy(id) => id,
        }
    }
}

/// Build the home page from the full registry, preserving its order.
pub fn build_listing(portfolio: &Portfolio) -> ListingPage<'_> {
    ListingPage {
        profile: portfolio.profile(),
        cards: portfolio
            .projects()
            .iter()
            .map(ProjectCard::from_project)
            .collect(),
    }
}

/// Resolve `/project/:id` into a detail page.
pub fn resolve_detail<'a>(portfolio: &'a Portfolio, id: &str) -> Result<DetailPage<'a>, ResolveError> {
    let project = portfolio
        .project(id)
        .ok_or_else(|| ResolveError::UnknownProject(id.to_string()))?;

    build_detail(project, &portfolio.profile().default_link)
}

/// Build a detail page for one record, `fallback_link` standing in for a missing `link`.
pub fn build_detail<'a>(project: &'a Project, fallback_link: &'a str) -> Result<DetailPage<'a>, ResolveError> {
    let study = project
        .case_study
        .as_ref()
        .ok_or_else(|| ResolveError::MissingCaseStudy(project.id.clone()))?;

    let hero_images: Vec<HeroImage<'a>> = if study.gallery.is_empty() {
        vec![HeroImage {
            src: &project.image_url,
            alt: &project.title,
        }]
    } else {
        study
            .gallery
            .iter()
            .map(|figure| HeroImage {
                src: &figure.src,
                alt: &figure.alt,
            })
            .collect()
    };

    Ok(DetailPage {
        id: &project.id,
        title: &project.title,
        description: &project.description,
        tags: &project.tags,
        source_url: project.source_link_or(fallback_link),
        image_grid: study.uses_image_grid(),
        hero_images,
        sections: &study.sections,
    })
}

/// Not-found page for a path, optionally explaining which project was missing.
pub fn build_not_found(requested: &str, cause: Option<&ResolveError>) -> NotFoundPage {
    let message = match cause {
        Some(ResolveError::UnknownProject(_)) => {
            "The project you are looking for does not exist.".to_string()
        }
        Some(ResolveError::MissingCaseStudy(_)) => {
            "This project does not have a write-up yet.".to_string()
        }
        None => "The page you are looking for does not exist.".to_string(),
    };

    NotFoundPage {
        requested: requested.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{CaseStudy, Figure, ProjectRegistry};

    fn portfolio_with(projects: Vec<Project>) -> Portfolio {
        let base = Portfolio::builtin().unwrap();
        Portfolio::new(base.profile().clone(), ProjectRegistry::new(projects).unwrap())
    }

    #[test]
    fn test_listing_matches_registry_order() {
        let portfolio = Portfolio::builtin().unwrap();
        let listing = build_listing(&portfolio);
        let ids: Vec<&str> = listing.cards.iter().map(|card| card.id).collect();
        assert_eq!(ids, portfolio.registry().ids().collect::<Vec<_>>());
        assert_eq!(listing.cards[0].href, "/project/manual-processing");
    }

    #[test]
    fn test_gallery_drives_image_grid() {
        let portfolio = Portfolio::builtin().unwrap();

        let manual = resolve_detail(&portfolio, "manual-processing").unwrap();
        assert!(manual.image_grid);
        assert_eq!(manual.hero_images.len(), 2);
        assert_eq!(manual.source_url, "https://github.com/leeyerin2697/ManualSummaryApp");

        let hydro = resolve_detail(&portfolio, "hydropower-ml").unwrap();
        assert!(!hydro.image_grid);
        assert_eq!(
            hydro.hero_images,
            vec![HeroImage {
                src: "/images/project2-poster.jpg",
                alt: "Hydropower Turbine Discharge Prediction",
            }]
        );
        assert_eq!(hydro.source_url, "https://github.com/leeyerin2697/Dam-power-prediction");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let portfolio = Portfolio::builtin().unwrap();
        let err = resolve_detail(&portfolio, "does-not-exist").unwrap_err();
        assert_eq!(err, ResolveError::UnknownProject("does-not-exist".to_string()));
    }

    #[test]
    fn test_record_without_content_is_not_found_equivalent() {
        let portfolio = portfolio_with(vec![Project::new(
            "solar-sat",
            "Space Solar",
            "Orbit power",
            "/images/sbsp.jpg",
        )]);
        let err = resolve_detail(&portfolio, "solar-sat").unwrap_err();
        assert_eq!(err, ResolveError::MissingCaseStudy("solar-sat".to_string()));
        assert_eq!(err.project_id(), "solar-sat");
    }

    #[test]
    fn test_missing_link_uses_profile_default() {
        let study = CaseStudy {
            gallery: vec![Figure {
                src: "/images/only.jpg".to_string(),
                alt: "Only".to_string(),
                href: None,
            }],
            ..CaseStudy::default()
        };
        let portfolio = portfolio_with(vec![Project::new("solo", "Solo", "One", "/images/x.jpg")
            .with_case_study(study)]);

        let page = resolve_detail(&portfolio, "solo").unwrap();
        assert_eq!(page.source_url, portfolio.profile().default_link);
        assert!(!page.image_grid);
        assert_eq!(page.hero_images[0].src, "/images/only.jpg");
    }

    #[test]
    fn test_not_found_messages() {
        let page = build_not_found("/nope", None);
        assert_eq!(page.requested, "/nope");

        let missing = ResolveError::MissingCaseStudy("x".to_string());
        let page = build_not_found("/project/x", Some(&missing));
        assert!(page.message.contains("write-up"));
    }
}
