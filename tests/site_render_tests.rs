// Site Rendering Tests
//
// End-to-end route rendering: listing, both case studies, unknown ids and
// records that carry no case-study content.
// Run with: cargo test --test site_render_tests

use portfolio_site::portfolio::{Portfolio, Project, ProjectRegistry};
use portfolio_site::site::{build_listing, render_path, render_route, PageStatus, Route};

fn with_extra_record(extra: Project) -> Portfolio {
    let base = Portfolio::builtin().unwrap();
    let mut projects = base.projects().to_vec();
    projects.push(extra);
    Portfolio::new(base.profile().clone(), ProjectRegistry::new(projects).unwrap())
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_manual_processing_page() {
    let portfolio = Portfolio::builtin().unwrap();
    let page = render_path(&portfolio, "/project/manual-processing").unwrap();

    assert_eq!(page.status, PageStatus::Ok);
    assert!(page.html.contains("<h1>OCR-Based Manual Summarizer</h1>"));
    assert!(page.html.contains("Motivation &amp; Problem Definition"));
    assert!(page.html.contains("class=\"pipeline\""));
}

#[test]
fn test_hydropower_page_highlights_best_row() {
    let portfolio = Portfolio::builtin().unwrap();
    let page = render_path(&portfolio, "/project/hydropower-ml").unwrap();

    assert_eq!(page.status, PageStatus::Ok);
    assert!(page.html.contains("<h1>Hydropower Turbine Discharge Prediction</h1>"));
    assert!(page
        .html
        .contains("<tr class=\"best-row\"><td>50</td><td>20</td><td>11.48</td><td>0.962</td></tr>"));
    // Competing models are listed, not drawn as a processing flow.
    assert!(page.html.contains("<li>Random Forest Regressor</li>"));
    assert!(!page.html.contains("class=\"pipeline\""));
}

#[test]
fn test_unknown_id_renders_not_found() {
    let portfolio = Portfolio::builtin().unwrap();
    let page = render_path(&portfolio, "/project/does-not-exist").unwrap();

    assert_eq!(page.status, PageStatus::NotFound);
    assert!(page.html.contains("class=\"not-found\""));
    assert!(page.html.contains("The project you are looking for does not exist."));
}

#[test]
fn test_listing_has_one_card_per_record_in_order() {
    let portfolio = Portfolio::builtin().unwrap();
    let page = render_route(&portfolio, &Route::Home).unwrap();

    assert_eq!(page.status, PageStatus::Ok);
    assert_eq!(
        page.html.matches("class=\"project-card\"").count(),
        portfolio.registry().len()
    );

    let positions: Vec<usize> = portfolio
        .registry()
        .ids()
        .map(|id| {
            page.html
                .find(&format!("data-project-id=\"{}\"", id))
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_record_without_content_is_not_found_equivalent() {
    let portfolio = with_extra_record(
        Project::new(
            "space-solar",
            "Space-Based Solar Power",
            "Wireless power from orbit",
            "/images/project3.jpg",
        )
        .with_tags(["Research"]),
    );

    // The card is listed...
    let home = render_route(&portfolio, &Route::Home).unwrap();
    assert_eq!(home.html.matches("class=\"project-card\"").count(), 3);
    assert!(home.html.contains("data-project-id=\"space-solar\""));

    // ...but its detail route is a 404 with the not-found view, never an empty page.
    let page = render_path(&portfolio, "/project/space-solar").unwrap();
    assert_eq!(page.status, PageStatus::NotFound);
    assert!(page.html.contains("class=\"not-found\""));
    assert!(page.html.contains("This project does not have a write-up yet."));
}

// ============================================================================
// Consistency
// ============================================================================

#[test]
fn test_every_record_with_content_renders() {
    let portfolio = Portfolio::builtin().unwrap();
    for project in portfolio.projects() {
        let page = render_route(&portfolio, &Route::Project(project.id.clone())).unwrap();
        assert_eq!(page.status, PageStatus::Ok, "{} did not render", project.id);
        assert!(page.html.contains(&format!("data-project-id=\"{}\"", project.id)));
    }
}

#[test]
fn test_listing_cards_link_to_detail_routes() {
    let portfolio = Portfolio::builtin().unwrap();
    let listing = build_listing(&portfolio);
    for card in &listing.cards {
        assert_eq!(Route::parse(&card.href), Route::Project(card.id.to_string()));
    }
}

#[test]
fn test_unknown_paths_are_not_found() {
    let portfolio = Portfolio::builtin().unwrap();
    for path in ["/about", "/project", "/project/", "/project/a/b"] {
        let page = render_path(&portfolio, path).unwrap();
        assert_eq!(page.status, PageStatus::NotFound, "{}", path);
    }
}
