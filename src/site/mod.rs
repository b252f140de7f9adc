//! Site Views
//!
//! Listing and detail views, their Askama page templates and the route
//! dispatcher that turns a request path into a rendered page.

pub mod pages;
pub mod routes;
pub mod view_builder;
pub mod view_models;

pub use pages::RenderError;
pub use routes::{render_path, render_route, PageStatus, RenderedPage, Route};
pub use view_builder::{build_detail, build_listing, build_not_found, resolve_detail, ResolveError};
pub use view_models::{DetailPage, HeroImage, ListingPage, NotFoundPage, ProjectCard};
