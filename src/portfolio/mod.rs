//! Portfolio Data
//!
//! Project records, their structured case-study content and the read-only
//! registry that the listing and detail views render from.

pub mod content;
pub mod loader;
pub mod registry;
pub mod types;

pub use content::{CaseStudy, ContentBlock, Figure, Section, Table};
pub use loader::{LoadError, LoadOptions, Portfolio, PortfolioDocument};
pub use registry::{is_valid_project_id, ProjectRegistry, RegistryError};
pub use types::{Profile, ProfileLink, Project};
