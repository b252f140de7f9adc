//! Alternative renderings of project content (Markdown, JSON).

pub mod json;
pub mod markdown;

pub use json::{JsonFormatter, ProjectDocument};
pub use markdown::MarkdownFormatter;
