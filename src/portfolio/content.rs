//! Case-Study Content Model
//!
//! Structured long-form content attached to a project record. One generic
//! renderer interprets these blocks, so adding a project never needs code.
//!
//! ## Layout
//! - `CaseStudy`: optional source link, hero gallery, ordered sections
//! - `Section`: heading plus ordered blocks
//! - `ContentBlock`: tagged variant, serialized as `{"type": "...", ...}`

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Complete case study for one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Repository link for the detail hero button (overrides `Project::link`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Hero images. Two or more render as a grid.
    #[serde(default)]
    pub gallery: Vec<Figure>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl CaseStudy {
    /// Whether the hero renders as an image grid instead of a single image.
    pub fn uses_image_grid(&self) -> bool {
        self.gallery.len() >= 2
    }

    /// All tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.sections.iter().flat_map(|section| {
            section.blocks.iter().filter_map(|block| match block {
                ContentBlock::Table(table) => Some(table),
                _ => None,
            })
        })
    }

    /// Finds a section by its heading (exact match).
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.heading == heading)
    }

    /// Plain-text rendering of every section, one paragraph per block.
    ///
    /// This is the long-form description of the project; there is no
    /// separately stored copy that could drift from the rendered content.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(Section::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// One titled part of a case study (motivation, method, results, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    pub fn plain_text(&self) -> String {
        let mut parts = vec![self.heading.clone()];
        parts.extend(self.blocks.iter().map(ContentBlock::plain_text));
        parts.join("\n\n")
    }
}

// ============================================================================
// Blocks
// ============================================================================

/// A single renderable unit inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph(Paragraph),
    Callout(Callout),
    BulletList(BulletList),
    CardGrid(CardGrid),
    Pipeline(Pipeline),
    CodeList(CodeList),
    Table(Table),
    Figure(Figure),
    References(References),
    CallToAction(CallToAction),
}

impl ContentBlock {
    /// Stable snake_case name, matches the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::Callout(_) => "callout",
            ContentBlock::BulletList(_) => "bullet_list",
            ContentBlock::CardGrid(_) => "card_grid",
            ContentBlock::Pipeline(_) => "pipeline",
            ContentBlock::CodeList(_) => "code_list",
            ContentBlock::Table(_) => "table",
            ContentBlock::Figure(_) => "figure",
            ContentBlock::References(_) => "references",
            ContentBlock::CallToAction(_) => "call_to_action",
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::Paragraph(p) => p.text.clone(),
            ContentBlock::Callout(c) => format!("{}:\n{}", c.title, c.text),
            ContentBlock::BulletList(list) => titled_lines(&list.title, &list.items, "- "),
            ContentBlock::CardGrid(grid) => {
                let items: Vec<String> = grid
                    .cards
                    .iter()
                    .map(|card| {
                        if card.title.is_empty() {
                            card.text.clone()
                        } else {
                            format!("{}: {}", card.title, card.text)
                        }
                    })
                    .collect();
                titled_lines(&grid.title, &items, "- ")
            }
            ContentBlock::Pipeline(pipeline) => {
                let flow = pipeline.steps.join(" → ");
                if pipeline.title.is_empty() {
                    flow
                } else {
                    format!("{}: {}", pipeline.title, flow)
                }
            }
            ContentBlock::CodeList(code) => titled_lines(&code.title, &code.lines, ""),
            ContentBlock::Table(table) => {
                let mut lines = Vec::with_capacity(table.rows.len() + 1);
                lines.push(table.headers.join(" | "));
                lines.extend(table.rows.iter().map(|row| row.join(" | ")));
                if !table.note.is_empty() {
                    lines.push(table.note.clone());
                }
                titled_lines(&table.caption, &lines, "")
            }
            ContentBlock::Figure(figure) => figure.alt.clone(),
            ContentBlock::References(refs) => titled_lines("References", &refs.items, "- "),
            ContentBlock::CallToAction(cta) => format!("{}\n{}", cta.title, cta.text),
        }
    }
}

fn titled_lines(title: &str, items: &[String], bullet: &str) -> String {
    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(title);
        out.push(':');
    }
    for item in items {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(bullet);
        out.push_str(item);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

/// Highlighted box with a title (goal statements, distribution notes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletList {
    #[serde(default)]
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardGrid {
    #[serde(default)]
    pub title: String,
    pub cards: Vec<Card>,
}

/// Ordered processing steps, drawn with arrows between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub title: String,
    pub steps: Vec<String>,
}

/// Monospace listing (environment setup, file trees, shell steps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeList {
    #[serde(default)]
    pub title: String,
    pub lines: Vec<String>,
}

/// Literal result table. Cells are display strings, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub caption: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Row index rendered as the best result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<usize>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl Table {
    /// Accepts `&usize` as well, which is what template loop indices are.
    pub fn is_highlighted(&self, index: impl Borrow<usize>) -> bool {
        self.highlight == Some(*index.borrow())
    }

    pub fn highlighted_row(&self) -> Option<&[String]> {
        self.highlight
            .and_then(|index| self.rows.get(index))
            .map(Vec::as_slice)
    }

    /// Checks row widths and the highlight index.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.headers.is_empty() {
            return Err("table has no headers".to_string());
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != self.headers.len() {
                return Err(format!(
                    "row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    self.headers.len()
                ));
            }
        }
        if let Some(index) = self.highlight {
            if index >= self.rows.len() {
                return Err(format!(
                    "highlight row {} out of range ({} rows)",
                    index,
                    self.rows.len()
                ));
            }
        }
        Ok(())
    }
}

/// Image reference, optionally wrapped in a link (e.g. demo video).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Figure {
    pub fn is_linked(&self) -> bool {
        self.href.is_some()
    }

    pub fn link(&self) -> &str {
        self.href.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct References {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub text: String,
    pub label: String,
    pub href: String,
}
