use crate::portfolio::content::{ContentBlock, Table};
use crate::portfolio::Project;

/// Markdown formatter for case studies
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a project's case study as a Markdown document.
    ///
    /// `fallback_link` stands in for a missing source link, as on the
    /// detail page. Returns `None` for records without case-study content.
    pub fn format_case_study(project: &Project, fallback_link: &str) -> Option<String> {
        let study = project.case_study.as_ref()?;
        let mut md = String::with_capacity(4096);

        // Hero
        md.push_str(&format!("# {}\n\n", project.title));
        md.push_str(&format!("{}\n\n", project.description));
        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|tag| format!("`{}`", tag)).collect();
            md.push_str(&format!("**Tags:** {}\n\n", tags.join(" ")));
        }
        md.push_str(&format!(
            "[View on GitHub]({})\n\n",
            project.source_link_or(fallback_link)
        ));
        for figure in &study.gallery {
            md.push_str(&format!("![{}]({})\n\n", figure.alt, figure.src));
        }

        for section in &study.sections {
            md.push_str(&format!("## {}\n\n", section.heading));
            for block in &section.blocks {
                Self::format_block(&mut md, block);
            }
        }

        Some(md.trim_end().to_string() + "\n")
    }

    fn format_block(md: &mut String, block: &ContentBlock) {
        match block {
            ContentBlock::Paragraph(p) => {
                md.push_str(&format!("{}\n\n", p.text));
            }
            ContentBlock::Callout(callout) => {
                md.push_str(&format!("> **{}**  \n", callout.title));
                for line in callout.text.lines() {
                    md.push_str(&format!("> {}\n", line));
                }
                md.push('\n');
            }
            ContentBlock::BulletList(list) => {
                Self::format_subheading(md, &list.title);
                for item in &list.items {
                    md.push_str(&format!("- {}\n", item));
                }
                md.push('\n');
            }
            ContentBlock::CardGrid(grid) => {
                Self::format_subheading(md, &grid.title);
                for card in &grid.cards {
                    if card.title.is_empty() {
                        md.push_str(&format!("- {}\n", card.text));
                    } else {
                        md.push_str(&format!("- **{}:** {}\n", card.title, card.text));
                    }
                }
                md.push('\n');
            }
            ContentBlock::Pipeline(pipeline) => {
                Self::format_subheading(md, &pipeline.title);
                md.push_str(&format!("{}\n\n", pipeline.steps.join(" → ")));
            }
            ContentBlock::CodeList(code) => {
                Self::format_subheading(md, &code.title);
                md.push_str("```\n");
                for line in &code.lines {
                    md.push_str(line);
                    md.push('\n');
                }
                md.push_str("```\n\n");
            }
            ContentBlock::Table(table) => Self::format_table(md, table),
            ContentBlock::Figure(figure) => match &figure.href {
                Some(href) => md.push_str(&format!("[![{}]({})]({})\n\n", figure.alt, figure.src, href)),
                None => md.push_str(&format!("![{}]({})\n\n", figure.alt, figure.src)),
            },
            ContentBlock::References(refs) => {
                for (index, item) in refs.items.iter().enumerate() {
                    md.push_str(&format!("{}. {}\n", index + 1, item));
                }
                md.push('\n');
            }
            ContentBlock::CallToAction(cta) => {
                md.push_str(&format!("### {}\n\n", cta.title));
                md.push_str(&format!("{}\n\n", cta.text));
                md.push_str(&format!("[{}]({})\n\n", cta.label, cta.href));
            }
        }
    }

    fn format_subheading(md: &mut String, title: &str) {
        if !title.is_empty() {
            md.push_str(&format!("### {}\n\n", title));
        }
    }

    /// Pipe table; the highlighted row is bold.
    fn format_table(md: &mut String, table: &Table) {
        if !table.caption.is_empty() {
            md.push_str(&format!("**{}**\n\n", table.caption));
        }

        let headers: Vec<String> = table.headers.iter().map(|h| escape_cell(h)).collect();
        md.push_str(&format!("| {} |\n", headers.join(" | ")));
        md.push_str(&format!("|{}\n", " --- |".repeat(table.headers.len())));

        for (index, row) in table.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| {
                    if table.is_highlighted(index) {
                        format!("**{}**", escape_cell(cell))
                    } else {
                        escape_cell(cell)
                    }
                })
                .collect();
            md.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        md.push('\n');

        if !table.note.is_empty() {
            md.push_str(&format!("*{}*\n\n", table.note));
        }
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
