//! Archival markdown rendering.
//!
//! Layout: a front-matter header (title, creation date, tags when present),
//! a level-1 title heading, the extracted body, and, when related notes
//! exist, a trailing wiki-reference section. References use titles, not
//! ids: renaming a target note breaks the reference, which mirrors
//! human-wiki convention and is accepted here.

use chrono::{DateTime, Utc};

use zettel_core::{defaults, RelatedNote};

/// Render the archival document for one enriched note.
pub fn render_document(
    title: &str,
    created_at: DateTime<Utc>,
    tags: &[String],
    body: &str,
    related: &[RelatedNote],
) -> String {
    let mut tag_lines = String::new();
    if !tags.is_empty() {
        tag_lines.push_str("\ntags:\n");
        let rendered: Vec<String> = tags
            .iter()
            .map(|tag| format!("  - {}", tag.replace('#', "")))
            .collect();
        tag_lines.push_str(&rendered.join("\n"));
    }

    let mut doc = format!(
        "---\ntitle: {title}\ndate: {date}{tag_lines}\n---\n\n# {title}\n\n{body}\n",
        title = title,
        date = created_at.format("%Y-%m-%d"),
        tag_lines = tag_lines,
        body = body,
    );

    if !related.is_empty() {
        doc.push_str(&format!(
            "\n---\n\n## {}\n\n",
            defaults::RELATED_SECTION_HEADING
        ));
        for candidate in related {
            doc.push_str(&format!("- [[{}]]\n", candidate.title));
        }
    }

    doc
}
