//! Content extraction: flatten structured blocks into plain text.
//!
//! Rendering rules per block kind:
//!
//! | kind            | rendering                         |
//! |-----------------|-----------------------------------|
//! | paragraph       | raw text line                     |
//! | heading 1-3     | `\n## text\n`                     |
//! | bulleted item   | `- text`                          |
//! | numbered item   | `1. text` (literal, not renumbered) |
//! | to-do item      | `✓ text` / `☐ text`               |
//!
//! Blocks with no text are skipped silently; unrecognized kinds are ignored
//! (forward-compatible). Source block order is preserved exactly.

use crate::models::{BlockKind, ContentBlock};

/// Glyph for a checked to-do item.
const CHECKED_GLYPH: &str = "✓";

/// Glyph for an unchecked to-do item.
const UNCHECKED_GLYPH: &str = "☐";

/// Flatten an ordered block sequence into a single text document.
pub fn extract_text(blocks: &[ContentBlock]) -> String {
    let mut lines = Vec::new();

    for block in blocks {
        if block.text.is_empty() {
            continue;
        }
        match &block.kind {
            BlockKind::Paragraph => lines.push(block.text.clone()),
            BlockKind::Heading(_) => lines.push(format!("\n## {}\n", block.text)),
            BlockKind::BulletedListItem => lines.push(format!("- {}", block.text)),
            // Every numbered item keeps the same literal marker; ordering
            // comes from source order, never from renumbering.
            BlockKind::NumberedListItem => lines.push(format!("1. {}", block.text)),
            BlockKind::ToDo { checked } => {
                let glyph = if *checked { CHECKED_GLYPH } else { UNCHECKED_GLYPH };
                lines.push(format!("{} {}", glyph, block.text));
            }
            BlockKind::Other(_) => {}
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(kind: BlockKind, text: &str) -> ContentBlock {
        ContentBlock::new(kind, text)
    }

    #[test]
    fn test_paragraph_renders_raw() {
        let text = extract_text(&[block(BlockKind::Paragraph, "plain line")]);
        assert_eq!(text, "plain line");
    }

    #[test]
    fn test_heading_levels_share_marker() {
        for level in 1..=3 {
            let text = extract_text(&[block(BlockKind::Heading(level), "Topic")]);
            assert_eq!(text, "\n## Topic\n");
        }
    }

    #[test]
    fn test_bulleted_item_prefix() {
        let text = extract_text(&[block(BlockKind::BulletedListItem, "point")]);
        assert_eq!(text, "- point");
    }

    #[test]
    fn test_numbered_items_not_renumbered() {
        let text = extract_text(&[
            block(BlockKind::NumberedListItem, "first"),
            block(BlockKind::NumberedListItem, "second"),
            block(BlockKind::NumberedListItem, "third"),
        ]);
        assert_eq!(text, "1. first\n1. second\n1. third");
    }

    #[test]
    fn test_todo_glyphs() {
        let text = extract_text(&[
            block(BlockKind::ToDo { checked: true }, "done"),
            block(BlockKind::ToDo { checked: false }, "open"),
        ]);
        assert_eq!(text, "✓ done\n☐ open");
    }

    #[test]
    fn test_empty_text_blocks_skipped() {
        let text = extract_text(&[
            block(BlockKind::Paragraph, "kept"),
            block(BlockKind::Paragraph, ""),
            block(BlockKind::Heading(1), ""),
            block(BlockKind::Paragraph, "also kept"),
        ]);
        assert_eq!(text, "kept\nalso kept");
    }

    #[test]
    fn test_unknown_kinds_ignored() {
        let text = extract_text(&[
            block(BlockKind::Paragraph, "before"),
            block(BlockKind::Other("embed".to_string()), "ignored payload"),
            block(BlockKind::Paragraph, "after"),
        ]);
        assert_eq!(text, "before\nafter");
    }

    #[test]
    fn test_source_order_preserved() {
        let text = extract_text(&[
            block(BlockKind::Heading(1), "Intro"),
            block(BlockKind::Paragraph, "body"),
            block(BlockKind::BulletedListItem, "a"),
            block(BlockKind::NumberedListItem, "b"),
        ]);
        assert_eq!(text, "\n## Intro\n\nbody\n- a\n1. b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_text(&[]), "");
    }
}
