//! Related-note scoring over the corpus snapshot.
//!
//! Lexical relevance, deliberately not semantic search:
//!
//! ```text
//! score = 2 * title_matches + tag_matches
//! ```
//!
//! where a match is a case-insensitive substring occurrence of a keyword in
//! the note title or in the concatenated tag text. Title matches weigh
//! double: titles are curated free text, tags are coarse categories. The
//! matching stays exact-substring for reproducibility.

use crate::defaults;
use crate::models::{CorpusSnapshot, RelatedNote};

/// Score and rank candidate related notes from the snapshot.
///
/// Returns at most `top_k` candidates ordered by descending score, ties
/// broken by snapshot order. Notes scoring zero are excluded entirely, as
/// are the excluded note itself and notes with an empty or placeholder
/// title. Empty keywords yield an empty result; there is no fallback
/// scoring.
pub fn find_related(
    keywords: &[String],
    exclude_note_id: &str,
    snapshot: &CorpusSnapshot,
    top_k: usize,
) -> Vec<RelatedNote> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let keywords_lower: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut related = Vec::new();
    for note in snapshot.iter() {
        if note.id == exclude_note_id {
            continue;
        }
        if note.title.is_empty() || note.title == defaults::UNTITLED_TITLE {
            continue;
        }

        let title = note.title.to_lowercase();
        let tags = note.tags.join(" ").to_lowercase();

        let title_matches = keywords_lower.iter().filter(|kw| title.contains(*kw)).count() as u32;
        let tag_matches = keywords_lower.iter().filter(|kw| tags.contains(*kw)).count() as u32;

        let score = title_matches * 2 + tag_matches;
        if score > 0 {
            related.push(RelatedNote {
                id: note.id.clone(),
                title: note.title.clone(),
                score,
            });
        }
    }

    // Stable sort keeps snapshot order for equal scores.
    related.sort_by(|a, b| b.score.cmp(&a.score));
    related.truncate(top_k);
    related
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Note, NoteStatus};
    use chrono::Utc;

    fn note(id: &str, title: &str, tags: &[&str]) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status: NoteStatus::Processed,
            ai_processed: true,
            created_at: Utc::now(),
            revision: "r1".to_string(),
        }
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_title_matches_weigh_double() {
        let snapshot = CorpusSnapshot::new(vec![note(
            "a",
            "Rust memory model",
            &["cache", "gc"],
        )]);

        let related = find_related(&keywords(&["rust", "cache"]), "self", &snapshot, 5);

        assert_eq!(related.len(), 1);
        // 1 title match ("rust") * 2 + 1 tag match ("cache") = 3
        assert_eq!(related[0].score, 3);
    }

    #[test]
    fn test_zero_score_excluded_not_ranked_low() {
        let snapshot = CorpusSnapshot::new(vec![
            note("a", "Rust memory model", &[]),
            note("b", "Gardening tips", &["plants"]),
        ]);

        let related = find_related(&keywords(&["rust"]), "self", &snapshot, 5);

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "a");
    }

    #[test]
    fn test_empty_keywords_return_empty() {
        let snapshot = CorpusSnapshot::new(vec![note("a", "Anything", &["tag"])]);
        assert!(find_related(&[], "self", &snapshot, 5).is_empty());
    }

    #[test]
    fn test_excludes_current_note() {
        let snapshot = CorpusSnapshot::new(vec![note("self", "Rust notes", &[])]);
        assert!(find_related(&keywords(&["rust"]), "self", &snapshot, 5).is_empty());
    }

    #[test]
    fn test_excludes_untitled_and_empty_titles() {
        let snapshot = CorpusSnapshot::new(vec![
            note("a", "", &["rust"]),
            note("b", "untitled", &["rust"]),
            note("c", "Rust book", &[]),
        ]);

        let related = find_related(&keywords(&["rust"]), "self", &snapshot, 5);

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "c");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let snapshot = CorpusSnapshot::new(vec![note("a", "RUST Memory", &["CACHE"])]);
        let related = find_related(&keywords(&["Rust", "cache"]), "self", &snapshot, 5);
        assert_eq!(related[0].score, 3);
    }

    #[test]
    fn test_substring_matching() {
        // "cach" matches "caching": substring, not token match.
        let snapshot = CorpusSnapshot::new(vec![note("a", "On caching strategies", &[])]);
        let related = find_related(&keywords(&["cach"]), "self", &snapshot, 5);
        assert_eq!(related[0].score, 2);
    }

    #[test]
    fn test_descending_score_order() {
        let snapshot = CorpusSnapshot::new(vec![
            note("low", "tagged only", &["rust"]),
            note("high", "Rust in the title", &["rust"]),
        ]);

        let related = find_related(&keywords(&["rust"]), "self", &snapshot, 5);

        assert_eq!(related[0].id, "high");
        assert_eq!(related[0].score, 3);
        assert_eq!(related[1].id, "low");
        assert_eq!(related[1].score, 1);
    }

    #[test]
    fn test_ties_keep_snapshot_order() {
        let snapshot = CorpusSnapshot::new(vec![
            note("first", "Rust alpha", &[]),
            note("second", "Rust beta", &[]),
            note("third", "Rust gamma", &[]),
        ]);

        let related = find_related(&keywords(&["rust"]), "self", &snapshot, 5);

        let ids: Vec<&str> = related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_top_k_cap() {
        let notes: Vec<Note> = (0..10)
            .map(|i| note(&format!("n{i}"), &format!("Rust note {i}"), &[]))
            .collect();
        let snapshot = CorpusSnapshot::new(notes);

        let related = find_related(&keywords(&["rust"]), "self", &snapshot, 5);
        assert_eq!(related.len(), 5);
    }

    #[test]
    fn test_tag_text_is_concatenated() {
        // A keyword spanning the join boundary must not match; tags join
        // with a space separator.
        let snapshot = CorpusSnapshot::new(vec![note("a", "Title", &["foo", "bar"])]);
        assert!(find_related(&keywords(&["foobar"]), "self", &snapshot, 5).is_empty());

        let related = find_related(&keywords(&["foo bar"]), "self", &snapshot, 5);
        assert_eq!(related.len(), 1);
    }
}
