//! Deterministic archive file pathing.

use chrono::{DateTime, Utc};

use zettel_core::sanitize_title;

/// Build the archive path for a note: a fixed directory, the note's
/// creation date, an underscore, and the sanitized title.
pub fn archive_path(dir: &str, created_at: DateTime<Utc>, title: &str) -> String {
    format!(
        "{}/{}_{}.md",
        dir.trim_end_matches('/'),
        created_at.format("%Y-%m-%d"),
        sanitize_title(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 23, 59, 0).unwrap()
    }

    #[test]
    fn test_path_layout() {
        assert_eq!(
            archive_path("vault", created(), "Simple title"),
            "vault/2026-01-05_Simple title.md"
        );
    }

    #[test]
    fn test_path_breaking_characters_sanitized() {
        let path = archive_path("vault", created(), "a/b\\c");
        assert_eq!(path, "vault/2026-01-05_a-b-c.md");
    }

    #[test]
    fn test_long_title_truncated_before_extension() {
        let long = "x".repeat(120);
        let path = archive_path("vault", created(), &long);

        let filename = path.rsplit('/').next().unwrap();
        let stem = filename.strip_suffix(".md").unwrap();
        // date (10) + underscore + capped title
        assert_eq!(stem.chars().count(), 10 + 1 + 50);
    }

    #[test]
    fn test_trailing_slash_in_dir_ignored() {
        assert_eq!(
            archive_path("vault/", created(), "t"),
            "vault/2026-01-05_t.md"
        );
    }
}
