//! Archive filename sanitization.

use crate::defaults;

/// Sanitize a note title for use in an archive filename.
///
/// Path separators (`/`, `\`) become hyphens, the result is truncated to
/// [`defaults::ARCHIVE_TITLE_MAX_CHARS`] characters, and only alphanumeric
/// characters, spaces, hyphens, and underscores survive. Truncation happens
/// before the character filter, so the final length never exceeds the cap.
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();

    replaced
        .chars()
        .take(defaults::ARCHIVE_TITLE_MAX_CHARS)
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect()
}
