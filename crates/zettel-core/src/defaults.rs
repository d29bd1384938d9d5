//! Centralized default constants for the zettel pipeline.
//!
//! **This module is the single source of truth** for all shared default
//! values. Crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// CONTENT
// =============================================================================

/// Minimum extracted-body length (in characters) for a note to be processed.
/// Shorter notes are skipped without a ledger entry and re-examined every run.
pub const MIN_CONTENT_CHARS: usize = 20;

/// Maximum characters of note text submitted to the analysis backend.
/// Longer notes are truncated. Lossy by design, a cost/latency control.
pub const ANALYSIS_INPUT_MAX_CHARS: usize = 3000;

// =============================================================================
// ENRICHMENT CONTRACT
// =============================================================================

/// Maximum length of a generated title in characters (prompt contract).
pub const TITLE_MAX_CHARS: usize = 50;

/// Minimum tags requested from the analysis backend.
pub const TAG_MIN_COUNT: usize = 3;

/// Maximum tags requested from the analysis backend.
pub const TAG_MAX_COUNT: usize = 5;

/// Minimum keywords requested from the analysis backend.
pub const KEYWORD_MIN_COUNT: usize = 5;

/// Maximum keywords requested from the analysis backend.
pub const KEYWORD_MAX_COUNT: usize = 8;

/// Characters of input used for the fallback summary when analysis fails.
pub const SUMMARY_FALLBACK_CHARS: usize = 100;

/// Fallback title when the analysis backend fails or returns garbage.
/// Also treated as a placeholder: notes carrying it never match as related.
pub const UNTITLED_TITLE: &str = "untitled";

/// Sentinel tag applied when analysis fails and the note had no tags.
pub const UNCLASSIFIED_TAG: &str = "unclassified";

/// Sampling temperature for analysis requests (low for determinism).
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

// =============================================================================
// RELATED-NOTE MATCHING
// =============================================================================

/// Maximum related notes linked per note.
pub const RELATED_TOP_K: usize = 5;

/// Heading text marking an existing backlink section. The persister never
/// appends a second section to a note whose headings contain this marker.
pub const RELATED_SECTION_MARKER: &str = "Related Notes";

/// Heading rendered for a newly appended backlink section.
pub const RELATED_SECTION_HEADING: &str = "Related Notes";

// =============================================================================
// ARCHIVE
// =============================================================================

/// Directory inside the archive repository receiving rendered notes.
pub const ARCHIVE_DIR: &str = "vault";

/// Maximum sanitized-title length used in archive filenames.
pub const ARCHIVE_TITLE_MAX_CHARS: usize = 50;

// =============================================================================
// PACING
// =============================================================================

/// Delay after each paginated listing call (milliseconds).
/// Keeps request pacing predictable against rate-limited collaborator APIs.
pub const PAGE_DELAY_MS: u64 = 300;

/// Delay after each fully processed note (milliseconds).
pub const NOTE_DELAY_MS: u64 = 1000;

// =============================================================================
// LEDGER
// =============================================================================

/// Default path of the processing ledger file.
pub const LEDGER_PATH: &str = "logs/processing_log.json";

// =============================================================================
// DOCUMENT STORE
// =============================================================================

/// Default document store API base URL.
pub const STORE_URL: &str = "https://api.notion.com/v1";

/// API version header value sent with every document store request.
pub const STORE_API_VERSION: &str = "2022-06-28";

/// Page size requested from paginated listing endpoints.
pub const STORE_PAGE_SIZE: usize = 100;

/// Timeout for document store requests in seconds.
pub const STORE_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// ANALYSIS BACKEND
// =============================================================================

/// Default analysis backend base URL (OpenAI-compatible).
pub const ANALYSIS_URL: &str = "https://api.openai.com/v1";

/// Default analysis model.
pub const ANALYSIS_MODEL: &str = "gpt-4o-mini";

/// Timeout for analysis requests in seconds.
pub const ANALYSIS_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// ARCHIVE STORE
// =============================================================================

/// Default archive API base URL (GitHub contents API host).
pub const ARCHIVE_API_URL: &str = "https://api.github.com";

/// Timeout for archive requests in seconds.
pub const ARCHIVE_TIMEOUT_SECS: u64 = 30;
