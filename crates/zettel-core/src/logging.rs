//! Structured logging field name constants for the zettel pipeline.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log queries work with standardized names across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Note failed or collaborator unreachable, operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Run lifecycle, per-note completion |
//! | DEBUG | Stage transitions, candidate counts, config choices |
//! | TRACE | Per-candidate scoring, raw payload sizes |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "store", "inference", "archive", "pipeline"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "list_notes", "analyze", "write_archive", "process_note"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note id being operated on.
pub const NOTE_ID: &str = "note_id";

/// Note title (pre- or post-enrichment depending on stage).
pub const TITLE: &str = "title";

/// Archive file path being written.
pub const ARCHIVE_PATH: &str = "archive_path";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of notes in a listing or snapshot.
pub const NOTE_COUNT: &str = "note_count";

/// Number of candidate notes selected for processing.
pub const CANDIDATE_COUNT: &str = "candidate_count";

/// Number of related notes found by the matcher.
pub const RELATED_COUNT: &str = "related_count";

/// Character length of extracted note content.
pub const CONTENT_LEN: &str = "content_len";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Notes processed successfully in a run.
pub const SUCCEEDED: &str = "succeeded";

/// Notes skipped (too short) in a run.
pub const SKIPPED: &str = "skipped";

/// Notes failed in a run.
pub const FAILED: &str = "failed";
