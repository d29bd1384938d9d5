//! Processing ledger: the durable record behind idempotent runs.
//!
//! The ledger maps note ids to the revision each note carried when it was
//! last processed, plus the attempt outcome. It is read at the start of
//! every run to prune the candidate set and written through to disk after
//! every mutation, so a mid-run crash loses at most the entry currently
//! being written.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use zettel_core::{Error, LedgerEntry, Outcome, Result};

/// On-disk document shape: entries keyed by note id.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    processed: HashMap<String, LedgerEntry>,
}

/// Durable record of which notes were processed at which revision.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    entries: HashMap<String, LedgerEntry>,
}

impl Ledger {
    /// Load the ledger from `path`.
    ///
    /// Fail-open: a missing, unreadable, or corrupt file yields an empty
    /// ledger (every note reads as stale and gets reprocessed). Corruption
    /// is never fatal.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<LedgerFile>(&raw) {
                Ok(file) => file.processed,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Ledger file is corrupt, starting from an empty ledger"
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Ledger file is unreadable, starting from an empty ledger"
                );
                HashMap::new()
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "Loaded ledger");
        Self { path, entries }
    }

    /// Whether a note needs processing at the given revision.
    ///
    /// True iff no entry exists or the stored revision differs. A note
    /// edited since its last attempt is stale regardless of whether that
    /// attempt succeeded or failed.
    pub fn is_stale(&self, note_id: &str, revision: &str) -> bool {
        match self.entries.get(note_id) {
            Some(entry) => entry.revision != revision,
            None => true,
        }
    }

    /// Record a processing attempt, overwriting any previous entry, and
    /// persist the whole ledger immediately (write-through).
    ///
    /// `revision` is the note's revision *as read before processing*, not
    /// anything derived from the enriched output.
    pub fn record(
        &mut self,
        note_id: &str,
        title: &str,
        revision: &str,
        outcome: Outcome,
    ) -> Result<()> {
        self.entries.insert(
            note_id.to_string(),
            LedgerEntry {
                title: title.to_string(),
                processed_at: Utc::now(),
                revision: revision.to_string(),
                outcome,
            },
        );
        self.save()
    }

    /// Look up the entry for a note.
    pub fn get(&self, note_id: &str) -> Option<&LedgerEntry> {
        self.entries.get(note_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::Ledger(format!("failed to create ledger dir: {}", e)))?;
            }
        }

        let file = LedgerFile {
            processed: self.entries.clone(),
        };
        let raw = serde_json::to_string_pretty(&file)
            .map_err(|e| Error::Ledger(format!("failed to serialize ledger: {}", e)))?;
        fs::write(&self.path, raw)
            .map_err(|e| Error::Ledger(format!("failed to write ledger: {}", e)))
    }
}
