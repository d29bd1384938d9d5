//! # zettel-pipeline
//!
//! Incremental processing pipeline for the zettel system.
//!
//! This crate provides:
//! - The durable [`Ledger`] behind idempotent, edit-aware runs
//! - The [`NotePersister`] applying enrichment to the store and archive
//! - The [`Pipeline`] runner driving the per-note processing sequence and
//!   aggregating run counts
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use zettel_pipeline::{Ledger, Pipeline, RunConfig};
//!
//! let store = Arc::new(zettel_store::NotionStore::from_env()?);
//! let backend = Arc::new(zettel_inference::ChatBackend::from_env()?);
//! let archive = Arc::new(zettel_archive::GitHubArchive::from_env()?);
//! let ledger = Ledger::load("logs/processing_log.json");
//!
//! let mut pipeline = Pipeline::new(store, backend, archive, ledger, RunConfig::from_env());
//! let summary = pipeline.run().await?;
//! println!("{}", summary);
//! ```

pub mod ledger;
pub mod persist;
pub mod runner;

// Re-export core types
pub use zettel_core::*;

pub use ledger::Ledger;
pub use persist::NotePersister;
pub use runner::{NoteOutcome, Pipeline, RunConfig, RunSummary};
