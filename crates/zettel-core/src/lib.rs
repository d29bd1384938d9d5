//! # zettel-core
//!
//! Core types, traits, and abstractions for the zettel pipeline.
//!
//! This crate provides the foundational data structures, the collaborator
//! trait seams, and the two pure algorithms of the system: content
//! extraction and related-note scoring.

pub mod defaults;
pub mod error;
pub mod extract;
pub mod filename;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use extract::extract_text;
pub use filename::sanitize_title;
pub use matcher::find_related;
pub use models::*;
pub use traits::*;
