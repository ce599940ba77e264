//! ukr-bible-core — corpus loading, citation parsing, and lookup.
//!
//! This crate owns the single [`Corpus`] component: a read-only, in-memory
//! copy of the Bible text loaded once from a JSON data file, plus the alias
//! index that lets human-typed citations such as `"Буття 1:1-3"` resolve to
//! verse records.
//!
//! # Layers
//!
//! ```text
//! data file ──► data (typed load + validation) ──► Corpus ──► get / search / random / books
//!                                                   ▲
//!                        aliases + reference ───────┘
//! ```
//!
//! The corpus is constructed once by the caller and shared by reference; it
//! is never mutated after construction, so it is safe to share across
//! threads without locking.

pub mod aliases;
pub mod config;
pub mod corpus;
pub mod data;
pub mod error;
pub mod reference;
pub mod types;

pub use corpus::Corpus;
pub use error::{CorpusError, Result};
pub use reference::Reference;
pub use types::{BookEntry, BookIds, BookSummary, Sampling, Verse};
