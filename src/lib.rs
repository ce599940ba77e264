//! ukr-bible — reference lookup and full-text search over the Ukrainian Bible.
//!
//! This crate re-exports the core [`Corpus`] so that integration tests and
//! wrappers (bots, HTTP handlers) can depend on a single crate, and adds the
//! [`render`] layer the CLI uses for text and JSON output.
//!
//! # Architecture
//!
//! ```text
//! data file ──► Corpus ──► get / search / random / books ──► render ──► stdout
//! ```
//!
//! The binary constructs one [`Corpus`] at startup and passes it by
//! reference; there is no global instance.

pub mod render;

pub use ukr_bible_core::{aliases, config};
pub use ukr_bible_core::{
    BookSummary, Corpus, CorpusError, Reference, Result, Sampling, Verse,
};
