//! Core types for ukr-bible-core.
//!
//! This module defines the data structures shared by every operation: the
//! in-memory [`BookEntry`] with its [`BookIds`], the transient [`Verse`]
//! records handed back to callers, and the [`BookSummary`] rows returned by
//! book listing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifiers stored under `ids` for every book in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIds {
    /// Canonical position of the book in the canon (Genesis = 1).
    pub book_number: u32,
    /// Abbreviated book name, e.g. `1М`.
    pub short_name: String,
    /// Full book name, e.g. `Буття`.
    pub long_name: String,
}

/// Chapter number → verse number → verse text, in data-file order.
pub type Chapters = IndexMap<u32, IndexMap<u32, String>>;

/// A fully validated book: identifiers plus integer-keyed chapters.
///
/// Every chapter holds at least one verse and every book at least one
/// chapter; [`crate::data`] rejects files that break this.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntry {
    pub ids: BookIds,
    pub chapters: Chapters,
}

impl BookEntry {
    /// Total number of verses across all chapters.
    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(IndexMap::len).sum()
    }

    /// Build the output record for one stored verse.
    pub(crate) fn verse(&self, chapter: u32, verse: u32, text: &str) -> Verse {
        Verse {
            book_short: self.ids.short_name.clone(),
            book_long: self.ids.long_name.clone(),
            chapter,
            verse,
            text: text.to_string(),
        }
    }
}

/// A resolved verse, created per query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verse {
    pub book_short: String,
    pub book_long: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl Verse {
    /// The citation for this verse using the long book name, e.g. `Буття 1:1`.
    pub fn citation(&self) -> String {
        format!("{} {}:{}", self.book_long, self.chapter, self.verse)
    }
}

impl std::fmt::Display for Verse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{} {}",
            self.book_long, self.chapter, self.verse, self.text
        )
    }
}

/// One row of the book listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: u32,
    pub short: String,
    pub long: String,
}

impl From<&BookIds> for BookSummary {
    fn from(ids: &BookIds) -> Self {
        Self {
            id: ids.book_number,
            short: ids.short_name.clone(),
            long: ids.long_name.clone(),
        }
    }
}

/// How [`Corpus::random_verse`](crate::Corpus::random_verse) picks a verse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// Uniform book, then uniform chapter, then uniform verse. Verses in
    /// short books and chapters come up more often than in long ones.
    #[default]
    Stratified,
    /// Every verse in the corpus is equally likely.
    Uniform,
}

impl std::fmt::Display for Sampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sampling::Stratified => write!(f, "stratified"),
            Sampling::Uniform => write!(f, "uniform"),
        }
    }
}
