//! Test builders — ergonomic constructors for corpora and configs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{json, Map, Value};
use ukr_bible::Corpus;

// ---------------------------------------------------------------------------
// CorpusBuilder
// ---------------------------------------------------------------------------

/// Fluent builder producing data-file JSON and the [`Corpus`] it loads into.
///
/// Keys are emitted in sorted string order (`"10"` before `"2"`), so tests
/// that care about traversal order should use [`crate::common::SAMPLE_JSON`].
///
/// # Example
///
/// ```rust
/// let corpus = CorpusBuilder::new()
///     .book("1М", 1, "Буття")
///     .verse(1, 1, "На початку Бог створив Небо та землю.")
///     .verse(1, 2, "А земля була пуста та порожня.")
///     .build();
/// ```
#[derive(Default)]
pub struct CorpusBuilder {
    books: Map<String, Value>,
    current: Option<String>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new book; following `verse` calls add to it.
    pub fn book(mut self, key: &str, number: u32, long_name: &str) -> Self {
        self.books.insert(
            key.to_string(),
            json!({
                "ids": {"book_number": number, "short_name": key, "long_name": long_name},
                "text": {}
            }),
        );
        self.current = Some(key.to_string());
        self
    }

    pub fn verse(mut self, chapter: u32, verse: u32, text: &str) -> Self {
        let key = self
            .current
            .clone()
            .expect("call .book() before .verse()");
        let chapters = self.books[&key]["text"]
            .as_object_mut()
            .expect("text is an object");
        chapters
            .entry(chapter.to_string())
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .expect("chapter is an object")
            .insert(verse.to_string(), Value::String(text.to_string()));
        self
    }

    /// Add `count` numbered verses (`"<prefix> <n>"`) to `chapter`.
    pub fn verses(mut self, chapter: u32, count: u32, prefix: &str) -> Self {
        for n in 1..=count {
            self = self.verse(chapter, n, &format!("{prefix} {n}"));
        }
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&Value::Object(self.books.clone()))
            .expect("builder JSON must serialize")
    }

    pub fn build(self) -> Corpus {
        Corpus::from_json_str(&self.to_json()).expect("builder corpus must load")
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A corpus of `books` books with `chapters` chapters of `verses` verses each.
/// Book `n` has key `B{n}`, long name `Book {n}`, and number `n`.
pub fn grid_corpus(books: u32, chapters: u32, verses: u32) -> Corpus {
    let mut builder = CorpusBuilder::new();
    for b in 1..=books {
        builder = builder.book(&format!("B{b}"), b, &format!("Book {b}"));
        for c in 1..=chapters {
            builder = builder.verses(c, verses, &format!("book {b} chapter {c} verse"));
        }
    }
    builder.build()
}

/// Build an `[[aliases]]` config entry.
pub fn alias_config(book: &str, names: &[&str]) -> ukr_bible::config::AliasConfig {
    ukr_bible::config::AliasConfig {
        book: book.to_string(),
        names: names.iter().map(|n| n.to_string()).collect(),
    }
}
