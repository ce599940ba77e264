//! Corpus — the loaded Bible text and its four read operations.
//!
//! A [`Corpus`] is built once (from a file, a JSON string, or the resolved
//! [`Config`]) and never mutated afterwards. Every operation takes `&self`.

use crate::aliases::AliasIndex;
use crate::config::{AliasConfig, Config};
use crate::data::{self, BUNDLED_DATA_PATH};
use crate::error::Result;
use crate::reference::Reference;
use crate::types::{BookEntry, BookSummary, Sampling, Verse};
use indexmap::IndexMap;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::path::Path;

/// The read-only Bible text plus its alias index.
#[derive(Debug, Clone)]
pub struct Corpus {
    books: IndexMap<String, BookEntry>,
    aliases: AliasIndex,
    sampling: Sampling,
    verse_count: usize,
}

impl Corpus {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Load and validate the data file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let corpus = Self::from_books(data::load_file(path)?);
        tracing::info!(
            path = %path.display(),
            books = corpus.book_count(),
            verses = corpus.verse_count(),
            aliases = corpus.aliases.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Load the sample data file shipped alongside this crate.
    pub fn bundled() -> Result<Self> {
        Self::load(BUNDLED_DATA_PATH)
    }

    /// Build from JSON already in memory, in the data file's format.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::from_books(data::load_str(json)?))
    }

    /// Load the data file named by `config` (or the bundled one), overlay the
    /// configured aliases, and adopt the configured sampling mode.
    pub fn from_config(config: &Config) -> Result<Self> {
        let corpus = match &config.corpus.data_path {
            Some(path) => Self::load(path)?,
            None => Self::bundled()?,
        };
        Ok(corpus
            .with_aliases(&config.aliases)
            .with_sampling(config.random.sampling))
    }

    fn from_books(books: IndexMap<String, BookEntry>) -> Self {
        let aliases = AliasIndex::build(&books);
        let verse_count = books.values().map(BookEntry::verse_count).sum();
        Self {
            books,
            aliases,
            sampling: Sampling::default(),
            verse_count,
        }
    }

    /// Overlay extra aliases. Entries naming an unknown book are skipped.
    pub fn with_aliases(mut self, extra: &[AliasConfig]) -> Self {
        for entry in extra {
            if !self.books.contains_key(&entry.book) {
                tracing::warn!(book = %entry.book, "skipping aliases for unknown book");
                continue;
            }
            for name in &entry.names {
                self.aliases.insert(name, &entry.book);
            }
        }
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn verse_count(&self) -> usize {
        self.verse_count
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Resolve a bare book name (key, long name, or alias) to its key.
    pub fn resolve_book(&self, name: &str) -> Option<&str> {
        self.aliases.resolve(name)
    }

    pub fn book(&self, key: &str) -> Option<&BookEntry> {
        self.books.get(key)
    }

    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Parse a citation such as `"Буття 1:1-3"`.
    pub fn parse_reference(&self, input: &str) -> Option<Reference> {
        Reference::parse(input, &self.aliases)
    }

    /// Look up the verses a citation names, in ascending verse order.
    ///
    /// Unparseable citations, unknown books, and missing chapters all yield
    /// an empty vec. Verse numbers absent from the chapter are skipped.
    pub fn get(&self, reference: &str) -> Vec<Verse> {
        let Some(parsed) = self.parse_reference(reference) else {
            tracing::debug!(reference, "citation did not resolve");
            return Vec::new();
        };
        self.lookup(&parsed)
    }

    /// Look up an already parsed [`Reference`].
    pub fn lookup(&self, reference: &Reference) -> Vec<Verse> {
        let Some(book) = self.books.get(&reference.book) else {
            return Vec::new();
        };
        let Some(verses) = book.chapters.get(&reference.chapter) else {
            return Vec::new();
        };

        // Cost is bounded by the chapter's size, not by the numbers typed.
        let range = reference.verse_start..=reference.verse_end;
        let mut found: Vec<(u32, &str)> = verses
            .iter()
            .filter(|(number, _)| range.contains(*number))
            .map(|(&number, text)| (number, text.as_str()))
            .collect();
        found.sort_unstable_by_key(|(number, _)| *number);
        found
            .into_iter()
            .map(|(number, text)| book.verse(reference.chapter, number, text))
            .collect()
    }

    /// Every verse whose text contains `query`, ignoring letter case, in
    /// data-file order. An empty query matches every verse.
    pub fn search(&self, query: &str) -> Vec<Verse> {
        let needle = query.to_lowercase();
        self.iter_verses()
            .filter(|(_, _, _, text)| text.to_lowercase().contains(&needle))
            .map(|(book, chapter, verse, text)| book.verse(chapter, verse, text))
            .collect()
    }

    /// A random verse, using the corpus's [`Sampling`] mode and the thread RNG.
    pub fn random_verse(&self) -> Verse {
        self.random_verse_with(&mut rand::thread_rng(), self.sampling)
    }

    /// A random verse drawn from `rng` with an explicit sampling mode.
    pub fn random_verse_with<R: Rng + ?Sized>(&self, rng: &mut R, sampling: Sampling) -> Verse {
        let (book, chapter, verse, text) = match sampling {
            Sampling::Stratified => self.pick_stratified(rng),
            Sampling::Uniform => self.pick_uniform(rng),
        };
        book.verse(chapter, verse, text)
    }

    /// One entry per book, sorted by book number.
    pub fn list_books(&self) -> Vec<BookSummary> {
        let mut books: Vec<BookSummary> = self
            .books
            .values()
            .map(|book| BookSummary::from(&book.ids))
            .collect();
        books.sort_by_key(|book| book.id);
        books
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn iter_verses(&self) -> impl Iterator<Item = (&BookEntry, u32, u32, &str)> + '_ {
        self.books.values().flat_map(|book| {
            book.chapters.iter().flat_map(move |(&chapter, verses)| {
                verses
                    .iter()
                    .map(move |(&verse, text)| (book, chapter, verse, text.as_str()))
            })
        })
    }

    // Load-time validation guarantees no book, chapter, or corpus is empty.
    fn pick_stratified<R: Rng + ?Sized>(&self, rng: &mut R) -> (&BookEntry, u32, u32, &str) {
        let book = self
            .books
            .values()
            .choose(rng)
            .expect("validated corpus has books");
        let (&chapter, verses) = book
            .chapters
            .iter()
            .choose(rng)
            .expect("validated book has chapters");
        let (&verse, text) = verses
            .iter()
            .choose(rng)
            .expect("validated chapter has verses");
        (book, chapter, verse, text.as_str())
    }

    fn pick_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> (&BookEntry, u32, u32, &str) {
        let mut target = rng.gen_range(0..self.verse_count);
        for book in self.books.values() {
            for (&chapter, verses) in &book.chapters {
                if let Some((&verse, text)) = verses.get_index(target) {
                    return (book, chapter, verse, text.as_str());
                }
                target -= verses.len();
            }
        }
        unreachable!("verse index is below the verse count")
    }
}
