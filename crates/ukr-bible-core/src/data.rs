//! Data file loading — JSON bytes into validated [`BookEntry`] values.
//!
//! The file is first deserialized into a raw shape that mirrors the JSON
//! exactly (string chapter and verse keys), then converted book by book.
//! Chapter and verse numbers become `u32` here and nowhere else.

use crate::error::{CorpusError, Result};
use crate::types::{BookEntry, BookIds, Chapters};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Location of the sample data file shipped with this crate.
pub const BUNDLED_DATA_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/ukr_bible_data.json");

/// Label used in errors when the JSON did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

// ---------------------------------------------------------------------------
// Raw file shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawBook {
    ids: BookIds,
    text: IndexMap<String, IndexMap<String, String>>,
}

type RawCorpus = IndexMap<String, RawBook>;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Read and validate the data file at `path`.
pub fn load_file(path: &Path) -> Result<IndexMap<String, BookEntry>> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::DataNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CorpusError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let raw: RawCorpus = serde_json::from_slice(&bytes).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    validate(raw, path)
}

/// Validate JSON that is already in memory.
pub fn load_str(json: &str) -> Result<IndexMap<String, BookEntry>> {
    let path = PathBuf::from(INLINE_SOURCE);
    let raw: RawCorpus = serde_json::from_str(json).map_err(|source| CorpusError::Json {
        path: path.clone(),
        source,
    })?;
    validate(raw, &path)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(raw: RawCorpus, path: &Path) -> Result<IndexMap<String, BookEntry>> {
    if raw.is_empty() {
        return Err(CorpusError::corrupt(path, "no books"));
    }

    raw.into_iter()
        .map(|(key, book)| {
            let entry = convert_book(&key, book, path)?;
            Ok((key, entry))
        })
        .collect()
}

fn convert_book(key: &str, raw: RawBook, path: &Path) -> Result<BookEntry> {
    if raw.text.is_empty() {
        return Err(CorpusError::corrupt(
            path,
            format!("book {key:?} has no chapters"),
        ));
    }

    let mut chapters = Chapters::with_capacity(raw.text.len());
    for (chapter_key, verses) in raw.text {
        let chapter = parse_number(&chapter_key).ok_or_else(|| {
            CorpusError::corrupt(
                path,
                format!("book {key:?}: chapter key {chapter_key:?} is not a number"),
            )
        })?;
        if verses.is_empty() {
            return Err(CorpusError::corrupt(
                path,
                format!("book {key:?}: chapter {chapter} has no verses"),
            ));
        }

        let mut converted = IndexMap::with_capacity(verses.len());
        for (verse_key, text) in verses {
            let verse = parse_number(&verse_key).ok_or_else(|| {
                CorpusError::corrupt(
                    path,
                    format!("book {key:?}: chapter {chapter}: verse key {verse_key:?} is not a number"),
                )
            })?;
            if converted.insert(verse, text).is_some() {
                return Err(CorpusError::corrupt(
                    path,
                    format!("book {key:?}: chapter {chapter}: verse {verse} appears twice (key {verse_key:?})"),
                ));
            }
        }
        if chapters.insert(chapter, converted).is_some() {
            return Err(CorpusError::corrupt(
                path,
                format!("book {key:?}: chapter {chapter} appears twice (key {chapter_key:?})"),
            ));
        }
    }

    Ok(BookEntry {
        ids: raw.ids,
        chapters,
    })
}

/// Strict decimal parse: digits only, no sign, no surrounding whitespace.
/// Leading zeros are allowed, so `"01"` and `"1"` collide in
/// [`convert_book`].
fn parse_number(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
