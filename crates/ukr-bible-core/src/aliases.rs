//! Book alias index — case-folded names to canonical book keys.
//!
//! Registration order, later entries overwriting earlier ones:
//!
//! 1. every book key and its long name, in data-file order;
//! 2. the hand-curated [`BOOK_ALIASES`] table;
//! 3. aliases supplied through configuration.
//!
//! Aliases for books missing from the loaded data are skipped.

use crate::types::BookEntry;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Hand-curated short forms, spelling variants, and numeral variants.
pub static BOOK_ALIASES: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "1М" => &[
        "1м",
        "бут",
        "буття",
        "перша книга мойсеєва: буття",
        "перша книга мойсеєва",
        "книга буття",
        "1 м",
        "1 мойсеева",
        "1-a мойсеєва",
    ],
    "2М" => &[
        "2м",
        "вих",
        "вихід",
        "книга вихід",
        "друга книга мойсеева: вихід",
        "2 м",
        "2 мойсеева",
        "2-а мойсеєва",
    ],
};

/// Case-insensitive lookup from any known name to a canonical book key.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    map: HashMap<String, String>,
}

impl AliasIndex {
    /// Register every book key and long name, then overlay [`BOOK_ALIASES`].
    pub fn build(books: &IndexMap<String, BookEntry>) -> Self {
        let mut index = Self {
            map: HashMap::with_capacity(books.len() * 2),
        };

        for (key, book) in books {
            index.insert(key, key);
            index.insert(&book.ids.long_name, key);
        }

        // phf iteration order is unspecified; sort so overlapping aliases
        // resolve the same way on every run.
        let mut curated: Vec<_> = BOOK_ALIASES.entries().collect();
        curated.sort_by_key(|(key, _)| **key);
        for (key, aliases) in curated {
            if books.contains_key(*key) {
                for alias in aliases.iter() {
                    index.insert(alias, key);
                }
            }
        }

        index
    }

    /// Register `alias` for `key`. Callers must check `key` exists.
    pub fn insert(&mut self, alias: &str, key: &str) {
        self.map.insert(fold(alias), key.to_string());
    }

    /// Resolve a user-typed book name. Surrounding whitespace and letter
    /// case are ignored.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.map.get(&fold(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All aliases that resolve to `key`, sorted.
    pub fn aliases_for(&self, key: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .map
            .iter()
            .filter(|(_, target)| target.as_str() == key)
            .map(|(alias, _)| alias.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
