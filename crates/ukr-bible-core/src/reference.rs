//! Citation parsing — `"<book> <chapter>:<verse>[-<verse_end>]"` into a [`Reference`].
//!
//! The numeric tail is matched from the right; everything before it is the
//! book name, which may itself contain spaces, digits, and punctuation
//! (`"Перша книга Мойсеєва: Буття 1:1"`, `"1 м 1:1"`).

use crate::aliases::AliasIndex;
use regex::Regex;
use std::sync::LazyLock;

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+([0-9]+):([0-9]+)(?:-([0-9]+))?$")
        .expect("citation pattern must compile")
});

/// A parsed citation with its book resolved to a canonical key.
///
/// `verse_end >= verse_start` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub book: String,
    pub chapter: u32,
    pub verse_start: u32,
    pub verse_end: u32,
}

impl Reference {
    /// Parse `input`, resolving the book name through `aliases`.
    ///
    /// Returns `None` when the trailing `chapter:verse` pattern is missing,
    /// the book name is unknown, a number does not fit in `u32`, or the range
    /// runs backwards.
    pub fn parse(input: &str, aliases: &AliasIndex) -> Option<Self> {
        let caps = CITATION_RE.captures(input.trim())?;

        let book = aliases.resolve(&caps[1])?.to_string();
        let chapter = caps[2].parse().ok()?;
        let verse_start: u32 = caps[3].parse().ok()?;
        let verse_end = match caps.get(4) {
            Some(end) => end.as_str().parse().ok()?,
            None => verse_start,
        };
        if verse_end < verse_start {
            return None;
        }

        Some(Self {
            book,
            chapter,
            verse_start,
            verse_end,
        })
    }

    /// Number of verse slots the citation spans, present in the data or not.
    pub fn span(&self) -> u64 {
        u64::from(self.verse_end) - u64::from(self.verse_start) + 1
    }

    pub fn is_range(&self) -> bool {
        self.verse_end != self.verse_start
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse_start)?;
        if self.is_range() {
            write!(f, "-{}", self.verse_end)?;
        }
        Ok(())
    }
}
