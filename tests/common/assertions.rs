//! Domain-specific assertion macros for ukr-bible harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* lookup invariant was violated.

use ukr_bible::{Corpus, Verse};

// ---------------------------------------------------------------------------
// Verse assertions
// ---------------------------------------------------------------------------

/// Assert that a `Verse` sits at the expected book / chapter / verse.
///
/// ```rust
/// assert_verse_at!(verse, "1М", 1, 1);
/// ```
#[macro_export]
macro_rules! assert_verse_at {
    ($verse:expr, $book:expr, $chapter:expr, $number:expr) => {{
        let verse: &ukr_bible::Verse = &$verse;
        let expected = ($book.to_string(), $chapter as u32, $number as u32);
        let actual = (verse.book_short.clone(), verse.chapter, verse.verse);
        if actual != expected {
            panic!(
                "assert_verse_at! failed:\n  expected: {:?}\n  actual:   {:?}\n  text: {:?}",
                expected, actual, verse.text
            );
        }
    }};
}

/// Assert that a result set has exactly the given citations, in order.
/// Citations use the long book name, as [`Verse::citation`] formats them.
///
/// ```rust
/// assert_citations!(verses, ["Буття 1:1", "Буття 1:2"]);
/// ```
#[macro_export]
macro_rules! assert_citations {
    ($verses:expr, [$($citation:expr),* $(,)?]) => {{
        let verses: &[ukr_bible::Verse] = &$verses;
        let actual: Vec<String> = verses.iter().map(ukr_bible::Verse::citation).collect();
        let expected: Vec<String> = vec![$($citation.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "citations differ");
    }};
}

// ---------------------------------------------------------------------------
// Result set assertions
// ---------------------------------------------------------------------------

/// Assert that every verse in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |v| v.text.contains("Бог"));
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[ukr_bible::Verse] = &$results;
        let pred = $pred;
        let failing: Vec<_> = results.iter().filter(|v| !pred(v)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} verses did not satisfy predicate.\n  first: {}",
                failing.len(),
                results.len(),
                failing[0]
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Corpus membership
// ---------------------------------------------------------------------------

/// Assert that `verse` is stored in `corpus` with exactly this text.
pub fn assert_in_corpus(corpus: &Corpus, verse: &Verse) {
    let citation = format!("{} {}:{}", verse.book_short, verse.chapter, verse.verse);
    let found = corpus.get(&citation);
    assert_eq!(
        found.as_slice(),
        std::slice::from_ref(verse),
        "verse {citation} is not in the corpus as returned"
    );
}
