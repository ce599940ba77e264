//! Render — verse records and book listings as plain text or JSON.
//!
//! Text output is one record per line. JSON output is pretty-printed with
//! the same field names the data model serializes with.

use crate::config::OutputFormat;
use crate::{BookSummary, Verse};
use std::io::Write;

/// Write `verses`, one per line in text mode or as a JSON array.
pub fn verses<W: Write>(out: &mut W, verses: &[Verse], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for verse in verses {
                writeln!(out, "{verse}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, verses)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write a single verse, as one line or as a JSON object.
pub fn verse<W: Write>(out: &mut W, verse: &Verse, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{verse}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, verse)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the book listing as `id<TAB>short<TAB>long` rows or a JSON array.
pub fn books<W: Write>(out: &mut W, books: &[BookSummary], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for book in books {
                writeln!(out, "{}\t{}\t{}", book.id, book.short, book.long)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, books)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
