//! Mochi Width
//!
//! Terminal column widths of Unicode text, the way a terminal lays it out.
//! This crate provides:
//!
//! - `table`, `tables`: sorted codepoint range tables and their binary search
//! - `dataset`, `version`: per Unicode version table sets and version resolution
//! - `classify`, `scan`, `grapheme`: `wcwidth`, `wcswidth` and grapheme clusters
//! - `sequences`, `sgr`: terminal escape sequences and SGR styling state
//! - `text`, `wrap`: control-aware width, justification, clipping and wrapping
//! - `config`: version selection and measurement settings
//!
//! The free functions below use the builtin datasets. Pass `None` as the
//! version for the latest one.

pub mod classify;
pub mod config;
pub mod dataset;
pub mod error;
pub mod grapheme;
mod scan;
pub mod sequences;
pub mod sgr;
pub mod table;
mod tables;
pub mod text;
pub mod version;
pub mod wrap;

pub use config::Config;
pub use dataset::{list_versions, DatasetCollection, VersionDataset};
pub use error::{ConfigError, DatasetError, TextError, WidthError};
pub use grapheme::{Grapheme, Graphemes, GraphemesRev};
pub use sequences::{iter_sequences, strip_sequences, Segment, Sequence};
pub use sgr::{propagate_sgr, SgrState};
pub use table::{bisearch, CategoryTable, Range};
pub use text::{ClipOptions, ControlCodes, TextMeasure};
pub use version::{Resolution, UnicodeVersion};
pub use wrap::TextWrapper;

fn dataset(version: Option<&str>) -> Result<&'static VersionDataset, WidthError> {
    DatasetCollection::builtin().resolve(version)
}

/// Cells for one codepoint: -1 for controls, 0, 1 or 2
pub fn wcwidth(codepoint: u32, version: Option<&str>) -> Result<i8, WidthError> {
    dataset(version)?.wcwidth(codepoint)
}

/// Cells for a string, or -1 if it contains a control character
pub fn wcswidth(
    text: &str,
    limit: Option<usize>,
    version: Option<&str>,
) -> Result<isize, WidthError> {
    Ok(dataset(version)?.wcswidth(text, limit))
}

/// Like [`wcswidth`] over raw codepoint values
pub fn wcswidth_codepoints(
    codepoints: &[u32],
    limit: Option<usize>,
    version: Option<&str>,
) -> Result<isize, WidthError> {
    dataset(version)?.wcswidth_codepoints(codepoints, limit)
}

/// Grapheme clusters of `text` with their widths, left to right
pub fn iter_graphemes<'a>(
    text: &'a str,
    version: Option<&str>,
) -> Result<Graphemes<'a>, WidthError> {
    Ok(dataset(version)?.graphemes(text))
}

/// Grapheme clusters of `text` with their widths, right to left
pub fn iter_graphemes_reverse<'a>(
    text: &'a str,
    version: Option<&str>,
) -> Result<GraphemesRev<'a>, WidthError> {
    Ok(dataset(version)?.graphemes_rev(text))
}

/// Byte offset of the cluster boundary at or before `pos`
pub fn grapheme_boundary_before(
    text: &str,
    pos: usize,
    version: Option<&str>,
) -> Result<usize, WidthError> {
    Ok(dataset(version)?.grapheme_boundary_before(text, pos))
}

fn measure() -> TextMeasure<'static> {
    TextMeasure::new(DatasetCollection::builtin().latest())
}

/// Printable width of `text`, following tabs, backspace and cursor movement
pub fn width(text: &str) -> Result<usize, TextError> {
    measure().width(text)
}

pub fn ljust(text: &str, width: usize, fillchar: &str) -> Result<String, TextError> {
    measure().ljust(text, width, fillchar)
}

pub fn rjust(text: &str, width: usize, fillchar: &str) -> Result<String, TextError> {
    measure().rjust(text, width, fillchar)
}

pub fn center(text: &str, width: usize, fillchar: &str) -> Result<String, TextError> {
    measure().center(text, width, fillchar)
}

/// Cells `[start, end)` of `text`, see [`TextMeasure::clip`]
pub fn clip(text: &str, start: usize, end: usize) -> String {
    measure().clip(text, start, end, &ClipOptions::default())
}

/// Wrap `text` to `width` cells, see [`TextWrapper`]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    TextWrapper::new(DatasetCollection::builtin().latest(), width).wrap(text)
}

pub fn fill(text: &str, width: usize) -> String {
    TextWrapper::new(DatasetCollection::builtin().latest(), width).fill(text)
}
