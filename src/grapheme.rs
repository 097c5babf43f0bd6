//! Grapheme cluster iteration
//!
//! Clusters come from the same [`ScanState`] rules as `wcswidth`, so the
//! widths of a string's clusters always sum to its `wcswidth`. Offsets are
//! byte offsets into the scanned string.

use std::iter::FusedIterator;
use std::str::CharIndices;

use serde::Serialize;

use crate::dataset::VersionDataset;
use crate::scan::ScanState;

/// One grapheme cluster and the cells it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grapheme<'a> {
    pub text: &'a str,
    /// Byte offset of the cluster in the scanned string
    pub start: usize,
    /// Cells, or -1 for a control character cluster
    pub width: isize,
}

impl Grapheme<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// The cluster is a control character whose width cannot be known
    pub fn is_indeterminate(&self) -> bool {
        self.width < 0
    }
}

/// Forward cluster iterator, see [`VersionDataset::graphemes`]
#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    dataset: &'a VersionDataset,
    text: &'a str,
    chars: CharIndices<'a>,
    state: ScanState,
    // Cluster being built
    start: usize,
    width: isize,
    control: bool,
    open: bool,
}

impl<'a> Graphemes<'a> {
    fn new(dataset: &'a VersionDataset, text: &'a str) -> Self {
        Self {
            dataset,
            text,
            chars: text.char_indices(),
            state: ScanState::default(),
            start: 0,
            width: 0,
            control: false,
            open: false,
        }
    }

    fn cluster_width(&self) -> isize {
        if self.control {
            -1
        } else {
            self.width
        }
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = Grapheme<'a>;

    fn next(&mut self) -> Option<Grapheme<'a>> {
        for (offset, c) in self.chars.by_ref() {
            let width = self.dataset.char_width(c);
            let step = self.state.step(self.dataset, c as u32, width);

            if !self.open {
                self.open = true;
                self.start = offset;
                self.width = step.advance;
                self.control = step.control;
                continue;
            }

            if step.boundary {
                self.width += step.settle;
                let done = Grapheme {
                    text: &self.text[self.start..offset],
                    start: self.start,
                    width: if self.control { -1 } else { self.width },
                };
                self.start = offset;
                self.width = step.advance;
                self.control = step.control;
                return Some(done);
            }

            self.width += step.settle + step.advance;
            self.control |= step.control;
        }

        if !self.open {
            return None;
        }
        self.open = false;
        self.width += self.state.finish();
        Some(Grapheme {
            text: &self.text[self.start..],
            start: self.start,
            width: self.cluster_width(),
        })
    }
}

impl FusedIterator for Graphemes<'_> {}

/// Reverse cluster iterator, see [`VersionDataset::graphemes_rev`].
///
/// Boundaries depend on context to the left, so the first pull scans the
/// string forward once and later pulls pop from that buffer.
#[derive(Debug, Clone)]
pub struct GraphemesRev<'a> {
    forward: Option<Graphemes<'a>>,
    buffer: Vec<Grapheme<'a>>,
}

impl<'a> Iterator for GraphemesRev<'a> {
    type Item = Grapheme<'a>;

    fn next(&mut self) -> Option<Grapheme<'a>> {
        if let Some(forward) = self.forward.take() {
            self.buffer = forward.collect();
        }
        self.buffer.pop()
    }
}

impl FusedIterator for GraphemesRev<'_> {}

impl VersionDataset {
    /// Grapheme clusters of `text`, left to right
    pub fn graphemes<'a>(&'a self, text: &'a str) -> Graphemes<'a> {
        Graphemes::new(self, text)
    }

    /// Grapheme clusters of `text`, right to left
    pub fn graphemes_rev<'a>(&'a self, text: &'a str) -> GraphemesRev<'a> {
        GraphemesRev {
            forward: Some(Graphemes::new(self, text)),
            buffer: Vec::new(),
        }
    }

    /// Start of the cluster containing byte offset `pos`.
    ///
    /// Positions at or past the end map to the start of the last cluster;
    /// an empty string yields 0.
    pub fn grapheme_boundary_before(&self, text: &str, pos: usize) -> usize {
        let mut boundary = 0;
        for grapheme in self.graphemes(text) {
            if grapheme.start > pos {
                break;
            }
            boundary = grapheme.start;
        }
        boundary
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::{DatasetCollection, VersionDataset};

    fn latest() -> &'static VersionDataset {
        DatasetCollection::builtin().latest()
    }

    fn clusters(text: &str) -> Vec<(&str, isize)> {
        latest().graphemes(text).map(|g| (g.text, g.width)).collect()
    }

    #[test]
    fn test_simple_clusters() {
        assert_eq!(clusters(""), vec![]);
        assert_eq!(clusters("ab"), vec![("a", 1), ("b", 1)]);
        assert_eq!(clusters("A\u{301}b"), vec![("A\u{301}", 1), ("b", 1)]);
        assert_eq!(clusters("中x"), vec![("中", 2), ("x", 1)]);
    }

    #[test]
    fn test_flags_pair_up() {
        assert_eq!(
            clusters("\u{1F1FA}\u{1F1F8}\u{1F1EC}\u{1F1E7}\u{1F1EB}"),
            vec![
                ("\u{1F1FA}\u{1F1F8}", 2),
                ("\u{1F1EC}\u{1F1E7}", 2),
                ("\u{1F1EB}", 2)
            ]
        );
    }

    #[test]
    fn test_emoji_sequences() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(clusters(family), vec![(family, 2)]);
        assert_eq!(clusters("\u{1F44D}\u{1F3FB}!"), vec![("\u{1F44D}\u{1F3FB}", 2), ("!", 1)]);
        assert_eq!(clusters("\u{2764}\u{FE0F}"), vec![("\u{2764}\u{FE0F}", 2)]);
    }

    #[test]
    fn test_zwj_without_emoji() {
        assert_eq!(clusters("a\u{200D}b"), vec![("a\u{200D}", 1), ("b", 1)]);
        assert_eq!(clusters("\u{200D}a"), vec![("\u{200D}", 0), ("a", 1)]);
    }

    #[test]
    fn test_conjunct_cluster() {
        assert_eq!(
            clusters("\u{915}\u{94D}\u{937}\u{93E}\u{915}"),
            vec![("\u{915}\u{94D}\u{937}\u{93E}", 2), ("\u{915}", 1)]
        );
        assert_eq!(
            clusters("\u{915}\u{94D}\u{937}x"),
            vec![("\u{915}\u{94D}\u{937}", 2), ("x", 1)]
        );
        assert_eq!(
            clusters("\u{915}\u{94D}\u{937}\u{93C}\u{93E}"),
            vec![("\u{915}\u{94D}\u{937}\u{93C}\u{93E}", 2)]
        );
    }

    #[test]
    fn test_tag_flag_cluster() {
        let scotland = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
        let text = format!("{scotland}x");
        assert_eq!(clusters(&text), vec![(scotland, 2), ("x", 1)]);
        let reverse: Vec<&str> = latest().graphemes_rev(&text).map(|g| g.text).collect();
        assert_eq!(reverse, vec!["x", scotland]);
    }

    #[test]
    fn test_controls_are_indeterminate() {
        assert_eq!(
            clusters("a\r\nb\tc"),
            vec![("a", 1), ("\r\n", -1), ("b", 1), ("\t", -1), ("c", 1)]
        );
        assert_eq!(clusters("\n\u{301}"), vec![("\n", -1), ("\u{301}", 0)]);
        assert_eq!(clusters("\r\r"), vec![("\r", -1), ("\r", -1)]);
        assert!(latest().graphemes("\x07").next().unwrap().is_indeterminate());
    }

    #[test]
    fn test_offsets() {
        let text = "a中\u{1F1FA}\u{1F1F8}b";
        let starts: Vec<usize> = latest().graphemes(text).map(|g| g.start).collect();
        assert_eq!(starts, vec![0, 1, 4, 12]);
        let last = latest().graphemes(text).last().unwrap();
        assert_eq!(last.end(), text.len());
    }

    #[test]
    fn test_reverse_matches_forward() {
        let text = "x\u{1F1FA}\u{1F1F8}\u{915}\u{94D}\u{937}\u{93E}e\u{301}\r\n中";
        let mut forward: Vec<_> = latest().graphemes(text).collect();
        forward.reverse();
        let reverse: Vec<_> = latest().graphemes_rev(text).collect();
        assert_eq!(forward, reverse);
        assert_eq!(latest().graphemes_rev("").next(), None);
    }

    #[test]
    fn test_boundary_before() {
        let ds = latest();
        let text = "a\u{301}中\u{1F1FA}\u{1F1F8}";
        assert_eq!(ds.grapheme_boundary_before(text, 0), 0);
        assert_eq!(ds.grapheme_boundary_before(text, 1), 0);
        assert_eq!(ds.grapheme_boundary_before(text, 3), 3);
        assert_eq!(ds.grapheme_boundary_before(text, 5), 3);
        assert_eq!(ds.grapheme_boundary_before(text, 10), 6);
        assert_eq!(ds.grapheme_boundary_before(text, text.len()), 6);
        assert_eq!(ds.grapheme_boundary_before(text, 1000), 6);
        assert_eq!(ds.grapheme_boundary_before("", 5), 0);
    }
}
