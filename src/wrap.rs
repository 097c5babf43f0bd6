//! Line wrapping by terminal cells
//!
//! Follows the chunking rules of Python's `textwrap`: whitespace runs and
//! words are chunks, hyphenated words split after their hyphens, and a chunk
//! longer than a line is broken. Widths are cells rather than characters,
//! long words break between grapheme clusters, and escape sequences ride
//! along with the text around them without taking up space.

use std::ops::Range;

use crate::dataset::VersionDataset;
use crate::sequences::{iter_sequences, Segment};
use crate::sgr::propagate_sgr;
use crate::text::{ControlCodes, TextMeasure};

/// One visible character of the normalized text
#[derive(Debug)]
struct Unit {
    ch: char,
    /// Original text: the character plus sequences and controls glued to it
    text: String,
    sequences: String,
}

/// One grapheme cluster of a chunk
#[derive(Debug)]
struct Piece {
    text: String,
    sequences: String,
    width: usize,
    hyphen: bool,
}

#[derive(Debug)]
struct Chunk {
    pieces: Vec<Piece>,
    width: usize,
    space: bool,
}

impl Chunk {
    fn new(pieces: Vec<Piece>, space: bool) -> Self {
        let width = pieces.iter().map(|p| p.width).sum();
        Self {
            pieces,
            width,
            space,
        }
    }

    fn sequences(&self) -> String {
        self.pieces.iter().map(|p| p.sequences.as_str()).collect()
    }

    /// Split off the first `count` pieces
    fn take_front(&mut self, count: usize) -> Chunk {
        let rest = self.pieces.split_off(count);
        let head = std::mem::replace(&mut self.pieces, rest);
        self.width = self.pieces.iter().map(|p| p.width).sum();
        Chunk::new(head, self.space)
    }
}

/// Wraps text to a width in terminal cells
#[derive(Debug, Clone)]
pub struct TextWrapper<'d> {
    dataset: &'d VersionDataset,
    pub width: usize,
    pub initial_indent: String,
    pub subsequent_indent: String,
    /// Break words longer than a line; otherwise they overflow
    pub break_long_words: bool,
    pub break_on_hyphens: bool,
    /// Drop whitespace at the start and end of each line
    pub drop_whitespace: bool,
    pub tabstop: usize,
    /// How indents are measured
    pub control_codes: ControlCodes,
    /// Make every output line carry its own SGR styling
    pub propagate_sgr: bool,
}

impl<'d> TextWrapper<'d> {
    pub fn new(dataset: &'d VersionDataset, width: usize) -> Self {
        Self {
            dataset,
            width,
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            break_long_words: true,
            break_on_hyphens: true,
            drop_whitespace: true,
            tabstop: 8,
            control_codes: ControlCodes::Parse,
            propagate_sgr: true,
        }
    }

    pub fn initial_indent(mut self, indent: &str) -> Self {
        self.initial_indent = indent.to_string();
        self
    }

    pub fn subsequent_indent(mut self, indent: &str) -> Self {
        self.subsequent_indent = indent.to_string();
        self
    }

    pub fn break_long_words(mut self, enabled: bool) -> Self {
        self.break_long_words = enabled;
        self
    }

    pub fn break_on_hyphens(mut self, enabled: bool) -> Self {
        self.break_on_hyphens = enabled;
        self
    }

    pub fn drop_whitespace(mut self, enabled: bool) -> Self {
        self.drop_whitespace = enabled;
        self
    }

    pub fn tabstop(mut self, tabstop: usize) -> Self {
        self.tabstop = tabstop;
        self
    }

    pub fn control_codes(mut self, control_codes: ControlCodes) -> Self {
        self.control_codes = control_codes;
        self
    }

    pub fn propagate_sgr(mut self, enabled: bool) -> Self {
        self.propagate_sgr = enabled;
        self
    }

    /// Wrap `text` into lines of at most `width` cells.
    ///
    /// Only a single grapheme cluster wider than the line, or an unbroken
    /// long word, may exceed it. Whitespace-only text yields no lines.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let units = self.units(text);
        if units.is_empty() {
            return Vec::new();
        }
        let chars: Vec<char> = units.iter().map(|u| u.ch).collect();
        let mut chunks: Vec<Chunk> = split_chunks(&chars, self.break_on_hyphens)
            .into_iter()
            .map(|range| self.chunk(&units, range))
            .collect();
        chunks.reverse();

        let lines = self.wrap_chunks(chunks);
        if self.propagate_sgr {
            propagate_sgr(&lines)
        } else {
            lines
        }
    }

    /// [`wrap`](Self::wrap) joined with newlines
    pub fn fill(&self, text: &str) -> String {
        self.wrap(text).join("\n")
    }

    fn indent_width(&self, indent: &str) -> usize {
        TextMeasure::new(self.dataset)
            .control_codes(self.control_codes)
            .tabstop(self.tabstop)
            .width(indent)
            .unwrap_or_else(|err| {
                tracing::debug!("Measuring indent {:?} failed: {}", indent, err);
                TextMeasure::new(self.dataset)
                    .control_codes(ControlCodes::Ignore)
                    .width(indent)
                    .unwrap_or(0)
            })
    }

    /// Expand tabs, turn whitespace into spaces and glue every sequence and
    /// zero-width control onto a neighbouring visible character.
    fn units(&self, text: &str) -> Vec<Unit> {
        let mut units: Vec<Unit> = Vec::new();
        // Sequences seen before the first visible character
        let mut leading = String::new();
        let mut col = 0usize;

        for segment in iter_sequences(text) {
            let run = match segment {
                Segment::Sequence(seq) => {
                    attach(&mut units, &mut leading, seq.text);
                    continue;
                },
                Segment::Text(run) => run,
            };
            for c in run.chars() {
                let (ch, count) = match c {
                    '\t' if self.tabstop > 0 => (' ', self.tabstop - col % self.tabstop),
                    '\t' => continue,
                    ' ' | '\n' | '\x0b' | '\x0c' | '\r' => (' ', 1),
                    c if self.dataset.char_width(c) < 0 => {
                        let mut buf = [0u8; 4];
                        attach(&mut units, &mut leading, c.encode_utf8(&mut buf));
                        continue;
                    },
                    c => (c, 1),
                };
                col = match c {
                    '\n' | '\r' => 0,
                    '\t' | ' ' | '\x0b' | '\x0c' => col + count,
                    c => col + self.dataset.char_width(c).max(0) as usize,
                };
                for _ in 0..count {
                    let sequences = if units.is_empty() {
                        std::mem::take(&mut leading)
                    } else {
                        String::new()
                    };
                    let mut text = sequences.clone();
                    text.push(ch);
                    units.push(Unit {
                        ch,
                        text,
                        sequences,
                    });
                }
            }
        }
        units
    }

    fn chunk(&self, units: &[Unit], range: Range<usize>) -> Chunk {
        let units = &units[range];
        let visible: String = units.iter().map(|u| u.ch).collect();
        let mut pieces = Vec::new();
        let mut next = 0;
        for grapheme in self.dataset.graphemes(&visible) {
            let count = grapheme.text.chars().count();
            let members = &units[next..next + count];
            next += count;
            pieces.push(Piece {
                text: members.iter().map(|u| u.text.as_str()).collect(),
                sequences: members.iter().map(|u| u.sequences.as_str()).collect(),
                width: grapheme.width.max(0) as usize,
                hyphen: grapheme.text == "-",
            });
        }
        let space = units.first().is_some_and(|u| u.ch == ' ');
        Chunk::new(pieces, space)
    }

    /// `chunks` is reversed so the next chunk is at the end
    fn wrap_chunks(&self, mut chunks: Vec<Chunk>) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        while !chunks.is_empty() {
            let indent = if lines.is_empty() {
                &self.initial_indent
            } else {
                &self.subsequent_indent
            };
            let width = self.width.saturating_sub(self.indent_width(indent));

            // Sequences of dropped whitespace are kept
            let mut head = String::new();
            let mut tail = String::new();

            if self.drop_whitespace && !lines.is_empty() && chunks.last().is_some_and(|c| c.space) {
                if let Some(dropped) = chunks.pop() {
                    head = dropped.sequences();
                }
            }

            let mut line: Vec<Chunk> = Vec::new();
            let mut used = 0;
            while let Some(chunk) = chunks.last() {
                if used + chunk.width > width {
                    break;
                }
                used += chunk.width;
                if let Some(chunk) = chunks.pop() {
                    line.push(chunk);
                }
            }

            if chunks.last().is_some_and(|c| c.width > width) {
                self.handle_long_word(&mut chunks, &mut line, used, width);
            }

            if self.drop_whitespace && line.last().is_some_and(|c| c.space) {
                if let Some(dropped) = line.pop() {
                    tail = dropped.sequences();
                }
            }

            if line.is_empty() {
                if let Some(last) = lines.last_mut() {
                    last.push_str(&head);
                    last.push_str(&tail);
                }
                continue;
            }

            let mut output = indent.clone();
            output.push_str(&head);
            for chunk in &line {
                for piece in &chunk.pieces {
                    output.push_str(&piece.text);
                }
            }
            output.push_str(&tail);
            lines.push(output);
        }

        lines
    }

    fn handle_long_word(
        &self,
        chunks: &mut Vec<Chunk>,
        line: &mut Vec<Chunk>,
        used: usize,
        width: usize,
    ) {
        let space_left = if width == 0 { 1 } else { width - used };

        if !self.break_long_words {
            if line.is_empty() {
                if let Some(chunk) = chunks.pop() {
                    line.push(chunk);
                }
            }
            return;
        }

        let Some(chunk) = chunks.last_mut() else {
            return;
        };

        let mut end = 0;
        let mut col = 0;
        let mut after_hyphen = None;
        let mut seen_text = false;
        for (i, piece) in chunk.pieces.iter().enumerate() {
            if col + piece.width > space_left {
                break;
            }
            col += piece.width;
            end = i + 1;
            if piece.hyphen && i > 0 && seen_text {
                after_hyphen = Some(i + 1);
            }
            seen_text |= !piece.hyphen;
        }
        if self.break_on_hyphens {
            if let Some(cut) = after_hyphen {
                if end < chunk.pieces.len() {
                    end = cut;
                }
            }
        }
        // A cluster wider than the whole line goes on a line of its own
        if end == 0 && line.is_empty() {
            end = 1;
        }
        if end == 0 {
            return;
        }

        let head = chunk.take_front(end);
        if chunk.pieces.is_empty() {
            chunks.pop();
        }
        line.push(head);
    }
}

fn attach(units: &mut [Unit], leading: &mut String, s: &str) {
    match units.last_mut() {
        Some(last) => {
            last.text.push_str(s);
            last.sequences.push_str(s);
        },
        None => leading.push_str(s),
    }
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn char_is(chars: &[char], i: Option<usize>, pred: fn(char) -> bool) -> bool {
    i.and_then(|i| chars.get(i)).is_some_and(|c| pred(*c))
}

/// Length of a run of two or more hyphens at `i` followed by a word character
fn em_dash_len(chars: &[char], i: usize) -> Option<usize> {
    let len = chars[i..].iter().take_while(|c| **c == '-').count();
    (len >= 2 && char_is(chars, Some(i + len), is_word)).then_some(len)
}

/// A word may break after the hyphen at `k`: two letters or a letter-hyphen-
/// letter before it, and a letter, an optional hyphen and a letter after it.
fn breaks_after_hyphen(chars: &[char], k: usize) -> bool {
    let before = |back: usize| k.checked_sub(back);
    let behind = (char_is(chars, before(2), is_letter) && char_is(chars, before(1), is_letter))
        || (char_is(chars, before(3), is_letter)
            && before(2).is_some_and(|i| chars[i] == '-')
            && char_is(chars, before(1), is_letter));
    let ahead = char_is(chars, Some(k + 1), is_letter)
        && (char_is(chars, Some(k + 2), is_letter)
            || (chars.get(k + 2) == Some(&'-') && char_is(chars, Some(k + 3), is_letter)));
    behind && ahead
}

/// Chunk ranges of normalized text, where all whitespace is `' '`
fn split_chunks(chars: &[char], break_on_hyphens: bool) -> Vec<Range<usize>> {
    let n = chars.len();
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < n {
        let start = i;
        if chars[i] == ' ' {
            while i < n && chars[i] == ' ' {
                i += 1;
            }
        } else if !break_on_hyphens {
            while i < n && chars[i] != ' ' {
                i += 1;
            }
        } else if let Some(len) = em_dash_len(chars, i)
            .filter(|_| char_is(chars, i.checked_sub(1), is_word_punct))
        {
            i += len;
        } else {
            // Shortest run of non-space characters that ends a word
            let mut j = i + 1;
            i = loop {
                if chars.get(j) == Some(&'-') && breaks_after_hyphen(chars, j) {
                    break j + 1;
                }
                if j == n || chars[j] == ' ' {
                    break j;
                }
                if is_word_punct(chars[j - 1]) && em_dash_len(chars, j).is_some() {
                    break j;
                }
                j += 1;
            };
        }
        chunks.push(start..i);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetCollection;

    fn wrapper(width: usize) -> TextWrapper<'static> {
        TextWrapper::new(DatasetCollection::builtin().latest(), width)
    }

    fn wrap(text: &str, width: usize) -> Vec<String> {
        wrapper(width).wrap(text)
    }

    fn chunks(text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        split_chunks(&chars, true)
            .into_iter()
            .map(|r| chars[r].iter().collect())
            .collect()
    }

    #[test]
    fn test_split_words() {
        assert_eq!(chunks("hello  world"), vec!["hello", "  ", "world"]);
        assert_eq!(chunks("hello-world"), vec!["hello-", "world"]);
        assert_eq!(chunks("a-b-c-d"), vec!["a-b-", "c-d"]);
        assert_eq!(
            chunks("super-long-hyphenated-word"),
            vec!["super-", "long-", "hyphenated-", "word"]
        );
        assert_eq!(chunks("well--known"), vec!["well", "--", "known"]);
        assert_eq!(chunks("x-1"), vec!["x-1"]);
        assert_eq!(chunks("-ab-cd"), vec!["-ab-", "cd"]);
    }

    #[test]
    fn test_basic() {
        assert_eq!(wrap("hello world", 5), vec!["hello", "world"]);
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap("line1\nline2\nline3", 10), vec!["line1", "line2", "line3"]);
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_leading_whitespace_kept_on_first_line() {
        assert_eq!(wrap("  hi there", 5), vec!["  hi", "there"]);
        assert_eq!(wrapper(5).drop_whitespace(false).wrap("ab cd ef"), vec!["ab cd", " ef"]);
    }

    #[test]
    fn test_wide_characters() {
        assert_eq!(wrap("コンニチハ", 4), vec!["コン", "ニチ", "ハ"]);
        assert_eq!(wrap("女", 1), vec!["女"]);
        assert_eq!(wrap("a女", 2), vec!["a", "女"]);
    }

    #[test]
    fn test_long_words() {
        assert_eq!(wrap("abcdefghij", 3), vec!["abc", "def", "ghi", "j"]);
        assert_eq!(wrapper(3).break_long_words(false).wrap("abcdefghij"), vec!["abcdefghij"]);
        assert_eq!(
            wrapper(3).break_long_words(false).wrap("ab abcdefghij cd"),
            vec!["ab", "abcdefghij", "cd"]
        );
    }

    #[test]
    fn test_clusters_stay_whole() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let text = format!("{family}{family}{family}");
        assert_eq!(wrap(&text, 4), vec![format!("{family}{family}"), family.to_string()]);
        assert_eq!(wrap("e\u{301}e\u{301}e\u{301}", 2), vec!["e\u{301}e\u{301}", "e\u{301}"]);
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(wrap("hello-world", 6), vec!["hello-", "world"]);
        assert_eq!(wrap("hello-world", 8), vec!["hello-", "world"]);
        assert_eq!(wrapper(8).break_on_hyphens(false).wrap("hello-world"), vec!["hello-wo", "rld"]);
        assert_eq!(wrap("a-b-c-d", 3), vec!["a-", "b-", "c-d"]);
        assert_eq!(wrapper(3).break_on_hyphens(false).wrap("a-b-c-d"), vec!["a-b", "-c-", "d"]);
        assert_eq!(
            wrap("super-long-hyphenated-word", 10),
            vec!["super-", "long-hyphe", "nated-word"]
        );
    }

    #[test]
    fn test_indents() {
        let w = wrapper(8).initial_indent("* ").subsequent_indent("  ");
        assert_eq!(w.wrap("one two three"), vec!["* one", "  two", "  three"]);
        let w = wrapper(6).initial_indent("\x1b[1m>\x1b[0m ");
        assert_eq!(w.wrap("ab cd"), vec!["\x1b[1m>\x1b[0m ab", "cd"]);
    }

    #[test]
    fn test_tabs() {
        assert_eq!(wrap("a\tb", 20), vec!["a       b"]);
        assert_eq!(wrapper(20).tabstop(4).wrap("a\tb"), vec!["a   b"]);
    }

    #[test]
    fn test_sequences_take_no_space() {
        assert_eq!(wrap("\x1b]8;;url\x07hello\x1b]8;;\x07 world", 5), vec![
            "\x1b]8;;url\x07hello\x1b]8;;\x07",
            "world"
        ]);
        assert!(wrap("\x1b[31m", 5).is_empty());
    }

    #[test]
    fn test_sgr_propagation() {
        assert_eq!(
            wrap("\x1b[31mred text here\x1b[0m", 5),
            vec![
                "\x1b[31mred\x1b[0m",
                "\x1b[31mtext\x1b[0m",
                "\x1b[31mhere\x1b[0m"
            ]
        );
        assert_eq!(
            wrap("\x1b[31mred\x1b[0m plain text", 6),
            vec!["\x1b[31mred\x1b[0m", "plain", "text"]
        );
        assert_eq!(
            wrapper(5).propagate_sgr(false).wrap("\x1b[31mred text\x1b[0m"),
            vec!["\x1b[31mred", "text\x1b[0m"]
        );
    }

    #[test]
    fn test_dropped_space_keeps_sequences() {
        assert_eq!(
            wrapper(3).propagate_sgr(false).wrap("ab \x1b[1mcd"),
            vec!["ab\x1b[1m", "cd"]
        );
    }

    #[test]
    fn test_fill() {
        assert_eq!(wrapper(5).fill("hello world"), "hello\nworld");
    }
}
