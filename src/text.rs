//! Control-aware text measurement, justification and clipping
//!
//! These build on the grapheme widths of [`VersionDataset`] and add what a
//! terminal does with control characters and escape sequences: tabs, cursor
//! movement and styling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::VersionDataset;
use crate::error::TextError;
use crate::sequences::{iter_sequences, Effect, Segment};
use crate::sgr::{SgrState, SGR_RESET};

/// How [`TextMeasure::width`] treats control characters and sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlCodes {
    /// Follow horizontal cursor movement, ignore everything else
    #[default]
    Parse,
    /// Like `Parse`, but fail on anything that moves the cursor unpredictably
    Strict,
    /// Drop every control character and sequence before measuring
    Ignore,
}

impl FromStr for ControlCodes {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parse" => Ok(ControlCodes::Parse),
            "strict" => Ok(ControlCodes::Strict),
            "ignore" => Ok(ControlCodes::Ignore),
            other => Err(format!(
                "control codes must be parse, strict or ignore, got {other:?}"
            )),
        }
    }
}

impl fmt::Display for ControlCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ControlCodes::Parse => "parse",
            ControlCodes::Strict => "strict",
            ControlCodes::Ignore => "ignore",
        })
    }
}

/// What a control character does to the cursor column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    /// NUL, BEL, SO, SI
    ZeroWidth,
    Backspace,
    Tab,
    CarriageReturn,
    /// LF, VT, FF
    Vertical,
    Illegal,
}

fn control_kind(c: char) -> Option<Control> {
    Some(match c {
        '\0' | '\x07' | '\x0e' | '\x0f' => Control::ZeroWidth,
        '\x08' => Control::Backspace,
        '\t' => Control::Tab,
        '\r' => Control::CarriageReturn,
        '\n' | '\x0b' | '\x0c' => Control::Vertical,
        '\x01'..='\x1f' | '\x7f'..='\u{9f}' => Control::Illegal,
        _ => return None,
    })
}

/// Options for [`TextMeasure::clip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipOptions {
    /// Stands in for each visible cell of a wide cluster cut by an edge
    pub fillchar: char,
    /// Tab stops for expanding TAB; 0 keeps tabs verbatim
    pub tabsize: usize,
    /// Cells for East Asian Ambiguous characters, 1 or 2
    pub ambiguous_width: usize,
    /// Fold styling before the window into a prefix and close it at the end
    pub propagate_sgr: bool,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            fillchar: ' ',
            tabsize: 8,
            ambiguous_width: 1,
            propagate_sgr: true,
        }
    }
}

/// Measures and lays out text against one dataset.
#[derive(Debug, Clone, Copy)]
pub struct TextMeasure<'d> {
    dataset: &'d VersionDataset,
    control_codes: ControlCodes,
    tabstop: usize,
    column: usize,
}

impl<'d> TextMeasure<'d> {
    pub fn new(dataset: &'d VersionDataset) -> Self {
        Self {
            dataset,
            control_codes: ControlCodes::Parse,
            tabstop: 8,
            column: 0,
        }
    }

    pub fn control_codes(mut self, control_codes: ControlCodes) -> Self {
        self.control_codes = control_codes;
        self
    }

    /// Tab stop interval; 0 makes TAB zero width
    pub fn tabstop(mut self, tabstop: usize) -> Self {
        self.tabstop = tabstop;
        self
    }

    /// Absolute column the text starts at, for tab stops
    pub fn column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    pub fn dataset(&self) -> &'d VersionDataset {
        self.dataset
    }

    /// Rightmost column the cursor reaches, relative to the start column.
    ///
    /// Never negative: backspace and carriage return cannot move left of the
    /// start, and the extent only grows.
    pub fn width(&self, text: &str) -> Result<usize, TextError> {
        match self.control_codes {
            ControlCodes::Ignore => Ok(self.width_ignoring_controls(text)),
            ControlCodes::Parse => self.width_tracking_cursor(text, false),
            ControlCodes::Strict => self.width_tracking_cursor(text, true),
        }
    }

    fn width_ignoring_controls(&self, text: &str) -> usize {
        let printable: String = iter_sequences(text)
            .filter_map(|segment| match segment {
                Segment::Text(run) => Some(run),
                Segment::Sequence(_) => None,
            })
            .flat_map(str::chars)
            .filter(|c| control_kind(*c).is_none())
            .collect();
        self.run_width(&printable)
    }

    fn run_width(&self, run: &str) -> usize {
        self.dataset.wcswidth(run, None).max(0) as usize
    }

    fn width_tracking_cursor(&self, text: &str, strict: bool) -> Result<usize, TextError> {
        let mut col = self.column;
        let mut extent = col;
        let mut offset = 0;

        for segment in iter_sequences(text) {
            let len = segment.as_str().len();
            match segment {
                Segment::Sequence(seq) => match seq.effect() {
                    Effect::CursorRight(n) => col = col.saturating_add(n),
                    Effect::CursorLeft(n) => col = col.saturating_sub(n),
                    Effect::Indeterminate if strict => {
                        return Err(TextError::IndeterminateSequence { position: offset })
                    },
                    _ => {},
                },
                Segment::Text(run) => {
                    let mut printable_start = 0;
                    for (i, c) in run.char_indices() {
                        let Some(kind) = control_kind(c) else {
                            continue;
                        };
                        col += self.run_width(&run[printable_start..i]);
                        extent = extent.max(col);
                        printable_start = i + c.len_utf8();

                        let position = offset + i;
                        match kind {
                            Control::ZeroWidth => {},
                            Control::Backspace => col = col.saturating_sub(1),
                            Control::CarriageReturn => col = 0,
                            Control::Tab if self.tabstop > 0 => {
                                col += self.tabstop - col % self.tabstop;
                            },
                            Control::Tab => {},
                            Control::Vertical if strict => {
                                return Err(TextError::VerticalMovement {
                                    codepoint: c as u32,
                                    position,
                                })
                            },
                            Control::Illegal if strict => {
                                return Err(TextError::IllegalControl {
                                    codepoint: c as u32,
                                    position,
                                })
                            },
                            Control::Vertical | Control::Illegal => {},
                        }
                    }
                    col += self.run_width(&run[printable_start..]);
                },
            }
            extent = extent.max(col);
            offset += len;
        }

        Ok(extent - self.column)
    }

    fn fill_width(fillchar: &str, dataset: &VersionDataset) -> Result<usize, TextError> {
        let width = TextMeasure::new(dataset)
            .control_codes(ControlCodes::Ignore)
            .width(fillchar)?;
        if width == 0 {
            return Err(TextError::FillWidth(fillchar.to_string()));
        }
        Ok(width)
    }

    /// Pad on the right to `width` cells with whole copies of `fillchar`
    pub fn ljust(&self, text: &str, width: usize, fillchar: &str) -> Result<String, TextError> {
        let fill = Self::fill_width(fillchar, self.dataset)?;
        let padding = width.saturating_sub(self.width(text)?);
        Ok(format!("{text}{}", fillchar.repeat(padding / fill)))
    }

    /// Pad on the left to `width` cells with whole copies of `fillchar`
    pub fn rjust(&self, text: &str, width: usize, fillchar: &str) -> Result<String, TextError> {
        let fill = Self::fill_width(fillchar, self.dataset)?;
        let padding = width.saturating_sub(self.width(text)?);
        Ok(format!("{}{text}", fillchar.repeat(padding / fill)))
    }

    /// Pad both sides to `width` cells; an odd cell goes on the right
    pub fn center(&self, text: &str, width: usize, fillchar: &str) -> Result<String, TextError> {
        let fill = Self::fill_width(fillchar, self.dataset)?;
        let padding = width.saturating_sub(self.width(text)?);
        let left = padding / 2;
        let right = padding - left;
        Ok(format!(
            "{}{text}{}",
            fillchar.repeat(left / fill),
            fillchar.repeat(right / fill)
        ))
    }

    /// Cells `[start, end)` of `text`.
    ///
    /// Sequences and control characters are kept as zero width. A wide
    /// cluster cut by either edge becomes one `fillchar` per visible cell.
    pub fn clip(&self, text: &str, start: usize, end: usize, options: &ClipOptions) -> String {
        if end <= start {
            return String::new();
        }

        let track_sgr = options.propagate_sgr
            && iter_sequences(text).any(|segment| match segment {
                Segment::Sequence(seq) => seq.is_sgr(),
                Segment::Text(_) => false,
            });

        let mut body = String::with_capacity(text.len());
        // Styling from before the window, emitted as one prefix
        let mut leading = SgrState::default();
        let mut trailing = SgrState::default();
        let mut visible = false;
        let mut col = 0usize;

        for segment in iter_sequences(text) {
            let run = match segment {
                Segment::Sequence(seq) => {
                    if track_sgr && seq.is_sgr() {
                        trailing.update(seq.text);
                        if col < start {
                            leading.update(seq.text);
                            continue;
                        }
                    }
                    body.push_str(seq.text);
                    continue;
                },
                Segment::Text(run) => run,
            };

            for grapheme in self.dataset.graphemes(run) {
                if grapheme.is_indeterminate() {
                    if grapheme.text == "\t" && options.tabsize > 0 {
                        let stop = (col / options.tabsize + 1) * options.tabsize;
                        let shown = stop.min(end).saturating_sub(col.max(start));
                        if shown > 0 {
                            body.extend(std::iter::repeat(' ').take(shown));
                            visible = true;
                        }
                        col = stop;
                    } else {
                        body.push_str(grapheme.text);
                    }
                    continue;
                }

                let mut width = grapheme.width as usize;
                if width == 1 && options.ambiguous_width == 2 {
                    let first = grapheme.text.chars().next().map_or(0, |c| c as u32);
                    width = self.dataset.classify_ambiguous(first, 2) as usize;
                }

                if width == 0 {
                    if col >= start && col < end {
                        body.push_str(grapheme.text);
                    }
                } else if col >= start && col + width <= end {
                    body.push_str(grapheme.text);
                    visible = true;
                } else if col < end && col + width > start {
                    let shown = (col + width).min(end) - col.max(start);
                    body.extend(std::iter::repeat(options.fillchar).take(shown));
                    visible = true;
                }
                col += width;
            }
        }

        if !track_sgr {
            return body;
        }
        if !visible {
            return String::new();
        }
        let mut result = leading.to_sequence();
        result.push_str(&body);
        if trailing.is_active() {
            result.push_str(SGR_RESET);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetCollection;

    fn measure() -> TextMeasure<'static> {
        TextMeasure::new(DatasetCollection::builtin().latest())
    }

    fn width(text: &str) -> usize {
        measure().width(text).unwrap()
    }

    fn clip(text: &str, start: usize, end: usize) -> String {
        measure().clip(text, start, end, &ClipOptions::default())
    }

    fn clip_with(text: &str, start: usize, end: usize, options: ClipOptions) -> String {
        measure().clip(text, start, end, &options)
    }

    #[test]
    fn test_width_plain() {
        assert_eq!(width(""), 0);
        assert_eq!(width("hello"), 5);
        assert_eq!(width("コンニチハ"), 10);
        assert_eq!(width("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"), 2);
        assert_eq!(width("\u{915}\u{94D}\u{937}\u{93E}"), 2);
    }

    #[test]
    fn test_width_sequences() {
        assert_eq!(width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(width("1\x1b[10C"), 11);
        assert_eq!(width("abc\x1b[2Dd"), 3);
        assert_eq!(width("\x1b]8;;http://x\x07link\x1b]8;;\x07"), 4);
    }

    #[test]
    fn test_width_horizontal_controls() {
        assert_eq!(width("123\x084"), 3);
        assert_eq!(width("abc\t"), 8);
        assert_eq!(width("abcdef\rab"), 6);
        assert_eq!(width("\x08\x08a"), 1);
        assert_eq!(measure().tabstop(4).width("a\tb").unwrap(), 5);
        assert_eq!(measure().tabstop(0).width("a\tb").unwrap(), 2);
    }

    #[test]
    fn test_width_column_offsets_tabs() {
        assert_eq!(measure().column(3).width("\t").unwrap(), 5);
        assert_eq!(measure().column(8).width("\t").unwrap(), 8);
    }

    #[test]
    fn test_width_vertical_and_illegal_are_zero() {
        assert_eq!(width("ab\ncd"), 4);
        assert_eq!(width("ab\x01cd"), 4);
        assert_eq!(width("a\x07b"), 2);
    }

    #[test]
    fn test_width_strict() {
        let strict = measure().control_codes(ControlCodes::Strict);
        assert_eq!(strict.width("ab\tc\x1b[31m").unwrap(), 9);
        assert_eq!(strict.width("a\x07\0b").unwrap(), 2);
        assert_eq!(
            strict.width("ab\ncd"),
            Err(TextError::VerticalMovement {
                codepoint: 0x0A,
                position: 2
            })
        );
        assert_eq!(
            strict.width("a\x01"),
            Err(TextError::IllegalControl {
                codepoint: 0x01,
                position: 1
            })
        );
        assert_eq!(
            strict.width("ab\x1b[2J"),
            Err(TextError::IndeterminateSequence { position: 2 })
        );
    }

    #[test]
    fn test_width_ignore() {
        let ignore = measure().control_codes(ControlCodes::Ignore);
        assert_eq!(ignore.width("1\x1b[10C").unwrap(), 1);
        assert_eq!(ignore.width("a\tb\nc").unwrap(), 3);
        assert_eq!(ignore.width("\x1b[31m中\x1b[0m").unwrap(), 2);
    }

    #[test]
    fn test_control_codes_from_str() {
        assert_eq!("strict".parse::<ControlCodes>(), Ok(ControlCodes::Strict));
        assert!("loose".parse::<ControlCodes>().is_err());
        assert_eq!(ControlCodes::Ignore.to_string(), "ignore");
    }

    #[test]
    fn test_justify() {
        let m = measure();
        assert_eq!(m.ljust("hi", 5, " ").unwrap(), "hi   ");
        assert_eq!(m.rjust("hi", 5, " ").unwrap(), "   hi");
        assert_eq!(m.center("hi", 6, " ").unwrap(), "  hi  ");
        assert_eq!(m.center("hi", 5, " ").unwrap(), " hi  ");
        assert_eq!(m.ljust("\x1b[31mhi\x1b[0m", 5, " ").unwrap(), "\x1b[31mhi\x1b[0m   ");
        assert_eq!(m.ljust("中", 5, "-").unwrap(), "中---");
        // Wide fill characters never overshoot
        assert_eq!(m.ljust("a", 4, "中").unwrap(), "a中");
        assert_eq!(m.ljust("toolong", 3, " ").unwrap(), "toolong");
    }

    #[test]
    fn test_justify_rejects_zero_width_fill() {
        let m = measure();
        assert_eq!(
            m.ljust("a", 4, "\u{301}"),
            Err(TextError::FillWidth("\u{301}".into()))
        );
        assert!(m.center("a", 4, "").is_err());
    }

    #[test]
    fn test_clip_ascii() {
        assert_eq!(clip("hello", 0, 3), "hel");
        assert_eq!(clip("hello world", 6, 11), "world");
        assert_eq!(clip("hello", 5, 3), "");
        assert_eq!(clip("hi", 0, 100), "hi");
        assert_eq!(clip("hi", 100, 200), "");
    }

    #[test]
    fn test_clip_wide() {
        assert_eq!(clip("中文字", 0, 4), "中文");
        assert_eq!(clip("中文字", 0, 3), "中 ");
        assert_eq!(clip("中文字", 1, 5), " 文 ");
        assert_eq!(clip("A中B", 2, 4), " B");
        let dots = ClipOptions {
            fillchar: '.',
            ..ClipOptions::default()
        };
        assert_eq!(clip_with("中文字", 1, 5, dots), ".文.");
    }

    #[test]
    fn test_clip_clusters() {
        assert_eq!(clip("cafe\u{301}", 0, 4), "cafe\u{301}");
        assert_eq!(clip("cafe\u{301}", 0, 3), "caf");
        assert_eq!(clip("\u{1F1FA}\u{1F1F8}", 0, 2), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(clip("\u{1F1FA}\u{1F1F8}", 0, 1), " ");
        assert_eq!(clip("\u{2764}\u{FE0F}", 0, 1), " ");
        let wales = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}";
        assert_eq!(clip(&format!("ab{wales}"), 2, 4), wales);
        assert_eq!(clip(&format!("ab{wales}"), 0, 3), "ab ");
    }

    #[test]
    fn test_clip_ambiguous() {
        let wide = ClipOptions {
            ambiguous_width: 2,
            ..ClipOptions::default()
        };
        assert_eq!(clip("\u{b1}test", 0, 3), "\u{b1}te");
        assert_eq!(clip_with("\u{b1}test", 0, 3, wide), "\u{b1}t");
    }

    #[test]
    fn test_clip_tabs() {
        let tabs = |size| ClipOptions {
            tabsize: size,
            ..ClipOptions::default()
        };
        assert_eq!(clip("a\tb", 0, 10), "a       b");
        assert_eq!(clip("a\tb", 0, 4), "a   ");
        assert_eq!(clip("a\tb", 4, 10), "    b");
        assert_eq!(clip_with("a\tb\tc", 0, 20, tabs(4)), "a   b   c");
        assert_eq!(clip_with("中\tb", 0, 10, tabs(4)), "中  b");
        assert_eq!(clip_with("a\tb", 0, 5, tabs(0)), "a\tb");
    }

    #[test]
    fn test_clip_controls_pass_through() {
        assert_eq!(clip("abc\x08de", 0, 5), "abc\x08de");
        assert_eq!(clip("\x07\x08\rHello", 0, 5), "\x07\x08\rHello");
        assert_eq!(clip("ab\x1b[5Ccd", 0, 4), "ab\x1b[5Ccd");
        assert_eq!(clip("a\x1bb", 0, 2), "a\x1bb");
    }

    #[test]
    fn test_clip_propagates_sgr() {
        assert_eq!(clip("\x1b[1;34mHello world\x1b[0m", 6, 11), "\x1b[1;34mworld\x1b[0m");
        assert_eq!(clip("\x1b[31mred\x1b[0m plain", 4, 9), "plain");
        assert_eq!(clip("\x1b[31mred\x1b[0m", 0, 3), "\x1b[31mred\x1b[0m");
        assert_eq!(clip("\x1b[31m中文\x1b[0m", 0, 3), "\x1b[31m中 \x1b[0m");
        assert_eq!(clip("\x1b[31m\x1b[0m", 0, 10), "");
        // Still open at the end of the window
        assert_eq!(clip("\x1b[31mHello world", 0, 5), "\x1b[31mHello\x1b[0m");
    }

    #[test]
    fn test_clip_keeps_hyperlinks() {
        let clipped = clip("\x1b]8;;url\x07link\x1b]8;;\x07", 0, 4);
        assert_eq!(clipped, "\x1b]8;;url\x07link\x1b]8;;\x07");
    }

    #[test]
    fn test_clip_without_propagation_keeps_sequences() {
        let raw = ClipOptions {
            propagate_sgr: false,
            ..ClipOptions::default()
        };
        assert_eq!(
            clip_with("\x1b[1;34mHello world\x1b[0m", 6, 11, raw),
            "\x1b[1;34mworld\x1b[0m"
        );
        assert_eq!(clip_with("\x1b[31m\x1b[0m", 0, 10, raw), "\x1b[31m\x1b[0m");
        assert_eq!(clip_with("hello\x1b[31m world\x1b[0m", 0, 5, raw), "hello\x1b[31m\x1b[0m");
    }

    #[test]
    fn test_clip_width_matches_window() {
        for (start, end, expected) in [(0, 6, 6), (0, 3, 3), (1, 6, 5), (1, 5, 4)] {
            assert_eq!(width(&clip("中文字", start, end)), expected);
        }
    }
}
