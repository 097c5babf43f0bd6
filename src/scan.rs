//! Sequence-aware width accumulation (`wcswidth`)
//!
//! [`ScanState`] carries what one codepoint needs to know about the ones
//! before it. [`ScanState::step`] reports the cells a codepoint adds and
//! whether it opens a new grapheme cluster; `wcswidth` and the grapheme
//! iterators are both loops over it, so their totals always agree.
//!
//! Context rules, in precedence order:
//!
//! - Controls are their own cluster (CR LF stays together) and reset state.
//! - ZWJ attaches to the open cluster. After an emoji or regional indicator
//!   it fuses the next codepoint, which then adds nothing. Elsewhere it is
//!   transparent, so `virama ZWJ consonant` still forms a half conjunct.
//! - The second of a regional indicator pair adds nothing.
//! - A Fitzpatrick modifier after an emoji base adds nothing.
//! - VS16 after a narrow base with an emoji presentation adds one cell.
//! - A consonant after `consonant virama` adds nothing and opens a conjunct.
//!   The conjunct costs one more cell, paid by the next spacing mark, or at
//!   the next cluster boundary, or at the end of input.
//! - A spacing mark (Mc) after a positive width base adds one cell.
//! - Other extending codepoints (marks, ZWNJ, emoji tags) attach and add
//!   their own width.

use crate::classify::{VS16, ZWJ};
use crate::dataset::VersionDataset;
use crate::error::{WidthError, CODEPOINT_LIMIT};

const CR: u32 = 0x0D;
const LF: u32 = 0x0A;

/// Outcome of feeding one codepoint to a [`ScanState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    /// Cells owed to the previous cluster for a conjunct this codepoint closed
    pub settle: isize,
    /// Cells this codepoint adds to its own cluster
    pub advance: isize,
    /// Codepoint starts a new cluster
    pub boundary: bool,
    /// Codepoint is a control character
    pub control: bool,
}

impl Step {
    fn extend(advance: isize) -> Self {
        Self {
            settle: 0,
            advance,
            boundary: false,
            control: false,
        }
    }
}

/// Per-scan context. Lives on the stack of one scan and is never shared.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ScanState {
    /// Width of the base that opened the current cluster (0 if none)
    base_width: i8,
    in_conjunct: bool,
    pending_regional_indicator: bool,
    pending_emoji_base: bool,
    /// Last visible letter was a consonant, possibly followed by marks
    after_consonant: bool,
    /// Saw `consonant virama`; a consonant now joins the conjunct
    after_virama: bool,
    /// Current cluster is an emoji or regional indicator sequence
    emoji_context: bool,
    /// Previous codepoint was a ZWJ inside an emoji sequence
    zwj_fusion: bool,
    /// Previous codepoint was a narrow VS16 base
    vs16_candidate: bool,
    after_cr: bool,
    after_control: bool,
    started: bool,
}

impl ScanState {
    /// Feed one codepoint with its classified `width`.
    pub(crate) fn step(&mut self, ds: &VersionDataset, cp: u32, width: i8) -> Step {
        if width < 0 {
            return self.control(cp);
        }
        if cp == ZWJ {
            return self.zero_width_joiner();
        }
        if self.zwj_fusion {
            return self.fuse(ds, cp);
        }
        if ds.is_regional_indicator(cp) {
            return self.regional_indicator(ds, cp, width);
        }
        if self.pending_emoji_base && ds.is_emoji_modifier(cp) {
            self.pending_emoji_base = false;
            self.vs16_candidate = false;
            return Step::extend(0);
        }

        if self.started && !self.after_control {
            if cp == VS16 {
                let advance = isize::from(self.vs16_candidate);
                self.vs16_candidate = false;
                self.pending_regional_indicator = false;
                return Step::extend(advance);
            }
            if ds.virama.contains(cp) {
                return self.virama(width);
            }
            if self.after_virama && ds.consonant.contains(cp) {
                self.after_virama = false;
                self.after_consonant = true;
                self.in_conjunct = true;
                return Step::extend(0);
            }
            if self.base_width > 0 && ds.spacing_mark.contains(cp) {
                // Pays for an open conjunct at the same time
                self.in_conjunct = false;
                self.after_virama = false;
                self.after_consonant = false;
                self.clear_emoji();
                return Step::extend(1);
            }
            if ds.combining.contains(cp) {
                self.pending_regional_indicator = false;
                self.vs16_candidate = false;
                return Step::extend(isize::from(width));
            }
        }

        self.begin_cluster(ds, cp, width)
    }

    /// Cells still owed at the end of input
    pub(crate) fn finish(&mut self) -> isize {
        self.close_conjunct()
    }

    fn close_conjunct(&mut self) -> isize {
        if self.in_conjunct {
            self.in_conjunct = false;
            1
        } else {
            0
        }
    }

    fn clear_emoji(&mut self) {
        self.pending_regional_indicator = false;
        self.pending_emoji_base = false;
        self.vs16_candidate = false;
    }

    fn begin_cluster(&mut self, ds: &VersionDataset, cp: u32, width: i8) -> Step {
        let settle = self.close_conjunct();
        let pictographic = ds.is_extended_pictographic(cp);
        *self = Self {
            base_width: width,
            pending_emoji_base: pictographic,
            after_consonant: ds.consonant.contains(cp),
            emoji_context: pictographic || ds.is_regional_indicator(cp),
            vs16_candidate: width == 1 && ds.vs16.contains(cp),
            started: true,
            ..Self::default()
        };
        Step {
            settle,
            advance: isize::from(width),
            boundary: true,
            control: false,
        }
    }

    fn control(&mut self, cp: u32) -> Step {
        let settle = self.close_conjunct();
        let boundary = !(self.after_cr && cp == LF);
        *self = Self {
            after_cr: cp == CR,
            after_control: true,
            started: true,
            ..Self::default()
        };
        Step {
            settle,
            advance: 0,
            boundary,
            control: true,
        }
    }

    fn zero_width_joiner(&mut self) -> Step {
        if !self.started || self.after_control {
            // Nothing to join to: a zero width cluster of its own
            let settle = self.close_conjunct();
            *self = Self {
                started: true,
                ..Self::default()
            };
            return Step {
                settle,
                advance: 0,
                boundary: true,
                control: false,
            };
        }
        self.zwj_fusion = self.emoji_context;
        self.clear_emoji();
        Step::extend(0)
    }

    fn fuse(&mut self, ds: &VersionDataset, cp: u32) -> Step {
        let pictographic = ds.is_extended_pictographic(cp);
        self.zwj_fusion = false;
        self.emoji_context = pictographic || ds.is_regional_indicator(cp);
        self.clear_emoji();
        self.pending_emoji_base = pictographic;
        self.after_consonant = false;
        self.after_virama = false;
        Step::extend(0)
    }

    fn regional_indicator(&mut self, ds: &VersionDataset, cp: u32, width: i8) -> Step {
        if self.pending_regional_indicator {
            self.pending_regional_indicator = false;
            return Step::extend(0);
        }
        let step = self.begin_cluster(ds, cp, width);
        self.pending_regional_indicator = true;
        step
    }

    fn virama(&mut self, width: i8) -> Step {
        // A spacing virama pays for an open conjunct with its own cell
        let advance = isize::from(width);
        if advance > 0 {
            self.in_conjunct = false;
        }
        self.after_virama = self.after_consonant;
        self.after_consonant = false;
        self.clear_emoji();
        Step::extend(advance)
    }
}

impl VersionDataset {
    /// Cells occupied by `text`, or -1 if it contains a control character.
    ///
    /// `limit` bounds how many codepoints of the input are considered.
    pub fn wcswidth(&self, text: &str, limit: Option<usize>) -> isize {
        let limit = limit.unwrap_or(usize::MAX);
        if text.bytes().all(|b| (0x20..0x7F).contains(&b)) {
            return text.len().min(limit) as isize;
        }
        let mut state = ScanState::default();
        let mut total = 0;
        for c in text.chars().take(limit) {
            let width = self.char_width(c);
            if width < 0 {
                return -1;
            }
            let step = state.step(self, c as u32, width);
            total += step.settle + step.advance;
        }
        total + state.finish()
    }

    /// [`wcswidth`](Self::wcswidth) over raw codepoint values.
    ///
    /// Values outside the Unicode range fail with their index. A control
    /// character seen first still short-circuits to -1.
    pub fn wcswidth_codepoints(
        &self,
        codepoints: &[u32],
        limit: Option<usize>,
    ) -> Result<isize, WidthError> {
        let mut state = ScanState::default();
        let mut total = 0;
        for (index, &cp) in codepoints
            .iter()
            .enumerate()
            .take(limit.unwrap_or(usize::MAX))
        {
            if cp >= CODEPOINT_LIMIT {
                return Err(WidthError::InvalidCodepoint {
                    codepoint: cp,
                    index: Some(index),
                });
            }
            let width = self.classify(cp);
            if width < 0 {
                return Ok(-1);
            }
            let step = state.step(self, cp, width);
            total += step.settle + step.advance;
        }
        Ok(total + state.finish())
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::{DatasetCollection, VersionDataset};

    fn latest() -> &'static VersionDataset {
        DatasetCollection::builtin().latest()
    }

    fn width(text: &str) -> isize {
        latest().wcswidth(text, None)
    }

    #[test]
    fn test_ascii_and_limit() {
        assert_eq!(width(""), 0);
        assert_eq!(width("hello"), 5);
        assert_eq!(latest().wcswidth("hello", Some(3)), 3);
        assert_eq!(latest().wcswidth("hello", Some(0)), 0);
        assert_eq!(latest().wcswidth("中文字", Some(2)), 4);
    }

    #[test]
    fn test_controls_short_circuit() {
        assert_eq!(width("abc\ndef"), -1);
        assert_eq!(width("\x1b[31m"), -1);
        assert_eq!(width("\u{85}"), -1);
        // The control is past the limit
        assert_eq!(latest().wcswidth("abc\n", Some(3)), 3);
        // NUL is zero width, not a control
        assert_eq!(width("a\0b"), 2);
    }

    #[test]
    fn test_combining() {
        assert_eq!(width("A\u{301}"), 1);
        assert_eq!(width("e\u{301}\u{302}\u{303}"), 1);
        assert_eq!(width("\u{301}"), 0);
    }

    #[test]
    fn test_wide() {
        assert_eq!(width("コンニチハ"), 10);
        assert_eq!(width("中a"), 3);
    }

    #[test]
    fn test_regional_indicators() {
        assert_eq!(width("\u{1F1FA}\u{1F1F8}"), 2);
        assert_eq!(width("\u{1F1FA}"), 2);
        assert_eq!(width("\u{1F1FA}\u{1F1F8}\u{1F1EC}\u{1F1E7}"), 4);
        assert_eq!(width("\u{1F1FA}\u{1F1F8}\u{1F1EC}"), 4);
    }

    #[test]
    fn test_zwj_sequences() {
        // Family: man ZWJ woman ZWJ girl
        assert_eq!(width("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"), 2);
        // Rainbow flag: white flag VS16 ZWJ rainbow
        assert_eq!(width("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"), 2);
        // ZWJ between letters only hides itself
        assert_eq!(width("a\u{200D}b"), 2);
        assert_eq!(width("\u{200D}"), 0);
    }

    #[test]
    fn test_emoji_modifier() {
        assert_eq!(width("\u{1F44D}\u{1F3FB}"), 2);
        assert_eq!(width("\u{1F3FB}"), 2);
        assert_eq!(width("a\u{1F3FB}"), 3);
        // Woman with skin tone ZWJ laptop
        assert_eq!(width("\u{1F469}\u{1F3FD}\u{200D}\u{1F4BB}"), 2);
    }

    #[test]
    fn test_vs16() {
        // Heavy black heart is narrow on its own
        assert_eq!(width("\u{2764}"), 1);
        assert_eq!(width("\u{2764}\u{FE0F}"), 2);
        // Already wide bases do not grow
        assert_eq!(width("\u{231A}\u{FE0F}"), 2);
        // Not an emoji base
        assert_eq!(width("a\u{FE0F}"), 1);

        let old = DatasetCollection::builtin().resolve(Some("5.2")).unwrap();
        assert_eq!(old.wcswidth("\u{2764}\u{FE0F}", None), 1);
    }

    #[test]
    fn test_spacing_marks() {
        // Devanagari ka + sign aa
        assert_eq!(width("\u{915}\u{93E}"), 2);
        // Nukta between base and sign keeps the association
        assert_eq!(width("\u{915}\u{93C}\u{93E}"), 2);
        // Sign aa on its own
        assert_eq!(width("\u{93E}"), 1);
    }

    #[test]
    fn test_conjuncts() {
        // ka virama ssa sign-aa: consonant cell + settlement paid by the sign
        assert_eq!(width("\u{915}\u{94D}\u{937}\u{93E}"), 2);
        // ka virama ssa: settled at the end of input
        assert_eq!(width("\u{915}\u{94D}\u{937}"), 2);
        // Chain of three consonants still settles once
        assert_eq!(width("\u{938}\u{94D}\u{924}\u{94D}\u{930}"), 2);
        // Half form with explicit ZWJ
        assert_eq!(width("\u{915}\u{94D}\u{200D}\u{937}"), 2);
        // Settled before the next visible codepoint
        assert_eq!(width("\u{915}\u{94D}\u{937}a"), 3);
        // Virama not between consonants
        assert_eq!(width("\u{915}\u{94D}"), 1);
        // A nukta inside the conjunct keeps it open for the sign
        assert_eq!(width("\u{915}\u{94D}\u{937}\u{93C}\u{93E}"), 2);
        assert_eq!(width("\u{915}\u{94D}\u{937}\u{93C}"), 2);
    }

    #[test]
    fn test_tag_sequence_extends_flag() {
        let england = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";
        assert_eq!(width(england), 2);
        assert_eq!(latest().graphemes(england).count(), 1);
        // Other format characters from the extend set attach too
        assert_eq!(latest().graphemes("a\u{200C}b").count(), 2);
    }

    #[test]
    fn test_conjunct_settles_before_control() {
        assert_eq!(width("\u{915}\u{94D}\u{937}\n"), -1);
        let ds = latest();
        let graphemes: Vec<isize> = ds
            .graphemes("\u{915}\u{94D}\u{937}\n")
            .map(|g| g.width)
            .collect();
        assert_eq!(graphemes, vec![2, -1]);
    }

    #[test]
    fn test_hangul_jamo() {
        assert_eq!(width("\u{1100}\u{1161}\u{11A8}"), 2);
    }

    #[test]
    fn test_codepoints() {
        let ds = latest();
        assert_eq!(ds.wcswidth_codepoints(&[0x41, 0x301], None), Ok(1));
        assert_eq!(ds.wcswidth_codepoints(&[0x1F1FA, 0x1F1F8], None), Ok(2));
        assert_eq!(ds.wcswidth_codepoints(&[0x41, 0x0A], None), Ok(-1));
        assert_eq!(
            ds.wcswidth_codepoints(&[0x41, 0x42, 0x110000], None),
            Err(crate::WidthError::InvalidCodepoint {
                codepoint: 0x110000,
                index: Some(2)
            })
        );
        // Beyond the limit nothing is validated
        assert_eq!(ds.wcswidth_codepoints(&[0x41, 0x110000], Some(1)), Ok(1));
    }
}
