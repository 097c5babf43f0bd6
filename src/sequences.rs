//! Terminal escape sequence recognition
//!
//! Recognizes the sequences a terminal consumes without printing:
//!
//! - CSI: `ESC [` parameters (0x30-0x3F), intermediates (0x20-0x2F), final (0x40-0x7E)
//! - OSC, APC, DCS and PM strings, terminated by BEL or `ESC \`
//! - Character set designation: `ESC (` or `ESC )` and one character
//! - Fe: `ESC` 0x40-0x5F
//! - Fp: `ESC 7`, `ESC 8`, `ESC =`, `ESC >`, `ESC g`
//!
//! Alternatives are tried in that order, so an unterminated OSC falls back to
//! its two byte Fe form. The recognizer follows the same state layout as a
//! VT500 parser but only reports extents; nothing is dispatched.

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Which grammar production matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Csi,
    Osc,
    Apc,
    Dcs,
    Pm,
    Charset,
    Fe,
    Fp,
    /// ESC that starts no recognized sequence
    LoneEscape,
}

/// Effect of a sequence on the cursor column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    CursorRight(usize),
    CursorLeft(usize),
    /// Select Graphic Rendition, tracked by [`crate::sgr::SgrState`]
    Sgr,
    /// Moves the cursor somewhere the column cannot follow
    Indeterminate,
    None,
}

/// A recognized escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence<'a> {
    pub text: &'a str,
    pub kind: SequenceKind,
}

/// Recognizer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Escape,
    CsiParam,
    CsiIntermediate,
    ControlString,
    ControlStringEscape,
}

/// Match the escape sequence at the start of `text`.
///
/// Returns `None` when `text` does not start with ESC. An ESC that starts
/// nothing recognizable is returned as a one byte [`SequenceKind::LoneEscape`].
pub fn match_sequence(text: &str) -> Option<Sequence<'_>> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&ESC) {
        return None;
    }

    let make = move |len: usize, kind: SequenceKind| Sequence {
        text: &text[..len],
        kind,
    };

    let mut state = State::Escape;
    let mut string_kind = SequenceKind::Osc;
    for (i, &byte) in bytes.iter().enumerate().skip(1) {
        match state {
            State::Escape => match byte {
                b'[' => state = State::CsiParam,
                b']' | b'_' | b'P' | b'^' => {
                    string_kind = match byte {
                        b']' => SequenceKind::Osc,
                        b'_' => SequenceKind::Apc,
                        b'P' => SequenceKind::Dcs,
                        _ => SequenceKind::Pm,
                    };
                    state = State::ControlString;
                },
                b'(' | b')' => return Some(charset(text)),
                0x40..=0x5F => return Some(make(2, SequenceKind::Fe)),
                b'7' | b'8' | b'=' | b'>' | b'g' => return Some(make(2, SequenceKind::Fp)),
                _ => break,
            },
            State::CsiParam => match byte {
                0x30..=0x3F => {},
                0x20..=0x2F => state = State::CsiIntermediate,
                0x40..=0x7E => return Some(make(i + 1, SequenceKind::Csi)),
                _ => return Some(make(2, SequenceKind::Fe)),
            },
            State::CsiIntermediate => match byte {
                0x20..=0x2F => {},
                0x40..=0x7E => return Some(make(i + 1, SequenceKind::Csi)),
                _ => return Some(make(2, SequenceKind::Fe)),
            },
            State::ControlString => match byte {
                BEL => return Some(make(i + 1, string_kind)),
                ESC => state = State::ControlStringEscape,
                _ => {},
            },
            State::ControlStringEscape => {
                if byte == b'\\' {
                    return Some(make(i + 1, string_kind));
                }
                return Some(make(2, SequenceKind::Fe));
            },
        }
    }

    // Ran out of input, or ESC followed by something unrecognized
    match state {
        State::Escape => Some(make(1, SequenceKind::LoneEscape)),
        _ => Some(make(2, SequenceKind::Fe)),
    }
}

fn charset(text: &str) -> Sequence<'_> {
    // ESC ( or ESC ) then any single character except newline
    match text[2..].chars().next() {
        Some(c) if c != '\n' => Sequence {
            text: &text[..2 + c.len_utf8()],
            kind: SequenceKind::Charset,
        },
        _ => Sequence {
            text: &text[..1],
            kind: SequenceKind::LoneEscape,
        },
    }
}

impl Sequence<'_> {
    /// How this sequence moves the cursor column
    pub fn effect(&self) -> Effect {
        let bytes = self.text.as_bytes();
        match self.kind {
            SequenceKind::Csi => csi_effect(&bytes[2..]),
            // IND, NEL, RI
            SequenceKind::Fe if matches!(bytes[1], b'D' | b'E' | b'M') => Effect::Indeterminate,
            // DECRC
            SequenceKind::Fp if bytes[1] == b'8' => Effect::Indeterminate,
            _ => Effect::None,
        }
    }

    pub fn is_sgr(&self) -> bool {
        self.effect() == Effect::Sgr
    }
}

fn csi_effect(body: &[u8]) -> Effect {
    let Some((&final_byte, params)) = body.split_last() else {
        return Effect::None;
    };
    let digits_only = params.iter().all(u8::is_ascii_digit);
    match final_byte {
        b'C' | b'D' if digits_only => {
            let count = if params.is_empty() {
                1
            } else {
                parse_count(params)
            };
            if final_byte == b'C' {
                Effect::CursorRight(count)
            } else {
                Effect::CursorLeft(count)
            }
        },
        b'm' if params.iter().all(|b| b.is_ascii_digit() || *b == b';') => Effect::Sgr,
        // Cursor addressing, vertical movement, erase, insert/delete, scroll
        b'A' | b'B' | b'E' | b'F' | b'G' | b'H' | b'J' | b'K' | b'L' | b'M' | b'P'
        | b'S' | b'T' | b'X' | b'@' | b'd' | b'f' | b'r'
            if params.iter().all(|b| b.is_ascii_digit() || *b == b';') =>
        {
            Effect::Indeterminate
        },
        // Alternate screen buffer
        b'h' | b'l' if matches!(params, b"?47" | b"?1047" | b"?1049") => Effect::Indeterminate,
        _ => Effect::None,
    }
}

fn parse_count(digits: &[u8]) -> usize {
    digits.iter().fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    })
}

/// A piece of text produced by [`iter_sequences`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Sequence(Sequence<'a>),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Sequence(seq) => seq.text,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Segment::Sequence(_))
    }
}

/// Iterator returned by [`iter_sequences`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        if let Some(seq) = match_sequence(self.rest) {
            self.rest = &self.rest[seq.text.len()..];
            return Some(Segment::Sequence(seq));
        }
        let end = self.rest.find('\x1b').unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Text(text))
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Split `text` into runs of plain text and escape sequences
pub fn iter_sequences(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// Remove every escape sequence from `text`
pub fn strip_sequences(text: &str) -> String {
    iter_sequences(text)
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text),
            Segment::Sequence(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(text: &str) -> (&str, SequenceKind) {
        let seq = match_sequence(text).unwrap();
        (seq.text, seq.kind)
    }

    #[test]
    fn test_csi() {
        assert_eq!(matched("\x1b[31mred"), ("\x1b[31m", SequenceKind::Csi));
        assert_eq!(matched("\x1b[?1049h"), ("\x1b[?1049h", SequenceKind::Csi));
        assert_eq!(matched("\x1b[1 q"), ("\x1b[1 q", SequenceKind::Csi));
        assert_eq!(matched("\x1b[m"), ("\x1b[m", SequenceKind::Csi));
    }

    #[test]
    fn test_incomplete_csi_falls_back_to_fe() {
        assert_eq!(matched("\x1b["), ("\x1b[", SequenceKind::Fe));
        assert_eq!(matched("\x1b[12"), ("\x1b[", SequenceKind::Fe));
        assert_eq!(matched("\x1b[1\x07"), ("\x1b[", SequenceKind::Fe));
    }

    #[test]
    fn test_control_strings() {
        let link = "\x1b]8;;https://example.com\x1b\\";
        assert_eq!(matched(link), (link, SequenceKind::Osc));
        assert_eq!(matched("\x1b]0;title\x07rest"), ("\x1b]0;title\x07", SequenceKind::Osc));
        assert_eq!(matched("\x1b_Gi=1\x1b\\"), ("\x1b_Gi=1\x1b\\", SequenceKind::Apc));
        assert_eq!(matched("\x1bPq#0\x1b\\"), ("\x1bPq#0\x1b\\", SequenceKind::Dcs));
        assert_eq!(matched("\x1b^note\x07"), ("\x1b^note\x07", SequenceKind::Pm));
    }

    #[test]
    fn test_unterminated_string_falls_back_to_fe() {
        assert_eq!(matched("\x1b]0;title"), ("\x1b]", SequenceKind::Fe));
        assert_eq!(matched("\x1b]0;a\x1b[31m"), ("\x1b]", SequenceKind::Fe));
    }

    #[test]
    fn test_short_forms() {
        assert_eq!(matched("\x1b(B"), ("\x1b(B", SequenceKind::Charset));
        assert_eq!(matched("\x1bM"), ("\x1bM", SequenceKind::Fe));
        assert_eq!(matched("\x1b7"), ("\x1b7", SequenceKind::Fp));
        assert_eq!(matched("\x1b="), ("\x1b=", SequenceKind::Fp));
        assert_eq!(matched("\x1b"), ("\x1b", SequenceKind::LoneEscape));
        assert_eq!(matched("\x1b("), ("\x1b", SequenceKind::LoneEscape));
        assert_eq!(matched("\x1b!"), ("\x1b", SequenceKind::LoneEscape));
        assert!(match_sequence("abc").is_none());
    }

    #[test]
    fn test_effects() {
        let effect = |s: &str| match_sequence(s).unwrap().effect();
        assert_eq!(effect("\x1b[C"), Effect::CursorRight(1));
        assert_eq!(effect("\x1b[10C"), Effect::CursorRight(10));
        assert_eq!(effect("\x1b[3D"), Effect::CursorLeft(3));
        assert_eq!(effect("\x1b[1;31m"), Effect::Sgr);
        assert_eq!(effect("\x1b[m"), Effect::Sgr);
        assert_eq!(effect("\x1b[2J"), Effect::Indeterminate);
        assert_eq!(effect("\x1b[5;10H"), Effect::Indeterminate);
        assert_eq!(effect("\x1b[?1049h"), Effect::Indeterminate);
        assert_eq!(effect("\x1b[?25l"), Effect::None);
        assert_eq!(effect("\x1bM"), Effect::Indeterminate);
        assert_eq!(effect("\x1b8"), Effect::Indeterminate);
        assert_eq!(effect("\x1b7"), Effect::None);
        assert_eq!(effect("\x1b]0;t\x07"), Effect::None);
    }

    #[test]
    fn test_iter_sequences() {
        let segments: Vec<(&str, bool)> = iter_sequences("\x1b[31mred\x1b[0m plain")
            .map(|s| (s.as_str(), s.is_sequence()))
            .collect();
        assert_eq!(
            segments,
            vec![
                ("\x1b[31m", true),
                ("red", false),
                ("\x1b[0m", true),
                (" plain", false)
            ]
        );

        let segments: Vec<&str> = iter_sequences("\x1b[1m\x1b[31m").map(|s| s.as_str()).collect();
        assert_eq!(segments, vec!["\x1b[1m", "\x1b[31m"]);
        assert_eq!(iter_sequences("").count(), 0);
    }

    #[test]
    fn test_lone_escape_is_a_sequence() {
        let segments: Vec<Segment> = iter_sequences("a\x1b!b").collect();
        assert_eq!(segments.len(), 3);
        assert!(segments[1].is_sequence());
        assert_eq!(segments[1].as_str(), "\x1b");
        assert_eq!(segments[2].as_str(), "!b");
    }

    #[test]
    fn test_strip_sequences() {
        assert_eq!(strip_sequences("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(
            strip_sequences("\x1b]8;;http://x\x1b\\link\x1b]8;;\x1b\\"),
            "link"
        );
        assert_eq!(strip_sequences("plain"), "plain");
        assert_eq!(strip_sequences("\x1b"), "");
    }
}
