//! SGR (Select Graphic Rendition) state
//!
//! Tracks which text attributes and colors a stream of SGR sequences leaves
//! active, so lines cut out of styled text can be made self contained.

use serde::{Deserialize, Serialize};

use crate::sequences::{iter_sequences, Segment};

pub const SGR_RESET: &str = "\x1b[0m";

/// Color as the SGR parameters that selected it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SgrColor {
    /// Basic or bright color code (30-37, 90-97, 40-47, 100-107)
    Named(u32),
    /// 256-color palette entry (`38;5;n`)
    Indexed(u32),
    /// 24-bit color (`38;2;r;g;b`)
    Rgb(u32, u32, u32),
}

impl SgrColor {
    fn push_params(&self, base: u32, params: &mut Vec<String>) {
        match *self {
            SgrColor::Named(code) => params.push(code.to_string()),
            SgrColor::Indexed(n) => params.push(format!("{base};5;{n}")),
            SgrColor::Rgb(r, g, b) => params.push(format!("{base};2;{r};{g};{b}")),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

/// Active attributes after some SGR sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SgrState {
    pub style: Style,
    pub foreground: Option<SgrColor>,
    pub background: Option<SgrColor>,
}

impl SgrState {
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply one SGR sequence such as `"\x1b[1;31m"`.
    ///
    /// Anything that is not an SGR sequence is ignored.
    pub fn update(&mut self, sequence: &str) {
        let Some(params) = parse_params(sequence) else {
            return;
        };
        let mut params = params.into_iter();
        while let Some(p) = params.next() {
            match p {
                0 => self.reset(),
                1 => self.style.bold = true,
                2 => self.style.dim = true,
                3 => self.style.italic = true,
                4 => self.style.underline = true,
                5 => self.style.blink = true,
                7 => self.style.inverse = true,
                8 => self.style.hidden = true,
                9 => self.style.strikethrough = true,
                22 => {
                    self.style.bold = false;
                    self.style.dim = false;
                },
                23 => self.style.italic = false,
                24 => self.style.underline = false,
                25 => self.style.blink = false,
                27 => self.style.inverse = false,
                28 => self.style.hidden = false,
                29 => self.style.strikethrough = false,
                30..=37 | 90..=97 => self.foreground = Some(SgrColor::Named(p)),
                40..=47 | 100..=107 => self.background = Some(SgrColor::Named(p)),
                39 => self.foreground = None,
                49 => self.background = None,
                38 => {
                    if let Some(color) = extended_color(&mut params) {
                        self.foreground = Some(color);
                    }
                },
                48 => {
                    if let Some(color) = extended_color(&mut params) {
                        self.background = Some(color);
                    }
                },
                _ => {},
            }
        }
    }

    /// Shortest sequence that restores this state from a reset, or `""`
    pub fn to_sequence(&self) -> String {
        if !self.is_active() {
            return String::new();
        }
        let style = &self.style;
        let mut params: Vec<String> = [
            (style.bold, "1"),
            (style.dim, "2"),
            (style.italic, "3"),
            (style.underline, "4"),
            (style.blink, "5"),
            (style.inverse, "7"),
            (style.hidden, "8"),
            (style.strikethrough, "9"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, code)| code.to_string())
        .collect();
        if let Some(color) = &self.foreground {
            color.push_params(38, &mut params);
        }
        if let Some(color) = &self.background {
            color.push_params(48, &mut params);
        }
        format!("\x1b[{}m", params.join(";"))
    }
}

/// Parameters of `ESC [ digits-and-semicolons m`; empty means reset
fn parse_params(sequence: &str) -> Option<Vec<u32>> {
    let body = sequence.strip_prefix("\x1b[")?.strip_suffix('m')?;
    if !body.bytes().all(|b| b.is_ascii_digit() || b == b';') {
        return None;
    }
    if body.is_empty() {
        return Some(vec![0]);
    }
    Some(
        body.split(';')
            .map(|p| {
                p.bytes().fold(0u32, |acc, d| {
                    acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
                })
            })
            .collect(),
    )
}

/// Rest of a `38`/`48` color; `None` if the parameters run out
fn extended_color(params: &mut impl Iterator<Item = u32>) -> Option<SgrColor> {
    match params.next()? {
        5 => Some(SgrColor::Indexed(params.next()?)),
        2 => {
            let r = params.next()?;
            let g = params.next()?;
            let b = params.next()?;
            Some(SgrColor::Rgb(r, g, b))
        },
        _ => None,
    }
}

fn sgr_sequences(line: &str) -> impl Iterator<Item = &str> {
    iter_sequences(line).filter_map(|segment| match segment {
        Segment::Sequence(seq) if seq.is_sgr() => Some(seq.text),
        _ => None,
    })
}

/// Make every line carry its own styling.
///
/// Each line is prefixed with the style left active by the lines before it
/// and ends with a reset when a style is still active at its end. Lines
/// without any SGR sequence are returned unchanged.
pub fn propagate_sgr<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    if !lines
        .iter()
        .any(|line| sgr_sequences(line.as_ref()).next().is_some())
    {
        return lines.iter().map(|line| line.as_ref().to_string()).collect();
    }

    let mut state = SgrState::default();
    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        let mut output = state.to_sequence();
        for sequence in sgr_sequences(line) {
            state.update(sequence);
        }
        output.push_str(line);
        if state.is_active() {
            output.push_str(SGR_RESET);
        }
        result.push(output);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(sequences: &[&str]) -> SgrState {
        let mut state = SgrState::default();
        for seq in sequences {
            state.update(seq);
        }
        state
    }

    #[test]
    fn test_attributes() {
        let state = state_after(&["\x1b[1;3;4m"]);
        assert!(state.style.bold && state.style.italic && state.style.underline);
        assert_eq!(state.to_sequence(), "\x1b[1;3;4m");

        let state = state_after(&["\x1b[1;2m", "\x1b[22m"]);
        assert!(!state.is_active());

        let state = state_after(&["\x1b[3;9m", "\x1b[23m"]);
        assert_eq!(state.to_sequence(), "\x1b[9m");
    }

    #[test]
    fn test_colors() {
        let state = state_after(&["\x1b[31m", "\x1b[44m"]);
        assert_eq!(state.to_sequence(), "\x1b[31;44m");

        let state = state_after(&["\x1b[38;5;208m"]);
        assert_eq!(state.foreground, Some(SgrColor::Indexed(208)));
        assert_eq!(state.to_sequence(), "\x1b[38;5;208m");

        let state = state_after(&["\x1b[48;2;10;20;30m"]);
        assert_eq!(state.to_sequence(), "\x1b[48;2;10;20;30m");

        // Newest color wins
        let state = state_after(&["\x1b[31m", "\x1b[38;5;1m", "\x1b[92m"]);
        assert_eq!(state.foreground, Some(SgrColor::Named(92)));

        let state = state_after(&["\x1b[31;41m", "\x1b[39m"]);
        assert_eq!(state.to_sequence(), "\x1b[41m");
    }

    #[test]
    fn test_malformed_extended_color_ignored() {
        let state = state_after(&["\x1b[31m", "\x1b[38;5m"]);
        assert_eq!(state.foreground, Some(SgrColor::Named(31)));
        let state = state_after(&["\x1b[38;2;1;2m"]);
        assert!(!state.is_active());
    }

    #[test]
    fn test_reset_forms() {
        assert!(!state_after(&["\x1b[1;31m", "\x1b[0m"]).is_active());
        assert!(!state_after(&["\x1b[1;31m", "\x1b[m"]).is_active());
        // Reset in the middle of a compound sequence
        assert_eq!(state_after(&["\x1b[1;0;4m"]).to_sequence(), "\x1b[4m");
    }

    #[test]
    fn test_non_sgr_ignored() {
        assert!(!state_after(&["\x1b[2J", "\x1b]0;x\x07", "plain"]).is_active());
    }

    #[test]
    fn test_propagate_basic() {
        assert_eq!(
            propagate_sgr(&["\x1b[31mhello", "world\x1b[0m"]),
            vec!["\x1b[31mhello\x1b[0m", "\x1b[31mworld\x1b[0m"]
        );
    }

    #[test]
    fn test_propagate_without_sgr_unchanged() {
        let lines = ["plain", "\x1b]8;;http://x\x1b\\link"];
        assert_eq!(propagate_sgr(&lines), lines.to_vec());
        assert!(propagate_sgr::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_propagate_reset_mid_line() {
        assert_eq!(
            propagate_sgr(&["\x1b[1mbold\x1b[0m plain", "next"]),
            vec!["\x1b[1mbold\x1b[0m plain", "next"]
        );
    }

    #[test]
    fn test_propagate_accumulates() {
        assert_eq!(
            propagate_sgr(&["\x1b[1ma", "\x1b[34mb", "c"]),
            vec!["\x1b[1ma\x1b[0m", "\x1b[1m\x1b[34mb\x1b[0m", "\x1b[1;34mc\x1b[0m"]
        );
    }
}
