//! Single codepoint classification (`wcwidth`)

use crate::dataset::VersionDataset;
use crate::error::{WidthError, CODEPOINT_LIMIT};

pub const ZWJ: u32 = 0x200D;
pub const VS16: u32 = 0xFE0F;

impl VersionDataset {
    /// Terminal cells for one codepoint: -1, 0, 1 or 2.
    ///
    /// Fails only for values outside the Unicode range.
    pub fn wcwidth(&self, cp: u32) -> Result<i8, WidthError> {
        if cp >= CODEPOINT_LIMIT {
            return Err(WidthError::InvalidCodepoint {
                codepoint: cp,
                index: None,
            });
        }
        Ok(self.classify(cp))
    }

    /// Like [`wcwidth`](Self::wcwidth) for a `char`, which is always in range
    #[inline]
    pub fn char_width(&self, c: char) -> i8 {
        self.classify(c as u32)
    }

    /// Width of an in-range codepoint
    #[inline]
    pub(crate) fn classify(&self, cp: u32) -> i8 {
        // Printable ASCII
        if (0x20..0x7F).contains(&cp) {
            return 1;
        }
        if cp == 0 {
            return 0;
        }
        if cp < 0x20 || (0x7F..0xA0).contains(&cp) {
            return -1;
        }
        if self.zero_width.contains(cp) {
            return 0;
        }
        if self.wide.contains(cp) {
            return 2;
        }
        1
    }

    /// Width with East Asian Ambiguous characters counted as `ambiguous_width`
    pub(crate) fn classify_ambiguous(&self, cp: u32, ambiguous_width: usize) -> i8 {
        let width = self.classify(cp);
        if width == 1 && ambiguous_width == 2 && self.ambiguous.contains(cp) {
            2
        } else {
            width
        }
    }

    pub(crate) fn is_regional_indicator(&self, cp: u32) -> bool {
        self.regional_indicator.contains(cp)
    }

    pub(crate) fn is_emoji_modifier(&self, cp: u32) -> bool {
        self.emoji_modifier.contains(cp)
    }

    pub(crate) fn is_extended_pictographic(&self, cp: u32) -> bool {
        cp >= 0xA9 && self.extended_pictographic.contains(cp)
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::DatasetCollection;

    fn latest() -> &'static crate::dataset::VersionDataset {
        DatasetCollection::builtin().latest()
    }

    #[test]
    fn test_controls() {
        let ds = latest();
        assert_eq!(ds.wcwidth(0x0000), Ok(0));
        for cp in (0x01..0x20).chain(0x7F..0xA0) {
            assert_eq!(ds.wcwidth(cp), Ok(-1), "U+{cp:04X}");
        }
        // NO-BREAK SPACE is printable
        assert_eq!(ds.wcwidth(0x00A0), Ok(1));
    }

    #[test]
    fn test_basic_widths() {
        let ds = latest();
        assert_eq!(ds.wcwidth(0x0041), Ok(1));
        assert_eq!(ds.wcwidth(0x4E2D), Ok(2));
        assert_eq!(ds.wcwidth(0xFF21), Ok(2));
        assert_eq!(ds.wcwidth(0x0301), Ok(0));
        assert_eq!(ds.wcwidth(0x20DD), Ok(0));
        assert_eq!(ds.wcwidth(0x200B), Ok(0));
        assert_eq!(ds.wcwidth(0x2028), Ok(0));
        assert_eq!(ds.wcwidth(0x1160), Ok(0));
        assert_eq!(ds.wcwidth(0x1F600), Ok(2));
    }

    #[test]
    fn test_zero_width_exceptions() {
        let ds = latest();
        // Soft hyphen and prepended concatenation marks stay visible
        assert_eq!(ds.wcwidth(0x00AD), Ok(1));
        assert_eq!(ds.wcwidth(0x0600), Ok(1));
        assert_eq!(ds.wcwidth(0x06DD), Ok(1));
    }

    #[test]
    fn test_spacing_mark_and_virama() {
        let ds = latest();
        assert_eq!(ds.wcwidth(0x093E), Ok(1));
        assert!(ds.spacing_mark.contains(0x093E));
        assert_eq!(ds.wcwidth(0x094D), Ok(0));
        assert!(ds.virama.contains(0x094D));
        assert!(ds.consonant.contains(0x0915));
    }

    #[test]
    fn test_regional_indicator_standalone_wide() {
        let ds = latest();
        assert_eq!(ds.wcwidth(0x1F1FA), Ok(2));
        assert!(ds.is_regional_indicator(0x1F1FA));
        assert_eq!(ds.wcwidth(0x1F3FB), Ok(2));
        assert!(ds.is_emoji_modifier(0x1F3FF));
    }

    #[test]
    fn test_invalid_codepoint() {
        let ds = latest();
        assert_eq!(ds.wcwidth(0x10FFFF), Ok(1));
        assert_eq!(
            ds.wcwidth(0x110000),
            Err(crate::WidthError::InvalidCodepoint {
                codepoint: 0x110000,
                index: None
            })
        );
        assert!(ds.wcwidth(u32::MAX).is_err());
    }

    #[test]
    fn test_version_differences() {
        let builtin = DatasetCollection::builtin();
        let old = builtin.resolve(Some("5.2")).unwrap();
        let new = latest();
        // GRINNING FACE is unassigned in 5.2
        assert_eq!(old.wcwidth(0x1F600), Ok(1));
        assert_eq!(new.wcwidth(0x1F600), Ok(2));
    }

    #[test]
    fn test_reserved_ideographs_are_wide() {
        let ds = latest();
        assert_eq!(ds.wcwidth(0x2FFFD), Ok(2));
        assert_eq!(ds.wcwidth(0x3FFFD), Ok(2));
        // Noncharacters close each plane
        assert_eq!(ds.wcwidth(0x2FFFE), Ok(1));

        let builtin = DatasetCollection::builtin();
        let nine = builtin.resolve(Some("9.0")).unwrap();
        assert_eq!(nine.wcwidth(0x4DB6), Ok(2));
        let thirteen = builtin.resolve(Some("13.0")).unwrap();
        assert_eq!(thirteen.wcwidth(0x9FFD), Ok(2));
        assert_eq!(thirteen.wcwidth(0xFADA), Ok(2));
    }

    #[test]
    fn test_intermediate_releases() {
        let builtin = DatasetCollection::builtin();
        // SLED arrived in 10.0
        let ten = builtin.resolve(Some("10.0")).unwrap();
        assert_eq!(ten.version.as_str(), "10.0.0");
        assert_eq!(ten.wcwidth(0x1F6F7), Ok(2));
        assert_eq!(builtin.resolve(Some("9.0")).unwrap().wcwidth(0x1F6F7), Ok(1));
        // Emoji became wide in 9.0
        let six = builtin.resolve(Some("6.1")).unwrap();
        assert_eq!(six.version.as_str(), "6.1.0");
        assert_eq!(six.wcwidth(0x1F600), Ok(1));
        assert!(six.vs16.is_empty());
    }

    #[test]
    fn test_ambiguous() {
        let ds = latest();
        assert_eq!(ds.classify_ambiguous(0x00B1, 1), 1);
        assert_eq!(ds.classify_ambiguous(0x00B1, 2), 2);
        assert_eq!(ds.classify_ambiguous(0x0041, 2), 1);
    }
}
