//! Builtin property tables, one module per Unicode release.
//!
//! The release modules hold flat, sorted `(lo, hi)` arrays produced by the
//! offline table generator. The emoji tables below are shared by every
//! release because their assignments only ever grow.

mod unicode_4_1_0;
mod unicode_5_0_0;
mod unicode_5_1_0;
mod unicode_5_2_0;
mod unicode_6_0_0;
mod unicode_6_1_0;
mod unicode_6_2_0;
mod unicode_6_3_0;
mod unicode_7_0_0;
mod unicode_8_0_0;
mod unicode_9_0_0;
mod unicode_10_0_0;
mod unicode_11_0_0;
mod unicode_12_0_0;
mod unicode_12_1_0;
mod unicode_13_0_0;
mod unicode_14_0_0;
mod unicode_15_0_0;
mod unicode_15_1_0;

use crate::table::Range;

pub(crate) const fn r(lo: u32, hi: u32) -> Range {
    Range::new(lo, hi)
}

/// Borrowed category tables for one release.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableSet {
    pub version: &'static str,
    pub zero_width: &'static [Range],
    pub wide: &'static [Range],
    pub ambiguous: &'static [Range],
    pub spacing_mark: &'static [Range],
    pub combining: &'static [Range],
    pub virama: &'static [Range],
    pub consonant: &'static [Range],
    pub vs16: &'static [Range],
}

/// Builtin releases, oldest first.
pub(crate) const BUILTIN: &[TableSet] = &[
    unicode_4_1_0::TABLES,
    unicode_5_0_0::TABLES,
    unicode_5_1_0::TABLES,
    unicode_5_2_0::TABLES,
    unicode_6_0_0::TABLES,
    unicode_6_1_0::TABLES,
    unicode_6_2_0::TABLES,
    unicode_6_3_0::TABLES,
    unicode_7_0_0::TABLES,
    unicode_8_0_0::TABLES,
    unicode_9_0_0::TABLES,
    unicode_10_0_0::TABLES,
    unicode_11_0_0::TABLES,
    unicode_12_0_0::TABLES,
    unicode_12_1_0::TABLES,
    unicode_13_0_0::TABLES,
    unicode_14_0_0::TABLES,
    unicode_15_0_0::TABLES,
    unicode_15_1_0::TABLES,
];

pub(crate) const REGIONAL_INDICATOR: &[Range] = &[r(0x1F1E6, 0x1F1FF)];

pub(crate) const EMOJI_MODIFIER: &[Range] = &[r(0x1F3FB, 0x1F3FF)];

/// Extended_Pictographic, from emoji-data.txt.
pub(crate) const EXTENDED_PICTOGRAPHIC: &[Range] = &[
    r(0x00A9, 0x00A9), r(0x00AE, 0x00AE), r(0x203C, 0x203C), r(0x2049, 0x2049),
    r(0x2122, 0x2122), r(0x2139, 0x2139), r(0x2194, 0x2199), r(0x21A9, 0x21AA),
    r(0x231A, 0x231B), r(0x2328, 0x2328), r(0x23CF, 0x23CF), r(0x23E9, 0x23F3),
    r(0x23F8, 0x23FA), r(0x24C2, 0x24C2), r(0x25AA, 0x25AB), r(0x25B6, 0x25B6),
    r(0x25C0, 0x25C0), r(0x25FB, 0x25FE), r(0x2600, 0x2604), r(0x260E, 0x260E),
    r(0x2611, 0x2611), r(0x2614, 0x2615), r(0x2618, 0x2618), r(0x261D, 0x261D),
    r(0x2620, 0x2620), r(0x2622, 0x2623), r(0x2626, 0x2626), r(0x262A, 0x262A),
    r(0x262E, 0x262F), r(0x2638, 0x263A), r(0x2640, 0x2640), r(0x2642, 0x2642),
    r(0x2648, 0x2653), r(0x265F, 0x2660), r(0x2663, 0x2663), r(0x2665, 0x2666),
    r(0x2668, 0x2668), r(0x267B, 0x267B), r(0x267E, 0x267F), r(0x2692, 0x2697),
    r(0x2699, 0x2699), r(0x269B, 0x269C), r(0x26A0, 0x26A1), r(0x26A7, 0x26A7),
    r(0x26AA, 0x26AB), r(0x26B0, 0x26B1), r(0x26BD, 0x26BE), r(0x26C4, 0x26C5),
    r(0x26C8, 0x26C8), r(0x26CE, 0x26CF), r(0x26D1, 0x26D1), r(0x26D3, 0x26D4),
    r(0x26E9, 0x26EA), r(0x26F0, 0x26F5), r(0x26F7, 0x26FA), r(0x26FD, 0x26FD),
    r(0x2702, 0x2702), r(0x2705, 0x2705), r(0x2708, 0x270D), r(0x270F, 0x270F),
    r(0x2712, 0x2712), r(0x2714, 0x2714), r(0x2716, 0x2716), r(0x271D, 0x271D),
    r(0x2721, 0x2721), r(0x2728, 0x2728), r(0x2733, 0x2734), r(0x2744, 0x2744),
    r(0x2747, 0x2747), r(0x274C, 0x274C), r(0x274E, 0x274E), r(0x2753, 0x2755),
    r(0x2757, 0x2757), r(0x2763, 0x2764), r(0x2795, 0x2797), r(0x27A1, 0x27A1),
    r(0x27B0, 0x27B0), r(0x27BF, 0x27BF), r(0x2934, 0x2935), r(0x2B05, 0x2B07),
    r(0x2B1B, 0x2B1C), r(0x2B50, 0x2B50), r(0x2B55, 0x2B55), r(0x3030, 0x3030),
    r(0x303D, 0x303D), r(0x3297, 0x3297), r(0x3299, 0x3299), r(0x1F004, 0x1F004),
    r(0x1F02C, 0x1F02F), r(0x1F094, 0x1F09F), r(0x1F0AF, 0x1F0B0), r(0x1F0C0, 0x1F0C0),
    r(0x1F0CF, 0x1F0D0), r(0x1F0F6, 0x1F0FF), r(0x1F170, 0x1F171), r(0x1F17E, 0x1F17F),
    r(0x1F18E, 0x1F18E), r(0x1F191, 0x1F19A), r(0x1F1AE, 0x1F1E5), r(0x1F201, 0x1F20F),
    r(0x1F21A, 0x1F21A), r(0x1F22F, 0x1F22F), r(0x1F232, 0x1F23A), r(0x1F23C, 0x1F23F),
    r(0x1F249, 0x1F25F), r(0x1F266, 0x1F321), r(0x1F324, 0x1F393), r(0x1F396, 0x1F397),
    r(0x1F399, 0x1F39B), r(0x1F39E, 0x1F3F0), r(0x1F3F3, 0x1F3F5), r(0x1F3F7, 0x1F3FA),
    r(0x1F400, 0x1F4FD), r(0x1F4FF, 0x1F53D), r(0x1F549, 0x1F54E), r(0x1F550, 0x1F567),
    r(0x1F56F, 0x1F570), r(0x1F573, 0x1F57A), r(0x1F587, 0x1F587), r(0x1F58A, 0x1F58D),
    r(0x1F590, 0x1F590), r(0x1F595, 0x1F596), r(0x1F5A4, 0x1F5A5), r(0x1F5A8, 0x1F5A8),
    r(0x1F5B1, 0x1F5B2), r(0x1F5BC, 0x1F5BC), r(0x1F5C2, 0x1F5C4), r(0x1F5D1, 0x1F5D3),
    r(0x1F5DC, 0x1F5DE), r(0x1F5E1, 0x1F5E1), r(0x1F5E3, 0x1F5E3), r(0x1F5E8, 0x1F5E8),
    r(0x1F5EF, 0x1F5EF), r(0x1F5F3, 0x1F5F3), r(0x1F5FA, 0x1F64F), r(0x1F680, 0x1F6C5),
    r(0x1F6CB, 0x1F6D2), r(0x1F6D5, 0x1F6E5), r(0x1F6E9, 0x1F6E9), r(0x1F6EB, 0x1F6F0),
    r(0x1F6F3, 0x1F6FF), r(0x1F7DA, 0x1F7FF), r(0x1F80C, 0x1F80F), r(0x1F848, 0x1F84F),
    r(0x1F85A, 0x1F85F), r(0x1F888, 0x1F88F), r(0x1F8AE, 0x1F8AF), r(0x1F8BC, 0x1F8BF),
    r(0x1F8C2, 0x1F8CF), r(0x1F8D9, 0x1F8FF), r(0x1F90C, 0x1F93A), r(0x1F93C, 0x1F945),
    r(0x1F947, 0x1F9FF), r(0x1FA58, 0x1FA5F), r(0x1FA6E, 0x1FAFF), r(0x1FC00, 0x1FFFD),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(name: &str, table: &[Range]) {
        for pair in table.windows(2) {
            assert!(pair[0].lo <= pair[0].hi, "{name}: inverted range {:?}", pair[0]);
            assert!(pair[0].hi < pair[1].lo, "{name}: overlap at {:?}", pair[1]);
        }
    }

    #[test]
    fn test_builtin_tables_sorted_and_disjoint() {
        for set in BUILTIN {
            assert_sorted(set.version, set.zero_width);
            assert_sorted(set.version, set.wide);
            assert_sorted(set.version, set.ambiguous);
            assert_sorted(set.version, set.spacing_mark);
            assert_sorted(set.version, set.combining);
            assert_sorted(set.version, set.virama);
            assert_sorted(set.version, set.consonant);
            assert_sorted(set.version, set.vs16);
        }
        assert_sorted("extended_pictographic", EXTENDED_PICTOGRAPHIC);
    }

    #[test]
    fn test_builtin_versions_ascending() {
        let versions: Vec<&str> = BUILTIN.iter().map(|s| s.version).collect();
        assert_eq!(versions.first(), Some(&"4.1.0"));
        assert_eq!(versions.last(), Some(&"15.1.0"));
        assert_eq!(versions.len(), 19);
    }

    #[test]
    fn test_vs16_empty_before_emoji_presentation() {
        for set in BUILTIN {
            let major: u32 = set.version.split('.').next().unwrap().parse().unwrap();
            assert_eq!(set.vs16.is_empty(), major < 9, "{}", set.version);
        }
    }
}
