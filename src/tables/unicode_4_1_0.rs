//! Unicode 4.1.0 property tables.
//!
//! Generated offline from the Unicode Character Database. Do not edit.

use super::{r, TableSet};
use crate::table::Range;

pub(crate) const TABLES: TableSet = TableSet {
    version: "4.1.0",
    zero_width: ZERO_WIDTH,
    wide: WIDE,
    ambiguous: AMBIGUOUS,
    spacing_mark: SPACING_MARK,
    combining: COMBINING,
    virama: VIRAMA,
    consonant: CONSONANT,
    vs16: VS16,
};

const ZERO_WIDTH: &[Range] = &[
    r(0x0300, 0x036F), r(0x0483, 0x0486), r(0x0488, 0x0489), r(0x0591, 0x05B9),
    r(0x05BB, 0x05BD), r(0x05BF, 0x05BF), r(0x05C1, 0x05C2), r(0x05C4, 0x05C5),
    r(0x05C7, 0x05C7), r(0x0610, 0x0615), r(0x064B, 0x065E), r(0x0670, 0x0670),
    r(0x06D6, 0x06DC), r(0x06DE, 0x06E4), r(0x06E7, 0x06E8), r(0x06EA, 0x06ED),
    r(0x0711, 0x0711), r(0x0730, 0x074A), r(0x07A6, 0x07B0), r(0x0901, 0x0902),
    r(0x093C, 0x093C), r(0x0941, 0x0948), r(0x094D, 0x094D), r(0x0951, 0x0954),
    r(0x0962, 0x0963), r(0x0981, 0x0981), r(0x09BC, 0x09BC), r(0x09C1, 0x09C4),
    r(0x09CD, 0x09CD), r(0x09E2, 0x09E3), r(0x0A01, 0x0A02), r(0x0A3C, 0x0A3C),
    r(0x0A41, 0x0A42), r(0x0A47, 0x0A48), r(0x0A4B, 0x0A4D), r(0x0A70, 0x0A71),
    r(0x0A81, 0x0A82), r(0x0ABC, 0x0ABC), r(0x0AC1, 0x0AC5), r(0x0AC7, 0x0AC8),
    r(0x0ACD, 0x0ACD), r(0x0AE2, 0x0AE3), r(0x0B01, 0x0B01), r(0x0B3C, 0x0B3C),
    r(0x0B3F, 0x0B3F), r(0x0B41, 0x0B43), r(0x0B4D, 0x0B4D), r(0x0B56, 0x0B56),
    r(0x0B82, 0x0B82), r(0x0BC0, 0x0BC0), r(0x0BCD, 0x0BCD), r(0x0C3E, 0x0C40),
    r(0x0C46, 0x0C48), r(0x0C4A, 0x0C4D), r(0x0C55, 0x0C56), r(0x0CBC, 0x0CBC),
    r(0x0CBF, 0x0CBF), r(0x0CC6, 0x0CC6), r(0x0CCC, 0x0CCD), r(0x0D41, 0x0D43),
    r(0x0D4D, 0x0D4D), r(0x0DCA, 0x0DCA), r(0x0DD2, 0x0DD4), r(0x0DD6, 0x0DD6),
    r(0x0E31, 0x0E31), r(0x0E34, 0x0E3A), r(0x0E47, 0x0E4E), r(0x0EB1, 0x0EB1),
    r(0x0EB4, 0x0EB9), r(0x0EBB, 0x0EBC), r(0x0EC8, 0x0ECD), r(0x0F18, 0x0F19),
    r(0x0F35, 0x0F35), r(0x0F37, 0x0F37), r(0x0F39, 0x0F39), r(0x0F71, 0x0F7E),
    r(0x0F80, 0x0F84), r(0x0F86, 0x0F87), r(0x0F90, 0x0F97), r(0x0F99, 0x0FBC),
    r(0x0FC6, 0x0FC6), r(0x102D, 0x1030), r(0x1032, 0x1032), r(0x1036, 0x1037),
    r(0x1039, 0x1039), r(0x1058, 0x1059), r(0x1160, 0x11A2), r(0x11A8, 0x11F9),
    r(0x135F, 0x135F), r(0x1712, 0x1714), r(0x1732, 0x1734), r(0x1752, 0x1753),
    r(0x1772, 0x1773), r(0x17B4, 0x17B5), r(0x17B7, 0x17BD), r(0x17C6, 0x17C6),
    r(0x17C9, 0x17D3), r(0x17DD, 0x17DD), r(0x180B, 0x180D), r(0x18A9, 0x18A9),
    r(0x1920, 0x1922), r(0x1927, 0x1928), r(0x1932, 0x1932), r(0x1939, 0x193B),
    r(0x1A17, 0x1A18), r(0x1DC0, 0x1DC3), r(0x200B, 0x200F), r(0x2028, 0x202E),
    r(0x2060, 0x2063), r(0x206A, 0x206F), r(0x20D0, 0x20EB), r(0x302A, 0x302F),
    r(0x3099, 0x309A), r(0xA802, 0xA802), r(0xA806, 0xA806), r(0xA80B, 0xA80B),
    r(0xA825, 0xA826), r(0xFB1E, 0xFB1E), r(0xFE00, 0xFE0F), r(0xFE20, 0xFE23),
    r(0xFEFF, 0xFEFF), r(0xFFF9, 0xFFFB), r(0x10A01, 0x10A03), r(0x10A05, 0x10A06),
    r(0x10A0C, 0x10A0F), r(0x10A38, 0x10A3A), r(0x10A3F, 0x10A3F), r(0x1D167, 0x1D169),
    r(0x1D173, 0x1D182), r(0x1D185, 0x1D18B), r(0x1D1AA, 0x1D1AD), r(0x1D242, 0x1D244),
    r(0xE0001, 0xE0001), r(0xE0020, 0xE007F), r(0xE0100, 0xE01EF),
];
const WIDE: &[Range] = &[
    r(0x1100, 0x1159), r(0x115F, 0x115F), r(0x2329, 0x232A), r(0x2E80, 0x2E99),
    r(0x2E9B, 0x2EF3), r(0x2F00, 0x2FD5), r(0x2FF0, 0x2FFB), r(0x3000, 0x3029),
    r(0x3030, 0x303E), r(0x3041, 0x3096), r(0x309B, 0x30FF), r(0x3105, 0x312C),
    r(0x3131, 0x318E), r(0x3190, 0x31B7), r(0x31C0, 0x31CF), r(0x31F0, 0x321E),
    r(0x3220, 0x3243), r(0x3250, 0x32FE), r(0x3300, 0x4DB5), r(0x4E00, 0x9FBB),
    r(0xA000, 0xA48C), r(0xA490, 0xA4C6), r(0xAC00, 0xD7A3), r(0xF900, 0xFA2D),
    r(0xFA30, 0xFA6A), r(0xFA70, 0xFAD9), r(0xFE10, 0xFE19), r(0xFE30, 0xFE52),
    r(0xFE54, 0xFE66), r(0xFE68, 0xFE6B), r(0xFF01, 0xFF60), r(0xFFE0, 0xFFE6),
    r(0x20000, 0x2FFFD), r(0x30000, 0x3FFFD),
];
const AMBIGUOUS: &[Range] = &[
    r(0x00A1, 0x00A1), r(0x00A4, 0x00A4), r(0x00A7, 0x00A8), r(0x00AA, 0x00AA),
    r(0x00AD, 0x00AE), r(0x00B0, 0x00B4), r(0x00B6, 0x00BA), r(0x00BC, 0x00BF),
    r(0x00C6, 0x00C6), r(0x00D0, 0x00D0), r(0x00D7, 0x00D8), r(0x00DE, 0x00E1),
    r(0x00E6, 0x00E6), r(0x00E8, 0x00EA), r(0x00EC, 0x00ED), r(0x00F0, 0x00F0),
    r(0x00F2, 0x00F3), r(0x00F7, 0x00FA), r(0x00FC, 0x00FC), r(0x00FE, 0x00FE),
    r(0x0101, 0x0101), r(0x0111, 0x0111), r(0x0113, 0x0113), r(0x011B, 0x011B),
    r(0x0126, 0x0127), r(0x012B, 0x012B), r(0x0131, 0x0133), r(0x0138, 0x0138),
    r(0x013F, 0x0142), r(0x0144, 0x0144), r(0x0148, 0x014B), r(0x014D, 0x014D),
    r(0x0152, 0x0153), r(0x0166, 0x0167), r(0x016B, 0x016B), r(0x01CE, 0x01CE),
    r(0x01D0, 0x01D0), r(0x01D2, 0x01D2), r(0x01D4, 0x01D4), r(0x01D6, 0x01D6),
    r(0x01D8, 0x01D8), r(0x01DA, 0x01DA), r(0x01DC, 0x01DC), r(0x0251, 0x0251),
    r(0x0261, 0x0261), r(0x02C4, 0x02C4), r(0x02C7, 0x02C7), r(0x02C9, 0x02CB),
    r(0x02CD, 0x02CD), r(0x02D0, 0x02D0), r(0x02D8, 0x02DB), r(0x02DD, 0x02DD),
    r(0x02DF, 0x02DF), r(0x0391, 0x03A1), r(0x03A3, 0x03A9), r(0x03B1, 0x03C1),
    r(0x03C3, 0x03C9), r(0x0401, 0x0401), r(0x0410, 0x044F), r(0x0451, 0x0451),
    r(0x2010, 0x2010), r(0x2013, 0x2016), r(0x2018, 0x2019), r(0x201C, 0x201D),
    r(0x2020, 0x2022), r(0x2024, 0x2027), r(0x2030, 0x2030), r(0x2032, 0x2033),
    r(0x2035, 0x2035), r(0x203B, 0x203B), r(0x203E, 0x203E), r(0x2074, 0x2074),
    r(0x207F, 0x207F), r(0x2081, 0x2084), r(0x20AC, 0x20AC), r(0x2103, 0x2103),
    r(0x2105, 0x2105), r(0x2109, 0x2109), r(0x2113, 0x2113), r(0x2116, 0x2116),
    r(0x2121, 0x2122), r(0x2126, 0x2126), r(0x212B, 0x212B), r(0x2153, 0x2154),
    r(0x215B, 0x215E), r(0x2160, 0x216B), r(0x2170, 0x2179), r(0x2190, 0x2199),
    r(0x21B8, 0x21B9), r(0x21D2, 0x21D2), r(0x21D4, 0x21D4), r(0x21E7, 0x21E7),
    r(0x2200, 0x2200), r(0x2202, 0x2203), r(0x2207, 0x2208), r(0x220B, 0x220B),
    r(0x220F, 0x220F), r(0x2211, 0x2211), r(0x2215, 0x2215), r(0x221A, 0x221A),
    r(0x221D, 0x2220), r(0x2223, 0x2223), r(0x2225, 0x2225), r(0x2227, 0x222C),
    r(0x222E, 0x222E), r(0x2234, 0x2237), r(0x223C, 0x223D), r(0x2248, 0x2248),
    r(0x224C, 0x224C), r(0x2252, 0x2252), r(0x2260, 0x2261), r(0x2264, 0x2267),
    r(0x226A, 0x226B), r(0x226E, 0x226F), r(0x2282, 0x2283), r(0x2286, 0x2287),
    r(0x2295, 0x2295), r(0x2299, 0x2299), r(0x22A5, 0x22A5), r(0x22BF, 0x22BF),
    r(0x2312, 0x2312), r(0x2460, 0x24E9), r(0x24EB, 0x254B), r(0x2550, 0x2573),
    r(0x2580, 0x258F), r(0x2592, 0x2595), r(0x25A0, 0x25A1), r(0x25A3, 0x25A9),
    r(0x25B2, 0x25B3), r(0x25B6, 0x25B7), r(0x25BC, 0x25BD), r(0x25C0, 0x25C1),
    r(0x25C6, 0x25C8), r(0x25CB, 0x25CB), r(0x25CE, 0x25D1), r(0x25E2, 0x25E5),
    r(0x25EF, 0x25EF), r(0x2605, 0x2606), r(0x2609, 0x2609), r(0x260E, 0x260F),
    r(0x2614, 0x2615), r(0x261C, 0x261C), r(0x261E, 0x261E), r(0x2640, 0x2640),
    r(0x2642, 0x2642), r(0x2660, 0x2661), r(0x2663, 0x2665), r(0x2667, 0x266A),
    r(0x266C, 0x266D), r(0x266F, 0x266F), r(0x273D, 0x273D), r(0x2776, 0x277F),
    r(0xE000, 0xF8FF), r(0xFFFD, 0xFFFD), r(0xF0000, 0xFFFFD), r(0x100000, 0x10FFFD),
];
const SPACING_MARK: &[Range] = &[
    r(0x0903, 0x0903), r(0x093E, 0x0940), r(0x0949, 0x094C), r(0x0982, 0x0983),
    r(0x09BE, 0x09C0), r(0x09C7, 0x09C8), r(0x09CB, 0x09CC), r(0x09D7, 0x09D7),
    r(0x0A03, 0x0A03), r(0x0A3E, 0x0A40), r(0x0A83, 0x0A83), r(0x0ABE, 0x0AC0),
    r(0x0AC9, 0x0AC9), r(0x0ACB, 0x0ACC), r(0x0B02, 0x0B03), r(0x0B3E, 0x0B3E),
    r(0x0B40, 0x0B40), r(0x0B47, 0x0B48), r(0x0B4B, 0x0B4C), r(0x0B57, 0x0B57),
    r(0x0BBE, 0x0BBF), r(0x0BC1, 0x0BC2), r(0x0BC6, 0x0BC8), r(0x0BCA, 0x0BCC),
    r(0x0BD7, 0x0BD7), r(0x0C01, 0x0C03), r(0x0C41, 0x0C44), r(0x0C82, 0x0C83),
    r(0x0CBE, 0x0CBE), r(0x0CC0, 0x0CC4), r(0x0CC7, 0x0CC8), r(0x0CCA, 0x0CCB),
    r(0x0CD5, 0x0CD6), r(0x0D02, 0x0D03), r(0x0D3E, 0x0D40), r(0x0D46, 0x0D48),
    r(0x0D4A, 0x0D4C), r(0x0D57, 0x0D57), r(0x0D82, 0x0D83), r(0x0DCF, 0x0DD1),
    r(0x0DD8, 0x0DDF), r(0x0DF2, 0x0DF3), r(0x0F3E, 0x0F3F), r(0x0F7F, 0x0F7F),
    r(0x102C, 0x102C), r(0x1031, 0x1031), r(0x1038, 0x1038), r(0x1056, 0x1057),
    r(0x17B6, 0x17B6), r(0x17BE, 0x17C5), r(0x17C7, 0x17C8), r(0x1923, 0x1926),
    r(0x1929, 0x192B), r(0x1930, 0x1931), r(0x1933, 0x1938), r(0x19B0, 0x19C0),
    r(0x19C8, 0x19C9), r(0x1A19, 0x1A1B), r(0xA823, 0xA824), r(0xA827, 0xA827),
    r(0x1D165, 0x1D166), r(0x1D16D, 0x1D172),
];
const COMBINING: &[Range] = &[
    r(0x0300, 0x036F), r(0x0483, 0x0486), r(0x0488, 0x0489), r(0x0591, 0x05B9),
    r(0x05BB, 0x05BD), r(0x05BF, 0x05BF), r(0x05C1, 0x05C2), r(0x05C4, 0x05C5),
    r(0x05C7, 0x05C7), r(0x0610, 0x0615), r(0x064B, 0x065E), r(0x0670, 0x0670),
    r(0x06D6, 0x06DC), r(0x06DE, 0x06E4), r(0x06E7, 0x06E8), r(0x06EA, 0x06ED),
    r(0x0711, 0x0711), r(0x0730, 0x074A), r(0x07A6, 0x07B0), r(0x0901, 0x0902),
    r(0x093C, 0x093C), r(0x0941, 0x0948), r(0x094D, 0x094D), r(0x0951, 0x0954),
    r(0x0962, 0x0963), r(0x0981, 0x0981), r(0x09BC, 0x09BC), r(0x09BE, 0x09BE),
    r(0x09C1, 0x09C4), r(0x09CD, 0x09CD), r(0x09D7, 0x09D7), r(0x09E2, 0x09E3),
    r(0x0A01, 0x0A02), r(0x0A3C, 0x0A3C), r(0x0A41, 0x0A42), r(0x0A47, 0x0A48),
    r(0x0A4B, 0x0A4D), r(0x0A70, 0x0A71), r(0x0A81, 0x0A82), r(0x0ABC, 0x0ABC),
    r(0x0AC1, 0x0AC5), r(0x0AC7, 0x0AC8), r(0x0ACD, 0x0ACD), r(0x0AE2, 0x0AE3),
    r(0x0B01, 0x0B01), r(0x0B3C, 0x0B3C), r(0x0B3E, 0x0B3F), r(0x0B41, 0x0B43),
    r(0x0B4D, 0x0B4D), r(0x0B56, 0x0B57), r(0x0B82, 0x0B82), r(0x0BBE, 0x0BBE),
    r(0x0BC0, 0x0BC0), r(0x0BCD, 0x0BCD), r(0x0BD7, 0x0BD7), r(0x0C3E, 0x0C40),
    r(0x0C46, 0x0C48), r(0x0C4A, 0x0C4D), r(0x0C55, 0x0C56), r(0x0CBC, 0x0CBC),
    r(0x0CBF, 0x0CBF), r(0x0CC2, 0x0CC2), r(0x0CC6, 0x0CC6), r(0x0CCC, 0x0CCD),
    r(0x0CD5, 0x0CD6), r(0x0D3E, 0x0D3E), r(0x0D41, 0x0D43), r(0x0D4D, 0x0D4D),
    r(0x0D57, 0x0D57), r(0x0DCA, 0x0DCA), r(0x0DCF, 0x0DCF), r(0x0DD2, 0x0DD4),
    r(0x0DD6, 0x0DD6), r(0x0DDF, 0x0DDF), r(0x0E31, 0x0E31), r(0x0E34, 0x0E3A),
    r(0x0E47, 0x0E4E), r(0x0EB1, 0x0EB1), r(0x0EB4, 0x0EB9), r(0x0EBB, 0x0EBC),
    r(0x0EC8, 0x0ECD), r(0x0F18, 0x0F19), r(0x0F35, 0x0F35), r(0x0F37, 0x0F37),
    r(0x0F39, 0x0F39), r(0x0F71, 0x0F7E), r(0x0F80, 0x0F84), r(0x0F86, 0x0F87),
    r(0x0F90, 0x0F97), r(0x0F99, 0x0FBC), r(0x0FC6, 0x0FC6), r(0x102D, 0x1030),
    r(0x1032, 0x1032), r(0x1036, 0x1037), r(0x1039, 0x1039), r(0x1058, 0x1059),
    r(0x1160, 0x11A2), r(0x11A8, 0x11F9), r(0x135F, 0x135F), r(0x1712, 0x1714),
    r(0x1732, 0x1734), r(0x1752, 0x1753), r(0x1772, 0x1773), r(0x17B4, 0x17B5),
    r(0x17B7, 0x17BD), r(0x17C6, 0x17C6), r(0x17C9, 0x17D3), r(0x17DD, 0x17DD),
    r(0x180B, 0x180D), r(0x1885, 0x1886), r(0x18A9, 0x18A9), r(0x1920, 0x1922),
    r(0x1927, 0x1928), r(0x1932, 0x1932), r(0x1939, 0x193B), r(0x1A17, 0x1A18),
    r(0x1A1B, 0x1A1B), r(0x1DC0, 0x1DC3), r(0x200C, 0x200C), r(0x20D0, 0x20EB),
    r(0x302A, 0x302F), r(0x3099, 0x309A), r(0xA802, 0xA802), r(0xA806, 0xA806),
    r(0xA80B, 0xA80B), r(0xA825, 0xA826), r(0xFB1E, 0xFB1E), r(0xFE00, 0xFE0F),
    r(0xFE20, 0xFE23), r(0xFF9E, 0xFF9F), r(0x10A01, 0x10A03), r(0x10A05, 0x10A06),
    r(0x10A0C, 0x10A0F), r(0x10A38, 0x10A3A), r(0x10A3F, 0x10A3F), r(0x1D165, 0x1D165),
    r(0x1D167, 0x1D169), r(0x1D16E, 0x1D172), r(0x1D17B, 0x1D182), r(0x1D185, 0x1D18B),
    r(0x1D1AA, 0x1D1AD), r(0x1D242, 0x1D244), r(0xE0020, 0xE007F), r(0xE0100, 0xE01EF),
];
const VIRAMA: &[Range] = &[
    r(0x094D, 0x094D), r(0x09CD, 0x09CD), r(0x0A4D, 0x0A4D), r(0x0ACD, 0x0ACD),
    r(0x0B4D, 0x0B4D), r(0x0BCD, 0x0BCD), r(0x0C4D, 0x0C4D), r(0x0CCD, 0x0CCD),
    r(0x0D4D, 0x0D4D), r(0x0DCA, 0x0DCA), r(0x0E3A, 0x0E3A), r(0x0F84, 0x0F84),
    r(0x1039, 0x1039), r(0x1714, 0x1714), r(0x1734, 0x1734), r(0x17D2, 0x17D2),
    r(0xA806, 0xA806), r(0x10A3F, 0x10A3F),
];
const CONSONANT: &[Range] = &[
    r(0x0915, 0x0939), r(0x0958, 0x095F), r(0x097D, 0x097D), r(0x0995, 0x09A8),
    r(0x09AA, 0x09B0), r(0x09B2, 0x09B2), r(0x09B6, 0x09B9), r(0x09CE, 0x09CE),
    r(0x09DC, 0x09DD), r(0x09DF, 0x09DF), r(0x09F0, 0x09F1), r(0x0A15, 0x0A28),
    r(0x0A2A, 0x0A30), r(0x0A32, 0x0A33), r(0x0A35, 0x0A36), r(0x0A38, 0x0A39),
    r(0x0A59, 0x0A5C), r(0x0A5E, 0x0A5E), r(0x0A95, 0x0AA8), r(0x0AAA, 0x0AB0),
    r(0x0AB2, 0x0AB3), r(0x0AB5, 0x0AB9), r(0x0B15, 0x0B28), r(0x0B2A, 0x0B30),
    r(0x0B32, 0x0B33), r(0x0B35, 0x0B39), r(0x0B5C, 0x0B5D), r(0x0B5F, 0x0B5F),
    r(0x0B71, 0x0B71), r(0x0B95, 0x0B95), r(0x0B99, 0x0B9A), r(0x0B9C, 0x0B9C),
    r(0x0B9E, 0x0B9F), r(0x0BA3, 0x0BA4), r(0x0BA8, 0x0BAA), r(0x0BAE, 0x0BB9),
    r(0x0C15, 0x0C28), r(0x0C2A, 0x0C33), r(0x0C35, 0x0C39), r(0x0C95, 0x0CA8),
    r(0x0CAA, 0x0CB3), r(0x0CB5, 0x0CB9), r(0x0CDE, 0x0CDE), r(0x0D15, 0x0D28),
    r(0x0D2A, 0x0D39), r(0x0D85, 0x0D96), r(0x0D9A, 0x0DB1), r(0x0DB3, 0x0DBB),
    r(0x0DBD, 0x0DBD), r(0x0DC0, 0x0DC6), r(0x1000, 0x1020), r(0x1050, 0x1051),
    r(0x1703, 0x170C), r(0x170E, 0x1711), r(0x1723, 0x1731), r(0x1743, 0x1751),
    r(0x1763, 0x176C), r(0x176E, 0x1770), r(0x1780, 0x17A2), r(0x1A00, 0x1A14),
    r(0x1A16, 0x1A16), r(0xA807, 0xA80A), r(0xA80C, 0xA822), r(0x10A10, 0x10A13),
    r(0x10A15, 0x10A17), r(0x10A19, 0x10A33),
];
const VS16: &[Range] = &[];
