//! Unicode 15.1.0 property tables.
//!
//! Generated offline from the Unicode Character Database. Do not edit.

use super::{r, TableSet};
use crate::table::Range;

pub(crate) const TABLES: TableSet = TableSet {
    version: "15.1.0",
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
    r(0x0300, 0x036F), r(0x0483, 0x0489), r(0x0591, 0x05BD), r(0x05BF, 0x05BF),
    r(0x05C1, 0x05C2), r(0x05C4, 0x05C5), r(0x05C7, 0x05C7), r(0x0610, 0x061A),
    r(0x061C, 0x061C), r(0x064B, 0x065F), r(0x0670, 0x0670), r(0x06D6, 0x06DC),
    r(0x06DF, 0x06E4), r(0x06E7, 0x06E8), r(0x06EA, 0x06ED), r(0x0711, 0x0711),
    r(0x0730, 0x074A), r(0x07A6, 0x07B0), r(0x07EB, 0x07F3), r(0x07FD, 0x07FD),
    r(0x0816, 0x0819), r(0x081B, 0x0823), r(0x0825, 0x0827), r(0x0829, 0x082D),
    r(0x0859, 0x085B), r(0x0898, 0x089F), r(0x08CA, 0x08E1), r(0x08E3, 0x0902),
    r(0x093A, 0x093A), r(0x093C, 0x093C), r(0x0941, 0x0948), r(0x094D, 0x094D),
    r(0x0951, 0x0957), r(0x0962, 0x0963), r(0x0981, 0x0981), r(0x09BC, 0x09BC),
    r(0x09C1, 0x09C4), r(0x09CD, 0x09CD), r(0x09E2, 0x09E3), r(0x09FE, 0x09FE),
    r(0x0A01, 0x0A02), r(0x0A3C, 0x0A3C), r(0x0A41, 0x0A42), r(0x0A47, 0x0A48),
    r(0x0A4B, 0x0A4D), r(0x0A51, 0x0A51), r(0x0A70, 0x0A71), r(0x0A75, 0x0A75),
    r(0x0A81, 0x0A82), r(0x0ABC, 0x0ABC), r(0x0AC1, 0x0AC5), r(0x0AC7, 0x0AC8),
    r(0x0ACD, 0x0ACD), r(0x0AE2, 0x0AE3), r(0x0AFA, 0x0AFF), r(0x0B01, 0x0B01),
    r(0x0B3C, 0x0B3C), r(0x0B3F, 0x0B3F), r(0x0B41, 0x0B44), r(0x0B4D, 0x0B4D),
    r(0x0B55, 0x0B56), r(0x0B62, 0x0B63), r(0x0B82, 0x0B82), r(0x0BC0, 0x0BC0),
    r(0x0BCD, 0x0BCD), r(0x0C00, 0x0C00), r(0x0C04, 0x0C04), r(0x0C3C, 0x0C3C),
    r(0x0C3E, 0x0C40), r(0x0C46, 0x0C48), r(0x0C4A, 0x0C4D), r(0x0C55, 0x0C56),
    r(0x0C62, 0x0C63), r(0x0C81, 0x0C81), r(0x0CBC, 0x0CBC), r(0x0CBF, 0x0CBF),
    r(0x0CC6, 0x0CC6), r(0x0CCC, 0x0CCD), r(0x0CE2, 0x0CE3), r(0x0D00, 0x0D01),
    r(0x0D3B, 0x0D3C), r(0x0D41, 0x0D44), r(0x0D4D, 0x0D4D), r(0x0D62, 0x0D63),
    r(0x0D81, 0x0D81), r(0x0DCA, 0x0DCA), r(0x0DD2, 0x0DD4), r(0x0DD6, 0x0DD6),
    r(0x0E31, 0x0E31), r(0x0E34, 0x0E3A), r(0x0E47, 0x0E4E), r(0x0EB1, 0x0EB1),
    r(0x0EB4, 0x0EBC), r(0x0EC8, 0x0ECE), r(0x0F18, 0x0F19), r(0x0F35, 0x0F35),
    r(0x0F37, 0x0F37), r(0x0F39, 0x0F39), r(0x0F71, 0x0F7E), r(0x0F80, 0x0F84),
    r(0x0F86, 0x0F87), r(0x0F8D, 0x0F97), r(0x0F99, 0x0FBC), r(0x0FC6, 0x0FC6),
    r(0x102D, 0x1030), r(0x1032, 0x1037), r(0x1039, 0x103A), r(0x103D, 0x103E),
    r(0x1058, 0x1059), r(0x105E, 0x1060), r(0x1071, 0x1074), r(0x1082, 0x1082),
    r(0x1085, 0x1086), r(0x108D, 0x108D), r(0x109D, 0x109D), r(0x1160, 0x11FF),
    r(0x135D, 0x135F), r(0x1712, 0x1714), r(0x1732, 0x1733), r(0x1752, 0x1753),
    r(0x1772, 0x1773), r(0x17B4, 0x17B5), r(0x17B7, 0x17BD), r(0x17C6, 0x17C6),
    r(0x17C9, 0x17D3), r(0x17DD, 0x17DD), r(0x180B, 0x180F), r(0x1885, 0x1886),
    r(0x18A9, 0x18A9), r(0x1920, 0x1922), r(0x1927, 0x1928), r(0x1932, 0x1932),
    r(0x1939, 0x193B), r(0x1A17, 0x1A18), r(0x1A1B, 0x1A1B), r(0x1A56, 0x1A56),
    r(0x1A58, 0x1A5E), r(0x1A60, 0x1A60), r(0x1A62, 0x1A62), r(0x1A65, 0x1A6C),
    r(0x1A73, 0x1A7C), r(0x1A7F, 0x1A7F), r(0x1AB0, 0x1ACE), r(0x1B00, 0x1B03),
    r(0x1B34, 0x1B34), r(0x1B36, 0x1B3A), r(0x1B3C, 0x1B3C), r(0x1B42, 0x1B42),
    r(0x1B6B, 0x1B73), r(0x1B80, 0x1B81), r(0x1BA2, 0x1BA5), r(0x1BA8, 0x1BA9),
    r(0x1BAB, 0x1BAD), r(0x1BE6, 0x1BE6), r(0x1BE8, 0x1BE9), r(0x1BED, 0x1BED),
    r(0x1BEF, 0x1BF1), r(0x1C2C, 0x1C33), r(0x1C36, 0x1C37), r(0x1CD0, 0x1CD2),
    r(0x1CD4, 0x1CE0), r(0x1CE2, 0x1CE8), r(0x1CED, 0x1CED), r(0x1CF4, 0x1CF4),
    r(0x1CF8, 0x1CF9), r(0x1DC0, 0x1DFF), r(0x200B, 0x200F), r(0x2028, 0x202E),
    r(0x2060, 0x2064), r(0x2066, 0x206F), r(0x20D0, 0x20F0), r(0x2CEF, 0x2CF1),
    r(0x2D7F, 0x2D7F), r(0x2DE0, 0x2DFF), r(0x302A, 0x302D), r(0x3099, 0x309A),
    r(0xA66F, 0xA672), r(0xA674, 0xA67D), r(0xA69E, 0xA69F), r(0xA6F0, 0xA6F1),
    r(0xA802, 0xA802), r(0xA806, 0xA806), r(0xA80B, 0xA80B), r(0xA825, 0xA826),
    r(0xA82C, 0xA82C), r(0xA8C4, 0xA8C5), r(0xA8E0, 0xA8F1), r(0xA8FF, 0xA8FF),
    r(0xA926, 0xA92D), r(0xA947, 0xA951), r(0xA980, 0xA982), r(0xA9B3, 0xA9B3),
    r(0xA9B6, 0xA9B9), r(0xA9BC, 0xA9BD), r(0xA9E5, 0xA9E5), r(0xAA29, 0xAA2E),
    r(0xAA31, 0xAA32), r(0xAA35, 0xAA36), r(0xAA43, 0xAA43), r(0xAA4C, 0xAA4C),
    r(0xAA7C, 0xAA7C), r(0xAAB0, 0xAAB0), r(0xAAB2, 0xAAB4), r(0xAAB7, 0xAAB8),
    r(0xAABE, 0xAABF), r(0xAAC1, 0xAAC1), r(0xAAEC, 0xAAED), r(0xAAF6, 0xAAF6),
    r(0xABE5, 0xABE5), r(0xABE8, 0xABE8), r(0xABED, 0xABED), r(0xD7B0, 0xD7C6),
    r(0xD7CB, 0xD7FB), r(0xFB1E, 0xFB1E), r(0xFE00, 0xFE0F), r(0xFE20, 0xFE2F),
    r(0xFEFF, 0xFEFF), r(0xFFF9, 0xFFFB), r(0x101FD, 0x101FD), r(0x102E0, 0x102E0),
    r(0x10376, 0x1037A), r(0x10A01, 0x10A03), r(0x10A05, 0x10A06), r(0x10A0C, 0x10A0F),
    r(0x10A38, 0x10A3A), r(0x10A3F, 0x10A3F), r(0x10AE5, 0x10AE6), r(0x10D24, 0x10D27),
    r(0x10EAB, 0x10EAC), r(0x10EFD, 0x10EFF), r(0x10F46, 0x10F50), r(0x10F82, 0x10F85),
    r(0x11001, 0x11001), r(0x11038, 0x11046), r(0x11070, 0x11070), r(0x11073, 0x11074),
    r(0x1107F, 0x11081), r(0x110B3, 0x110B6), r(0x110B9, 0x110BA), r(0x110C2, 0x110C2),
    r(0x11100, 0x11102), r(0x11127, 0x1112B), r(0x1112D, 0x11134), r(0x11173, 0x11173),
    r(0x11180, 0x11181), r(0x111B6, 0x111BE), r(0x111C9, 0x111CC), r(0x111CF, 0x111CF),
    r(0x1122F, 0x11231), r(0x11234, 0x11234), r(0x11236, 0x11237), r(0x1123E, 0x1123E),
    r(0x11241, 0x11241), r(0x112DF, 0x112DF), r(0x112E3, 0x112EA), r(0x11300, 0x11301),
    r(0x1133B, 0x1133C), r(0x11340, 0x11340), r(0x11366, 0x1136C), r(0x11370, 0x11374),
    r(0x11438, 0x1143F), r(0x11442, 0x11444), r(0x11446, 0x11446), r(0x1145E, 0x1145E),
    r(0x114B3, 0x114B8), r(0x114BA, 0x114BA), r(0x114BF, 0x114C0), r(0x114C2, 0x114C3),
    r(0x115B2, 0x115B5), r(0x115BC, 0x115BD), r(0x115BF, 0x115C0), r(0x115DC, 0x115DD),
    r(0x11633, 0x1163A), r(0x1163D, 0x1163D), r(0x1163F, 0x11640), r(0x116AB, 0x116AB),
    r(0x116AD, 0x116AD), r(0x116B0, 0x116B5), r(0x116B7, 0x116B7), r(0x1171D, 0x1171F),
    r(0x11722, 0x11725), r(0x11727, 0x1172B), r(0x1182F, 0x11837), r(0x11839, 0x1183A),
    r(0x1193B, 0x1193C), r(0x1193E, 0x1193E), r(0x11943, 0x11943), r(0x119D4, 0x119D7),
    r(0x119DA, 0x119DB), r(0x119E0, 0x119E0), r(0x11A01, 0x11A0A), r(0x11A33, 0x11A38),
    r(0x11A3B, 0x11A3E), r(0x11A47, 0x11A47), r(0x11A51, 0x11A56), r(0x11A59, 0x11A5B),
    r(0x11A8A, 0x11A96), r(0x11A98, 0x11A99), r(0x11C30, 0x11C36), r(0x11C38, 0x11C3D),
    r(0x11C3F, 0x11C3F), r(0x11C92, 0x11CA7), r(0x11CAA, 0x11CB0), r(0x11CB2, 0x11CB3),
    r(0x11CB5, 0x11CB6), r(0x11D31, 0x11D36), r(0x11D3A, 0x11D3A), r(0x11D3C, 0x11D3D),
    r(0x11D3F, 0x11D45), r(0x11D47, 0x11D47), r(0x11D90, 0x11D91), r(0x11D95, 0x11D95),
    r(0x11D97, 0x11D97), r(0x11EF3, 0x11EF4), r(0x11F00, 0x11F01), r(0x11F36, 0x11F3A),
    r(0x11F40, 0x11F40), r(0x11F42, 0x11F42), r(0x13430, 0x13440), r(0x13447, 0x13455),
    r(0x16AF0, 0x16AF4), r(0x16B30, 0x16B36), r(0x16F4F, 0x16F4F), r(0x16F8F, 0x16F92),
    r(0x16FE4, 0x16FE4), r(0x1BC9D, 0x1BC9E), r(0x1BCA0, 0x1BCA3), r(0x1CF00, 0x1CF2D),
    r(0x1CF30, 0x1CF46), r(0x1D167, 0x1D169), r(0x1D173, 0x1D182), r(0x1D185, 0x1D18B),
    r(0x1D1AA, 0x1D1AD), r(0x1D242, 0x1D244), r(0x1DA00, 0x1DA36), r(0x1DA3B, 0x1DA6C),
    r(0x1DA75, 0x1DA75), r(0x1DA84, 0x1DA84), r(0x1DA9B, 0x1DA9F), r(0x1DAA1, 0x1DAAF),
    r(0x1E000, 0x1E006), r(0x1E008, 0x1E018), r(0x1E01B, 0x1E021), r(0x1E023, 0x1E024),
    r(0x1E026, 0x1E02A), r(0x1E08F, 0x1E08F), r(0x1E130, 0x1E136), r(0x1E2AE, 0x1E2AE),
    r(0x1E2EC, 0x1E2EF), r(0x1E4EC, 0x1E4EF), r(0x1E8D0, 0x1E8D6), r(0x1E944, 0x1E94A),
    r(0xE0001, 0xE0001), r(0xE0020, 0xE007F), r(0xE0100, 0xE01EF),
];
const WIDE: &[Range] = &[
    r(0x1100, 0x115F), r(0x231A, 0x231B), r(0x2329, 0x232A), r(0x23E9, 0x23EC),
    r(0x23F0, 0x23F0), r(0x23F3, 0x23F3), r(0x25FD, 0x25FE), r(0x2614, 0x2615),
    r(0x2648, 0x2653), r(0x267F, 0x267F), r(0x2693, 0x2693), r(0x26A1, 0x26A1),
    r(0x26AA, 0x26AB), r(0x26BD, 0x26BE), r(0x26C4, 0x26C5), r(0x26CE, 0x26CE),
    r(0x26D4, 0x26D4), r(0x26EA, 0x26EA), r(0x26F2, 0x26F3), r(0x26F5, 0x26F5),
    r(0x26FA, 0x26FA), r(0x26FD, 0x26FD), r(0x2705, 0x2705), r(0x270A, 0x270B),
    r(0x2728, 0x2728), r(0x274C, 0x274C), r(0x274E, 0x274E), r(0x2753, 0x2755),
    r(0x2757, 0x2757), r(0x2795, 0x2797), r(0x27B0, 0x27B0), r(0x27BF, 0x27BF),
    r(0x2B1B, 0x2B1C), r(0x2B50, 0x2B50), r(0x2B55, 0x2B55), r(0x2E80, 0x2E99),
    r(0x2E9B, 0x2EF3), r(0x2F00, 0x2FD5), r(0x2FF0, 0x3029), r(0x302E, 0x303E),
    r(0x3041, 0x3096), r(0x309B, 0x30FF), r(0x3105, 0x312F), r(0x3131, 0x318E),
    r(0x3190, 0x31E3), r(0x31EF, 0x321E), r(0x3220, 0x3247), r(0x3250, 0x4DBF),
    r(0x4E00, 0xA48C), r(0xA490, 0xA4C6), r(0xA960, 0xA97C), r(0xAC00, 0xD7A3),
    r(0xF900, 0xFAFF), r(0xFE10, 0xFE19), r(0xFE30, 0xFE52), r(0xFE54, 0xFE66),
    r(0xFE68, 0xFE6B), r(0xFF01, 0xFF60), r(0xFFE0, 0xFFE6), r(0x16FE0, 0x16FE3),
    r(0x16FF0, 0x16FF1), r(0x17000, 0x187F7), r(0x18800, 0x18CD5), r(0x18D00, 0x18D08),
    r(0x1AFF0, 0x1AFF3), r(0x1AFF5, 0x1AFFB), r(0x1AFFD, 0x1AFFE), r(0x1B000, 0x1B122),
    r(0x1B132, 0x1B132), r(0x1B150, 0x1B152), r(0x1B155, 0x1B155), r(0x1B164, 0x1B167),
    r(0x1B170, 0x1B2FB), r(0x1F004, 0x1F004), r(0x1F0CF, 0x1F0CF), r(0x1F18E, 0x1F18E),
    r(0x1F191, 0x1F19A), r(0x1F1E6, 0x1F202), r(0x1F210, 0x1F23B), r(0x1F240, 0x1F248),
    r(0x1F250, 0x1F251), r(0x1F260, 0x1F265), r(0x1F300, 0x1F320), r(0x1F32D, 0x1F335),
    r(0x1F337, 0x1F37C), r(0x1F37E, 0x1F393), r(0x1F3A0, 0x1F3CA), r(0x1F3CF, 0x1F3D3),
    r(0x1F3E0, 0x1F3F0), r(0x1F3F4, 0x1F3F4), r(0x1F3F8, 0x1F43E), r(0x1F440, 0x1F440),
    r(0x1F442, 0x1F4FC), r(0x1F4FF, 0x1F53D), r(0x1F54B, 0x1F54E), r(0x1F550, 0x1F567),
    r(0x1F57A, 0x1F57A), r(0x1F595, 0x1F596), r(0x1F5A4, 0x1F5A4), r(0x1F5FB, 0x1F64F),
    r(0x1F680, 0x1F6C5), r(0x1F6CC, 0x1F6CC), r(0x1F6D0, 0x1F6D2), r(0x1F6D5, 0x1F6D7),
    r(0x1F6DC, 0x1F6DF), r(0x1F6EB, 0x1F6EC), r(0x1F6F4, 0x1F6FC), r(0x1F7E0, 0x1F7EB),
    r(0x1F7F0, 0x1F7F0), r(0x1F90C, 0x1F93A), r(0x1F93C, 0x1F945), r(0x1F947, 0x1F9FF),
    r(0x1FA70, 0x1FA7C), r(0x1FA80, 0x1FA88), r(0x1FA90, 0x1FABD), r(0x1FABF, 0x1FAC5),
    r(0x1FACE, 0x1FADB), r(0x1FAE0, 0x1FAE8), r(0x1FAF0, 0x1FAF8), r(0x20000, 0x2FFFD),
    r(0x30000, 0x3FFFD),
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
    r(0x215B, 0x215E), r(0x2160, 0x216B), r(0x2170, 0x2179), r(0x2189, 0x2189),
    r(0x2190, 0x2199), r(0x21B8, 0x21B9), r(0x21D2, 0x21D2), r(0x21D4, 0x21D4),
    r(0x21E7, 0x21E7), r(0x2200, 0x2200), r(0x2202, 0x2203), r(0x2207, 0x2208),
    r(0x220B, 0x220B), r(0x220F, 0x220F), r(0x2211, 0x2211), r(0x2215, 0x2215),
    r(0x221A, 0x221A), r(0x221D, 0x2220), r(0x2223, 0x2223), r(0x2225, 0x2225),
    r(0x2227, 0x222C), r(0x222E, 0x222E), r(0x2234, 0x2237), r(0x223C, 0x223D),
    r(0x2248, 0x2248), r(0x224C, 0x224C), r(0x2252, 0x2252), r(0x2260, 0x2261),
    r(0x2264, 0x2267), r(0x226A, 0x226B), r(0x226E, 0x226F), r(0x2282, 0x2283),
    r(0x2286, 0x2287), r(0x2295, 0x2295), r(0x2299, 0x2299), r(0x22A5, 0x22A5),
    r(0x22BF, 0x22BF), r(0x2312, 0x2312), r(0x2460, 0x24E9), r(0x24EB, 0x254B),
    r(0x2550, 0x2573), r(0x2580, 0x258F), r(0x2592, 0x2595), r(0x25A0, 0x25A1),
    r(0x25A3, 0x25A9), r(0x25B2, 0x25B3), r(0x25B6, 0x25B7), r(0x25BC, 0x25BD),
    r(0x25C0, 0x25C1), r(0x25C6, 0x25C8), r(0x25CB, 0x25CB), r(0x25CE, 0x25D1),
    r(0x25E2, 0x25E5), r(0x25EF, 0x25EF), r(0x2605, 0x2606), r(0x2609, 0x2609),
    r(0x260E, 0x260F), r(0x261C, 0x261C), r(0x261E, 0x261E), r(0x2640, 0x2640),
    r(0x2642, 0x2642), r(0x2660, 0x2661), r(0x2663, 0x2665), r(0x2667, 0x266A),
    r(0x266C, 0x266D), r(0x266F, 0x266F), r(0x269E, 0x269F), r(0x26BF, 0x26BF),
    r(0x26C6, 0x26CD), r(0x26CF, 0x26D3), r(0x26D5, 0x26E1), r(0x26E3, 0x26E3),
    r(0x26E8, 0x26E9), r(0x26EB, 0x26F1), r(0x26F4, 0x26F4), r(0x26F6, 0x26F9),
    r(0x26FB, 0x26FC), r(0x26FE, 0x26FF), r(0x273D, 0x273D), r(0x2776, 0x277F),
    r(0x2B56, 0x2B59), r(0x3248, 0x324F), r(0xE000, 0xF8FF), r(0xFFFD, 0xFFFD),
    r(0x1F100, 0x1F10A), r(0x1F110, 0x1F12D), r(0x1F130, 0x1F169), r(0x1F170, 0x1F18D),
    r(0x1F18F, 0x1F190), r(0x1F19B, 0x1F1AC), r(0xF0000, 0xFFFFD), r(0x100000, 0x10FFFD),
];
const SPACING_MARK: &[Range] = &[
    r(0x0903, 0x0903), r(0x093B, 0x093B), r(0x093E, 0x0940), r(0x0949, 0x094C),
    r(0x094E, 0x094F), r(0x0982, 0x0983), r(0x09BE, 0x09C0), r(0x09C7, 0x09C8),
    r(0x09CB, 0x09CC), r(0x09D7, 0x09D7), r(0x0A03, 0x0A03), r(0x0A3E, 0x0A40),
    r(0x0A83, 0x0A83), r(0x0ABE, 0x0AC0), r(0x0AC9, 0x0AC9), r(0x0ACB, 0x0ACC),
    r(0x0B02, 0x0B03), r(0x0B3E, 0x0B3E), r(0x0B40, 0x0B40), r(0x0B47, 0x0B48),
    r(0x0B4B, 0x0B4C), r(0x0B57, 0x0B57), r(0x0BBE, 0x0BBF), r(0x0BC1, 0x0BC2),
    r(0x0BC6, 0x0BC8), r(0x0BCA, 0x0BCC), r(0x0BD7, 0x0BD7), r(0x0C01, 0x0C03),
    r(0x0C41, 0x0C44), r(0x0C82, 0x0C83), r(0x0CBE, 0x0CBE), r(0x0CC0, 0x0CC4),
    r(0x0CC7, 0x0CC8), r(0x0CCA, 0x0CCB), r(0x0CD5, 0x0CD6), r(0x0CF3, 0x0CF3),
    r(0x0D02, 0x0D03), r(0x0D3E, 0x0D40), r(0x0D46, 0x0D48), r(0x0D4A, 0x0D4C),
    r(0x0D57, 0x0D57), r(0x0D82, 0x0D83), r(0x0DCF, 0x0DD1), r(0x0DD8, 0x0DDF),
    r(0x0DF2, 0x0DF3), r(0x0F3E, 0x0F3F), r(0x0F7F, 0x0F7F), r(0x102B, 0x102C),
    r(0x1031, 0x1031), r(0x1038, 0x1038), r(0x103B, 0x103C), r(0x1056, 0x1057),
    r(0x1062, 0x1064), r(0x1067, 0x106D), r(0x1083, 0x1084), r(0x1087, 0x108C),
    r(0x108F, 0x108F), r(0x109A, 0x109C), r(0x1715, 0x1715), r(0x1734, 0x1734),
    r(0x17B6, 0x17B6), r(0x17BE, 0x17C5), r(0x17C7, 0x17C8), r(0x1923, 0x1926),
    r(0x1929, 0x192B), r(0x1930, 0x1931), r(0x1933, 0x1938), r(0x1A19, 0x1A1A),
    r(0x1A55, 0x1A55), r(0x1A57, 0x1A57), r(0x1A61, 0x1A61), r(0x1A63, 0x1A64),
    r(0x1A6D, 0x1A72), r(0x1B04, 0x1B04), r(0x1B35, 0x1B35), r(0x1B3B, 0x1B3B),
    r(0x1B3D, 0x1B41), r(0x1B43, 0x1B44), r(0x1B82, 0x1B82), r(0x1BA1, 0x1BA1),
    r(0x1BA6, 0x1BA7), r(0x1BAA, 0x1BAA), r(0x1BE7, 0x1BE7), r(0x1BEA, 0x1BEC),
    r(0x1BEE, 0x1BEE), r(0x1BF2, 0x1BF3), r(0x1C24, 0x1C2B), r(0x1C34, 0x1C35),
    r(0x1CE1, 0x1CE1), r(0x1CF7, 0x1CF7), r(0x302E, 0x302F), r(0xA823, 0xA824),
    r(0xA827, 0xA827), r(0xA880, 0xA881), r(0xA8B4, 0xA8C3), r(0xA952, 0xA953),
    r(0xA983, 0xA983), r(0xA9B4, 0xA9B5), r(0xA9BA, 0xA9BB), r(0xA9BE, 0xA9C0),
    r(0xAA2F, 0xAA30), r(0xAA33, 0xAA34), r(0xAA4D, 0xAA4D), r(0xAA7B, 0xAA7B),
    r(0xAA7D, 0xAA7D), r(0xAAEB, 0xAAEB), r(0xAAEE, 0xAAEF), r(0xAAF5, 0xAAF5),
    r(0xABE3, 0xABE4), r(0xABE6, 0xABE7), r(0xABE9, 0xABEA), r(0xABEC, 0xABEC),
    r(0x11000, 0x11000), r(0x11002, 0x11002), r(0x11082, 0x11082), r(0x110B0, 0x110B2),
    r(0x110B7, 0x110B8), r(0x1112C, 0x1112C), r(0x11145, 0x11146), r(0x11182, 0x11182),
    r(0x111B3, 0x111B5), r(0x111BF, 0x111C0), r(0x111CE, 0x111CE), r(0x1122C, 0x1122E),
    r(0x11232, 0x11233), r(0x11235, 0x11235), r(0x112E0, 0x112E2), r(0x11302, 0x11303),
    r(0x1133E, 0x1133F), r(0x11341, 0x11344), r(0x11347, 0x11348), r(0x1134B, 0x1134D),
    r(0x11357, 0x11357), r(0x11362, 0x11363), r(0x11435, 0x11437), r(0x11440, 0x11441),
    r(0x11445, 0x11445), r(0x114B0, 0x114B2), r(0x114B9, 0x114B9), r(0x114BB, 0x114BE),
    r(0x114C1, 0x114C1), r(0x115AF, 0x115B1), r(0x115B8, 0x115BB), r(0x115BE, 0x115BE),
    r(0x11630, 0x11632), r(0x1163B, 0x1163C), r(0x1163E, 0x1163E), r(0x116AC, 0x116AC),
    r(0x116AE, 0x116AF), r(0x116B6, 0x116B6), r(0x11720, 0x11721), r(0x11726, 0x11726),
    r(0x1182C, 0x1182E), r(0x11838, 0x11838), r(0x11930, 0x11935), r(0x11937, 0x11938),
    r(0x1193D, 0x1193D), r(0x11940, 0x11940), r(0x11942, 0x11942), r(0x119D1, 0x119D3),
    r(0x119DC, 0x119DF), r(0x119E4, 0x119E4), r(0x11A39, 0x11A39), r(0x11A57, 0x11A58),
    r(0x11A97, 0x11A97), r(0x11C2F, 0x11C2F), r(0x11C3E, 0x11C3E), r(0x11CA9, 0x11CA9),
    r(0x11CB1, 0x11CB1), r(0x11CB4, 0x11CB4), r(0x11D8A, 0x11D8E), r(0x11D93, 0x11D94),
    r(0x11D96, 0x11D96), r(0x11EF5, 0x11EF6), r(0x11F03, 0x11F03), r(0x11F34, 0x11F35),
    r(0x11F3E, 0x11F3F), r(0x11F41, 0x11F41), r(0x16F51, 0x16F87), r(0x16FF0, 0x16FF1),
    r(0x1D165, 0x1D166), r(0x1D16D, 0x1D172),
];
const COMBINING: &[Range] = &[
    r(0x0300, 0x036F), r(0x0483, 0x0489), r(0x0591, 0x05BD), r(0x05BF, 0x05BF),
    r(0x05C1, 0x05C2), r(0x05C4, 0x05C5), r(0x05C7, 0x05C7), r(0x0610, 0x061A),
    r(0x064B, 0x065F), r(0x0670, 0x0670), r(0x06D6, 0x06DC), r(0x06DF, 0x06E4),
    r(0x06E7, 0x06E8), r(0x06EA, 0x06ED), r(0x0711, 0x0711), r(0x0730, 0x074A),
    r(0x07A6, 0x07B0), r(0x07EB, 0x07F3), r(0x07FD, 0x07FD), r(0x0816, 0x0819),
    r(0x081B, 0x0823), r(0x0825, 0x0827), r(0x0829, 0x082D), r(0x0859, 0x085B),
    r(0x0898, 0x089F), r(0x08CA, 0x08E1), r(0x08E3, 0x0902), r(0x093A, 0x093A),
    r(0x093C, 0x093C), r(0x0941, 0x0948), r(0x094D, 0x094D), r(0x0951, 0x0957),
    r(0x0962, 0x0963), r(0x0981, 0x0981), r(0x09BC, 0x09BC), r(0x09BE, 0x09BE),
    r(0x09C1, 0x09C4), r(0x09CD, 0x09CD), r(0x09D7, 0x09D7), r(0x09E2, 0x09E3),
    r(0x09FE, 0x09FE), r(0x0A01, 0x0A02), r(0x0A3C, 0x0A3C), r(0x0A41, 0x0A42),
    r(0x0A47, 0x0A48), r(0x0A4B, 0x0A4D), r(0x0A51, 0x0A51), r(0x0A70, 0x0A71),
    r(0x0A75, 0x0A75), r(0x0A81, 0x0A82), r(0x0ABC, 0x0ABC), r(0x0AC1, 0x0AC5),
    r(0x0AC7, 0x0AC8), r(0x0ACD, 0x0ACD), r(0x0AE2, 0x0AE3), r(0x0AFA, 0x0AFF),
    r(0x0B01, 0x0B01), r(0x0B3C, 0x0B3C), r(0x0B3E, 0x0B3F), r(0x0B41, 0x0B44),
    r(0x0B4D, 0x0B4D), r(0x0B55, 0x0B57), r(0x0B62, 0x0B63), r(0x0B82, 0x0B82),
    r(0x0BBE, 0x0BBE), r(0x0BC0, 0x0BC0), r(0x0BCD, 0x0BCD), r(0x0BD7, 0x0BD7),
    r(0x0C00, 0x0C00), r(0x0C04, 0x0C04), r(0x0C3C, 0x0C3C), r(0x0C3E, 0x0C40),
    r(0x0C46, 0x0C48), r(0x0C4A, 0x0C4D), r(0x0C55, 0x0C56), r(0x0C62, 0x0C63),
    r(0x0C81, 0x0C81), r(0x0CBC, 0x0CBC), r(0x0CBF, 0x0CBF), r(0x0CC2, 0x0CC2),
    r(0x0CC6, 0x0CC6), r(0x0CCC, 0x0CCD), r(0x0CD5, 0x0CD6), r(0x0CE2, 0x0CE3),
    r(0x0D00, 0x0D01), r(0x0D3B, 0x0D3C), r(0x0D3E, 0x0D3E), r(0x0D41, 0x0D44),
    r(0x0D4D, 0x0D4D), r(0x0D57, 0x0D57), r(0x0D62, 0x0D63), r(0x0D81, 0x0D81),
    r(0x0DCA, 0x0DCA), r(0x0DCF, 0x0DCF), r(0x0DD2, 0x0DD4), r(0x0DD6, 0x0DD6),
    r(0x0DDF, 0x0DDF), r(0x0E31, 0x0E31), r(0x0E34, 0x0E3A), r(0x0E47, 0x0E4E),
    r(0x0EB1, 0x0EB1), r(0x0EB4, 0x0EBC), r(0x0EC8, 0x0ECE), r(0x0F18, 0x0F19),
    r(0x0F35, 0x0F35), r(0x0F37, 0x0F37), r(0x0F39, 0x0F39), r(0x0F71, 0x0F7E),
    r(0x0F80, 0x0F84), r(0x0F86, 0x0F87), r(0x0F8D, 0x0F97), r(0x0F99, 0x0FBC),
    r(0x0FC6, 0x0FC6), r(0x102D, 0x1030), r(0x1032, 0x1037), r(0x1039, 0x103A),
    r(0x103D, 0x103E), r(0x1058, 0x1059), r(0x105E, 0x1060), r(0x1071, 0x1074),
    r(0x1082, 0x1082), r(0x1085, 0x1086), r(0x108D, 0x108D), r(0x109D, 0x109D),
    r(0x1160, 0x11FF), r(0x135D, 0x135F), r(0x1712, 0x1714), r(0x1732, 0x1733),
    r(0x1752, 0x1753), r(0x1772, 0x1773), r(0x17B4, 0x17B5), r(0x17B7, 0x17BD),
    r(0x17C6, 0x17C6), r(0x17C9, 0x17D3), r(0x17DD, 0x17DD), r(0x180B, 0x180D),
    r(0x180F, 0x180F), r(0x1885, 0x1886), r(0x18A9, 0x18A9), r(0x1920, 0x1922),
    r(0x1927, 0x1928), r(0x1932, 0x1932), r(0x1939, 0x193B), r(0x1A17, 0x1A18),
    r(0x1A1B, 0x1A1B), r(0x1A56, 0x1A56), r(0x1A58, 0x1A5E), r(0x1A60, 0x1A60),
    r(0x1A62, 0x1A62), r(0x1A65, 0x1A6C), r(0x1A73, 0x1A7C), r(0x1A7F, 0x1A7F),
    r(0x1AB0, 0x1ACE), r(0x1B00, 0x1B03), r(0x1B34, 0x1B3A), r(0x1B3C, 0x1B3C),
    r(0x1B42, 0x1B42), r(0x1B6B, 0x1B73), r(0x1B80, 0x1B81), r(0x1BA2, 0x1BA5),
    r(0x1BA8, 0x1BA9), r(0x1BAB, 0x1BAD), r(0x1BE6, 0x1BE6), r(0x1BE8, 0x1BE9),
    r(0x1BED, 0x1BED), r(0x1BEF, 0x1BF1), r(0x1C2C, 0x1C33), r(0x1C36, 0x1C37),
    r(0x1CD0, 0x1CD2), r(0x1CD4, 0x1CE0), r(0x1CE2, 0x1CE8), r(0x1CED, 0x1CED),
    r(0x1CF4, 0x1CF4), r(0x1CF8, 0x1CF9), r(0x1DC0, 0x1DFF), r(0x200C, 0x200C),
    r(0x20D0, 0x20F0), r(0x2CEF, 0x2CF1), r(0x2D7F, 0x2D7F), r(0x2DE0, 0x2DFF),
    r(0x302A, 0x302F), r(0x3099, 0x309A), r(0xA66F, 0xA672), r(0xA674, 0xA67D),
    r(0xA69E, 0xA69F), r(0xA6F0, 0xA6F1), r(0xA802, 0xA802), r(0xA806, 0xA806),
    r(0xA80B, 0xA80B), r(0xA825, 0xA826), r(0xA82C, 0xA82C), r(0xA8C4, 0xA8C5),
    r(0xA8E0, 0xA8F1), r(0xA8FF, 0xA8FF), r(0xA926, 0xA92D), r(0xA947, 0xA951),
    r(0xA980, 0xA982), r(0xA9B3, 0xA9B3), r(0xA9B6, 0xA9B9), r(0xA9BC, 0xA9BD),
    r(0xA9E5, 0xA9E5), r(0xAA29, 0xAA2E), r(0xAA31, 0xAA32), r(0xAA35, 0xAA36),
    r(0xAA43, 0xAA43), r(0xAA4C, 0xAA4C), r(0xAA7C, 0xAA7C), r(0xAAB0, 0xAAB0),
    r(0xAAB2, 0xAAB4), r(0xAAB7, 0xAAB8), r(0xAABE, 0xAABF), r(0xAAC1, 0xAAC1),
    r(0xAAEC, 0xAAED), r(0xAAF6, 0xAAF6), r(0xABE5, 0xABE5), r(0xABE8, 0xABE8),
    r(0xABED, 0xABED), r(0xD7B0, 0xD7C6), r(0xD7CB, 0xD7FB), r(0xFB1E, 0xFB1E),
    r(0xFE00, 0xFE0F), r(0xFE20, 0xFE2F), r(0xFF9E, 0xFF9F), r(0x101FD, 0x101FD),
    r(0x102E0, 0x102E0), r(0x10376, 0x1037A), r(0x10A01, 0x10A03), r(0x10A05, 0x10A06),
    r(0x10A0C, 0x10A0F), r(0x10A38, 0x10A3A), r(0x10A3F, 0x10A3F), r(0x10AE5, 0x10AE6),
    r(0x10D24, 0x10D27), r(0x10EAB, 0x10EAC), r(0x10EFD, 0x10EFF), r(0x10F46, 0x10F50),
    r(0x10F82, 0x10F85), r(0x11001, 0x11001), r(0x11038, 0x11046), r(0x11070, 0x11070),
    r(0x11073, 0x11074), r(0x1107F, 0x11081), r(0x110B3, 0x110B6), r(0x110B9, 0x110BA),
    r(0x110C2, 0x110C2), r(0x11100, 0x11102), r(0x11127, 0x1112B), r(0x1112D, 0x11134),
    r(0x11173, 0x11173), r(0x11180, 0x11181), r(0x111B6, 0x111BE), r(0x111C9, 0x111CC),
    r(0x111CF, 0x111CF), r(0x1122F, 0x11231), r(0x11234, 0x11234), r(0x11236, 0x11237),
    r(0x1123E, 0x1123E), r(0x11241, 0x11241), r(0x112DF, 0x112DF), r(0x112E3, 0x112EA),
    r(0x11300, 0x11301), r(0x1133B, 0x1133C), r(0x1133E, 0x1133E), r(0x11340, 0x11340),
    r(0x11357, 0x11357), r(0x11366, 0x1136C), r(0x11370, 0x11374), r(0x11438, 0x1143F),
    r(0x11442, 0x11444), r(0x11446, 0x11446), r(0x1145E, 0x1145E), r(0x114B0, 0x114B0),
    r(0x114B3, 0x114B8), r(0x114BA, 0x114BA), r(0x114BD, 0x114BD), r(0x114BF, 0x114C0),
    r(0x114C2, 0x114C3), r(0x115AF, 0x115AF), r(0x115B2, 0x115B5), r(0x115BC, 0x115BD),
    r(0x115BF, 0x115C0), r(0x115DC, 0x115DD), r(0x11633, 0x1163A), r(0x1163D, 0x1163D),
    r(0x1163F, 0x11640), r(0x116AB, 0x116AB), r(0x116AD, 0x116AD), r(0x116B0, 0x116B5),
    r(0x116B7, 0x116B7), r(0x1171D, 0x1171F), r(0x11722, 0x11725), r(0x11727, 0x1172B),
    r(0x1182F, 0x11837), r(0x11839, 0x1183A), r(0x11930, 0x11930), r(0x1193B, 0x1193C),
    r(0x1193E, 0x1193E), r(0x11943, 0x11943), r(0x119D4, 0x119D7), r(0x119DA, 0x119DB),
    r(0x119E0, 0x119E0), r(0x11A01, 0x11A0A), r(0x11A33, 0x11A38), r(0x11A3B, 0x11A3E),
    r(0x11A47, 0x11A47), r(0x11A51, 0x11A56), r(0x11A59, 0x11A5B), r(0x11A8A, 0x11A96),
    r(0x11A98, 0x11A99), r(0x11C30, 0x11C36), r(0x11C38, 0x11C3D), r(0x11C3F, 0x11C3F),
    r(0x11C92, 0x11CA7), r(0x11CAA, 0x11CB0), r(0x11CB2, 0x11CB3), r(0x11CB5, 0x11CB6),
    r(0x11D31, 0x11D36), r(0x11D3A, 0x11D3A), r(0x11D3C, 0x11D3D), r(0x11D3F, 0x11D45),
    r(0x11D47, 0x11D47), r(0x11D90, 0x11D91), r(0x11D95, 0x11D95), r(0x11D97, 0x11D97),
    r(0x11EF3, 0x11EF4), r(0x11F00, 0x11F01), r(0x11F36, 0x11F3A), r(0x11F40, 0x11F40),
    r(0x11F42, 0x11F42), r(0x13440, 0x13440), r(0x13447, 0x13455), r(0x16AF0, 0x16AF4),
    r(0x16B30, 0x16B36), r(0x16F4F, 0x16F4F), r(0x16F8F, 0x16F92), r(0x16FE4, 0x16FE4),
    r(0x1BC9D, 0x1BC9E), r(0x1CF00, 0x1CF2D), r(0x1CF30, 0x1CF46), r(0x1D165, 0x1D165),
    r(0x1D167, 0x1D169), r(0x1D16E, 0x1D172), r(0x1D17B, 0x1D182), r(0x1D185, 0x1D18B),
    r(0x1D1AA, 0x1D1AD), r(0x1D242, 0x1D244), r(0x1DA00, 0x1DA36), r(0x1DA3B, 0x1DA6C),
    r(0x1DA75, 0x1DA75), r(0x1DA84, 0x1DA84), r(0x1DA9B, 0x1DA9F), r(0x1DAA1, 0x1DAAF),
    r(0x1E000, 0x1E006), r(0x1E008, 0x1E018), r(0x1E01B, 0x1E021), r(0x1E023, 0x1E024),
    r(0x1E026, 0x1E02A), r(0x1E08F, 0x1E08F), r(0x1E130, 0x1E136), r(0x1E2AE, 0x1E2AE),
    r(0x1E2EC, 0x1E2EF), r(0x1E4EC, 0x1E4EF), r(0x1E8D0, 0x1E8D6), r(0x1E944, 0x1E94A),
    r(0xE0020, 0xE007F), r(0xE0100, 0xE01EF),
];
const VIRAMA: &[Range] = &[
    r(0x094D, 0x094D), r(0x09CD, 0x09CD), r(0x0A4D, 0x0A4D), r(0x0ACD, 0x0ACD),
    r(0x0B4D, 0x0B4D), r(0x0BCD, 0x0BCD), r(0x0C4D, 0x0C4D), r(0x0CCD, 0x0CCD),
    r(0x0D3B, 0x0D3C), r(0x0D4D, 0x0D4D), r(0x0DCA, 0x0DCA), r(0x0E3A, 0x0E3A),
    r(0x0EBA, 0x0EBA), r(0x0F84, 0x0F84), r(0x1039, 0x103A), r(0x1714, 0x1715),
    r(0x1734, 0x1734), r(0x17D2, 0x17D2), r(0x1A60, 0x1A60), r(0x1B44, 0x1B44),
    r(0x1BAA, 0x1BAB), r(0x1BF2, 0x1BF3), r(0x2D7F, 0x2D7F), r(0xA806, 0xA806),
    r(0xA82C, 0xA82C), r(0xA8C4, 0xA8C4), r(0xA953, 0xA953), r(0xA9C0, 0xA9C0),
    r(0xAAF6, 0xAAF6), r(0xABED, 0xABED), r(0x10A3F, 0x10A3F), r(0x11046, 0x11046),
    r(0x11070, 0x11070), r(0x1107F, 0x1107F), r(0x110B9, 0x110B9), r(0x11133, 0x11134),
    r(0x111C0, 0x111C0), r(0x11235, 0x11235), r(0x112EA, 0x112EA), r(0x1134D, 0x1134D),
    r(0x11442, 0x11442), r(0x114C2, 0x114C2), r(0x115BF, 0x115BF), r(0x1163F, 0x1163F),
    r(0x116B6, 0x116B6), r(0x1172B, 0x1172B), r(0x11839, 0x11839), r(0x1193D, 0x1193E),
    r(0x119E0, 0x119E0), r(0x11A34, 0x11A34), r(0x11A47, 0x11A47), r(0x11A99, 0x11A99),
    r(0x11C3F, 0x11C3F), r(0x11D44, 0x11D45), r(0x11D97, 0x11D97), r(0x11F41, 0x11F42),
];
const CONSONANT: &[Range] = &[
    r(0x0915, 0x0939), r(0x0958, 0x095F), r(0x0978, 0x097F), r(0x0995, 0x09A8),
    r(0x09AA, 0x09B0), r(0x09B2, 0x09B2), r(0x09B6, 0x09B9), r(0x09CE, 0x09CE),
    r(0x09DC, 0x09DD), r(0x09DF, 0x09DF), r(0x09F0, 0x09F1), r(0x09FC, 0x09FC),
    r(0x0A15, 0x0A28), r(0x0A2A, 0x0A30), r(0x0A32, 0x0A33), r(0x0A35, 0x0A36),
    r(0x0A38, 0x0A39), r(0x0A59, 0x0A5C), r(0x0A5E, 0x0A5E), r(0x0A95, 0x0AA8),
    r(0x0AAA, 0x0AB0), r(0x0AB2, 0x0AB3), r(0x0AB5, 0x0AB9), r(0x0AF9, 0x0AF9),
    r(0x0B15, 0x0B28), r(0x0B2A, 0x0B30), r(0x0B32, 0x0B33), r(0x0B35, 0x0B39),
    r(0x0B5C, 0x0B5D), r(0x0B5F, 0x0B5F), r(0x0B71, 0x0B71), r(0x0B95, 0x0B95),
    r(0x0B99, 0x0B9A), r(0x0B9C, 0x0B9C), r(0x0B9E, 0x0B9F), r(0x0BA3, 0x0BA4),
    r(0x0BA8, 0x0BAA), r(0x0BAE, 0x0BB9), r(0x0C15, 0x0C28), r(0x0C2A, 0x0C39),
    r(0x0C58, 0x0C5A), r(0x0C5D, 0x0C5D), r(0x0C95, 0x0CA8), r(0x0CAA, 0x0CB3),
    r(0x0CB5, 0x0CB9), r(0x0CDD, 0x0CDE), r(0x0D04, 0x0D04), r(0x0D15, 0x0D3A),
    r(0x0D4E, 0x0D4E), r(0x0D54, 0x0D56), r(0x0D5F, 0x0D5F), r(0x0D7A, 0x0D7F),
    r(0x0D85, 0x0D96), r(0x0D9A, 0x0DB1), r(0x0DB3, 0x0DBB), r(0x0DBD, 0x0DBD),
    r(0x0DC0, 0x0DC6), r(0x0E81, 0x0E82), r(0x0E84, 0x0E84), r(0x0E86, 0x0E8A),
    r(0x0E8C, 0x0EA3), r(0x0EA5, 0x0EA5), r(0x0EA7, 0x0EAC), r(0x0EAE, 0x0EAE),
    r(0x0EDE, 0x0EDF), r(0x1000, 0x1020), r(0x1022, 0x1022), r(0x1028, 0x1028),
    r(0x103F, 0x103F), r(0x1050, 0x1051), r(0x105A, 0x105D), r(0x1061, 0x1061),
    r(0x1065, 0x1066), r(0x106E, 0x1070), r(0x1075, 0x107F), r(0x1703, 0x1711),
    r(0x171F, 0x171F), r(0x1723, 0x1731), r(0x1743, 0x1751), r(0x1763, 0x176C),
    r(0x176E, 0x1770), r(0x1780, 0x17A2), r(0x1A00, 0x1A14), r(0x1A16, 0x1A16),
    r(0x1A20, 0x1A4A), r(0x1A4C, 0x1A4C), r(0x1A53, 0x1A54), r(0x1B05, 0x1B33),
    r(0x1B45, 0x1B4C), r(0x1B86, 0x1B86), r(0x1B89, 0x1BA0), r(0x1BAE, 0x1BAF),
    r(0x1BBB, 0x1BBF), r(0x1BC1, 0x1BE3), r(0x2D30, 0x2D67), r(0xA807, 0xA80A),
    r(0xA80C, 0xA822), r(0xA840, 0xA85C), r(0xA862, 0xA865), r(0xA867, 0xA873),
    r(0xA892, 0xA8B3), r(0xA90A, 0xA921), r(0xA930, 0xA945), r(0xA989, 0xA98B),
    r(0xA98F, 0xA9B2), r(0xA9E0, 0xA9E4), r(0xA9E7, 0xA9EF), r(0xA9FA, 0xA9FE),
    r(0xAA80, 0xAAAF), r(0xAAE2, 0xAAEA), r(0xABC0, 0xABCE), r(0xABD0, 0xABE1),
    r(0x10A10, 0x10A13), r(0x10A15, 0x10A17), r(0x10A19, 0x10A35), r(0x10A60, 0x10A7C),
    r(0x11013, 0x11037), r(0x11071, 0x11072), r(0x11075, 0x11075), r(0x1108D, 0x110AF),
    r(0x110D0, 0x110E8), r(0x11107, 0x11126), r(0x11144, 0x11144), r(0x11147, 0x11147),
    r(0x11155, 0x11172), r(0x11191, 0x111B2), r(0x11208, 0x11211), r(0x11213, 0x1122B),
    r(0x1123F, 0x1123F), r(0x11284, 0x11286), r(0x11288, 0x11288), r(0x1128A, 0x1128D),
    r(0x1128F, 0x1129D), r(0x1129F, 0x112A8), r(0x112BA, 0x112DE), r(0x11315, 0x11328),
    r(0x1132A, 0x11330), r(0x11332, 0x11333), r(0x11335, 0x11339), r(0x1135E, 0x1135F),
    r(0x1140E, 0x11434), r(0x1145F, 0x1145F), r(0x1148F, 0x114AF), r(0x1158E, 0x115AE),
    r(0x115D8, 0x115DB), r(0x1160E, 0x1162F), r(0x1168A, 0x116AA), r(0x116B8, 0x116B8),
    r(0x11700, 0x11711), r(0x11713, 0x1171A), r(0x11740, 0x11746), r(0x1180A, 0x1182B),
    r(0x1190C, 0x11913), r(0x11915, 0x11916), r(0x11918, 0x1192F), r(0x119AE, 0x119D0),
    r(0x11A0B, 0x11A32), r(0x11A3A, 0x11A3A), r(0x11A5C, 0x11A83), r(0x11A86, 0x11A89),
    r(0x11AC0, 0x11AD4), r(0x11ADA, 0x11AE4), r(0x11C0E, 0x11C2E), r(0x11C72, 0x11C7F),
    r(0x11D0C, 0x11D30), r(0x11D6C, 0x11D89), r(0x11F12, 0x11F33),
];
const VS16: &[Range] = &[
    r(0x0023, 0x0023), r(0x002A, 0x002A), r(0x0030, 0x0039), r(0x00A9, 0x00A9),
    r(0x00AE, 0x00AE), r(0x203C, 0x203C), r(0x2049, 0x2049), r(0x2122, 0x2122),
    r(0x2139, 0x2139), r(0x2194, 0x2199), r(0x21A9, 0x21AA), r(0x2328, 0x2328),
    r(0x23CF, 0x23CF), r(0x23ED, 0x23EF), r(0x23F1, 0x23F2), r(0x23F8, 0x23FA),
    r(0x24C2, 0x24C2), r(0x25AA, 0x25AB), r(0x25B6, 0x25B6), r(0x25C0, 0x25C0),
    r(0x25FB, 0x25FC), r(0x2600, 0x2604), r(0x260E, 0x260E), r(0x2611, 0x2611),
    r(0x2618, 0x2618), r(0x261D, 0x261D), r(0x2620, 0x2620), r(0x2622, 0x2623),
    r(0x2626, 0x2626), r(0x262A, 0x262A), r(0x262E, 0x262F), r(0x2638, 0x263A),
    r(0x2640, 0x2640), r(0x2642, 0x2642), r(0x265F, 0x2660), r(0x2663, 0x2663),
    r(0x2665, 0x2666), r(0x2668, 0x2668), r(0x267B, 0x267B), r(0x267E, 0x267E),
    r(0x2692, 0x2692), r(0x2694, 0x2697), r(0x2699, 0x2699), r(0x269B, 0x269C),
    r(0x26A0, 0x26A0), r(0x26A7, 0x26A7), r(0x26B0, 0x26B1), r(0x26C8, 0x26C8),
    r(0x26CF, 0x26CF), r(0x26D1, 0x26D1), r(0x26D3, 0x26D3), r(0x26E9, 0x26E9),
    r(0x26F0, 0x26F1), r(0x26F4, 0x26F4), r(0x26F7, 0x26F9), r(0x2702, 0x2702),
    r(0x2708, 0x2709), r(0x270C, 0x270D), r(0x270F, 0x270F), r(0x2712, 0x2712),
    r(0x2714, 0x2714), r(0x2716, 0x2716), r(0x271D, 0x271D), r(0x2721, 0x2721),
    r(0x2733, 0x2734), r(0x2744, 0x2744), r(0x2747, 0x2747), r(0x2763, 0x2764),
    r(0x27A1, 0x27A1), r(0x2934, 0x2935), r(0x2B05, 0x2B07), r(0x1F170, 0x1F171),
    r(0x1F17E, 0x1F17F), r(0x1F321, 0x1F321), r(0x1F324, 0x1F32C), r(0x1F336, 0x1F336),
    r(0x1F37D, 0x1F37D), r(0x1F396, 0x1F397), r(0x1F399, 0x1F39B), r(0x1F39E, 0x1F39F),
    r(0x1F3CB, 0x1F3CE), r(0x1F3D4, 0x1F3DF), r(0x1F3F3, 0x1F3F3), r(0x1F3F5, 0x1F3F5),
    r(0x1F3F7, 0x1F3F7), r(0x1F43F, 0x1F43F), r(0x1F441, 0x1F441), r(0x1F4FD, 0x1F4FD),
    r(0x1F549, 0x1F54A), r(0x1F56F, 0x1F570), r(0x1F573, 0x1F579), r(0x1F587, 0x1F587),
    r(0x1F58A, 0x1F58D), r(0x1F590, 0x1F590), r(0x1F5A5, 0x1F5A5), r(0x1F5A8, 0x1F5A8),
    r(0x1F5B1, 0x1F5B2), r(0x1F5BC, 0x1F5BC), r(0x1F5C2, 0x1F5C4), r(0x1F5D1, 0x1F5D3),
    r(0x1F5DC, 0x1F5DE), r(0x1F5E1, 0x1F5E1), r(0x1F5E3, 0x1F5E3), r(0x1F5E8, 0x1F5E8),
    r(0x1F5EF, 0x1F5EF), r(0x1F5F3, 0x1F5F3), r(0x1F5FA, 0x1F5FA), r(0x1F6CB, 0x1F6CB),
    r(0x1F6CD, 0x1F6CF), r(0x1F6E0, 0x1F6E5), r(0x1F6E9, 0x1F6E9), r(0x1F6F0, 0x1F6F0),
    r(0x1F6F3, 0x1F6F3),
];
