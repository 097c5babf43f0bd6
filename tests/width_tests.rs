//! Width tests across the public API
//!
//! Literal cases first, then property tests over random and
//! hand-picked alphabets, then differential checks against the
//! `unicode-width` and `unicode-segmentation` crates on the subsets
//! where terminal rules and theirs agree.

use mochi_width::{
    clip, grapheme_boundary_before, iter_graphemes, iter_graphemes_reverse, list_versions,
    propagate_sgr, strip_sequences, wcswidth, wcswidth_codepoints, wcwidth, width, wrap,
    DatasetCollection, WidthError,
};
use proptest::prelude::*;

fn clusters(text: &str) -> Vec<(&str, isize)> {
    iter_graphemes(text, None)
        .unwrap()
        .map(|g| (g.text, g.width))
        .collect()
}

// ============================================================================
// Literal cases
// ============================================================================

#[test]
fn test_wcwidth_boundary_cases() {
    assert_eq!(wcwidth(0x0000, None), Ok(0));
    assert_eq!(wcwidth(0x0041, None), Ok(1));
    assert_eq!(wcwidth(0x4E2D, None), Ok(2));
    assert_eq!(wcwidth(0x0301, None), Ok(0));
    assert_eq!(wcwidth(0x001B, None), Ok(-1));
    assert_eq!(wcwidth(0x0085, None), Ok(-1));
    assert_eq!(wcwidth(0x2FFFD, None), Ok(2));
    assert_eq!(wcwidth(0x3FFFD, None), Ok(2));
    assert_eq!(wcwidth(0x4DB6, Some("9.0")), Ok(2));
    assert_eq!(wcwidth(0x9FFD, Some("13.0")), Ok(2));
}

#[test]
fn test_wcwidth_errors() {
    assert!(matches!(
        wcwidth(0x110000, None),
        Err(WidthError::InvalidCodepoint { codepoint: 0x110000, .. })
    ));
    assert!(matches!(
        wcwidth(0x41, Some("x.y")),
        Err(WidthError::InvalidVersion(_))
    ));
}

#[test]
fn test_wcswidth_literals() {
    assert_eq!(wcswidth("A\u{301}", None, None), Ok(1));
    assert_eq!(wcswidth("\u{1F1FA}\u{1F1F8}", None, None), Ok(2));
    assert_eq!(wcswidth("\u{915}\u{94D}\u{937}\u{93E}", None, None), Ok(2));
    assert_eq!(wcswidth("コンニチハ", None, None), Ok(10));
    assert_eq!(wcswidth("abc\n", None, None), Ok(-1));
    assert_eq!(wcswidth("コンニチハ", Some(2), None), Ok(4));
    assert_eq!(wcswidth("\u{915}\u{94D}\u{937}\u{93C}\u{93E}", None, None), Ok(2));
}

#[test]
fn test_subdivision_flag_is_one_cluster() {
    let england = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";
    assert_eq!(clusters(england), vec![(england, 2)]);
    assert_eq!(clip(&format!("ab{england}"), 2, 4), england);
}

#[test]
fn test_wcswidth_codepoints_reports_index() {
    assert_eq!(wcswidth_codepoints(&[0x41, 0x4E2D], None, None), Ok(3));
    assert_eq!(
        wcswidth_codepoints(&[0x41, 0x42, 0x110000], None, None),
        Err(WidthError::InvalidCodepoint {
            codepoint: 0x110000,
            index: Some(2)
        })
    );
    // The limit stops before the bad value
    assert_eq!(wcswidth_codepoints(&[0x41, 0x110000], Some(1), None), Ok(1));
}

#[test]
fn test_flag_is_one_cluster() {
    assert_eq!(clusters("\u{1F1FA}\u{1F1F8}"), vec![("\u{1F1FA}\u{1F1F8}", 2)]);
}

#[test]
fn test_reverse_iteration() {
    let text = "ab\u{1F468}\u{200D}\u{1F469}中";
    let reverse: Vec<&str> = iter_graphemes_reverse(text, None)
        .unwrap()
        .map(|g| g.text)
        .collect();
    assert_eq!(reverse, vec!["中", "\u{1F468}\u{200D}\u{1F469}", "b", "a"]);
}

#[test]
fn test_boundary_before_end() {
    let text = "x\u{1F44D}\u{1F3FD}";
    assert_eq!(grapheme_boundary_before(text, text.len(), None), Ok(1));
    assert_eq!(grapheme_boundary_before("", 0, None), Ok(0));
}

#[test]
fn test_versions() {
    let versions = list_versions();
    assert_eq!(versions.len(), 19);
    assert_eq!(versions.first(), Some(&"4.1.0"));
    assert_eq!(versions.last(), Some(&"15.1.0"));
    assert!(versions.contains(&"10.0.0") && versions.contains(&"12.0.0"));
    // Emoji widened in 9.0
    assert_eq!(wcwidth(0x231A, Some("5.2")), Ok(1));
    assert_eq!(wcwidth(0x231A, Some("9.0")), Ok(2));
    assert_eq!(wcwidth(0x231A, Some("8.0")), Ok(1));
}

#[test]
fn test_text_helpers() {
    assert_eq!(width("\x1b[1mbold\x1b[0m\tx"), Ok(9));
    assert_eq!(strip_sequences("\x1b[31mred\x1b[0m"), "red");
    assert_eq!(clip("\x1b[1;34mHello world\x1b[0m", 6, 11), "\x1b[1;34mworld\x1b[0m");
    assert_eq!(wrap("hello world", 5), vec!["hello", "world"]);
    assert_eq!(
        propagate_sgr(&["\x1b[31mhello", "world"]),
        vec!["\x1b[31mhello\x1b[0m", "\x1b[31mworld\x1b[0m"]
    );
}

// ============================================================================
// Properties
// ============================================================================

fn is_control(c: char) -> bool {
    let cp = c as u32;
    (0x01..0x20).contains(&cp) || (0x7F..0xA0).contains(&cp)
}

/// Characters that exercise every contextual rule
fn interesting_text() -> impl Strategy<Value = String> {
    let alphabet = vec![
        'a', ' ', '中', '\u{301}', '\u{200D}', '\u{FE0F}', '\u{1F1FA}', '\u{1F1F8}', '\u{1F468}',
        '\u{1F469}', '\u{1F3FB}', '\u{2764}', '\u{915}', '\u{937}', '\u{94D}', '\u{93E}',
        '\u{93F}', '\u{1100}', '\u{1161}', '\u{11A8}', '\r', '\n', '\t', '\0', '\u{AD}',
    ];
    prop::collection::vec(prop::sample::select(alphabet), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_wcwidth_is_total_and_pure(cp in 0u32..0x110000) {
        let first = wcwidth(cp, None).unwrap();
        prop_assert!((-1..=2).contains(&first));
        prop_assert_eq!(wcwidth(cp, None).unwrap(), first);
    }

    #[test]
    fn prop_minus_one_iff_control(text in any::<String>()) {
        let has_control = text.chars().any(is_control);
        prop_assert_eq!(wcswidth(&text, None, None).unwrap() == -1, has_control);
    }

    #[test]
    fn prop_clusters_sum_to_wcswidth(text in interesting_text()) {
        let total = wcswidth(&text, None, None).unwrap();
        if total != -1 {
            let sum: isize = iter_graphemes(&text, None).unwrap().map(|g| g.width).sum();
            prop_assert_eq!(sum, total);
        }
    }

    #[test]
    fn prop_clusters_sum_to_wcswidth_any(text in any::<String>()) {
        let total = wcswidth(&text, None, None).unwrap();
        if total != -1 {
            let sum: isize = iter_graphemes(&text, None).unwrap().map(|g| g.width).sum();
            prop_assert_eq!(sum, total);
        }
    }

    #[test]
    fn prop_clusters_cover_text(text in interesting_text()) {
        let joined: String = iter_graphemes(&text, None).unwrap().map(|g| g.text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_reverse_symmetry(text in interesting_text()) {
        let mut forward: Vec<_> = iter_graphemes(&text, None).unwrap().collect();
        forward.reverse();
        let reverse: Vec<_> = iter_graphemes_reverse(&text, None).unwrap().collect();
        prop_assert_eq!(forward, reverse);
    }

    #[test]
    fn prop_boundary_round_trip(text in interesting_text()) {
        let last = iter_graphemes(&text, None).unwrap().last().map_or(0, |g| g.start);
        prop_assert_eq!(grapheme_boundary_before(&text, text.len(), None).unwrap(), last);
    }

    #[test]
    fn prop_future_version_is_latest(major in 16u32..1000, minor in 0u32..100) {
        let builtin = DatasetCollection::builtin();
        let request = format!("{major}.{minor}");
        let resolved = builtin.resolve(Some(&request)).unwrap();
        prop_assert_eq!(&resolved.version, &builtin.latest().version);
    }

    #[test]
    fn prop_strip_is_idempotent(text in any::<String>()) {
        let once = strip_sequences(&text);
        prop_assert_eq!(strip_sequences(&once), once.clone());
    }

    #[test]
    fn prop_wrapped_lines_fit(words in prop::collection::vec("[a-z]{1,8}|[中文字]{1,4}", 1..20), w in 2usize..30) {
        let text = words.join(" ");
        for line in wrap(&text, w) {
            prop_assert!(width(&line).unwrap() <= w, "{:?} wider than {}", line, w);
        }
    }
}

#[test]
fn test_future_version_literal() {
    let builtin = DatasetCollection::builtin();
    assert_eq!(
        builtin.resolve(Some("999.0")).unwrap().version,
        builtin.resolve(None).unwrap().version
    );
}

// ============================================================================
// Differential checks
// ============================================================================

#[test]
fn test_matches_unicode_width_on_cjk_and_ascii() {
    use unicode_width::UnicodeWidthChar;

    let ascii = 0x20u32..0x7F;
    let cjk = 0x4E00u32..0x9FFF;
    let hiragana = 0x3041u32..0x3097;
    for cp in ascii.chain(cjk).chain(hiragana) {
        let c = char::from_u32(cp).unwrap();
        let expected = c.width().unwrap() as i8;
        assert_eq!(wcwidth(cp, None), Ok(expected), "U+{cp:04X}");
    }
}

#[test]
fn test_matches_unicode_width_on_combining_marks() {
    use unicode_width::UnicodeWidthChar;

    for cp in 0x0300u32..0x0370 {
        let c = char::from_u32(cp).unwrap();
        assert_eq!(c.width(), Some(0), "U+{cp:04X}");
        assert_eq!(wcwidth(cp, None), Ok(0), "U+{cp:04X}");
    }
}

proptest! {
    #[test]
    fn prop_clusters_match_unicode_segmentation(text in "([a-zA-Z][\u{300}-\u{36F}]{0,2}|[\u{4E00}-\u{4E20}]){0,16}") {
        use unicode_segmentation::UnicodeSegmentation;

        let ours: Vec<&str> = iter_graphemes(&text, None).unwrap().map(|g| g.text).collect();
        let theirs: Vec<&str> = text.graphemes(true).collect();
        prop_assert_eq!(ours, theirs);
    }
}
