//! Codepoint range tables and binary search
//!
//! A [`CategoryTable`] is a sorted list of disjoint closed ranges. Builtin
//! tables borrow static arrays; tables loaded from JSON own their ranges.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Closed interval `[lo, hi]` of codepoints sharing one property.
///
/// Serialized as a two element array, `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Range {
    pub lo: u32,
    pub hi: u32,
}

impl Range {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.lo <= cp && cp <= self.hi
    }

    fn cmp_codepoint(&self, cp: u32) -> Ordering {
        if self.contains(cp) {
            Ordering::Equal
        } else if cp < self.lo {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl From<(u32, u32)> for Range {
    fn from((lo, hi): (u32, u32)) -> Self {
        Self { lo, hi }
    }
}

impl From<Range> for (u32, u32) {
    fn from(range: Range) -> Self {
        (range.lo, range.hi)
    }
}

/// Find the range containing `cp` in a sorted, disjoint table.
#[inline]
pub fn bisearch(cp: u32, table: &[Range]) -> Option<&Range> {
    // Cheap rejection before touching the middle of the table
    match (table.first(), table.last()) {
        (Some(first), Some(last)) if cp >= first.lo && cp <= last.hi => {},
        _ => return None,
    }
    table
        .binary_search_by(|range| range.cmp_codepoint(cp))
        .ok()
        .map(|i| &table[i])
}

/// Ordered ranges for one semantic property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    ranges: Cow<'static, [Range]>,
}

impl CategoryTable {
    pub const fn from_static(ranges: &'static [Range]) -> Self {
        Self {
            ranges: Cow::Borrowed(ranges),
        }
    }

    pub fn from_ranges(ranges: Vec<Range>) -> Self {
        Self {
            ranges: Cow::Owned(ranges),
        }
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        bisearch(cp, &self.ranges).is_some()
    }

    /// The range holding `cp`, if any
    #[inline]
    pub fn find(&self, cp: u32) -> Option<Range> {
        bisearch(cp, &self.ranges).copied()
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Index of the first range that breaks the sorted/disjoint invariant
    pub fn first_violation(&self) -> Option<usize> {
        for (i, range) in self.ranges.iter().enumerate() {
            if range.lo > range.hi {
                return Some(i);
            }
            if i > 0 && self.ranges[i - 1].hi >= range.lo {
                return Some(i);
            }
        }
        None
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::from_static(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[Range] = &[
        Range::new(0x0300, 0x036F),
        Range::new(0x0483, 0x0489),
        Range::new(0x1F1E6, 0x1F1FF),
    ];

    #[test]
    fn test_bisearch_hits_and_misses() {
        assert_eq!(bisearch(0x0300, TABLE), Some(&TABLE[0]));
        assert_eq!(bisearch(0x036F, TABLE), Some(&TABLE[0]));
        assert_eq!(bisearch(0x0485, TABLE), Some(&TABLE[1]));
        assert_eq!(bisearch(0x1F1FA, TABLE), Some(&TABLE[2]));
        assert_eq!(bisearch(0x0041, TABLE), None);
        assert_eq!(bisearch(0x0400, TABLE), None);
        assert_eq!(bisearch(0x10FFFF, TABLE), None);
    }

    #[test]
    fn test_range_contains_is_closed() {
        let range = Range::new(0x0483, 0x0489);
        assert!(range.contains(0x0483));
        assert!(range.contains(0x0489));
        assert!(!range.contains(0x0482));
        assert!(!range.contains(0x048A));
        assert!(Range::new(0x41, 0x41).contains(0x41));
    }

    #[test]
    fn test_bisearch_empty_table() {
        assert_eq!(bisearch(0, &[]), None);
    }

    #[test]
    fn test_category_table_find() {
        let table = CategoryTable::from_static(TABLE);
        assert!(table.contains(0x0301));
        assert_eq!(table.find(0x1F1E6), Some(Range::new(0x1F1E6, 0x1F1FF)));
        assert_eq!(table.find(0x20), None);
    }

    #[test]
    fn test_first_violation() {
        assert_eq!(CategoryTable::from_static(TABLE).first_violation(), None);

        let overlapping = CategoryTable::from_ranges(vec![Range::new(1, 5), Range::new(5, 9)]);
        assert_eq!(overlapping.first_violation(), Some(1));

        let inverted = CategoryTable::from_ranges(vec![Range::new(9, 1)]);
        assert_eq!(inverted.first_violation(), Some(0));
    }

    #[test]
    fn test_range_serializes_as_pair() {
        let table = CategoryTable::from_ranges(vec![Range::new(0x41, 0x5A)]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "[[65,90]]");
        let restored: CategoryTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
    }
}
