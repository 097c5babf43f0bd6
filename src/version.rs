//! Unicode version parsing and resolution
//!
//! Requests resolve monotonically: an exact match wins, otherwise the
//! newest dataset older than the request, never a newer one. Requests below
//! the oldest dataset get the oldest.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WidthError;

/// A parsed Unicode version such as `15.1.0`.
///
/// Comparison is numeric per component with missing components treated as
/// zero, so `9.0` and `9.0.0` are equal.
#[derive(Debug, Clone)]
pub struct UnicodeVersion {
    text: String,
    parts: Vec<u32>,
}

impl UnicodeVersion {
    /// Parse a dotted version string.
    ///
    /// Each component contributes its leading digits; parsing stops at the
    /// first component without any (`"15.1.0-beta"` is `15.1.0`,
    /// `"9.x"` is `9`). Fails only when the first component has no digits.
    pub fn parse(text: &str) -> Result<Self, WidthError> {
        let trimmed = text.trim();
        let mut parts = Vec::with_capacity(3);
        for component in trimmed.split('.') {
            let digits_len = component
                .bytes()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if digits_len == 0 {
                break;
            }
            let value = component[..digits_len]
                .parse::<u32>()
                .map_err(|_| WidthError::InvalidVersion(text.to_string()))?;
            parts.push(value);
            if digits_len != component.len() {
                break;
            }
        }
        if parts.is_empty() {
            return Err(WidthError::InvalidVersion(text.to_string()));
        }
        while parts.len() > 1 && parts.last() == Some(&0) {
            parts.pop();
        }
        Ok(Self {
            text: trimmed.to_string(),
            parts,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric components with trailing zeros removed
    pub fn components(&self) -> &[u32] {
        &self.parts
    }
}

impl PartialEq for UnicodeVersion {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for UnicodeVersion {}

impl PartialOrd for UnicodeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnicodeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Trailing zeros are trimmed, so plain lexicographic order is numeric order
        self.parts.cmp(&other.parts)
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for UnicodeVersion {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for UnicodeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for UnicodeVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// How a request was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No version requested, or "latest"
    Latest,
    Exact,
    /// Newest available version below the request
    Older,
    /// Request predates every dataset
    Oldest,
}

/// Pick an index into `available` (sorted ascending, non-empty) for `request`.
///
/// Returns `None` only when `available` is empty.
pub fn resolve_index(
    request: Option<&str>,
    available: &[UnicodeVersion],
) -> Result<Option<(usize, Resolution)>, WidthError> {
    if available.is_empty() {
        return Ok(None);
    }
    let latest = available.len() - 1;
    let request = match request.map(str::trim) {
        None | Some("") => return Ok(Some((latest, Resolution::Latest))),
        Some(text) if text.eq_ignore_ascii_case("latest") => {
            return Ok(Some((latest, Resolution::Latest)))
        },
        Some(text) => UnicodeVersion::parse(text)?,
    };

    // Number of versions <= request
    let at_or_below = available.partition_point(|v| *v <= request);
    let resolved = match at_or_below {
        0 => (0, Resolution::Oldest),
        n if available[n - 1] == request => (n - 1, Resolution::Exact),
        n => (n - 1, Resolution::Older),
    };

    match resolved.1 {
        Resolution::Exact => {
            tracing::debug!(requested = %request, "Unicode version matched exactly")
        },
        _ => tracing::warn!(
            requested = %request,
            using = %available[resolved.0],
            "Unicode version not available, using nearest dataset"
        ),
    }
    Ok(Some(resolved))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(list: &[&str]) -> Vec<UnicodeVersion> {
        list.iter().map(|v| UnicodeVersion::parse(v).unwrap()).collect()
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(UnicodeVersion::parse("15.1.0").unwrap().components(), &[15, 1]);
        assert_eq!(UnicodeVersion::parse("9.0").unwrap().components(), &[9]);
        assert_eq!(UnicodeVersion::parse(" 13 ").unwrap().components(), &[13]);
        assert_eq!(UnicodeVersion::parse("0").unwrap().components(), &[0]);
    }

    #[test]
    fn test_parse_ignores_suffixes() {
        assert_eq!(
            UnicodeVersion::parse("15.1.0-beta").unwrap(),
            UnicodeVersion::parse("15.1").unwrap()
        );
        assert_eq!(UnicodeVersion::parse("9.x").unwrap().components(), &[9]);
        assert_eq!(UnicodeVersion::parse("12rc1.4").unwrap().components(), &[12]);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for bad in ["", "   ", "latest", "v9", ".1", "x.y"] {
            assert!(
                matches!(UnicodeVersion::parse(bad), Err(WidthError::InvalidVersion(_))),
                "{bad:?} should not parse"
            );
        }
        assert!(UnicodeVersion::parse("99999999999999").is_err());
    }

    #[test]
    fn test_padded_equality_and_order() {
        let a = UnicodeVersion::parse("9.0").unwrap();
        let b = UnicodeVersion::parse("9.0.0").unwrap();
        let c = UnicodeVersion::parse("9.0.1").unwrap();
        let d = UnicodeVersion::parse("10.0.0").unwrap();
        assert_eq!(a, b);
        assert!(b < c);
        assert!(c < d);
        assert_eq!(a.to_string(), "9.0");
    }

    #[test]
    fn test_resolve_index() {
        let available = versions(&["5.2.0", "9.0.0", "12.1.0", "15.1.0"]);
        let resolve = |r: Option<&str>| resolve_index(r, &available).unwrap().unwrap();

        assert_eq!(resolve(None), (3, Resolution::Latest));
        assert_eq!(resolve(Some("")), (3, Resolution::Latest));
        assert_eq!(resolve(Some("latest")), (3, Resolution::Latest));
        assert_eq!(resolve(Some("9.0")), (1, Resolution::Exact));
        assert_eq!(resolve(Some("12.1.0")), (2, Resolution::Exact));
        assert_eq!(resolve(Some("11.0.0")), (1, Resolution::Older));
        assert_eq!(resolve(Some("999.0")), (3, Resolution::Older));
        assert_eq!(resolve(Some("4.1.0")), (0, Resolution::Oldest));
    }

    #[test]
    fn test_resolve_invalid_and_empty() {
        let available = versions(&["15.1.0"]);
        assert!(matches!(
            resolve_index(Some("abc"), &available),
            Err(WidthError::InvalidVersion(_))
        ));
        assert_eq!(resolve_index(Some("15"), &[]).unwrap(), None);
    }
}
