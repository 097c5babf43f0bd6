//! Versioned datasets
//!
//! A [`VersionDataset`] bundles every category table for one Unicode
//! release. Datasets are immutable after construction and are shared freely
//! between threads; the builtin collection is built once on first use.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, WidthError};
use crate::table::CategoryTable;
use crate::tables::{self, TableSet};
use crate::version::{resolve_index, UnicodeVersion};

/// All category tables effective at one Unicode version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionDataset {
    pub version: UnicodeVersion,
    /// Nonspacing and enclosing marks, format controls, separators, medial jamo
    pub zero_width: CategoryTable,
    /// East Asian Wide and Fullwidth
    pub wide: CategoryTable,
    /// East Asian Ambiguous
    #[serde(default)]
    pub ambiguous: CategoryTable,
    /// General category Mc
    pub spacing_mark: CategoryTable,
    /// Marks that extend the preceding cluster
    pub combining: CategoryTable,
    /// Canonical combining class 9
    pub virama: CategoryTable,
    /// Consonants of scripts that form conjuncts
    pub consonant: CategoryTable,
    /// Narrow bases that turn wide under U+FE0F
    #[serde(default)]
    pub vs16: CategoryTable,
    #[serde(default = "default_extended_pictographic")]
    pub extended_pictographic: CategoryTable,
    #[serde(default = "default_regional_indicator")]
    pub regional_indicator: CategoryTable,
    #[serde(default = "default_emoji_modifier")]
    pub emoji_modifier: CategoryTable,
}

fn default_extended_pictographic() -> CategoryTable {
    CategoryTable::from_static(tables::EXTENDED_PICTOGRAPHIC)
}

fn default_regional_indicator() -> CategoryTable {
    CategoryTable::from_static(tables::REGIONAL_INDICATOR)
}

fn default_emoji_modifier() -> CategoryTable {
    CategoryTable::from_static(tables::EMOJI_MODIFIER)
}

impl VersionDataset {
    fn from_table_set(set: &TableSet) -> Result<Self, WidthError> {
        Ok(Self {
            version: UnicodeVersion::parse(set.version)?,
            zero_width: CategoryTable::from_static(set.zero_width),
            wide: CategoryTable::from_static(set.wide),
            ambiguous: CategoryTable::from_static(set.ambiguous),
            spacing_mark: CategoryTable::from_static(set.spacing_mark),
            combining: CategoryTable::from_static(set.combining),
            virama: CategoryTable::from_static(set.virama),
            consonant: CategoryTable::from_static(set.consonant),
            vs16: CategoryTable::from_static(set.vs16),
            extended_pictographic: default_extended_pictographic(),
            regional_indicator: default_regional_indicator(),
            emoji_modifier: default_emoji_modifier(),
        })
    }

    fn categories(&self) -> [(&'static str, &CategoryTable); 11] {
        [
            ("zero_width", &self.zero_width),
            ("wide", &self.wide),
            ("ambiguous", &self.ambiguous),
            ("spacing_mark", &self.spacing_mark),
            ("combining", &self.combining),
            ("virama", &self.virama),
            ("consonant", &self.consonant),
            ("vs16", &self.vs16),
            ("extended_pictographic", &self.extended_pictographic),
            ("regional_indicator", &self.regional_indicator),
            ("emoji_modifier", &self.emoji_modifier),
        ]
    }

    /// Check every table is sorted and disjoint
    pub fn validate(&self) -> Result<(), DatasetError> {
        for (category, table) in self.categories() {
            if let Some(index) = table.first_violation() {
                return Err(DatasetError::UnsortedTable {
                    version: self.version.to_string(),
                    category,
                    index,
                });
            }
        }
        Ok(())
    }
}

/// An ordered set of datasets, one per version.
#[derive(Debug, Clone)]
pub struct DatasetCollection {
    // Sorted ascending by version, never empty
    datasets: Vec<VersionDataset>,
    versions: Vec<UnicodeVersion>,
}

impl DatasetCollection {
    /// Build a collection, validating every dataset.
    pub fn new(mut datasets: Vec<VersionDataset>) -> Result<Self, DatasetError> {
        if datasets.is_empty() {
            return Err(DatasetError::Empty);
        }
        for dataset in &datasets {
            dataset.validate()?;
        }
        datasets.sort_by(|a, b| a.version.cmp(&b.version));
        if let Some(pair) = datasets.windows(2).find(|w| w[0].version == w[1].version) {
            return Err(DatasetError::DuplicateVersion(pair[1].version.to_string()));
        }
        let versions = datasets.iter().map(|d| d.version.clone()).collect();
        Ok(Self { datasets, versions })
    }

    /// The tables compiled into this crate
    pub fn builtin() -> &'static DatasetCollection {
        static BUILTIN: OnceLock<DatasetCollection> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let datasets = tables::BUILTIN
                .iter()
                .filter_map(builtin_dataset)
                .collect::<Vec<_>>();
            let versions = datasets.iter().map(|d| d.version.clone()).collect();
            tracing::debug!(count = datasets.len(), "Initialized builtin Unicode tables");
            DatasetCollection { datasets, versions }
        })
    }

    /// Parse a JSON array of datasets
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let datasets: Vec<VersionDataset> = serde_json::from_str(json)?;
        Self::new(datasets)
    }

    /// Load a JSON array of datasets from a file
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_json(&content)?;
        for version in collection.versions() {
            tracing::info!(%version, path = %path.display(), "Loaded Unicode tables");
        }
        Ok(collection)
    }

    /// Combine with `other`; on a version clash the dataset from `other` wins
    pub fn merged_with(&self, other: &DatasetCollection) -> DatasetCollection {
        let mut datasets: Vec<VersionDataset> = self
            .datasets
            .iter()
            .filter(|d| !other.versions.contains(&d.version))
            .cloned()
            .collect();
        datasets.extend(other.datasets.iter().cloned());
        datasets.sort_by(|a, b| a.version.cmp(&b.version));
        let versions = datasets.iter().map(|d| d.version.clone()).collect();
        DatasetCollection { datasets, versions }
    }

    pub fn versions(&self) -> impl Iterator<Item = &UnicodeVersion> + '_ {
        self.versions.iter()
    }

    pub fn datasets(&self) -> &[VersionDataset] {
        &self.datasets
    }

    pub fn latest(&self) -> &VersionDataset {
        // Non-empty by construction
        &self.datasets[self.datasets.len() - 1]
    }

    pub fn oldest(&self) -> &VersionDataset {
        &self.datasets[0]
    }

    /// Exact lookup, with zero padding (`"9.0"` finds `9.0.0`)
    pub fn get(&self, version: &str) -> Option<&VersionDataset> {
        let wanted = UnicodeVersion::parse(version).ok()?;
        self.datasets.iter().find(|d| d.version == wanted)
    }

    /// Resolve a requested version to a dataset.
    ///
    /// `None`, `""` and `"latest"` select the newest dataset.
    pub fn resolve(&self, request: Option<&str>) -> Result<&VersionDataset, WidthError> {
        Ok(match resolve_index(request, &self.versions)? {
            Some((index, _)) => &self.datasets[index],
            None => self.latest(),
        })
    }
}

/// Convert and check one compiled-in release, logging it if it is broken
fn builtin_dataset(set: &TableSet) -> Option<VersionDataset> {
    let checked = VersionDataset::from_table_set(set)
        .map_err(DatasetError::from)
        .and_then(|dataset| dataset.validate().map(|()| dataset));
    match checked {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            tracing::error!(
                version = set.version,
                error = %e,
                "Skipping broken builtin Unicode tables"
            );
            None
        },
    }
}

/// Builtin version identifiers, oldest first
pub fn list_versions() -> Vec<&'static str> {
    tables::BUILTIN.iter().map(|set| set.version).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Range;

    #[test]
    fn test_builtin_collection() {
        let builtin = DatasetCollection::builtin();
        assert_eq!(builtin.datasets().len(), tables::BUILTIN.len());
        assert_eq!(builtin.latest().version.as_str(), "15.1.0");
        assert_eq!(builtin.oldest().version.as_str(), "4.1.0");
        for dataset in builtin.datasets() {
            dataset.validate().unwrap();
        }
    }

    #[test]
    fn test_list_versions_matches_collection() {
        let listed = list_versions();
        let collected: Vec<&str> = DatasetCollection::builtin()
            .versions()
            .map(|v| v.as_str())
            .collect();
        assert_eq!(listed, collected);
    }

    #[test]
    fn test_resolve() {
        let builtin = DatasetCollection::builtin();
        assert_eq!(builtin.resolve(None).unwrap().version.as_str(), "15.1.0");
        assert_eq!(builtin.resolve(Some("9.0")).unwrap().version.as_str(), "9.0.0");
        assert_eq!(builtin.resolve(Some("10.0")).unwrap().version.as_str(), "10.0.0");
        assert_eq!(builtin.resolve(Some("6.0")).unwrap().version.as_str(), "6.0.0");
        assert_eq!(builtin.resolve(Some("6.4")).unwrap().version.as_str(), "6.3.0");
        assert_eq!(builtin.resolve(Some("999.0")).unwrap().version.as_str(), "15.1.0");
        assert_eq!(builtin.resolve(Some("1.0")).unwrap().version.as_str(), "4.1.0");
        assert!(builtin.resolve(Some("nope")).is_err());
    }

    #[test]
    fn test_get_exact_only() {
        let builtin = DatasetCollection::builtin();
        assert!(builtin.get("12.1").is_some());
        assert!(builtin.get("12.0").is_some());
        assert!(builtin.get("12.2").is_none());
        assert!(builtin.get("garbage").is_none());
    }

    #[test]
    fn test_from_json_defaults_emoji_tables() {
        let json = r#"[{
            "version": "16.0.0",
            "zero_width": [[768, 879]],
            "wide": [[19968, 40959]],
            "spacing_mark": [[2366, 2368]],
            "combining": [[768, 879]],
            "virama": [[2381, 2381]],
            "consonant": [[2325, 2361]]
        }]"#;
        let collection = DatasetCollection::from_json(json).unwrap();
        let dataset = collection.latest();
        assert_eq!(dataset.version.as_str(), "16.0.0");
        assert!(dataset.regional_indicator.contains(0x1F1FA));
        assert!(dataset.emoji_modifier.contains(0x1F3FB));
        assert!(dataset.extended_pictographic.contains(0x1F600));
        assert!(dataset.vs16.is_empty());
    }

    #[test]
    fn test_from_json_rejects_unsorted() {
        let mut dataset = DatasetCollection::builtin().latest().clone();
        dataset.wide = CategoryTable::from_ranges(vec![Range::new(10, 20), Range::new(15, 30)]);
        let err = DatasetCollection::new(vec![dataset]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::UnsortedTable {
                category: "wide",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_empty_and_duplicates() {
        assert!(matches!(DatasetCollection::new(vec![]), Err(DatasetError::Empty)));
        let latest = DatasetCollection::builtin().latest().clone();
        assert!(matches!(
            DatasetCollection::new(vec![latest.clone(), latest]),
            Err(DatasetError::DuplicateVersion(_))
        ));
    }

    #[test]
    fn test_merged_with_prefers_other() {
        let mut replacement = DatasetCollection::builtin().latest().clone();
        replacement.wide = CategoryTable::default();
        let extra = DatasetCollection::new(vec![replacement]).unwrap();
        let merged = DatasetCollection::builtin().merged_with(&extra);
        assert_eq!(merged.datasets().len(), tables::BUILTIN.len());
        assert!(merged.latest().wide.is_empty());
    }

    #[test]
    fn test_broken_builtin_release_is_skipped() {
        let mut set = tables::BUILTIN[0];
        assert!(builtin_dataset(&set).is_some());
        set.version = "four";
        assert!(builtin_dataset(&set).is_none());
        const OVERLAPPING: &[Range] = &[Range::new(0x20, 0x30), Range::new(0x25, 0x40)];
        let mut set = tables::BUILTIN[0];
        set.wide = OVERLAPPING;
        assert!(builtin_dataset(&set).is_none());
    }

    #[test]
    fn test_dataset_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VersionDataset>();
        assert_send_sync::<DatasetCollection>();
    }
}
