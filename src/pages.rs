//! Page discovery and translation parity comparison.
//!
//! A "page" is an `.html` file inside a language directory; its identifier is
//! the filename minus the extension. Parity holds when the English and
//! Spanish directories contain the same identifier set.

use std::fs;
use std::path::Path;

/// File extension that marks a page inside a language directory.
pub const PAGE_EXTENSION: &str = "html";

/// Name of the English content directory under the site root.
pub const EN_DIR: &str = "en";

/// Name of the Spanish content directory under the site root.
pub const ES_DIR: &str = "es";

/// List page identifiers in `dir`, in directory-listing order.
///
/// An unreadable or missing directory is reported on stderr and treated as
/// containing zero pages. No sorting is applied, so the order is
/// filesystem-dependent.
pub fn list_page_ids(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Error reading directory {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    let suffix = format!(".{}", PAGE_EXTENSION);
    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let id = name.strip_suffix(&suffix)?;
            Some(id.to_string())
        })
        .collect()
}

/// Count page files in `dir`. Used by the informational structure check,
/// which only cares about balance, not identifiers.
pub fn count_pages(dir: &Path) -> usize {
    list_page_ids(dir).len()
}

/// The set of page identifiers found in one language directory.
///
/// Directory listings cannot repeat a filename, so identifiers are unique.
/// Listing order is preserved for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSet {
    ids: Vec<String>,
}

impl PageSet {
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            ids: list_page_ids(dir),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Identifiers present in `self` but not in `other`, in `self`'s order.
    pub fn difference(&self, other: &PageSet) -> Vec<String> {
        self.ids
            .iter()
            .filter(|id| !other.contains(id))
            .cloned()
            .collect()
    }
}

impl FromIterator<String> for PageSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Result of comparing the English and Spanish page sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    /// Pages that exist in Spanish but have no English version.
    pub missing_en: Vec<String>,
    /// Pages that exist in English but have no Spanish version.
    pub missing_es: Vec<String>,
}

impl ParityReport {
    pub fn compare(en: &PageSet, es: &PageSet) -> Self {
        Self {
            missing_en: es.difference(en),
            missing_es: en.difference(es),
        }
    }

    /// True when both sides contain exactly the same identifiers.
    pub fn is_clean(&self) -> bool {
        self.missing_en.is_empty() && self.missing_es.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_en.len() + self.missing_es.len()
    }
}
