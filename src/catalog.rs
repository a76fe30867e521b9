//! Optional reference catalog lookup.
//!
//! A catalog maps an identifier to descriptive details (brand, family and a
//! reference URL). Extraction never depends on it; when no catalog is
//! available the output simply carries empty values.
//!
//! [`CsvCatalog`] reads a reference table with a header row. Columns are
//! located by header name:
//!
//! | Field | First header containing (case-insensitive) |
//! |-------|---------------------------------------------|
//! | brand | `brand` |
//! | family | `family`, `collection` or `model` |
//! | url | `url` or `link` |
//!
//! Columns are searched left to right: the first column holding a cell that
//! contains the identifier decides, and within it the topmost such row wins.

use serde::{Deserialize, Serialize};

use crate::extract::Identifier;

/// Descriptive details for an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub brand: String,
    pub family: String,
    pub url: String,
}

impl CatalogInfo {
    pub fn new(
        brand: impl Into<String>,
        family: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            family: family.into(),
            url: url.into(),
        }
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.brand.is_empty() && self.family.is_empty() && self.url.is_empty()
    }
}

impl std::fmt::Display for CatalogInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.brand, self.family, self.url)
    }
}

/// Source of [`CatalogInfo`] for an identifier.
pub trait Catalog {
    /// Returns the details for `id`, or `None` if the catalog has no entry.
    fn lookup(&self, id: &Identifier) -> Option<CatalogInfo>;
}

#[cfg(feature = "catalog")]
pub use csv_catalog::CsvCatalog;

#[cfg(feature = "catalog")]
mod csv_catalog {
    use std::path::Path;

    use tracing::debug;

    use super::{Catalog, CatalogInfo};
    use crate::error::{Result, TradepackError};
    use crate::extract::Identifier;

    /// A reference table loaded from a CSV file.
    #[derive(Debug, Clone)]
    pub struct CsvCatalog {
        brand_col: Option<usize>,
        family_col: Option<usize>,
        url_col: Option<usize>,
        rows: Vec<Vec<String>>,
    }

    fn find_column(headers: &[String], needles: &[&str]) -> Option<usize> {
        headers.iter().position(|header| {
            let header = header.to_lowercase();
            needles.iter().any(|needle| header.contains(needle))
        })
    }

    impl CsvCatalog {
        /// Loads a reference table from a CSV file.
        ///
        /// The delimiter is detected from the header line (`;` or `,`).
        ///
        /// # Errors
        ///
        /// Returns [`TradepackError::Catalog`] if the file is missing or has
        /// no header row, and [`TradepackError::Csv`] if a row is malformed.
        pub fn open(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .map_err(|e| TradepackError::catalog(path, e.to_string()))?;
            let catalog = Self::from_csv_str(&content)
                .map_err(|e| match e {
                    TradepackError::Catalog { message, .. } => TradepackError::catalog(path, message),
                    other => other,
                })?;
            debug!(path = %path.display(), rows = catalog.rows.len(), "loaded reference catalog");
            Ok(catalog)
        }

        /// Parses a reference table from CSV text.
        pub fn from_csv_str(content: &str) -> Result<Self> {
            let header_line = content.lines().next().unwrap_or_default();
            let delimiter = if header_line.matches(';').count() > header_line.matches(',').count() {
                b';'
            } else {
                b','
            };

            let mut reader = csv::ReaderBuilder::new()
                .delimiter(delimiter)
                .flexible(true)
                .from_reader(content.as_bytes());

            let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
            if headers.iter().all(|h| h.trim().is_empty()) {
                return Err(TradepackError::catalog("<memory>", "missing header row"));
            }

            let mut rows = Vec::new();
            for record in reader.records() {
                rows.push(record?.iter().map(str::to_string).collect());
            }

            Ok(Self {
                brand_col: find_column(&headers, &["brand"]),
                family_col: find_column(&headers, &["family", "collection", "model"]),
                url_col: find_column(&headers, &["url", "link"]),
                rows,
            })
        }

        pub fn len(&self) -> usize {
            self.rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.rows.is_empty()
        }
    }

    impl Catalog for CsvCatalog {
        fn lookup(&self, id: &Identifier) -> Option<CatalogInfo> {
            // Column-major: the first column with any hit wins, then its first row.
            let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
            let row = (0..width).find_map(|col| {
                self.rows
                    .iter()
                    .find(|row| row.get(col).is_some_and(|cell| id.is_substring_of(cell)))
            })?;

            let cell = |col: Option<usize>| {
                col.and_then(|i| row.get(i))
                    .map(|value| value.trim().to_string())
                    .unwrap_or_default()
            };

            Some(CatalogInfo {
                brand: cell(self.brand_col),
                family: cell(self.family_col),
                url: cell(self.url_col),
            })
        }
    }

}
