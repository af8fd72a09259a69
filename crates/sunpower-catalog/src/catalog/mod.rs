//! # Catalog Store
//!
//! Holds the product records for the lifetime of the page session.
//!
//! Records are wrapped in `Arc` so the filtered list, the carousel and an
//! open detail modal can all point at the same record without copying it.
//! Nothing hands out `&mut` access, so a record never changes after the
//! store is built.

mod seed;

use std::sync::Arc;

use crate::error::CatalogResult;
use crate::types::{CategoryFilter, ProductRecord};
use crate::validation::validate_records;

/// The immutable product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Arc<ProductRecord>>,
}

impl Catalog {
    /// Builds the catalog shipped with the site.
    ///
    /// ## Example
    /// ```rust
    /// use sunpower_catalog::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.len(), 26);
    /// assert_eq!(catalog.get(10).unwrap().name, "AIS Up To 40.5 kV");
    /// ```
    pub fn builtin() -> Self {
        Catalog {
            records: seed::PRODUCTS
                .iter()
                .map(|seed| Arc::new(ProductRecord::from(seed)))
                .collect(),
        }
    }

    /// Builds a catalog from custom records, keeping their order.
    ///
    /// ## Errors
    /// `CatalogError::Validation` if any record is invalid or ids repeat.
    pub fn from_records(records: Vec<ProductRecord>) -> CatalogResult<Self> {
        validate_records(&records)?;
        Ok(Catalog {
            records: records.into_iter().map(Arc::new).collect(),
        })
    }

    /// All records in stored order.
    #[inline]
    pub fn records(&self) -> &[Arc<ProductRecord>] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by product id.
    pub fn get(&self, id: u32) -> Option<&Arc<ProductRecord>> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records passing `filter`.
    pub fn count(&self, filter: CategoryFilter) -> usize {
        self.records
            .iter()
            .filter(|record| filter.matches(record.category))
            .count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}
