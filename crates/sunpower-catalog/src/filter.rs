//! # Filter Engine
//!
//! Derives the visible subset of the catalog from the selected category.
//!
//! ```text
//! category chip click ("mv-switchgear")
//!        │
//!        ▼
//! parse id ──► unknown? ──► InvalidCategory (state untouched)
//!        │
//!        ▼
//! active = Only(MvSwitchgear)
//!        │
//!        ▼
//! apply(catalog) ──► [10, 11, 12, 13, 14]   (stored order)
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::types::{CategoryFilter, ProductRecord};

/// Owns the active category selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEngine {
    active: CategoryFilter,
}

impl FilterEngine {
    /// Creates an engine with the given selection.
    pub fn new(active: CategoryFilter) -> Self {
        FilterEngine { active }
    }

    /// The current selection.
    #[inline]
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Selects a category by id.
    ///
    /// ## Errors
    /// `CatalogError::InvalidCategory` for ids outside the fixed set. The
    /// previous selection is kept in that case.
    pub fn set_category(&mut self, category_id: &str) -> CatalogResult<CategoryFilter> {
        let filter: CategoryFilter = category_id.parse()?;
        debug!(from = %self.active, to = %filter, "category selected");
        self.active = filter;
        Ok(filter)
    }

    /// Visible records for the current selection.
    pub fn apply(&self, catalog: &Catalog) -> Vec<Arc<ProductRecord>> {
        filter_records(catalog.records(), self.active)
    }
}

/// Returns every record passing `filter`, preserving stored order.
pub fn filter_records(
    records: &[Arc<ProductRecord>],
    filter: CategoryFilter,
) -> Vec<Arc<ProductRecord>> {
    records
        .iter()
        .filter(|record| filter.matches(record.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::types::ProductCategory;

    fn ids(records: &[Arc<ProductRecord>]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_all_returns_whole_catalog_in_order() {
        let catalog = Catalog::builtin();
        let engine = FilterEngine::default();
        assert_eq!(ids(&engine.apply(&catalog)), (1..=26).collect::<Vec<_>>());
    }

    #[test]
    fn test_every_category_yields_only_its_records() {
        let catalog = Catalog::builtin();
        for category in ProductCategory::ALL {
            let engine = FilterEngine::new(CategoryFilter::Only(category));
            let visible = engine.apply(&catalog);
            assert!(!visible.is_empty());
            assert!(visible.iter().all(|r| r.category == category));

            let positions: Vec<usize> = visible
                .iter()
                .map(|r| catalog.records().iter().position(|c| c.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order kept");
        }
    }

    #[test]
    fn test_mv_switchgear_ids() {
        let catalog = Catalog::builtin();
        let mut engine = FilterEngine::default();
        engine.set_category("mv-switchgear").unwrap();
        assert_eq!(ids(&engine.apply(&catalog)), vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_invalid_category_keeps_selection() {
        let mut engine = FilterEngine::new(CategoryFilter::Only(ProductCategory::Distribution));
        let err = engine.set_category("solar-panels").unwrap_err();
        assert_eq!(err, CatalogError::InvalidCategory("solar-panels".to_string()));
        assert_eq!(
            engine.active(),
            CategoryFilter::Only(ProductCategory::Distribution)
        );
    }
}
