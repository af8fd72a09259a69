//! # Carousel Navigator
//!
//! Tracks which record of the filtered list is featured in the large card.
//!
//! ## Invariant
//! The navigator owns the filtered list *and* the active index. The only way
//! to change the list is [`CarouselNavigator::reset`], which replaces both in
//! one assignment, so a stale index into a shorter list is never observable.
//!
//! ```text
//!   L = [10, 11, 12, 13, 14]          active_index = 3
//!                     ▲
//!   next() ─► 4   next() ─► 0 (wraps)   prev() ─► 4 (wraps)
//!
//!   peer_tiles(4) = [10, 11, 12, 14]   (everything but the active one)
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CatalogResult;
use crate::types::ProductRecord;
use crate::validation::validate_index;

/// Number of secondary tiles shown next to the featured card.
pub const DEFAULT_PEER_TILES: usize = 4;

/// "3 of 5 products" counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CarouselPosition {
    /// 1-based position of the active record.
    pub current: usize,
    pub total: usize,
}

impl CarouselPosition {
    pub fn label(&self) -> String {
        format!("{} of {} products", self.current, self.total)
    }
}

/// Active-index carousel over a filtered list.
#[derive(Debug, Clone, Default)]
pub struct CarouselNavigator {
    items: Vec<Arc<ProductRecord>>,
    active_index: usize,
}

impl CarouselNavigator {
    /// Creates a navigator positioned on the first item.
    pub fn new(items: Vec<Arc<ProductRecord>>) -> Self {
        CarouselNavigator {
            items,
            active_index: 0,
        }
    }

    /// Replaces the list and resets the index to 0.
    ///
    /// The reset is unconditional: it does not look for the previously
    /// active record in the new list.
    pub fn reset(&mut self, items: Vec<Arc<ProductRecord>>) {
        *self = CarouselNavigator::new(items);
    }

    #[inline]
    pub fn items(&self) -> &[Arc<ProductRecord>] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The featured record, `None` when the list is empty.
    pub fn active(&self) -> Option<&Arc<ProductRecord>> {
        self.items.get(self.active_index)
    }

    /// Advances with wraparound. No-op returning `None` on an empty list.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.active_index = (self.active_index + 1) % len;
        Some(self.active_index)
    }

    /// Steps back with wraparound. No-op returning `None` on an empty list.
    pub fn prev(&mut self) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.active_index = (self.active_index + len - 1) % len;
        Some(self.active_index)
    }

    /// Sets the active index directly.
    ///
    /// ## Errors
    /// `CatalogError::IndexOutOfRange` unless `index < len`.
    pub fn jump_to(&mut self, index: usize) -> CatalogResult<usize> {
        self.active_index = validate_index(index, self.len())?;
        Ok(self.active_index)
    }

    /// Position of a product id in the current list.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|record| record.id == id)
    }

    /// Makes the record with `id` active, as a peer tile click does.
    ///
    /// Returns the new index, or `None` if the id is not in the list (the
    /// index is left unchanged then).
    pub fn select_product(&mut self, id: u32) -> Option<usize> {
        let index = self.position_of(id)?;
        self.active_index = index;
        Some(index)
    }

    /// Secondary tiles: every record but the active one, first `limit` in
    /// list order.
    pub fn peer_tiles(&self, limit: usize) -> impl Iterator<Item = &Arc<ProductRecord>> + '_ {
        let active = self.active_index;
        self.items
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != active)
            .map(|(_, record)| record)
            .take(limit)
    }

    /// Counter for the current position, `None` when the list is empty.
    pub fn position(&self) -> Option<CarouselPosition> {
        if self.is_empty() {
            return None;
        }
        Some(CarouselPosition {
            current: self.active_index + 1,
            total: self.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::CatalogError;
    use crate::filter::filter_records;
    use crate::types::{CategoryFilter, ProductCategory};

    fn mv_switchgear() -> CarouselNavigator {
        let catalog = Catalog::builtin();
        CarouselNavigator::new(filter_records(
            catalog.records(),
            CategoryFilter::Only(ProductCategory::MvSwitchgear),
        ))
    }

    fn active_id(nav: &CarouselNavigator) -> Option<u32> {
        nav.active().map(|r| r.id)
    }

    #[test]
    fn test_starts_on_first_record() {
        let nav = mv_switchgear();
        assert_eq!(nav.active_index(), 0);
        assert_eq!(active_id(&nav), Some(10));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut nav = mv_switchgear();
        nav.jump_to(4).unwrap();
        assert_eq!(nav.next(), Some(0));
        assert_eq!(active_id(&nav), Some(10));
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut nav = mv_switchgear();
        assert_eq!(nav.prev(), Some(4));
        assert_eq!(active_id(&nav), Some(14));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let catalog = Catalog::builtin();
        for filter in CategoryFilter::all_filters() {
            let mut nav = CarouselNavigator::new(filter_records(catalog.records(), filter));
            for start in 0..nav.len() {
                nav.jump_to(start).unwrap();
                for _ in 0..nav.len() {
                    nav.next();
                }
                assert_eq!(nav.active_index(), start, "cycle for {}", filter);
            }
        }
    }

    #[test]
    fn test_prev_undoes_next() {
        let catalog = Catalog::builtin();
        for filter in CategoryFilter::all_filters() {
            let mut nav = CarouselNavigator::new(filter_records(catalog.records(), filter));
            for start in 0..nav.len() {
                nav.jump_to(start).unwrap();
                nav.next();
                nav.prev();
                assert_eq!(nav.active_index(), start);
            }
        }
    }

    #[test]
    fn test_single_record_list_stays_put() {
        let catalog = Catalog::builtin();
        let mut nav = CarouselNavigator::new(filter_records(
            catalog.records(),
            CategoryFilter::Only(ProductCategory::Distribution),
        ));
        assert_eq!(nav.next(), Some(0));
        assert_eq!(nav.prev(), Some(0));
        assert_eq!(nav.peer_tiles(DEFAULT_PEER_TILES).count(), 0);
    }

    #[test]
    fn test_empty_list_navigation_is_noop() {
        let mut nav = CarouselNavigator::default();
        assert_eq!(nav.next(), None);
        assert_eq!(nav.prev(), None);
        assert!(nav.active().is_none());
        assert!(nav.position().is_none());
        assert_eq!(
            nav.jump_to(0),
            Err(CatalogError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_jump_out_of_range_keeps_index() {
        let mut nav = mv_switchgear();
        nav.jump_to(2).unwrap();
        assert_eq!(
            nav.jump_to(5),
            Err(CatalogError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(nav.active_index(), 2);
    }

    #[test]
    fn test_jump_to_zero_is_stable() {
        let mut nav = mv_switchgear();
        nav.jump_to(0).unwrap();
        assert_eq!(active_id(&nav), Some(10));
        nav.jump_to(4).unwrap();
        nav.jump_to(0).unwrap();
        assert_eq!(active_id(&nav), Some(10));
    }

    #[test]
    fn test_peer_tiles_skip_active() {
        let mut nav = mv_switchgear();
        let ids: Vec<u32> = nav.peer_tiles(DEFAULT_PEER_TILES).map(|r| r.id).collect();
        assert_eq!(ids, vec![11, 12, 13, 14]);

        nav.jump_to(2).unwrap();
        let ids: Vec<u32> = nav.peer_tiles(DEFAULT_PEER_TILES).map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11, 13, 14]);
    }

    #[test]
    fn test_peer_tiles_respect_limit() {
        let catalog = Catalog::builtin();
        let nav = CarouselNavigator::new(filter_records(catalog.records(), CategoryFilter::All));
        let ids: Vec<u32> = nav.peer_tiles(DEFAULT_PEER_TILES).map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_select_product_by_id() {
        let mut nav = mv_switchgear();
        assert_eq!(nav.select_product(13), Some(3));
        assert_eq!(active_id(&nav), Some(13));
        assert_eq!(nav.select_product(1), None);
        assert_eq!(nav.active_index(), 3);
    }

    #[test]
    fn test_reset_goes_back_to_zero() {
        let catalog = Catalog::builtin();
        let mut nav = CarouselNavigator::new(filter_records(catalog.records(), CategoryFilter::All));
        nav.jump_to(10).unwrap();
        nav.reset(filter_records(
            catalog.records(),
            CategoryFilter::Only(ProductCategory::DrivesAutomation),
        ));
        assert_eq!(nav.active_index(), 0);
        assert_eq!(active_id(&nav), Some(15));
    }

    #[test]
    fn test_position_label() {
        let mut nav = mv_switchgear();
        nav.next();
        let position = nav.position().unwrap();
        assert_eq!(position, CarouselPosition { current: 2, total: 5 });
        assert_eq!(position.label(), "2 of 5 products");
    }
}
