//! # Product Browser
//!
//! Composes the filter, carousel and modal into the state machine behind the
//! products section.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI event                 Browser call              State change        │
//! │  ────────                 ────────────              ────────────        │
//! │                                                                         │
//! │  Category chip ─────────► set_category(id) ──────► filter + list,       │
//! │                                                    index = 0            │
//! │  Arrow right ───────────► next() ────────────────► index + 1 (wraps)    │
//! │  Arrow left ────────────► prev() ────────────────► index - 1 (wraps)    │
//! │  Peer tile ─────────────► select_product(id) ────► index = pos(id)      │
//! │  "Know More" ───────────► open_active() ─────────► modal = Open(copy)   │
//! │  Close / backdrop ──────► close_modal() ─────────► modal = Closed       │
//! │  Tab toggle ────────────► set_view_mode(m) ──────► heading only         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filter and carousel change together; the modal has its own lifecycle and
//! is never touched by navigation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::carousel::{CarouselNavigator, CarouselPosition, DEFAULT_PEER_TILES};
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::filter::FilterEngine;
use crate::modal::DetailModal;
use crate::types::{CategoryFilter, ProductRecord, ViewMode};
use crate::view::{CatalogView, CategoryChip, ModalView, ProductTile};

/// The products section state machine.
///
/// ## Example
/// ```rust
/// use sunpower_catalog::{Catalog, ProductBrowser};
///
/// let mut browser = ProductBrowser::new(Catalog::builtin());
/// browser.set_category("mv-switchgear").unwrap();
/// browser.next();
/// assert_eq!(browser.active_product().unwrap().id, 11);
///
/// browser.open_active().unwrap();
/// browser.set_category("all").unwrap();
/// assert_eq!(browser.modal().selected().unwrap().id, 11);
/// ```
#[derive(Debug, Clone)]
pub struct ProductBrowser {
    catalog: Catalog,
    filter: FilterEngine,
    carousel: CarouselNavigator,
    modal: DetailModal,
    view_mode: ViewMode,
    peer_tile_limit: usize,
}

impl ProductBrowser {
    /// Creates a browser showing the whole catalog.
    pub fn new(catalog: Catalog) -> Self {
        ProductBrowser::with_category(catalog, CategoryFilter::All)
    }

    /// Creates a browser with an initial category selected.
    pub fn with_category(catalog: Catalog, filter: CategoryFilter) -> Self {
        let filter = FilterEngine::new(filter);
        let carousel = CarouselNavigator::new(filter.apply(&catalog));
        ProductBrowser {
            catalog,
            filter,
            carousel,
            modal: DetailModal::new(),
            view_mode: ViewMode::default(),
            peer_tile_limit: DEFAULT_PEER_TILES,
        }
    }

    /// Overrides how many peer tiles are projected.
    pub fn with_peer_tile_limit(mut self, limit: usize) -> Self {
        self.peer_tile_limit = limit;
        self
    }

    // =========================================================================
    // Filter
    // =========================================================================

    /// Selects a category and resets the carousel to the first record.
    ///
    /// ## Errors
    /// `CatalogError::InvalidCategory`; nothing changes in that case.
    pub fn set_category(&mut self, category_id: &str) -> CatalogResult<CategoryFilter> {
        let filter = self.filter.set_category(category_id)?;
        self.carousel.reset(self.filter.apply(&self.catalog));
        info!(category = %filter, visible = self.carousel.len(), "category changed");
        Ok(filter)
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    /// Next record, wrapping. `None` (no-op) on an empty view.
    pub fn next(&mut self) -> Option<usize> {
        let index = self.carousel.next();
        debug!(?index, "carousel next");
        index
    }

    /// Previous record, wrapping. `None` (no-op) on an empty view.
    pub fn prev(&mut self) -> Option<usize> {
        let index = self.carousel.prev();
        debug!(?index, "carousel prev");
        index
    }

    /// Absolute jump within the filtered list.
    pub fn jump_to(&mut self, index: usize) -> CatalogResult<usize> {
        self.carousel.jump_to(index)
    }

    /// Makes the product with `id` active.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the id is not in the catalog
    /// - `ProductNotInView` if the current category hides it
    pub fn select_product(&mut self, id: u32) -> CatalogResult<usize> {
        if self.catalog.get(id).is_none() {
            return Err(CatalogError::ProductNotFound(id));
        }
        self.carousel
            .select_product(id)
            .ok_or_else(|| CatalogError::ProductNotInView {
                id,
                category: self.filter.active().id().to_string(),
            })
    }

    // =========================================================================
    // Modal
    // =========================================================================

    /// Opens the detail modal on the featured record ("Know More").
    ///
    /// ## Errors
    /// `CatalogError::EmptyCatalogView` when no record is featured; the modal
    /// stays as it was.
    pub fn open_active(&mut self) -> CatalogResult<Arc<ProductRecord>> {
        let product = self
            .carousel
            .active()
            .cloned()
            .ok_or(CatalogError::EmptyCatalogView)?;
        Ok(self.open(product))
    }

    /// Opens the detail modal on any catalog record.
    pub fn open_product(&mut self, id: u32) -> CatalogResult<Arc<ProductRecord>> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))?;
        Ok(self.open(product))
    }

    fn open(&mut self, product: Arc<ProductRecord>) -> Arc<ProductRecord> {
        debug!(product_id = product.id, "detail modal opened");
        self.modal.open(Arc::clone(&product));
        product
    }

    pub fn close_modal(&mut self) {
        debug!("detail modal closed");
        self.modal.close();
    }

    // =========================================================================
    // View mode
    // =========================================================================

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn active_category(&self) -> CategoryFilter {
        self.filter.active()
    }

    /// The filtered list.
    #[inline]
    pub fn visible(&self) -> &[Arc<ProductRecord>] {
        self.carousel.items()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    pub fn active_product(&self) -> Option<&Arc<ProductRecord>> {
        self.carousel.active()
    }

    pub fn peer_tiles(&self) -> Vec<&Arc<ProductRecord>> {
        self.carousel.peer_tiles(self.peer_tile_limit).collect()
    }

    pub fn position(&self) -> Option<CarouselPosition> {
        self.carousel.position()
    }

    #[inline]
    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Every category chip in display order, wildcard first.
    pub fn category_chips(&self) -> Vec<CategoryChip> {
        let active = self.filter.active();
        CategoryFilter::all_filters()
            .map(|filter| CategoryChip {
                id: filter.id().to_string(),
                name: filter.display_name().to_string(),
                count: self.catalog.count(filter),
                active: filter == active,
            })
            .collect()
    }

    /// Builds the full render snapshot.
    pub fn snapshot(&self) -> CatalogView {
        let position = self.position();
        CatalogView {
            active_category: self.filter.active().id().to_string(),
            view_mode: self.view_mode,
            heading: self.view_mode.heading().to_string(),
            categories: self.category_chips(),
            products: self
                .visible()
                .iter()
                .map(|record| ProductTile::from(record.as_ref()))
                .collect(),
            active_index: position.map(|_| self.active_index()),
            active_product: self.active_product().map(|record| ProductRecord::clone(record)),
            peer_tiles: self
                .peer_tiles()
                .into_iter()
                .map(|record| ProductTile::from(record.as_ref()))
                .collect(),
            position,
            counter_label: position.map(|p| p.label()).unwrap_or_default(),
            modal: ModalView {
                is_open: self.modal.is_open(),
                product: self.modal.selected().map(|record| ProductRecord::clone(record)),
            },
        }
    }
}

impl Default for ProductBrowser {
    fn default() -> Self {
        ProductBrowser::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductCategory;

    #[test]
    fn test_category_change_resets_index() {
        let mut browser = ProductBrowser::default();
        browser.jump_to(10).unwrap();
        browser.set_category("drives-automation").unwrap();
        assert_eq!(browser.active_index(), 0);
        assert_eq!(browser.active_product().unwrap().id, 15);
        assert_eq!(browser.visible().len(), 12);
    }

    #[test]
    fn test_reselecting_same_category_still_resets() {
        let mut browser = ProductBrowser::default();
        browser.set_category("mv-switchgear").unwrap();
        browser.jump_to(3).unwrap();
        browser.set_category("mv-switchgear").unwrap();
        assert_eq!(browser.active_index(), 0);
    }

    #[test]
    fn test_invalid_category_leaves_state() {
        let mut browser = ProductBrowser::default();
        browser.set_category("ehv-switchgear").unwrap();
        browser.next();
        let err = browser.set_category("hvdc").unwrap_err();
        assert_eq!(err, CatalogError::InvalidCategory("hvdc".to_string()));
        assert_eq!(
            browser.active_category(),
            CategoryFilter::Only(ProductCategory::EhvSwitchgear)
        );
        assert_eq!(browser.active_index(), 1);
    }

    #[test]
    fn test_select_product_errors() {
        let mut browser = ProductBrowser::default();
        browser.set_category("distribution").unwrap();
        assert_eq!(
            browser.select_product(99),
            Err(CatalogError::ProductNotFound(99))
        );
        assert_eq!(
            browser.select_product(3),
            Err(CatalogError::ProductNotInView {
                id: 3,
                category: "distribution".to_string()
            })
        );
        assert_eq!(browser.select_product(6), Ok(0));
    }

    #[test]
    fn test_modal_survives_navigation() {
        let mut browser = ProductBrowser::default();
        browser.set_category("ehv-switchgear").unwrap();
        assert_eq!(browser.open_active().unwrap().id, 7);
        browser.next();
        browser.set_category("drives-automation").unwrap();
        assert!(browser.modal().is_open());
        assert_eq!(browser.modal().selected().unwrap().id, 7);
    }

    #[test]
    fn test_close_modal_keeps_carousel() {
        let mut browser = ProductBrowser::default();
        browser.set_category("power-transfer").unwrap();
        browser.jump_to(3).unwrap();
        browser.open_active().unwrap();
        browser.close_modal();
        assert_eq!(browser.active_index(), 3);
        assert_eq!(
            browser.active_category(),
            CategoryFilter::Only(ProductCategory::PowerTransfer)
        );
    }

    #[test]
    fn test_open_product_by_id() {
        let mut browser = ProductBrowser::default();
        assert_eq!(browser.open_product(26).unwrap().name, "Water & Wastewater Solutions");
        assert_eq!(
            browser.open_product(0).unwrap_err(),
            CatalogError::ProductNotFound(0)
        );
        // failed open leaves the previous selection in place
        assert_eq!(browser.modal().selected().unwrap().id, 26);
    }

    #[test]
    fn test_view_mode_does_not_move_carousel() {
        let mut browser = ProductBrowser::default();
        browser.jump_to(5).unwrap();
        browser.set_view_mode(ViewMode::Application);
        assert_eq!(browser.active_index(), 5);
        assert_eq!(browser.snapshot().heading, "By Application");
    }

    #[test]
    fn test_category_chips() {
        let mut browser = ProductBrowser::default();
        browser.set_category("ehv-switchgear").unwrap();
        let chips = browser.category_chips();
        assert_eq!(chips.len(), 6);
        assert_eq!(chips[0].id, "all");
        assert_eq!(chips[0].count, 26);
        let active: Vec<&str> = chips.iter().filter(|c| c.active).map(|c| c.id.as_str()).collect();
        assert_eq!(active, vec!["ehv-switchgear"]);
        assert_eq!(chips[3].count, 3);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut browser = ProductBrowser::default();
        browser.set_category("mv-switchgear").unwrap();
        browser.next();
        let view = browser.snapshot();
        assert_eq!(view.active_category, "mv-switchgear");
        assert_eq!(view.products.len(), 5);
        assert_eq!(view.active_index, Some(1));
        assert_eq!(view.active_product.as_ref().unwrap().id, 11);
        let peers: Vec<u32> = view.peer_tiles.iter().map(|t| t.id).collect();
        assert_eq!(peers, vec![10, 12, 13, 14]);
        assert_eq!(view.counter_label, "2 of 5 products");
        assert!(!view.modal.is_open);
        assert!(view.modal.product.is_none());
    }

    #[test]
    fn test_peer_tile_limit_override() {
        let browser = ProductBrowser::default().with_peer_tile_limit(2);
        let peers: Vec<u32> = browser.peer_tiles().iter().map(|r| r.id).collect();
        assert_eq!(peers, vec![2, 3]);
    }
}
