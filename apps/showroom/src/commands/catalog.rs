//! # Catalog Commands
//!
//! Commands behind the products section. Each one applies a single
//! transition under the browser lock and returns the fresh render snapshot.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [All] [Power Transfer] [Distribution] [EHV] [MV ●5] [Drives]           │
//! │                                                                         │
//! │   ◄  ►   2 of 5 products       ┌──────────────┐   ┌────┐ ┌────┐         │
//! │                                │  GIS 66 kV   │   │ 10 │ │ 12 │         │
//! │                                │ [Know More]  │   └────┘ └────┘         │
//! │                                └──────────────┘   ┌────┐ ┌────┐         │
//! │                                                   │ 13 │ │ 14 │         │
//! │                                                   └────┘ └────┘         │
//! │                                                                         │
//! │  chip ─► select_category   arrows ─► next/prev_product                  │
//! │  tile ─► select_product    Know More ─► open_details                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sunpower_catalog::{CatalogView, ViewMode};
use tracing::debug;

use crate::error::ApiError;
use crate::state::BrowserState;

/// Gets the current products-section snapshot.
pub fn get_catalog_view(browser: &BrowserState) -> CatalogView {
    debug!("get_catalog_view command");
    browser.with_browser(|b| b.snapshot())
}

/// Selects a category chip. The carousel restarts at the first record.
pub fn select_category(browser: &BrowserState, category_id: &str) -> Result<CatalogView, ApiError> {
    debug!(category_id = %category_id, "select_category command");

    browser.with_browser_mut(|b| {
        b.set_category(category_id)?;
        Ok(b.snapshot())
    })
}

/// Right arrow. A no-op when nothing is shown.
pub fn next_product(browser: &BrowserState) -> CatalogView {
    debug!("next_product command");
    browser.with_browser_mut(|b| {
        b.next();
        b.snapshot()
    })
}

/// Left arrow. A no-op when nothing is shown.
pub fn prev_product(browser: &BrowserState) -> CatalogView {
    debug!("prev_product command");
    browser.with_browser_mut(|b| {
        b.prev();
        b.snapshot()
    })
}

/// Jumps to a position in the filtered list.
pub fn jump_to_product(browser: &BrowserState, index: usize) -> Result<CatalogView, ApiError> {
    debug!(index = %index, "jump_to_product command");

    browser.with_browser_mut(|b| {
        b.jump_to(index)?;
        Ok(b.snapshot())
    })
}

/// Peer tile click: features the product with `product_id`.
pub fn select_product(browser: &BrowserState, product_id: u32) -> Result<CatalogView, ApiError> {
    debug!(product_id = %product_id, "select_product command");

    browser.with_browser_mut(|b| {
        b.select_product(product_id)?;
        Ok(b.snapshot())
    })
}

/// Opens the detail modal.
///
/// ## Arguments
/// * `product_id` - Product to show; the featured record when `None`
pub fn open_details(
    browser: &BrowserState,
    product_id: Option<u32>,
) -> Result<CatalogView, ApiError> {
    debug!(?product_id, "open_details command");

    browser.with_browser_mut(|b| {
        match product_id {
            Some(id) => b.open_product(id)?,
            None => b.open_active()?,
        };
        Ok(b.snapshot())
    })
}

/// Close button or backdrop click.
pub fn close_details(browser: &BrowserState) -> CatalogView {
    debug!("close_details command");
    browser.with_browser_mut(|b| {
        b.close_modal();
        b.snapshot()
    })
}

/// "By Product" / "By Application" tab.
pub fn set_view_mode(browser: &BrowserState, mode: ViewMode) -> CatalogView {
    debug!(?mode, "set_view_mode command");
    browser.with_browser_mut(|b| {
        b.set_view_mode(mode);
        b.snapshot()
    })
}
