//! # FAQ Commands
//!
//! Commands for the accordion under the products section.

use sunpower_catalog::FaqView;
use tracing::debug;

use crate::error::ApiError;
use crate::state::FaqState;

/// Gets the accordion with its open row.
pub fn get_faq(faq: &FaqState) -> FaqView {
    debug!("get_faq command");
    // `FaqView::from` alone binds one lifetime and cannot satisfy the
    // higher-ranked closure bound of `with_faq`.
    faq.with_faq(|f| FaqView::from(f))
}

/// Toggles one question. Opening a row closes whichever was open before.
///
/// ## Errors
/// `INDEX_OUT_OF_RANGE` when there is no question at `index`.
pub fn toggle_faq(faq: &FaqState, index: usize) -> Result<FaqView, ApiError> {
    debug!(index = %index, "toggle_faq command");

    faq.with_faq_mut(|f| {
        f.toggle(index)?;
        Ok(FaqView::from(&*f))
    })
}
