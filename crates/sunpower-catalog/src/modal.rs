//! # Detail Modal Controller
//!
//! ```text
//!            open(p)                 open(q)
//!  Closed ───────────► Open(p) ───────────► Open(q)
//!    ▲                    │
//!    └──── close() ───────┘   (backdrop click is a close())
//! ```
//!
//! The modal keeps its own snapshot of the record it shows. Navigating the
//! carousel or switching category never changes what an open modal displays,
//! and closing never touches the carousel.

use std::sync::Arc;

use crate::types::ProductRecord;

/// Modal state. `Closed` carries no product, so nothing stale can be shown
/// on the next open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Arc<ProductRecord>),
}

/// Owns the detail overlay state.
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    state: ModalState,
}

impl DetailModal {
    pub fn new() -> Self {
        DetailModal::default()
    }

    /// Opens (or re-targets) the modal on `product`.
    pub fn open(&mut self, product: Arc<ProductRecord>) {
        self.state = ModalState::Open(product);
    }

    /// Closes the modal and drops the snapshot.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// The product on display, `None` while closed.
    pub fn selected(&self) -> Option<&Arc<ProductRecord>> {
        match &self.state {
            ModalState::Open(product) => Some(product),
            ModalState::Closed => None,
        }
    }

    #[inline]
    pub fn state(&self) -> &ModalState {
        &self.state
    }
}
