//! # Browser State
//!
//! Managed wrapper around the products-section state machine.
//!
//! ## Thread Safety
//! The event loop is sequential, but the browser is kept behind
//! `Arc<Mutex<T>>` so a host with concurrent handlers could share it. Every
//! event holds the lock for its whole transition, so no partial update is
//! ever observable.

use std::sync::{Arc, Mutex, PoisonError};

use sunpower_catalog::{Catalog, ProductBrowser};

use super::ConfigState;

/// Managed browser state.
#[derive(Debug, Clone)]
pub struct BrowserState {
    browser: Arc<Mutex<ProductBrowser>>,
}

impl BrowserState {
    pub fn new(browser: ProductBrowser) -> Self {
        BrowserState {
            browser: Arc::new(Mutex::new(browser)),
        }
    }

    /// Builds the browser from configuration over the built-in catalog.
    pub fn from_config(config: &ConfigState) -> Self {
        let browser = ProductBrowser::with_category(Catalog::builtin(), config.initial_category)
            .with_peer_tile_limit(config.peer_tile_limit);
        BrowserState::new(browser)
    }

    /// Executes a function with read access to the browser.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = browser_state.with_browser(|b| b.snapshot());
    /// ```
    pub fn with_browser<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductBrowser) -> R,
    {
        // Transitions never panic midway, so a poisoned lock still holds
        // consistent state.
        let browser = self.browser.lock().unwrap_or_else(PoisonError::into_inner);
        f(&browser)
    }

    /// Executes a function with write access to the browser.
    pub fn with_browser_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductBrowser) -> R,
    {
        let mut browser = self.browser.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut browser)
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        BrowserState::new(ProductBrowser::default())
    }
}
