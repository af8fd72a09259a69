//! # FAQ State
//!
//! Managed wrapper around the FAQ accordion. Independent from the browser,
//! so toggling an answer never contends with catalog navigation.

use std::sync::{Arc, Mutex, PoisonError};

use sunpower_catalog::FaqAccordion;

use super::ConfigState;

/// Managed FAQ state.
#[derive(Debug, Clone)]
pub struct FaqState {
    faq: Arc<Mutex<FaqAccordion>>,
}

impl FaqState {
    pub fn new(faq: FaqAccordion) -> Self {
        FaqState {
            faq: Arc::new(Mutex::new(faq)),
        }
    }

    pub fn from_config(config: &ConfigState) -> Self {
        let builtin = FaqAccordion::builtin();
        FaqState::new(FaqAccordion::new(
            builtin.entries().to_vec(),
            config.faq_open_first,
        ))
    }

    pub fn with_faq<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FaqAccordion) -> R,
    {
        let faq = self.faq.lock().unwrap_or_else(PoisonError::into_inner);
        f(&faq)
    }

    pub fn with_faq_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut FaqAccordion) -> R,
    {
        let mut faq = self.faq.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut faq)
    }
}

impl Default for FaqState {
    fn default() -> Self {
        FaqState::new(FaqAccordion::builtin())
    }
}
