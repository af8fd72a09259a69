//! # sunpower-catalog: Product Browsing Logic for the Sun PowerTech Showroom
//!
//! This crate holds the only stateful part of the showroom site, the product
//! catalog browser, next to the static project portfolio. Everything is a
//! pure, synchronous state transition with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sun PowerTech Showroom                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web frontend (rendering)                     │   │
//! │  │   Category chips ─► Featured card ─► Peer tiles ─► Detail modal │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ UI events / view snapshots             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    showroom (event shell)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ sunpower-catalog (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌───────┐  ┌─────┐   │   │
//! │  │   │ catalog │─►│ filter  │─►│ carousel │─►│ modal │  │ faq │   │   │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └───────┘  └─────┘   │   │
//! │  │                      composed by `browser`                      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • SYNCHRONOUS TRANSITIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product records, categories, view mode
//! - [`catalog`] - The immutable catalog store
//! - [`filter`] - Category filter engine
//! - [`carousel`] - Active-index navigation with wraparound
//! - [`modal`] - Detail overlay state machine
//! - [`browser`] - The composed products-section state machine
//! - [`faq`] - FAQ accordion
//! - [`projects`] - Completed, milestone and ongoing project lists
//! - [`view`] - Serializable render snapshots
//! - [`validation`] - Catalog and index checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sunpower_catalog::{Catalog, ProductBrowser};
//!
//! let mut browser = ProductBrowser::new(Catalog::builtin());
//! browser.jump_to(10).unwrap();
//!
//! // Switching category always starts over at the first record.
//! browser.set_category("drives-automation").unwrap();
//! assert_eq!(browser.active_index(), 0);
//! assert_eq!(browser.active_product().unwrap().id, 15);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod browser;
pub mod carousel;
pub mod catalog;
pub mod error;
pub mod faq;
pub mod filter;
pub mod modal;
pub mod projects;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use browser::ProductBrowser;
pub use carousel::{CarouselNavigator, CarouselPosition, DEFAULT_PEER_TILES};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult, ValidationError};
pub use faq::{FaqAccordion, FaqEntry};
pub use filter::FilterEngine;
pub use modal::{DetailModal, ModalState};
pub use projects::{CompletedWork, Milestone, OngoingProject, ProjectPortfolio};
pub use types::*;
pub use view::{
    CatalogView, CategoryChip, FaqItemView, FaqView, MilestoneItemView, ModalView, ProductTile,
    ProjectsView, TimelineSide,
};
