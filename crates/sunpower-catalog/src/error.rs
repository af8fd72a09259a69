//! # Error Types
//!
//! Domain-specific error types for sunpower-catalog.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sunpower-catalog errors (this file)                                    │
//! │  ├── CatalogError     - Browsing operation failures                     │
//! │  └── ValidationError  - Catalog data integrity failures                 │
//! │                                                                         │
//! │  showroom errors (app crate)                                            │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → ApiError → Frontend             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is a local, recoverable condition. The worst case for the
//! products section is "nothing renders for this category", which is a
//! display state and never a crash.

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised by the catalog browser operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Category id is not part of the fixed category set.
    ///
    /// ## When This Occurs
    /// - A category chip event carries a stale or misspelled id
    /// - Configuration names an initial category that does not exist
    ///
    /// State is left untouched when this is returned.
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// Index is not valid for the current filtered list.
    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// "Know More" was requested while the filtered list is empty.
    #[error("No products to show for the current category")]
    EmptyCatalogView,

    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Product exists but is filtered out of the current view.
    ///
    /// ## When This Occurs
    /// A peer tile click arrives after the category already changed.
    #[error("Product {id} is not visible under category '{category}'")]
    ProductNotInView { id: u32, category: String },

    /// Catalog data failed validation (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog data integrity errors.
///
/// Only custom catalogs and portfolios can produce these; the built-in tables
/// are checked by the unit tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required for product {id}")]
    Required { field: String, id: u32 },

    /// Product ids must be positive.
    #[error("Product id must be positive")]
    NonPositiveId,

    /// Product id appears more than once.
    #[error("Product id {0} already exists")]
    DuplicateId(u32),

    /// Display label disagrees with the category tag.
    #[error("Product {id} has label '{label}', expected '{expected}'")]
    LabelMismatch {
        id: u32,
        label: String,
        expected: String,
    },

    /// Two projects in the same list share a title.
    #[error("Project '{0}' is listed twice")]
    DuplicateProject(String),

    /// Timeline years must strictly increase.
    #[error("Milestone {year} is not after {previous}")]
    MilestoneOutOfOrder { year: u16, previous: u16 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
