//! # Validation Module
//!
//! Integrity checks for catalog data and index arguments.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  └── Only renders tiles/chips that exist (in range by construction)     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Showroom shell                                                │
//! │  └── Event deserialization (types, required fields)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                   │
//! │  ├── Catalog records (ids, names, labels)                               │
//! │  └── Indices against the current filtered list                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sunpower_catalog::validation::validate_index;
//!
//! assert!(validate_index(4, 5).is_ok());
//! assert!(validate_index(5, 5).is_err());
//! ```

use std::collections::HashSet;

use crate::error::{CatalogError, ValidationError};
use crate::types::ProductRecord;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single product record.
///
/// ## Rules
/// - `id` must be positive
/// - `name` must not be blank
/// - `category_label` must equal the category's display name
pub fn validate_record(record: &ProductRecord) -> ValidationResult<()> {
    if record.id == 0 {
        return Err(ValidationError::NonPositiveId);
    }

    if record.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
            id: record.id,
        });
    }

    let expected = record.category.display_name();
    if record.category_label != expected {
        return Err(ValidationError::LabelMismatch {
            id: record.id,
            label: record.category_label.clone(),
            expected: expected.to_string(),
        });
    }

    Ok(())
}

/// Validates a whole catalog: every record, then id uniqueness.
pub fn validate_records(records: &[ProductRecord]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        validate_record(record)?;
        if !seen.insert(record.id) {
            return Err(ValidationError::DuplicateId(record.id));
        }
    }

    Ok(())
}

/// Validates an index against a list length.
///
/// An empty list has no valid index.
pub fn validate_index(index: usize, len: usize) -> Result<usize, CatalogError> {
    if index < len {
        Ok(index)
    } else {
        Err(CatalogError::IndexOutOfRange { index, len })
    }
}
