//! # Domain Types
//!
//! Core domain types used throughout the showroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │  ProductRecord  │   │ ProductCategory  │   │ CategoryFilter  │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  id (u32)       │   │  PowerTransfer   │   │  All            │      │
//! │  │  name           │   │  Distribution    │   │  Only(category) │      │
//! │  │  category       │   │  EhvSwitchgear   │   └─────────────────┘      │
//! │  │  features       │   │  MvSwitchgear    │                            │
//! │  │  specs          │   │  DrivesAutomation│   ┌─────────────────┐      │
//! │  └─────────────────┘   └──────────────────┘   │    ViewMode     │      │
//! │                                               │  Product        │      │
//! │                                               │  Application    │      │
//! │                                               └─────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Category Ids
//! The frontend speaks in string tags (`"mv-switchgear"`, `"all"`). The tags
//! are parsed into [`CategoryFilter`] at the boundary so an unknown id can
//! never become part of the filter state.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::error::CatalogError;

// =============================================================================
// Product Category
// =============================================================================

/// The fixed set of product families shown on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    PowerTransfer,
    Distribution,
    EhvSwitchgear,
    MvSwitchgear,
    DrivesAutomation,
}

impl ProductCategory {
    /// Every category, in chip order.
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::PowerTransfer,
        ProductCategory::Distribution,
        ProductCategory::EhvSwitchgear,
        ProductCategory::MvSwitchgear,
        ProductCategory::DrivesAutomation,
    ];

    /// String tag used by the frontend.
    pub const fn id(&self) -> &'static str {
        match self {
            ProductCategory::PowerTransfer => "power-transfer",
            ProductCategory::Distribution => "distribution",
            ProductCategory::EhvSwitchgear => "ehv-switchgear",
            ProductCategory::MvSwitchgear => "mv-switchgear",
            ProductCategory::DrivesAutomation => "drives-automation",
        }
    }

    /// Human readable name, also used as each record's `category_label`.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::PowerTransfer => "Power Transfer & Reactors",
            ProductCategory::Distribution => "Distribution Transformers",
            ProductCategory::EhvSwitchgear => "EHV Switchgear",
            ProductCategory::MvSwitchgear => "MV Switchgear",
            ProductCategory::DrivesAutomation => "Drives & Automation",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The active category selection, including the `"all"` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No filtering: the whole catalog in stored order.
    #[default]
    All,
    /// Only records tagged with this category.
    Only(ProductCategory),
}

impl CategoryFilter {
    /// Reserved id of the wildcard category.
    pub const ALL_ID: &'static str = "all";

    /// Every selectable filter, in chip order (wildcard first).
    pub fn all_filters() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProductCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// String tag used by the frontend.
    pub const fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Only(category) => category.id(),
        }
    }

    /// Chip label.
    pub const fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// Returns true if a record of `category` passes this filter.
    #[inline]
    pub fn matches(&self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    /// Parses a category id.
    ///
    /// ## Example
    /// ```rust
    /// use sunpower_catalog::{CategoryFilter, ProductCategory};
    ///
    /// assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    /// assert_eq!(
    ///     "mv-switchgear".parse::<CategoryFilter>().unwrap(),
    ///     CategoryFilter::Only(ProductCategory::MvSwitchgear)
    /// );
    /// assert!("solar".parse::<CategoryFilter>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::all_filters()
            .find(|filter| filter.id() == s)
            .ok_or_else(|| CatalogError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Serialized as the bare category id, e.g. `"mv-switchgear"`.
impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Product Record
// =============================================================================

/// A labelled technical specification, e.g. `Voltage: Up to 800 kV`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSpec {
    pub label: String,
    pub value: String,
}

/// A product shown in the catalog.
///
/// Built once from the static table and shared behind `Arc`; nothing
/// mutates a record after start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique positive identifier.
    pub id: u32,

    /// Display name shown on cards and in the modal.
    pub name: String,

    /// Category tag used for filtering.
    pub category: ProductCategory,

    /// Badge text on the product card.
    pub category_label: String,

    /// Opaque image asset reference.
    pub image: String,

    /// One-line teaser for tiles.
    pub short_desc: String,

    pub description: String,

    /// Extended text shown only in the detail modal.
    pub long_description: String,

    pub features: Vec<String>,

    pub specs: Vec<ProductSpec>,

    /// Comma separated application areas.
    pub applications: String,
}

// =============================================================================
// View Mode
// =============================================================================

/// Heading toggle of the products section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Product,
    Application,
}

impl ViewMode {
    pub const fn heading(&self) -> &'static str {
        match self {
            ViewMode::Product => "By Product",
            ViewMode::Application => "By Application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_round_trip_through_parse() {
        for filter in CategoryFilter::all_filters() {
            assert_eq!(filter.id().parse::<CategoryFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "All".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(err, CatalogError::InvalidCategory("All".to_string()));
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(ProductCategory::Distribution));
        let mv = CategoryFilter::Only(ProductCategory::MvSwitchgear);
        assert!(mv.matches(ProductCategory::MvSwitchgear));
        assert!(!mv.matches(ProductCategory::EhvSwitchgear));
    }

    #[test]
    fn test_category_serializes_as_kebab_tag() {
        let json = serde_json::to_string(&ProductCategory::DrivesAutomation).unwrap();
        assert_eq!(json, "\"drives-automation\"");
    }

    #[test]
    fn test_filter_serializes_as_id() {
        let mv = CategoryFilter::Only(ProductCategory::MvSwitchgear);
        assert_eq!(serde_json::to_string(&mv).unwrap(), "\"mv-switchgear\"");
        assert_eq!(serde_json::from_str::<CategoryFilter>("\"all\"").unwrap(), CategoryFilter::All);
        assert!(serde_json::from_str::<CategoryFilter>("\"solar\"").is_err());
    }

    #[test]
    fn test_view_mode_headings() {
        assert_eq!(ViewMode::default().heading(), "By Product");
        assert_eq!(ViewMode::Application.heading(), "By Application");
    }
}
