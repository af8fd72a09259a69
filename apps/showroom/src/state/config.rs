//! # Configuration State
//!
//! Stores showroom configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOWROOM_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use sunpower_catalog::{CategoryFilter, DEFAULT_PEER_TILES};
use tracing::warn;
use ts_rs::TS;

/// Showroom configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Company name shown in the header
    pub site_name: String,

    /// Category selected when the page loads, serialized as its id
    #[ts(type = "string")]
    pub initial_category: CategoryFilter,

    /// Number of secondary tiles next to the featured card
    pub peer_tile_limit: usize,

    /// Whether the first FAQ answer starts expanded
    pub faq_open_first: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Site: "Sun PowerTech"
    /// - Initial category: all products
    /// - Peer tiles: 4
    /// - FAQ: first answer open
    fn default() -> Self {
        ConfigState {
            site_name: "Sun PowerTech".to_string(),
            initial_category: CategoryFilter::All,
            peer_tile_limit: DEFAULT_PEER_TILES,
            faq_open_first: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOWROOM_SITE_NAME`: Override site name
    /// - `SHOWROOM_INITIAL_CATEGORY`: Category id to start on (e.g. "mv-switchgear")
    /// - `SHOWROOM_PEER_TILES`: Number of peer tiles
    /// - `SHOWROOM_FAQ_OPEN_FIRST`: "true"/"false"
    pub fn from_env() -> Self {
        ConfigState::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Invalid values are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(site_name) = lookup("SHOWROOM_SITE_NAME") {
            config.site_name = site_name;
        }

        if let Some(category) = lookup("SHOWROOM_INITIAL_CATEGORY") {
            match category.trim().parse::<CategoryFilter>() {
                Ok(filter) => config.initial_category = filter,
                Err(e) => warn!(%e, "ignoring SHOWROOM_INITIAL_CATEGORY"),
            }
        }

        if let Some(tiles) = lookup("SHOWROOM_PEER_TILES") {
            match tiles.trim().parse::<usize>() {
                Ok(limit) => config.peer_tile_limit = limit,
                Err(e) => warn!(%e, value = %tiles, "ignoring SHOWROOM_PEER_TILES"),
            }
        }

        if let Some(open) = lookup("SHOWROOM_FAQ_OPEN_FIRST") {
            match parse_flag(&open) {
                Some(flag) => config.faq_open_first = flag,
                None => warn!(value = %open, "ignoring SHOWROOM_FAQ_OPEN_FIRST"),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
