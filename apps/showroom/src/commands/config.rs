//! # Config Commands
//!
//! Command for retrieving showroom configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current showroom configuration.
///
/// ## When Used
/// - Page load (header text, initial chip)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
