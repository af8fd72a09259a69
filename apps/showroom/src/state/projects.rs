//! # Projects State
//!
//! The project portfolio is read-only after startup, so it is shared behind
//! a plain `Arc` with no lock.

use std::sync::Arc;

use sunpower_catalog::ProjectPortfolio;

/// Managed portfolio state.
#[derive(Debug, Clone, Default)]
pub struct ProjectsState {
    portfolio: Arc<ProjectPortfolio>,
}

impl ProjectsState {
    pub fn new(portfolio: ProjectPortfolio) -> Self {
        ProjectsState {
            portfolio: Arc::new(portfolio),
        }
    }

    pub fn portfolio(&self) -> &ProjectPortfolio {
        &self.portfolio
    }
}
