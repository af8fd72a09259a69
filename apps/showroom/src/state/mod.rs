//! # State Module
//!
//! Manages application state for the showroom shell.
//!
//! Instead of a single struct containing everything, each concern has its
//! own state type, and commands declare exactly which ones they touch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  BrowserState    │  │    FaqState      │  │    ConfigState       │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<Mutex<      │  │  Arc<Mutex<      │  │  site name           │  │
//! │  │   ProductBrowser │  │   FaqAccordion   │  │  initial category    │  │
//! │  │  >>              │  │  >>              │  │  peer tile limit     │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  • BrowserState / FaqState: exclusive access per event                  │
//! │  • ConfigState / ProjectsState: read-only after initialization          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod browser;
mod config;
mod faq;
mod projects;

pub use browser::BrowserState;
pub use config::ConfigState;
pub use faq::FaqState;
pub use projects::ProjectsState;

/// Every managed state object, built once at startup.
#[derive(Debug, Clone)]
pub struct ManagedState {
    pub browser: BrowserState,
    pub faq: FaqState,
    pub projects: ProjectsState,
    pub config: ConfigState,
}

impl ManagedState {
    pub fn from_config(config: ConfigState) -> Self {
        ManagedState {
            browser: BrowserState::from_config(&config),
            faq: FaqState::from_config(&config),
            projects: ProjectsState::default(),
            config,
        }
    }
}

impl Default for ManagedState {
    fn default() -> Self {
        ManagedState::from_config(ConfigState::default())
    }
}
