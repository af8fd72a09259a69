//! # Commands Module
//!
//! All commands reachable from the frontend, plus the event type that
//! selects one of them.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (events, dispatch)
//! ├── catalog.rs  ◄─── Category chips, carousel, detail modal
//! ├── faq.rs      ◄─── Accordion toggle
//! ├── projects.rs ◄─── Project portfolio
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Event Flow                                           │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  {"command":"selectCategory","categoryId":"mv-switchgear"}              │
//! │         │                                                               │
//! │         │ (one JSON line on stdin)                                      │
//! │         ▼                                                               │
//! │  dispatch(&state, UiEvent::SelectCategory { .. })                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  catalog::select_category(&state.browser, "mv-switchgear")              │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  {"ok":{"catalog":{...},"faq":{...}}}                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs; `dispatch` hands it over
//! from [`ManagedState`].

pub mod catalog;
pub mod config;
pub mod faq;
pub mod projects;

use serde::{Deserialize, Serialize};
use sunpower_catalog::{CatalogView, FaqView, ProjectsView, ViewMode};
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{ConfigState, ManagedState};

/// A user interaction, decoded from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum UiEvent {
    SelectCategory {
        #[serde(rename = "categoryId")]
        category_id: String,
    },
    NextProduct,
    PrevProduct,
    JumpTo {
        index: usize,
    },
    SelectProduct {
        #[serde(rename = "productId")]
        product_id: u32,
    },
    /// "Know More"; without an id the featured product is shown.
    OpenDetails {
        #[serde(rename = "productId", default)]
        product_id: Option<u32>,
    },
    CloseDetails,
    SetViewMode {
        mode: ViewMode,
    },
    ToggleFaq {
        index: usize,
    },
    GetView,
    GetProjects,
    GetConfig,
}

/// Both interactive sections of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShowroomView {
    pub catalog: CatalogView,
    pub faq: FaqView,
}

/// Successful command output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum Payload {
    View(Box<ShowroomView>),
    Projects(Box<ProjectsView>),
    Config(ConfigState),
}

/// One output line.
///
/// ## Serialization
/// ```json
/// {"ok": {"catalog": {...}, "faq": {...}}}
/// {"error": {"code": "INVALID_CATEGORY", "message": "Unknown category: solar"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    Ok(Payload),
    Error(ApiError),
}

impl From<Result<Payload, ApiError>> for Response {
    fn from(result: Result<Payload, ApiError>) -> Self {
        match result {
            Ok(payload) => Response::Ok(payload),
            Err(err) => Response::Error(err),
        }
    }
}

/// Runs one event against the managed state.
///
/// A failed command leaves every state object as it was.
pub fn dispatch(state: &ManagedState, event: UiEvent) -> Result<Payload, ApiError> {
    let catalog = match event {
        UiEvent::SelectCategory { category_id } => {
            catalog::select_category(&state.browser, &category_id)?
        }
        UiEvent::NextProduct => catalog::next_product(&state.browser),
        UiEvent::PrevProduct => catalog::prev_product(&state.browser),
        UiEvent::JumpTo { index } => catalog::jump_to_product(&state.browser, index)?,
        UiEvent::SelectProduct { product_id } => {
            catalog::select_product(&state.browser, product_id)?
        }
        UiEvent::OpenDetails { product_id } => catalog::open_details(&state.browser, product_id)?,
        UiEvent::CloseDetails => catalog::close_details(&state.browser),
        UiEvent::SetViewMode { mode } => catalog::set_view_mode(&state.browser, mode),
        UiEvent::ToggleFaq { index } => {
            let faq = faq::toggle_faq(&state.faq, index)?;
            return Ok(view(catalog::get_catalog_view(&state.browser), faq));
        }
        UiEvent::GetView => catalog::get_catalog_view(&state.browser),
        UiEvent::GetProjects => {
            let portfolio = projects::get_projects(&state.projects);
            return Ok(Payload::Projects(Box::new(portfolio)));
        }
        UiEvent::GetConfig => return Ok(Payload::Config(config::get_config(&state.config))),
    };

    Ok(view(catalog, faq::get_faq(&state.faq)))
}

fn view(catalog: CatalogView, faq: FaqView) -> Payload {
    Payload::View(Box::new(ShowroomView { catalog, faq }))
}
