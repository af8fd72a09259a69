//! # Project Portfolio
//!
//! Static track record shown under the products section: completed works,
//! the milestone timeline and projects still in progress.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Completed Works        Our Milestones           Ongoing Projects       │
//! │  ┌──────────────┐       2015 ●─── left           ┌──────────────┐       │
//! │  │ title        │       2016 ───● right          │ title        │       │
//! │  │ client       │       2017 ●─── left           │ description  │       │
//! │  │ location     │        ...                     │ client       │       │
//! │  └──────────────┘                                └──────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here changes after construction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CatalogResult, ValidationError};

// =============================================================================
// Records
// =============================================================================

/// A delivered turnkey project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompletedWork {
    pub title: String,
    pub client: String,
    pub location: String,
    /// Client logo asset, relative to the site's asset root
    pub logo: String,
}

/// One point on the company timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub year: u16,
    pub title: String,
    pub client: String,
    pub description: String,
}

/// A project still under execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OngoingProject {
    pub title: String,
    pub description: String,
    pub client: String,
    pub location: String,
    pub logo: String,
}

// =============================================================================
// Built-in data
// =============================================================================

const BHARAT_SARKAR_LOGO: &str = "icons/bharat-sarkar.png";
const CENTRAL_INDIA_LOGO: &str = "icons/central-india-pvt-ltd.png";
const MPUDCL_LOGO: &str = "icons/mpudcl-indore-district.png";

// (title, client, location, logo)
const COMPLETED_WORKS: [(&str, &str, &str, &str); 6] = [
    ("Kymore & Vijayraghavgarh (Package 5D)", "MPUDCL Bhopal", "Madhya Pradesh", BHARAT_SARKAR_LOGO),
    ("Amarpatan & Ramnagar (Package 7D)", "MPUDCL Bhopal", "Madhya Pradesh", BHARAT_SARKAR_LOGO),
    ("Harpalpur & Badagaon (Package 6G)", "MPUDCL Bhopal", "Madhya Pradesh", MPUDCL_LOGO),
    ("Bankhedi Turnkey Project", "Central India Pvt Ltd", "Madhya Pradesh", CENTRAL_INDIA_LOGO),
    ("KARI & Lidhorakhas Water Meter SITC", "Tikamgarh Nagar Parishads", "Tikamgarh", BHARAT_SARKAR_LOGO),
    ("Gangadhar Meher Lift Irrigation Project", "WRD Bhopal", "Madhya Pradesh", BHARAT_SARKAR_LOGO),
];

// (year, title, client, description)
const MILESTONES: [(u16, &str, &str, &str); 8] = [
    (
        2015,
        "Humidity & Temperature Control System",
        "Prism Cement, Satna",
        "Delivered a humidity and temperature control turnkey automation system, redefining industrial climate regulation.",
    ),
    (
        2016,
        "RO Plant Automation",
        "Lupin, Mandideep",
        "Executed a turnkey automation project for the reverse osmosis plant enhancing water purity assurance.",
    ),
    (
        2017,
        "40 KL Turnkey Automation",
        "Vindhayachal Distillery, Pilukhedi (Bhopal)",
        "Commissioned a 40 KL turnkey automation project, optimising distillery operations with precision control.",
    ),
    (
        2018,
        "3 MGD Water Treatment Plant",
        "Bhopal Municipal Corporation, Idgah Hills",
        "Implemented a 3 MGD water treatment plant with turnkey automation, raising municipal water reliability.",
    ),
    (
        2020,
        "Turnkey Instrumentation",
        "MP Jal Nigam, Punjapura (Neemuch, Badhwani)",
        "Completed a turnkey instrumentation project, strengthening regional water management capacity.",
    ),
    (
        2021,
        "Water Supply Scheme Automation",
        "Indore District (Betma, Gautampura, Depalpur)",
        "Delivered a fully integrated water supply scheme automation, enhancing service delivery accuracy.",
    ),
    (
        2022,
        "45 MLD Turnkey Automation",
        "Betul-Bazar, Amla & Sarni Nagar Parishads (MP)",
        "Executed a 45 MLD turnkey automation project, significantly boosting urban water infrastructure.",
    ),
    (
        2023,
        "7.6 MLD Sewage Treatment Plant",
        "Gobranawapra STP (Raipur, C.G.)",
        "Commissioned a 7.6 MLD sewage treatment plant, advancing environmental compliance through turnkey instrumentation and automation.",
    ),
];

// (title, description, client, location, logo)
const ONGOING_PROJECTS: [(&str, &str, &str, &str, &str); 6] = [
    (
        "Gandhisagar Package 2",
        "Multi-village water supply scheme automation",
        "MP Jal Nigam - Dilip Buildcon",
        "District Neemach",
        BHARAT_SARKAR_LOGO,
    ),
    (
        "Beohari Multi-Village Scheme",
        "Comprehensive village water management system",
        "MP Jal Nigam - Tejas Construction",
        "Shahdol",
        BHARAT_SARKAR_LOGO,
    ),
    (
        "Rewa Bansagar Scheme",
        "Large-scale water distribution automation",
        "MP Jal Nigam - Dilip Buildcon",
        "District Rewa",
        BHARAT_SARKAR_LOGO,
    ),
    (
        "Pahargarh Multi-Village Scheme",
        "Rural water supply automation project",
        "MP Jal Nigam - KNK Projects",
        "District Rajgarh",
        BHARAT_SARKAR_LOGO,
    ),
    (
        "Narmada Gabhir Multi-Village Scheme",
        "Advanced water management for multiple villages",
        "MP Jal Nigam - Dilip Buildcon",
        "District Ujjain",
        BHARAT_SARKAR_LOGO,
    ),
    (
        "Gohad Water Supply Scheme",
        "Modern water supply system with full automation",
        "MPUDCL Bhopal - Shree Contractor",
        "Madhya Pradesh",
        MPUDCL_LOGO,
    ),
];

// =============================================================================
// Portfolio
// =============================================================================

/// The three project lists, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPortfolio {
    completed: Vec<CompletedWork>,
    milestones: Vec<Milestone>,
    ongoing: Vec<OngoingProject>,
}

impl ProjectPortfolio {
    /// Builds a validated portfolio.
    ///
    /// ## Errors
    /// - `DuplicateProject` if a title repeats within the completed or the
    ///   ongoing list
    /// - `MilestoneOutOfOrder` unless milestone years strictly increase
    pub fn new(
        completed: Vec<CompletedWork>,
        milestones: Vec<Milestone>,
        ongoing: Vec<OngoingProject>,
    ) -> CatalogResult<Self> {
        unique_titles(completed.iter().map(|w| w.title.as_str()))?;
        unique_titles(ongoing.iter().map(|p| p.title.as_str()))?;

        for pair in milestones.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(ValidationError::MilestoneOutOfOrder {
                    year: pair[1].year,
                    previous: pair[0].year,
                }
                .into());
            }
        }

        Ok(ProjectPortfolio {
            completed,
            milestones,
            ongoing,
        })
    }

    /// The site's portfolio.
    pub fn builtin() -> Self {
        ProjectPortfolio {
            completed: COMPLETED_WORKS
                .iter()
                .map(|(title, client, location, logo)| CompletedWork {
                    title: title.to_string(),
                    client: client.to_string(),
                    location: location.to_string(),
                    logo: logo.to_string(),
                })
                .collect(),
            milestones: MILESTONES
                .iter()
                .map(|(year, title, client, description)| Milestone {
                    year: *year,
                    title: title.to_string(),
                    client: client.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            ongoing: ONGOING_PROJECTS
                .iter()
                .map(|(title, description, client, location, logo)| OngoingProject {
                    title: title.to_string(),
                    description: description.to_string(),
                    client: client.to_string(),
                    location: location.to_string(),
                    logo: logo.to_string(),
                })
                .collect(),
        }
    }

    pub fn completed(&self) -> &[CompletedWork] {
        &self.completed
    }

    /// Timeline entries, oldest first.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn ongoing(&self) -> &[OngoingProject] {
        &self.ongoing
    }
}

impl Default for ProjectPortfolio {
    fn default() -> Self {
        ProjectPortfolio::builtin()
    }
}

fn unique_titles<'a>(titles: impl Iterator<Item = &'a str>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for title in titles {
        if !seen.insert(title) {
            return Err(ValidationError::DuplicateProject(title.to_string()));
        }
    }
    Ok(())
}
