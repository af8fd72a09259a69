//! # View Snapshots
//!
//! Serializable projections handed to the rendering layer. Views are plain
//! data built on demand from the browser state; they are never stored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::carousel::CarouselPosition;
use crate::faq::FaqAccordion;
use crate::projects::{CompletedWork, OngoingProject, ProjectPortfolio};
use crate::types::{ProductRecord, ViewMode};

/// Compact card used for the filtered list and the peer tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductTile {
    pub id: u32,
    pub name: String,
    pub category_label: String,
    pub image: String,
    pub short_desc: String,
}

impl From<&ProductRecord> for ProductTile {
    fn from(record: &ProductRecord) -> Self {
        ProductTile {
            id: record.id,
            name: record.name.clone(),
            category_label: record.category_label.clone(),
            image: record.image.clone(),
            short_desc: record.short_desc.clone(),
        }
    }
}

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChip {
    pub id: String,
    pub name: String,
    /// Records under this category.
    pub count: usize,
    pub active: bool,
}

/// Detail overlay: whether it renders and what it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub is_open: bool,
    pub product: Option<ProductRecord>,
}

/// Everything the products section renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub active_category: String,
    pub view_mode: ViewMode,
    pub heading: String,
    pub categories: Vec<CategoryChip>,
    /// The filtered list.
    pub products: Vec<ProductTile>,
    /// `None` when the filtered list is empty.
    pub active_index: Option<usize>,
    pub active_product: Option<ProductRecord>,
    pub peer_tiles: Vec<ProductTile>,
    pub position: Option<CarouselPosition>,
    /// "N of M products"; empty when nothing is shown.
    pub counter_label: String,
    pub modal: ModalView,
}

/// One accordion row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FaqItemView {
    pub question: String,
    pub answer: String,
    pub is_open: bool,
}

/// The FAQ section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FaqView {
    pub items: Vec<FaqItemView>,
    pub open_index: Option<usize>,
}

impl From<&FaqAccordion> for FaqView {
    fn from(faq: &FaqAccordion) -> Self {
        FaqView {
            items: faq
                .entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| FaqItemView {
                    question: entry.question.clone(),
                    answer: entry.answer.clone(),
                    is_open: faq.is_open(index),
                })
                .collect(),
            open_index: faq.open_index(),
        }
    }
}

/// Which side of the timeline spine a milestone card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TimelineSide {
    Left,
    Right,
}

/// A milestone placed on the timeline; sides alternate starting left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneItemView {
    pub year: u16,
    pub title: String,
    pub client: String,
    pub description: String,
    pub side: TimelineSide,
}

/// The projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsView {
    pub completed_works: Vec<CompletedWork>,
    pub milestones: Vec<MilestoneItemView>,
    pub ongoing_projects: Vec<OngoingProject>,
}

impl From<&ProjectPortfolio> for ProjectsView {
    fn from(portfolio: &ProjectPortfolio) -> Self {
        ProjectsView {
            completed_works: portfolio.completed().to_vec(),
            milestones: portfolio
                .milestones()
                .iter()
                .enumerate()
                .map(|(index, milestone)| MilestoneItemView {
                    year: milestone.year,
                    title: milestone.title.clone(),
                    client: milestone.client.clone(),
                    description: milestone.description.clone(),
                    side: if index % 2 == 0 {
                        TimelineSide::Left
                    } else {
                        TimelineSide::Right
                    },
                })
                .collect(),
            ongoing_projects: portfolio.ongoing().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_tile_from_record() {
        let catalog = Catalog::builtin();
        let tile = ProductTile::from(catalog.get(24).unwrap().as_ref());
        assert_eq!(tile.id, 24);
        assert_eq!(tile.name, "PLC");
        assert_eq!(tile.category_label, "Drives & Automation");
    }

    #[test]
    fn test_tile_serializes_camel_case() {
        let catalog = Catalog::builtin();
        let tile = ProductTile::from(catalog.get(6).unwrap().as_ref());
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(json["categoryLabel"], "Distribution Transformers");
        assert!(json.get("shortDesc").is_some());
    }

    #[test]
    fn test_faq_view_marks_open_item() {
        let view = FaqView::from(&FaqAccordion::builtin());
        let open: Vec<bool> = view.items.iter().map(|i| i.is_open).collect();
        assert_eq!(open, vec![true, false, false, false]);
    }

    #[test]
    fn test_projects_view_alternates_sides() {
        let view = ProjectsView::from(&ProjectPortfolio::builtin());
        let sides: Vec<TimelineSide> = view.milestones.iter().take(3).map(|m| m.side).collect();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left]
        );
        assert_eq!(view.milestones[4].year, 2020);
        assert_eq!(view.completed_works.len(), 6);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["ongoingProjects"][0]["title"], "Gandhisagar Package 2");
        assert_eq!(json["milestones"][1]["side"], "right");
    }
}
