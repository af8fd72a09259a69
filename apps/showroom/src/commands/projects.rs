//! # Projects Commands
//!
//! Read-only access to the completed, milestone and ongoing project lists.

use sunpower_catalog::ProjectsView;
use tracing::debug;

use crate::state::ProjectsState;

/// Gets the projects section.
pub fn get_projects(projects: &ProjectsState) -> ProjectsView {
    debug!("get_projects command");
    ProjectsView::from(projects.portfolio())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunpower_catalog::TimelineSide;

    #[test]
    fn test_get_projects_returns_builtin_portfolio() {
        let view = get_projects(&ProjectsState::default());
        assert_eq!(view.completed_works[0].title, "Kymore & Vijayraghavgarh (Package 5D)");
        assert_eq!(view.milestones.last().unwrap().year, 2023);
        assert_eq!(view.milestones[7].side, TimelineSide::Right);
        assert_eq!(view.ongoing_projects.len(), 6);
    }
}
