//! Sample data for demonstration and testing.
//!
//! The demo mode of the application serves these records from an in-memory
//! service so the board can be tried without a running backend.
//!
//! # Examples
//!
//! ```
//! use labboard_protocol::dummy::{dummy_projects, dummy_tasks};
//!
//! let projects = dummy_projects();
//! assert_eq!(projects.len(), 5);
//! assert!(dummy_tasks().iter().all(|t| projects.iter().any(|p| p.id == t.project)));
//! ```

use chrono::NaiveDate;

use crate::item::ItemId;
use crate::project::Project;
use crate::researcher::Researcher;
use crate::task::Task;

/// Reduces boilerplate when creating projects with details.
struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    fn new(id: ItemId, title: &str, status: &str) -> Self {
        Self {
            project: Project::new(id, title, status),
        }
    }

    fn description(mut self, description: &str) -> Self {
        self.project.description = description.to_string();
        self
    }

    fn due(mut self, year: i32, month: u32, day: u32) -> Self {
        self.project.due_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    fn researchers(mut self, names: &[&str]) -> Self {
        self.project.researcher_names = names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    fn findings(mut self, findings: &str) -> Self {
        self.project.research_findings = Some(findings.to_string());
        self
    }

    fn build(self) -> Project {
        self.project
    }
}

/// Generates a sample set of research projects across the default columns.
///
/// - **To Do**: 2 projects
/// - **In Progress**: 2 projects
/// - **Done**: 1 project
#[must_use]
pub fn dummy_projects() -> Vec<Project> {
    vec![
        ProjectBuilder::new(1, "Soil microbiome survey", "in-progress")
            .description("Sample and sequence soil from twelve field sites")
            .due(2025, 9, 30)
            .researchers(&["Jane Smith", "Bob Johnson"])
            .findings("Site 4 shows unusually high nitrogen fixation")
            .build(),
        ProjectBuilder::new(2, "Coral reef bleaching", "todo")
            .description("Track bleaching events along the northern reef")
            .due(2025, 12, 1)
            .researchers(&["Alice Williams"])
            .build(),
        ProjectBuilder::new(3, "Urban heat islands", "todo")
            .description("Map surface temperatures across the city center")
            .build(),
        ProjectBuilder::new(4, "Pollinator decline", "in-progress")
            .description("Count bee populations in agricultural areas")
            .due(2025, 7, 15)
            .researchers(&["Bob Johnson", "Charlie Brown"])
            .build(),
        ProjectBuilder::new(5, "Glacier retreat archive", "done")
            .description("Digitize historical glacier photographs")
            .researchers(&["Jane Smith"])
            .findings("Retreat rate doubled after 1990")
            .build(),
    ]
}

/// Generates sample tasks for the first two sample projects.
#[must_use]
pub fn dummy_tasks() -> Vec<Task> {
    let task = |id, project, title: &str, status: &str, description: &str| {
        let mut task = Task::new(id, project, title, status);
        task.description = description.to_string();
        task
    };

    vec![
        task(1, 1, "Order sampling kits", "completed", "Kits for all twelve sites"),
        task(2, 1, "Collect samples", "in-progress", "Sites 1 to 6 done"),
        task(3, 1, "Sequence DNA", "planning", "Book time on the sequencer"),
        task(4, 1, "Write report", "planning", "Summarize findings per site"),
        task(5, 2, "Dive schedule", "planning", "Coordinate with the boat crew"),
        task(6, 2, "Calibrate cameras", "in-progress", "Underwater color charts"),
    ]
}

/// Returns the tasks of one sample project.
#[must_use]
pub fn dummy_tasks_for(project: ItemId) -> Vec<Task> {
    dummy_tasks()
        .into_iter()
        .filter(|task| task.project == project)
        .collect()
}

/// Generates the sample researcher directory.
#[must_use]
pub fn dummy_researchers() -> Vec<Researcher> {
    ["Jane Smith", "Bob Johnson", "Alice Williams", "Charlie Brown"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Researcher::new(id, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnSet;

    #[test]
    fn dummy_projects_use_default_columns() {
        let columns = ColumnSet::project_defaults();
        assert!(dummy_projects().iter().all(|p| columns.contains(&p.status)));
    }

    #[test]
    fn dummy_tasks_use_default_columns() {
        let columns = ColumnSet::task_defaults();
        assert!(dummy_tasks().iter().all(|t| columns.contains(&t.status)));
    }

    #[test]
    fn dummy_ids_are_unique() {
        let mut ids: Vec<_> = dummy_projects().iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        let mut ids: Vec<_> = dummy_tasks().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), dummy_tasks().len());
    }

    #[test]
    fn dummy_tasks_for_filters_by_project() {
        assert_eq!(dummy_tasks_for(1).len(), 4);
        assert_eq!(dummy_tasks_for(2).len(), 2);
        assert!(dummy_tasks_for(5).is_empty());
    }

    #[test]
    fn dummy_researchers_are_numbered() {
        let researchers = dummy_researchers();
        assert_eq!(researchers[0], Researcher::new(1, "Jane Smith"));
        assert_eq!(researchers.len(), 4);
    }
}
