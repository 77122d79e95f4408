//! Tasks belonging to a research project.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::item::{BoardItem, ItemDraft, ItemId, ItemKind, Version};

/// A task of a research project.
///
/// # Examples
///
/// ```
/// use labboard_protocol::{BoardItem, Task};
///
/// let task = Task::new(4, 1, "Collect samples", "planning");
/// assert_eq!(task.project, 1);
/// assert_eq!(task.status(), "planning");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier.
    pub id: ItemId,
    /// Short task name.
    pub title: String,
    /// What needs to be done.
    #[serde(default)]
    pub description: String,
    /// Workflow status, one of the task board's column ids.
    pub status: String,
    /// When the task is due.
    #[serde(default, with = "crate::due_date")]
    pub due_date: Option<NaiveDate>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Id of the owning project.
    pub project: ItemId,
    /// Revision for stale-update detection, when the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    /// Any other field returned by the service.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Creates a task with empty details.
    #[must_use]
    pub fn new(
        id: ItemId,
        project: ItemId,
        title: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            status: status.into(),
            due_date: None,
            notes: String::new(),
            project,
            version: None,
            extra: Map::new(),
        }
    }
}

/// The payload used to create a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(with = "crate::due_date")]
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    /// Id of the owning project.
    pub project: ItemId,
}

impl NewTask {
    /// Creates a draft for `project` with a title and status.
    #[must_use]
    pub fn new(project: ItemId, title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: status.into(),
            due_date: None,
            notes: String::new(),
            project,
        }
    }
}

impl ItemDraft for NewTask {
    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl BoardItem for Task {
    type Draft = NewTask;

    const KIND: ItemKind = ItemKind::Task;

    fn id(&self) -> ItemId {
        self.id
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: String) {
        self.status = status;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn notes(&self) -> &str {
        &self.notes
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    fn version(&self) -> Option<Version> {
        self.version
    }

    fn set_version(&mut self, version: Option<Version>) {
        self.version = version;
    }

    fn from_draft(id: ItemId, draft: NewTask) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            due_date: draft.due_date,
            notes: draft.notes,
            project: draft.project,
            version: None,
            extra: Map::new(),
        }
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![("Project", format!("#{}", self.project))]
    }
}
