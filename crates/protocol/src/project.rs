//! Research projects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::item::{BoardItem, ItemDraft, ItemId, ItemKind, Version};

/// A research project as stored by the REST service.
///
/// Fields the client does not know about are kept in `extra` and written back
/// unchanged, so a status change never drops server-side data.
///
/// # Examples
///
/// ```
/// use labboard_protocol::{BoardItem, Project};
///
/// let project = Project::new(1, "Soil survey", "todo");
/// let moved = project.with_status("done");
/// assert_eq!(moved.status(), "done");
/// assert_eq!(moved.title(), "Soil survey");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: ItemId,
    /// Short project name.
    pub title: String,
    /// What the project is about.
    #[serde(default)]
    pub description: String,
    /// Workflow status, one of the project board's column ids.
    pub status: String,
    /// When the project is due.
    #[serde(default, with = "crate::due_date")]
    pub due_date: Option<NaiveDate>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Summary of the findings so far.
    #[serde(default)]
    pub research_findings: Option<String>,
    /// Researchers assigned to the project.
    #[serde(default)]
    pub researcher_names: Vec<String>,
    /// Revision for stale-update detection, when the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    /// Any other field returned by the service.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Creates a project with the given id, title and status and empty details.
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            status: status.into(),
            due_date: None,
            notes: String::new(),
            research_findings: None,
            researcher_names: Vec::new(),
            version: None,
            extra: Map::new(),
        }
    }
}

/// The payload used to create a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Short project name.
    pub title: String,
    /// What the project is about.
    pub description: String,
    /// Initial workflow status.
    pub status: String,
    /// When the project is due.
    #[serde(with = "crate::due_date")]
    pub due_date: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: String,
}

impl NewProject {
    /// Creates a draft with a title and status and empty details.
    #[must_use]
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: status.into(),
            due_date: None,
            notes: String::new(),
        }
    }
}

impl ItemDraft for NewProject {
    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl BoardItem for Project {
    type Draft = NewProject;

    const KIND: ItemKind = ItemKind::Project;

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

    fn from_draft(id: ItemId, draft: NewProject) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            due_date: draft.due_date,
            notes: draft.notes,
            research_findings: None,
            researcher_names: Vec::new(),
            version: None,
            extra: Map::new(),
        }
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if !self.researcher_names.is_empty() {
            fields.push(("Researchers", self.researcher_names.join(", ")));
        }
        if let Some(findings) = self.research_findings.as_deref().filter(|f| !f.is_empty()) {
            fields.push(("Findings", findings.to_string()));
        }
        fields
    }
}
