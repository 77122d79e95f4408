//! The board item abstraction.
//!
//! Projects and tasks are structurally identical as far as a board is
//! concerned: an integer id, a status naming a column, and display fields the
//! board never interprets. [`BoardItem`] captures exactly that.

use std::fmt::Debug;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Server-assigned identifier of an item.
pub type ItemId = u64;

/// Server-assigned revision of an item, used for stale-update detection.
pub type Version = u64;

/// The kind of record shown on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A research project.
    Project,
    /// A task belonging to a project.
    Task,
}

impl ItemKind {
    /// Returns the singular display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use labboard_protocol::ItemKind;
    ///
    /// assert_eq!(ItemKind::Project.display_name(), "Project");
    /// assert_eq!(ItemKind::Task.plural(), "tasks");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Task => "Task",
        }
    }

    /// Returns the lowercase plural, as used in messages.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Project => "projects",
            Self::Task => "tasks",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The fields of a new item that the board needs to validate it.
pub trait ItemDraft {
    /// The title of the item to create.
    fn title(&self) -> &str;
    /// The initial status of the item to create.
    fn status(&self) -> &str;
}

/// A record that can be placed in a board column by its status.
pub trait BoardItem:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The payload sent to create a new item of this kind.
    type Draft: ItemDraft + Serialize + Clone + Debug + Send + Sync + 'static;

    /// What kind of record this is.
    const KIND: ItemKind;

    /// Returns the unique id.
    fn id(&self) -> ItemId;

    /// Returns the status, which should name a board column.
    fn status(&self) -> &str;

    /// Overwrites the status.
    fn set_status(&mut self, status: String);

    /// Returns the card title.
    fn title(&self) -> &str;

    /// Returns the one-line card summary.
    fn summary(&self) -> &str;

    /// Returns the free-form notes.
    fn notes(&self) -> &str;

    /// Returns the due date, if any.
    fn due_date(&self) -> Option<NaiveDate>;

    /// Returns the revision, if the service versions this item.
    fn version(&self) -> Option<Version>;

    /// Overwrites the revision.
    fn set_version(&mut self, version: Option<Version>);

    /// Builds the record the service would return for `draft` under `id`.
    fn from_draft(id: ItemId, draft: Self::Draft) -> Self;

    /// Additional labelled fields shown in the detail panel.
    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns a copy of this item with its status replaced.
    #[must_use]
    fn with_status(&self, status: &str) -> Self {
        let mut item = self.clone();
        item.set_status(status.to_string());
        item
    }
}
