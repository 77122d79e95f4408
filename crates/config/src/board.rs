//! Board layout settings.
//!
//! Each board has its own columns. Columns accept the short and the full
//! format:
//!
//! ```json5
//! {
//!   "projects": {
//!     "columns": ["todo", { "id": "in-progress", "name": "Doing" }, "done"],
//!     "unknown_status": "surface"
//!   }
//! }
//! ```

use labboard_protocol::{Column, ColumnSet, ItemKind, UnknownStatusPolicy};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The layout of one board.
///
/// # Examples
///
/// ```
/// use labboard_config::BoardConfig;
/// use labboard_protocol::ItemKind;
///
/// // Without columns the defaults of the board kind apply
/// let config = BoardConfig::default();
/// let columns = config.column_set(ItemKind::Task).unwrap();
/// assert_eq!(columns.first().id(), "planning");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Columns in left-to-right order; `None` uses the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,

    /// How items with a status outside the columns are shown.
    #[serde(default)]
    pub unknown_status: UnknownStatusPolicy,
}

impl BoardConfig {
    /// Creates a board layout with explicit columns.
    #[must_use]
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self {
            columns: Some(columns),
            ..Self::default()
        }
    }

    /// Builds the column set for a board of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColumns`] if configured columns are
    /// empty or have empty or duplicate ids.
    pub fn column_set(&self, kind: ItemKind) -> Result<ColumnSet> {
        match &self.columns {
            None => Ok(match kind {
                ItemKind::Project => ColumnSet::project_defaults(),
                ItemKind::Task => ColumnSet::task_defaults(),
            }),
            Some(columns) => {
                ColumnSet::new(columns.clone()).map_err(|source| ConfigError::InvalidColumns {
                    board: kind.plural(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use labboard_protocol::ProtocolError;

    use super::*;

    #[test]
    fn defaults_follow_board_kind() {
        let config = BoardConfig::default();
        let projects = config.column_set(ItemKind::Project).unwrap();
        let tasks = config.column_set(ItemKind::Task).unwrap();
        assert_eq!(projects.find("todo").map(Column::name), Some("To Do"));
        assert_eq!(tasks.find("completed").map(Column::name), Some("Completed"));
    }

    #[test]
    fn explicit_empty_columns_are_rejected() {
        let config = BoardConfig::with_columns(vec![]);
        let err = config.column_set(ItemKind::Project).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColumns {
                board: "projects",
                source: ProtocolError::EmptyColumnSet
            }
        ));
    }

    #[test]
    fn deserialize_mixed_column_formats() {
        let json = r#"{"columns": ["todo", {"id": "in-progress", "name": "Doing"}]}"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();
        let columns = config.column_set(ItemKind::Project).unwrap();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns.get(0).map(Column::name), Some("Todo"));
        assert_eq!(columns.get(1).map(Column::name), Some("Doing"));
        assert_eq!(config.unknown_status, UnknownStatusPolicy::Hide);
    }

    #[test]
    fn deserialize_policy() {
        let config: BoardConfig = serde_json::from_str(r#"{"unknown_status": "surface"}"#).unwrap();
        assert_eq!(config.unknown_status, UnknownStatusPolicy::Surface);
        assert!(config.columns.is_none());
    }

    #[test]
    fn default_columns_not_serialized() {
        let json = serde_json::to_string(&BoardConfig::default()).unwrap();
        assert_eq!(json, r#"{"unknown_status":"hide"}"#);
    }
}
