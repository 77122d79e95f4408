//! Board columns and column sets.
//!
//! A column is a named status bucket. The ordered [`ColumnSet`] of a board
//! defines both the valid status values and their left-to-right order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ProtocolError, Result};

/// A single status column on a board.
///
/// Supports two serialization formats:
/// - Short: `"in-progress"` (the display name is derived from the id)
/// - Full: `{ "id": "in-progress", "name": "Doing" }`
///
/// # Examples
///
/// ```
/// use labboard_protocol::Column;
///
/// let column: Column = serde_json::from_str(r#""in-progress""#).unwrap();
/// assert_eq!(column.id(), "in-progress");
/// assert_eq!(column.name(), "In Progress");
///
/// let column: Column = serde_json::from_str(r#"{"id": "todo", "name": "Backlog"}"#).unwrap();
/// assert_eq!(column.name(), "Backlog");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    id: String,
    name: String,
}

impl Column {
    /// Creates a column with an explicit display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates a column whose display name is derived from its identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use labboard_protocol::Column;
    ///
    /// assert_eq!(Column::from_id("todo").name(), "Todo");
    /// assert_eq!(Column::from_id("in_review").name(), "In Review");
    /// ```
    #[must_use]
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = display_name_from_id(&id);
        Self { id, name }
    }

    /// Returns the status value this column stands for.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable column header.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the display name is the one derived from the id.
    fn has_derived_name(&self) -> bool {
        self.name == display_name_from_id(&self.id)
    }
}

/// Title-cases the words of a column identifier.
///
/// Words are separated by `-`, `_` or spaces.
#[must_use]
pub fn display_name_from_id(id: &str) -> String {
    id.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Serialize for Column {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.has_derived_name() {
            serializer.serialize_str(&self.id)
        } else {
            use serde::ser::SerializeStruct;
            let mut state = serializer.serialize_struct("Column", 2)?;
            state.serialize_field("id", &self.id)?;
            state.serialize_field("name", &self.name)?;
            state.end()
        }
    }
}

impl<'de> Deserialize<'de> for Column {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct ColumnVisitor;

        impl<'de> Visitor<'de> for ColumnVisitor {
            type Value = Column;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a column id string or an object with id and optional name")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Column::from_id(v.trim()))
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut name: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "id" => {
                            if id.is_some() {
                                return Err(de::Error::duplicate_field("id"));
                            }
                            id = Some(map.next_value()?);
                        }
                        "name" => {
                            if name.is_some() {
                                return Err(de::Error::duplicate_field("name"));
                            }
                            name = Some(map.next_value()?);
                        }
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                let id = id.ok_or_else(|| de::Error::missing_field("id"))?;
                Ok(match name {
                    Some(name) => Column::new(id, name),
                    None => Column::from_id(id),
                })
            }
        }

        deserializer.deserialize_any(ColumnVisitor)
    }
}

/// How a board treats items whose status matches no configured column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStatusPolicy {
    /// Items with an unknown status are not shown in any lane.
    #[default]
    Hide,
    /// Items with an unknown status are gathered in a trailing catch-all lane.
    Surface,
}

/// The ordered, non-empty set of columns of a board.
///
/// # Examples
///
/// ```
/// use labboard_protocol::{Column, ColumnSet};
///
/// let columns = ColumnSet::new(vec![Column::from_id("todo"), Column::from_id("done")]).unwrap();
/// assert_eq!(columns.position("done"), Some(1));
/// assert!(!columns.contains("doing"));
///
/// assert!(ColumnSet::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Builds a column set, rejecting empty sets, empty ids and duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyColumnSet`], [`ProtocolError::EmptyColumnId`]
    /// or [`ProtocolError::DuplicateColumn`].
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ProtocolError::EmptyColumnSet);
        }
        for (idx, column) in columns.iter().enumerate() {
            if column.id.trim().is_empty() {
                return Err(ProtocolError::EmptyColumnId);
            }
            if columns[..idx].iter().any(|c| c.id == column.id) {
                return Err(ProtocolError::DuplicateColumn(column.id.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// The default project workflow: To Do, In Progress, Done.
    #[must_use]
    pub fn project_defaults() -> Self {
        Self {
            columns: default_project_columns(),
        }
    }

    /// The default task workflow: Planning, In Progress, Completed.
    #[must_use]
    pub fn task_defaults() -> Self {
        Self {
            columns: default_task_columns(),
        }
    }

    /// Returns the number of columns (always at least one).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Iterates the columns in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Returns the column at the given position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Returns the column with the given id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns the position of the column with the given id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Returns `true` if `id` names one of the columns.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Returns the first (leftmost) column.
    #[must_use]
    pub fn first(&self) -> &Column {
        // Non-empty by construction.
        &self.columns[0]
    }

    /// Checks that `status` names one of the columns.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownColumn`] otherwise.
    pub fn require(&self, status: &str) -> Result<&Column> {
        self.find(status)
            .ok_or_else(|| ProtocolError::UnknownColumn(status.to_string()))
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl From<ColumnSet> for Vec<Column> {
    fn from(set: ColumnSet) -> Self {
        set.columns
    }
}

/// Returns the default project columns.
#[must_use]
pub fn default_project_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do"),
        Column::new("in-progress", "In Progress"),
        Column::new("done", "Done"),
    ]
}

/// Returns the default task columns.
#[must_use]
pub fn default_task_columns() -> Vec<Column> {
    vec![
        Column::new("planning", "Planning"),
        Column::new("in-progress", "In Progress"),
        Column::new("completed", "Completed"),
    ]
}
