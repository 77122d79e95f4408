//! Deriving lanes from columns and items.
//!
//! Items are never stored per column. A column's content is always computed
//! from the item list by matching statuses, so there is a single source of
//! truth for where an item is.

use labboard_protocol::{BoardItem, Column, ColumnSet, UnknownStatusPolicy};

/// Display name of the catch-all lane for items with an unknown status.
pub const UNSORTED_LANE_NAME: &str = "Unsorted";

/// The items of one column, in source order.
///
/// Cloning restarts the iteration from where the clone was taken, so the
/// same column can be walked several times.
#[derive(Debug)]
pub struct ColumnItems<'a, T> {
    items: std::slice::Iter<'a, T>,
    column_id: &'a str,
}

impl<T> Clone for ColumnItems<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            column_id: self.column_id,
        }
    }
}

impl<'a, T> ColumnItems<'a, T> {
    pub(crate) fn new(items: &'a [T], column_id: &'a str) -> Self {
        Self {
            items: items.iter(),
            column_id,
        }
    }
}

impl<'a, T: BoardItem> Iterator for ColumnItems<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let column_id = self.column_id;
        self.items.by_ref().find(|item| item.status() == column_id)
    }
}

/// Items whose status matches no column, in source order.
#[derive(Debug)]
pub struct UnplacedItems<'a, T> {
    items: std::slice::Iter<'a, T>,
    columns: &'a ColumnSet,
}

impl<T> Clone for UnplacedItems<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            columns: self.columns,
        }
    }
}

impl<'a, T> UnplacedItems<'a, T> {
    pub(crate) fn new(items: &'a [T], columns: &'a ColumnSet) -> Self {
        Self {
            items: items.iter(),
            columns,
        }
    }
}

impl<'a, T: BoardItem> Iterator for UnplacedItems<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns;
        self.items.by_ref().find(|item| !columns.contains(item.status()))
    }
}

/// A column together with the items currently in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane<'a, T> {
    /// The column, or `None` for the unsorted lane.
    pub column: Option<&'a Column>,
    /// The items of the lane, in source order.
    pub items: Vec<&'a T>,
}

impl<T> Lane<'_, T> {
    /// Returns the column id, or `None` for the unsorted lane.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.column.map(Column::id)
    }

    /// Returns the lane header.
    #[must_use]
    pub fn name(&self) -> &str {
        self.column.map_or(UNSORTED_LANE_NAME, Column::name)
    }

    /// Returns `true` if items can be dropped here.
    #[must_use]
    pub fn accepts_drop(&self) -> bool {
        self.column.is_some()
    }

    /// Returns the number of items in the lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the lane has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups `items` into one lane per column.
///
/// With [`UnknownStatusPolicy::Surface`] a trailing unsorted lane holds the
/// items that match no column; it is only added when there are such items.
///
/// # Examples
///
/// ```
/// use labboard_board::lanes::derive_lanes;
/// use labboard_protocol::{ColumnSet, Project, UnknownStatusPolicy};
///
/// let columns = ColumnSet::project_defaults();
/// let items = vec![
///     Project::new(1, "A", "done"),
///     Project::new(2, "B", "archived"),
/// ];
///
/// let lanes = derive_lanes(&columns, &items, UnknownStatusPolicy::Hide);
/// assert_eq!(lanes.len(), 3);
/// assert_eq!(lanes[2].items.len(), 1);
///
/// let lanes = derive_lanes(&columns, &items, UnknownStatusPolicy::Surface);
/// assert_eq!(lanes[3].name(), "Unsorted");
/// ```
#[must_use]
pub fn derive_lanes<'a, T: BoardItem>(
    columns: &'a ColumnSet,
    items: &'a [T],
    policy: UnknownStatusPolicy,
) -> Vec<Lane<'a, T>> {
    let mut lanes: Vec<Lane<'a, T>> = columns
        .iter()
        .map(|column| Lane {
            column: Some(column),
            items: ColumnItems::new(items, column.id()).collect(),
        })
        .collect();

    if policy == UnknownStatusPolicy::Surface {
        let unplaced: Vec<&T> = UnplacedItems::new(items, columns).collect();
        if !unplaced.is_empty() {
            lanes.push(Lane {
                column: None,
                items: unplaced,
            });
        }
    }

    lanes
}

#[cfg(test)]
mod tests {
    use labboard_protocol::Task;

    use super::*;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new(1, 1, "a", "planning"),
            Task::new(2, 1, "b", "completed"),
            Task::new(3, 1, "c", "planning"),
            Task::new(4, 1, "d", "blocked"),
        ]
    }

    #[test]
    fn column_items_keep_source_order() {
        let tasks = tasks();
        let ids: Vec<_> = ColumnItems::new(&tasks, "planning").map(|t| t.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn column_items_are_restartable() {
        let tasks = tasks();
        let iter = ColumnItems::new(&tasks, "planning");
        assert_eq!(iter.clone().count(), 2);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn unplaced_items_match_no_column() {
        let tasks = tasks();
        let columns = ColumnSet::task_defaults();
        let ids: Vec<_> = UnplacedItems::new(&tasks, &columns).map(|t| t.id).collect();
        assert_eq!(ids, [4]);
    }

    #[test]
    fn unsorted_lane_only_when_needed() {
        let columns = ColumnSet::task_defaults();
        let tasks = vec![Task::new(1, 1, "a", "planning")];
        let lanes = derive_lanes(&columns, &tasks, UnknownStatusPolicy::Surface);
        assert_eq!(lanes.len(), 3);
        assert!(lanes.iter().all(Lane::accepts_drop));
    }

    #[test]
    fn unsorted_lane_refuses_drops() {
        let columns = ColumnSet::task_defaults();
        let tasks = tasks();
        let lanes = derive_lanes(&columns, &tasks, UnknownStatusPolicy::Surface);
        let unsorted = &lanes[3];
        assert_eq!(unsorted.id(), None);
        assert!(!unsorted.accepts_drop());
        assert_eq!(unsorted.len(), 1);
    }
}
