//! The drag session.

use labboard_protocol::{BoardItem, ItemId};

/// The item currently being dragged.
///
/// The session holds a snapshot of the item taken when the drag started. A
/// drop only uses its id and moves the item as it is on the board then.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession<T> {
    item: T,
}

impl<T: BoardItem> DragSession<T> {
    /// Starts a session carrying `item`.
    #[must_use]
    pub fn new(item: T) -> Self {
        Self { item }
    }

    /// Returns the dragged item.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the id of the dragged item.
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item.id()
    }

    /// Returns the column the item was picked up from.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.item.status()
    }
}
