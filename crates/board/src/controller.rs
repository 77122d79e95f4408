//! The board controller.
//!
//! [`BoardController`] owns the local copy of a collection, derives columns
//! from it and turns drag and drop gestures into status updates on the data
//! service. The local list is only ever changed after the service confirmed
//! a change; there are no optimistic updates.

use labboard_protocol::{
    BoardItem, Column, ColumnSet, ItemDraft, ItemId, ProtocolError, UnknownStatusPolicy,
};
use labboard_service::{DataService, ServiceError};
use tracing::{debug, info, instrument, warn};

use crate::drag::DragSession;
use crate::error::{BoardError, Result};
use crate::interaction::{Acknowledgment, Interaction};
use crate::lanes::{ColumnItems, Lane, UnplacedItems, derive_lanes};
use crate::report::{ErrorReporter, Operation, TracingReporter};

/// What a drop did.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome<T> {
    /// The item was moved and the service returned this record.
    Moved(T),
    /// The item already had the target status; nothing was sent.
    Unchanged,
}

/// What a removal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item was deleted.
    Deleted,
    /// The user declined; nothing was sent.
    Declined,
    /// There was no such item on the board; nothing was asked or sent.
    NotOnBoard,
}

/// A kanban board over one collection of items.
///
/// Mutating operations take `&mut self`, so at most one of them is in flight
/// per board and their results are applied in order.
///
/// # Examples
///
/// ```
/// use labboard_board::{BoardController, DropOutcome};
/// use labboard_protocol::{Project, default_project_columns};
/// use labboard_service::InMemoryService;
///
/// # #[tokio::main]
/// # async fn main() -> labboard_board::Result<()> {
/// let service = InMemoryService::new(vec![Project::new(1, "Soil survey", "todo")]);
/// let mut board = BoardController::new(default_project_columns(), service)?;
/// board.load().await?;
///
/// board.begin_drag(1)?;
/// let outcome = board.drop_on("done").await?;
/// assert!(matches!(outcome, DropOutcome::Moved(_)));
/// assert_eq!(board.items_for_column("done").count(), 1);
/// # Ok(())
/// # }
/// ```
pub struct BoardController<T: BoardItem, S> {
    columns: ColumnSet,
    items: Vec<T>,
    drag: Option<DragSession<T>>,
    policy: UnknownStatusPolicy,
    loaded: bool,
    service: S,
    reporter: Box<dyn ErrorReporter>,
}

impl<T: BoardItem, S: std::fmt::Debug> std::fmt::Debug for BoardController<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardController")
            .field("kind", &T::KIND)
            .field("columns", &self.columns)
            .field("items", &self.items.len())
            .field("drag", &self.drag.as_ref().map(DragSession::item_id))
            .field("policy", &self.policy)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

impl<T, S> BoardController<T, S>
where
    T: BoardItem,
    S: DataService<T>,
{
    /// Creates a board with the given columns, in left-to-right order.
    ///
    /// The board starts empty; call [`load`](Self::load) to fetch items.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] if the columns are empty or
    /// have empty or duplicate ids.
    pub fn new(columns: Vec<Column>, service: S) -> Result<Self> {
        let columns = ColumnSet::new(columns).map_err(BoardError::Configuration)?;
        Ok(Self::with_column_set(columns, service))
    }

    /// Creates a board from an already validated column set.
    #[must_use]
    pub fn with_column_set(columns: ColumnSet, service: S) -> Self {
        Self {
            columns,
            items: Vec::new(),
            drag: None,
            policy: UnknownStatusPolicy::default(),
            loaded: false,
            service,
            reporter: Box::new(TracingReporter),
        }
    }

    /// Sets how items with an unknown status are shown.
    #[must_use]
    pub fn with_policy(mut self, policy: UnknownStatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the error reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl ErrorReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Returns the columns.
    #[must_use]
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Returns all items, in source order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the item with the given id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns the unknown status policy.
    #[must_use]
    pub fn policy(&self) -> UnknownStatusPolicy {
        self.policy
    }

    /// Returns `true` once a load has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns the data service.
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Returns the current drag session.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession<T>> {
        self.drag.as_ref()
    }

    /// Fetches the full collection and replaces the local list.
    ///
    /// On failure the local list is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Service`] if the service fails; the failure is
    /// also reported.
    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn load(&mut self) -> Result<usize> {
        match self.service.list().await {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.loaded = true;
                info!(count, "board loaded");
                Ok(count)
            }
            Err(err) => Err(self.fail(Operation::Load, err)),
        }
    }

    /// Iterates the items of a column, in source order.
    ///
    /// Unknown column ids simply yield nothing.
    pub fn items_for_column<'a>(&'a self, column_id: &'a str) -> ColumnItems<'a, T> {
        ColumnItems::new(&self.items, column_id)
    }

    /// Iterates the items whose status matches no column.
    pub fn unplaced_items(&self) -> UnplacedItems<'_, T> {
        UnplacedItems::new(&self.items, &self.columns)
    }

    /// Groups the items into lanes, following the unknown status policy.
    #[must_use]
    pub fn lanes(&self) -> Vec<Lane<'_, T>> {
        derive_lanes(&self.columns, &self.items, self.policy)
    }

    /// Starts dragging the item with the given id.
    ///
    /// Any previous drag session is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownItem`] if the item is not on the board.
    pub fn begin_drag(&mut self, id: ItemId) -> Result<&DragSession<T>> {
        let item = self.item(id).cloned().ok_or(BoardError::UnknownItem(id))?;
        if let Some(previous) = &self.drag {
            debug!(previous = previous.item_id(), "replacing drag session");
        }
        debug!(id, from = item.status(), "drag started");
        Ok(self.drag.insert(DragSession::new(item)))
    }

    /// Ends the drag gesture without dropping.
    pub fn end_drag(&mut self) -> Option<DragSession<T>> {
        let session = self.drag.take();
        if let Some(session) = &session {
            debug!(id = session.item_id(), "drag ended");
        }
        session
    }

    /// Drops the dragged item on a column.
    ///
    /// The item is moved from its current local state, not from the snapshot
    /// taken when the drag started. The drag session is cleared whatever the
    /// outcome. The local list only changes once the service accepted the
    /// update, and then holds exactly what was sent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoDragSession`] if nothing is dragged,
    /// [`BoardError::UnknownColumn`] if `column_id` is not a column,
    /// [`BoardError::UnknownItem`] if the dragged item left the board, or
    /// [`BoardError::Service`] if the update fails.
    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn drop_on(&mut self, column_id: &str) -> Result<DropOutcome<T>> {
        let session = self.drag.take().ok_or(BoardError::NoDragSession)?;

        if !self.columns.contains(column_id) {
            warn!(column_id, "drop on unknown column");
            return Err(BoardError::UnknownColumn(column_id.to_string()));
        }

        let id = session.item_id();
        let item = self.item(id).ok_or(BoardError::UnknownItem(id))?;
        if item.status() == column_id {
            debug!(id, "dropped on its own column");
            return Ok(DropOutcome::Unchanged);
        }

        let updated = item.with_status(column_id);
        match self.service.update(&updated).await {
            Ok(stored) => {
                debug!(id, status = column_id, "item moved");
                Ok(DropOutcome::Moved(self.confirm(updated, &stored)))
            }
            Err(err) => Err(self.fail(Operation::Update, err)),
        }
    }

    /// Sends an edited item and keeps it once the service accepted it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownItem`] if the item is not on the board,
    /// [`BoardError::Invalid`] if its status names no column, or
    /// [`BoardError::Service`] if the update fails.
    #[instrument(skip(self, item), fields(kind = %T::KIND, id = item.id()))]
    pub async fn update(&mut self, item: T) -> Result<T> {
        if self.item(item.id()).is_none() {
            return Err(BoardError::UnknownItem(item.id()));
        }
        self.columns
            .require(item.status())
            .map_err(BoardError::Invalid)?;

        match self.service.update(&item).await {
            Ok(stored) => Ok(self.confirm(item, &stored)),
            Err(err) => Err(self.fail(Operation::Update, err)),
        }
    }

    /// Creates an item from a draft and appends the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Invalid`] if the title is blank or the status
    /// names no column, or [`BoardError::Service`] if the creation fails.
    #[instrument(skip(self, draft), fields(kind = %T::KIND))]
    pub async fn create(&mut self, draft: T::Draft) -> Result<T> {
        if draft.title().trim().is_empty() {
            return Err(BoardError::Invalid(ProtocolError::EmptyTitle));
        }
        self.columns
            .require(draft.status())
            .map_err(BoardError::Invalid)?;

        match self.service.create(&draft).await {
            Ok(created) => {
                info!(id = created.id(), "item created");
                self.items.push(created.clone());
                Ok(created)
            }
            Err(err) => Err(self.fail(Operation::Create, err)),
        }
    }

    /// Deletes an item after the user confirmed.
    ///
    /// Nothing happens for items that are not on the board. Otherwise the
    /// user is asked first, and told how the deletion went.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Service`] if the deletion fails.
    #[instrument(skip(self, interaction), fields(kind = %T::KIND))]
    pub async fn remove(
        &mut self,
        id: ItemId,
        interaction: &mut (dyn Interaction + Send),
    ) -> Result<RemoveOutcome> {
        let Some(item) = self.item(id) else {
            debug!(id, "nothing to remove");
            return Ok(RemoveOutcome::NotOnBoard);
        };
        let kind = T::KIND.display_name();
        let title = item.title().to_string();

        let question = format!("Delete {} \"{title}\"?", kind.to_lowercase());
        if !interaction.confirm(&question) {
            debug!(id, "removal declined");
            return Ok(RemoveOutcome::Declined);
        }

        match self.service.delete(id).await {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                if self.drag.as_ref().is_some_and(|s| s.item_id() == id) {
                    self.drag = None;
                }
                info!(id, "item deleted");
                interaction.acknowledge(Acknowledgment::Success(format!(
                    "{kind} \"{title}\" deleted"
                )));
                Ok(RemoveOutcome::Deleted)
            }
            Err(err) => {
                interaction.acknowledge(Acknowledgment::Failure(format!(
                    "Could not delete {} \"{title}\": {}",
                    kind.to_lowercase(),
                    err.summary()
                )));
                Err(self.fail(Operation::Delete, err))
            }
        }
    }

    /// Replaces the local item with the same id as `stored`.
    /// Records `sent` as the new local state once the service accepted it.
    ///
    /// Only the version is taken from the service's answer.
    fn confirm(&mut self, mut sent: T, stored: &T) -> T {
        sent.set_version(stored.version());
        self.replace(sent.clone());
        sent
    }

    fn replace(&mut self, stored: T) {
        match self.items.iter_mut().find(|item| item.id() == stored.id()) {
            Some(slot) => *slot = stored,
            None => warn!(id = stored.id(), "updated item is no longer on the board"),
        }
    }

    /// Reports a service failure and wraps it.
    fn fail(&self, operation: Operation, source: ServiceError) -> BoardError {
        warn!(%operation, error = %source, "service call failed");
        self.reporter.report(operation, &source);
        BoardError::Service { operation, source }
    }
}
