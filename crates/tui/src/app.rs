//! Main application struct and run loop.
//!
//! [`App::update`] turns a message into state changes and, when the service
//! must be called, an [`Action`]. [`App::perform`] runs that action against
//! the board controller. Splitting the two keeps every key and mouse
//! gesture testable without a terminal.

use labboard_board::{
    Acknowledgment, AutoConfirm, BoardController, DropOutcome, Interaction, Lane, RemoveOutcome,
};
use labboard_protocol::{BoardItem, ItemId, Message};
use labboard_service::DataService;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tracing::debug;

use crate::{
    event::{event_to_message, poll_event},
    layout::{MIN_HEIGHT, MIN_WIDTH, ScreenLayout, lane_areas, lane_at},
    prompt::TerminalPrompt,
    state::{AppState, Carry, Toast},
    terminal::AppTerminal,
    widgets::{
        BoardFocus, card_at, render_board, render_detail_panel, render_help_overlay,
        render_status_bar,
    },
};

/// A call to the data service requested by a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reload the board.
    Load,
    /// Drop the carried item on the column with this id.
    Drop(String),
    /// Delete the item with this id, after confirmation.
    Delete(ItemId),
}

/// The terminal board over one collection.
///
/// # Examples
///
/// ```
/// use labboard_board::BoardController;
/// use labboard_protocol::{Message, Project, default_project_columns};
/// use labboard_service::InMemoryService;
/// use labboard_tui::{Action, App};
///
/// let service = InMemoryService::new(vec![Project::new(1, "Soil survey", "todo")]);
/// let board = BoardController::new(default_project_columns(), service).unwrap();
/// let mut app = App::new(board);
///
/// assert_eq!(app.update(Message::Refresh), Some(Action::Load));
/// ```
#[derive(Debug)]
pub struct App<T: BoardItem, S> {
    board: BoardController<T, S>,
    state: AppState,
    subtitle: Option<String>,
    should_quit: bool,
    /// Last rendered area, used for mouse hit-testing.
    last_area: Rect,
}

impl<T, S> App<T, S>
where
    T: BoardItem,
    S: DataService<T>,
{
    /// Creates an application over `board`.
    #[must_use]
    pub fn new(board: BoardController<T, S>) -> Self {
        Self {
            board,
            state: AppState::new(),
            subtitle: None,
            should_quit: false,
            last_area: Rect::default(),
        }
    }

    /// Sets a subtitle shown in the header, such as the parent project.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Returns the board controller.
    #[must_use]
    pub fn board(&self) -> &BoardController<T, S> {
        &self.board
    }

    /// Returns the UI state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the selected item.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        let lanes = self.board.lanes();
        let lane = lanes.get(self.state.selected_lane)?;
        lane.items.get(self.state.selected_item?).copied()
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.selected().map(BoardItem::id)
    }

    fn lane_lens(&self) -> Vec<usize> {
        self.board.lanes().iter().map(Lane::len).collect()
    }

    /// Lanes that accept drops; the unsorted lane, when shown, comes last.
    fn droppable(&self) -> usize {
        self.board.columns().len()
    }

    fn lane_areas(&self) -> Vec<Rect> {
        ScreenLayout::compute(self.last_area)
            .map(|layout| lane_areas(layout.content, self.board.lanes().len()))
            .unwrap_or_default()
    }

    /// Applies a message to the UI state.
    ///
    /// Returns the service call to make, if any. While the help overlay is
    /// shown, any message other than quit only dismisses it.
    pub fn update(&mut self, msg: Message) -> Option<Action> {
        if self.state.help_visible {
            if msg.is_terminating() {
                self.should_quit = true;
            } else {
                self.state.toggle_help();
            }
            return None;
        }

        if self.state.detail_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::ToggleHelp => self.state.toggle_help(),
                Message::Escape | Message::Select => self.state.detail_visible = false,
                _ => {}
            }
            return None;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
                None
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
                None
            }
            Message::Escape => {
                if self.state.is_carrying() {
                    self.cancel_drag();
                } else {
                    self.state.toast = None;
                }
                None
            }
            Message::NavigateLeft => {
                let lens = self.lane_lens();
                self.state.navigate_left(&lens, self.droppable());
                None
            }
            Message::NavigateRight => {
                let lens = self.lane_lens();
                self.state.navigate_right(&lens, self.droppable());
                None
            }
            Message::NavigateUp => {
                let lens = self.lane_lens();
                self.state.navigate_up(&lens);
                None
            }
            Message::NavigateDown => {
                let lens = self.lane_lens();
                self.state.navigate_down(&lens);
                None
            }
            Message::PickUp => {
                self.pick_up();
                None
            }
            Message::Select => match self.state.carry {
                Some(carry) => self.drop_action(carry.target),
                None => {
                    if self.selected().is_some() {
                        self.state.detail_visible = true;
                    }
                    None
                }
            },
            Message::Delete if !self.state.is_carrying() => self.selected_id().map(Action::Delete),
            Message::Delete => None,
            Message::Refresh => {
                if self.state.is_carrying() {
                    self.cancel_drag();
                }
                Some(Action::Load)
            }
            Message::MouseDown { column, row } => {
                self.mouse_down(column, row);
                None
            }
            Message::MouseDrag { column, row } => {
                let lane = lane_at(&self.lane_areas(), column, row);
                if let (Some(carry), Some(lane)) = (self.state.carry.as_mut(), lane) {
                    if carry.by_mouse {
                        carry.target = lane;
                    }
                }
                None
            }
            Message::MouseUp { column, row } => self.mouse_up(column, row),
        }
    }

    fn pick_up(&mut self) {
        if self.state.is_carrying() {
            return;
        }
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Ok(session) = self.board.begin_drag(id) {
            let title = session.item().title().to_string();
            let target = if self.state.selected_lane < self.droppable() {
                self.state.selected_lane
            } else {
                0
            };
            self.state.carry = Some(Carry {
                target,
                by_mouse: false,
            });
            self.state.toast = Some(Toast::info(format!(
                "Carrying \"{title}\": choose a lane and press Enter"
            )));
        }
    }

    fn cancel_drag(&mut self) {
        self.board.end_drag();
        self.state.carry = None;
        self.state.toast = Some(Toast::info("Move cancelled"));
    }

    fn drop_action(&mut self, target: usize) -> Option<Action> {
        let column = self.board.columns().get(target).map(|column| column.id().to_string());
        if column.is_none() {
            self.cancel_drag();
            self.state.toast = Some(Toast::failure("Cards cannot be dropped on that lane"));
        }
        column.map(Action::Drop)
    }

    fn mouse_down(&mut self, column: u16, row: u16) {
        if self.state.is_carrying() {
            return;
        }
        let areas = self.lane_areas();
        let Some(lane) = lane_at(&areas, column, row) else {
            return;
        };
        let lens = self.lane_lens();
        let selected = (self.state.selected_lane == lane)
            .then_some(self.state.selected_item)
            .flatten();
        let card = card_at(areas[lane], lens[lane], selected, row);
        self.state.select(lane, card);

        let Some(id) = self.selected_id() else {
            return;
        };
        if self.board.begin_drag(id).is_ok() {
            self.state.carry = Some(Carry {
                target: lane,
                by_mouse: true,
            });
        }
    }

    fn mouse_up(&mut self, column: u16, row: u16) -> Option<Action> {
        if !self.state.carry.is_some_and(|carry| carry.by_mouse) {
            return None;
        }
        match lane_at(&self.lane_areas(), column, row) {
            Some(lane) => self.drop_action(lane),
            None => {
                self.cancel_drag();
                None
            }
        }
    }

    /// Runs an action against the data service and reports the outcome in
    /// a toast.
    ///
    /// `prompt` answers the confirmation of a deletion.
    pub async fn perform(&mut self, action: Action, prompt: &mut (dyn Interaction + Send)) {
        let kind = T::KIND;
        match action {
            Action::Load => {
                self.state.toast = Some(match self.board.load().await {
                    Ok(count) => Toast::success(format!("Loaded {count} {}", kind.plural())),
                    Err(err) => {
                        Toast::failure(format!("Could not load {}: {}", kind.plural(), err.summary()))
                    }
                });
            }
            Action::Drop(column) => {
                let title = self
                    .board
                    .drag_session()
                    .map(|session| session.item().title().to_string())
                    .unwrap_or_default();
                let column_name = self
                    .board
                    .columns()
                    .find(&column)
                    .map_or_else(|| column.clone(), |c| c.name().to_string());
                self.state.carry = None;

                self.state.toast = Some(match self.board.drop_on(&column).await {
                    Ok(DropOutcome::Moved(item)) => {
                        self.follow(item.id());
                        Toast::success(format!("Moved \"{title}\" to {column_name}"))
                    }
                    Ok(DropOutcome::Unchanged) => {
                        Toast::info(format!("\"{title}\" is already in {column_name}"))
                    }
                    Err(err) => Toast::failure(format!(
                        "Could not move \"{title}\": {}",
                        err.summary()
                    )),
                });
            }
            Action::Delete(id) => {
                let mut relay = ToastRelay {
                    prompt,
                    toast: None,
                };
                let outcome = self.board.remove(id, &mut relay).await;
                let toast = relay.toast;
                match outcome {
                    Ok(RemoveOutcome::Declined) => {
                        self.state.toast = Some(Toast::info("Nothing deleted"));
                    }
                    Ok(RemoveOutcome::NotOnBoard) => debug!(id, "deleted item was not on the board"),
                    Ok(RemoveOutcome::Deleted) => self.state.toast = toast,
                    Err(err) => {
                        self.state.toast =
                            toast.or_else(|| Some(Toast::failure(err.summary())));
                    }
                }
            }
        }

        let lens = self.lane_lens();
        self.state.clamp_selection(&lens);
    }

    /// Moves the selection to wherever the item with `id` now is.
    fn follow(&mut self, id: ItemId) {
        let position = self.board.lanes().iter().enumerate().find_map(|(lane, l)| {
            l.items
                .iter()
                .position(|item| item.id() == id)
                .map(|index| (lane, index))
        });
        if let Some((lane, index)) = position {
            self.state.select(lane, Some(index));
        }
    }

    /// Renders the application into a frame.
    pub fn view(&mut self, frame: &mut Frame) {
        self.last_area = frame.area();
        self.render(frame.area(), frame.buffer_mut());
    }

    /// Renders the application into a buffer.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = ScreenLayout::compute(area) else {
            render_too_small(area, buf);
            return;
        };

        if let Some(header) = layout.header {
            self.render_header(header, buf);
        }

        let lanes = self.board.lanes();
        let detail = self
            .state
            .detail_visible
            .then(|| self.selected())
            .flatten();
        match detail {
            Some(item) => {
                let lane_name = lanes
                    .get(self.state.selected_lane)
                    .map_or("", |lane| lane.name());
                render_detail_panel(item, lane_name, layout.content, buf);
            }
            None => {
                let focus = BoardFocus {
                    selected_lane: self.state.selected_lane,
                    selected_item: self.state.selected_item,
                    drop_target: self.state.carry.map(|carry| carry.target),
                    carried: self.board.drag_session().map(|session| session.item_id()),
                };
                render_board(&lanes, focus, layout.content, buf);
            }
        }

        render_status_bar(
            self.state.toast.as_ref(),
            self.state.is_carrying(),
            layout.status,
            buf,
        );

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let mut title = vec![
            Span::styled(
                "labboard",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(format!("{}s", T::KIND.display_name()), Style::default().fg(Color::White)),
        ];
        if let Some(subtitle) = &self.subtitle {
            title.push(Span::styled(
                format!(" of {subtitle}"),
                Style::default().fg(Color::Gray),
            ));
        }
        Paragraph::new(Line::from(title)).render(title_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right)
        .render(help_area, buf);
    }

    /// Takes a picture of the current screen, used behind modal dialogs.
    fn snapshot(&self) -> Buffer {
        let mut buf = Buffer::empty(self.last_area);
        self.render(self.last_area, &mut buf);
        buf
    }

    /// Runs the event loop until the user quits.
    ///
    /// Loads the board first if it was not loaded yet.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail. Service failures are
    /// shown in the status bar and never end the loop.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use labboard_board::BoardController;
    /// use labboard_protocol::{Project, default_project_columns};
    /// use labboard_service::InMemoryService;
    /// use labboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let service = InMemoryService::new(vec![Project::new(1, "Soil survey", "todo")]);
    ///     let board = BoardController::new(default_project_columns(), service)?;
    ///
    ///     terminal::install_panic_hook();
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let result = App::new(board).run(&mut terminal).await;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     result
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        if !self.board.is_loaded() {
            self.perform(Action::Load, &mut AutoConfirm::new(false)).await;
        }

        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) else {
                continue;
            };
            if let Some(action) = self.update(msg) {
                let backdrop = self.snapshot();
                let mut prompt = TerminalPrompt::new(terminal, backdrop);
                self.perform(action, &mut prompt).await;
            }
        }
        Ok(())
    }
}

/// Shows acknowledgments as toasts and passes confirmations through.
struct ToastRelay<'a> {
    prompt: &'a mut (dyn Interaction + Send),
    toast: Option<Toast>,
}

impl Interaction for ToastRelay<'_> {
    fn confirm(&mut self, question: &str) -> bool {
        self.prompt.confirm(question)
    }

    fn acknowledge(&mut self, acknowledgment: Acknowledgment) {
        self.prompt.acknowledge(acknowledgment.clone());
        self.toast = Some(acknowledgment.into());
    }
}

fn render_too_small(area: Rect, buf: &mut Buffer) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let offset = area.height.saturating_sub(2) / 2;
    let centered = Rect {
        y: area.y + offset,
        height: area.height.saturating_sub(offset),
        ..area
    };
    Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(centered, buf);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use labboard_protocol::{Column, Project, UnknownStatusPolicy};
    use labboard_service::{InMemoryService, ServiceError};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::state::ToastKind;
    use crate::test_utils::buffer_to_string;

    type TestApp = App<Project, Arc<InMemoryService<Project>>>;

    fn columns() -> Vec<Column> {
        vec![
            Column::from_id("todo"),
            Column::new("in-progress", "Doing"),
            Column::from_id("done"),
        ]
    }

    fn projects() -> Vec<Project> {
        vec![
            Project::new(1, "Soil survey", "todo"),
            Project::new(2, "Seed bank", "in-progress"),
            Project::new(3, "Pollinators", "todo"),
            Project::new(4, "Old grant", "archived"),
        ]
    }

    async fn app_with(policy: UnknownStatusPolicy) -> (TestApp, Arc<InMemoryService<Project>>) {
        let service = Arc::new(InMemoryService::new(projects()));
        let board = BoardController::new(columns(), Arc::clone(&service))
            .unwrap()
            .with_policy(policy);
        let mut app = App::new(board);
        app.perform(Action::Load, &mut AutoConfirm::new(false)).await;
        (app, service)
    }

    async fn app() -> (TestApp, Arc<InMemoryService<Project>>) {
        app_with(UnknownStatusPolicy::Hide).await
    }

    fn draw(app: &mut TestApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[tokio::test]
    async fn load_reports_count() {
        let (app, _) = app().await;
        let toast = app.state().toast.clone().unwrap();
        assert_eq!(toast, Toast::success("Loaded 4 projects"));
    }

    #[tokio::test]
    async fn failed_load_keeps_board_and_shows_failure() {
        let (mut app, service) = app().await;
        service
            .fail_next(ServiceError::Timeout {
                url: "http://lab/projects".into(),
            })
            .await;

        let action = app.update(Message::Refresh);
        assert_eq!(action, Some(Action::Load));
        app.perform(Action::Load, &mut AutoConfirm::new(false)).await;

        assert_eq!(app.board().items().len(), 4);
        let toast = app.state().toast.clone().unwrap();
        assert_eq!(toast.kind, ToastKind::Failure);
        assert!(toast.message.starts_with("Could not load projects"));
    }

    #[tokio::test]
    async fn quit_and_help() {
        let (mut app, _) = app().await;
        app.update(Message::ToggleHelp);
        assert!(app.state().help_visible);
        app.update(Message::NavigateRight);
        assert!(!app.state().help_visible);
        assert_eq!(app.state().selected_lane, 0);

        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn keyboard_drag_and_drop_moves_item() {
        let (mut app, service) = app().await;
        app.update(Message::NavigateDown);
        assert_eq!(app.selected().map(|p| p.id), Some(1));

        assert_eq!(app.update(Message::PickUp), None);
        assert!(app.board().drag_session().is_some());
        app.update(Message::NavigateRight);
        app.update(Message::NavigateRight);

        let action = app.update(Message::Select);
        assert_eq!(action, Some(Action::Drop("done".into())));
        app.perform(action.unwrap(), &mut AutoConfirm::new(false)).await;

        assert!(!app.state().is_carrying());
        assert!(app.board().drag_session().is_none());
        assert_eq!(app.board().item(1).unwrap().status, "done");
        assert_eq!(service.items().await.iter().find(|p| p.id == 1).unwrap().status, "done");
        // The selection follows the moved card
        assert_eq!(app.selected().map(|p| p.id), Some(1));
        assert_eq!(app.state().selected_lane, 2);
        assert_eq!(
            app.state().toast,
            Some(Toast::success("Moved \"Soil survey\" to Done"))
        );
    }

    #[tokio::test]
    async fn escape_cancels_drag_without_request() {
        let (mut app, service) = app().await;
        app.update(Message::NavigateDown);
        app.update(Message::PickUp);
        app.update(Message::NavigateRight);
        app.update(Message::Escape);

        assert!(!app.state().is_carrying());
        assert!(app.board().drag_session().is_none());
        assert_eq!(service.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn drop_on_own_lane_is_unchanged() {
        let (mut app, service) = app().await;
        app.update(Message::NavigateDown);
        app.update(Message::PickUp);
        let action = app.update(Message::Select).unwrap();
        app.perform(action, &mut AutoConfirm::new(false)).await;

        assert_eq!(service.calls().await.len(), 1);
        assert_eq!(app.state().toast.as_ref().map(|t| t.kind), Some(ToastKind::Info));
    }

    #[tokio::test]
    async fn failed_drop_leaves_item_in_place() {
        let (mut app, service) = app().await;
        app.update(Message::NavigateDown);
        app.update(Message::PickUp);
        app.update(Message::NavigateRight);
        service
            .fail_next(ServiceError::Server {
                status: 500,
                message: "boom".into(),
            })
            .await;
        let action = app.update(Message::Select).unwrap();
        app.perform(action, &mut AutoConfirm::new(false)).await;

        assert_eq!(app.board().item(1).unwrap().status, "todo");
        assert!(!app.state().is_carrying());
        assert_eq!(app.state().toast.as_ref().map(|t| t.kind), Some(ToastKind::Failure));
    }

    #[tokio::test]
    async fn delete_confirmed_removes_item() {
        let (mut app, _) = app().await;
        app.update(Message::NavigateRight);
        app.update(Message::NavigateDown);
        let action = app.update(Message::Delete);
        assert_eq!(action, Some(Action::Delete(2)));

        let mut prompt = AutoConfirm::new(true);
        app.perform(action.unwrap(), &mut prompt).await;

        assert!(app.board().item(2).is_none());
        assert_eq!(prompt.questions(), ["Delete project \"Seed bank\"?"]);
        assert_eq!(
            app.state().toast,
            Some(Toast::success("Project \"Seed bank\" deleted"))
        );
        assert_eq!(app.state().selected_item, None);
    }

    #[tokio::test]
    async fn delete_declined_keeps_item() {
        let (mut app, service) = app().await;
        app.update(Message::NavigateDown);
        let action = app.update(Message::Delete).unwrap();
        app.perform(action, &mut AutoConfirm::new(false)).await;

        assert!(app.board().item(1).is_some());
        assert_eq!(service.calls().await.len(), 1);
        assert_eq!(app.state().toast, Some(Toast::info("Nothing deleted")));
    }

    #[tokio::test]
    async fn delete_failure_shows_acknowledgment() {
        let (mut app, service) = app().await;
        app.update(Message::NavigateDown);
        service.fail_next(ServiceError::NotFound { id: Some(1) }).await;
        let action = app.update(Message::Delete).unwrap();
        app.perform(action, &mut AutoConfirm::new(true)).await;

        assert!(app.board().item(1).is_some());
        let toast = app.state().toast.clone().unwrap();
        assert_eq!(toast.kind, ToastKind::Failure);
        assert!(toast.message.starts_with("Could not delete project \"Soil survey\""));
    }

    #[tokio::test]
    async fn enter_opens_and_closes_details() {
        let (mut app, _) = app().await;
        assert_eq!(app.update(Message::Select), None);
        assert!(!app.state().detail_visible);

        app.update(Message::NavigateDown);
        app.update(Message::Select);
        assert!(app.state().detail_visible);
        assert!(draw(&mut app).contains("Project #1"));

        app.update(Message::Escape);
        assert!(!app.state().detail_visible);
    }

    #[tokio::test]
    async fn mouse_drag_and_drop() {
        let (mut app, _) = app().await;
        draw(&mut app);

        // Lanes are 30 columns wide below a 3 row header; the first card
        // starts on row 4
        app.update(Message::MouseDown { column: 5, row: 9 });
        assert_eq!(app.selected().map(|p| p.id), Some(3));
        assert!(app.state().carry.is_some_and(|c| c.by_mouse));

        app.update(Message::MouseDrag { column: 40, row: 9 });
        assert_eq!(app.state().carry.map(|c| c.target), Some(1));

        let action = app.update(Message::MouseUp { column: 70, row: 9 });
        assert_eq!(action, Some(Action::Drop("done".into())));
        app.perform(action.unwrap(), &mut AutoConfirm::new(false)).await;
        assert_eq!(app.board().item(3).unwrap().status, "done");
    }

    #[tokio::test]
    async fn mouse_release_outside_lanes_ends_drag() {
        let (mut app, service) = app().await;
        draw(&mut app);

        app.update(Message::MouseDown { column: 5, row: 5 });
        assert!(app.state().is_carrying());
        let action = app.update(Message::MouseUp { column: 5, row: 0 });

        assert_eq!(action, None);
        assert!(!app.state().is_carrying());
        assert!(app.board().drag_session().is_none());
        assert_eq!(service.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn unsorted_lane_refuses_drops() {
        let (mut app, _) = app_with(UnknownStatusPolicy::Surface).await;
        let screen = draw(&mut app);
        assert!(screen.contains("Unsorted (1)"));

        // Four lanes of 22 or 23 columns; drag from the first to the last
        app.update(Message::MouseDown { column: 5, row: 5 });
        let action = app.update(Message::MouseUp { column: 80, row: 5 });

        assert_eq!(action, None);
        assert!(app.board().drag_session().is_none());
        assert_eq!(app.board().item(1).unwrap().status, "todo");
        assert_eq!(app.state().toast.as_ref().map(|t| t.kind), Some(ToastKind::Failure));
    }

    #[tokio::test]
    async fn screen_shows_header_lanes_and_status() {
        let (mut app, _) = app().await;
        let screen = draw(&mut app);

        assert!(screen.contains("labboard - Projects"));
        assert!(screen.contains("Press ? for help"));
        assert!(screen.contains("Todo (2)"));
        assert!(screen.contains("Doing (1)"));
        assert!(screen.contains("Loaded 4 projects"));
        assert!(!screen.contains("Old grant"));
    }

    #[tokio::test]
    async fn tiny_terminal_shows_warning() {
        let (mut app, _) = app().await;
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        let screen = buffer_to_string(terminal.backend().buffer());
        assert!(screen.contains("Terminal too small"));
    }
}
