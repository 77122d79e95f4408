//! Application state management.
//!
//! The state only holds positions (lane and card indices); the items
//! themselves live in the board controller. Lane sizes are passed in by the
//! caller after each change of the item list.

use labboard_board::Acknowledgment;

/// How a toast message is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information.
    Info,
    /// A change went through.
    Success,
    /// Something failed.
    Failure,
}

/// A short message shown in the status bar until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// What to show.
    pub message: String,
    /// How to show it.
    pub kind: ToastKind,
}

impl Toast {
    /// Creates an informational toast.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
        }
    }

    /// Creates a success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    /// Creates a failure toast.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Failure,
        }
    }
}

impl From<Acknowledgment> for Toast {
    fn from(acknowledgment: Acknowledgment) -> Self {
        match acknowledgment {
            Acknowledgment::Success(message) => Self::success(message),
            Acknowledgment::Failure(message) => Self::failure(message),
        }
    }
}

/// A card being carried towards a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carry {
    /// Index of the lane the card would be dropped on.
    pub target: usize,
    /// Whether the gesture is a mouse drag.
    pub by_mouse: bool,
}

/// The application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Index of the selected lane.
    pub selected_lane: usize,
    /// Index of the selected card within the selected lane, if any.
    pub selected_item: Option<usize>,
    /// The drag in progress, if any.
    pub carry: Option<Carry>,
    /// Whether the detail panel replaces the lanes.
    pub detail_visible: bool,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The last toast.
    pub toast: Option<Toast>,
}

impl AppState {
    /// Creates a state with the first lane selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a card is carried.
    #[must_use]
    pub fn is_carrying(&self) -> bool {
        self.carry.is_some()
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Moves the selection, or the drop target while carrying, to the left.
    ///
    /// While carrying, only the first `droppable` lanes are targets.
    pub fn navigate_left(&mut self, lane_lens: &[usize], droppable: usize) {
        if let Some(carry) = &mut self.carry {
            carry.target = wrap_back(carry.target, droppable);
            return;
        }
        self.selected_lane = wrap_back(self.selected_lane, lane_lens.len());
        self.clamp_selection(lane_lens);
    }

    /// Moves the selection, or the drop target while carrying, to the right.
    pub fn navigate_right(&mut self, lane_lens: &[usize], droppable: usize) {
        if let Some(carry) = &mut self.carry {
            carry.target = wrap_forward(carry.target, droppable);
            return;
        }
        self.selected_lane = wrap_forward(self.selected_lane, lane_lens.len());
        self.clamp_selection(lane_lens);
    }

    /// Moves the card selection up, wrapping to the bottom.
    pub fn navigate_up(&mut self, lane_lens: &[usize]) {
        if self.carry.is_some() {
            return;
        }
        let len = self.selected_lane_len(lane_lens);
        self.selected_item = match (len, self.selected_item) {
            (0, _) => None,
            (_, Some(idx)) if idx > 0 => Some(idx - 1),
            (len, Some(_)) => Some(len - 1),
            (_, None) => Some(0),
        };
    }

    /// Moves the card selection down, wrapping to the top.
    pub fn navigate_down(&mut self, lane_lens: &[usize]) {
        if self.carry.is_some() {
            return;
        }
        let len = self.selected_lane_len(lane_lens);
        self.selected_item = match (len, self.selected_item) {
            (0, _) => None,
            (len, Some(idx)) if idx + 1 < len => Some(idx + 1),
            (_, _) => Some(0),
        };
    }

    /// Selects a card.
    pub fn select(&mut self, lane: usize, item: Option<usize>) {
        self.selected_lane = lane;
        self.selected_item = item;
    }

    /// Keeps the selection inside the lanes after the item list changed.
    pub fn clamp_selection(&mut self, lane_lens: &[usize]) {
        if lane_lens.is_empty() {
            self.selected_lane = 0;
            self.selected_item = None;
            return;
        }
        self.selected_lane = self.selected_lane.min(lane_lens.len() - 1);
        let len = lane_lens[self.selected_lane];
        self.selected_item = match self.selected_item {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    fn selected_lane_len(&self, lane_lens: &[usize]) -> usize {
        lane_lens.get(self.selected_lane).copied().unwrap_or(0)
    }
}

fn wrap_back(index: usize, count: usize) -> usize {
    match count {
        0 => 0,
        _ if index == 0 || index >= count => count - 1,
        _ => index - 1,
    }
}

fn wrap_forward(index: usize, count: usize) -> usize {
    if count == 0 || index + 1 >= count {
        0
    } else {
        index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANES: [usize; 3] = [2, 0, 3];

    #[test]
    fn new_state_selects_first_lane() {
        let state = AppState::new();
        assert_eq!(state.selected_lane, 0);
        assert_eq!(state.selected_item, None);
        assert!(!state.is_carrying());
    }

    #[test]
    fn horizontal_navigation_wraps() {
        let mut state = AppState::new();
        state.navigate_left(&LANES, 3);
        assert_eq!(state.selected_lane, 2);
        state.navigate_right(&LANES, 3);
        assert_eq!(state.selected_lane, 0);
    }

    #[test]
    fn entering_empty_lane_clears_card_selection() {
        let mut state = AppState::new();
        state.select(0, Some(1));
        state.navigate_right(&LANES, 3);
        assert_eq!(state.selected_lane, 1);
        assert_eq!(state.selected_item, None);
    }

    #[test]
    fn vertical_navigation_wraps() {
        let mut state = AppState::new();
        state.navigate_down(&LANES);
        assert_eq!(state.selected_item, Some(0));
        state.navigate_down(&LANES);
        assert_eq!(state.selected_item, Some(1));
        state.navigate_down(&LANES);
        assert_eq!(state.selected_item, Some(0));
        state.navigate_up(&LANES);
        assert_eq!(state.selected_item, Some(1));
    }

    #[test]
    fn carrying_moves_target_over_droppable_lanes_only() {
        let mut state = AppState::new();
        state.select(2, Some(0));
        state.carry = Some(Carry {
            target: 2,
            by_mouse: false,
        });

        state.navigate_right(&[1, 1, 1, 4], 3);
        assert_eq!(state.carry.map(|c| c.target), Some(0));
        state.navigate_left(&[1, 1, 1, 4], 3);
        assert_eq!(state.carry.map(|c| c.target), Some(2));

        // The selection stays on the carried card
        state.navigate_up(&LANES);
        assert_eq!((state.selected_lane, state.selected_item), (2, Some(0)));
    }

    #[test]
    fn clamp_after_items_disappear() {
        let mut state = AppState::new();
        state.select(2, Some(2));
        state.clamp_selection(&[1, 1]);
        assert_eq!((state.selected_lane, state.selected_item), (1, Some(0)));
        state.clamp_selection(&[]);
        assert_eq!((state.selected_lane, state.selected_item), (0, None));
    }

    #[test]
    fn toast_from_acknowledgment() {
        let toast = Toast::from(Acknowledgment::Failure("nope".into()));
        assert_eq!(toast.kind, ToastKind::Failure);
        assert_eq!(toast.message, "nope");
    }
}
