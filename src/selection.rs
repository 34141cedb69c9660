//! Single-date and date-range selection.
//!
//! [`SelectionController`] owns a [`SelectionState`] and advances it on two
//! kinds of input from the view layer: discrete taps on a day, and drag steps
//! that move an existing endpoint. Every applied transition is reported to a
//! [`SelectionObserver`] before the call returns.
//!
//! The controller never reorders endpoints. Drag guards keep `start < end`
//! once both are set, but state supplied through
//! [`SelectionController::with_state`] is taken as given.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{CalendarDate, DateRange, DayVisualState, OPEN_ENDPOINT, RANGE_SEPARATOR, YearMonth};

/// The two optional endpoints of the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

impl SelectionState {
    /// Creates a state from raw endpoints. The order is not checked.
    pub const fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// Nothing selected.
    pub const fn empty() -> Self {
        Self::new(None, None)
    }

    /// Returns the start date, if set.
    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    /// Returns the end date, if set.
    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Neither endpoint is set.
    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Both endpoints are set.
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// True when `date` is one of the set endpoints, i.e. a day the view may
    /// offer as a drag handle.
    pub fn is_boundary(&self, date: CalendarDate) -> bool {
        self.start == Some(date) || self.end == Some(date)
    }

    /// True for days strictly between a complete selection's endpoints.
    pub fn is_highlighted(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        }
    }

    /// The selection as a validated range.
    ///
    /// A lone start gives a one-day range; `None` when nothing is selected
    /// or the endpoints are out of order.
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end).ok(),
            (Some(single), None) | (None, Some(single)) => Some(DateRange::single(single)),
            (None, None) => None,
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoint = |date: Option<CalendarDate>| {
            date.map_or_else(|| OPEN_ENDPOINT.to_owned(), |d| d.to_string())
        };
        write!(f, "{}{RANGE_SEPARATOR}{}", endpoint(self.start), endpoint(self.end))
    }
}

/// Outcome of feeding one event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// A transition was applied; carries the resulting state.
    Changed(SelectionState),
    /// The event was ignored. No state change, no notification.
    Unchanged,
}

impl SelectionChange {
    /// True if the event was applied.
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Returns the resulting state of an applied event.
    pub const fn state(&self) -> Option<SelectionState> {
        match self {
            Self::Changed(state) => Some(*state),
            Self::Unchanged => None,
        }
    }
}

/// Receives the new state after every applied transition.
///
/// Called synchronously from inside `handle_tap`/`handle_drag`.
pub trait SelectionObserver {
    fn selection_changed(&mut self, state: &SelectionState);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&SelectionState),
{
    fn selection_changed(&mut self, state: &SelectionState) {
        self(state);
    }
}

/// Observer that discards notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {
    fn selection_changed(&mut self, _state: &SelectionState) {}
}

/// Which endpoint a drag is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handle {
    Start,
    End,
}

/// Applies tap and drag transitions to a [`SelectionState`].
#[derive(Debug, Clone, Default)]
pub struct SelectionController<O = NoopObserver> {
    state:    SelectionState,
    observer: O,
}

impl SelectionController {
    /// An empty selection with no observer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: SelectionObserver> SelectionController<O> {
    /// An empty selection reporting to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            state: SelectionState::empty(),
            observer,
        }
    }

    /// Replaces the initial selection, e.g. to restore a previously chosen
    /// range. Does not notify.
    #[must_use]
    pub fn with_state(mut self, state: SelectionState) -> Self {
        self.state = state;
        self
    }

    /// Returns the current selection.
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the observer.
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the controller, returning its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Applies a tap on `date`.
    ///
    /// - nothing selected: `date` becomes the start
    /// - start only: a date on or before the start replaces it, a later one
    ///   becomes the end
    /// - complete range: starts over with `date` as the only endpoint
    ///
    /// Always notifies, even when the tap lands on the current lone start.
    pub fn handle_tap(&mut self, date: CalendarDate) -> SelectionChange {
        let next = match (self.state.start, self.state.end) {
            (None, _) => SelectionState::new(Some(date), self.state.end),
            (Some(start), None) if date <= start => SelectionState::new(Some(date), None),
            (Some(start), None) => SelectionState::new(Some(start), Some(date)),
            (Some(_), Some(_)) => SelectionState::new(Some(date), None),
        };
        debug!(%date, selection = %next, "tap");
        self.commit(next)
    }

    /// Applies one step of a drag that began on `from` and is now over `to`.
    ///
    /// `from` picks the endpoint being moved. A handle moves freely while its
    /// counterpart is unset; otherwise it may not reach or cross it. If `from`
    /// is neither endpoint the anchor is stale and the step is ignored.
    pub fn handle_drag(&mut self, from: CalendarDate, to: CalendarDate) -> SelectionChange {
        let Some(handle) = self.handle_at(from) else {
            trace!(%from, %to, selection = %self.state, "drag from a day that is not an endpoint");
            return SelectionChange::Unchanged;
        };

        let next = match handle {
            Handle::Start => match self.state.end {
                Some(end) if to >= end => None,
                end => Some(SelectionState::new(Some(to), end)),
            },
            Handle::End => match self.state.start {
                Some(start) if to <= start => None,
                start => Some(SelectionState::new(start, Some(to))),
            },
        };

        match next {
            Some(next) => {
                debug!(?handle, %from, %to, selection = %next, "drag");
                self.commit(next)
            },
            None => {
                trace!(?handle, %from, %to, selection = %self.state, "drag would cross the other endpoint");
                SelectionChange::Unchanged
            },
        }
    }

    /// How `date` should be drawn while `shown_month` is the month being laid out.
    pub fn visual_state(&self, date: CalendarDate, shown_month: YearMonth) -> DayVisualState {
        DayVisualState::project(date, shown_month, &self.state)
    }

    // Start wins when both endpoints sit on the same day.
    fn handle_at(&self, date: CalendarDate) -> Option<Handle> {
        if self.state.start == Some(date) {
            Some(Handle::Start)
        } else if self.state.end == Some(date) {
            Some(Handle::End)
        } else {
            None
        }
    }

    fn commit(&mut self, next: SelectionState) -> SelectionChange {
        self.state = next;
        self.observer.selection_changed(&self.state);
        SelectionChange::Changed(self.state)
    }
}
