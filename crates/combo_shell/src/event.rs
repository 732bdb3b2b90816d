//! UI events forwarded from a backend into the shell

use combo_core::{EventSource, KeyboardEvent, Propagation};

/// Raw UI event, already tagged with where it was captured
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The field's text changed (forwarded verbatim to the search callback)
    Input(String),
    /// Key event captured by the widget's key container
    Key {
        event: KeyboardEvent,
        source: EventSource,
    },
    /// Pointer entered a row
    RowHover(usize),
    /// A row was clicked
    RowClick(usize),
    /// The row's add/confirm affordance was clicked
    AddClick(usize),
    /// The clear control was clicked
    ClearClick,
}

impl UiEvent {
    /// Key press captured with the given source
    pub fn key(event: KeyboardEvent, source: EventSource) -> Self {
        UiEvent::Key { event, source }
    }

    /// Row targeted by this event, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            UiEvent::RowHover(index) | UiEvent::RowClick(index) | UiEvent::AddClick(index) => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// How the backend should treat the event after dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform default action (scrolling, cursor movement)
    pub prevent_default: bool,
    pub propagation: Propagation,
}

impl EventResponse {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            prevent_default: true,
            propagation: Propagation::Continue,
        }
    }

    pub fn stopped() -> Self {
        Self {
            prevent_default: false,
            propagation: Propagation::Stop,
        }
    }
}
