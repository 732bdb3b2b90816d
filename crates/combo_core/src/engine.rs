//! Combobox interaction engine
//!
//! Owns the highlighted row, the selection slot and the load-more mark, and
//! exposes one handler per interaction. The option list is a read-only
//! snapshot replaced wholesale by the caller.
//!
//! # Example
//!
//! ```
//! use combo_core::prelude::*;
//!
//! let mut engine = ComboboxEngine::new(
//!     vec![ComboOption::new(1, "mina"), ComboOption::new(2, "rina")],
//!     &SelectedValue::Value(OptionValue::Int(2)),
//!     Placeholder::from("Type to search name..."),
//!     ComboboxCallbacks::new().on_select(|label| println!("selected {:?}", label)),
//! );
//!
//! assert_eq!(engine.selection().label(), Some("rina"));
//!
//! engine.handle_key(&KeyboardEvent::pressed(Key::Down), EventSource::List);
//! assert_eq!(engine.highlighted_index(), Some(0));
//! ```

use std::fmt;

use crate::input::{EventSource, Key, KeyOutcome, KeyState, KeyboardEvent, Propagation};
use crate::load_trigger::LoadTrigger;
use crate::navigation::{self, Direction};
use crate::option::ComboOption;
use crate::selection::{resolve_selection, Placeholder, SelectedValue, SelectionState};

/// Called with the chosen label, or `None` when the selection is cleared
pub type SelectCallback = Box<dyn FnMut(Option<&str>) + Send>;
/// Called when the selection is cleared so the caller can reset its search text
pub type ClearSearchCallback = Box<dyn FnMut() + Send>;
/// Called to request more options; never awaited
pub type LoadMoreCallback = Box<dyn FnMut() + Send>;

/// Caller-supplied callbacks
#[derive(Default)]
pub struct ComboboxCallbacks {
    on_select: Option<SelectCallback>,
    on_clear_search: Option<ClearSearchCallback>,
    on_load_more: Option<LoadMoreCallback>,
}

impl ComboboxCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection callback
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<&str>) + Send + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Set the clear-search callback
    pub fn on_clear_search<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_clear_search = Some(Box::new(callback));
        self
    }

    /// Set the load-more callback
    pub fn on_load_more<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_load_more = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ComboboxCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxCallbacks")
            .field("on_select", &self.on_select.is_some())
            .field("on_clear_search", &self.on_clear_search.is_some())
            .field("on_load_more", &self.on_load_more.is_some())
            .finish()
    }
}

/// The combobox interaction state machine
pub struct ComboboxEngine {
    options: Vec<ComboOption>,
    highlighted: Option<usize>,
    selection: SelectionState,
    load_trigger: LoadTrigger,
    placeholder: Placeholder,
    disabled: bool,
    callbacks: ComboboxCallbacks,
}

impl fmt::Debug for ComboboxEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxEngine")
            .field("options", &self.options.len())
            .field("highlighted", &self.highlighted)
            .field("selection", &self.selection)
            .field("load_trigger", &self.load_trigger)
            .field("disabled", &self.disabled)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

impl ComboboxEngine {
    /// Create an engine and resolve the initial selection
    ///
    /// The selection is resolved once here. Later option updates do not
    /// re-resolve it; call [`reinitialize`](Self::reinitialize) for that.
    pub fn new(
        options: Vec<ComboOption>,
        selected: &SelectedValue,
        placeholder: Placeholder,
        callbacks: ComboboxCallbacks,
    ) -> Self {
        let selection = resolve_selection(&options, selected, &placeholder);
        tracing::debug!(?selection, options = options.len(), "combobox engine created");

        Self {
            options,
            highlighted: None,
            selection,
            load_trigger: LoadTrigger::new(),
            placeholder,
            disabled: false,
            callbacks,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The option list as supplied by the caller (the engine does not filter)
    pub fn filtered_options(&self) -> &[ComboOption] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Index of the last row, if there are rows
    pub fn terminal_index(&self) -> Option<usize> {
        self.options.len().checked_sub(1)
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_option(&self) -> Option<&ComboOption> {
        self.highlighted.and_then(|index| self.options.get(index))
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Terminal index of the last load-more request
    pub fn last_load_index(&self) -> Option<usize> {
        self.load_trigger.last_triggered()
    }

    // =========================================================================
    // Caller updates
    // =========================================================================

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Replace the option snapshot
    ///
    /// A highlight that no longer fits is reset. A highlight that now sits on
    /// the terminal row counts as reaching the end.
    pub fn set_options(&mut self, options: Vec<ComboOption>) {
        self.options = options;

        if let Some(index) = self.highlighted {
            if index >= self.options.len() {
                tracing::trace!(index, len = self.options.len(), "highlight reset");
                self.highlighted = None;
            }
        }

        self.check_highlight_trigger();
    }

    /// Resolve the selection again against the current options
    pub fn reinitialize(&mut self, selected: &SelectedValue) {
        self.selection = resolve_selection(&self.options, selected, &self.placeholder);
        tracing::debug!(selection = ?self.selection, "selection re-resolved");
    }

    /// Forget the load-more mark so the next terminal observation fires
    pub fn rearm_load_trigger(&mut self) {
        self.load_trigger.rearm();
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Commit `label` as the selection
    ///
    /// The label need not be in the option list.
    pub fn select(&mut self, label: impl Into<String>) {
        if self.disabled {
            return;
        }

        let label = label.into();
        tracing::debug!(label = %label, "combobox select");
        if let Some(ref mut callback) = self.callbacks.on_select {
            callback(Some(&label));
        }
        self.selection = SelectionState::Selected(label);
    }

    /// Clear the selection
    ///
    /// The returned [`Propagation::Stop`] must be honored so the key
    /// container does not also react to the click.
    pub fn clear(&mut self) -> Propagation {
        if self.disabled {
            return Propagation::Continue;
        }

        tracing::debug!("combobox clear");
        self.selection = SelectionState::Empty;
        if let Some(ref mut callback) = self.callbacks.on_select {
            callback(None);
        }
        if let Some(ref mut callback) = self.callbacks.on_clear_search {
            callback();
        }
        Propagation::Stop
    }

    /// Handle a key event from the widget's key container
    pub fn handle_key(&mut self, event: &KeyboardEvent, source: EventSource) -> KeyOutcome {
        if self.disabled || source == EventSource::Field || event.state != KeyState::Pressed {
            return KeyOutcome::Ignored;
        }

        let direction = match event.key {
            Key::Down => Direction::Next,
            Key::Up => Direction::Previous,
            _ => return KeyOutcome::Ignored,
        };

        self.navigate(direction, source);
        KeyOutcome::Handled
    }

    /// Move the highlight one row, wrapping at both ends
    ///
    /// Only list-level focus navigates; events from the field leave the
    /// highlight alone so arrow keys keep moving the text cursor.
    pub fn navigate(&mut self, direction: Direction, source: EventSource) {
        if self.disabled || source == EventSource::Field || self.options.is_empty() {
            return;
        }

        let next = navigation::step(self.highlighted, self.options.len(), direction);
        tracing::trace!(?direction, from = ?self.highlighted, to = ?next, "navigate");
        self.set_highlight(next);
    }

    /// Pointer entered row `index`
    pub fn hover(&mut self, index: usize) {
        if self.disabled {
            return;
        }
        if index >= self.options.len() {
            tracing::trace!(index, len = self.options.len(), "hover outside list ignored");
            return;
        }
        self.set_highlight(Some(index));
    }

    /// Pointer is over the terminal row
    pub fn hover_terminal(&mut self) {
        if self.disabled {
            return;
        }
        if let Some(terminal) = self.terminal_index() {
            tracing::trace!(terminal, "terminal row hovered");
            self.request_load_more(terminal);
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn set_highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
        self.check_highlight_trigger();
    }

    fn check_highlight_trigger(&mut self) {
        if let (Some(index), Some(terminal)) = (self.highlighted, self.terminal_index()) {
            if index == terminal {
                self.request_load_more(terminal);
            }
        }
    }

    fn request_load_more(&mut self, terminal: usize) {
        if !self.load_trigger.arm_for(terminal) {
            return;
        }
        tracing::debug!(terminal, "load more requested");
        if let Some(ref mut callback) = self.callbacks.on_load_more {
            callback();
        }
    }
}
