//! Combobox component - searchable input with a paginated option list
//!
//! The component binds a [`ComboboxEngine`] to a render description and
//! forwards UI events into it. The caller owns the search text and the
//! option list and pushes both back after every change.
//!
//! # Example
//!
//! ```
//! use combo_shell::prelude::*;
//!
//! let mut widget = cn::combobox()
//!     .placeholder("Type to search name...")
//!     .option(1, "mina")
//!     .option(2, "rina")
//!     .on_select(|label| println!("Selected: {:?}", label))
//!     .build();
//!
//! widget.set_input_value("na");
//! assert!(widget.visibility().is_open());
//!
//! widget.render();
//! widget.dispatch(UiEvent::RowClick(1));
//! assert_eq!(widget.selection().label(), Some("rina"));
//! assert!(!widget.visibility().is_open());
//! ```

use std::fmt;

use combo_core::{
    ComboOption, ComboboxCallbacks, ComboboxEngine, OptionValue, Placeholder, SelectedValue,
    SelectionState,
};

use crate::error::{Result, ShellError};
use crate::event::{EventResponse, UiEvent};
use crate::view::{ComboboxSize, ComboboxView};
use crate::visibility::{DropdownVisibility, VisibilityMachine};

/// Receives the field's new text verbatim
pub type SearchCallback = Box<dyn FnMut(&str) + Send>;

/// Combobox component
pub struct Combobox {
    engine: ComboboxEngine,
    input_value: String,
    size: ComboboxSize,
    label: Option<String>,
    visibility: VisibilityMachine,
    /// Last row of the most recent render, observed for load-more
    terminal_row: Option<usize>,
    on_search: Option<SearchCallback>,
}

impl fmt::Debug for Combobox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("engine", &self.engine)
            .field("input_value", &self.input_value)
            .field("size", &self.size)
            .field("label", &self.label)
            .field("visibility", &self.visibility.state())
            .field("terminal_row", &self.terminal_row)
            .field("on_search", &self.on_search.is_some())
            .finish()
    }
}

impl Combobox {
    pub fn engine(&self) -> &ComboboxEngine {
        &self.engine
    }

    pub fn selection(&self) -> &SelectionState {
        self.engine.selection()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.engine.highlighted_index()
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn visibility(&self) -> DropdownVisibility {
        self.visibility.state()
    }

    pub fn size(&self) -> ComboboxSize {
        self.size
    }

    // =========================================================================
    // Caller updates
    // =========================================================================

    /// Supply the raw search text held by the caller
    pub fn set_input_value(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
        self.refresh_visibility();
    }

    /// Supply a new option snapshot
    ///
    /// The terminal row handle is dropped until the next render.
    pub fn set_options(&mut self, options: Vec<ComboOption>) {
        self.engine.set_options(options);
        self.terminal_row = None;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.engine.set_disabled(disabled);
    }

    /// Re-resolve the selection from an external value
    pub fn reinitialize(&mut self, selected: &SelectedValue) {
        self.engine.reinitialize(selected);
        self.refresh_visibility();
    }

    pub fn rearm_load_trigger(&mut self) {
        self.engine.rearm_load_trigger();
    }

    // =========================================================================
    // Rendering and events
    // =========================================================================

    /// Produce the render description and remember the terminal row
    pub fn render(&mut self) -> ComboboxView {
        let view = ComboboxView::build(
            &self.engine,
            &self.input_value,
            self.visibility.state(),
            self.size,
            self.label.as_deref(),
        );
        self.terminal_row = view.terminal_row();
        view
    }

    /// Forward an event, dropping it if it does not apply
    pub fn dispatch(&mut self, event: UiEvent) -> EventResponse {
        let row = event.row();
        match self.try_dispatch(event) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%err, ?row, "combobox event dropped");
                EventResponse::ignored()
            }
        }
    }

    /// Forward an event, reporting events that name rows or controls that
    /// are not rendered
    pub fn try_dispatch(&mut self, event: UiEvent) -> Result<EventResponse> {
        let response = match event {
            UiEvent::Input(text) => {
                if !self.engine.is_disabled() {
                    if let Some(ref mut callback) = self.on_search {
                        callback(&text);
                    }
                }
                EventResponse::ignored()
            }
            UiEvent::Key { event, source } => {
                if self.engine.handle_key(&event, source).is_handled() {
                    EventResponse::handled()
                } else {
                    EventResponse::ignored()
                }
            }
            UiEvent::RowHover(index) => {
                self.check_row(index)?;
                self.engine.hover(index);
                if self.terminal_row == Some(index) {
                    self.engine.hover_terminal();
                }
                EventResponse::ignored()
            }
            UiEvent::RowClick(index) => {
                let label = self.row_label(index)?;
                self.engine.select(label);
                EventResponse::ignored()
            }
            UiEvent::AddClick(index) => {
                let label = self.row_label(index)?;
                self.engine.select(label);
                EventResponse::stopped()
            }
            UiEvent::ClearClick => {
                if self.engine.selection().is_empty() || self.engine.is_disabled() {
                    return Err(ShellError::ClearUnavailable);
                }
                EventResponse {
                    prevent_default: false,
                    propagation: self.engine.clear(),
                }
            }
        };

        self.refresh_visibility();
        Ok(response)
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if !self.visibility.state().is_open() {
            return Err(ShellError::DropdownClosed);
        }
        let len = self.engine.option_count();
        if index >= len {
            return Err(ShellError::RowOutOfRange { index, len });
        }
        Ok(())
    }

    fn row_label(&self, index: usize) -> Result<String> {
        self.check_row(index)?;
        Ok(self.engine.filtered_options()[index].label.clone())
    }

    fn refresh_visibility(&mut self) {
        self.visibility
            .update(&self.input_value, self.engine.selection());
    }
}

/// Builder for creating Combobox components with fluent API
pub struct ComboboxBuilder {
    options: Vec<ComboOption>,
    selected: SelectedValue,
    placeholder: Placeholder,
    input_value: String,
    disabled: bool,
    size: ComboboxSize,
    label: Option<String>,
    callbacks: ComboboxCallbacks,
    on_search: Option<SearchCallback>,
}

impl Default for ComboboxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComboboxBuilder {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            selected: SelectedValue::Uncontrolled,
            placeholder: Placeholder::default(),
            input_value: String::new(),
            disabled: false,
            size: ComboboxSize::default(),
            label: None,
            callbacks: ComboboxCallbacks::new(),
            on_search: None,
        }
    }

    /// Add an option with value and label
    pub fn option(mut self, value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        self.options.push(ComboOption::new(value, label));
        self
    }

    /// Add multiple options
    pub fn options(mut self, options: impl IntoIterator<Item = ComboOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Control the initial selection by value
    pub fn selected_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.selected = SelectedValue::Value(value.into());
        self
    }

    /// Set the external selection control directly
    pub fn selected(mut self, selected: SelectedValue) -> Self {
        self.selected = selected;
        self
    }

    /// Set the placeholder (text, or a rich sentinel element)
    pub fn placeholder(mut self, placeholder: impl Into<Placeholder>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial raw search text
    pub fn input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = value.into();
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the combobox size
    pub fn size(mut self, size: ComboboxSize) -> Self {
        self.size = size;
        self
    }

    /// Add a label above the combobox
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the selection callback
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<&str>) + Send + 'static,
    {
        self.callbacks = std::mem::take(&mut self.callbacks).on_select(callback);
        self
    }

    /// Set the callback run after a clear so the caller can reset its search
    pub fn on_clear_search<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.callbacks = std::mem::take(&mut self.callbacks).on_clear_search(callback);
        self
    }

    /// Set the pagination callback
    pub fn on_load_more<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.callbacks = std::mem::take(&mut self.callbacks).on_load_more(callback);
        self
    }

    /// Set the callback receiving field text changes
    pub fn on_search<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_search = Some(Box::new(callback));
        self
    }

    /// Check the option list for empty labels and repeated values
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<&OptionValue> = Vec::with_capacity(self.options.len());
        for (index, opt) in self.options.iter().enumerate() {
            if opt.label.is_empty() {
                return Err(ShellError::EmptyLabel(index));
            }
            if let Some(ref value) = opt.value {
                if seen.contains(&value) {
                    return Err(ShellError::DuplicateValue(value.to_string()));
                }
                seen.push(value);
            }
        }
        Ok(())
    }

    /// Validate, then build
    pub fn try_build(self) -> Result<Combobox> {
        self.validate()?;
        Ok(self.build())
    }

    /// Build the component
    pub fn build(self) -> Combobox {
        let mut engine =
            ComboboxEngine::new(self.options, &self.selected, self.placeholder, self.callbacks);
        engine.set_disabled(self.disabled);

        let visibility = VisibilityMachine::new(&self.input_value, engine.selection());

        Combobox {
            engine,
            input_value: self.input_value,
            size: self.size,
            label: self.label,
            visibility,
            terminal_row: None,
            on_search: self.on_search,
        }
    }
}

/// Create a combobox builder
pub fn combobox() -> ComboboxBuilder {
    ComboboxBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use combo_core::{EventSource, Key, KeyboardEvent, PlaceholderElement, Propagation};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn users() -> Vec<ComboOption> {
        ["mina", "rina", "tina", "nimra", "nusrat"]
            .iter()
            .enumerate()
            .map(|(i, label)| ComboOption::new(i as i64 + 1, *label))
            .collect()
    }

    fn key(key: Key, source: EventSource) -> UiEvent {
        UiEvent::key(KeyboardEvent::pressed(key), source)
    }

    #[test]
    fn test_builder_defaults() {
        let widget = combobox().build();
        assert!(widget.selection().is_empty());
        assert_eq!(widget.visibility(), DropdownVisibility::Closed);
        assert_eq!(widget.size(), ComboboxSize::Medium);
        assert_eq!(widget.engine().placeholder().input_text(), "Select an option");
    }

    #[test]
    fn test_builder_selected_value() {
        let widget = combobox().options(users()).selected_value(2).build();
        assert_eq!(widget.selection().label(), Some("rina"));

        let widget = combobox().options(users()).selected_value(99).build();
        assert!(widget.selection().is_empty());
    }

    #[test]
    fn test_validate_duplicates() {
        let err = combobox()
            .option(1, "mina")
            .option(1, "rina")
            .try_build()
            .unwrap_err();
        assert_eq!(err, ShellError::DuplicateValue("1".to_string()));

        let err = combobox().option(1, "").try_build().unwrap_err();
        assert_eq!(err, ShellError::EmptyLabel(0));

        // Null values may repeat
        assert!(combobox()
            .options(vec![ComboOption::unvalued("a"), ComboOption::unvalued("b")])
            .try_build()
            .is_ok());

        // 2 and 2.0 name the same option
        let err = combobox()
            .option(2, "rina")
            .option(2.0, "rina again")
            .try_build()
            .unwrap_err();
        assert_eq!(err, ShellError::DuplicateValue("2".to_string()));
    }

    #[test]
    fn test_input_forwarded_verbatim() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = seen.clone();
        let mut widget = combobox()
            .options(users())
            .on_search(move |text| seen_cb.lock().unwrap().push(text.to_string()))
            .build();

        widget.dispatch(UiEvent::Input(" Mi ".to_string()));
        assert_eq!(*seen.lock().unwrap(), vec![" Mi ".to_string()]);
        // The shell does not keep the text itself
        assert_eq!(widget.input_value(), "");
    }

    #[test]
    fn test_visibility_follows_input_and_selection() {
        let mut widget = combobox().options(users()).build();
        assert!(!widget.visibility().is_open());

        widget.set_input_value("na");
        assert!(widget.visibility().is_open());

        widget.render();
        widget.dispatch(UiEvent::RowClick(0));
        assert_eq!(widget.selection().label(), Some("mina"));
        assert!(!widget.visibility().is_open());

        let response = widget.dispatch(UiEvent::ClearClick);
        assert_eq!(response.propagation, Propagation::Stop);
        assert!(widget.visibility().is_open());

        widget.set_input_value("");
        assert!(!widget.visibility().is_open());
    }

    #[test]
    fn test_keys_from_field_do_not_navigate() {
        let mut widget = combobox().options(users()).input_value("a").build();

        let response = widget.dispatch(key(Key::Down, EventSource::Field));
        assert!(!response.prevent_default);
        assert_eq!(widget.highlighted_index(), None);

        let response = widget.dispatch(key(Key::Down, EventSource::List));
        assert!(response.prevent_default);
        assert_eq!(widget.highlighted_index(), Some(0));
    }

    #[test]
    fn test_hover_terminal_row_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let loads_cb = loads.clone();
        let mut widget = combobox()
            .options(users())
            .input_value("a")
            .on_load_more(move || {
                loads_cb.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        widget.render();
        widget.dispatch(UiEvent::RowHover(4));
        widget.dispatch(UiEvent::RowHover(4));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(widget.highlighted_index(), Some(4));

        // Non-terminal rows never load
        widget.dispatch(UiEvent::RowHover(2));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_add_click_stops_propagation() {
        let selected = Arc::new(Mutex::new(Vec::new()));
        let selected_cb = selected.clone();
        let mut widget = combobox()
            .options(users())
            .input_value("t")
            .on_select(move |label| {
                selected_cb
                    .lock()
                    .unwrap()
                    .push(label.map(str::to_string))
            })
            .build();

        let response = widget.dispatch(UiEvent::AddClick(2));
        assert_eq!(response.propagation, Propagation::Stop);
        assert_eq!(widget.selection().label(), Some("tina"));
        assert_eq!(*selected.lock().unwrap(), vec![Some("tina".to_string())]);
    }

    #[test]
    fn test_row_events_checked() {
        let mut widget = combobox().options(users()).build();

        // Dropdown is closed without search text
        assert_eq!(
            widget.try_dispatch(UiEvent::RowClick(0)),
            Err(ShellError::DropdownClosed)
        );

        widget.set_input_value("a");
        assert_eq!(
            widget.try_dispatch(UiEvent::RowHover(9)),
            Err(ShellError::RowOutOfRange { index: 9, len: 5 })
        );
        assert_eq!(
            widget.try_dispatch(UiEvent::ClearClick),
            Err(ShellError::ClearUnavailable)
        );

        // The lenient entry point drops them
        assert_eq!(widget.dispatch(UiEvent::RowHover(9)), EventResponse::ignored());
        assert_eq!(widget.highlighted_index(), None);
    }

    #[test]
    fn test_disabled_widget_is_inert() {
        let searches = Arc::new(AtomicUsize::new(0));
        let searches_cb = searches.clone();
        let mut widget = combobox()
            .options(users())
            .selected_value(1)
            .input_value("a")
            .disabled(true)
            .on_search(move |_| {
                searches_cb.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        widget.dispatch(key(Key::Down, EventSource::List));
        widget.dispatch(UiEvent::ClearClick);
        widget.dispatch(UiEvent::Input("b".to_string()));

        assert_eq!(widget.highlighted_index(), None);
        assert_eq!(widget.selection().label(), Some("mina"));
        assert_eq!(searches.load(Ordering::SeqCst), 0);

        let view = widget.render();
        assert!(!view.show_clear);
    }

    #[test]
    fn test_rich_placeholder_sentinel() {
        let mut widget = combobox()
            .options(users())
            .placeholder(PlaceholderElement::new("Pick a user").icon("user"))
            .input_value("mi")
            .build();

        assert!(!widget.visibility().is_open());
        let view = widget.render();
        assert!(view.field.is_sentinel);
        assert_eq!(view.field.value, "Pick a user");
        assert_eq!(view.field.placeholder, "Search...");
        assert!(view.show_clear);

        widget.dispatch(UiEvent::ClearClick);
        assert!(widget.selection().is_empty());
        assert!(widget.visibility().is_open());
    }

    #[test]
    fn test_set_options_drops_terminal_handle() {
        let loads = Arc::new(AtomicUsize::new(0));
        let loads_cb = loads.clone();
        let mut widget = combobox()
            .options(users())
            .input_value("a")
            .on_load_more(move || {
                loads_cb.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        widget.render();
        let mut more = users();
        more.push(ComboOption::new(6, "zara"));
        widget.set_options(more);

        // Row 4 is no longer terminal; only row 5 is
        widget.dispatch(UiEvent::RowHover(4));
        assert_eq!(loads.load(Ordering::SeqCst), 0);

        widget.render();
        widget.dispatch(UiEvent::RowHover(5));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }
}
