//! Demo caller
//!
//! Owns everything the widget leaves to its caller: the search text, the
//! filtering of the option set, and a pager that grows by one page every
//! time the widget asks for more.

use std::sync::{Arc, Mutex, MutexGuard};

use combo_core::{ComboOption, KeyboardEvent};
use combo_shell::{Combobox, ComboboxView, ShellError, UiEvent};
use serde::Serialize;

use crate::config::DemoConfig;
use crate::script::Command;

/// State mutated from inside the widget's callbacks
#[derive(Debug, Default)]
struct DemoState {
    query: String,
    pages: usize,
    selected: Option<String>,
    load_requests: usize,
}

/// Result of applying one scripted command
#[derive(Debug, Serialize)]
pub struct Step {
    pub command: String,
    /// Why the widget dropped the event, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped: Option<String>,
    pub view: ComboboxView,
}

/// A widget wired to an in-memory data source
pub struct DemoSession {
    widget: Combobox,
    state: Arc<Mutex<DemoState>>,
    all_options: Vec<ComboOption>,
    page_size: usize,
    last_query: String,
}

fn lock(state: &Mutex<DemoState>) -> MutexGuard<'_, DemoState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn matching<'a>(
    options: &'a [ComboOption],
    query: &'a str,
) -> impl Iterator<Item = &'a ComboOption> {
    options.iter().filter(move |opt| opt.matches(query))
}

impl DemoSession {
    /// Build the widget from config
    ///
    /// The initial selection resolves against the whole option set; the
    /// widget then receives the first page.
    pub fn new(config: &DemoConfig) -> Result<Self, ShellError> {
        let state = Arc::new(Mutex::new(DemoState {
            pages: 1,
            ..DemoState::default()
        }));
        let all_options = config.data.options.clone();
        let page_size = config.data.page_size.max(1);

        let mut builder = combo_shell::combobox()
            .options(all_options.clone())
            .selected(config.widget.selected())
            .placeholder(config.widget.placeholder())
            .disabled(config.widget.disabled)
            .size(config.widget.size);
        if let Some(ref label) = config.widget.label {
            builder = builder.label(label.clone());
        }

        let search_state = Arc::clone(&state);
        let clear_state = Arc::clone(&state);
        let select_state = Arc::clone(&state);
        let load_state = Arc::clone(&state);
        let load_options = all_options.clone();

        let widget = builder
            .on_search(move |text| {
                let mut state = lock(&search_state);
                if state.query != text {
                    state.query = text.to_string();
                    state.pages = 1;
                }
            })
            .on_clear_search(move || {
                let mut state = lock(&clear_state);
                state.query.clear();
                state.pages = 1;
            })
            .on_select(move |label| {
                lock(&select_state).selected = label.map(str::to_string);
            })
            .on_load_more(move || {
                let mut state = lock(&load_state);
                state.load_requests += 1;
                let total = matching(&load_options, &state.query).count();
                if state.pages * page_size < total {
                    state.pages += 1;
                    tracing::debug!(pages = state.pages, total, "next page revealed");
                } else {
                    tracing::debug!(total, "no more results");
                }
            })
            .try_build()?;

        let mut session = Self {
            widget,
            state,
            all_options,
            page_size,
            last_query: String::new(),
        };
        session.sync();
        session.widget.render();
        Ok(session)
    }

    pub fn widget(&self) -> &Combobox {
        &self.widget
    }

    /// Current search text
    pub fn query(&self) -> String {
        lock(&self.state).query.clone()
    }

    /// Pages revealed for the current query
    pub fn pages(&self) -> usize {
        lock(&self.state).pages
    }

    /// Last value reported through the selection callback
    pub fn selected(&self) -> Option<String> {
        lock(&self.state).selected.clone()
    }

    /// Number of load-more callbacks received
    pub fn load_requests(&self) -> usize {
        lock(&self.state).load_requests
    }

    /// Render the widget as it currently stands
    pub fn view(&mut self) -> ComboboxView {
        self.widget.render()
    }

    /// Turn a command into a widget event, dispatch it and re-supply data
    pub fn apply(&mut self, command: &Command) -> Step {
        let event = self.event_for(command);
        tracing::debug!(%command, ?event, "applying command");

        let dropped = match self.widget.try_dispatch(event) {
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(%err, %command, "event dropped");
                Some(err.to_string())
            }
        };

        self.sync();
        Step {
            command: command.to_string(),
            dropped,
            view: self.widget.render(),
        }
    }

    fn event_for(&self, command: &Command) -> UiEvent {
        match command {
            Command::Type(text) => {
                let mut next = self.widget.input_value().to_string();
                next.push_str(text);
                UiEvent::Input(next)
            }
            Command::Backspace => {
                let mut next = self.widget.input_value().to_string();
                next.pop();
                UiEvent::Input(next)
            }
            Command::Key { key, source } => {
                UiEvent::key(KeyboardEvent::pressed(key.clone()), *source)
            }
            Command::Hover(index) => UiEvent::RowHover(*index),
            Command::Click(index) => UiEvent::RowClick(*index),
            Command::Add(index) => UiEvent::AddClick(*index),
            Command::Clear => UiEvent::ClearClick,
        }
    }

    /// Push the caller's query and current page into the widget
    ///
    /// Supplying a page can itself trigger a load-more (the highlight may
    /// land on the new terminal row), so the page is re-supplied until the
    /// pager stops growing.
    fn sync(&mut self) {
        let query = self.query();
        if query != self.last_query {
            tracing::debug!(from = %self.last_query, to = %query, "query changed");
            self.widget.rearm_load_trigger();
            self.last_query = query.clone();
        }
        self.widget.set_input_value(query.clone());

        let mut pages = self.pages();
        loop {
            let page: Vec<ComboOption> = matching(&self.all_options, &query)
                .take(pages * self.page_size)
                .cloned()
                .collect();
            self.widget.set_options(page);

            let now = self.pages();
            if now == pages {
                break;
            }
            pages = now;
        }
    }
}
