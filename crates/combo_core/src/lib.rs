//! Combo Core
//!
//! The interaction engine behind the combobox widget:
//!
//! - **Options**: caller-supplied entries identified by value
//! - **Selection**: an explicit tagged slot (empty, selected, placeholder sentinel)
//! - **Highlight**: keyboard/pointer focused row with circular navigation
//! - **Load-more**: one request per distinct terminal index, from hover or highlight
//!
//! Rendering lives in `combo_shell`; this crate has no notion of pixels.
//!
//! # Example
//!
//! ```rust
//! use combo_core::prelude::*;
//!
//! let mut engine = ComboboxEngine::new(
//!     vec![ComboOption::new(1, "mina"), ComboOption::new(2, "rina")],
//!     &SelectedValue::Uncontrolled,
//!     Placeholder::default(),
//!     ComboboxCallbacks::new(),
//! );
//!
//! engine.navigate(Direction::Previous, EventSource::List);
//! assert_eq!(engine.highlighted_index(), Some(1));
//!
//! engine.select("rina");
//! assert_eq!(engine.selection().label(), Some("rina"));
//! ```

pub mod engine;
pub mod input;
pub mod load_trigger;
pub mod navigation;
pub mod option;
pub mod selection;

pub use engine::{
    ClearSearchCallback, ComboboxCallbacks, ComboboxEngine, LoadMoreCallback, SelectCallback,
};
pub use input::{EventSource, Key, KeyOutcome, KeyState, KeyboardEvent, Propagation};
pub use load_trigger::LoadTrigger;
pub use navigation::Direction;
pub use option::{label_for_value, ComboOption, OptionValue};
pub use selection::{
    resolve_selection, Placeholder, PlaceholderElement, SelectedValue, SelectionState,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{ComboboxCallbacks, ComboboxEngine};
    pub use crate::input::{EventSource, Key, KeyOutcome, KeyState, KeyboardEvent, Propagation};
    pub use crate::navigation::Direction;
    pub use crate::option::{ComboOption, OptionValue};
    pub use crate::selection::{Placeholder, PlaceholderElement, SelectedValue, SelectionState};
}
