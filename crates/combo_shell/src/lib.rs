//! # Combo Shell
//!
//! The presentation side of the combobox: a fluent builder, a serializable
//! render description, and event forwarding into `combo_core`.
//!
//! - **Engine**: `combo_core` owns highlight, selection and load-more
//! - **View**: [`ComboboxView`] describes the field, clear control and rows
//! - **Component**: [`Combobox`] binds the two and tracks dropdown visibility
//!
//! ## Example
//!
//! ```ignore
//! use combo_shell::prelude::*;
//!
//! let mut widget = cn::combobox()
//!     .label("Name")
//!     .placeholder("Type to search name...")
//!     .options(page_of_users)
//!     .on_search(|text| search.set(text))
//!     .on_load_more(|| pager.next_page())
//!     .build();
//!
//! let view = widget.render();
//! print!("{}", view.render_text());
//! ```

pub mod combobox;
pub mod error;
pub mod event;
pub mod view;
pub mod visibility;

pub use combobox::{combobox, Combobox, ComboboxBuilder, SearchCallback};
pub use error::{Result, ShellError};
pub use event::{EventResponse, UiEvent};
pub use view::{ComboboxSize, ComboboxView, DropdownView, FieldView, RowView, NO_RESULTS};
pub use visibility::{DropdownVisibility, VisibilityMachine};

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::combobox::combobox;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::combobox::{Combobox, ComboboxBuilder};
    pub use crate::event::{EventResponse, UiEvent};
    pub use crate::view::{ComboboxSize, ComboboxView};
    pub use crate::visibility::DropdownVisibility;
    pub use combo_core::prelude::*;
}
