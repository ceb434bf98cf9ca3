//! Horizon Select - a single/multiple selection dropdown widget.
//!
//! The widget is rendering-agnostic. A host feeds it gestures that were
//! already resolved to a capture zone ([`events::SelectEvent`]), listens for
//! proposed values on [`Select::selection_changed`], and renders the
//! [`view::SelectView`] snapshot however it likes.
//!
//! # Example
//!
//! ```
//! use horizon_select::prelude::*;
//!
//! let mut select = Select::multiple().with_options(vec![
//!     SelectOption::new("First", 1),
//!     SelectOption::new("Second", 2),
//! ]);
//!
//! select.event(&SelectEvent::BodyClick);
//! let outcome = select.handle_event(&SelectEvent::OptionClick(1));
//! if let Some(value) = outcome.change {
//!     select.set_value(value).unwrap();
//! }
//!
//! assert!(!select.is_open());
//! assert_eq!(select.value().labels(), vec!["Second"]);
//! ```
//!
//! # Modules
//!
//! - [`selection`]: pure selection rules (single replace, multiple toggle)
//! - [`popup`]: open/highlight state machine
//! - [`dispatcher`]: gesture to transition/selection mapping
//! - [`widget`]: the [`Select`] component tying them together
//! - [`arena`]: many independent instances addressed by id
//! - [`view`]: render snapshot and the [`view::Presentation`] seam
//! - [`config`]: TOML/JSON widget descriptions

pub mod arena;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
#[cfg(feature = "winit")]
pub mod keyboard;
pub mod option;
pub mod popup;
pub mod prelude;
pub mod selection;
pub mod view;
pub mod widget;

pub use horizon_select_core::{ConnectionId, Signal};

pub use arena::{SelectArena, SelectId, SelectionChanged};
pub use config::SelectConfig;
pub use error::{Result, SelectError};
pub use option::{OptionKey, SelectOption};
pub use selection::{SelectedValue, SelectionMode};
pub use widget::Select;
