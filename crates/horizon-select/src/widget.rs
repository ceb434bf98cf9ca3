//! The selection widget.
//!
//! [`Select`] composes the popup state machine, the input dispatcher and the
//! selection controller into one controlled component. The host owns the
//! selected value: the widget only proposes new values through
//! [`Select::selection_changed`] and renders whatever the host last handed
//! it with [`Select::set_value`].
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use horizon_select::events::{Key, SelectEvent};
//! use horizon_select::{Select, SelectOption};
//!
//! let mut select = Select::single().with_options(vec![
//!     SelectOption::new("First", 1),
//!     SelectOption::new("Second", 2),
//! ]);
//!
//! let proposed = Arc::new(Mutex::new(None));
//! let sink = proposed.clone();
//! select.selection_changed.connect(move |value| {
//!     *sink.lock().unwrap() = Some(value.clone());
//! });
//!
//! select.event(&SelectEvent::BodyClick);
//! select.event(&SelectEvent::from(Key::ArrowDown));
//! select.event(&SelectEvent::from(Key::Enter));
//!
//! let value = proposed.lock().unwrap().take().unwrap();
//! assert_eq!(value.labels(), vec!["Second"]);
//! // Not adopted until the host says so.
//! assert!(select.value().is_empty());
//! select.set_value(value).unwrap();
//! assert_eq!(select.value().labels(), vec!["Second"]);
//! ```
//!
//! # Signals
//!
//! - `selection_changed(SelectedValue)`: a gesture committed a new value.
//! - `popup_visibility_changed(bool)`: the option list opened or closed.
//! - `highlight_changed(usize)`: the keyboard highlight moved.

use horizon_select_core::{Signal, select_debug, select_warn};

use crate::dispatcher::{self, Dispatch};
use crate::error::{Result, SelectError};
use crate::events::SelectEvent;
use crate::option::SelectOption;
use crate::popup::{PopupState, PopupTransition};
use crate::selection::{self, SelectedValue, SelectionMode};
use crate::view::SelectView;

/// Placeholder shown when nothing is selected and none was configured.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// A dropdown for choosing one or many options.
///
/// The mode is fixed at construction. Options and value are host data and
/// can be replaced at any time; the open/highlight state is private to the
/// instance.
pub struct Select {
    mode: SelectionMode,
    options: Vec<SelectOption>,
    value: SelectedValue,
    placeholder: String,
    popup: PopupState,

    /// Signal emitted when a gesture proposes a new selection.
    pub selection_changed: Signal<SelectedValue>,

    /// Signal emitted when the option list opens (`true`) or closes (`false`).
    pub popup_visibility_changed: Signal<bool>,

    /// Signal emitted when the highlighted index changes.
    pub highlight_changed: Signal<usize>,
}

impl Select {
    /// Create an empty widget in `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            options: Vec::new(),
            value: SelectedValue::empty_for(mode),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            popup: PopupState::new(),
            selection_changed: Signal::new(),
            popup_visibility_changed: Signal::new(),
            highlight_changed: Signal::new(),
        }
    }

    /// Create an empty single-selection widget.
    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    /// Create an empty multiple-selection widget.
    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    /// Set the options using builder pattern.
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the initial value using builder pattern.
    ///
    /// Fails when the value's shape does not match the mode.
    pub fn with_value(mut self, value: SelectedValue) -> Result<Self> {
        self.value = self.checked(value)?;
        Ok(self)
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The options currently offered.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The value last handed over by the host.
    pub fn value(&self) -> &SelectedValue {
        &self.value
    }

    /// Text shown when nothing is selected.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the option list is visible.
    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// The highlighted option index, or `None` when there are no options.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.popup.highlighted_for(self.options.len())
    }

    /// Whether the option at `index` is part of the current value.
    pub fn is_option_selected(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_some_and(|option| selection::is_option_selected(&self.value, option))
    }

    // =========================================================================
    // Host updates
    // =========================================================================

    /// Replace the options.
    ///
    /// The highlight is re-clamped so it stays inside the new list. The value
    /// is left alone, even if it references options no longer offered.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        let transition = self.popup.clamp(self.options.len());
        select_debug!(
            len = self.options.len(),
            highlighted = self.popup.highlighted(),
            "options replaced"
        );
        self.notify(transition);
    }

    /// Adopt a value from the host.
    ///
    /// Multiple-mode values are normalized to drop duplicate keys. Does not
    /// emit [`selection_changed`](Self::selection_changed).
    pub fn set_value(&mut self, value: SelectedValue) -> Result<()> {
        self.value = self.checked(value)?;
        select_debug!(selected = self.value.len(), "value adopted");
        Ok(())
    }

    /// Replace the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    fn checked(&self, value: SelectedValue) -> Result<SelectedValue> {
        if value.mode() != self.mode {
            select_warn!(
                expected = ?self.mode,
                found = ?value.mode(),
                "rejected value of the wrong shape"
            );
            return Err(SelectError::mode_mismatch(self.mode, value.mode()));
        }
        Ok(match value {
            SelectedValue::Multiple(values) => SelectedValue::multiple(values),
            single => single,
        })
    }

    // =========================================================================
    // Popup control
    // =========================================================================

    /// Open the option list.
    pub fn show_popup(&mut self) {
        let transition = self.popup.open();
        self.notify(transition);
    }

    /// Close the option list.
    pub fn hide_popup(&mut self) {
        let transition = self.popup.close();
        self.notify(transition);
    }

    /// Toggle the option list.
    pub fn toggle_popup(&mut self) {
        let transition = self.popup.toggle();
        self.notify(transition);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle an input event. Returns `true` when the widget consumed it.
    pub fn event(&mut self, event: &SelectEvent) -> bool {
        self.handle_event(event).handled
    }

    /// Handle an input event and report everything it caused.
    ///
    /// A proposed value is emitted on `selection_changed` before any
    /// visibility change, so hosts see the choice before the list closes.
    pub fn handle_event(&mut self, event: &SelectEvent) -> Dispatch {
        let result = dispatcher::dispatch(&mut self.popup, &self.options, &self.value, event);
        if let Some(value) = &result.change {
            self.selection_changed.emit(value.clone());
        }
        self.notify(result.transition);
        result
    }

    fn notify(&self, transition: PopupTransition) {
        if !transition.is_change() {
            return;
        }
        if transition.highlight_moved {
            self.highlight_changed.emit(self.popup.highlighted());
        }
        if transition.opened {
            self.popup_visibility_changed.emit(true);
        }
        if transition.closed {
            self.popup_visibility_changed.emit(false);
        }
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Snapshot of everything a presentation layer needs to render.
    pub fn view(&self) -> SelectView {
        SelectView::of(self)
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::single()
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("mode", &self.mode)
            .field("options", &self.options.len())
            .field("value", &self.value)
            .field("popup", &self.popup)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Select: Send, Sync);
