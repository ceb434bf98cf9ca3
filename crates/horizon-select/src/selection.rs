//! Selection controller.
//!
//! Pure decision logic for what the next selection should be. Nothing in
//! this module holds state: every function takes the current value by
//! reference and returns a fresh [`SelectedValue`] for the host to adopt.
//!
//! # Single vs. Multiple
//!
//! | current            | chosen `a`         | result                      |
//! |--------------------|--------------------|-----------------------------|
//! | `Single(a)`        | `a`                | `Single(a)` (no toggle-off) |
//! | `Single(_)`        | `a`                | `Single(a)`                 |
//! | `Multiple([.., a, ..])` | `a`           | `a` removed, order kept     |
//! | `Multiple(xs)`     | `a` not in `xs`    | `xs` with `a` appended      |
//!
//! # Example
//!
//! ```
//! use horizon_select::{OptionKey, SelectOption, SelectedValue, selection};
//!
//! let first = SelectOption::new("First", 1);
//! let second = SelectOption::new("Second", 2);
//!
//! let value = SelectedValue::multiple([first.clone()]);
//! let value = selection::select_option(&value, &second);
//! assert_eq!(value.keys(), vec![OptionKey::Int(1), OptionKey::Int(2)]);
//!
//! let value = selection::select_option(&value, &first);
//! assert_eq!(value.keys(), vec![OptionKey::Int(2)]);
//! ```

use horizon_select_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::option::{OptionKey, SelectOption};

/// Whether the widget allows one or many simultaneous selections.
///
/// Fixed for the lifetime of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// At most one option is selected.
    #[default]
    Single,
    /// Any number of options are selected, in selection order.
    Multiple,
}

impl SelectionMode {
    /// Mode from the `multiple` flag hosts pass at construction.
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple { Self::Multiple } else { Self::Single }
    }

    /// Whether this is [`SelectionMode::Multiple`].
    pub fn is_multiple(self) -> bool {
        self == Self::Multiple
    }
}

/// The host-owned selection, shaped by mode.
///
/// In `Multiple` mode the vector is an ordered set: insertion order is
/// selection order and no two entries share a key. Use
/// [`SelectedValue::multiple`] to build one from arbitrary input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedValue {
    /// Optional single selection.
    Single(Option<SelectOption>),
    /// Ordered, duplicate-free selection.
    Multiple(Vec<SelectOption>),
}

impl Default for SelectedValue {
    fn default() -> Self {
        Self::none()
    }
}

impl SelectedValue {
    /// Nothing selected, single mode.
    pub fn none() -> Self {
        Self::Single(None)
    }

    /// A single selected option.
    pub fn single(option: SelectOption) -> Self {
        Self::Single(Some(option))
    }

    /// A multiple selection built from `options`.
    ///
    /// Later duplicates (by key) are dropped; the first occurrence keeps its
    /// position.
    pub fn multiple(options: impl IntoIterator<Item = SelectOption>) -> Self {
        let mut values: Vec<SelectOption> = Vec::new();
        for option in options {
            if !values.contains(&option) {
                values.push(option);
            }
        }
        Self::Multiple(values)
    }

    /// The empty value for `mode`.
    pub fn empty_for(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
        }
    }

    /// The mode this value's shape belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Whether an option with `key` is selected.
    pub fn contains(&self, key: &OptionKey) -> bool {
        match self {
            Self::Single(current) => current.as_ref().is_some_and(|o| o.has_key(key)),
            Self::Multiple(values) => values.iter().any(|o| o.has_key(key)),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of selected options.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(current) => usize::from(current.is_some()),
            Self::Multiple(values) => values.len(),
        }
    }

    /// Keys of the selected options, in selection order.
    pub fn keys(&self) -> Vec<OptionKey> {
        self.iter().map(|o| o.value.clone()).collect()
    }

    /// Labels of the selected options, in selection order.
    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(SelectOption::label).collect()
    }

    /// Iterate the selected options in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        let slice: &[SelectOption] = match self {
            Self::Single(current) => current.as_slice(),
            Self::Multiple(values) => values,
        };
        slice.iter()
    }

    /// The single selection, if this is a single-mode value.
    pub fn as_single(&self) -> Option<&SelectOption> {
        match self {
            Self::Single(current) => current.as_ref(),
            Self::Multiple(_) => None,
        }
    }

    /// The selection list, if this is a multiple-mode value.
    pub fn as_multiple(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(values) => Some(values),
        }
    }
}

impl From<Option<SelectOption>> for SelectedValue {
    fn from(value: Option<SelectOption>) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<SelectOption>> for SelectedValue {
    fn from(values: Vec<SelectOption>) -> Self {
        Self::multiple(values)
    }
}

/// Compute the selection that results from the user choosing `option`.
///
/// - `Single`: choosing the current option returns it unchanged (not a
///   toggle-off); anything else replaces it.
/// - `Multiple`: a present option is removed, an absent one is appended.
pub fn select_option(current: &SelectedValue, option: &SelectOption) -> SelectedValue {
    let next = match current {
        SelectedValue::Single(Some(selected)) if selected == option => current.clone(),
        SelectedValue::Single(_) => SelectedValue::Single(Some(option.clone())),
        SelectedValue::Multiple(values) => {
            if values.contains(option) {
                SelectedValue::Multiple(values.iter().filter(|o| *o != option).cloned().collect())
            } else {
                let mut next = Vec::with_capacity(values.len() + 1);
                next.extend(values.iter().cloned());
                next.push(option.clone());
                SelectedValue::Multiple(next)
            }
        }
    };

    tracing::trace!(
        target: targets::SELECTION,
        key = %option.value,
        before = current.len(),
        after = next.len(),
        "select option"
    );
    next
}

/// The "nothing selected" value for `mode`.
pub fn clear(mode: SelectionMode) -> SelectedValue {
    tracing::trace!(target: targets::SELECTION, ?mode, "clear selection");
    SelectedValue::empty_for(mode)
}

/// Whether `option` is part of `current` (by key).
pub fn is_option_selected(current: &SelectedValue, option: &SelectOption) -> bool {
    current.contains(&option.value)
}
