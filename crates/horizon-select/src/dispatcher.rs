//! Input dispatching for the selection widget.
//!
//! [`dispatch`] turns one [`SelectEvent`] into open/highlight transitions and,
//! where the gesture commits a choice, a proposed new [`SelectedValue`]. It
//! never touches the host's value: the proposal is returned in
//! [`Dispatch::change`] and the caller forwards it to the host.
//!
//! # Gesture Table
//!
//! | Gesture                    | Popup effect                         | Selection effect                 |
//! |----------------------------|--------------------------------------|----------------------------------|
//! | `BodyClick`                | toggle                               | -                                |
//! | `OptionClick(i)`           | close                                | `select_option(options[i])`      |
//! | `OptionHover(i)`           | highlight `i` (open only)            | -                                |
//! | `ClearClick`               | -                                    | `clear(mode)`                    |
//! | `RemoveClick(key)`         | -                                    | deselect `key` (multiple only)   |
//! | `FocusOut`                 | close                                | -                                |
//! | Enter / Space (closed)     | open                                 | -                                |
//! | Enter / Space (open)       | close                                | commit highlighted option        |
//! | ArrowUp / ArrowDown        | open if closed, else step            | -                                |
//! | Escape                     | close                                | -                                |
//!
//! Key presses aimed at a nested element ([`EventTarget::Descendant`]) and
//! unrecognized keys are not handled.

use horizon_select_core::logging::targets;

use crate::events::{EventTarget, Key, KeyPressEvent, SelectEvent};
use crate::option::SelectOption;
use crate::popup::{NavDirection, PopupState, PopupTransition};
use crate::selection::{self, SelectedValue, SelectionMode};

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Whether the widget consumed the event.
    pub handled: bool,
    /// What happened to the open/highlight state.
    pub transition: PopupTransition,
    /// The selection the host should adopt, if the event committed one.
    pub change: Option<SelectedValue>,
}

impl Dispatch {
    /// The event was not for this widget, or had nothing to act on.
    pub fn ignored() -> Self {
        Self::default()
    }

    fn handled(transition: PopupTransition) -> Self {
        Self {
            handled: true,
            transition,
            change: None,
        }
    }

    fn with_change(mut self, change: Option<SelectedValue>) -> Self {
        self.change = change;
        self
    }
}

/// Dispatch `event` against one widget instance.
///
/// `value` is the host's current selection; its variant decides the mode.
/// `state` is mutated only through its named transitions.
#[tracing::instrument(
    level = "trace",
    target = "horizon_select::dispatch",
    skip_all,
    fields(event = %event, pointer = event.is_pointer(), open = state.is_open())
)]
pub fn dispatch(
    state: &mut PopupState,
    options: &[SelectOption],
    value: &SelectedValue,
    event: &SelectEvent,
) -> Dispatch {
    let result = match event {
        SelectEvent::BodyClick => Dispatch::handled(state.toggle()),
        SelectEvent::OptionClick(index) => match options.get(*index) {
            Some(option) => {
                let change = commit(value, option);
                Dispatch::handled(state.close()).with_change(change)
            }
            None => {
                tracing::debug!(
                    target: targets::DISPATCH,
                    index,
                    len = options.len(),
                    "click on out-of-range option ignored"
                );
                Dispatch::ignored()
            }
        },
        SelectEvent::OptionHover(index) => {
            if state.is_open() && *index < options.len() {
                Dispatch::handled(state.hover(*index, options.len()))
            } else {
                Dispatch::ignored()
            }
        }
        SelectEvent::ClearClick => {
            Dispatch::handled(PopupTransition::NONE).with_change(Some(selection::clear(value.mode())))
        }
        SelectEvent::RemoveClick(key) => {
            let selected = match value.mode() {
                SelectionMode::Multiple => value.iter().find(|o| o.has_key(key)),
                SelectionMode::Single => None,
            };
            match selected {
                Some(option) => {
                    let change = commit(value, option);
                    Dispatch::handled(PopupTransition::NONE).with_change(change)
                }
                None => {
                    tracing::debug!(
                        target: targets::DISPATCH,
                        %key,
                        mode = ?value.mode(),
                        "remove of unselected key ignored"
                    );
                    Dispatch::ignored()
                }
            }
        }
        SelectEvent::FocusIn(_) => Dispatch::ignored(),
        SelectEvent::FocusOut(_) => Dispatch::handled(state.close()),
        SelectEvent::KeyPress(key_event) => dispatch_key(state, options, value, key_event),
    };

    if result.handled {
        tracing::debug!(
            target: targets::DISPATCH,
            event = %event,
            opened = result.transition.opened,
            closed = result.transition.closed,
            highlighted = state.highlighted(),
            changed = result.change.is_some(),
            "event handled"
        );
    }
    result
}

fn dispatch_key(
    state: &mut PopupState,
    options: &[SelectOption],
    value: &SelectedValue,
    event: &KeyPressEvent,
) -> Dispatch {
    if event.target != EventTarget::Widget {
        tracing::trace!(target: targets::DISPATCH, key = ?event.key, "key aimed at nested element ignored");
        return Dispatch::ignored();
    }

    if event.key.is_activation() {
        if !state.is_open() {
            return Dispatch::handled(state.open());
        }
        let change = state
            .highlighted_for(options.len())
            .and_then(|index| commit(value, &options[index]));
        return Dispatch::handled(state.close()).with_change(change);
    }

    match event.key {
        Key::ArrowUp | Key::ArrowDown => {
            if !state.is_open() {
                // Opening consumes the press; the highlight stays at 0.
                return Dispatch::handled(state.open());
            }
            let direction = if event.key == Key::ArrowUp {
                NavDirection::Up
            } else {
                NavDirection::Down
            };
            Dispatch::handled(state.step(direction, options.len()))
        }
        Key::Escape => {
            if state.is_open() {
                Dispatch::handled(state.close())
            } else {
                Dispatch::ignored()
            }
        }
        Key::Enter | Key::NumpadEnter | Key::Space | Key::Other(_) => Dispatch::ignored(),
    }
}

/// Ask the selection controller for the next value.
///
/// Returns `None` when the choice leaves the value as it is (re-selecting
/// the current single option), so the host is not notified of a no-op.
fn commit(value: &SelectedValue, option: &SelectOption) -> Option<SelectedValue> {
    let next = selection::select_option(value, option);
    if next == *value {
        tracing::trace!(target: targets::DISPATCH, key = %option.value, "re-selection, no change");
        None
    } else {
        Some(next)
    }
}
