//! Input events understood by the selection widget.
//!
//! The presentation layer resolves which capture zone of the widget a pointer
//! gesture hit and reports it as one [`SelectEvent`] variant. Because the
//! zone is already part of the event, there is no bubbling: a click on an
//! option is an [`SelectEvent::OptionClick`] and nothing else, so it can
//! never also toggle the list the way a body click does.
//!
//! # Example
//!
//! ```
//! use horizon_select::events::{Key, KeyPressEvent, SelectEvent};
//!
//! let click = SelectEvent::BodyClick;
//! let enter = SelectEvent::KeyPress(KeyPressEvent::new(Key::Enter));
//! let hover = SelectEvent::OptionHover(2);
//! # let _ = (click, enter, hover);
//! ```

use std::fmt;

use crate::option::OptionKey;

/// Keyboard modifiers that may be held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Keys the widget distinguishes.
///
/// Names follow web `KeyboardEvent.code` values. Every other key arrives as
/// [`Key::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Main Enter/Return key.
    Enter,
    /// Keypad Enter; behaves like [`Key::Enter`].
    NumpadEnter,
    /// Space bar.
    Space,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Escape.
    Escape,
    /// Any other key, with an opaque platform code.
    Other(u16),
}

impl Key {
    /// Keys that open the list or commit the highlighted option.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::NumpadEnter | Key::Space)
    }

    /// Map a web `KeyboardEvent.code` string to a key.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Enter" => Key::Enter,
            "NumpadEnter" => Key::NumpadEnter,
            "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Escape" => Key::Escape,
            _ => Key::Other(0),
        }
    }
}

/// Which element a keyboard event was aimed at.
///
/// Key presses count only when the widget itself holds focus. Presses aimed
/// at a nested interactive element (the clear button, a badge) are left to
/// that element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventTarget {
    /// The widget's focusable container.
    #[default]
    Widget,
    /// A nested interactive element inside the widget.
    Descendant,
}

/// Key press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
    /// The element the event was aimed at.
    pub target: EventTarget,
}

impl KeyPressEvent {
    /// A press of `key` aimed at the widget, no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
            is_repeat: false,
            target: EventTarget::Widget,
        }
    }

    /// Set the modifiers using builder pattern.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the repeat flag using builder pattern.
    pub fn with_repeat(mut self, is_repeat: bool) -> Self {
        self.is_repeat = is_repeat;
        self
    }

    /// Set the target using builder pattern.
    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to a pointer click elsewhere.
    Mouse,
    /// Focus changed due to Tab / Shift+Tab.
    Tab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// A gesture delivered to the widget, already resolved to a capture zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// Click on the widget body, outside every nested control.
    BodyClick,
    /// Click on the rendered option at this index of the current options.
    OptionClick(usize),
    /// Pointer entered the rendered option at this index.
    OptionHover(usize),
    /// Click on the clear control.
    ClearClick,
    /// Click on the remove control of the badge for this key.
    RemoveClick(OptionKey),
    /// The widget gained focus.
    FocusIn(FocusReason),
    /// The widget lost focus.
    FocusOut(FocusReason),
    /// A key was pressed.
    KeyPress(KeyPressEvent),
}

impl SelectEvent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BodyClick => "body_click",
            Self::OptionClick(_) => "option_click",
            Self::OptionHover(_) => "option_hover",
            Self::ClearClick => "clear_click",
            Self::RemoveClick(_) => "remove_click",
            Self::FocusIn(_) => "focus_in",
            Self::FocusOut(_) => "focus_out",
            Self::KeyPress(_) => "key_press",
        }
    }

    /// Whether this is a pointer gesture.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::BodyClick
                | Self::OptionClick(_)
                | Self::OptionHover(_)
                | Self::ClearClick
                | Self::RemoveClick(_)
        )
    }
}

impl fmt::Display for SelectEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionClick(i) | Self::OptionHover(i) => write!(f, "{}({i})", self.name()),
            Self::RemoveClick(key) => write!(f, "{}({key})", self.name()),
            Self::KeyPress(e) => write!(f, "{}({:?})", self.name(), e.key),
            _ => f.write_str(self.name()),
        }
    }
}

impl From<KeyPressEvent> for SelectEvent {
    fn from(event: KeyPressEvent) -> Self {
        Self::KeyPress(event)
    }
}

impl From<Key> for SelectEvent {
    fn from(key: Key) -> Self {
        Self::KeyPress(KeyPressEvent::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("Enter"), Key::Enter);
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_code("KeyA"), Key::Other(0));
    }

    #[test]
    fn test_activation_keys() {
        assert!(Key::Enter.is_activation());
        assert!(Key::NumpadEnter.is_activation());
        assert!(Key::Space.is_activation());
        assert!(!Key::Escape.is_activation());
        assert!(!Key::ArrowUp.is_activation());
    }

    #[test]
    fn test_key_press_builder() {
        let event = KeyPressEvent::new(Key::Space)
            .with_modifiers(KeyboardModifiers {
                shift: true,
                ..KeyboardModifiers::NONE
            })
            .with_repeat(true)
            .with_target(EventTarget::Descendant);

        assert!(event.modifiers.any());
        assert!(event.is_repeat);
        assert_eq!(event.target, EventTarget::Descendant);
        assert!(!KeyboardModifiers::NONE.any());
    }

    #[test]
    fn test_display() {
        assert_eq!(SelectEvent::BodyClick.to_string(), "body_click");
        assert_eq!(SelectEvent::OptionClick(3).to_string(), "option_click(3)");
        assert_eq!(
            SelectEvent::RemoveClick(OptionKey::from(2)).to_string(),
            "remove_click(2)"
        );
        assert_eq!(SelectEvent::from(Key::Escape).to_string(), "key_press(Escape)");
    }

    #[test]
    fn test_is_pointer() {
        assert!(SelectEvent::ClearClick.is_pointer());
        assert!(!SelectEvent::FocusOut(FocusReason::Mouse).is_pointer());
        assert!(!SelectEvent::from(Key::Enter).is_pointer());
    }
}
