//! Conversion from winit keyboard input to widget key presses.
//!
//! Enabled with the `winit` feature. Hosts that drive their windows with
//! winit feed each keyboard event through [`KeyboardInputHandler`] and hand
//! the resulting [`SelectEvent`] to the focused widget.
//!
//! ```ignore
//! use horizon_select::keyboard::KeyboardInputHandler;
//!
//! let mut handler = KeyboardInputHandler::new();
//!
//! // WindowEvent::ModifiersChanged(m) => handler.update_modifiers(&m),
//! // WindowEvent::KeyboardInput { event, .. } => {
//! //     if let Some(e) = handler.key_press(&event.logical_key, &event.physical_key,
//! //                                        event.state, event.repeat) {
//! //         select.event(&e);
//! //     }
//! // }
//! ```

use winit::event::{ElementState, Modifiers};
use winit::keyboard::{Key as WinitKey, KeyCode, NamedKey, PhysicalKey};

use crate::events::{EventTarget, Key, KeyPressEvent, KeyboardModifiers, SelectEvent};

/// Converts a winit physical key to a widget key.
///
/// Physical keys match web `KeyboardEvent.code`, which is what the widget's
/// key model follows, so they take priority over logical keys.
pub fn from_winit_physical_key(physical: &PhysicalKey) -> Key {
    match physical {
        PhysicalKey::Code(code) => from_winit_key_code(code),
        PhysicalKey::Unidentified(_) => Key::Other(0),
    }
}

fn from_winit_key_code(code: &KeyCode) -> Key {
    match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::NumpadEnter => Key::NumpadEnter,
        KeyCode::Space => Key::Space,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other(0),
    }
}

/// Converts a winit logical key to a widget key.
pub fn from_winit_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(NamedKey::Enter) => Key::Enter,
        WinitKey::Named(NamedKey::Space) => Key::Space,
        WinitKey::Named(NamedKey::ArrowUp) => Key::ArrowUp,
        WinitKey::Named(NamedKey::ArrowDown) => Key::ArrowDown,
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        WinitKey::Character(c) if c.as_str() == " " => Key::Space,
        _ => Key::Other(0),
    }
}

/// Converts winit modifiers to widget keyboard modifiers.
pub fn from_winit_modifiers(modifiers: &Modifiers) -> KeyboardModifiers {
    let state = modifiers.state();
    KeyboardModifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Handler for keyboard input that maintains modifier state.
#[derive(Debug, Default)]
pub struct KeyboardInputHandler {
    modifiers: KeyboardModifiers,
}

impl KeyboardInputHandler {
    /// Creates a new keyboard input handler with no modifiers pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current modifier key state.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// Updates the modifier state from a winit Modifiers event.
    pub fn update_modifiers(&mut self, modifiers: &Modifiers) {
        self.modifiers = from_winit_modifiers(modifiers);
    }

    /// Builds the widget event for a winit key event aimed at the widget.
    ///
    /// Releases produce `None`; the widget only reacts to presses.
    pub fn key_press(
        &self,
        logical_key: &WinitKey,
        physical_key: &PhysicalKey,
        state: ElementState,
        is_repeat: bool,
    ) -> Option<SelectEvent> {
        if state == ElementState::Released {
            return None;
        }

        let key = match from_winit_physical_key(physical_key) {
            Key::Other(_) => from_winit_key(logical_key),
            key => key,
        };

        Some(SelectEvent::KeyPress(KeyPressEvent {
            key,
            modifiers: self.modifiers,
            is_repeat,
            target: EventTarget::Widget,
        }))
    }
}
