//! Open/highlight state machine.
//!
//! Tracks whether the option list is visible and which option keyboard
//! navigation acts on next. The state is private to one widget instance and
//! only changes through the named transitions on [`PopupState`]:
//!
//! ```text
//!            open() / toggle()            step(), hover()
//!   Closed ──────────────────────▶ Open ◀──────────────┐
//!     ▲     highlight := 0           │ ────────────────┘
//!     └──────────────────────────────┘
//!            close() / toggle()
//! ```
//!
//! Every transition into `Open` resets the highlight to 0. Navigation clamps
//! at both ends of the list; there is no wraparound.

use horizon_select_core::logging::targets;

/// Direction of a keyboard navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Towards index 0.
    Up,
    /// Towards the last option.
    Down,
}

/// What a transition changed.
///
/// Returned by every transition so callers can emit notifications without
/// diffing state themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupTransition {
    /// The list went from closed to open.
    pub opened: bool,
    /// The list went from open to closed.
    pub closed: bool,
    /// The highlighted index changed.
    pub highlight_moved: bool,
}

impl PopupTransition {
    /// No observable change.
    pub const NONE: Self = Self {
        opened: false,
        closed: false,
        highlight_moved: false,
    };

    /// Whether anything changed.
    pub fn is_change(&self) -> bool {
        self.opened || self.closed || self.highlight_moved
    }
}

/// Transient interaction state of one widget instance.
///
/// Created closed with the highlight on index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupState {
    open: bool,
    highlighted: usize,
}

impl PopupState {
    /// Initial state: closed, highlight 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the option list is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The raw highlighted index.
    ///
    /// May be stale if the option list shrank since the last transition;
    /// prefer [`highlighted_for`](Self::highlighted_for) before indexing.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The highlighted index clamped into a list of `len` options, or `None`
    /// when the list is empty.
    pub fn highlighted_for(&self, len: usize) -> Option<usize> {
        len.checked_sub(1).map(|last| self.highlighted.min(last))
    }

    /// Closed → Open, resetting the highlight to 0. No-op when already open.
    pub fn open(&mut self) -> PopupTransition {
        if self.open {
            return PopupTransition::NONE;
        }
        let moved = self.highlighted != 0;
        self.open = true;
        self.highlighted = 0;
        tracing::debug!(target: targets::POPUP, "popup opened");
        PopupTransition {
            opened: true,
            highlight_moved: moved,
            ..PopupTransition::NONE
        }
    }

    /// Open → Closed. The highlight is left where it was. No-op when closed.
    pub fn close(&mut self) -> PopupTransition {
        if !self.open {
            return PopupTransition::NONE;
        }
        self.open = false;
        tracing::debug!(target: targets::POPUP, "popup closed");
        PopupTransition {
            closed: true,
            ..PopupTransition::NONE
        }
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) -> PopupTransition {
        if self.open { self.close() } else { self.open() }
    }

    /// Move the highlight one step within a list of `len` options.
    ///
    /// Only acts while open. Moving past either end is a no-op.
    pub fn step(&mut self, direction: NavDirection, len: usize) -> PopupTransition {
        if !self.open {
            return PopupTransition::NONE;
        }
        let Some(current) = self.highlighted_for(len) else {
            return PopupTransition::NONE;
        };
        let target = match direction {
            NavDirection::Up => current.saturating_sub(1),
            NavDirection::Down => (current + 1).min(len - 1),
        };
        self.move_to(target)
    }

    /// Highlight `index` directly (pointer hover).
    ///
    /// Only acts while open and for an index inside a list of `len` options.
    pub fn hover(&mut self, index: usize, len: usize) -> PopupTransition {
        if !self.open || index >= len {
            tracing::trace!(target: targets::POPUP, index, len, open = self.open, "hover ignored");
            return PopupTransition::NONE;
        }
        self.move_to(index)
    }

    /// Re-clamp the highlight after the option list changed to `len` entries.
    pub fn clamp(&mut self, len: usize) -> PopupTransition {
        let target = self.highlighted_for(len).unwrap_or(0);
        self.move_to(target)
    }

    fn move_to(&mut self, index: usize) -> PopupTransition {
        if self.highlighted == index {
            return PopupTransition::NONE;
        }
        tracing::trace!(target: targets::POPUP, from = self.highlighted, to = index, "highlight moved");
        self.highlighted = index;
        PopupTransition {
            highlight_moved: true,
            ..PopupTransition::NONE
        }
    }
}
