//! Prelude module for Horizon Select.
//!
//! ```ignore
//! use horizon_select::prelude::*;
//! ```

// ============================================================================
// Data
// ============================================================================

pub use crate::option::{OptionKey, SelectOption};
pub use crate::selection::{SelectedValue, SelectionMode};

// ============================================================================
// Widget
// ============================================================================

pub use crate::arena::{SelectArena, SelectId, SelectionChanged};
pub use crate::config::SelectConfig;
pub use crate::error::SelectError;
pub use crate::widget::Select;

// ============================================================================
// Input
// ============================================================================

pub use crate::events::{EventTarget, FocusReason, Key, KeyPressEvent, SelectEvent};

// ============================================================================
// Presentation
// ============================================================================

pub use crate::view::{DisplayValue, PlainTextPresenter, Presentation, SelectView};

// ============================================================================
// Signals
// ============================================================================

pub use horizon_select_core::{ConnectionId, Signal};
