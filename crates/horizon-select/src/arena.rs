//! Arena of independent widget instances.
//!
//! Hosts that manage many dropdowns at once (a form, a table of filters) keep
//! them in a [`SelectArena`] and address each by its [`SelectId`]. Instances
//! share nothing: open state, highlight and value are per instance, and a
//! gesture routed to one never affects another.
//!
//! Dispatching through the arena returns the proposed value as a
//! [`SelectionChanged`] message, so a host can run a plain update loop
//! without connecting signals:
//!
//! ```
//! use horizon_select::{Select, SelectArena, SelectOption};
//! use horizon_select::events::SelectEvent;
//!
//! let mut arena = SelectArena::new();
//! let id = arena.mount(Select::single().with_options(vec![SelectOption::new("First", 1)]));
//!
//! arena.dispatch(id, &SelectEvent::BodyClick).unwrap();
//! let message = arena.dispatch(id, &SelectEvent::OptionClick(0)).unwrap().unwrap();
//! arena.set_value(message.instance, message.value).unwrap();
//! assert_eq!(arena.get(id).unwrap().value().labels(), vec!["First"]);
//! ```

use slotmap::{SlotMap, new_key_type};

use horizon_select_core::logging::targets;

use crate::error::{Result, SelectError};
use crate::events::SelectEvent;
use crate::selection::SelectedValue;
use crate::widget::Select;

new_key_type! {
    /// Identifier of a mounted widget instance.
    ///
    /// Stays unique for the arena's lifetime; an id is never reused after
    /// its widget is unmounted.
    pub struct SelectId;
}

/// A value proposed by one instance, for the host to adopt or discard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Instance that proposed the value.
    pub instance: SelectId,
    /// The proposed selection.
    pub value: SelectedValue,
}

/// Storage for widget instances keyed by [`SelectId`].
#[derive(Debug, Default)]
pub struct SelectArena {
    instances: SlotMap<SelectId, Select>,
}

impl SelectArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            instances: SlotMap::with_key(),
        }
    }

    /// Take ownership of `select` and return its id.
    pub fn mount(&mut self, select: Select) -> SelectId {
        let id = self.instances.insert(select);
        tracing::trace!(target: targets::ARENA, ?id, "mounted instance");
        id
    }

    /// Remove an instance and hand it back.
    pub fn unmount(&mut self, id: SelectId) -> Result<Select> {
        let select = self.instances.remove(id).ok_or(SelectError::UnknownInstance)?;
        tracing::trace!(target: targets::ARENA, ?id, "unmounted instance");
        Ok(select)
    }

    /// Whether `id` refers to a mounted instance.
    pub fn contains(&self, id: SelectId) -> bool {
        self.instances.contains_key(id)
    }

    /// Borrow one instance.
    pub fn get(&self, id: SelectId) -> Result<&Select> {
        self.instances.get(id).ok_or(SelectError::UnknownInstance)
    }

    /// Mutably borrow one instance.
    pub fn get_mut(&mut self, id: SelectId) -> Result<&mut Select> {
        self.instances.get_mut(id).ok_or(SelectError::UnknownInstance)
    }

    /// Route `event` to one instance.
    ///
    /// Signals on the instance still fire. The returned message carries the
    /// proposed value, if the event produced one.
    #[tracing::instrument(skip(self, event), target = "horizon_select::arena", level = "trace")]
    pub fn dispatch(&mut self, id: SelectId, event: &SelectEvent) -> Result<Option<SelectionChanged>> {
        let select = self.get_mut(id)?;
        let result = select.handle_event(event);
        Ok(result.change.map(|value| SelectionChanged { instance: id, value }))
    }

    /// Hand a value to one instance.
    pub fn set_value(&mut self, id: SelectId, value: SelectedValue) -> Result<()> {
        self.get_mut(id)?.set_value(value)
    }

    /// Iterate all mounted instances.
    pub fn iter(&self) -> impl Iterator<Item = (SelectId, &Select)> {
        self.instances.iter()
    }

    /// Number of mounted instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no instance is mounted.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
