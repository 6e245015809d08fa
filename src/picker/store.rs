//! The state+dispatch pair shared by everything that drives one picker.
//!
//! A [`PickerStore`] is created once per mounted picker and handed explicitly to
//! every consumer; clones share the same underlying state.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::action::PickerAction;
use super::months::month_starts;
use super::reducer::{reduce, PickerEnv};
use super::state::{PickerDefaults, PickerMode, PickerState};

struct Inner {
    state: PickerState,
    env: PickerEnv,
}

#[derive(Clone)]
pub struct PickerStore {
    inner: Rc<RefCell<Inner>>,
}

impl PickerStore {
    /// Create the store with the visible months anchored at today
    pub fn new(mode: PickerMode, defaults: PickerDefaults, env: PickerEnv) -> Self {
        let months = month_starts(defaults.month_count, None, env.dates.as_ref());
        let state = PickerState::new(mode, defaults, months);
        Self::from_state(state, env)
    }

    pub fn from_state(state: PickerState, env: PickerEnv) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { state, env })),
        }
    }

    /// Run one action through the reducer
    pub fn dispatch(&self, action: PickerAction) {
        let mut inner = self.inner.borrow_mut();
        log::debug!("picker dispatch: {:?}", action);
        let next = reduce(&inner.state, &action, &inner.env);
        inner.state = next;
    }

    /// Borrow the current state. Do not hold the borrow across a dispatch.
    pub fn state(&self) -> Ref<'_, PickerState> {
        Ref::map(self.inner.borrow(), |inner| &inner.state)
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> PickerState {
        self.inner.borrow().state.clone()
    }

    pub fn env(&self) -> PickerEnv {
        self.inner.borrow().env.clone()
    }
}

impl std::fmt::Debug for PickerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerStore").field("state", &*self.state()).finish()
    }
}
