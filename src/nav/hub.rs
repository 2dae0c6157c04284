// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The global key stream.
//!
//! Listeners are held by the hub and released through the [`ListenerGuard`] returned from
//! [`KeyboardHub::subscribe`]. Dropping the guard is the only way to unregister, so a listener
//! lives exactly as long as the scope that owns its guard.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::{Rc, Weak};

use super::navigator::Transition;

/// Keys the navigation layer distinguishes. Everything else arrives as [`KeyInput::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    ArrowRight,
    ArrowLeft,
    Space,
    Enter,
    Other,
}

pub type ListenerId = u64;

type Listener = Box<dyn FnMut(KeyInput) -> Option<Transition>>;

#[derive(Default)]
struct HubInner {
    next_id: ListenerId,
    listeners: BTreeMap<ListenerId, Listener>,
    // Guards dropped while their own listener was checked out by `dispatch`.
    released_during_dispatch: BTreeSet<ListenerId>,
}

#[derive(Default)]
pub struct KeyboardHub {
    inner: Rc<RefCell<HubInner>>,
}

impl fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHub").field("listeners", &self.listener_count()).finish()
    }
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        listener: impl FnMut(KeyInput) -> Option<Transition> + 'static,
    ) -> ListenerGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id = inner.next_id.wrapping_add(1);
        inner.listeners.insert(id, Box::new(listener));
        ListenerGuard { id, hub: Rc::downgrade(&self.inner) }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Delivers `key` to every registered listener in registration order.
    ///
    /// Each listener is checked out of the hub while it runs, so a listener may drop guards
    /// (including its own) without deadlocking the hub.
    pub fn dispatch(&self, key: KeyInput) -> Vec<Transition> {
        let ids = self.inner.borrow().listeners.keys().copied().collect::<Vec<_>>();
        let mut transitions = Vec::new();

        for id in ids {
            let Some(mut listener) = self.inner.borrow_mut().listeners.remove(&id) else {
                continue;
            };
            let transition = listener(key);

            let mut inner = self.inner.borrow_mut();
            if !inner.released_during_dispatch.remove(&id) {
                inner.listeners.insert(id, listener);
            }
            drop(inner);

            transitions.extend(transition);
        }

        transitions
    }
}

/// Registration handle for one hub listener; dropping it removes the listener.
#[must_use = "dropping the guard immediately unregisters the listener"]
pub struct ListenerGuard {
    id: ListenerId,
    hub: Weak<RefCell<HubInner>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        let mut inner = hub.borrow_mut();
        if inner.listeners.remove(&self.id).is_none() {
            inner.released_during_dispatch.insert(self.id);
        }
    }
}
