// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed listener registry.
//!
//! Any number of listeners can be registered per `(target, event)` pair. They
//! run in registration order. A listener error is logged and counted, and the
//! remaining listeners still run.

use core::fmt;

use canopy_tree::{NodeId, Tree};
use hashbrown::HashMap;

use crate::event::{EventContext, EventData, EventKind, Target};

/// Handle returned by registration, used to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Boxed event callback.
pub type Listener = Box<dyn FnMut(&mut EventContext<'_>) -> anyhow::Result<()>>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    slots: HashMap<(Target, EventKind), Vec<(ListenerId, Listener)>>,
    errors: u64,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count: usize = self.slots.values().map(Vec::len).sum();
        f.debug_struct("Listeners")
            .field("listeners", &count)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl Listeners {
    pub(crate) fn on(&mut self, target: Target, kind: EventKind, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.slots
            .entry((target, kind))
            .or_default()
            .push((id, listener));
        id
    }

    pub(crate) fn off(&mut self, id: ListenerId) -> bool {
        let mut found = false;
        self.slots.retain(|_, list| {
            let before = list.len();
            list.retain(|(l, _)| *l != id);
            found |= list.len() != before;
            !list.is_empty()
        });
        found
    }

    pub(crate) fn has(&self, target: Target, kind: EventKind) -> bool {
        self.slots.contains_key(&(target, kind))
    }

    /// Drop every listener of the given nodes.
    pub(crate) fn forget_nodes(&mut self, nodes: &[NodeId]) {
        self.slots.retain(|(target, _), _| match target {
            Target::Node(n) => !nodes.contains(n),
            Target::Scene => true,
        });
    }

    /// Keep node listeners only for nodes `keep` accepts.
    pub(crate) fn retain_nodes(&mut self, mut keep: impl FnMut(NodeId) -> bool) {
        self.slots.retain(|(target, _), _| match target {
            Target::Node(n) => keep(*n),
            Target::Scene => true,
        });
    }

    pub(crate) fn errors(&self) -> u64 {
        self.errors
    }

    /// Run the listeners for `(target, kind)`; returns whether any marked the event handled.
    pub(crate) fn dispatch(
        &mut self,
        tree: &mut Tree,
        target: Target,
        kind: EventKind,
        data: &EventData,
    ) -> bool {
        let Some(list) = self.slots.get_mut(&(target, kind)) else {
            return false;
        };
        let local_position = match (target, data.position()) {
            (Target::Node(id), Some(p)) => tree.point_to_local(id, p),
            _ => None,
        };
        let mut ctx = EventContext {
            tree,
            kind,
            target,
            data,
            local_position,
            handled: false,
        };
        for (id, listener) in list.iter_mut() {
            if let Err(err) = listener(&mut ctx) {
                self.errors += 1;
                log::warn!("listener {id:?} for {kind:?} on {target:?} failed: {err:#}");
            }
        }
        log::trace!("dispatched {kind:?} to {target:?}");
        ctx.handled
    }
}
