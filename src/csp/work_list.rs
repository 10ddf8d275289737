use std::collections::{HashSet, VecDeque};

use crate::csp::model::VariableId;

/// FIFO worklist of directed arcs `(xi, xj)` awaiting revision.
///
/// Membership is tracked so an arc already queued is not queued twice; AC-3
/// converges to the same unique fixed point either way, the dedup just avoids
/// redundant revisions. Pop order stays strictly first-in-first-out, which
/// keeps propagation traces reproducible.
pub struct WorkList {
    queue: VecDeque<(VariableId, VariableId)>,
    queue_members: HashSet<(VariableId, VariableId)>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, xi: VariableId, xj: VariableId) {
        if self.queue_members.insert((xi, xj)) {
            self.queue.push_back((xi, xj));
        }
    }

    pub fn pop_front(&mut self) -> Option<(VariableId, VariableId)> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
