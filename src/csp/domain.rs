use im::Vector;

use crate::csp::{model::VariableId, value::Value};

/// An ordered domain of candidate values for one variable.
///
/// Domains only ever shrink during propagation, and surviving values keep
/// their original relative order, which is what makes pruning results (and
/// therefore grading) deterministic. The persistent [`Vector`] backing makes
/// cloning a domain O(1), so the undo trail can record whole-domain
/// snapshots cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(Vector<Value>);

impl Domain {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Builds a new domain containing, in order, the values that satisfy `f`.
    pub fn retain(&self, f: impl Fn(&Value) -> bool) -> Domain {
        Self(self.0.iter().filter(|v| f(v)).cloned().collect())
    }

    /// The remaining values as an owned, ordered list (for reports).
    pub fn values(&self) -> Vec<Value> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<Value> for Domain {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A position in a [`DomainStore`]'s undo trail. Rolling back to a checkpoint
/// undoes every domain replacement recorded after it.
pub type Checkpoint = usize;

/// The working domains of all variables during one solve call.
///
/// One arena of domains indexed by [`VariableId`], plus an undo trail of
/// `(variable, previous domain)` records pushed on every replacement. The
/// search snapshots the trail position before a trial and rolls back to it on
/// failure, so no pruning ever leaks across sibling branches.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Vec<Domain>,
    trail: Vec<(VariableId, Domain)>,
}

impl DomainStore {
    pub fn new(domains: Vec<Domain>) -> Self {
        Self {
            domains,
            trail: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn domain(&self, var: VariableId) -> &Domain {
        &self.domains[var]
    }

    pub fn domains(&self) -> impl Iterator<Item = (VariableId, &Domain)> {
        self.domains.iter().enumerate()
    }

    /// Replaces `var`'s domain, recording the previous one on the trail.
    pub fn replace(&mut self, var: VariableId, domain: Domain) {
        let previous = std::mem::replace(&mut self.domains[var], domain);
        self.trail.push((var, previous));
    }

    /// Marks the current trail position.
    pub fn checkpoint(&self) -> Checkpoint {
        self.trail.len()
    }

    /// Undoes every replacement recorded after `mark`, most recent first.
    pub fn rollback_to(&mut self, mark: Checkpoint) {
        while self.trail.len() > mark {
            let (var, previous) = self.trail.pop().unwrap();
            self.domains[var] = previous;
        }
    }
}
