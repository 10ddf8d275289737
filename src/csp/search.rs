//! Depth-first backtracking search over partial assignments.

use tracing::{debug, trace};

use crate::{
    csp::{
        assignment::Assignment,
        domain::DomainStore,
        forward::forward_check,
        heuristics::{MinimumRemainingValues, SelectFirst, VariableSelector},
        model::{ConstraintModel, VariableId},
        value::Value,
    },
    error::{Error, Result},
};

/// Counters accumulated over one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search-tree nodes entered (including the root and dead ends).
    pub nodes_visited: u64,
    /// Abandoned value trials.
    pub backtracks: u64,
    /// Domain replacements committed by forward checking.
    pub prunings: u64,
}

/// Backtracking search over a [`ConstraintModel`], configurable with a
/// variable-ordering heuristic and optional forward checking.
///
/// Domains are mutated only through the store's undo trail: a checkpoint is
/// taken before every value trial and rolled back when the trial fails, so no
/// pruning survives past a dead subtree.
#[derive(Debug)]
pub struct BacktrackingSearch {
    selector: Box<dyn VariableSelector>,
    forward_checking: bool,
}

impl BacktrackingSearch {
    pub fn new(selector: Box<dyn VariableSelector>, forward_checking: bool) -> Self {
        Self {
            selector,
            forward_checking,
        }
    }

    /// Fixed declaration-order branching, no forward checking.
    pub fn plain() -> Self {
        Self::new(Box::new(SelectFirst), false)
    }

    /// Dynamic MRV variable ordering, no forward checking.
    pub fn with_mrv() -> Self {
        Self::new(Box::new(MinimumRemainingValues), false)
    }

    /// Fixed declaration-order branching plus forward checking.
    pub fn with_forward_checking() -> Self {
        Self::new(Box::new(SelectFirst), true)
    }

    /// Solves the model from an empty assignment on a fresh copy of its
    /// initial domains.
    ///
    /// Returns `Ok((Some(assignment), stats))` on success and
    /// `Ok((None, stats))` when the search space is exhausted; "no solution"
    /// is an ordinary result, not an error.
    pub fn solve(&self, model: &ConstraintModel) -> Result<(Option<Assignment>, SearchStats)> {
        self.solve_with(model, model.store(), Assignment::for_model(model))
    }

    /// Solves from a caller-provided working store and partial assignment,
    /// e.g. to continue after AC-3 preprocessing or from a generator-seeded
    /// assignment.
    pub fn solve_with(
        &self,
        model: &ConstraintModel,
        mut store: DomainStore,
        mut assignment: Assignment,
    ) -> Result<(Option<Assignment>, SearchStats)> {
        let mut stats = SearchStats::default();
        let found = self.search(model, &mut store, &mut assignment, &mut stats)?;
        debug!(
            solved = found.is_some(),
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            "search finished"
        );
        Ok((found, stats))
    }

    fn search(
        &self,
        model: &ConstraintModel,
        store: &mut DomainStore,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment>> {
        stats.nodes_visited += 1;

        if assignment.is_complete() {
            return Ok(Some(assignment.clone()));
        }

        let var = self
            .selector
            .select(model, store, assignment)
            .ok_or(Error::NoUnassignedVariable)?;

        // The current domain is snapshotted for iteration; forward checking
        // only ever touches other variables' domains.
        let candidates = store.domain(var).clone();
        for value in candidates.iter() {
            if !consistent_with_assigned(model, assignment, var, value) {
                trace!(
                    variable = model.name(var),
                    value = %value,
                    "rejected by assigned neighbor"
                );
                stats.backtracks += 1;
                continue;
            }

            let mark = store.checkpoint();
            if self.forward_checking
                && !forward_check(model, store, var, value, assignment)
            {
                // forward_check restored the domains itself.
                stats.backtracks += 1;
                continue;
            }
            stats.prunings += (store.checkpoint() - mark) as u64;

            assignment.assign(var, value.clone());
            if let Some(found) = self.search(model, store, assignment, stats)? {
                return Ok(Some(found));
            }
            assignment.unassign(var);
            store.rollback_to(mark);
            stats.backtracks += 1;
        }

        Ok(None)
    }
}

/// A value trial is rejected outright if it violates the constraint to any
/// already-assigned neighbor; such values never reach forward checking.
fn consistent_with_assigned(
    model: &ConstraintModel,
    assignment: &Assignment,
    var: VariableId,
    value: &Value,
) -> bool {
    model.neighbors(var).iter().all(|&nb| match assignment.get(nb) {
        Some(assigned) => model.check(var, value, nb, assigned),
        None => true,
    })
}
