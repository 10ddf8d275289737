//! Forward checking: immediate neighbor pruning after a tentative assignment.

use tracing::trace;

use crate::csp::{
    assignment::Assignment,
    domain::DomainStore,
    model::{ConstraintModel, VariableId},
    value::Value,
};

/// Prunes the domains of `var`'s unassigned neighbors down to the values
/// compatible with assigning `value` to `var`.
///
/// Returns `false` if any neighbor's domain empties; in that case every prune
/// made by this call has already been rolled back, so the caller sees the
/// domains exactly as they were on entry. Forward checking never partially
/// commits.
pub fn forward_check(
    model: &ConstraintModel,
    store: &mut DomainStore,
    var: VariableId,
    value: &Value,
    assignment: &Assignment,
) -> bool {
    let mark = store.checkpoint();

    for &nb in model.neighbors(var) {
        if assignment.contains(nb) {
            continue;
        }
        let pruned = store.domain(nb).retain(|v| model.check(var, value, nb, v));
        if pruned.len() < store.domain(nb).len() {
            trace!(
                assigned = model.name(var),
                neighbor = model.name(nb),
                remaining = pruned.len(),
                "forward check pruned neighbor"
            );
            let emptied = pruned.is_empty();
            store.replace(nb, pruned);
            if emptied {
                store.rollback_to(mark);
                return false;
            }
        }
    }

    true
}
