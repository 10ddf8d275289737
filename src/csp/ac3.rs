//! Arc consistency via the AC-3 algorithm.
//!
//! Every directed arc of every constraint is revised until a fixed point:
//! a value survives in `domain(xi)` only if some value in `domain(xj)`
//! supports it. Because domains preserve insertion order and the worklist is
//! FIFO, the pruned domains are deterministic for a given instance, which is
//! what makes them gradeable.

use tracing::{debug, trace};

use crate::csp::{
    domain::DomainStore,
    model::{ConstraintModel, VariableId},
    work_list::WorkList,
};

/// The result of running AC-3 on a fresh copy of a model's domains.
///
/// `consistent == false` means some domain was emptied: the instance has no
/// solution. That is an expected outcome, not an error. The store carries the
/// pruned (possibly empty) domains either way.
#[derive(Debug)]
pub struct Ac3Outcome {
    pub consistent: bool,
    pub store: DomainStore,
}

/// Runs AC-3 on a fresh working copy of `model`'s initial domains.
pub fn run_ac3(model: &ConstraintModel) -> Ac3Outcome {
    let mut store = model.store();
    let consistent = ac3(model, &mut store);
    Ac3Outcome { consistent, store }
}

/// Establishes arc consistency over `store`, in place.
///
/// Returns `false` as soon as any revision empties a domain; the remaining
/// worklist is discarded and `store` is left holding the partially pruned
/// domains, including the empty one.
pub fn ac3(model: &ConstraintModel, store: &mut DomainStore) -> bool {
    let mut worklist = WorkList::new();
    for (xi, xj) in model.arcs() {
        worklist.push_back(xi, xj);
    }

    while let Some((xi, xj)) = worklist.pop_front() {
        if revise(model, store, xi, xj) {
            if store.domain(xi).is_empty() {
                debug!(
                    variable = model.name(xi),
                    "domain emptied, instance is inconsistent"
                );
                return false;
            }
            // The domain of `xi` shrank: re-check every arc pointing into it,
            // except the one just processed.
            for &xk in model.neighbors(xi) {
                if xk != xj {
                    worklist.push_back(xk, xi);
                }
            }
        }
    }

    debug!("arc consistency reached");
    true
}

/// Removes from `domain(xi)` every value with no supporting value in
/// `domain(xj)`. Returns `true` if anything was removed.
fn revise(model: &ConstraintModel, store: &mut DomainStore, xi: VariableId, xj: VariableId) -> bool {
    let revised = store.domain(xi).retain(|x| {
        store
            .domain(xj)
            .iter()
            .any(|y| model.check(xi, x, xj, y))
    });

    if revised.len() == store.domain(xi).len() {
        return false;
    }
    trace!(
        arc = format!("({}, {})", model.name(xi), model.name(xj)),
        removed = store.domain(xi).len() - revised.len(),
        "revised domain"
    );
    store.replace(xi, revised);
    true
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::{ac3, run_ac3};
    use crate::csp::{
        model::{Constraint, ConstraintModel},
        value::{CompareOp, Value},
    };

    fn model_of(domains: &[(&str, &[i64])], constraints: Vec<Constraint>) -> ConstraintModel {
        let variables = domains.iter().map(|(name, _)| (*name).to_owned()).collect();
        let mut map = HashMap::new();
        for (name, values) in domains {
            map.insert(
                (*name).to_owned(),
                values.iter().map(|&n| Value::Int(n)).collect(),
            );
        }
        ConstraintModel::new(variables, map, constraints).unwrap()
    }

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().map(|&n| Value::Int(n)).collect()
    }

    #[test]
    fn not_equal_with_slack_prunes_nothing() {
        let model = model_of(
            &[("X", &[1, 2, 5]), ("Y", &[1, 3])],
            vec![Constraint::new("X", CompareOp::NotEqual, "Y")],
        );
        let outcome = run_ac3(&model);
        assert!(outcome.consistent);
        assert_eq!(outcome.store.domain(0).values(), ints(&[1, 2, 5]));
        assert_eq!(outcome.store.domain(1).values(), ints(&[1, 3]));
    }

    #[test]
    fn unsupported_domain_empties_and_fails() {
        let model = model_of(
            &[("X", &[10, 11, 12]), ("Y", &[5, 6])],
            vec![Constraint::new("X", CompareOp::LessThan, "Y")],
        );
        let outcome = run_ac3(&model);
        assert!(!outcome.consistent);
        assert!(outcome.store.domain(0).is_empty());
    }

    #[test]
    fn less_than_prunes_both_endpoints() {
        let model = model_of(
            &[("X", &[1, 2, 3]), ("Y", &[1, 2, 3])],
            vec![Constraint::new("X", CompareOp::LessThan, "Y")],
        );
        let outcome = run_ac3(&model);
        assert!(outcome.consistent);
        // 3 has no Y above it; 1 has no X below it.
        assert_eq!(outcome.store.domain(0).values(), ints(&[1, 2]));
        assert_eq!(outcome.store.domain(1).values(), ints(&[2, 3]));
    }

    #[test]
    fn singleton_propagates_along_a_chain() {
        let model = model_of(
            &[("X", &[2]), ("Y", &[1, 2, 3]), ("Z", &[1, 2, 3, 4])],
            vec![
                Constraint::new("X", CompareOp::LessThan, "Y"),
                Constraint::new("Y", CompareOp::LessThan, "Z"),
            ],
        );
        let outcome = run_ac3(&model);
        assert!(outcome.consistent);
        assert_eq!(outcome.store.domain(0).values(), ints(&[2]));
        assert_eq!(outcome.store.domain(1).values(), ints(&[3]));
        assert_eq!(outcome.store.domain(2).values(), ints(&[4]));
    }

    #[test]
    fn chain_with_no_headroom_is_inconsistent() {
        let model = model_of(
            &[("X", &[2]), ("Y", &[1, 2, 3]), ("Z", &[1, 2, 3])],
            vec![
                Constraint::new("X", CompareOp::LessThan, "Y"),
                Constraint::new("Y", CompareOp::LessThan, "Z"),
            ],
        );
        // Y is forced to 3 by X < Y, and then has no Z above it.
        assert!(!run_ac3(&model).consistent);
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let model = model_of(
            &[("X", &[1, 2, 3, 4]), ("Y", &[2, 3]), ("Z", &[1, 2])],
            vec![
                Constraint::new("X", CompareOp::LessThan, "Y"),
                Constraint::new("Z", CompareOp::NotEqual, "X"),
            ],
        );
        let mut store = model.store();
        assert!(ac3(&model, &mut store));
        let first: Vec<_> = store.domains().map(|(_, d)| d.clone()).collect();

        assert!(ac3(&model, &mut store));
        let second: Vec<_> = store.domains().map(|(_, d)| d.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_retained_value_has_support_in_every_neighbor() {
        let model = model_of(
            &[("X", &[1, 2, 3]), ("Y", &[1, 2, 3]), ("Z", &[2, 3, 4])],
            vec![
                Constraint::new("X", CompareOp::LessThan, "Y"),
                Constraint::new("Y", CompareOp::LessOrEqual, "Z"),
            ],
        );
        let outcome = run_ac3(&model);
        assert!(outcome.consistent);
        for xi in model.variables() {
            for x in outcome.store.domain(xi).iter() {
                for &xj in model.neighbors(xi) {
                    assert!(
                        outcome
                            .store
                            .domain(xj)
                            .iter()
                            .any(|y| model.check(xi, x, xj, y)),
                        "value {x} of {} lacks support in {}",
                        model.name(xi),
                        model.name(xj)
                    );
                }
            }
        }
    }
}
