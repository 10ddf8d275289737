//! Didact is a pair of classical algorithmic solvers used to grade and
//! explain auto-generated problem instances: a finite-domain constraint
//! satisfaction (CSP) engine and a two-player game-tree solver.
//!
//! The CSP side implements AC-3 arc consistency, forward checking, MRV
//! variable ordering, and backtracking search; the game-tree side implements
//! Minimax with alpha-beta pruning and visited-leaf accounting. Every
//! operation is deterministic for a given instance — domains keep their
//! declared value order, worklists are FIFO, and ties break on declaration
//! order — because graders compare its outputs verbatim against answer keys.
//!
//! Building instances (question templates, distractors, transport) and
//! consuming results (explanations, option rendering) belong to the
//! surrounding application, not this crate.
//!
//! # Example: a two-region colouring question
//!
//! `Nord` can be red or green, `Sud` can only be red, and the regions must
//! differ. AC-3 deduces that `Nord` is green; the search completes the
//! assignment.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use didact::csp::{
//!     run_ac3, BacktrackingSearch, CompareOp, Constraint, ConstraintModel, Value,
//! };
//!
//! let variables = vec!["Nord".to_owned(), "Sud".to_owned()];
//! let mut domains = HashMap::new();
//! domains.insert("Nord".to_owned(), vec![Value::from("Rosu"), Value::from("Verde")]);
//! domains.insert("Sud".to_owned(), vec![Value::from("Rosu")]);
//! let constraints = vec![Constraint::new("Nord", CompareOp::NotEqual, "Sud")];
//!
//! let model = ConstraintModel::new(variables, domains, constraints)?;
//!
//! let outcome = run_ac3(&model);
//! assert!(outcome.consistent);
//! let nord = model.variable("Nord").unwrap();
//! assert_eq!(outcome.store.domain(nord).values(), vec![Value::from("Verde")]);
//!
//! let (solution, _stats) = BacktrackingSearch::with_mrv().solve(&model)?;
//! let solution = solution.expect("a solution exists");
//! assert_eq!(solution.value_of(&model, "Nord"), Some(&Value::from("Verde")));
//! # Ok::<(), didact::error::Error>(())
//! ```
//!
//! # Example: grading an alpha-beta question
//!
//! ```
//! use didact::minimax::{solve, GameNode};
//!
//! let tree = GameNode::max(vec![
//!     GameNode::min(vec![GameNode::leaf(3), GameNode::leaf(5)]),
//!     GameNode::min(vec![GameNode::leaf(2), GameNode::leaf(9)]),
//! ]);
//! let outcome = solve(&tree);
//! assert_eq!(outcome.root_value, 3);
//! assert_eq!(outcome.visited_leaves, 3); // the 9 is pruned
//! ```

pub mod csp;
pub mod error;
pub mod minimax;
