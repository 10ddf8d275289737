//! Finite-domain constraint satisfaction: model, propagation, and search.
//!
//! The pieces compose the way the grading layer asks questions about them:
//! [`ac3`] for "what remains after propagation?", [`forward_check`] for "what
//! does this assignment prune?", [`select_variable_mrv`] for "which variable
//! is branched on next?", and [`BacktrackingSearch`] for "what is the
//! solution?".
//!
//! [`ac3`]: ac3::ac3
//! [`forward_check`]: forward::forward_check
//! [`select_variable_mrv`]: heuristics::select_variable_mrv
//! [`BacktrackingSearch`]: search::BacktrackingSearch

pub mod ac3;
pub mod assignment;
pub mod domain;
pub mod forward;
pub mod heuristics;
pub mod model;
pub mod search;
pub mod stats;
pub mod value;
pub mod work_list;

pub use ac3::{ac3, run_ac3, Ac3Outcome};
pub use assignment::Assignment;
pub use domain::{Checkpoint, Domain, DomainStore};
pub use forward::forward_check;
pub use heuristics::{select_variable_mrv, MinimumRemainingValues, SelectFirst, VariableSelector};
pub use model::{Constraint, ConstraintModel, CspInstance, VariableId};
pub use search::{BacktrackingSearch, SearchStats};
pub use value::{CompareOp, Value};
