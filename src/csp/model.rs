use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    csp::{
        assignment::Assignment,
        domain::{Domain, DomainStore},
        value::{CompareOp, Value},
    },
    error::{ModelDefect, Result},
};

/// Dense index of a variable inside a [`ConstraintModel`], assigned in
/// declaration order. All solver internals run on these indices; names only
/// appear at the API boundary.
pub type VariableId = usize;

/// A binary constraint as declared by the generator: `var1 op var2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub var1: String,
    pub op: CompareOp,
    pub var2: String,
}

impl Constraint {
    pub fn new(var1: impl Into<String>, op: CompareOp, var2: impl Into<String>) -> Self {
        Self {
            var1: var1.into(),
            op,
            var2: var2.into(),
        }
    }
}

/// A constraint with both endpoints resolved to variable indices.
#[derive(Debug, Clone, Copy)]
struct BinaryConstraint {
    a: VariableId,
    b: VariableId,
    op: CompareOp,
}

impl BinaryConstraint {
    fn touches(&self, x: VariableId, y: VariableId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// An immutable description of a CSP instance: variables, their initial
/// domains, and binary relational constraints.
///
/// The model is read-only during solving; working domains are cloned into a
/// [`DomainStore`] per solve call so the original instance stays available
/// for building explanations.
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    names: Vec<String>,
    index: HashMap<String, VariableId>,
    constraints: Vec<BinaryConstraint>,
    neighbors: Vec<Vec<VariableId>>,
    initial: Vec<Domain>,
}

impl ConstraintModel {
    /// Builds and validates a model.
    ///
    /// Fails with [`ModelDefect::DuplicateVariable`] if `variables` repeats a
    /// name, [`ModelDefect::MissingDomain`] if a declared variable has no
    /// domain, and [`ModelDefect::UnknownVariable`] if a constraint mentions
    /// an undeclared variable.
    pub fn new(
        variables: Vec<String>,
        mut domains: HashMap<String, Vec<Value>>,
        constraints: Vec<Constraint>,
    ) -> Result<Self> {
        let mut index = HashMap::with_capacity(variables.len());
        for (i, name) in variables.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(ModelDefect::DuplicateVariable(name.clone()).into());
            }
        }

        let mut initial = Vec::with_capacity(variables.len());
        for name in &variables {
            let values = domains
                .remove(name)
                .ok_or_else(|| ModelDefect::MissingDomain(name.clone()))?;
            initial.push(Domain::new(values));
        }

        let mut resolved = Vec::with_capacity(constraints.len());
        let mut neighbors: Vec<Vec<VariableId>> = vec![Vec::new(); variables.len()];
        for c in &constraints {
            let a = *index
                .get(&c.var1)
                .ok_or_else(|| ModelDefect::UnknownVariable(c.var1.clone()))?;
            let b = *index
                .get(&c.var2)
                .ok_or_else(|| ModelDefect::UnknownVariable(c.var2.clone()))?;
            resolved.push(BinaryConstraint { a, b, op: c.op });
            // First-occurrence order, no duplicates: the neighbor map is a set.
            if !neighbors[a].contains(&b) {
                neighbors[a].push(b);
            }
            if !neighbors[b].contains(&a) {
                neighbors[b].push(a);
            }
        }

        Ok(Self {
            names: variables,
            index,
            constraints: resolved,
            neighbors,
            initial,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.names.len()
    }

    /// The variable's declared name.
    pub fn name(&self, var: VariableId) -> &str {
        &self.names[var]
    }

    /// Looks a variable up by name.
    pub fn variable(&self, name: &str) -> Option<VariableId> {
        self.index.get(name).copied()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        0..self.names.len()
    }

    /// Variables sharing at least one constraint with `var`, in
    /// first-occurrence order.
    pub fn neighbors(&self, var: VariableId) -> &[VariableId] {
        &self.neighbors[var]
    }

    /// Evaluates the first constraint (in declaration order) matching the
    /// unordered pair `{a, b}`, in its declared direction. Returns `true`
    /// when no constraint relates the pair.
    ///
    /// Only the first matching constraint is consulted even if several exist
    /// for the same pair; later duplicates are deliberately ignored rather
    /// than conjoined.
    pub fn check(&self, a: VariableId, va: &Value, b: VariableId, vb: &Value) -> bool {
        for c in &self.constraints {
            if c.touches(a, b) {
                return if c.a == a {
                    c.op.eval(va, vb)
                } else {
                    c.op.eval(vb, va)
                };
            }
        }
        true
    }

    /// Directed arcs for AC-3's initial worklist: `(var1, var2)` then
    /// `(var2, var1)` for every constraint, in declaration order.
    pub fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.constraints
            .iter()
            .flat_map(|c| [(c.a, c.b), (c.b, c.a)])
    }

    /// A fresh working copy of the initial domains.
    pub fn store(&self) -> DomainStore {
        DomainStore::new(self.initial.clone())
    }

    /// The initial (unpruned) domain of `var`.
    pub fn initial_domain(&self, var: VariableId) -> &Domain {
        &self.initial[var]
    }
}

/// A complete problem instance in the generator's JSON shape, optionally
/// carrying a partial assignment to resume from and a target variable the
/// question asks about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CspInstance {
    pub variables: Vec<String>,
    pub domains: HashMap<String, Vec<Value>>,
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub assignment: HashMap<String, Value>,
    #[serde(default)]
    pub target: Option<String>,
}

impl CspInstance {
    /// Validates the instance into a model plus its seeded partial
    /// assignment.
    pub fn build(&self) -> Result<(ConstraintModel, Assignment)> {
        let model = ConstraintModel::new(
            self.variables.clone(),
            self.domains.clone(),
            self.constraints.clone(),
        )?;
        let mut assignment = Assignment::for_model(&model);
        for (name, value) in &self.assignment {
            let var = model
                .variable(name)
                .ok_or_else(|| ModelDefect::UnknownVariable(name.clone()))?;
            assignment.assign(var, value.clone());
        }
        Ok((model, assignment))
    }
}
