use crate::csp::{
    model::{ConstraintModel, VariableId},
    value::Value,
};

/// A partial mapping from variables to chosen values.
///
/// Grows monotonically during search and shrinks only on backtrack. Stored as
/// a dense slot array so membership checks inside the search hot loop are a
/// single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Option<Value>>,
    assigned: usize,
}

impl Assignment {
    /// An empty assignment over `n` variables.
    pub fn empty(n: usize) -> Self {
        Self {
            slots: vec![None; n],
            assigned: 0,
        }
    }

    /// An empty assignment sized for `model`.
    pub fn for_model(model: &ConstraintModel) -> Self {
        Self::empty(model.num_variables())
    }

    pub fn get(&self, var: VariableId) -> Option<&Value> {
        self.slots[var].as_ref()
    }

    pub fn contains(&self, var: VariableId) -> bool {
        self.slots[var].is_some()
    }

    pub fn assign(&mut self, var: VariableId, value: Value) {
        if self.slots[var].replace(value).is_none() {
            self.assigned += 1;
        }
    }

    pub fn unassign(&mut self, var: VariableId) {
        if self.slots[var].take().is_some() {
            self.assigned -= 1;
        }
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.assigned
    }

    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// `true` once every variable has a value.
    pub fn is_complete(&self) -> bool {
        self.assigned == self.slots.len()
    }

    /// Assigned pairs in variable declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Value)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(var, slot)| slot.as_ref().map(|v| (var, v)))
    }

    /// Looks up the assigned value of a variable by name. This is the
    /// projection graders use when a question asks about one target variable.
    pub fn value_of<'a>(&'a self, model: &ConstraintModel, name: &str) -> Option<&'a Value> {
        model.variable(name).and_then(|var| self.get(var))
    }

    /// The assignment as `(name, value)` pairs in declaration order.
    pub fn to_named(&self, model: &ConstraintModel) -> Vec<(String, Value)> {
        self.iter()
            .map(|(var, value)| (model.name(var).to_owned(), value.clone()))
            .collect()
    }
}
