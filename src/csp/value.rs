use serde::{Deserialize, Serialize};

/// A single value that can appear in a variable's domain.
///
/// Generated instances mix integer domains (schedules, sizes) with symbolic
/// ones (colours, region names), so a domain value is either an integer or an
/// opaque token. The derived ordering (integers before tokens, then payload
/// order) gives the relational operators a deterministic meaning on any pair
/// of values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A 64-bit integer value.
    Int(i64),
    /// An opaque symbolic value, e.g. a colour name.
    Token(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Token(t) => write!(f, "{t}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(t: &str) -> Self {
        Value::Token(t.to_owned())
    }
}

/// The closed set of binary comparison operators a constraint may use.
///
/// The wire names match the generator's JSON (`"!="`, `"<="`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl CompareOp {
    /// Evaluates `lhs op rhs`.
    pub fn eval(&self, lhs: &Value, rhs: &Value) -> bool {
        match self {
            CompareOp::NotEqual => lhs != rhs,
            CompareOp::Equal => lhs == rhs,
            CompareOp::LessThan => lhs < rhs,
            CompareOp::GreaterThan => lhs > rhs,
            CompareOp::LessOrEqual => lhs <= rhs,
            CompareOp::GreaterOrEqual => lhs >= rhs,
        }
    }

    /// The operator's conventional symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::NotEqual => "!=",
            CompareOp::Equal => "==",
            CompareOp::LessThan => "<",
            CompareOp::GreaterThan => ">",
            CompareOp::LessOrEqual => "<=",
            CompareOp::GreaterOrEqual => ">=",
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CompareOp, Value};

    #[test]
    fn operators_evaluate_on_integers() {
        let three = Value::Int(3);
        let five = Value::Int(5);

        assert!(CompareOp::NotEqual.eval(&three, &five));
        assert!(!CompareOp::Equal.eval(&three, &five));
        assert!(CompareOp::LessThan.eval(&three, &five));
        assert!(!CompareOp::GreaterThan.eval(&three, &five));
        assert!(CompareOp::LessOrEqual.eval(&three, &three));
        assert!(CompareOp::GreaterOrEqual.eval(&five, &three));
    }

    #[test]
    fn operators_evaluate_on_tokens() {
        let red = Value::from("Red");
        let green = Value::from("Green");

        assert!(CompareOp::NotEqual.eval(&red, &green));
        assert!(CompareOp::Equal.eval(&red, &red));
        // Tokens compare lexicographically.
        assert!(CompareOp::LessThan.eval(&green, &red));
    }

    #[test]
    fn wire_format_round_trips() {
        let op: CompareOp = serde_json::from_str("\"<=\"").unwrap();
        assert_eq!(op, CompareOp::LessOrEqual);
        assert_eq!(serde_json::to_string(&CompareOp::NotEqual).unwrap(), "\"!=\"");

        let v: Value = serde_json::from_str("7").unwrap();
        assert_eq!(v, Value::Int(7));
        let v: Value = serde_json::from_str("\"Albastru\"").unwrap();
        assert_eq!(v, Value::from("Albastru"));
    }
}
