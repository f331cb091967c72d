//! Scalar/container type inference for a single JSON value.
//!
//! Pure and total: every `serde_json::Value` maps to some [`InferredType`].
//! Objects nested in fields are intercepted one level up (see `lower`) and
//! become model references; this module only sees them as `dict[str, Any]`.
pub mod arr;
pub mod num;
pub mod temporal;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub use temporal::{classify, TemporalKind};

// ------------------------------- Types ------------------------------------ //

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum InferredType {
    None,
    Bool,
    Int,
    Float,
    Str,
    Date,
    DateTime,
    Any,
    /// `list[T]`; a heterogeneous list is `List(Any)`
    List(Box<InferredType>),
    /// reference to another generated declaration
    Model(String),
    /// `dict[str, Any]`
    Dict,
}

impl InferredType {
    /// Temporal kinds reachable from this type, lists included.
    pub fn temporal_kinds(&self) -> BTreeSet<TemporalKind> {
        match self {
            InferredType::Date => BTreeSet::from([TemporalKind::Date]),
            InferredType::DateTime => BTreeSet::from([TemporalKind::DateTime]),
            InferredType::List(item) => item.temporal_kinds(),
            _ => BTreeSet::new(),
        }
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferredType::None => f.write_str("None"),
            InferredType::Bool => f.write_str("bool"),
            InferredType::Int => f.write_str("int"),
            InferredType::Float => f.write_str("float"),
            InferredType::Str => f.write_str("str"),
            InferredType::Date => f.write_str("date"),
            InferredType::DateTime => f.write_str("datetime"),
            InferredType::Any => f.write_str("Any"),
            InferredType::List(item) => write!(f, "list[{item}]"),
            InferredType::Model(name) => f.write_str(name),
            InferredType::Dict => f.write_str("dict[str, Any]"),
        }
    }
}

// ------------------------------- Infer ------------------------------------ //

pub fn infer_type(v: &Value) -> InferredType {
    match v {
        Value::Null => InferredType::None,
        Value::Bool(_) => InferredType::Bool,
        Value::Number(n) => {
            if num::is_integral(n) { InferredType::Int } else { InferredType::Float }
        }
        Value::String(s) => match classify(s) {
            TemporalKind::Date => InferredType::Date,
            TemporalKind::DateTime => InferredType::DateTime,
            TemporalKind::Text => InferredType::Str,
        },
        Value::Array(xs) => arr::list_type(xs),
        Value::Object(_) => InferredType::Dict,
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(infer_type(&json!(null)), InferredType::None);
        assert_eq!(infer_type(&json!(true)), InferredType::Bool);
        assert_eq!(infer_type(&json!("john@example.com")), InferredType::Str);
    }

    #[test]
    fn integrality_is_by_value() {
        for v in [json!(0), json!(30), json!(-1), json!(2.0), json!(1e3)] {
            assert_eq!(infer_type(&v), InferredType::Int, "{v}");
        }
        for v in [json!(0.5), json!(-3.25), json!(1e-3)] {
            assert_eq!(infer_type(&v), InferredType::Float, "{v}");
        }
    }

    #[test]
    fn strings_delegate_to_temporal_detection() {
        assert_eq!(infer_type(&json!("2023-01-01")), InferredType::Date);
        assert_eq!(infer_type(&json!("2023-01-15T14:30:45Z")), InferredType::DateTime);
        assert_eq!(infer_type(&json!("2024-02-30")), InferredType::Str);
    }

    #[test]
    fn containers() {
        assert_eq!(infer_type(&json!(["a", "b"])).to_string(), "list[str]");
        assert_eq!(infer_type(&json!([])).to_string(), "list[Any]");
        assert_eq!(infer_type(&json!({"a": 1})).to_string(), "dict[str, Any]");
    }

    #[test]
    fn temporal_kinds_see_through_lists() {
        let ty = infer_type(&json!([["2024-01-01"]]));
        assert_eq!(ty.to_string(), "list[list[date]]");
        assert_eq!(ty.temporal_kinds().into_iter().collect::<Vec<_>>(), vec![TemporalKind::Date]);
        assert!(InferredType::Str.temporal_kinds().is_empty());
        assert!(InferredType::List(Box::new(InferredType::Any)).temporal_kinds().is_empty());
    }

    #[test]
    fn display_renders_python_annotations() {
        let model = InferredType::List(Box::new(InferredType::Model("Comment".into())));
        assert_eq!(model.to_string(), "list[Comment]");
        assert_eq!(InferredType::None.to_string(), "None");
        assert_eq!(InferredType::Float.to_string(), "float");
    }
}
