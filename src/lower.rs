use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::case::{is_camel_case, to_snake_case, to_title_case};
use crate::inference::{infer_type, InferredType, TemporalKind};
use crate::ir::{Field, ModelDecl};
use crate::settings::GenerateOptions;

/// A nested object discovered while lowering, waiting for its own declaration.
#[derive(Debug, Clone)]
pub struct PendingModel<'v> {
    pub name: String,
    pub data: &'v Map<String, Value>,
}

/// Result of lowering one object: its declaration plus everything it
/// discovered that the caller must fold into the run.
#[derive(Debug)]
pub struct Lowered<'v> {
    pub decl: ModelDecl,
    pub nested: Vec<PendingModel<'v>>,
    pub temporal: BTreeSet<TemporalKind>,
}

/// Lower the direct fields of `obj` into a declaration named `name`.
///
/// Nested objects become model references and are returned in `nested`
/// (key order) rather than lowered here. For arrays of objects only the
/// first element is sampled.
pub fn lower_object<'v>(
    name: &str,
    obj: &'v Map<String, Value>,
    options: &GenerateOptions,
) -> Lowered<'v> {
    let mut decl = ModelDecl::empty(name);
    let mut nested = Vec::new();
    let mut temporal = BTreeSet::new();

    for (key, value) in obj {
        let (field_name, alias) = emitted_name(key, options.normalize_camel_case);

        let ty = if let Value::Object(inner) = value {
            let model = to_title_case(&field_name);
            tracing::debug!(parent = name, model = %model, "queued nested model");
            nested.push(PendingModel { name: model.clone(), data: inner });
            InferredType::Model(model)
        } else if let Some(first) = first_object(value) {
            let model = singular(to_title_case(&field_name));
            tracing::debug!(parent = name, model = %model, "queued nested list model");
            nested.push(PendingModel { name: model.clone(), data: first });
            InferredType::List(Box::new(InferredType::Model(model)))
        } else {
            let ty = infer_type(value);
            temporal.extend(ty.temporal_kinds());
            ty
        };

        decl.fields.push(Field {
            name: field_name,
            ty,
            alias,
            optional: options.optional_fields,
        });
    }

    decl.populate_by_name = options.normalize_camel_case && !decl.is_empty();
    Lowered { decl, nested, temporal }
}

// ------------------------------- Helpers ---------------------------------- //

fn emitted_name(key: &str, normalize: bool) -> (String, Option<String>) {
    if normalize && is_camel_case(key) {
        let snake = to_snake_case(key);
        if snake != key {
            return (snake, Some(key.to_string()));
        }
    }
    (key.to_string(), None)
}

fn first_object(v: &Value) -> Option<&Map<String, Value>> {
    match v {
        Value::Array(items) => items.first().and_then(Value::as_object),
        _ => None,
    }
}

// naive: `Items` → `Item`, `Address` → `Addres`
fn singular(mut name: String) -> String {
    if name.ends_with('s') {
        name.pop();
    }
    name
}

// ------------------------------- Tests ------------------------------------ //
