// Declaration IR between lowering and codegen. No serde_json::Value here.
use serde::Serialize;

use crate::inference::InferredType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDecl {
    pub name: String,
    pub fields: Vec<Field>,   // JSON key order
    pub populate_by_name: bool, // emit `model_config = ConfigDict(populate_by_name=True)`
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: InferredType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>, // original JSON key when `name` was normalized
    pub optional: bool,        // `T | None`, defaulting to None
}

impl ModelDecl {
    pub fn empty(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new(), populate_by_name: false }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the declarations this one refers to, in field order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| model_ref(&f.ty))
    }
}

fn model_ref(ty: &InferredType) -> Option<&str> {
    match ty {
        InferredType::Model(name) => Some(name),
        InferredType::List(item) => model_ref(item),
        _ => None,
    }
}
