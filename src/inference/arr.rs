use serde_json::Value;

use super::{infer_type, InferredType};

/// Element type for a list of scalars.
///
/// Every element is inferred; the list is homogeneous only when all of them
/// agree exactly. An empty list carries no evidence and becomes `list[Any]`.
pub fn list_type(items: &[Value]) -> InferredType {
    let mut elems = items.iter().map(infer_type);
    let first = match elems.next() {
        Some(ty) => ty,
        None => return InferredType::List(Box::new(InferredType::Any)),
    };
    if elems.all(|ty| ty == first) {
        InferredType::List(Box::new(first))
    } else {
        InferredType::List(Box::new(InferredType::Any))
    }
}
