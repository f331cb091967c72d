//! Infer pydantic models from sample JSON.
//!
//! Pipeline: `inference` (types, temporal strings) → `lower` (one object →
//! [`ir::ModelDecl`]) → `generate` (breadth-first over nested objects,
//! import aggregation) → `codegen` (text).
pub mod case;
pub mod cli;
pub mod codegen;
pub mod generate;
pub mod inference;
pub mod input;
pub mod ir;
pub mod jq_exec;
pub mod lower;
pub mod path_de;
pub mod settings;

pub use case::{is_camel_case, to_snake_case, to_title_case, DEFAULT_MODEL_NAME};
pub use generate::{generate, generate_with_report, render_declaration, Generation, NameCollision};
pub use inference::{classify, infer_type, InferredType, TemporalKind};
pub use settings::GenerateOptions;
