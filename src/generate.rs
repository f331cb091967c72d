//! Whole-document generation: root model, breadth-first nested models,
//! import aggregation and final assembly.
//!
//! Everything a run accumulates lives in a [`GenerationContext`] owned by
//! that run, so concurrent calls never observe each other.
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::codegen::{render_decl, Codegen};
use crate::inference::TemporalKind;
use crate::ir::ModelDecl;
use crate::lower::{lower_object, Lowered, PendingModel};
use crate::settings::GenerateOptions;

// ------------------------------- Types ------------------------------------ //

/// Top-level key sequence of an object together with each value's JSON kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape(Vec<(String, &'static str)>);

impl Shape {
    fn of(obj: &Map<String, Value>) -> Self {
        Shape(obj.iter().map(|(k, v)| (k.clone(), kind_name(v))).collect())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, kind)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {kind}")?;
        }
        f.write_str("}")
    }
}

/// Two differently shaped objects derived the same model name; the first
/// one seen was declared, the other was folded into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCollision {
    pub name: String,
    pub kept: Shape,
    pub dropped: Shape,
}

impl fmt::Display for NameCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "model `{}` was derived for differently shaped objects; kept {}, dropped {}",
            self.name, self.kept, self.dropped
        )
    }
}

/// Output of a run together with what it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    #[serde(skip)]
    pub text: String,
    /// Nested declarations in completion order, root last.
    pub declarations: Vec<ModelDecl>,
    pub collisions: Vec<NameCollision>,
}

/// Per-run state. Created by a top-level call, dropped when it returns.
struct GenerationContext<'a> {
    options: &'a GenerateOptions,
    queue: VecDeque<PendingModel<'a>>,
    /// shape each declared name (root included) was first bound to
    bound: IndexMap<String, Shape>,
    /// nested declarations, completion order
    declarations: Vec<ModelDecl>,
    temporal: BTreeSet<TemporalKind>,
    collisions: Vec<NameCollision>,
}

impl<'a> GenerationContext<'a> {
    fn new(options: &'a GenerateOptions) -> Self {
        Self {
            options,
            queue: VecDeque::new(),
            bound: IndexMap::new(),
            declarations: Vec::new(),
            temporal: BTreeSet::new(),
            collisions: Vec::new(),
        }
    }

    fn absorb(&mut self, lowered: Lowered<'a>) -> ModelDecl {
        self.queue.extend(lowered.nested);
        self.temporal.extend(lowered.temporal);
        lowered.decl
    }

    fn drain(&mut self) {
        while let Some(PendingModel { name, data }) = self.queue.pop_front() {
            let shape = Shape::of(data);
            if let Some(kept) = self.bound.get(&name) {
                if *kept != shape {
                    let collision = NameCollision { name, kept: kept.clone(), dropped: shape };
                    tracing::debug!(%collision, "name collision, first binding kept");
                    self.collisions.push(collision);
                }
                continue;
            }
            self.bound.insert(name.clone(), shape);
            let lowered = lower_object(&name, data, self.options);
            let decl = self.absorb(lowered);
            tracing::debug!(model = %decl.name, fields = decl.fields.len(), "declared nested model");
            self.declarations.push(decl);
        }
    }
}

// ------------------------------- Front API -------------------------------- //

/// Generate the complete module text for `value`.
pub fn generate(value: &Value, options: &GenerateOptions) -> String {
    generate_with_report(value, options).text
}

/// [`generate`], also returning the declarations and any name collisions.
#[tracing::instrument(level = "debug", skip_all, fields(root = %options.root_name))]
pub fn generate_with_report(value: &Value, options: &GenerateOptions) -> Generation {
    let mut ctx = GenerationContext::new(options);

    let root_shape = value.as_object().map(Shape::of).unwrap_or(Shape(Vec::new()));
    ctx.bound.insert(options.root_name.clone(), root_shape);
    let root = ctx.absorb(lower_root(value, &options.root_name, options));
    ctx.drain();

    let mut cg = Codegen::new();
    cg.emit_imports(&ctx.temporal);
    cg.blank();
    cg.blank();
    for decl in &ctx.declarations {
        cg.emit_decl(decl);
        cg.blank();
    }
    cg.emit_decl(&root);

    let mut declarations = ctx.declarations;
    declarations.push(root);
    Generation { text: cg.into_string(), declarations, collisions: ctx.collisions }
}

/// Render only the declaration for `value` itself, named `name`: no imports
/// and no nested declarations (its nested fields still reference them).
pub fn render_declaration(value: &Value, name: &str, options: &GenerateOptions) -> String {
    render_decl(&lower_root(value, name, options).decl)
}

fn lower_root<'a>(value: &'a Value, name: &str, options: &GenerateOptions) -> Lowered<'a> {
    match value.as_object() {
        Some(obj) => lower_object(name, obj, options),
        None => Lowered { decl: ModelDecl::empty(name), nested: Vec::new(), temporal: BTreeSet::new() },
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ------------------------------- Tests ------------------------------------ //
