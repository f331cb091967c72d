//! Render declarations as pydantic v2 source.
use std::collections::BTreeSet;

use crate::inference::TemporalKind;
use crate::ir::{Field, ModelDecl};

const INDENT: &str = "    ";

pub const BASE_IMPORTS: [&str; 2] = [
    "from pydantic import BaseModel, Field, ConfigDict",
    "from typing import Any",
];

/// Line-oriented writer; `into_string` joins with `\n` (no trailing newline).
#[derive(Debug, Default)]
pub struct Codegen {
    lines: Vec<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base imports, plus one `datetime` import naming whichever kinds were used.
    pub fn emit_imports(&mut self, temporal: &BTreeSet<TemporalKind>) {
        self.lines.extend(BASE_IMPORTS.iter().map(|s| s.to_string()));
        let names: Vec<&str> = temporal
            .iter()
            .filter(|k| k.is_temporal())
            .map(|k| k.python_name())
            .collect();
        if !names.is_empty() {
            self.lines.push(format!("from datetime import {}", names.join(", ")));
        }
    }

    pub fn emit_decl(&mut self, decl: &ModelDecl) {
        self.lines.push(format!("class {}(BaseModel):", decl.name));
        if decl.is_empty() {
            self.lines.push(format!("{INDENT}pass"));
            return;
        }
        for field in &decl.fields {
            self.lines.push(format!("{INDENT}{}", field_line(field)));
        }
        if decl.populate_by_name {
            self.blank();
            self.lines.push(format!("{INDENT}model_config = ConfigDict(populate_by_name=True)"));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

/// A single declaration, no imports.
pub fn render_decl(decl: &ModelDecl) -> String {
    let mut cg = Codegen::new();
    cg.emit_decl(decl);
    cg.into_string()
}

fn field_line(field: &Field) -> String {
    let name = &field.name;
    let ty = &field.ty;
    match (field.optional, field.alias.as_deref()) {
        (false, None) => format!("{name}: {ty}"),
        (true, None) => format!("{name}: {ty} | None = None"),
        (false, Some(key)) => format!("{name}: {ty} = Field(alias={})", py_str(key)),
        (true, Some(key)) => {
            format!("{name}: {ty} | None = Field(default=None, alias={})", py_str(key))
        }
    }
}

/// Single-quoted Python string literal.
fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
