//! Minimal CLI: read JSON → (pydantic model | declaration IR)
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexMap;
use rayon::prelude::*;

use crate::generate::{generate_with_report, Generation};
use crate::input::{load_documents, Document, Selection};
use crate::settings::GenerateOptions;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer pydantic models from sample JSON documents
#[derive(Parser, Debug)]
#[command(name = "json-pydantic", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,

    /// log generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit pydantic model source
    Model(ModelOut),
    /// print the inferred declarations as JSON (debug view)
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every output is one document
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct GenerationSettings {
    /// JSON settings file (keys: root-name, optional-fields, normalize-camel-case)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// name of the root model
    #[arg(long)]
    root_name: Option<String>,

    /// make every field `T | None = None`
    #[arg(long)]
    optional: bool,

    /// convert camelCase keys to snake_case with aliases
    #[arg(long)]
    normalize_camel_case: bool,
}

#[derive(clap::Parser, Debug)]
struct ModelOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    generation: GenerationSettings,

    /// output .py file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    generation: GenerationSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<Document>> {
        let selection = Selection {
            json_pointer: self.json_pointer.as_deref(),
            jq_expr: self.jq_expr.as_deref(),
        };
        let docs = load_documents(&self.input, &selection).context("failed to load input")?;
        tracing::info!(documents = docs.len(), "loaded input");
        Ok(docs)
    }
}

impl GenerationSettings {
    /// Settings file first, then command-line overrides.
    fn resolve(&self) -> Result<GenerateOptions> {
        let mut options = match self.settings.as_ref() {
            Some(path) => GenerateOptions::load(path)?,
            None => GenerateOptions::default(),
        };
        if let Some(name) = self.root_name.as_ref() {
            options.root_name = name.clone();
        }
        options.optional_fields |= self.optional;
        options.normalize_camel_case |= self.normalize_camel_case;
        tracing::debug!(?options, "resolved generation options");
        Ok(options)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn verbose(&self) -> bool {
        self.verbose
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Model(target) => {
                let reports = run_generation(&target.input_settings, &target.generation)?;
                let multi = reports.len() > 1;
                let src = reports
                    .iter()
                    .map(|(origin, report)| {
                        if multi {
                            format!("# source: {origin}\n{}", report.text)
                        } else {
                            report.text.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n\n");
                write_output(target.out.as_ref(), &src)
            }
            Command::Schema(target) => {
                let reports = run_generation(&target.input_settings, &target.generation)?;
                let src = if reports.len() == 1 {
                    serde_json::to_string_pretty(&reports[0].1)?
                } else {
                    let by_origin = reports.iter().map(|(o, r)| (o.as_str(), r)).collect::<IndexMap<_, _>>();
                    serde_json::to_string_pretty(&by_origin)?
                };
                write_output(target.out.as_ref(), &src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn run_generation(
    input: &InputSettings,
    generation: &GenerationSettings,
) -> Result<Vec<(String, Generation)>> {
    let options = generation.resolve()?;
    let docs = input.load()?;

    // each run owns its state, so documents are independent
    let reports: Vec<(String, Generation)> = docs
        .par_iter()
        .map(|doc| (doc.origin.clone(), generate_with_report(&doc.value, &options)))
        .collect();

    for (origin, report) in &reports {
        for collision in &report.collisions {
            eprintln!("{} {origin}: {collision}", "warning:".yellow().bold());
        }
    }
    Ok(reports)
}

fn write_output(out: Option<&PathBuf>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(path = %out.display(), "wrote output");
        }
        None => println!("{src}"),
    }
    Ok(())
}
