//! Reading JSON documents for the CLI: paths, globs, stdin, then optional
//! JSON Pointer / jq selection. Generation itself never fails; everything
//! that can go wrong happens here.
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

// ------------------------------- Errors ----------------------------------- //

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("glob pattern matched no files: {0}")]
    NoMatch(String),
    #[error(transparent)]
    Glob(#[from] glob::GlobError),
    #[error("JSON pointer `{pointer}` does not resolve in {origin}")]
    Pointer { pointer: String, origin: String },
    #[error("jq filter failed on {origin}: {message}")]
    Jq { origin: String, message: String },
    #[error("invalid settings file {}: {message}", .path.display())]
    Settings { path: PathBuf, message: String },
}

// ------------------------------- Types ------------------------------------ //

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.to_string_lossy().to_string(),
        }
    }
}

/// One JSON value to generate from, with where it came from.
#[derive(Debug, Clone)]
pub struct Document {
    pub origin: String,
    pub value: Value,
}

/// Optional narrowing applied to each parsed input.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    pub json_pointer: Option<&'a str>,
    pub jq_expr: Option<&'a str>,
}

// ------------------------------- Loading ---------------------------------- //

pub fn load_documents<I>(patterns: I, selection: &Selection<'_>) -> Result<Vec<Document>, InputError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = Vec::new();
    for source in resolve_sources(patterns)? {
        let origin = source.label();
        let text = read_source(&source)?;
        let value = serde_json::from_str::<Value>(&text).map_err(|source| InputError::Json {
            origin: origin.clone(),
            source,
        })?;
        out.extend(select(Document { origin, value }, selection)?);
    }
    Ok(out)
}

/// Literal paths, glob patterns (must match something), or `-` for stdin.
pub fn resolve_sources<I>(patterns: I) -> Result<Vec<Source>, InputError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::new();
    for raw in patterns {
        let pattern = raw.as_ref();
        if pattern == "-" {
            out.push(Source::Stdin);
        } else if has_glob_chars(pattern) {
            let entries = glob::glob(pattern).map_err(|source| InputError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
            let before = out.len();
            for entry in entries {
                out.push(Source::File(entry?));
            }
            if out.len() == before {
                return Err(InputError::NoMatch(pattern.to_string()));
            }
        } else {
            out.push(Source::File(PathBuf::from(pattern)));
        }
    }
    Ok(out)
}

fn read_source(source: &Source) -> Result<String, InputError> {
    match source {
        Source::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(InputError::Stdin)?;
            Ok(buf)
        }
        Source::File(path) => read_file(path),
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Pointer first, then jq. A jq filter may yield several documents; they are
/// labelled `origin#0`, `origin#1`, ... when it does.
pub fn select(doc: Document, selection: &Selection<'_>) -> Result<Vec<Document>, InputError> {
    let Document { origin, mut value } = doc;

    if let Some(pointer) = selection.json_pointer {
        value = value
            .pointer(pointer)
            .cloned()
            .ok_or_else(|| InputError::Pointer { pointer: pointer.to_string(), origin: origin.clone() })?;
    }

    let Some(jq_expr) = selection.jq_expr else {
        return Ok(vec![Document { origin, value }]);
    };

    let outputs = crate::jq_exec::run_jaq(jq_expr, &value).map_err(|err| InputError::Jq {
        origin: origin.clone(),
        message: format!("{err:#}"),
    })?;
    if outputs.len() == 1 {
        return Ok(outputs.into_iter().map(|value| Document { origin: origin.clone(), value }).collect());
    }
    Ok(outputs
        .into_iter()
        .enumerate()
        .map(|(i, value)| Document { origin: format!("{origin}#{i}"), value })
        .collect())
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_glob_and_stdin_sources() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        let glob = format!("{}/*.json", dir.path().display());

        let sources = resolve_sources([glob.as_str(), "-", "literal.json"]).unwrap();
        assert_eq!(sources.len(), 4);
        assert_eq!(sources[2], Source::Stdin);
        assert_eq!(sources[3], Source::File(PathBuf::from("literal.json")));
    }

    #[test]
    fn glob_matching_nothing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let glob = format!("{}/*.json", dir.path().display());
        let err = resolve_sources([glob.as_str()]).unwrap_err();
        assert!(matches!(err, InputError::NoMatch(_)));
    }

    #[test]
    fn load_parses_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.json");
        std::fs::write(&path, r#"{"user": {"name": "x"}}"#).unwrap();
        let docs = load_documents([path.to_str().unwrap()], &Selection::default()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].value, json!({"user": {"name": "x"}}));
    }

    #[test]
    fn malformed_json_names_its_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"a\": ").unwrap();
        let err = load_documents([path.to_str().unwrap()], &Selection::default()).unwrap_err();
        assert!(matches!(err, InputError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_documents(["/definitely/not/here.json"], &Selection::default()).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }

    #[test]
    fn pointer_selects_subdocument() {
        let doc = Document { origin: "t".into(), value: json!({"data": {"items": [{"id": 1}]}}) };
        let selection = Selection { json_pointer: Some("/data/items/0"), jq_expr: None };
        let out = select(doc.clone(), &selection).unwrap();
        assert_eq!(out[0].value, json!({"id": 1}));

        let selection = Selection { json_pointer: Some("/nope"), jq_expr: None };
        assert!(matches!(select(doc, &selection), Err(InputError::Pointer { .. })));
    }

    #[test]
    fn jq_outputs_become_documents() {
        let doc = Document { origin: "t".into(), value: json!({"items": [{"id": 1}, {"id": 2}]}) };
        let selection = Selection { json_pointer: None, jq_expr: Some(".items[]") };
        let out = select(doc, &selection).unwrap();
        let origins: Vec<_> = out.iter().map(|d| d.origin.as_str()).collect();
        assert_eq!(origins, ["t#0", "t#1"]);
        assert_eq!(out[1].value, json!({"id": 2}));
    }
}
