//! Options for one generation run.
use std::path::Path;

use serde::Deserialize;

use crate::case::DEFAULT_MODEL_NAME;
use crate::input::InputError;

/// Controls the shape of the emitted models.
///
/// Loadable from a JSON settings file (kebab-case keys, every key optional):
///
/// ```json
/// { "root-name": "Order", "optional-fields": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerateOptions {
    /// Name of the root declaration.
    pub root_name: String,
    /// Emit every field as `T | None` defaulting to `None`.
    pub optional_fields: bool,
    /// Rename camelCase keys to snake_case and alias the original key.
    pub normalize_camel_case: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_MODEL_NAME.to_string(),
            optional_fields: false,
            normalize_camel_case: false,
        }
    }
}

impl GenerateOptions {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let source = std::fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        crate::path_de::from_str_with_path(&source).map_err(|message| InputError::Settings {
            path: path.to_path_buf(),
            message,
        })
    }
}
