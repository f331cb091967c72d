use serde::de::DeserializeOwned;

/// Deserialize with JSON-path context in error messages.
///
/// Used for settings files, where "which key was wrong" matters more than
/// line/column.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut *de).map_err(|err| {
        let path = err.path().to_string();
        format!("at JSON path {path} → {}", err.into_inner())
    })?;
    de.end().map_err(|err| format!("trailing input → {err}"))?;
    Ok(value)
}
