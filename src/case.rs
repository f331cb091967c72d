//! Identifier casing: model names (TitleCase) and field names (snake_case).
use once_cell::sync::Lazy;
use regex::Regex;

/// Name used for the root declaration and for empty identifiers.
pub const DEFAULT_MODEL_NAME: &str = "MyModel";

// any char followed by a capitalized word: `HTTPServer` → `HTTP Server`
static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());
// lower/digit followed by upper: `userId` → `user Id`
static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

fn split_humps(name: &str, sep: &str) -> String {
    let with = format!("${{1}}{sep}${{2}}");
    let s1 = CAPITALIZED_WORD.replace_all(name, with.as_str());
    LOWER_UPPER.replace_all(&s1, with.as_str()).into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn to_title_case(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_MODEL_NAME.to_string();
    }
    if name.contains(['_', '-', ' ']) {
        name.split(['_', '-', ' ']).map(capitalize).collect()
    } else {
        split_humps(name, " ").split(' ').map(capitalize).collect()
    }
}

pub fn to_snake_case(name: &str) -> String {
    split_humps(name, "_").to_lowercase()
}

/// `fooBar` yes; `FooBar`, `foo_bar`, `foo-bar`, `foo` no.
pub fn is_camel_case(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.contains(|c: char| c.is_ascii_uppercase())
        && !name.contains(['_', ' ', '-'])
}
