//! Utility Functions
//!
//! Naming helpers shared across the generator.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for dash-case segment boundaries
static DASH_CASE_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+([a-z0-9])").unwrap());

/// Convert dash-case to PascalCase
pub fn dash_case_to_pascal_case(input: &str) -> String {
    let camel = DASH_CASE_REGEXP
        .replace_all(input, |caps: &regex::Captures| {
            caps.get(1).unwrap().as_str().to_uppercase()
        })
        .to_string();

    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => camel,
    }
}

/// Semantic version split from its printed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub full: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl Version {
    pub fn new(full: &str) -> Self {
        let mut parts = full.split('.');
        let major = parts.next().unwrap_or("").to_string();
        let minor = parts.next().unwrap_or("").to_string();
        let patch = parts.collect::<Vec<_>>().join(".");
        Version {
            full: full.to_string(),
            major,
            minor,
            patch,
        }
    }
}
