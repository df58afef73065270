//! Bundled text resources.
//!
//! Small text assets compiled into the binary and addressed by name, so the
//! mappers can ship default documents without depending on files installed
//! next to the executable.

use tracing::debug;

use crate::errors::ResourceError;

/// Name-addressed registry of bundled text resources.
static EMBEDDED_TEXT: &[(&str, &str)] = &[
    (
        "users.example.txt",
        include_str!("resources/users.example.txt"),
    ),
    (
        "field-map.default.json",
        include_str!("resources/field-map.default.json"),
    ),
];

/// Look up a bundled text resource by name.
///
/// Returns [`ResourceError::NotFound`] when no resource carries `name`.
pub fn load_embedded_text(name: &str) -> Result<&'static str, ResourceError> {
    match EMBEDDED_TEXT.iter().copied().find(|(entry, _)| *entry == name) {
        Some((_, contents)) => {
            debug!(name, len = contents.len(), "loaded embedded resource");
            Ok(contents)
        }
        None => Err(ResourceError::NotFound {
            name: name.to_string(),
        }),
    }
}

/// Names of every bundled resource, for diagnostics.
pub fn embedded_names() -> impl Iterator<Item = &'static str> {
    EMBEDDED_TEXT.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_known_resource() {
        let contents = load_embedded_text("users.example.txt").unwrap();
        assert!(contents.contains('='));
    }

    #[test]
    fn test_load_unknown_resource() {
        let result = load_embedded_text("does-not-exist.txt");
        assert!(matches!(result, Err(ResourceError::NotFound { name }) if name == "does-not-exist.txt"));
    }

    #[test]
    fn test_every_registered_name_loads() {
        for name in embedded_names() {
            assert!(load_embedded_text(name).is_ok(), "resource {name} missing");
        }
    }

    #[test]
    fn test_default_field_map_is_valid_json() {
        let contents = load_embedded_text("field-map.default.json").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(contents).unwrap();
        assert!(parsed["fields"].is_array());
    }
}
