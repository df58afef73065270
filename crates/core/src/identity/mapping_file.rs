//! Plain-text identity mapping file reader.
//!
//! The mapping file format, one mapping per line:
//!
//! ```text
//! jdoe = john.doe@contoso.com
//! alice=alice.smith@contoso.com
//! * = migration.bot@contoso.com
//! ```
//!
//! Whitespace around each side is trimmed. A `*` key is the wildcard
//! default returned when no exact entry matches.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::IdentityError;

/// Utilities for loading the identity mapping file.
pub struct MappingFile;

impl MappingFile {
    /// Load the mapping file from disk and return the identity map.
    ///
    /// A missing file is not an error: migrations routinely run without an
    /// explicit user mapping, so this returns an empty map. Lines with no
    /// `=`, or with an empty left-hand side after trimming, are skipped
    /// with a warning. Duplicate keys keep the last occurrence.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, IdentityError> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "mapping file not found, starting with empty map");
            return Ok(HashMap::new());
        }

        let contents =
            std::fs::read_to_string(path).map_err(|e| IdentityError::MappingFileError {
                path: path.display().to_string(),
                detail: e.to_string(),
            })?;

        let map = Self::parse(&contents);
        debug!(path = %path.display(), count = map.len(), "loaded identity mappings");
        Ok(map)
    }

    /// Parse mapping-file contents into an identity map.
    pub(crate) fn parse(contents: &str) -> HashMap<String, String> {
        let mut map = HashMap::new();

        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match line.split_once('=') {
                Some((source, dest)) if !source.trim().is_empty() => {
                    map.insert(source.trim().to_string(), dest.trim().to_string());
                }
                _ => {
                    warn!(line = idx + 1, "skipping malformed identity mapping line");
                }
            }
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_mapping_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");

        let content = "jdoe = john.doe@contoso.com\nalice=alice.smith@contoso.com\n";
        std::fs::write(&path, content).unwrap();

        let mappings = MappingFile::load(&path).unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings["jdoe"], "john.doe@contoso.com");
        assert_eq!(mappings["alice"], "alice.smith@contoso.com");
    }

    #[test]
    fn test_load_nonexistent_is_empty() {
        let mappings = MappingFile::load("/nonexistent/users.txt").unwrap();
        assert!(mappings.is_empty());
    }

    #[test]
    fn test_whitespace_trimmed_on_both_sides() {
        let map = MappingFile::parse("  jdoe\t =  john.doe@contoso.com  \n");
        assert_eq!(map["jdoe"], "john.doe@contoso.com");
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let content = "jdoe = john.doe@contoso.com\nnot a mapping\n = orphan\nalice = alice@contoso.com\n";
        let map = MappingFile::parse(content);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("jdoe"));
        assert!(map.contains_key("alice"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let map = MappingFile::parse("\n\njdoe = x\n   \n");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let map = MappingFile::parse("jdoe = first\njdoe = second\n");
        assert_eq!(map["jdoe"], "second");
    }

    #[test]
    fn test_value_may_contain_equals() {
        // Split happens on the first `=` only.
        let map = MappingFile::parse("jdoe = DOMAIN=contoso;user=jd\n");
        assert_eq!(map["jdoe"], "DOMAIN=contoso;user=jd");
    }

    #[test]
    fn test_empty_file() {
        let map = MappingFile::parse("");
        assert!(map.is_empty());
    }
}
