//! Destination field mappings.
//!
//! A [`FieldMapping`] tells a mapper how to populate destination work-item
//! fields from a source revision: each entry pairs a destination field name
//! with a function computing that field's value. The mappers for links,
//! attachments, history, and so on each contribute a partial mapping;
//! [`merge_field_mappings`] combines them into the one used per revision.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// Computes a destination field value from a source revision.
pub type FieldCompute<R> = Box<dyn Fn(&R) -> Value>;

/// Mapping from destination field name to the function computing its value.
pub struct FieldMapping<R> {
    fields: HashMap<String, FieldCompute<R>>,
}

impl<R> FieldMapping<R> {
    /// Create an empty field mapping.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Register a compute function for `field`, replacing any existing one.
    pub fn insert<F>(&mut self, field: impl Into<String>, compute: F)
    where
        F: Fn(&R) -> Value + 'static,
    {
        self.fields.insert(field.into(), Box::new(compute));
    }

    /// The compute function registered for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldCompute<R>> {
        self.fields.get(field)
    }

    /// `true` if a compute function is registered for `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of mapped fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` if no fields are mapped.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field name, compute function)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldCompute<R>)> + '_ {
        self.fields.iter().map(|(name, compute)| (name.as_str(), compute))
    }

    /// Compute the value of `field` for `revision`, if the field is mapped.
    pub fn compute(&self, field: &str, revision: &R) -> Option<Value> {
        self.fields.get(field).map(|compute| compute(revision))
    }
}

impl<R> Default for FieldMapping<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for FieldMapping<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FieldMapping").field("fields", &names).finish()
    }
}

/// Merge partial field mappings into one.
///
/// Keys are taken in argument order; the first mapping to define a field
/// wins, and later definitions of an already-seen field are ignored.
pub fn merge_field_mappings<R>(
    mappings: impl IntoIterator<Item = FieldMapping<R>>,
) -> FieldMapping<R> {
    let mut merged = FieldMapping::new();
    for mapping in mappings {
        for (field, compute) in mapping.fields {
            merged.fields.entry(field).or_insert(compute);
        }
    }
    merged
}
