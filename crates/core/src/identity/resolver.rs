//! Core identity resolution logic.
//!
//! [`IdentityResolver`] answers "which destination-system user does this
//! source-system user become?" with a three-tier fallback: exact mapping
//! entry, wildcard default, then domain rewrite or identity passthrough.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::mapping_file::MappingFile;
use crate::config::IdentityConfig;
use crate::errors::IdentityError;

/// Mapping-table key that supplies a default identity for unmapped users.
const WILDCARD: &str = "*";

// ---------------------------------------------------------------------------
// DomainRule
// ---------------------------------------------------------------------------

/// A substring rewrite applied to usernames that have no explicit mapping.
///
/// Parsed from a `sourceDomain=destDomain` spec string, e.g.
/// `old-corp.com=contoso.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRule {
    /// Substring to replace in the source username.
    pub source: String,
    /// Replacement substring.
    pub dest: String,
}

impl DomainRule {
    /// Parse a `sourceDomain=destDomain` spec.
    ///
    /// Returns `None` unless splitting on the first `=` yields two
    /// non-empty trimmed parts; any other shape disables the rewrite tier.
    pub fn parse(spec: Option<&str>) -> Option<Self> {
        let spec = spec?;

        match spec.split_once('=') {
            Some((source, dest)) if !source.trim().is_empty() && !dest.trim().is_empty() => {
                Some(Self {
                    source: source.trim().to_string(),
                    dest: dest.trim().to_string(),
                })
            }
            _ => {
                debug!(spec, "malformed domain rule, domain rewrite disabled");
                None
            }
        }
    }

    /// Apply the rewrite to a username, replacing every occurrence.
    fn apply(&self, user: &str) -> String {
        user.replace(&self.source, &self.dest)
    }
}

// ---------------------------------------------------------------------------
// IdentityResolver
// ---------------------------------------------------------------------------

/// Resolves source-system usernames to destination-system usernames.
///
/// The mapping table doubles as a memoization cache: fallback decisions
/// (domain rewrite, identity passthrough) are written back so the next
/// lookup for the same user is a plain table hit. The cache is unbounded,
/// lives as long as the resolver, and is never persisted back to disk.
///
/// `resolve_user` takes `&mut self` because of that write-back. The
/// resolver provides no synchronization of its own; callers sharing one
/// across threads must wrap it in a lock.
#[derive(Debug)]
pub struct IdentityResolver {
    /// Source username -> destination username. Loaded from the mapping
    /// file, then grown by memoized fallback decisions.
    mapping: HashMap<String, String>,
    /// The raw `sourceDomain=destDomain` spec, kept verbatim.
    domain_spec: Option<String>,
    /// Lazily parsed domain rule. Outer `None` until the first fallback
    /// lookup needs it.
    domain_rule: Option<Option<DomainRule>>,
}

impl IdentityResolver {
    /// Create a resolver, loading the mapping file if one is given.
    ///
    /// A missing file yields an empty table; only a real read failure on an
    /// existing file is an error.
    pub fn new(
        mapping_file: Option<&Path>,
        domain_rule: Option<String>,
    ) -> Result<Self, IdentityError> {
        let mapping = match mapping_file {
            Some(path) => MappingFile::load(path)?,
            None => {
                debug!("no identity mapping file configured");
                HashMap::new()
            }
        };

        Ok(Self {
            mapping,
            domain_spec: domain_rule,
            domain_rule: None,
        })
    }

    /// Create a resolver from the `[identity]` config section.
    pub fn from_config(config: &IdentityConfig) -> Result<Self, IdentityError> {
        Self::new(config.mapping_file.as_deref(), config.domain_rule.clone())
    }

    /// Resolve a source-system username to its destination-system identity.
    ///
    /// `None` passes through untouched. Otherwise the tiers are tried in
    /// order: exact mapping entry, wildcard `*` default, domain rewrite,
    /// identity passthrough. The last two memoize their result under the
    /// original username.
    pub fn resolve_user(&mut self, source_user: Option<&str>) -> Option<String> {
        let user = source_user?;

        if let Some(dest) = self.mapping.get(user) {
            return Some(dest.clone());
        }

        if let Some(default) = self.mapping.get(WILDCARD) {
            debug!(user, default = %default, "no identity mapping found, using default identity");
            return Some(default.clone());
        }

        let dest = match self.domain_rule() {
            Some(rule) => {
                let dest = rule.apply(user);
                debug!(user, dest = %dest, "derived identity via domain rewrite");
                dest
            }
            None => {
                debug!(user, "no identity mapping found, keeping original identity");
                user.to_string()
            }
        };

        self.mapping.insert(user.to_string(), dest.clone());
        Some(dest)
    }

    /// Number of entries in the mapping table, file entries plus memoized
    /// fallback decisions.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// `true` if `user` already has a table entry, explicit or memoized.
    pub fn is_cached(&self, user: &str) -> bool {
        self.mapping.contains_key(user)
    }

    /// Parse the domain-rule spec on first use and cache the outcome, so a
    /// malformed spec is reported once rather than per lookup.
    fn domain_rule(&mut self) -> Option<&DomainRule> {
        if self.domain_rule.is_none() {
            self.domain_rule = Some(DomainRule::parse(self.domain_spec.as_deref()));
        }
        self.domain_rule.as_ref().and_then(|rule| rule.as_ref())
    }
}
