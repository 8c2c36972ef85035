//! Namespace → documentation base URL lookup.
//!
//! The resolver is built once from an entry list and never mutated afterward;
//! it is `Send + Sync` and can be shared by reference or behind an `Arc`.

mod validate;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entry::Entry;
use crate::error::ConfigurationError;

pub(crate) use validate::validate_base_url;

/// Immutable table of namespace → base URL pairs.
///
/// Serializes as its entry list and deserializes through [`load`](Self::load),
/// so a malformed persisted table never yields a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Entry>", into = "Vec<Entry>")]
pub struct NamespaceUrlResolver {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl NamespaceUrlResolver {
    /// Builds a resolver from an ordered entry list.
    ///
    /// Fails on the first entry (in input order) whose namespace is empty or
    /// already present, or whose base URL is not an absolute URL with a host.
    /// Nothing is returned on failure.
    pub fn load<I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        let mut table: Vec<Entry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, item) in entries.into_iter().enumerate() {
            let entry: Entry = item.into();
            if entry.namespace.is_empty() {
                return Err(ConfigurationError::EmptyNamespace { index: i });
            }
            if let Some(&first) = index.get(&entry.namespace) {
                return Err(ConfigurationError::DuplicateNamespace {
                    namespace: entry.namespace,
                    first,
                    duplicate: i,
                });
            }
            if let Err(reason) = validate_base_url(&entry.base_url) {
                return Err(ConfigurationError::InvalidUrl {
                    namespace: entry.namespace,
                    url: entry.base_url,
                    reason,
                });
            }
            index.insert(entry.namespace.clone(), table.len());
            table.push(entry);
        }

        tracing::debug!(namespaces = table.len(), "url map loaded");
        Ok(Self {
            entries: table,
            index,
        })
    }

    /// Base URL configured for `namespace`, or `None` if there is no such entry.
    ///
    /// Matching is exact and case-sensitive.
    pub fn lookup(&self, namespace: &str) -> Option<&str> {
        self.index
            .get(namespace)
            .map(|&i| self.entries[i].base_url.as_str())
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.index.contains_key(namespace)
    }

    /// Entries in the order they were loaded.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Owned entry-list form; feeding it back to [`load`](Self::load) yields an equal resolver.
    pub fn to_entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.namespace.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<Entry>> for NamespaceUrlResolver {
    type Error = ConfigurationError;

    fn try_from(entries: Vec<Entry>) -> Result<Self, Self::Error> {
        Self::load(entries)
    }
}

impl From<NamespaceUrlResolver> for Vec<Entry> {
    fn from(resolver: NamespaceUrlResolver) -> Self {
        resolver.entries
    }
}
