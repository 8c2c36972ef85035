//! A single namespace → base URL pair.

use serde::{Deserialize, Serialize};

/// One row of the URL map.
///
/// On the wire every format stores an entry as a two-element array
/// `[namespace, base_url]`, so the serde representation goes through a tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Entry {
    /// Short identifier grouping documented symbols (e.g. a library name).
    pub namespace: String,
    /// Root address under which the namespace's pages are published.
    pub base_url: String,
}

impl Entry {
    pub fn new(namespace: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            base_url: base_url.into(),
        }
    }
}

impl From<(String, String)> for Entry {
    fn from((namespace, base_url): (String, String)) -> Self {
        Self {
            namespace,
            base_url,
        }
    }
}

impl From<Entry> for (String, String) {
    fn from(entry: Entry) -> Self {
        (entry.namespace, entry.base_url)
    }
}

impl From<(&str, &str)> for Entry {
    fn from((namespace, base_url): (&str, &str)) -> Self {
        Self::new(namespace, base_url)
    }
}
