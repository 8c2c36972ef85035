//! Persisted url map formats.
//!
//! Every format stores the same thing: an ordered list of `[namespace, base_url]`
//! pairs. Parsing only checks shape; semantic checks (duplicates, URL syntax)
//! happen in [`NamespaceUrlResolver::load`](crate::resolver::NamespaceUrlResolver::load).

mod script;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::entry::Entry;
use crate::error::FormatError;

/// On-disk syntax of a url map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    /// `[["GLib", "https://docs.gtk.org/glib/"], ...]`
    Json,
    /// `namespaces = [["GLib", "https://docs.gtk.org/glib/"], ...]`
    Toml,
    /// `baseURLs = [ [ 'GLib', 'https://docs.gtk.org/glib/' ], ... ]` (urlmap.js)
    Script,
}

impl MapFormat {
    /// Infers the format from a file extension (`.json`, `.toml`, `.js`).
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(MapFormat::Json),
            Some("toml") => Ok(MapFormat::Toml),
            Some("js") => Ok(MapFormat::Script),
            _ => Err(FormatError::UnknownExtension(path.display().to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MapFormat::Json => "json",
            MapFormat::Toml => "toml",
            MapFormat::Script => "js",
        }
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MapFormat::Json => "json",
            MapFormat::Toml => "toml",
            MapFormat::Script => "script",
        };
        f.write_str(name)
    }
}

/// TOML has no top-level arrays, so the list lives under `namespaces`.
#[derive(Debug, Serialize, Deserialize)]
struct TomlMap {
    #[serde(default)]
    namespaces: Vec<Entry>,
}

/// Parses map text into its entry list.
pub fn parse(text: &str, format: MapFormat) -> Result<Vec<Entry>, FormatError> {
    let entries: Vec<Entry> = match format {
        MapFormat::Json => serde_json::from_str(text)?,
        MapFormat::Toml => toml::from_str::<TomlMap>(text)?.namespaces,
        MapFormat::Script => script::parse(text)?,
    };
    tracing::trace!(%format, entries = entries.len(), "parsed url map text");
    Ok(entries)
}

/// Renders an entry list in the given format, one entry per line.
pub fn render(entries: &[Entry], format: MapFormat) -> Result<String, FormatError> {
    match format {
        MapFormat::Json => {
            let mut out = String::from("[\n");
            for (i, entry) in entries.iter().enumerate() {
                out.push_str("  ");
                out.push_str(&serde_json::to_string(entry)?);
                if i + 1 < entries.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str("]\n");
            Ok(out)
        }
        MapFormat::Toml => {
            let map = TomlMap {
                namespaces: entries.to_vec(),
            };
            Ok(toml::to_string_pretty(&map)?)
        }
        MapFormat::Script => Ok(script::render(entries)),
    }
}
