//! Load and save url maps on disk.

use anyhow::{Context, Result};
use std::path::Path;

use crate::format::{self, MapFormat};
use crate::resolver::NamespaceUrlResolver;

fn resolve_format(path: &Path, format: Option<MapFormat>) -> Result<MapFormat> {
    match format {
        Some(f) => Ok(f),
        None => Ok(MapFormat::from_path(path)?),
    }
}

/// Reads, parses and validates a url map file.
///
/// When `format` is `None` it is inferred from the extension.
pub fn load_path(path: &Path, format: Option<MapFormat>) -> Result<NamespaceUrlResolver> {
    let format = resolve_format(path, format)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read url map: {}", path.display()))?;
    let entries = format::parse(&text, format)
        .with_context(|| format!("parse url map: {}", path.display()))?;
    let resolver = NamespaceUrlResolver::load(entries)
        .with_context(|| format!("invalid url map: {}", path.display()))?;
    tracing::info!(
        "loaded {} namespaces from {} ({})",
        resolver.len(),
        path.display(),
        format
    );
    Ok(resolver)
}

/// Writes the resolver's entry list to `path` (creates parent dir if needed).
pub fn save_path(resolver: &NamespaceUrlResolver, path: &Path, format: Option<MapFormat>) -> Result<()> {
    let format = resolve_format(path, format)?;
    let text = format::render(resolver.entries(), format).context("render url map")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write url map: {}", path.display()))?;
    tracing::debug!("wrote {} namespaces to {}", resolver.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, FormatError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_with(suffix: &str, body: &str) -> NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_script_by_extension() {
        let f = temp_with(".js", "baseURLs = [ [ 'GLib', 'https://docs.gtk.org/glib/' ] ]\n");
        let r = load_path(f.path(), None).unwrap();
        assert_eq!(r.lookup("GLib"), Some("https://docs.gtk.org/glib/"));
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let f = temp_with(".txt", r#"[["Gio", "https://docs.gtk.org/gio/"]]"#);
        assert!(load_path(f.path(), None).is_err());
        let r = load_path(f.path(), Some(MapFormat::Json)).unwrap();
        assert_eq!(r.lookup("Gio"), Some("https://docs.gtk.org/gio/"));
    }

    #[test]
    fn configuration_error_is_downcastable() {
        let f = temp_with(".json", r#"[["", "https://docs.gtk.org/gio/"]]"#);
        let err = load_path(f.path(), None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::EmptyNamespace { index: 0 })
        );
        assert!(format!("{err:#}").contains("invalid url map"));
    }

    #[test]
    fn syntax_error_is_downcastable() {
        let f = temp_with(".js", "baseURLs = [");
        let err = load_path(f.path(), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FormatError>(),
            Some(FormatError::Syntax { .. })
        ));
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_path(&path, None).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("urlmap.js");
        let r = NamespaceUrlResolver::load([("Dex", "https://gnome.pages.gitlab.gnome.org/libdex/")])
            .unwrap();
        save_path(&r, &path, None).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("// "));
        assert_eq!(load_path(&path, None).unwrap(), r);
    }
}
