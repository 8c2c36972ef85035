//! Built-in url map: the namespaces referenced by the project's own API docs.

use std::sync::OnceLock;

use crate::resolver::NamespaceUrlResolver;

/// Static table, in the order the documentation build lists it.
pub const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("Dex", "https://gnome.pages.gitlab.gnome.org/libdex/"),
    ("GLib", "https://docs.gtk.org/glib/"),
    ("GObject", "https://docs.gtk.org/gobject/"),
    ("Gio", "https://docs.gtk.org/gio/"),
];

/// Process-wide resolver over [`BUILTIN_ENTRIES`], built on first use and never mutated.
pub fn builtin() -> &'static NamespaceUrlResolver {
    static BUILTIN: OnceLock<NamespaceUrlResolver> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        NamespaceUrlResolver::load(BUILTIN_ENTRIES.iter().copied())
            .expect("built-in url map must be valid")
    })
}
