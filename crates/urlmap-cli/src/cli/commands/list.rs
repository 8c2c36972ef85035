//! `urlmap list` – show every namespace and its base URL.

use anyhow::Result;
use std::io::Write;
use urlmap_core::NamespaceUrlResolver;

pub fn run_list(resolver: &NamespaceUrlResolver, out: &mut impl Write) -> Result<()> {
    if resolver.is_empty() {
        writeln!(out, "No namespaces in url map.")?;
        return Ok(());
    }
    let width = resolver
        .namespaces()
        .map(|ns| ns.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAMESPACE".len());
    writeln!(out, "{:<width$} {}", "NAMESPACE", "BASE URL")?;
    for entry in resolver.entries() {
        writeln!(out, "{:<width$} {}", entry.namespace, entry.base_url)?;
    }
    Ok(())
}
