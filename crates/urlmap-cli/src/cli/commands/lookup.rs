//! `urlmap lookup <namespace>...` – print base URLs.

use anyhow::Result;
use std::io::Write;
use urlmap_core::NamespaceUrlResolver;

/// Prints the base URL of each namespace to `out`; unknown ones are reported on `err`.
///
/// A single namespace prints the bare URL so the output can be used directly
/// in scripts; several print `namespace<TAB>url` lines. Returns false if any
/// namespace was not found.
pub fn run_lookup(
    resolver: &NamespaceUrlResolver,
    namespaces: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let mut all_found = true;
    for ns in namespaces {
        match resolver.lookup(ns) {
            Some(url) if namespaces.len() == 1 => writeln!(out, "{url}")?,
            Some(url) => writeln!(out, "{ns}\t{url}")?,
            None => {
                tracing::debug!(namespace = %ns, "namespace not in url map");
                writeln!(err, "no base URL for namespace '{ns}'")?;
                all_found = false;
            }
        }
    }
    Ok(all_found)
}
