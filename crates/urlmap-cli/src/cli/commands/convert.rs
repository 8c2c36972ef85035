//! `urlmap convert <path> --to <format>` – re-render a url map in another syntax.

use anyhow::Result;
use std::path::Path;
use urlmap_core::{format, map_file, MapFormat};

/// The input is fully validated before anything is written.
pub fn run_convert(
    path: &Path,
    from: Option<MapFormat>,
    to: MapFormat,
    output: Option<&Path>,
) -> Result<()> {
    let resolver = map_file::load_path(path, from)?;
    match output {
        Some(out) => {
            map_file::save_path(&resolver, out, Some(to))?;
            println!("Wrote {} namespaces to {} ({to})", resolver.len(), out.display());
        }
        None => print!("{}", format::render(resolver.entries(), to)?),
    }
    Ok(())
}
