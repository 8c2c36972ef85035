//! `urlmap check <path>` – validate a url map file.

use anyhow::Result;
use std::path::Path;
use urlmap_core::map_file;
use urlmap_core::MapFormat;

pub fn run_check(path: &Path, format: Option<MapFormat>) -> Result<()> {
    let resolver = map_file::load_path(path, format)?;
    println!("{}: ok, {} namespaces", path.display(), resolver.len());
    Ok(())
}
