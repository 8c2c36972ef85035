//! Which url map a command reads: `--map`, then the configured file, then the built-in table.

use anyhow::Result;
use std::borrow::Cow;
use std::path::PathBuf;
use urlmap_core::builtin::builtin;
use urlmap_core::config::UrlMapConfig;
use urlmap_core::map_file;
use urlmap_core::{MapFormat, NamespaceUrlResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    Builtin,
    File {
        path: PathBuf,
        format: Option<MapFormat>,
    },
}

impl MapSource {
    /// `load_config` yields the user config and its directory; it is not called when `--map` is given.
    /// A relative `map_path` from the config file is taken relative to the config directory.
    pub fn select<F>(map: Option<PathBuf>, map_format: Option<MapFormat>, load_config: F) -> Result<Self>
    where
        F: FnOnce() -> Result<(UrlMapConfig, Option<PathBuf>)>,
    {
        if let Some(path) = map {
            return Ok(MapSource::File {
                path,
                format: map_format,
            });
        }
        let (cfg, config_dir) = load_config()?;
        let source = match cfg.map_path {
            Some(path) => {
                let path = match config_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                };
                MapSource::File {
                    path,
                    format: cfg.format,
                }
            }
            None => MapSource::Builtin,
        };
        Ok(source)
    }

    /// Loads the selected map once; commands only ever see it by reference.
    pub fn open(&self) -> Result<Cow<'static, NamespaceUrlResolver>> {
        match self {
            MapSource::Builtin => {
                tracing::debug!("using built-in url map");
                Ok(Cow::Borrowed(builtin()))
            }
            MapSource::File { path, format } => {
                Ok(Cow::Owned(map_file::load_path(path, *format)?))
            }
        }
    }
}
