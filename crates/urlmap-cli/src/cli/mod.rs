//! CLI for the urlmap documentation base URL resolver.

mod commands;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use urlmap_core::config::{self, UrlMapConfig};
use urlmap_core::MapFormat;

use commands::{run_check, run_completions, run_convert, run_list, run_lookup, run_man};
use source::MapSource;

/// Top-level CLI for urlmap.
#[derive(Debug, Parser)]
#[command(name = "urlmap", version)]
#[command(about = "urlmap: resolve documentation namespaces to base URLs", long_about = None)]
pub struct Cli {
    /// Url map file to use instead of the configured one or the built-in table.
    #[arg(long, global = true, value_name = "PATH")]
    pub map: Option<PathBuf>,

    /// Format of the --map file (default: inferred from its extension).
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub map_format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Map file syntax as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Toml,
    /// urlmap.js (`baseURLs = [...]`)
    Script,
}

impl From<FormatArg> for MapFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => MapFormat::Json,
            FormatArg::Toml => MapFormat::Toml,
            FormatArg::Script => MapFormat::Script,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the documentation base URL of each namespace.
    Lookup {
        /// Namespace identifiers (exact, case-sensitive).
        #[arg(required = true)]
        namespaces: Vec<String>,
    },

    /// List every namespace and its base URL.
    List,

    /// Validate a url map file.
    Check {
        /// Path to the url map file.
        path: PathBuf,

        /// Format of the file (default: inferred from its extension).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Convert a url map file to another format.
    Convert {
        /// Path to the url map file.
        path: PathBuf,

        /// Target format.
        #[arg(long, value_enum)]
        to: FormatArg,

        /// Source format (default: inferred from its extension).
        #[arg(long, value_enum)]
        from: Option<FormatArg>,

        /// Write to this file instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        run(cli, configured)
    }
}

/// Reads the user config and the directory it lives in.
fn configured() -> Result<(UrlMapConfig, Option<PathBuf>)> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let config_dir = config::config_path()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    Ok((cfg, config_dir))
}

/// Dispatches a parsed command line. Returns false when a lookup missed a namespace.
///
/// `load_config` is only called by commands that read a map and only when
/// `--map` is absent; the other commands never touch the config file.
pub fn run<F>(cli: Cli, load_config: F) -> Result<bool>
where
    F: FnOnce() -> Result<(UrlMapConfig, Option<PathBuf>)>,
{
    let map_format = cli.map_format.map(MapFormat::from);

    match cli.command {
        CliCommand::Lookup { namespaces } => {
            let resolver = MapSource::select(cli.map, map_format, load_config)?.open()?;
            return run_lookup(
                &resolver,
                &namespaces,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            );
        }
        CliCommand::List => {
            let resolver = MapSource::select(cli.map, map_format, load_config)?.open()?;
            run_list(&resolver, &mut std::io::stdout().lock())?;
        }
        CliCommand::Check { path, format } => run_check(&path, format.map(MapFormat::from))?,
        CliCommand::Convert {
            path,
            to,
            from,
            output,
        } => run_convert(
            &path,
            from.map(MapFormat::from),
            to.into(),
            output.as_deref(),
        )?,
        CliCommand::Completions { shell } => run_completions(shell),
        CliCommand::Man => run_man()?,
    }

    Ok(true)
}

/// Process exit status: 0 on success, 1 if a namespace was not found, 2 on any error.
pub fn exit_code(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

#[cfg(test)]
mod tests;
