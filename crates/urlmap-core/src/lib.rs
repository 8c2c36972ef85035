pub mod config;
pub mod logging;

pub mod builtin;
pub mod entry;
pub mod error;
pub mod format;
pub mod map_file;
pub mod resolver;

pub use entry::Entry;
pub use error::{ConfigurationError, FormatError};
pub use format::MapFormat;
pub use resolver::NamespaceUrlResolver;
