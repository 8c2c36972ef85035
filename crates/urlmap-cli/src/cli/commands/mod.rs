//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod convert;
mod list;
mod lookup;
mod man;

pub use check::run_check;
pub use completions::run_completions;
pub use convert::run_convert;
pub use list::run_list;
pub use lookup::run_lookup;
pub use man::run_man;
