//! CLI command handlers, one per file.

mod completions;
mod lookup;
mod serve;

pub use completions::{run_completions, run_man};
pub use lookup::run_lookup;
pub use serve::{run_serve, ServeArgs};
