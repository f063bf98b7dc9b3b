//! CLI command handlers.

mod cat;
mod exists;
mod paths;

pub use cat::run_cat;
pub use exists::run_exists;
pub use paths::{run_dirname, run_join, run_resolve};
