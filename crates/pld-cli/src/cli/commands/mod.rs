//! CLI command handlers.

mod resolve;

pub use resolve::{run_resolve, Scope};
