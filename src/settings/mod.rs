//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it layers default config files,
//! explicit `--config` files, environment variables and CLI flags, then
//! returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{ResolvedConfig, Selection};
