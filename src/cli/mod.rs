//! Command line interface.

pub mod commands;

pub use commands::{is_verbose, run};
