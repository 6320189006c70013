//! Command-line interface module.

mod args;
pub mod artifact;
pub mod head;
pub mod serve;

pub use args::{Cli, Commands, OutputArgs};
