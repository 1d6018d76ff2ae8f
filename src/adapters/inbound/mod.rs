mod cli;

pub use cli::{resolve_target, run, CliArgs};
