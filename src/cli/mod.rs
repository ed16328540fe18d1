pub mod commands;
pub mod output;
pub mod shell;
pub mod shell_context;

pub use shell::run_cli;
