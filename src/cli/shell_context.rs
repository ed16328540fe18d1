//! Shared state for one CLI run.

use crate::core::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Holds the live session plus loop state for the shell.
pub struct ShellContext {
    pub session: Session,
    pub mode: CliMode,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self {
            session: Session::new(),
            mode,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        "planner> ".to_string()
    }

    pub fn command_names() -> Vec<&'static str> {
        vec![
            "task",
            "money",
            "event",
            "diary",
            "dashboard",
            "export",
            "help",
            "exit",
            "quit",
        ]
    }

    /// Second-token completions for each top-level command.
    pub fn subcommands(command: &str) -> &'static [&'static str] {
        match command {
            "task" => &["add", "list", "done", "rm"],
            "money" => &["add", "list", "summary", "rm"],
            "event" => &["add", "day", "week", "rm"],
            "diary" => &["add", "edit", "list", "search", "fav", "rm"],
            _ => &[],
        }
    }
}
