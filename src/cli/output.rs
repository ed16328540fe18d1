//! Colored message helpers shared by the CLI commands.

use std::fmt;

use colored::Colorize;

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[✓]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

pub fn section(title: impl fmt::Display) {
    println!("\n{}", title.to_string().bold());
}

/// One indented line of a listing, prefixed by the short id column.
pub fn item(short_id: &str, line: impl fmt::Display) {
    println!("  {}  {}", short_id.dimmed(), line);
}
