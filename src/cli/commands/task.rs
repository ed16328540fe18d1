//! `task` subcommands: add, list, done, rm.

use chrono::{DateTime, Utc};

use crate::cli::commands::{parse_date, resolve_id, short_id, split_flags};
use crate::cli::output;
use crate::core::session::Session;
use crate::domain::task::{TaskCategory, TaskFilter, TaskPriority};

pub fn run(session: &mut Session, args: &[&str]) {
    match args.split_first() {
        Some((&"add", rest)) => add(session, rest),
        Some((&"list", rest)) => list(session, rest),
        Some((&"done", rest)) => done(session, rest),
        Some((&"rm", rest)) => remove(session, rest),
        _ => output::warning("Usage: task add|list|done|rm ..."),
    }
}

fn add(session: &mut Session, args: &[&str]) {
    let (positional, flags) = match split_flags(args) {
        Ok(parts) => parts,
        Err(message) => return output::warning(message),
    };
    if positional.is_empty() {
        return output::warning(
            "Usage: task add <title> [--desc D] [--category C] [--priority P] [--due YYYY-MM-DD]",
        );
    }
    let title = positional.join(" ");

    let category = match flags.get("category") {
        Some(raw) => match raw.parse::<TaskCategory>() {
            Ok(category) => category,
            Err(err) => return output::warning(err),
        },
        None => TaskCategory::default(),
    };
    let priority = match flags.get("priority") {
        Some(raw) => match raw.parse::<TaskPriority>() {
            Ok(priority) => priority,
            Err(err) => return output::warning(err),
        },
        None => TaskPriority::default(),
    };
    let due_date: Option<DateTime<Utc>> = match flags.get("due") {
        Some(raw) => match parse_date(raw) {
            Ok(date) => date.and_hms_opt(0, 0, 0).map(|at| at.and_utc()),
            Err(message) => return output::warning(message),
        },
        None => None,
    };
    let description = flags.get("desc").map(|raw| raw.to_string());

    match session
        .tasks
        .add(&title, description, category, priority, due_date)
    {
        Ok(id) => output::success(format!("Task `{title}` added ({})", short_id(&id))),
        Err(err) => output::warning(err),
    }
}

fn list(session: &Session, args: &[&str]) {
    let filter = match args.first() {
        Some(raw) => match raw.parse::<TaskFilter>() {
            Ok(filter) => filter,
            Err(err) => return output::warning(err),
        },
        None => TaskFilter::All,
    };

    let tasks = session.tasks.filter(filter);
    if tasks.is_empty() {
        return output::info(format!("No {} tasks.", filter.to_string().to_lowercase()));
    }
    output::section(format!("Tasks ({filter})"));
    for task in tasks {
        let check = if task.completed { "[x]" } else { "[ ]" };
        let due = task
            .due_date
            .map(|at| format!("  due {}", at.format("%Y-%m-%d")))
            .unwrap_or_default();
        output::item(
            short_id(&task.id),
            format!(
                "{check} {}  ({}, {}){due}",
                task.title, task.category, task.priority
            ),
        );
    }
}

fn done(session: &mut Session, args: &[&str]) {
    let Some(raw) = args.first() else {
        return output::warning("Usage: task done <id>");
    };
    let Some(id) = resolve_id(session.tasks.snapshot(), raw) else {
        return output::warning(format!("No task matches `{raw}`"));
    };
    match session.tasks.toggle_complete(&id) {
        Ok(()) => {
            let completed = session.tasks.get(&id).map(|task| task.completed);
            let state = if completed == Some(true) { "done" } else { "pending" };
            output::success(format!("Task {} marked {state}.", short_id(&id)));
        }
        Err(err) => output::warning(err),
    }
}

fn remove(session: &mut Session, args: &[&str]) {
    let Some(raw) = args.first() else {
        return output::warning("Usage: task rm <id>");
    };
    let Some(id) = resolve_id(session.tasks.snapshot(), raw) else {
        return output::warning(format!("No task matches `{raw}`"));
    };
    match session.tasks.delete(&id) {
        Ok(()) => output::success(format!("Task {} removed.", short_id(&id))),
        Err(err) => output::warning(err),
    }
}
