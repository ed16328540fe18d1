//! Command dispatch and the cross-cutting `dashboard`, `export`, and `help`
//! commands. Feature commands live in one module per store.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::core::session::Session;
use crate::core::summary::SummaryService;
use crate::domain::{DiaryEntry, EntityId, Event, Identifiable, Task, Transaction};

pub mod diary;
pub mod event;
pub mod money;
pub mod task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub fn dispatch(context: &mut ShellContext, command: &str, args: &[&str]) -> LoopControl {
    let session = &mut context.session;
    match command {
        "task" => task::run(session, args),
        "money" => money::run(session, args),
        "event" => event::run(session, args),
        "diary" => diary::run(session, args),
        "dashboard" => run_dashboard(session),
        "export" => run_export(session),
        "help" => print_help(),
        "exit" | "quit" => return LoopControl::Exit,
        other => output::warning(format!(
            "Unknown command `{other}`. Type `help` for the command list."
        )),
    }
    LoopControl::Continue
}

fn run_dashboard(session: &Session) {
    let summary = SummaryService::dashboard(session);
    output::section("Dashboard");
    output::info(format!("Pending tasks: {}", summary.pending_tasks));
    output::info(format!("Balance: {:.2}", summary.balance));
    output::info(format!("Events today: {}", summary.events_today));
    output::info(format!("Diary entries: {}", summary.diary_entries));

    let schedule = SummaryService::today_schedule(session);
    if !schedule.is_empty() {
        output::section("Today's schedule");
        for event in schedule {
            output::item(
                short_id(event.id()),
                format!("{}  {} ({} min)", event.time, event.title, event.duration_minutes),
            );
        }
    }
}

#[derive(Serialize)]
struct ExportSnapshot<'a> {
    tasks: &'a [Task],
    transactions: &'a [Transaction],
    events: &'a [Event],
    entries: &'a [DiaryEntry],
}

/// Prints the whole session as pretty JSON on stdout. Nothing touches disk.
fn run_export(session: &Session) {
    let snapshot = ExportSnapshot {
        tasks: session.tasks.snapshot(),
        transactions: session.transactions.snapshot(),
        events: session.events.snapshot(),
        entries: session.entries.snapshot(),
    };
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => output::error(format!("Export failed: {err}")),
    }
}

fn print_help() {
    output::section("Commands");
    for line in [
        "task add <title> [--desc D] [--category C] [--priority P] [--due YYYY-MM-DD]",
        "task list [all|pending|completed] | task done <id> | task rm <id>",
        "money add <income|expense> <amount> <category> [description] | money list",
        "money summary | money rm <id>",
        "event add <YYYY-MM-DD> <HH:MM> <title> [--minutes N] [--desc D]",
        "event day [YYYY-MM-DD] | event week [YYYY-MM-DD] | event rm <id>",
        "diary add <title> <content> [--mood M] | diary edit <id> <title> <content> [--mood M]",
        "diary list | diary search <term> | diary fav <id> | diary rm <id>",
        "dashboard | export | help | exit",
    ] {
        println!("  {line}");
    }
}

/// Splits args into positional tokens and `--flag value` pairs.
pub(crate) fn split_flags<'a>(
    args: &[&'a str],
) -> Result<(Vec<&'a str>, HashMap<&'a str, &'a str>), String> {
    let mut positional = Vec::new();
    let mut flags = HashMap::new();
    let mut iter = args.iter();
    while let Some(token) = iter.next() {
        if let Some(name) = token.strip_prefix("--") {
            let value = iter
                .next()
                .ok_or_else(|| format!("Flag `--{name}` expects a value"))?;
            flags.insert(name, *value);
        } else {
            positional.push(*token);
        }
    }
    Ok((positional, flags))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("`{raw}` is not a YYYY-MM-DD date"))
}

/// Resolves a full id or a unique id prefix against a snapshot.
pub(crate) fn resolve_id<T: Identifiable>(items: &[T], raw: &str) -> Option<EntityId> {
    if let Some(item) = items.iter().find(|item| item.id().as_str() == raw) {
        return Some(item.id().clone());
    }
    let mut matches = items.iter().filter(|item| item.id().as_str().starts_with(raw));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Some(item.id().clone()),
        _ => None,
    }
}

/// First eight characters of an id, enough to disambiguate UUIDs in listings.
pub(crate) fn short_id(id: &EntityId) -> &str {
    id.as_str().get(..8).unwrap_or(id.as_str())
}
