//! `event` subcommands: add, day, week, rm.

use chrono::NaiveDate;

use crate::cli::commands::{parse_date, resolve_id, short_id, split_flags};
use crate::cli::output;
use crate::core::session::Session;
use crate::core::stores::EventStore;
use crate::core::time::Clock;
use crate::domain::event::DEFAULT_DURATION_MINUTES;

pub fn run(session: &mut Session, args: &[&str]) {
    match args.split_first() {
        Some((&"add", rest)) => add(session, rest),
        Some((&"day", rest)) => day(session, rest),
        Some((&"week", rest)) => week(session, rest),
        Some((&"rm", rest)) => remove(session, rest),
        _ => output::warning("Usage: event add|day|week|rm ..."),
    }
}

fn add(session: &mut Session, args: &[&str]) {
    let (positional, flags) = match split_flags(args) {
        Ok(parts) => parts,
        Err(message) => return output::warning(message),
    };
    let (Some(date_raw), Some(time)) = (positional.first(), positional.get(1)) else {
        return output::warning(
            "Usage: event add <YYYY-MM-DD> <HH:MM> <title> [--minutes N] [--desc D]",
        );
    };
    if positional.len() < 3 {
        return output::warning(
            "Usage: event add <YYYY-MM-DD> <HH:MM> <title> [--minutes N] [--desc D]",
        );
    }
    let target_date = match parse_date(date_raw) {
        Ok(date) => date,
        Err(message) => return output::warning(message),
    };
    let title = positional[2..].join(" ");
    let minutes = match flags.get("minutes") {
        Some(raw) => match raw.parse::<u32>() {
            Ok(minutes) => minutes,
            Err(_) => return output::warning(format!("`{raw}` is not a minute count")),
        },
        None => DEFAULT_DURATION_MINUTES,
    };
    let description = flags.get("desc").map(|raw| raw.to_string());

    match session
        .events
        .add(&title, description, time, minutes, target_date)
    {
        Ok(id) => output::success(format!(
            "Event `{title}` scheduled on {target_date} ({})",
            short_id(&id)
        )),
        Err(err) => output::warning(err),
    }
}

fn day(session: &Session, args: &[&str]) {
    let date = match parse_date_or_today(session, args.first().copied()) {
        Ok(date) => date,
        Err(message) => return output::warning(message),
    };
    print_day(session, date);
}

fn week(session: &Session, args: &[&str]) {
    let date = match parse_date_or_today(session, args.first().copied()) {
        Ok(date) => date,
        Err(message) => return output::warning(message),
    };
    output::section(format!("Week of {}", EventStore::week_of(date)[0]));
    for day in EventStore::week_of(date) {
        let events = session.events.events_on_date(day);
        println!("{}  {} event(s)", day.format("%a %Y-%m-%d"), events.len());
        for event in events {
            output::item(
                short_id(&event.id),
                format!("{}  {} ({} min)", event.time, event.title, event.duration_minutes),
            );
        }
    }
}

fn remove(session: &mut Session, args: &[&str]) {
    let Some(raw) = args.first() else {
        return output::warning("Usage: event rm <id>");
    };
    let Some(id) = resolve_id(session.events.snapshot(), raw) else {
        return output::warning(format!("No event matches `{raw}`"));
    };
    match session.events.delete(&id) {
        Ok(()) => output::success(format!("Event {} removed.", short_id(&id))),
        Err(err) => output::warning(err),
    }
}

fn parse_date_or_today(session: &Session, raw: Option<&str>) -> Result<NaiveDate, String> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(session.clock().today()),
    }
}

fn print_day(session: &Session, date: NaiveDate) {
    let events = session.events.events_on_date(date);
    if events.is_empty() {
        return output::info(format!("No events on {date}."));
    }
    output::section(format!("Events on {date}"));
    for event in events {
        let note = event
            .description
            .as_deref()
            .map(|text| format!("  - {text}"))
            .unwrap_or_default();
        output::item(
            short_id(&event.id),
            format!(
                "{}  {} ({} min){note}",
                event.time, event.title, event.duration_minutes
            ),
        );
    }
}
