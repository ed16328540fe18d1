//! `diary` subcommands: add, edit, list, search, fav, rm.

use crate::cli::commands::{resolve_id, short_id, split_flags};
use crate::cli::output;
use crate::core::session::Session;
use crate::domain::entry::{DiaryEntry, Mood};

pub fn run(session: &mut Session, args: &[&str]) {
    match args.split_first() {
        Some((&"add", rest)) => add(session, rest),
        Some((&"edit", rest)) => edit(session, rest),
        Some((&"list", _)) => list(session),
        Some((&"search", rest)) => search(session, rest),
        Some((&"fav", rest)) => favorite(session, rest),
        Some((&"rm", rest)) => remove(session, rest),
        _ => output::warning("Usage: diary add|edit|list|search|fav|rm ..."),
    }
}

fn add(session: &mut Session, args: &[&str]) {
    let (positional, flags) = match split_flags(args) {
        Ok(parts) => parts,
        Err(message) => return output::warning(message),
    };
    let (Some(title), Some(_)) = (positional.first(), positional.get(1)) else {
        return output::warning("Usage: diary add <title> <content> [--mood M]");
    };
    let content = positional[1..].join(" ");
    let mood = match parse_mood(flags.get("mood").copied()) {
        Ok(mood) => mood,
        Err(message) => return output::warning(message),
    };

    match session.entries.add(title, &content, mood) {
        Ok(id) => output::success(format!("Entry `{title}` written ({})", short_id(&id))),
        Err(err) => output::warning(err),
    }
}

fn edit(session: &mut Session, args: &[&str]) {
    let (positional, flags) = match split_flags(args) {
        Ok(parts) => parts,
        Err(message) => return output::warning(message),
    };
    let (Some(raw_id), Some(title), Some(_)) =
        (positional.first(), positional.get(1), positional.get(2))
    else {
        return output::warning("Usage: diary edit <id> <title> <content> [--mood M]");
    };
    let Some(id) = resolve_id(session.entries.snapshot(), raw_id) else {
        return output::warning(format!("No diary entry matches `{raw_id}`"));
    };
    let content = positional[2..].join(" ");
    let mood = match flags.get("mood") {
        Some(raw) => match raw.parse::<Mood>() {
            Ok(mood) => mood,
            Err(err) => return output::warning(err),
        },
        // Without an explicit flag the current mood is kept.
        None => match session.entries.get(&id) {
            Some(entry) => entry.mood,
            None => Mood::default(),
        },
    };

    match session.entries.edit(&id, title, &content, mood) {
        Ok(()) => output::success(format!("Entry {} updated.", short_id(&id))),
        Err(err) => output::warning(err),
    }
}

fn list(session: &Session) {
    let entries = session.entries.sorted_by_date_descending();
    if entries.is_empty() {
        return output::info("No diary entries yet.");
    }
    output::section("Diary (most recent first)");
    for entry in entries {
        print_entry(entry);
    }
}

fn search(session: &Session, args: &[&str]) {
    let term = args.join(" ");
    let hits = session.entries.search(&term);
    if hits.is_empty() {
        return output::info(format!("No entries match `{term}`."));
    }
    output::section(format!("Entries matching `{term}`"));
    for entry in hits {
        print_entry(entry);
    }
}

fn favorite(session: &mut Session, args: &[&str]) {
    let Some(raw) = args.first() else {
        return output::warning("Usage: diary fav <id>");
    };
    let Some(id) = resolve_id(session.entries.snapshot(), raw) else {
        return output::warning(format!("No diary entry matches `{raw}`"));
    };
    match session.entries.toggle_favorite(&id) {
        Ok(()) => {
            let starred = session
                .entries
                .get(&id)
                .map(|entry| entry.is_favorite)
                .unwrap_or(false);
            let state = if starred { "favorited" } else { "unfavorited" };
            output::success(format!("Entry {} {state}.", short_id(&id)));
        }
        Err(err) => output::warning(err),
    }
}

fn remove(session: &mut Session, args: &[&str]) {
    let Some(raw) = args.first() else {
        return output::warning("Usage: diary rm <id>");
    };
    let Some(id) = resolve_id(session.entries.snapshot(), raw) else {
        return output::warning(format!("No diary entry matches `{raw}`"));
    };
    match session.entries.delete(&id) {
        Ok(()) => output::success(format!("Entry {} removed.", short_id(&id))),
        Err(err) => output::warning(err),
    }
}

fn parse_mood(raw: Option<&str>) -> Result<Mood, String> {
    match raw {
        Some(raw) => raw.parse::<Mood>().map_err(|err| err.to_string()),
        None => Ok(Mood::default()),
    }
}

fn print_entry(entry: &DiaryEntry) {
    let star = if entry.is_favorite { "*" } else { " " };
    output::item(
        short_id(&entry.id),
        format!(
            "{} {}  [{}]  {}",
            star,
            entry.date.format("%Y-%m-%d"),
            entry.mood,
            entry.title
        ),
    );
}
