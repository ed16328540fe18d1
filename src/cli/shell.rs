//! Shell loop: interactive rustyline editor or line-by-line script mode.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::commands::{self, LoopControl};
use crate::cli::output;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::core::errors::CliError;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("PLANNER_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode);

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(ShellContext::command_names());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    loop {
        if !context.running {
            break;
        }
        let prompt = context.prompt();
        let line = editor.readline(&prompt);

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                if handle_line(context, trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        if handle_line(context, &line) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Could not parse input: {err}"));
            return LoopControl::Continue;
        }
    };

    if tokens.is_empty() {
        return LoopControl::Continue;
    }

    let command = tokens[0].to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    let control = commands::dispatch(context, &command, &args);
    if control == LoopControl::Exit {
        context.running = false;
    }
    control
}

/// Completes the first token against the command list and the second against
/// that command's subcommands; free-text arguments are left alone.
struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_owned).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates_for(&self, completed: &[&str]) -> Vec<String> {
        match completed {
            [] => self.commands.clone(),
            [command] => ShellContext::subcommands(command)
                .iter()
                .map(|name| name.to_string())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let needle = prefix[start..].to_ascii_lowercase();

        let completed: Vec<&str> = prefix[..start].split_whitespace().collect();
        let candidates = self
            .candidates_for(&completed)
            .into_iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use rustyline::history::DefaultHistory;

    use super::*;

    fn complete_at(line: &str, pos: usize) -> (usize, Vec<String>) {
        let helper = CommandHelper::new(ShellContext::command_names());
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let (start, pairs) = helper.complete(line, pos, &ctx).expect("completion succeeds");
        let names = pairs.into_iter().map(|pair| pair.replacement).collect();
        (start, names)
    }

    #[test]
    fn completes_top_level_commands() {
        let (start, names) = complete_at("ta", 2);
        assert_eq!(start, 0);
        assert_eq!(names, ["task"]);
    }

    #[test]
    fn completes_subcommands_of_the_typed_command() {
        let (start, names) = complete_at("diary s", 7);
        assert_eq!(start, 6);
        assert_eq!(names, ["search"]);
    }

    #[test]
    fn empty_second_token_offers_all_subcommands() {
        let (_, names) = complete_at("money ", 6);
        assert_eq!(names, ["add", "list", "summary", "rm"]);
    }

    #[test]
    fn free_text_arguments_are_not_completed() {
        let (_, names) = complete_at("task add Buy mi", 15);
        assert!(names.is_empty());

        let (_, names) = complete_at("dashboard ", 10);
        assert!(names.is_empty());
    }
}
