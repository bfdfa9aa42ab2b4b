//! Command table and line parsing.
//!
//! A raw line is trimmed, lower-cased and split on single spaces. The
//! resulting tokens are matched against the command table, longest phrase
//! first, so `show all` wins over any single-word `show` entry.

use super::handlers::{self, Handler};
use once_cell::sync::Lazy;
use std::fmt;

/// Every command the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Delete,
    Find,
    Edit,
    Change,
    Remove,
    ShowAll,
    ShowPage,
    Birthday,
    Help,
    Exit,
}

/// One entry of the command table.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Literal words that select this command.
    pub phrase: &'static str,
    pub command: Command,
    /// Usage line shown by `help` and on argument errors.
    pub usage: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub handler: Handler,
}

impl CommandSpec {
    /// Whether `count` arguments satisfy this command.
    pub fn accepts(&self, count: usize) -> bool {
        (self.min_args..=self.max_args).contains(&count)
    }

    fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("phrase", &self.phrase)
            .field("command", &self.command)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .finish_non_exhaustive()
    }
}

/// The fixed command table, in `help` order.
pub static COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec {
        phrase: "add",
        command: Command::Add,
        usage: "add <name> <phone> [birthday]",
        min_args: 2,
        max_args: 3,
        handler: handlers::add,
    },
    CommandSpec {
        phrase: "delete",
        command: Command::Delete,
        usage: "delete <name>",
        min_args: 1,
        max_args: 1,
        handler: handlers::delete,
    },
    CommandSpec {
        phrase: "find",
        command: Command::Find,
        usage: "find <name>",
        min_args: 1,
        max_args: 1,
        handler: handlers::find,
    },
    CommandSpec {
        phrase: "edit",
        command: Command::Edit,
        usage: "edit <name> <new_phone>",
        min_args: 2,
        max_args: 2,
        handler: handlers::edit,
    },
    CommandSpec {
        phrase: "change",
        command: Command::Change,
        usage: "change <name> <old_phone> <new_phone>",
        min_args: 3,
        max_args: 3,
        handler: handlers::change,
    },
    CommandSpec {
        phrase: "remove",
        command: Command::Remove,
        usage: "remove <name> <phone>",
        min_args: 2,
        max_args: 2,
        handler: handlers::remove,
    },
    CommandSpec {
        phrase: "show all",
        command: Command::ShowAll,
        usage: "show all",
        min_args: 0,
        max_args: 0,
        handler: handlers::show_all,
    },
    CommandSpec {
        phrase: "show page",
        command: Command::ShowPage,
        usage: "show page <number>",
        min_args: 1,
        max_args: 1,
        handler: handlers::show_page,
    },
    CommandSpec {
        phrase: "birthday",
        command: Command::Birthday,
        usage: "birthday <name>",
        min_args: 1,
        max_args: 1,
        handler: handlers::birthday,
    },
    CommandSpec {
        phrase: "help",
        command: Command::Help,
        usage: "help",
        min_args: 0,
        max_args: 0,
        handler: handlers::help,
    },
    CommandSpec {
        phrase: "good bye",
        command: Command::Exit,
        usage: "good bye",
        min_args: 0,
        max_args: 0,
        handler: handlers::exit,
    },
    CommandSpec {
        phrase: "close",
        command: Command::Exit,
        usage: "close",
        min_args: 0,
        max_args: 0,
        handler: handlers::exit,
    },
    CommandSpec {
        phrase: "exit",
        command: Command::Exit,
        usage: "exit",
        min_args: 0,
        max_args: 0,
        handler: handlers::exit,
    },
];

// Longest phrase first; ties keep table order.
static LOOKUP_ORDER: Lazy<Vec<&'static CommandSpec>> = Lazy::new(|| {
    let mut specs: Vec<&'static CommandSpec> = COMMAND_TABLE.iter().collect();
    specs.sort_by_key(|spec| std::cmp::Reverse(spec.word_count()));
    specs
});

/// A line matched against the command table.
#[derive(Debug, Clone)]
pub struct ParsedCommand<'a> {
    pub spec: &'static CommandSpec,
    pub args: Vec<&'a str>,
}

impl ParsedCommand<'_> {
    pub fn command(&self) -> Command {
        self.spec.command
    }
}

/// Trim and lower-case a raw input line.
pub fn normalize(raw_line: &str) -> String {
    raw_line.trim().to_lowercase()
}

/// Match an already normalized line against the command table.
///
/// Returns `None` when no phrase matches the leading tokens.
pub fn parse(line: &str) -> Option<ParsedCommand<'_>> {
    let tokens: Vec<&str> = line.split(' ').collect();

    LOOKUP_ORDER.iter().find_map(|spec| {
        let phrase: Vec<&str> = spec.phrase.split(' ').collect();
        if tokens.starts_with(&phrase) {
            Some(ParsedCommand {
                spec: *spec,
                args: tokens[phrase.len()..].to_vec(),
            })
        } else {
            None
        }
    })
}
