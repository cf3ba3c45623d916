use thiserror::Error;

use crate::errors::ErrorCode;

/// One line of scorekeeper input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `bid <player> <value|->`
    Bid { player: String, value: String },
    /// `got <player> <value|->`
    Achieved { player: String, value: String },
    Commit,
    Show,
    Totals,
    /// Throw the current game away and start over with the same players.
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl CommandError {
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::InvalidCommand
    }
}

pub const HELP: &str = "\
commands:
  bid <player> <n>   set a bid (use - to clear)
  got <player> <n>   set the achieved count (use - to clear)
  commit             score the round and move on
  show               print the score grid
  totals             print running totals
  new                start over with the same players
  help               this text
  quit               leave";

const CLEAR: &str = "-";

impl Command {
    /// Parse a non-blank input line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let cmd = match head.to_ascii_lowercase().as_str() {
            "bid" | "b" => {
                let (player, value) = entry_args(&rest, "bid <player> <value|->")?;
                Command::Bid { player, value }
            }
            "got" | "g" | "achieved" => {
                let (player, value) = entry_args(&rest, "got <player> <value|->")?;
                Command::Achieved { player, value }
            }
            "commit" | "c" => no_args(&rest, "commit", Command::Commit)?,
            "show" | "s" => no_args(&rest, "show", Command::Show)?,
            "totals" | "t" => no_args(&rest, "totals", Command::Totals)?,
            "new" | "n" => no_args(&rest, "new", Command::New)?,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(cmd))
    }
}

fn entry_args(args: &[&str], usage: &'static str) -> Result<(String, String), CommandError> {
    match args {
        [player, value] => {
            let value = if *value == CLEAR { "" } else { *value };
            Ok((player.to_string(), value.to_string()))
        }
        _ => Err(CommandError::Usage(usage)),
    }
}

fn no_args(args: &[&str], usage: &'static str, cmd: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(CommandError::Usage(usage))
    }
}
