//! Line-driven scorekeeping session over any reader/writer pair.
//!
//! In JSON mode every output line is a JSON object: a game snapshot, an
//! `{"error", "message"}` report, `{"standings"}` or `{"help"}`.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::command::{Command, HELP};
use super::render::{render_grid, render_outcome, render_totals};
use crate::domain::bidding::BidVerdict;
use crate::domain::store::GameStore;
use crate::errors::{DomainError, ErrorCode};

/// Output options for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Emit JSON lines instead of the text grid.
    pub json: bool,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game on the table was finished when input stopped.
    Completed,
    /// `quit` was entered with the game still open.
    Quit,
    /// Input ran out before the game finished.
    EndOfInput,
}

#[derive(Serialize)]
struct ErrorLine<'a> {
    error: &'static str,
    message: &'a str,
}

pub struct Session<'a> {
    store: &'a mut GameStore,
    options: SessionOptions,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a mut GameStore, options: SessionOptions) -> Self {
        Self { store, options }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// A finished game stays on screen and refuses entries until `new`
    /// starts another one.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<SessionEnd> {
        self.show(out)?;
        let mut quit = false;
        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    if self.options.json {
                        self.report(out, e.code(), &e.to_string())?;
                    } else {
                        writeln!(out, "error: {e}")?;
                    }
                    continue;
                }
            };
            debug!(?command, "Command");

            match command {
                Command::Quit => {
                    quit = true;
                    break;
                }
                Command::Help => self.help(out)?,
                Command::Show => self.show(out)?,
                Command::Totals => self.totals(out)?,
                Command::New => {
                    self.store.reset();
                    self.show(out)?;
                }
                Command::Bid { player, value } => {
                    let result = self.store.set_bid_input(&player, &value);
                    self.report_entry(result, out)?;
                }
                Command::Achieved { player, value } => {
                    let result = self.store.set_achieved_input(&player, &value);
                    self.report_entry(result, out)?;
                }
                Command::Commit => match self.store.commit_round() {
                    Ok(outcome) => {
                        if !self.options.json {
                            write!(out, "{}", render_outcome(&outcome))?;
                        }
                        self.show(out)?;
                    }
                    Err(e) => self.report_domain(out, &e)?,
                },
            }
        }

        Ok(if self.store.is_complete() {
            SessionEnd::Completed
        } else if quit {
            SessionEnd::Quit
        } else {
            SessionEnd::EndOfInput
        })
    }

    fn report_entry<W: Write>(
        &self,
        result: Result<BidVerdict, DomainError>,
        out: &mut W,
    ) -> io::Result<()> {
        match result {
            Ok(verdict) => {
                if self.options.json {
                    return self.show(out);
                }
                if let BidVerdict::Invalid { target, .. } = verdict {
                    writeln!(out, "warning: total bids cannot equal {target}")?;
                }
                Ok(())
            }
            Err(e) => self.report_domain(out, &e),
        }
    }

    fn report_domain<W: Write>(&self, out: &mut W, e: &DomainError) -> io::Result<()> {
        let message = match e {
            DomainError::InvalidBidSet { target, .. } => {
                format!("Total guesses cannot equal {target}")
            }
            DomainError::IncompleteEntry { .. } => {
                format!("Please fill in all bids and achieved values ({e})")
            }
            _ => e.to_string(),
        };
        self.report(out, e.code(), &message)
    }

    fn report<W: Write>(&self, out: &mut W, code: ErrorCode, message: &str) -> io::Result<()> {
        if self.options.json {
            let line = ErrorLine {
                error: code.as_str(),
                message,
            };
            json_line(out, &line)
        } else {
            writeln!(out, "error [{code}]: {message}")
        }
    }

    fn help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.options.json {
            json_line(out, &json!({ "help": HELP }))
        } else {
            writeln!(out, "{HELP}")
        }
    }

    fn totals<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let standings = self.store.state().standings();
        if self.options.json {
            json_line(out, &json!({ "standings": standings }))
        } else {
            write!(out, "{}", render_totals(&standings))
        }
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let snap = self.store.snapshot();
        if self.options.json {
            json_line(out, &snap)
        } else {
            write!(out, "{}", render_grid(&snap))
        }
    }
}

fn json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    let line = serde_json::to_string(value).map_err(io::Error::other)?;
    writeln!(out, "{line}")
}
