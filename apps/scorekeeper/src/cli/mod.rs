//! Interactive front end: command parsing, text rendering, and the session loop.

pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use session::{Session, SessionEnd, SessionOptions};
