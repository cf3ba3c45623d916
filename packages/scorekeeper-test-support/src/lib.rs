//! Scorekeeper test support utilities
//!
//! Logging initialization shared by the integration test binaries, and
//! builders for scripted CLI input.

pub mod logging;
pub mod script;
