//! Builders for scorekeeper stdin scripts.
//!
//! ```
//! use scorekeeper_test_support::script::round_script;
//!
//! let s = round_script(&["Ann", "Bo"], &[1, 0], &[1, 1]);
//! assert_eq!(s, "bid Ann 1\nbid Bo 0\ngot Ann 1\ngot Bo 1\ncommit\n");
//! ```

use std::fmt::Write;

/// Bid every player, record every achieved count, then commit.
///
/// Panics if the slices differ in length.
pub fn round_script(players: &[&str], bids: &[u16], achieved: &[u16]) -> String {
    assert_eq!(players.len(), bids.len(), "one bid per player");
    assert_eq!(players.len(), achieved.len(), "one achieved count per player");

    let mut out = String::new();
    for (player, bid) in players.iter().zip(bids) {
        let _ = writeln!(out, "bid {player} {bid}");
    }
    for (player, got) in players.iter().zip(achieved) {
        let _ = writeln!(out, "got {player} {got}");
    }
    out.push_str("commit\n");
    out
}

/// Join raw command lines into one newline-terminated script.
pub fn lines<I, S>(commands: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    commands.into_iter().fold(String::new(), |mut out, cmd| {
        out.push_str(cmd.as_ref());
        out.push('\n');
        out
    })
}
