use serde::{Deserialize, Serialize};

use super::bidding::{parse_entry, validate_bids, BidVerdict, Entry};
use super::roster::{PlayerId, Roster};
use super::rules::RoundSchedule;
use super::scoring::round_score;
use crate::errors::DomainError;

/// Game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Rounds remain; entries and commits are accepted.
    InProgress,
    /// Every scheduled round has been committed. Terminal.
    Completed,
}

/// Which pending entry an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Bid,
    Achieved,
}

/// One player's result for a committed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundScore {
    pub player: String,
    pub bid: u16,
    pub achieved: u16,
    pub score: i32,
}

/// Everything a successful commit produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 0-based index of the round that was just committed.
    pub round_index: usize,
    pub target: u8,
    pub scores: Vec<PlayerRoundScore>,
}

/// A player's running total, used for standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: String,
    pub total: i32,
}

/// Complete game state as a value.
///
/// Every transition (`with_bid`, `with_achieved`, `commit_round`) is pure: it
/// leaves `self` untouched and returns either the next state or an error.
/// Fields are private so the score sheet and pending entries only change
/// through those transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    roster: Roster,
    schedule: RoundSchedule,
    /// Rounds committed so far; also the 0-based index of the open round.
    current_round: usize,
    /// `score_sheet[seat][round]`; `Some` iff `round < current_round`.
    score_sheet: Vec<Vec<Option<i32>>>,
    pending_bids: Vec<Entry>,
    pending_achieved: Vec<Entry>,
    phase: Phase,
}

impl GameState {
    pub fn new(roster: Roster, schedule: RoundSchedule) -> Self {
        let players = roster.len();
        let rounds = schedule.total_rounds();
        Self {
            roster,
            schedule,
            current_round: 0,
            score_sheet: vec![vec![None; rounds]; players],
            pending_bids: vec![None; players],
            pending_achieved: vec![None; players],
            phase: Phase::InProgress,
        }
    }

    // ---- transitions -------------------------------------------------------

    /// Fresh game with the same roster and schedule.
    pub fn restarted(&self) -> Self {
        Self::new(self.roster.clone(), self.schedule.clone())
    }

    pub fn with_bid(&self, player: &str, value: Entry) -> Result<Self, DomainError> {
        self.with_entry(EntryKind::Bid, player, value)
    }

    pub fn with_achieved(&self, player: &str, value: Entry) -> Result<Self, DomainError> {
        self.with_entry(EntryKind::Achieved, player, value)
    }

    /// Apply raw text input (blank clears, otherwise a non-negative integer).
    pub fn with_entry_input(
        &self,
        kind: EntryKind,
        player: &str,
        input: &str,
    ) -> Result<Self, DomainError> {
        self.ensure_in_progress()?;
        let value = parse_entry(input)?;
        self.with_entry(kind, player, value)
    }

    pub fn with_entry(
        &self,
        kind: EntryKind,
        player: &str,
        value: Entry,
    ) -> Result<Self, DomainError> {
        self.ensure_in_progress()?;
        let seat = self.roster.seat_of(player)?;
        let mut next = self.clone();
        match kind {
            EntryKind::Bid => next.pending_bids[seat] = value,
            EntryKind::Achieved => next.pending_achieved[seat] = value,
        }
        Ok(next)
    }

    /// Score the open round and advance.
    ///
    /// Fails without producing a new state when the game is over, when any
    /// entry is unset, or when the bid set sums to the round target.
    pub fn commit_round(&self) -> Result<(Self, RoundOutcome), DomainError> {
        self.ensure_in_progress()?;
        let round_index = self.current_round;
        let target = self.schedule.target_for(round_index)?;

        let mut entries = Vec::with_capacity(self.roster.len());
        let mut missing = Vec::new();
        for (seat, name) in self.roster.names().iter().enumerate() {
            match (self.pending_bids[seat], self.pending_achieved[seat]) {
                (Some(bid), Some(achieved)) => entries.push((bid, achieved)),
                _ => missing.push(name.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(DomainError::IncompleteEntry { missing });
        }

        if let BidVerdict::Invalid { target, sum } = validate_bids(target, &self.pending_bids) {
            return Err(DomainError::InvalidBidSet { target, sum });
        }

        let mut next = self.clone();
        let mut scores = Vec::with_capacity(entries.len());
        for (seat, (bid, achieved)) in entries.into_iter().enumerate() {
            let score = round_score(bid, achieved);
            next.score_sheet[seat][round_index] = Some(score);
            scores.push(PlayerRoundScore {
                player: self.roster.names()[seat].clone(),
                bid,
                achieved,
                score,
            });
        }
        next.pending_bids.fill(None);
        next.pending_achieved.fill(None);
        next.current_round += 1;
        if next.current_round == next.schedule.total_rounds() {
            next.phase = Phase::Completed;
        }

        Ok((
            next,
            RoundOutcome {
                round_index,
                target,
                scores,
            },
        ))
    }

    // ---- derived reads -----------------------------------------------------

    /// Live bid-sum check for the open round, recomputed on every call.
    pub fn bid_verdict(&self) -> BidVerdict {
        match self.current_target() {
            Some(target) => validate_bids(target, &self.pending_bids),
            None => BidVerdict::Incomplete,
        }
    }

    /// Sum of committed round scores; 0 before the first commit.
    pub fn total_score(&self, player: &str) -> Result<i32, DomainError> {
        let seat = self.roster.seat_of(player)?;
        Ok(self.total_for(seat))
    }

    pub fn total_for(&self, seat: PlayerId) -> i32 {
        self.score_sheet
            .get(seat)
            .map(|slots| slots.iter().flatten().sum::<i32>())
            .unwrap_or(0)
    }

    /// Players by total, highest first. Ties keep seating order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .roster
            .names()
            .iter()
            .enumerate()
            .map(|(seat, name)| Standing {
                player: name.clone(),
                total: self.total_for(seat),
            })
            .collect();
        standings.sort_by(|a, b| b.total.cmp(&a.total));
        standings
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// Target of the open round; `None` once the game is complete.
    pub fn current_target(&self) -> Option<u8> {
        self.schedule.target_for(self.current_round).ok()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn schedule(&self) -> &RoundSchedule {
        &self.schedule
    }

    pub fn score_sheet(&self) -> &[Vec<Option<i32>>] {
        &self.score_sheet
    }

    pub fn pending_bid(&self, seat: PlayerId) -> Entry {
        self.pending_bids.get(seat).copied().flatten()
    }

    pub fn pending_achieved(&self, seat: PlayerId) -> Entry {
        self.pending_achieved.get(seat).copied().flatten()
    }

    pub fn pending_bids(&self) -> &[Entry] {
        &self.pending_bids
    }

    fn ensure_in_progress(&self) -> Result<(), DomainError> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::Completed => Err(DomainError::GameCompleted),
        }
    }
}
