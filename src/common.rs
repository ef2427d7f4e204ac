//! Shared result and error types for the battle engine.

use core::fmt;

use crate::player::PlayerId;

/// Outcome of resolving a shot against a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The shot landed in open water.
    Miss,
    /// The shot hit a segment of the named ship.
    Hit(&'static str),
    /// The shot destroyed the last segment of the named ship.
    Sunk(&'static str),
}

impl ShotResult {
    /// Label of whatever occupied the cell before the shot.
    pub fn target(&self) -> &'static str {
        match self {
            ShotResult::Miss => "Water",
            ShotResult::Hit(name) | ShotResult::Sunk(name) => name,
        }
    }

    /// `true` when this shot sank a ship.
    pub fn destroyed(&self) -> bool {
        matches!(self, ShotResult::Sunk(_))
    }
}

/// Outcome of a fleet reroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerollResult {
    /// The fleet was replaced; carries the remaining reroll budget.
    Rerolled(u8),
    /// No rerolls left in the budget.
    Exhausted,
    /// Rerolls are disallowed because shots have been exchanged.
    Frozen,
}

impl RerollResult {
    /// Sentinel encoding used by the host interface: `-1` when the budget is
    /// exhausted, `-2` when the match is ongoing, otherwise the remaining
    /// budget.
    pub fn code(&self) -> i32 {
        match self {
            RerollResult::Rerolled(left) => i32::from(*left),
            RerollResult::Exhausted => -1,
            RerollResult::Frozen => -2,
        }
    }
}

/// Errors returned by board and match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Row letter outside `a..=j`.
    InvalidRow(char),
    /// Column outside `0..=9`.
    InvalidColumn(u8),
    /// Cell index outside the grid.
    OutOfBounds(usize),
    /// The targeted cell was already shot.
    AlreadyTargeted,
    /// No player with the given id in this match.
    UnknownPlayer(PlayerId),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidRow(row) => write!(f, "row {:?} is not a letter in a..j", row),
            MatchError::InvalidColumn(col) => write!(f, "column {} is not in 0..10", col),
            MatchError::OutOfBounds(index) => write!(f, "cell index {} is off the grid", index),
            MatchError::AlreadyTargeted => write!(f, "cell was already shot"),
            MatchError::UnknownPlayer(id) => write!(f, "player {} is not in this match", id),
        }
    }
}

impl std::error::Error for MatchError {}
