//! Match state machine: two player sessions, the turn pointer and timers.

use std::time::Instant;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::{MatchError, RerollResult, ShotResult};
use crate::config::{BOARD_SIZE, ROUND_TIMEOUT, TOTAL_SHIP_CELLS};
use crate::player::{PlayerId, PlayerState};
use crate::session::Session;
use crate::ui;

/// One Battleships session between two participants.
///
/// The engine assumes a single writer: the hosting game serializes all calls
/// into a match, so there is no internal locking.
pub struct Match {
    players: [PlayerState; 2],
    /// Index of the player to act next.
    next: usize,
    round_started: Instant,
    match_started: Instant,
    /// Set once shots have been exchanged; freezes both fleets.
    ongoing: bool,
    rng: SmallRng,
}

impl Match {
    /// Create a session for two participants, building both fleets at
    /// random. The first participant acts first.
    pub fn new(participants: [PlayerId; 2]) -> Self {
        Self::with_rng(participants, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Like [`Match::new`] but seeded, for reproducible fleets.
    pub fn with_seed(participants: [PlayerId; 2], seed: u64) -> Self {
        Self::with_rng(participants, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(participants: [PlayerId; 2], mut rng: SmallRng) -> Self {
        info!(
            "battleships match between {} and {}",
            participants[0], participants[1]
        );
        let players = [
            PlayerState::new(participants[0], &mut rng),
            PlayerState::new(participants[1], &mut rng),
        ];
        let now = Instant::now();
        Self {
            players,
            next: 0,
            round_started: now,
            match_started: now,
            ongoing: false,
            rng,
        }
    }

    /// Resolve a shot from the player to act against the opponent's board.
    ///
    /// Row letters are `a..j` (either case), columns `0..9`. Returns the
    /// pre-shot label of the targeted cell and whether the shot destroyed a
    /// ship; every destroyed segment is credited to the acting player's kill
    /// counter, which drives [`Match::check_win`].
    pub fn shoot(&mut self, row: char, col: u8) -> Result<ShotResult, MatchError> {
        let index = cell_index(row, col)?;
        let shooter = self.players[self.next].id();
        let opponent = 1 - self.next;

        let result = self.players[opponent].board_mut().shoot(index)?;
        self.ongoing = true;
        if matches!(result, ShotResult::Hit(_) | ShotResult::Sunk(_)) {
            self.players[self.next].add_kill();
        }
        if let ShotResult::Sunk(name) = result {
            info!("{} sank a {}", shooter, name);
        }
        debug!("{} fires at {}{}: {:?}", shooter, row, col, result);
        Ok(result)
    }

    /// Request a fleet reroll for `player`. Only allowed before the first
    /// shot of the match; consumes one unit of the player's budget.
    pub fn reroll(&mut self, player: PlayerId) -> Result<RerollResult, MatchError> {
        if self.ongoing {
            return Ok(RerollResult::Frozen);
        }
        let idx = self.player_index(player)?;
        let result = self.players[idx].reroll(&mut self.rng);
        debug!("{} rerolls: {}", player, result.code());
        Ok(result)
    }

    /// Close the current round: restart the round timer and hand the turn to
    /// the other player.
    pub fn advance_turn(&mut self) {
        self.round_started = Instant::now();
        self.next = 1 - self.next;
    }

    /// `true` when it is `player`'s turn to act.
    pub fn is_turn(&self, player: PlayerId) -> bool {
        self.players[self.next].id() == player
    }

    /// `true` once the player to act has destroyed every opponent segment.
    pub fn check_win(&self) -> bool {
        self.players[self.next].kills() >= TOTAL_SHIP_CELLS
    }

    /// `true` when the current round has sat idle longer than the allowed
    /// window. The engine only reports this; ending the match is up to the
    /// host.
    pub fn timeout(&self) -> bool {
        self.round_started.elapsed() > ROUND_TIMEOUT
    }

    /// Session state for `player`, or an explicit error for an id that is
    /// not part of this match.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerState, MatchError> {
        Ok(&self.players[self.player_index(player)?])
    }

    /// The player to act next.
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.next]
    }

    /// The player waiting on the other side.
    pub fn opponent(&self) -> &PlayerState {
        &self.players[1 - self.next]
    }

    /// Render `player`'s board as text. With `reveal_ships` false, untouched
    /// ship cells are drawn as water, as shown to the opponent.
    pub fn render(&self, player: PlayerId, reveal_ships: bool) -> Result<String, MatchError> {
        Ok(ui::render_board(self.player(player)?.board(), reveal_ships))
    }

    fn player_index(&self, player: PlayerId) -> Result<usize, MatchError> {
        self.players
            .iter()
            .position(|p| p.id() == player)
            .ok_or(MatchError::UnknownPlayer(player))
    }
}

impl Session for Match {
    fn name(&self) -> &'static str {
        "Battleships"
    }

    fn player_limits(&self) -> (usize, usize) {
        (2, 2)
    }

    fn conclude(&mut self) -> anyhow::Result<()> {
        info!(
            "battleships match finished after {:?}",
            self.match_started.elapsed()
        );
        Ok(())
    }
}

/// Map a row letter and column to a row-major cell index.
fn cell_index(row: char, col: u8) -> Result<usize, MatchError> {
    let letter = row.to_ascii_lowercase();
    if !letter.is_ascii_lowercase() || letter > 'j' {
        return Err(MatchError::InvalidRow(row));
    }
    if col >= BOARD_SIZE {
        return Err(MatchError::InvalidColumn(col));
    }
    Ok((letter as u8 - b'a') as usize * BOARD_SIZE as usize + col as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fresh_match_is_not_timed_out() {
        let m = Match::with_seed([1, 2], 7);
        assert!(!m.timeout());
    }

    #[test]
    fn stale_round_times_out_until_turn_advances() {
        let mut m = Match::with_seed([1, 2], 7);
        let Some(stale) = Instant::now().checked_sub(ROUND_TIMEOUT + Duration::from_secs(1))
        else {
            return; // clock too close to its epoch to back-date
        };
        m.round_started = stale;
        assert!(m.timeout());
        m.advance_turn();
        assert!(!m.timeout());
    }

    #[test]
    fn cell_index_maps_rows_and_columns() {
        assert_eq!(cell_index('a', 0).unwrap(), 0);
        assert_eq!(cell_index('b', 0).unwrap(), 10);
        assert_eq!(cell_index('J', 9).unwrap(), 99);
        assert!(cell_index('k', 0).is_err());
        assert!(cell_index('1', 0).is_err());
        assert!(cell_index('a', 10).is_err());
    }
}
