//! Rules engine for two-player Battleships, run as one session inside a
//! turn-based game host. Covers randomized fleet placement and the
//! turn/shot state machine; transport and presentation live with the host.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod session;
mod ship;
mod ui;

pub use board::{Board, Cell};
pub use common::{MatchError, RerollResult, ShotResult};
pub use config::*;
pub use game::Match;
pub use logging::init_logging;
pub use player::{PlayerId, PlayerState};
pub use session::Session;
pub use ship::{Ship, ShipClass};
pub use ui::render_board;
