//! Lifecycle contract consumed by the hosting game layer.

/// What a hosted game session presents to the turn-based game host: a
/// display name, how many participants it accepts, and an end-of-session
/// hook.
pub trait Session {
    /// Display name of the game.
    fn name(&self) -> &'static str;

    /// Minimum and maximum number of participants.
    fn player_limits(&self) -> (usize, usize);

    /// Invoked by the host once the session has ended. The default does
    /// nothing; implementations may override it to record results.
    fn conclude(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
