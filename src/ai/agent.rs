use crate::game::GameEngine;

/// Anything that can pick a column to play.
pub trait Agent {
    /// Select a column from `engine.legal_moves()`.
    fn select_action(&mut self, engine: &GameEngine) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
