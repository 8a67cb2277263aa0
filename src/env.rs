//! Reinforcement-learning wrapper around a single [`GameEngine`].

use crate::ai::encode_board;
use crate::error::MoveError;
use crate::game::{Board, GameEngine, Player};

/// Result of committing one move with [`Connect4Env::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub board: Board,
    pub state: Vec<f32>,
    pub reward: f32,
    pub done: bool,
}

/// A hypothetical next position and the column that leads to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Afterstate {
    pub board: Board,
    pub state: Vec<f32>,
    pub action: usize,
}

/// Environment in which one player's moves are driven by an RL agent.
#[derive(Debug, Clone)]
pub struct Connect4Env {
    engine: GameEngine,
    player: Player,
}

impl Connect4Env {
    pub fn new(engine: GameEngine, player: Player) -> Self {
        Connect4Env { engine, player }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The player whose moves `step` plays and whose wins it rewards.
    pub fn player(&self) -> Player {
        self.player
    }

    /// One-hot observation of the current board.
    pub fn state(&self) -> Vec<f32> {
        encode_board(self.engine.board())
    }

    /// Commit the agent's move. Reward is 1.0 if it wins the game.
    pub fn step(&mut self, action: usize) -> Result<Transition, MoveError> {
        let board = self.engine.apply_move(self.player, action, false)?;
        let won = self.engine.check_win(self.player);
        let done = won || board.is_full();
        if done {
            tracing::debug!(player = self.player.id(), won, "episode finished");
        }

        Ok(Transition {
            state: encode_board(&board),
            board,
            reward: if won { 1.0 } else { 0.0 },
            done,
        })
    }

    /// Play `action` for the opponent, so a driver can alternate turns
    /// without reaching into the engine.
    pub fn opponent_step(&mut self, action: usize) -> Result<Transition, MoveError> {
        let opponent = self.player.other();
        let board = self.engine.apply_move(opponent, action, false)?;
        let lost = self.engine.check_win(opponent);

        Ok(Transition {
            state: encode_board(&board),
            done: lost || board.is_full(),
            board,
            reward: if lost { -1.0 } else { 0.0 },
        })
    }

    /// Every position the agent could reach in one move. The engine is not
    /// modified.
    pub fn get_successors(&mut self) -> Vec<Afterstate> {
        let mut afterstates = Vec::new();
        for action in self.engine.legal_moves() {
            match self.engine.apply_move(self.player, action, true) {
                Ok(board) => afterstates.push(Afterstate {
                    state: encode_board(&board),
                    board,
                    action,
                }),
                Err(err) => unreachable!("legal move {action} rejected: {err}"),
            }
        }
        afterstates
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn render(&self) -> String {
        self.engine.render()
    }
}

impl Default for Connect4Env {
    fn default() -> Self {
        Self::new(GameEngine::default(), Player::One)
    }
}
