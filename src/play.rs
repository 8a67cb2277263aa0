//! Human versus random-bot game loop over arbitrary text I/O.

use std::io::{BufRead, Write};

use tracing::info;

use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{GameEngine, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Human plays [`Player::One`], `bot` plays [`Player::Two`]. Human moves first.
pub struct PlaySession<'a, R, W> {
    engine: GameEngine,
    bot: &'a mut dyn Agent,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> PlaySession<'a, R, W> {
    pub fn new(engine: GameEngine, bot: &'a mut dyn Agent, input: R, output: W) -> Self {
        PlaySession {
            engine,
            bot,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until someone wins or the board fills up.
    pub fn run(&mut self) -> Result<GameOutcome, PlayError> {
        let outcome = self.play_turns()?;
        match outcome {
            GameOutcome::Winner(Player::One) => {
                writeln!(self.output, "Congratulations! You have won!")?
            }
            GameOutcome::Winner(Player::Two) => writeln!(
                self.output,
                "Player 2 has won. You got beaten by a random bot..."
            )?,
            GameOutcome::Draw => writeln!(self.output, "The board is full. It's a draw!")?,
        }
        writeln!(self.output, "GAME OVER")?;
        self.output.flush()?;
        info!(?outcome, "game finished");
        Ok(outcome)
    }

    fn play_turns(&mut self) -> Result<GameOutcome, PlayError> {
        loop {
            let column = self.read_human_move()?;
            if let Some(outcome) = self.play(Player::One, column)? {
                return Ok(outcome);
            }

            let column = self.bot.select_action(&self.engine);
            writeln!(self.output, "{} plays column {}", self.bot.name(), column)?;
            if let Some(outcome) = self.play(Player::Two, column)? {
                return Ok(outcome);
            }
        }
    }

    /// Commit a move, show the board and report whether the game ended.
    fn play(&mut self, player: Player, column: usize) -> Result<Option<GameOutcome>, PlayError> {
        self.engine.apply_move(player, column, false)?;
        write!(self.output, "{}", self.engine.render())?;
        writeln!(self.output)?;

        if self.engine.check_win(player) {
            return Ok(Some(GameOutcome::Winner(player)));
        }
        if self.engine.is_full() {
            return Ok(Some(GameOutcome::Draw));
        }
        Ok(None)
    }

    /// Prompt until the human names a legal column.
    fn read_human_move(&mut self) -> Result<usize, PlayError> {
        let legal = self.engine.legal_moves();
        loop {
            writeln!(self.output, "Valid moves : {:?}", legal)?;
            write!(self.output, "Your move : ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(column) if legal.contains(&column) => return Ok(column),
                Ok(column) if column >= self.engine.n_columns() => writeln!(
                    self.output,
                    "Column {} does not exist, pick one of {:?}",
                    column, legal
                )?,
                Ok(column) => writeln!(self.output, "Column {} is full", column)?,
                Err(_) => writeln!(
                    self.output,
                    "'{}' is not a column number",
                    line.trim()
                )?,
            }
        }
    }
}
