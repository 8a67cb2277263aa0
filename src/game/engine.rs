use tracing::{debug, trace};

use super::board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS};
use super::pattern::WinPattern;
use super::Player;
use crate::config::EngineConfig;
use crate::error::{ConfigError, MoveError};

pub const DEFAULT_WIN_STREAK: usize = 4;

/// Owns one board and the win patterns for its streak length.
///
/// The engine is the only thing allowed to mutate its board. Callers get
/// copies back from [`apply_move`](GameEngine::apply_move) and a shared
/// reference from [`board`](GameEngine::board).
#[derive(Debug, Clone, PartialEq)]
pub struct GameEngine {
    board: Board,
    win_streak: usize,
    patterns: [WinPattern; 4],
}

impl GameEngine {
    /// Create an engine with an empty `n_rows x n_columns` board.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are invalid (see [`EngineConfig::validate`]).
    /// Use [`GameEngine::from_config`] to get an error instead.
    pub fn new(n_rows: usize, n_columns: usize, win_streak: usize) -> Self {
        let config = EngineConfig {
            n_rows,
            n_columns,
            win_streak,
        };
        if let Err(err) = config.validate() {
            panic!("invalid engine dimensions: {err}");
        }
        Self::build(&config)
    }

    /// Create an engine from validated configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &EngineConfig) -> Self {
        GameEngine {
            board: Board::new(config.n_rows, config.n_columns),
            win_streak: config.win_streak,
            patterns: WinPattern::all(config.win_streak),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn n_rows(&self) -> usize {
        self.board.n_rows()
    }

    pub fn n_columns(&self) -> usize {
        self.board.n_columns()
    }

    pub fn win_streak(&self) -> usize {
        self.win_streak
    }

    pub fn patterns(&self) -> &[WinPattern] {
        &self.patterns
    }

    /// Columns whose top cell is still empty, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.n_columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Drop `player`'s piece into `column` and return the resulting board.
    ///
    /// With `simulate` set the move is played on a copy and the engine's own
    /// board is left as it was. Otherwise the move is committed. Errors leave
    /// every board untouched.
    pub fn apply_move(
        &mut self,
        player: Player,
        column: usize,
        simulate: bool,
    ) -> Result<Board, MoveError> {
        if simulate {
            let mut next = self.board.clone();
            let row = next.drop_piece(column, player.to_cell())?;
            trace!(player = player.id(), column, row, "simulated move");
            return Ok(next);
        }

        let row = self.board.drop_piece(column, player.to_cell())?;
        debug!(player = player.id(), column, row, "applied move");
        Ok(self.board.clone())
    }

    /// Whether `player` has a streak of at least `win_streak` in any direction.
    pub fn check_win(&self, player: Player) -> bool {
        self.board.has_streak(player.to_cell(), &self.patterns)
    }

    /// Clear the board.
    pub fn reset(&mut self) {
        self.board.clear();
        debug!(
            n_rows = self.n_rows(),
            n_columns = self.n_columns(),
            "board reset"
        );
    }

    pub fn render(&self) -> String {
        self.board.render()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_WIN_STREAK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn diff_count(a: &Board, b: &Board) -> usize {
        a.cells()
            .iter()
            .zip(b.cells())
            .filter(|(x, y)| x != y)
            .count()
    }

    /// Fill the cells below `row` in `column` with alternating filler, then
    /// place `player` at `row`.
    fn place(engine: &mut GameEngine, player: Player, row: usize, column: usize) {
        let mut filler = player.other();
        while engine.board().landing_row(column) != Some(row) {
            engine.apply_move(filler, column, false).unwrap();
            filler = filler.other();
        }
        engine.apply_move(player, column, false).unwrap();
    }

    #[test]
    fn test_defaults() {
        let engine = GameEngine::default();
        assert_eq!(engine.n_rows(), 6);
        assert_eq!(engine.n_columns(), 7);
        assert_eq!(engine.win_streak(), 4);
        assert_eq!(engine.patterns().len(), 4);
    }

    #[test]
    fn test_legal_moves_initial() {
        let engine = GameEngine::default();
        assert_eq!(engine.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_legal_moves_skips_full_column() {
        let mut engine = GameEngine::default();
        for _ in 0..6 {
            engine.apply_move(Player::One, 2, false).unwrap();
        }
        assert_eq!(engine.legal_moves(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_legal_moves_empty_only_when_full() {
        let mut engine = GameEngine::new(2, 2, 2);
        let mut player = Player::One;
        while let Some(&col) = engine.legal_moves().first() {
            assert!(!engine.is_full());
            engine.apply_move(player, col, false).unwrap();
            player = player.other();
        }
        assert!(engine.is_full());
    }

    #[test]
    fn test_commit_changes_one_cell() {
        let mut engine = GameEngine::default();
        let before = engine.board().clone();
        let after = engine.apply_move(Player::One, 3, false).unwrap();

        assert_eq!(diff_count(&before, &after), 1);
        assert_eq!(&after, engine.board());
        assert_eq!(after.get(5, 3), Cell::Player1);
    }

    #[test]
    fn test_simulate_leaves_engine_untouched() {
        let mut engine = GameEngine::default();
        engine.apply_move(Player::Two, 0, false).unwrap();
        let before = engine.board().clone();

        let afterstate = engine.apply_move(Player::One, 0, true).unwrap();

        assert_eq!(engine.board(), &before);
        assert_eq!(diff_count(&before, &afterstate), 1);
        assert_eq!(afterstate.get(4, 0), Cell::Player1);
    }

    #[test]
    fn test_simulate_then_commit_match() {
        let mut engine = GameEngine::default();
        engine.apply_move(Player::One, 4, false).unwrap();

        let simulated = engine.apply_move(Player::Two, 4, true).unwrap();
        let committed = engine.apply_move(Player::Two, 4, false).unwrap();
        assert_eq!(simulated, committed);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut engine = GameEngine::default();
        for _ in 0..6 {
            engine.apply_move(Player::One, 1, false).unwrap();
        }
        let before = engine.board().clone();

        for simulate in [true, false] {
            assert_eq!(
                engine.apply_move(Player::Two, 1, simulate),
                Err(MoveError::IllegalMove { column: 1 })
            );
        }
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut engine = GameEngine::default();
        let err = engine.apply_move(Player::One, 9, false).unwrap_err();
        assert_eq!(
            err,
            MoveError::OutOfRange {
                column: 9,
                n_columns: 7
            }
        );
        assert_eq!(engine.board(), &Board::default());
    }

    #[test]
    fn test_horizontal_win() {
        let mut engine = GameEngine::default();
        for col in 0..4 {
            engine.apply_move(Player::One, col, false).unwrap();
        }
        assert!(engine.check_win(Player::One));
        assert!(!engine.check_win(Player::Two));
    }

    #[test]
    fn test_vertical_win() {
        let mut engine = GameEngine::default();
        for _ in 0..4 {
            engine.apply_move(Player::Two, 6, false).unwrap();
        }
        assert!(engine.check_win(Player::Two));
        assert!(!engine.check_win(Player::One));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut engine = GameEngine::default();
        for (row, col) in [(5, 0), (4, 1), (3, 2), (2, 3)] {
            place(&mut engine, Player::One, row, col);
        }
        assert!(engine.check_win(Player::One));
        assert!(!engine.check_win(Player::Two));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut engine = GameEngine::default();
        for (row, col) in [(2, 3), (3, 4), (4, 5), (5, 6)] {
            place(&mut engine, Player::Two, row, col);
        }
        assert!(engine.check_win(Player::Two));
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let engine = GameEngine::default();
        assert!(!engine.check_win(Player::One));
        assert!(!engine.check_win(Player::Two));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut engine = GameEngine::default();
        for col in 0..3 {
            engine.apply_move(Player::One, col, false).unwrap();
            engine.apply_move(Player::Two, col, false).unwrap();
        }
        assert!(!engine.check_win(Player::One));
        assert!(!engine.check_win(Player::Two));
    }

    #[test]
    fn test_custom_win_streak() {
        let mut engine = GameEngine::new(6, 7, 5);
        for col in 0..4 {
            engine.apply_move(Player::One, col, false).unwrap();
        }
        assert!(!engine.check_win(Player::One));
        engine.apply_move(Player::One, 4, false).unwrap();
        assert!(engine.check_win(Player::One));
    }

    #[test]
    fn test_reset_matches_fresh_engine() {
        let mut engine = GameEngine::default();
        for col in [0, 3, 3, 6] {
            engine.apply_move(Player::One, col, false).unwrap();
        }
        engine.reset();

        assert_eq!(engine, GameEngine::default());
        assert_eq!(engine.legal_moves().len(), 7);
    }

    #[test]
    fn test_from_config_rejects_bad_dimensions() {
        let config = EngineConfig {
            n_rows: 0,
            n_columns: 7,
            win_streak: 4,
        };
        assert!(matches!(
            GameEngine::from_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    #[should_panic(expected = "invalid engine dimensions")]
    fn test_new_panics_on_oversized_streak() {
        GameEngine::new(3, 3, 4);
    }
}
