use std::path::PathBuf;

/// Errors raised by [`GameEngine::apply_move`](crate::game::GameEngine::apply_move).
///
/// Both variants are caller bugs: consult `legal_moves()` first. A failed
/// move never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {n_columns} columns)")]
    OutOfRange { column: usize, n_columns: usize },

    #[error("column {column} is already full")]
    IllegalMove { column: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end an interactive session early.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::IllegalMove { column: 3 };
        assert_eq!(err.to_string(), "column 3 is already full");

        let err = MoveError::OutOfRange {
            column: 9,
            n_columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.n_rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.n_rows must be > 0"
        );
    }

    #[test]
    fn test_play_error_from_move_error() {
        let err: PlayError = MoveError::IllegalMove { column: 0 }.into();
        assert_eq!(err.to_string(), "move rejected: column 0 is already full");
    }
}
