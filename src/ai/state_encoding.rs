use crate::game::{Board, Cell};

/// Number of one-hot channels per cell: Empty, Player1, Player2.
pub const CHANNELS: usize = 3;

/// Encode a board as a flat one-hot array of shape [n_rows, n_columns, 3].
///
/// Index `(row * n_columns + col) * 3 + channel`, with channel 0 for Empty,
/// 1 for Player1 and 2 for Player2. Exactly one channel is set per cell.
pub fn encode_board(board: &Board) -> Vec<f32> {
    let mut data = vec![0.0f32; board.cells().len() * CHANNELS];
    for (idx, cell) in board.cells().iter().enumerate() {
        data[idx * CHANNELS + cell.index()] = 1.0;
    }
    data
}

/// Shape of [`encode_board`]'s output as `[n_rows, n_columns, channels]`.
pub fn encoded_shape(board: &Board) -> [usize; 3] {
    [board.n_rows(), board.n_columns(), CHANNELS]
}

/// Read back the cell at `(row, col)` from an encoding. `None` if the cell's
/// channels are not exactly one-hot.
pub fn decode_cell(data: &[f32], n_columns: usize, row: usize, col: usize) -> Option<Cell> {
    let base = (row * n_columns + col) * CHANNELS;
    let channels = data.get(base..base + CHANNELS)?;
    if channels.iter().any(|&v| v != 0.0 && v != 1.0) {
        return None;
    }
    let mut hot = channels
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == 1.0)
        .map(|(channel, _)| channel);
    let channel = hot.next()?;
    if hot.next().is_some() {
        return None;
    }
    match channel {
        0 => Some(Cell::Empty),
        1 => Some(Cell::Player1),
        _ => Some(Cell::Player2),
    }
}
