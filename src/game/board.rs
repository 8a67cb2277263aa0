use std::fmt;

use super::pattern::WinPattern;
use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// Glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player1 => '\u{25cf}',
            Cell::Player2 => '\u{25cb}',
        }
    }

    /// Position of this cell state in a one-hot encoding.
    pub fn index(self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Player1 => 1,
            Cell::Player2 => 2,
        }
    }
}

/// Grid of cells. Row 0 is the top, row `n_rows - 1` is the bottom.
///
/// Cells can only be changed from inside the `game` module, through
/// [`GameEngine`](super::GameEngine), so every board handed out obeys gravity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    n_rows: usize,
    n_columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(n_rows: usize, n_columns: usize) -> Self {
        Board {
            n_rows,
            n_columns,
            cells: vec![Cell::Empty; n_rows * n_columns],
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.n_columns + col]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.n_columns {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Row a piece dropped into `col` would land on, if the column has room.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.n_columns {
            return None;
        }
        (0..self.n_rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.n_columns).all(|col| self.is_column_full(col))
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// On error the board is left untouched.
    pub(super) fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.n_columns {
            return Err(MoveError::OutOfRange {
                column: col,
                n_columns: self.n_columns,
            });
        }

        let row = self
            .landing_row(col)
            .ok_or(MoveError::IllegalMove { column: col })?;
        self.cells[row * self.n_columns + col] = cell;
        Ok(row)
    }

    pub(super) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Whether any of `patterns`, placed fully inside the grid, is covered by `cell`.
    ///
    /// Always false for [`Cell::Empty`]: an empty line is not a streak.
    pub fn has_streak(&self, cell: Cell, patterns: &[WinPattern]) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        for row in 0..self.n_rows {
            for col in 0..self.n_columns {
                if self.get(row, col) != cell {
                    continue;
                }
                if patterns
                    .iter()
                    .any(|pattern| !pattern.is_empty() && self.covers(row, col, pattern, cell))
                {
                    return true;
                }
            }
        }

        false
    }

    fn covers(&self, row: usize, col: usize, pattern: &WinPattern, cell: Cell) -> bool {
        pattern.offsets().iter().all(|&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            r >= 0
                && c >= 0
                && (r as usize) < self.n_rows
                && (c as usize) < self.n_columns
                && self.get(r as usize, c as usize) == cell
        })
    }

    /// Human-readable grid with column labels underneath.
    pub fn render(&self) -> String {
        let width = self.n_columns + 2;
        let mut out = String::new();

        out.push_str(&"_".repeat(width));
        out.push('\n');
        for row in 0..self.n_rows {
            out.push('|');
            for col in 0..self.n_columns {
                out.push(self.get(row, col).glyph());
            }
            out.push_str("|\n");
        }
        out.push_str(&"\u{2588}".repeat(width));
        out.push('\n');

        out.push(' ');
        for col in 0..self.n_columns {
            out.push_str(&(col % 10).to_string());
        }
        out.push_str(" \n");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
