/// One of the four lines along which a streak can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDownRight,
    /// Top-right to bottom-left (/)
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Unit step as (row delta, column delta). Row 0 is the top.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Cell offsets, relative to an anchor, that make up one winning line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPattern {
    direction: Direction,
    offsets: Vec<(isize, isize)>,
}

impl WinPattern {
    pub fn new(direction: Direction, length: usize) -> Self {
        let (dr, dc) = direction.step();
        let offsets = (0..length as isize).map(|i| (i * dr, i * dc)).collect();
        WinPattern { direction, offsets }
    }

    /// Build the horizontal, vertical and both diagonal patterns for a streak length.
    pub fn all(length: usize) -> [WinPattern; 4] {
        Direction::ALL.map(|direction| WinPattern::new(direction, length))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
