use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The four-in-a-row scan walks each of these from every starting cell:
/// right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Find the lowest empty row in a column, scanning from the bottom up.
    /// Returns `None` when the column is full. `col` must be in bounds.
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        debug_assert!(col < COLS, "column {col} out of range");
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Mark a cell for a player. The cell must be empty; callers obtain the
    /// coordinate from `find_landing_row` so pieces never overwrite or float.
    pub fn occupy(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(
            self.cells[row][col],
            Cell::Empty,
            "cell ({row}, {col}) already occupied"
        );
        self.cells[row][col] = player.to_cell();
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_landing_row(col).is_none()
    }

    /// True when every cell in the top row is occupied. Columns fill
    /// contiguously from the bottom, so a full top row means a full board.
    pub fn is_top_row_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Scan the whole board for a four-in-a-row belonging to `player`: from
    /// every cell, a line of four extends in each direction and wins iff all
    /// four cells are in bounds and held by the player.
    pub fn has_connect_four(&self, player: Player) -> bool {
        let target = player.to_cell();
        for row in 0..ROWS {
            for col in 0..COLS {
                for (dr, dc) in DIRECTIONS {
                    if self.line_matches(row as isize, col as isize, dr, dc, target) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn line_matches(&self, row: isize, col: isize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..4).all(|step| {
            let r = row + step * dr;
            let c = col + step * dc;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == target
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
