use super::{Board, Player, COLS};

/// Lifecycle of one game. `Won` and `Tie` are absorbing: once reached, every
/// further move request is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tie,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of a `submit_move` call: the status after the move, plus the
/// (row, column) of the placed piece when one was placed. `placed` is `None`
/// for ignored input (terminal game, out-of-range column, full column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub status: GameStatus,
    pub placed: Option<(usize, usize)>,
}

/// Drives one game from start to its terminal status. Owns the board and the
/// active player exclusively; a new game means a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    pub fn new(starting_player: Player) -> Self {
        GameEngine {
            board: Board::new(),
            current_player: starting_player,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is next. On a finished game this is the player
    /// who moved last, since the active player only toggles after a
    /// non-terminal move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Play the active player's piece into a column. Invalid requests (game
    /// already over, column out of range, column full) are no-ops that report
    /// the unchanged status — they arise only from stale presentation-layer
    /// input and are not errors.
    pub fn submit_move(&mut self, column: usize) -> MoveReport {
        if self.is_terminal() || column >= COLS {
            return self.ignored();
        }
        let Some(row) = self.board.find_landing_row(column) else {
            return self.ignored();
        };

        self.board.occupy(row, column, self.current_player);

        // Win before tie: filling the last cell with a winning line is a win.
        if self.board.has_connect_four(self.current_player) {
            self.status = GameStatus::Won(self.current_player);
        } else if self.board.is_top_row_full() {
            self.status = GameStatus::Tie;
        } else {
            self.current_player = self.current_player.other();
        }

        MoveReport {
            status: self.status,
            placed: Some((row, column)),
        }
    }

    fn ignored(&self) -> MoveReport {
        MoveReport {
            status: self.status,
            placed: None,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Player::Red)
    }
}
