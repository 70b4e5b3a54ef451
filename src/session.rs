use crate::board::Board;
use crate::movegen::{generate, MoveCandidate};
use crate::types::{Color, Square};

/// The currently selected origin square and the candidates generated for it.
/// Cached so the front end can highlight them; discarded on any board change.
#[derive(Debug, Clone)]
pub struct Selection {
    pub square: Square,
    pub candidates: Vec<MoveCandidate>,
}

/// What a click did, so the front end can announce it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked and its candidates cached.
    Selected,
    /// A candidate destination was clicked and the move applied. `winner` is
    /// set when the move captured a king; play continues either way.
    Applied { winner: Option<Color> },
    /// The selection was discarded without touching the board.
    Cleared,
    /// No selection, and nothing selectable was clicked.
    Ignored,
}

/// One sitting of two-player chess: the board, the click-driven selection
/// state machine, and the render orientation.
pub struct Session {
    board: Board,
    selection: Option<Selection>,
    flipped: bool,
}

impl Session {
    pub fn new() -> Session {
        Session {
            board: Board::new(),
            selection: None,
            flipped: false,
        }
    }

    /// Back to the starting position, white to move, nothing selected,
    /// orientation unflipped.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn active_color(&self) -> Color {
        self.board.active_color()
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Feed one click into the state machine.
    ///
    /// Clicking a piece of the side to move selects it (replacing any prior
    /// selection); clicking a cached candidate applies the move; clicking
    /// anything else, the already selected square included, drops the
    /// selection. With no selection, clicks on unselectable squares do
    /// nothing.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.selection.as_ref().is_some_and(|s| s.square == square) {
            self.selection = None;
            return ClickOutcome::Cleared;
        }

        if self
            .board
            .piece_at(square)
            .is_some_and(|p| p.color == self.board.active_color())
        {
            let candidates = generate(&self.board, square);
            self.selection = Some(Selection { square, candidates });
            return ClickOutcome::Selected;
        }

        match self.selection.take() {
            Some(selection) => {
                if selection.candidates.iter().any(|c| c.to == square) {
                    let (board, winner) = self.board.apply_move(selection.square, square);
                    self.board = board;
                    ClickOutcome::Applied { winner }
                } else {
                    ClickOutcome::Cleared
                }
            }
            None => ClickOutcome::Ignored,
        }
    }
}

#[cfg(test)]
impl Session {
    /// A session over an arbitrary position, for tests.
    pub(crate) fn with_board(board: Board) -> Session {
        Session {
            board,
            selection: None,
            flipped: false,
        }
    }
}
