use crate::types::{Color, Piece, PieceType, Square};

/// Back rank layout, shared by both colors in the starting position.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8x8 board plus the side to move. All state mutation goes through
/// [`Board::apply_move`]; move generation only reads it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    active_color: Color,
}

impl Board {
    /// The standard starting position, white to move.
    pub fn new() -> Board {
        let mut squares = [[None; 8]; 8];
        for (col, piece_type) in BACK_RANK.into_iter().enumerate() {
            squares[0][col] = Some(Piece {
                color: Color::Black,
                piece_type,
            });
            squares[7][col] = Some(Piece {
                color: Color::White,
                piece_type,
            });
        }
        for col in 0..8 {
            squares[1][col] = Some(Piece {
                color: Color::Black,
                piece_type: PieceType::Pawn,
            });
            squares[6][col] = Some(Piece {
                color: Color::White,
                piece_type: PieceType::Pawn,
            });
        }
        Board {
            squares,
            active_color: Color::White,
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// The color of the side to move.
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Apply a previously generated move, returning the successor board and,
    /// if the overwritten piece was a king, the winning color.
    ///
    /// `from` must hold a piece; the session layer only calls this with a
    /// candidate produced by [`crate::movegen::generate`]. Anything at `to`
    /// is overwritten, and a pawn arriving on its far rank leaves the board
    /// as a queen. The turn flips unconditionally.
    pub fn apply_move(&self, from: Square, to: Square) -> (Board, Option<Color>) {
        let mover = self
            .piece_at(from)
            .expect("apply_move called with an empty origin square");

        let winner = match self.piece_at(to) {
            Some(captured) if captured.piece_type == PieceType::King => Some(mover.color),
            _ => None,
        };

        let arriving =
            if mover.piece_type == PieceType::Pawn && to.row == mover.color.promotion_row() {
                Piece {
                    color: mover.color,
                    piece_type: PieceType::Queen,
                }
            } else {
                mover
            };

        let mut squares = self.squares;
        squares[from.row as usize][from.col as usize] = None;
        squares[to.row as usize][to.col as usize] = Some(arriving);

        (
            Board {
                squares,
                active_color: self.active_color.other_color(),
            },
            winner,
        )
    }

}

#[cfg(test)]
impl Board {
    /// A board with no pieces on it, for setting up test positions.
    pub(crate) fn empty(active_color: Color) -> Board {
        Board {
            squares: [[None; 8]; 8],
            active_color,
        }
    }

    pub(crate) fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row as usize][square.col as usize] = Some(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.active_color(), Color::White);

        // back ranks, black on row 0 and white on row 7
        for (col, piece_type) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            assert_eq!(
                board.piece_at(Square { row: 0, col }),
                Some(Piece {
                    color: Color::Black,
                    piece_type
                })
            );
            assert_eq!(
                board.piece_at(Square { row: 7, col }),
                Some(Piece {
                    color: Color::White,
                    piece_type
                })
            );
        }

        // pawn rows
        for col in 0..8 {
            assert_eq!(
                board.piece_at(Square { row: 1, col }),
                Some(Piece::from_char('p'))
            );
            assert_eq!(
                board.piece_at(Square { row: 6, col }),
                Some(Piece::from_char('P'))
            );
        }

        // rows 2-5 empty
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.piece_at(Square { row, col }), None);
            }
        }
    }

    #[test]
    fn test_queen_starts_on_own_color() {
        let board = Board::new();
        assert_eq!(board.piece_at(sq("d1")), Some(Piece::from_char('Q')));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::from_char('q')));
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::from_char('K')));
        assert_eq!(board.piece_at(sq("e8")), Some(Piece::from_char('k')));
    }

    #[test]
    fn test_reset_is_idempotent() {
        assert_eq!(Board::new(), Board::new());
    }

    #[test]
    fn test_apply_move_moves_piece_and_flips_turn() {
        let board = Board::new();
        let (board, winner) = board.apply_move(sq("e2"), sq("e4"));
        assert_eq!(winner, None);
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.piece_at(sq("e4")), Some(Piece::from_char('P')));
        assert_eq!(board.active_color(), Color::Black);

        // applying a second move brings the turn back to white
        let (board, winner) = board.apply_move(sq("e7"), sq("e5"));
        assert_eq!(winner, None);
        assert_eq!(board.active_color(), Color::White);
    }

    #[test]
    fn test_apply_move_capture_overwrites_destination() {
        let mut board = Board::empty(Color::White);
        board.place(sq("d4"), Piece::from_char('R'));
        board.place(sq("d7"), Piece::from_char('n'));

        let (board, winner) = board.apply_move(sq("d4"), sq("d7"));
        assert_eq!(winner, None);
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::from_char('R')));
        assert_eq!(board.piece_at(sq("d4")), None);
    }

    #[test]
    fn test_white_pawn_promotes_to_queen() {
        let mut board = Board::empty(Color::White);
        board.place(sq("b7"), Piece::from_char('P'));

        let (board, winner) = board.apply_move(sq("b7"), sq("b8"));
        assert_eq!(winner, None);
        assert_eq!(board.piece_at(sq("b8")), Some(Piece::from_char('Q')));
    }

    #[test]
    fn test_black_pawn_promotes_to_queen() {
        let mut board = Board::empty(Color::Black);
        board.place(sq("g2"), Piece::from_char('p'));

        let (board, _) = board.apply_move(sq("g2"), sq("g1"));
        assert_eq!(board.piece_at(sq("g1")), Some(Piece::from_char('q')));
    }

    #[test]
    fn test_pawn_promotes_on_diagonal_capture() {
        let mut board = Board::empty(Color::White);
        board.place(sq("b7"), Piece::from_char('P'));
        board.place(sq("c8"), Piece::from_char('r'));

        let (board, winner) = board.apply_move(sq("b7"), sq("c8"));
        assert_eq!(winner, None);
        assert_eq!(board.piece_at(sq("c8")), Some(Piece::from_char('Q')));
    }

    #[test]
    fn test_non_pawn_does_not_promote() {
        let mut board = Board::empty(Color::White);
        board.place(sq("b7"), Piece::from_char('R'));

        let (board, _) = board.apply_move(sq("b7"), sq("b8"));
        assert_eq!(board.piece_at(sq("b8")), Some(Piece::from_char('R')));
    }

    #[test]
    fn test_king_capture_signals_win_and_play_continues() {
        let mut board = Board::empty(Color::White);
        board.place(sq("d4"), Piece::from_char('R'));
        board.place(sq("d8"), Piece::from_char('k'));
        board.place(sq("a1"), Piece::from_char('K'));

        let (board, winner) = board.apply_move(sq("d4"), sq("d8"));
        assert_eq!(winner, Some(Color::White));
        // the moving piece sits on the captured king's square
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::from_char('R')));
        // the board stays interactive: black is to move and can still apply moves
        assert_eq!(board.active_color(), Color::Black);
        let (board, _) = board.apply_move(sq("a1"), sq("a2"));
        assert_eq!(board.piece_at(sq("a2")), Some(Piece::from_char('K')));
    }

    #[test]
    #[should_panic]
    fn test_apply_move_from_empty_square_panics() {
        let board = Board::empty(Color::White);
        board.apply_move(sq("e2"), sq("e4"));
    }
}
