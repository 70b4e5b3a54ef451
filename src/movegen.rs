use itertools::iproduct;

use crate::board::Board;
use crate::types::{Piece, PieceType, Square};

/// A generated, not yet applied destination. `capture` is true iff an enemy
/// piece currently occupies the destination.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MoveCandidate {
    pub to: Square,
    pub capture: bool,
}

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pseudo-legal destinations for whatever stands on `origin`.
///
/// Pseudo-legal means the move obeys the piece's movement rules, stays on
/// the board and does not pass through or land on friendly pieces. There is
/// no check filtering of any kind: a king may move onto an attacked square,
/// and moving a piece may expose its own king.
///
/// An empty `origin` yields no candidates. The result is recomputed from the
/// board on every call; it must not be cached across [`Board::apply_move`].
pub fn generate(board: &Board, origin: Square) -> Vec<MoveCandidate> {
    let piece = match board.piece_at(origin) {
        Some(p) => p,
        None => return vec![],
    };

    match piece.piece_type {
        PieceType::Pawn => pawn_candidates(board, &piece, origin),
        PieceType::Rook => ray_candidates(board, &piece, origin, &ROOK_DIRECTIONS),
        PieceType::Knight => knight_candidates(board, &piece, origin),
        PieceType::Bishop => ray_candidates(board, &piece, origin, &BISHOP_DIRECTIONS),
        PieceType::Queen => {
            let mut bishop = ray_candidates(board, &piece, origin, &BISHOP_DIRECTIONS);
            let mut rook = ray_candidates(board, &piece, origin, &ROOK_DIRECTIONS);
            bishop.append(&mut rook);
            bishop
        }
        PieceType::King => king_candidates(board, &piece, origin),
    }
}

fn pawn_candidates(board: &Board, piece: &Piece, origin: Square) -> Vec<MoveCandidate> {
    let mut moves: Vec<MoveCandidate> = vec![];
    let forward = piece.color.forward();

    // one square forward, requires the square to be empty
    if let Some(one_step) = origin.offset(forward, 0) {
        if board.piece_at(one_step).is_none() {
            moves.push(MoveCandidate {
                to: one_step,
                capture: false,
            });

            // two squares from the start row, requires both squares empty
            if origin.row == piece.color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.piece_at(two_step).is_none() {
                        moves.push(MoveCandidate {
                            to: two_step,
                            capture: false,
                        });
                    }
                }
            }
        }
    }

    // forward diagonals, only onto enemy pieces
    for col_delta in [-1, 1] {
        if let Some(diagonal) = origin.offset(forward, col_delta) {
            if board
                .piece_at(diagonal)
                .is_some_and(|other| other.color != piece.color)
            {
                moves.push(MoveCandidate {
                    to: diagonal,
                    capture: true,
                });
            }
        }
    }
    moves
}

fn knight_candidates(board: &Board, piece: &Piece, origin: Square) -> Vec<MoveCandidate> {
    let mut moves: Vec<MoveCandidate> = vec![];

    for (row_delta, col_delta) in
        std::iter::zip([-2, -2, -1, -1, 1, 1, 2, 2], [-1, 1, -2, 2, -2, 2, -1, 1])
    {
        let target = match origin.offset(row_delta, col_delta) {
            Some(target) => target,
            None => continue,
        };
        match board.piece_at(target) {
            Some(other) if other.color == piece.color => continue,
            other => moves.push(MoveCandidate {
                to: target,
                capture: other.is_some(),
            }),
        }
    }
    moves
}

fn king_candidates(board: &Board, piece: &Piece, origin: Square) -> Vec<MoveCandidate> {
    let mut moves: Vec<MoveCandidate> = vec![];

    for (row_delta, col_delta) in iproduct!(-1i8..=1, -1i8..=1) {
        if row_delta == 0 && col_delta == 0 {
            continue;
        }
        let target = match origin.offset(row_delta, col_delta) {
            Some(target) => target,
            None => continue,
        };
        match board.piece_at(target) {
            Some(other) if other.color == piece.color => continue,
            other => moves.push(MoveCandidate {
                to: target,
                capture: other.is_some(),
            }),
        }
    }
    moves
}

/// What probing one square along a sliding piece's ray found.
enum PotentialMove {
    Valid(Option<Piece>),
    Invalid,
}

fn check_move_target(board: &Board, mover: &Piece, candidate: Square) -> PotentialMove {
    match board.piece_at(candidate) {
        Some(other) => {
            if other.color == mover.color {
                // friendly piece, the ray ends with no candidate here
                PotentialMove::Invalid
            } else {
                // a capture, and no need to look past it
                PotentialMove::Valid(Some(other))
            }
        }
        None => PotentialMove::Valid(None),
    }
}

fn ray_candidates(
    board: &Board,
    piece: &Piece,
    origin: Square,
    directions: &[(i8, i8)],
) -> Vec<MoveCandidate> {
    let mut moves: Vec<MoveCandidate> = vec![];

    for (row_delta, col_delta) in directions {
        let mut cursor = origin;
        while let Some(next) = cursor.offset(*row_delta, *col_delta) {
            match check_move_target(board, piece, next) {
                PotentialMove::Invalid => break,
                PotentialMove::Valid(maybe_other) => {
                    moves.push(MoveCandidate {
                        to: next,
                        capture: maybe_other.is_some(),
                    });
                    if maybe_other.is_some() {
                        break;
                    }
                }
            }
            cursor = next;
        }
    }
    moves
}
