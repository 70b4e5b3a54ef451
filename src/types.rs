use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn from_case(c: char) -> Color {
        if c.is_uppercase() {
            Color::White
        } else if c.is_lowercase() {
            Color::Black
        } else {
            panic!("Color char must be either upper or lowercase.")
        }
    }

    pub fn other_color(&self) -> Color {
        if *self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Row delta of one forward pawn step. White pawns move toward row 0.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row this color's pawns start on.
    pub fn pawn_start_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Far rank for this color. A pawn arriving here promotes.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    pub fn from_char(c: char) -> PieceType {
        match c.to_lowercase().next().unwrap() {
            'p' => PieceType::Pawn,
            'r' => PieceType::Rook,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            other => panic!("Unrecognized piece type {other}."),
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// A board coordinate. Row 0 is Black's back rank, row 7 is White's;
/// column 0 is the a-file.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Build a square from signed coordinates, `None` if off the board.
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The square `row_delta` rows and `col_delta` columns away, `None` if off the board.
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Option<Square> {
        Square::new(self.row as i8 + row_delta, self.col as i8 + col_delta)
    }

    /// Parse algebraic notation like `e2`. Rejects anything off the board.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut char_iter = s.chars();
        let file_char = char_iter.next()?;
        let rank_char = char_iter.next()?;
        if char_iter.next().is_some() {
            return None;
        }

        if !file_char.is_ascii_lowercase() || !rank_char.is_ascii_digit() {
            return None;
        }
        let col = (file_char as u8 - b'a') as i8;
        let rank = (rank_char as u8 - b'0') as i8;
        if !(1..=8).contains(&rank) {
            return None;
        }
        Square::new(8 - rank, col)
    }

    pub fn to_algebraic(&self) -> String {
        format!(
            "{}{}",
            (self.col + b'a') as char,
            (8 - self.row + b'0') as char
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}

/// Glyphs for each piece kind, same symbols the board is drawn with.
static GLYPHS: Lazy<HashMap<(Color, PieceType), &'static str>> = Lazy::new(|| {
    HashMap::from([
        ((Color::White, PieceType::Pawn), "♙"),
        ((Color::White, PieceType::Rook), "♖"),
        ((Color::White, PieceType::Knight), "♘"),
        ((Color::White, PieceType::Bishop), "♗"),
        ((Color::White, PieceType::Queen), "♕"),
        ((Color::White, PieceType::King), "♔"),
        ((Color::Black, PieceType::Pawn), "♟︎"),
        ((Color::Black, PieceType::Rook), "♜"),
        ((Color::Black, PieceType::Knight), "♞"),
        ((Color::Black, PieceType::Bishop), "♝"),
        ((Color::Black, PieceType::Queen), "♛"),
        ((Color::Black, PieceType::King), "♚"),
    ])
});

impl Piece {
    pub fn from_char(c: char) -> Piece {
        Piece {
            color: Color::from_case(c),
            piece_type: PieceType::from_char(c),
        }
    }

    pub fn to_symbol(&self) -> &'static str {
        GLYPHS[&(self.color, self.piece_type)]
    }

    /// Single letter form, upper case for white and lower case for black.
    pub fn to_letter(&self) -> char {
        match self.color {
            Color::White => self.piece_type.to_char(),
            Color::Black => self.piece_type.to_char().to_ascii_lowercase(),
        }
    }
}
