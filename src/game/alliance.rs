use std::ops::Not;
use strum_macros::{EnumCount, EnumIter, FromRepr};

use crate::game::pieces::PieceKind;
use crate::game::square::{Coordinate, CoordinateExt, RANK_1, RANK_2, RANK_7, RANK_8};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr)]
pub enum Alliance {
    White = 0,
    Black = 1,
}

impl Not for Alliance {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }
}

impl Alliance {
    // Forward-direction sign in the tile index space; pawn pushes travel
    // 8 * direction() per rank.
    pub fn direction(self) -> i16 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub fn is_promotion_square(self, coordinate: Coordinate) -> bool {
        match self {
            Alliance::White => coordinate.is_on(RANK_8),
            Alliance::Black => coordinate.is_on(RANK_1),
        }
    }

    pub fn is_pawn_start_square(self, coordinate: Coordinate) -> bool {
        match self {
            Alliance::White => coordinate.is_on(RANK_2),
            Alliance::Black => coordinate.is_on(RANK_7),
        }
    }

    // Picks "the white one" or "the black one" from a pair of alternatives.
    pub fn choose<T>(self, white: T, black: T) -> T {
        match self {
            Alliance::White => white,
            Alliance::Black => black,
        }
    }

    pub fn positional_bonus(self, kind: PieceKind, coordinate: Coordinate) -> i32 {
        let table = match kind {
            PieceKind::Pawn => &PAWN_BONUS,
            PieceKind::Knight => &KNIGHT_BONUS,
            PieceKind::Bishop => &BISHOP_BONUS,
            PieceKind::Rook => &ROOK_BONUS,
            PieceKind::Queen => &QUEEN_BONUS,
            PieceKind::King => &KING_BONUS,
        };

        match self {
            Alliance::White => table[coordinate as usize],
            Alliance::Black => table[mirror(coordinate) as usize],
        }
    }
}

// Black reads the white-oriented tables through a vertical flip.
const fn mirror(coordinate: Coordinate) -> Coordinate {
    (7 - coordinate / 8) * 8 + coordinate % 8
}

// White-oriented piece-square tables, row for rank 8 first.
#[rustfmt::skip]
const PAWN_BONUS: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_BONUS: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_BONUS: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_BONUS: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_BONUS: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_BONUS: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];
