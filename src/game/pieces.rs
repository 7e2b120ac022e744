use strum_macros::{EnumCount, EnumIter, FromRepr};

use crate::game::alliance::Alliance;
use crate::game::board::{Board, PieceMap};
use crate::game::moves::Move;
use crate::game::square::{
    Coordinate, CoordinateExt, FILE_A, FILE_B, FILE_G, FILE_H, is_valid_coordinate,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumCount, FromRepr)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

// Pawn promotion targets, strongest first.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub alliance: Alliance,
    pub coordinate: Coordinate,
    pub first_move: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, alliance: Alliance, coordinate: Coordinate) -> Piece {
        Piece {
            kind,
            alliance,
            coordinate,
            first_move: true,
        }
    }

    // For setting up mid-game positions where the piece has already moved.
    pub fn stationary(kind: PieceKind, alliance: Alliance, coordinate: Coordinate) -> Piece {
        Piece {
            kind,
            alliance,
            coordinate,
            first_move: false,
        }
    }

    pub fn move_to(&self, destination: Coordinate) -> Piece {
        Piece {
            coordinate: destination,
            first_move: false,
            ..*self
        }
    }

    pub fn to_char(&self) -> char {
        self.alliance.choose(
            self.kind.to_char().to_ascii_uppercase(),
            self.kind.to_char(),
        )
    }

    pub fn positional_bonus(&self) -> i32 {
        self.alliance.positional_bonus(self.kind, self.coordinate)
    }

    // Moves obeying the piece's movement rules, before any self-check
    // filtering; castling is derived by the Player, not here.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Move> {
        pseudo_legal_moves(self, board.piece_map(), board.en_passant_pawn())
    }
}

const BISHOP_DIRECTIONS: [i16; 4] = [-9, -7, 7, 9];
const ROOK_DIRECTIONS: [i16; 4] = [-8, -1, 1, 8];
const QUEEN_DIRECTIONS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const KNIGHT_OFFSETS: [i16; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i16; 8] = QUEEN_DIRECTIONS;

// Squares from which the given offset would wrap across a board edge.
const fn exclusion_mask(offset: i16) -> u64 {
    match offset {
        -9 | -1 | 7 => FILE_A,
        -7 | 1 | 9 => FILE_H,
        -17 | 15 => FILE_A,
        -15 | 17 => FILE_H,
        -10 | 6 => FILE_A | FILE_B,
        -6 | 10 => FILE_G | FILE_H,
        _ => 0,
    }
}

pub(crate) fn pseudo_legal_moves(
    piece: &Piece,
    pieces: &PieceMap,
    en_passant: Option<&Piece>,
) -> Vec<Move> {
    let mut moves = match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, pieces, en_passant),
        PieceKind::Knight => leaper_moves(piece, pieces, &KNIGHT_OFFSETS),
        PieceKind::Bishop => sliding_moves(piece, pieces, &BISHOP_DIRECTIONS),
        PieceKind::Rook => sliding_moves(piece, pieces, &ROOK_DIRECTIONS),
        PieceKind::Queen => sliding_moves(piece, pieces, &QUEEN_DIRECTIONS),
        PieceKind::King => leaper_moves(piece, pieces, &KING_OFFSETS),
    };

    for board_move in &mut moves {
        board_move.cache_prior_en_passant(en_passant.copied());
    }

    moves
}

pub(crate) fn alliance_moves(
    pieces: &PieceMap,
    en_passant: Option<&Piece>,
    side: &[Piece],
) -> Vec<Move> {
    side.iter()
        .flat_map(|piece| pseudo_legal_moves(piece, pieces, en_passant))
        .collect()
}

fn sliding_moves(piece: &Piece, pieces: &PieceMap, directions: &[i16]) -> Vec<Move> {
    let mut moves = Vec::new();

    for &direction in directions {
        let mut current = piece.coordinate as i16;

        loop {
            // The ray dies on an edge file incompatible with its direction.
            if (current as Coordinate).is_on(exclusion_mask(direction)) {
                break;
            }

            current += direction;

            if !is_valid_coordinate(current) {
                break;
            }

            let destination = current as Coordinate;

            match pieces.get(&destination) {
                None => moves.push(Move::quiet(*piece, destination)),
                Some(occupant) => {
                    if occupant.alliance != piece.alliance {
                        moves.push(Move::capture(*piece, destination, *occupant));
                    }
                    break;
                }
            }
        }
    }

    moves
}

fn leaper_moves(piece: &Piece, pieces: &PieceMap, offsets: &[i16]) -> Vec<Move> {
    let mut moves = Vec::new();

    for &offset in offsets {
        if piece.coordinate.is_on(exclusion_mask(offset)) {
            continue;
        }

        let candidate = piece.coordinate as i16 + offset;

        if !is_valid_coordinate(candidate) {
            continue;
        }

        let destination = candidate as Coordinate;

        match pieces.get(&destination) {
            None => moves.push(Move::quiet(*piece, destination)),
            Some(occupant) => {
                if occupant.alliance != piece.alliance {
                    moves.push(Move::capture(*piece, destination, *occupant));
                }
            }
        }
    }

    moves
}

fn pawn_moves(piece: &Piece, pieces: &PieceMap, en_passant: Option<&Piece>) -> Vec<Move> {
    let mut moves = Vec::new();
    let direction = piece.alliance.direction();

    let push = piece.coordinate as i16 + 8 * direction;
    if is_valid_coordinate(push) && !pieces.contains_key(&(push as Coordinate)) {
        let destination = push as Coordinate;

        if piece.alliance.is_promotion_square(destination) {
            push_promotions(&mut moves, piece, destination, None);
        } else {
            moves.push(Move::quiet(*piece, destination));
        }

        // Double push only from the start rank, through two empty squares.
        let jump = piece.coordinate as i16 + 16 * direction;
        if piece.first_move
            && piece.alliance.is_pawn_start_square(piece.coordinate)
            && is_valid_coordinate(jump)
            && !pieces.contains_key(&(jump as Coordinate))
        {
            moves.push(Move::pawn_jump(*piece, jump as Coordinate));
        }
    }

    for offset in [7 * direction, 9 * direction] {
        if piece.coordinate.is_on(exclusion_mask(offset)) {
            continue;
        }

        let candidate = piece.coordinate as i16 + offset;

        if !is_valid_coordinate(candidate) {
            continue;
        }

        let destination = candidate as Coordinate;

        match pieces.get(&destination) {
            Some(occupant) => {
                if occupant.alliance != piece.alliance {
                    if piece.alliance.is_promotion_square(destination) {
                        push_promotions(&mut moves, piece, destination, Some(*occupant));
                    } else {
                        moves.push(Move::capture(*piece, destination, *occupant));
                    }
                }
            }
            None => {
                // The vulnerable pawn stands beside us, on the file the
                // capture lands on.
                let beside = if offset == 7 * direction {
                    piece.coordinate as i16 - direction
                } else {
                    piece.coordinate as i16 + direction
                };

                if let Some(vulnerable) = en_passant {
                    if vulnerable.alliance != piece.alliance
                        && vulnerable.coordinate as i16 == beside
                    {
                        moves.push(Move::en_passant(*piece, destination, *vulnerable));
                    }
                }
            }
        }
    }

    moves
}

fn push_promotions(
    moves: &mut Vec<Move>,
    piece: &Piece,
    destination: Coordinate,
    captured: Option<Piece>,
) {
    for promoted in PROMOTION_KINDS {
        moves.push(Move::promotion(*piece, destination, promoted, captured));
    }
}
