use std::fmt;

use crate::game::board::Board;
use crate::game::pieces::{Piece, PieceKind};
use crate::game::square::{Coordinate, CoordinateExt};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture {
        captured: Piece,
    },
    // Sets the en passant window on the resulting board.
    PawnJump,
    Promotion {
        promoted: PieceKind,
        captured: Option<Piece>,
    },
    // The captured pawn stands one rank behind the destination.
    EnPassant {
        captured: Piece,
    },
    CastleKingside {
        rook: Piece,
        rook_destination: Coordinate,
    },
    CastleQueenside {
        rook: Piece,
        rook_destination: Coordinate,
    },
}

/// One ply: the moving piece, where it lands, and the variant-specific
/// side effects. Executing a move never mutates its source board.
#[derive(Clone, Debug)]
pub struct Move {
    pub mover: Piece,
    pub destination: Coordinate,
    pub kind: MoveKind,
    prior_en_passant: Option<Piece>,
}

// Identity is mover, destination and variant; the prior-en-passant cache is
// undo state, not part of what makes two moves "the same move".
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.mover == other.mover
            && self.destination == other.destination
            && self.kind == other.kind
    }
}

impl Eq for Move {}

impl Move {
    fn new(mover: Piece, destination: Coordinate, kind: MoveKind) -> Move {
        Move {
            mover,
            destination,
            kind,
            prior_en_passant: None,
        }
    }

    pub fn quiet(mover: Piece, destination: Coordinate) -> Move {
        Move::new(mover, destination, MoveKind::Quiet)
    }

    pub fn capture(mover: Piece, destination: Coordinate, captured: Piece) -> Move {
        Move::new(mover, destination, MoveKind::Capture { captured })
    }

    pub fn pawn_jump(mover: Piece, destination: Coordinate) -> Move {
        Move::new(mover, destination, MoveKind::PawnJump)
    }

    pub fn promotion(
        mover: Piece,
        destination: Coordinate,
        promoted: PieceKind,
        captured: Option<Piece>,
    ) -> Move {
        Move::new(mover, destination, MoveKind::Promotion { promoted, captured })
    }

    pub fn en_passant(mover: Piece, destination: Coordinate, captured: Piece) -> Move {
        Move::new(mover, destination, MoveKind::EnPassant { captured })
    }

    pub fn castle_kingside(
        mover: Piece,
        destination: Coordinate,
        rook: Piece,
        rook_destination: Coordinate,
    ) -> Move {
        Move::new(
            mover,
            destination,
            MoveKind::CastleKingside {
                rook,
                rook_destination,
            },
        )
    }

    pub fn castle_queenside(
        mover: Piece,
        destination: Coordinate,
        rook: Piece,
        rook_destination: Coordinate,
    ) -> Move {
        Move::new(
            mover,
            destination,
            MoveKind::CastleQueenside {
                rook,
                rook_destination,
            },
        )
    }

    pub(crate) fn cache_prior_en_passant(&mut self, pawn: Option<Piece>) {
        self.prior_en_passant = pawn;
    }

    pub fn prior_en_passant(&self) -> Option<&Piece> {
        self.prior_en_passant.as_ref()
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        match &self.kind {
            MoveKind::Capture { captured } | MoveKind::EnPassant { captured } => Some(*captured),
            MoveKind::Promotion { captured, .. } => *captured,
            _ => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn is_castle(&self) -> bool {
        self.castle_rook().is_some()
    }

    fn castle_rook(&self) -> Option<(Piece, Coordinate)> {
        match &self.kind {
            MoveKind::CastleKingside {
                rook,
                rook_destination,
            }
            | MoveKind::CastleQueenside {
                rook,
                rook_destination,
            } => Some((*rook, *rook_destination)),
            _ => None,
        }
    }

    // The piece standing on the destination after execution.
    fn moved_piece(&self) -> Piece {
        match &self.kind {
            MoveKind::Promotion { promoted, .. } => Piece {
                kind: *promoted,
                ..self.mover.move_to(self.destination)
            },
            _ => self.mover.move_to(self.destination),
        }
    }

    /// Derives the successor board: the mover (or its promotion) lands on the
    /// destination, captures disappear, castle rooks relocate, the side to
    /// move flips, and the en passant window is set only by a pawn jump.
    pub fn execute(&self, board: &Board) -> Board {
        let mut builder = Board::builder();
        let captured = self.captured_piece();
        let castle_rook = self.castle_rook();

        for piece in board.pieces() {
            if *piece == self.mover {
                continue;
            }
            if captured.as_ref() == Some(piece) {
                continue;
            }
            if castle_rook.map(|(rook, _)| rook).as_ref() == Some(piece) {
                continue;
            }
            builder = builder.set_piece(*piece);
        }

        builder = builder.set_piece(self.moved_piece());

        if let Some((rook, rook_destination)) = castle_rook {
            builder = builder.set_piece(rook.move_to(rook_destination));
        }

        if self.kind == MoveKind::PawnJump {
            builder = builder.set_en_passant_pawn(self.mover.move_to(self.destination));
        }

        builder
            .set_move_maker(!self.mover.alliance)
            .set_transition_move(self.clone())
            .build()
    }

    /// The symmetric inverse of `execute`, applied to the board it produced:
    /// restores the mover's pre-move square and first-move flag, any captured
    /// piece, the pre-castle rook, and the cached prior en passant window.
    pub fn undo(&self, board: &Board) -> Board {
        let mut builder = Board::builder();
        let castle_rook = self.castle_rook();

        for piece in board.pieces() {
            if piece.coordinate == self.destination {
                continue;
            }
            if let Some((_, rook_destination)) = castle_rook {
                if piece.coordinate == rook_destination {
                    continue;
                }
            }
            builder = builder.set_piece(*piece);
        }

        builder = builder.set_piece(self.mover);

        if let Some(captured) = self.captured_piece() {
            builder = builder.set_piece(captured);
        }

        if let Some((rook, _)) = castle_rook {
            builder = builder.set_piece(rook);
        }

        if let Some(pawn) = self.prior_en_passant {
            builder = builder.set_en_passant_pawn(pawn);
        }

        builder.set_move_maker(self.mover.alliance).build()
    }
}

// Long algebraic rendering for logs and perft breakdowns; castles render as
// the king's two-square move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.mover.coordinate.unparse(),
            self.destination.unparse()
        )?;

        if let MoveKind::Promotion { promoted, .. } = &self.kind {
            write!(f, "{}", promoted.to_char())?;
        }

        Ok(())
    }
}
