use std::fmt;

use fxhash::FxHashMap;

use crate::game::alliance::Alliance;
use crate::game::moves::Move;
use crate::game::pieces::{self, Piece, PieceKind};
use crate::game::player::{MoveTransition, Player};
use crate::game::square::{Coordinate, CoordinateExt, TILE_COUNT};

// Sparse tile-to-piece table; coordinates absent from it are empty squares.
pub(crate) type PieceMap = FxHashMap<Coordinate, Piece>;

/// A frozen board snapshot. Never mutated after construction; applying a move
/// builds and freezes a new one.
#[derive(Clone, Debug)]
pub struct Board {
    pieces: PieceMap,
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_player: Player,
    black_player: Player,
    to_move: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Option<Move>,
}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// The canonical starting position, white to move.
    pub fn standard() -> Board {
        let mut builder = Board::builder()
            .set_piece(Piece::new(PieceKind::Rook, Alliance::Black, Coordinate::A8))
            .set_piece(Piece::new(PieceKind::Knight, Alliance::Black, Coordinate::B8))
            .set_piece(Piece::new(PieceKind::Bishop, Alliance::Black, Coordinate::C8))
            .set_piece(Piece::new(PieceKind::Queen, Alliance::Black, Coordinate::D8))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, Coordinate::E8))
            .set_piece(Piece::new(PieceKind::Bishop, Alliance::Black, Coordinate::F8))
            .set_piece(Piece::new(PieceKind::Knight, Alliance::Black, Coordinate::G8))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::Black, Coordinate::H8))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, Coordinate::A1))
            .set_piece(Piece::new(PieceKind::Knight, Alliance::White, Coordinate::B1))
            .set_piece(Piece::new(PieceKind::Bishop, Alliance::White, Coordinate::C1))
            .set_piece(Piece::new(PieceKind::Queen, Alliance::White, Coordinate::D1))
            .set_piece(Piece::new(PieceKind::King, Alliance::White, Coordinate::E1))
            .set_piece(Piece::new(PieceKind::Bishop, Alliance::White, Coordinate::F1))
            .set_piece(Piece::new(PieceKind::Knight, Alliance::White, Coordinate::G1))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, Coordinate::H1));

        for file in 0..8 {
            builder = builder
                .set_piece(Piece::new(
                    PieceKind::Pawn,
                    Alliance::Black,
                    Coordinate::A7 + file,
                ))
                .set_piece(Piece::new(
                    PieceKind::Pawn,
                    Alliance::White,
                    Coordinate::A2 + file,
                ));
        }

        builder.set_move_maker(Alliance::White).build()
    }

    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.pieces.get(&coordinate)
    }

    pub(crate) fn piece_map(&self) -> &PieceMap {
        &self.pieces
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    pub fn alliance_pieces(&self, alliance: Alliance) -> &[Piece] {
        alliance.choose(&self.white_pieces, &self.black_pieces)
    }

    pub fn white_player(&self) -> &Player {
        &self.white_player
    }

    pub fn black_player(&self) -> &Player {
        &self.black_player
    }

    pub fn player(&self, alliance: Alliance) -> &Player {
        alliance.choose(&self.white_player, &self.black_player)
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    pub fn opponent_player(&self) -> &Player {
        self.player(!self.to_move)
    }

    pub fn side_to_move(&self) -> Alliance {
        self.to_move
    }

    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    /// The move that produced this board; `None` for constructed positions.
    pub fn transition_move(&self) -> Option<&Move> {
        self.transition_move.as_ref()
    }

    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white_player
            .legal_moves()
            .iter()
            .chain(self.black_player.legal_moves())
    }

    pub fn make_move(&self, board_move: &Move) -> MoveTransition {
        self.current_player().make_move(self, board_move)
    }

    pub fn unmake_move(&self, board_move: &Move) -> MoveTransition {
        self.current_player().unmake_move(self, board_move)
    }

    pub fn log_board(&self, title: Option<&str>) {
        if let Some(title_text) = title {
            log::debug!("{}", title_text);
        }

        for line in self.to_string().lines() {
            log::debug!("{}", line);
        }
    }
}

// Equality over the observable position: piece table, side to move and the
// en passant window. Provenance is deliberately excluded.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
            && self.to_move == other.to_move
            && self.en_passant_pawn == other.en_passant_pawn
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coordinate in 0..TILE_COUNT as Coordinate {
            let tile = match self.pieces.get(&coordinate) {
                Some(piece) => piece.to_char(),
                None => '-',
            };

            write!(f, "{:>2}", tile)?;

            if (coordinate + 1) % 8 == 0 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

/// Mutable staging area for a board; `build` is the only way to freeze one.
#[derive(Default)]
pub struct BoardBuilder {
    pieces: PieceMap,
    to_move: Option<Alliance>,
    en_passant_pawn: Option<Piece>,
    transition_move: Option<Move>,
}

impl BoardBuilder {
    pub fn new() -> BoardBuilder {
        BoardBuilder::default()
    }

    // Keyed by the piece's own coordinate, so construct the piece at its
    // destination before inserting it.
    pub fn set_piece(mut self, piece: Piece) -> BoardBuilder {
        self.pieces.insert(piece.coordinate, piece);
        self
    }

    pub fn set_move_maker(mut self, alliance: Alliance) -> BoardBuilder {
        self.to_move = Some(alliance);
        self
    }

    pub fn set_en_passant_pawn(mut self, pawn: Piece) -> BoardBuilder {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn set_transition_move(mut self, board_move: Move) -> BoardBuilder {
        self.transition_move = Some(board_move);
        self
    }

    /// Freezes the staged configuration. Panics if either side has no king;
    /// such a position is not representable.
    pub fn build(self) -> Board {
        let to_move = self.to_move.unwrap_or(Alliance::White);
        let white_pieces = active_pieces(&self.pieces, Alliance::White);
        let black_pieces = active_pieces(&self.pieces, Alliance::Black);

        let white_moves =
            pieces::alliance_moves(&self.pieces, self.en_passant_pawn.as_ref(), &white_pieces);
        let black_moves =
            pieces::alliance_moves(&self.pieces, self.en_passant_pawn.as_ref(), &black_pieces);

        let white_player = Player::new(
            Alliance::White,
            &self.pieces,
            self.en_passant_pawn.as_ref(),
            white_moves.clone(),
            &black_moves,
        );
        let black_player = Player::new(
            Alliance::Black,
            &self.pieces,
            self.en_passant_pawn.as_ref(),
            black_moves,
            &white_moves,
        );

        Board {
            pieces: self.pieces,
            white_pieces,
            black_pieces,
            white_player,
            black_player,
            to_move,
            en_passant_pawn: self.en_passant_pawn,
            transition_move: self.transition_move,
        }
    }
}

fn active_pieces(pieces: &PieceMap, alliance: Alliance) -> Vec<Piece> {
    let mut active: Vec<Piece> = pieces
        .values()
        .filter(|piece| piece.alliance == alliance)
        .copied()
        .collect();

    // Stable generation order regardless of hash-map iteration.
    active.sort_by_key(|piece| piece.coordinate);
    active
}
