use crate::game::alliance::Alliance;
use crate::game::board::{Board, PieceMap};
use crate::game::moves::{Move, MoveKind};
use crate::game::pieces::{Piece, PieceKind};
use crate::game::square::{Coordinate, CoordinateExt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// The outcome of attempting a move: rejected attempts return the original
/// board as both endpoints, so the caller always has a usable position.
#[derive(Clone, Debug)]
pub struct MoveTransition {
    pub from_board: Board,
    pub to_board: Board,
    pub board_move: Move,
    pub status: MoveStatus,
}

/// One side's view over a frozen board: its king, its legal moves (own
/// pseudo-legal moves plus derived castles) and the in-check flag.
#[derive(Clone, Debug)]
pub struct Player {
    alliance: Alliance,
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
    kingside_castle: bool,
    queenside_castle: bool,
}

impl Player {
    pub(crate) fn new(
        alliance: Alliance,
        pieces: &PieceMap,
        en_passant: Option<&Piece>,
        mut legal_moves: Vec<Move>,
        opponent_moves: &[Move],
    ) -> Player {
        let king = establish_king(alliance, pieces);
        let in_check = attacks_on(king.coordinate, opponent_moves);

        let mut kingside_castle = false;
        let mut queenside_castle = false;

        for castle in king_castles(alliance, &king, pieces, en_passant, opponent_moves, in_check) {
            match castle.kind {
                MoveKind::CastleKingside { .. } => kingside_castle = true,
                MoveKind::CastleQueenside { .. } => queenside_castle = true,
                _ => {}
            }
            legal_moves.push(castle);
        }

        Player {
            alliance,
            king,
            legal_moves,
            in_check,
            kingside_castle,
            queenside_castle,
        }
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn king(&self) -> &Piece {
        &self.king
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn can_castle_kingside(&self) -> bool {
        self.kingside_castle
    }

    pub fn can_castle_queenside(&self) -> bool {
        self.queenside_castle
    }

    /// In check with no move that transitions to `Done`.
    pub fn is_in_checkmate(&self, board: &Board) -> bool {
        self.in_check && !self.has_escape_moves(board)
    }

    /// Not in check, but every move would transition into one.
    pub fn is_in_stalemate(&self, board: &Board) -> bool {
        !self.in_check && !self.has_escape_moves(board)
    }

    fn has_escape_moves(&self, board: &Board) -> bool {
        self.legal_moves
            .iter()
            .any(|board_move| self.make_move(board, board_move).status.is_done())
    }

    /// Attempts a move: membership check first, then tentative execution with
    /// post-hoc self-check detection. Rejections are data, never errors.
    pub fn make_move(&self, board: &Board, board_move: &Move) -> MoveTransition {
        if !self.legal_moves.contains(board_move) {
            return MoveTransition {
                from_board: board.clone(),
                to_board: board.clone(),
                board_move: board_move.clone(),
                status: MoveStatus::IllegalMove,
            };
        }

        let transitioned = board_move.execute(board);
        let mover_king = transitioned.player(self.alliance).king();

        if attacks_on(
            mover_king.coordinate,
            transitioned.current_player().legal_moves(),
        ) {
            return MoveTransition {
                from_board: board.clone(),
                to_board: board.clone(),
                board_move: board_move.clone(),
                status: MoveStatus::LeavesPlayerInCheck,
            };
        }

        MoveTransition {
            from_board: board.clone(),
            to_board: transitioned,
            board_move: board_move.clone(),
            status: MoveStatus::Done,
        }
    }

    /// Reverses a move previously made from the reconstructed position.
    /// Legality is not re-validated; only unmake moves you actually made.
    pub fn unmake_move(&self, board: &Board, board_move: &Move) -> MoveTransition {
        MoveTransition {
            from_board: board.clone(),
            to_board: board_move.undo(board),
            board_move: board_move.clone(),
            status: MoveStatus::Done,
        }
    }
}

fn establish_king(alliance: Alliance, pieces: &PieceMap) -> Piece {
    pieces
        .values()
        .find(|piece| piece.kind == PieceKind::King && piece.alliance == alliance)
        .copied()
        .unwrap_or_else(|| panic!("no {:?} king on the board", alliance))
}

pub(crate) fn attacks_on(tile: Coordinate, moves: &[Move]) -> bool {
    moves.iter().any(|board_move| board_move.destination == tile)
}

// Castles need both sides' pseudo-legal moves (the transit squares must be
// unattacked), which is why they are derived here and not by the King.
fn king_castles(
    alliance: Alliance,
    king: &Piece,
    pieces: &PieceMap,
    en_passant: Option<&Piece>,
    opponent_moves: &[Move],
    in_check: bool,
) -> Vec<Move> {
    let mut castles = Vec::new();
    let home = alliance.choose(Coordinate::E1, Coordinate::E8);

    if !king.first_move || king.coordinate != home || in_check {
        return castles;
    }

    // Kingside: f and g files empty and unattacked, rook untouched on h.
    let rook_square = alliance.choose(Coordinate::H1, Coordinate::H8);
    let transit = alliance.choose(
        [Coordinate::F1, Coordinate::G1],
        [Coordinate::F8, Coordinate::G8],
    );

    if transit.iter().all(|tile| !pieces.contains_key(tile))
        && transit.iter().all(|tile| !attacks_on(*tile, opponent_moves))
    {
        if let Some(rook) = eligible_rook(alliance, pieces, rook_square) {
            let mut castle = Move::castle_kingside(*king, transit[1], rook, transit[0]);
            castle.cache_prior_en_passant(en_passant.copied());
            castles.push(castle);
        }
    }

    // Queenside: b, c and d files empty, c and d (the king's path) unattacked.
    let rook_square = alliance.choose(Coordinate::A1, Coordinate::A8);
    let between = alliance.choose(
        [Coordinate::B1, Coordinate::C1, Coordinate::D1],
        [Coordinate::B8, Coordinate::C8, Coordinate::D8],
    );

    if between.iter().all(|tile| !pieces.contains_key(tile))
        && !attacks_on(between[1], opponent_moves)
        && !attacks_on(between[2], opponent_moves)
    {
        if let Some(rook) = eligible_rook(alliance, pieces, rook_square) {
            let mut castle = Move::castle_queenside(*king, between[1], rook, between[2]);
            castle.cache_prior_en_passant(en_passant.copied());
            castles.push(castle);
        }
    }

    castles
}

fn eligible_rook(alliance: Alliance, pieces: &PieceMap, square: Coordinate) -> Option<Piece> {
    pieces.get(&square).copied().filter(|piece| {
        piece.kind == PieceKind::Rook && piece.alliance == alliance && piece.first_move
    })
}
