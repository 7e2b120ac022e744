use tarrasch::game::{Alliance, Board, Coordinate, CoordinateExt, MoveStatus};

fn play(board: &Board, from: Coordinate, to: Coordinate) -> Board {
    let board_move = board
        .current_player()
        .legal_moves()
        .iter()
        .find(|m| m.mover.coordinate == from && m.destination == to)
        .cloned()
        .unwrap_or_else(|| panic!("no move from {} to {}", from.unparse(), to.unparse()));

    let transition = board.make_move(&board_move);
    assert_eq!(transition.status, MoveStatus::Done);
    transition.to_board
}

// Drives the public surface the way a search or UI layer would: pick a legal
// move, branch on the transition status, continue from the produced board.
#[test]
fn scholars_mate_through_the_public_interface() {
    let mut board = Board::standard();

    for (from, to) in [
        (Coordinate::E2, Coordinate::E4),
        (Coordinate::E7, Coordinate::E5),
        (Coordinate::F1, Coordinate::C4),
        (Coordinate::B8, Coordinate::C6),
        (Coordinate::D1, Coordinate::H5),
        (Coordinate::G8, Coordinate::F6),
        (Coordinate::H5, Coordinate::F7),
    ] {
        board = play(&board, from, to);
    }

    let black = board.current_player();
    assert_eq!(black.alliance(), Alliance::Black);
    assert!(black.is_in_check());
    assert!(black.is_in_checkmate(&board));

    // Every remaining attempt is rejected, never an error.
    for board_move in black.legal_moves() {
        let transition = board.make_move(board_move);
        assert_ne!(transition.status, MoveStatus::Done);
        assert_eq!(transition.to_board, board);
    }
}

#[test]
fn positions_are_usable_recursively() {
    let board = Board::standard();

    // Two plies down and back up again via undo.
    let first = play(&board, Coordinate::G1, Coordinate::F3);
    let second = play(&first, Coordinate::B8, Coordinate::C6);

    let back_once = second
        .unmake_move(second.transition_move().unwrap())
        .to_board;
    assert_eq!(back_once, first);

    let back_twice = back_once
        .unmake_move(first.transition_move().unwrap())
        .to_board;
    assert_eq!(back_twice, board);
}
