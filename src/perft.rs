use rayon::prelude::*;

use crate::game::board::Board;
use crate::game::moves::Move;

/// Counts move-tree leaves through `make_move`, so only transitions that
/// complete (`Done`) are descended into.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;

    for board_move in board.current_player().legal_moves() {
        let transition = board.make_move(board_move);

        if transition.status.is_done() {
            nodes += if depth == 1 {
                1
            } else {
                perft(&transition.to_board, depth - 1)
            };
        }
    }

    nodes
}

/// Per-root-move node breakdown, the classic `divide` output.
pub fn divide(board: &Board, depth: usize) -> Vec<(Move, u64)> {
    board
        .current_player()
        .legal_moves()
        .iter()
        .filter_map(|board_move| {
            let transition = board.make_move(board_move);

            transition.status.is_done().then(|| {
                let nodes = if depth <= 1 {
                    1
                } else {
                    perft(&transition.to_board, depth - 1)
                };
                (board_move.clone(), nodes)
            })
        })
        .collect()
}

// Root moves split across threads; boards are frozen values, so subtrees
// share the ancestor without any locking.
pub fn parallel_perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    board
        .current_player()
        .legal_moves()
        .par_iter()
        .filter_map(|board_move| {
            let transition = board.make_move(board_move);

            transition.status.is_done().then(|| {
                if depth == 1 {
                    1
                } else {
                    perft(&transition.to_board, depth - 1)
                }
            })
        })
        .sum()
}
