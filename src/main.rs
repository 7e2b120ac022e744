use std::time::Instant;

use clap::Parser;

use tarrasch::game::Board;
use tarrasch::perft::{divide, parallel_perft};

/// Debugging front end: prints the standard board and counts move-tree nodes.
#[derive(Parser)]
#[command(name = "tarrasch")]
struct Args {
    /// Perft depth from the standard starting position
    #[arg(short, long, default_value_t = 4)]
    depth: usize,

    /// Split root moves across threads
    #[arg(long)]
    parallel: bool,

    /// Print the board before counting
    #[arg(long)]
    show_board: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let board = Board::standard();

    if args.show_board {
        println!("{}", board);
    }

    let start = Instant::now();

    let total = if args.parallel {
        parallel_perft(&board, args.depth)
    } else {
        let breakdown = divide(&board, args.depth);

        for (board_move, nodes) in &breakdown {
            println!("{}: {}", board_move, nodes);
        }

        breakdown.iter().map(|(_, nodes)| nodes).sum()
    };

    println!("\nNodes: {}", total);
    log::info!("perft({}) finished in {:?}", args.depth, start.elapsed());
}
