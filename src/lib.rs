pub mod game;
pub mod perft;
