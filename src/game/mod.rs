pub mod alliance;
pub mod board;
pub mod moves;
pub mod pieces;
pub mod player;
pub mod square;

pub use alliance::*;
pub use board::*;
pub use moves::*;
pub use pieces::*;
pub use player::*;
pub use square::*;
