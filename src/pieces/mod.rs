// Move generation, one file per white piece

pub mod knight;
pub mod rook;

pub use knight::KnightMoves;
pub use rook::RookMoves;
