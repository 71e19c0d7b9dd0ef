// Chess Capture Query Library
// One white knight or rook against up to sixteen black pieces: what can it take?

pub mod board;
pub mod capture;
pub mod console;
pub mod pieces;
