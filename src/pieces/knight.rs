/// Knight move generation
/// Jumps in an L-shape (2+1), ignoring anything in between
use crate::board::{on_board, Square};

pub struct KnightMoves;

impl KnightMoves {
    /// Knight offsets: (±2, ±1) and (±1, ±2)
    const OFFSETS: [(i8, i8); 8] = [
        (-2, -1), (-2, 1), (-1, -2), (-1, 2),
        ( 1, -2), ( 1, 2), ( 2, -1), ( 2, 1),
    ];

    /// Generate every square a Knight on `from` attacks
    /// Occupancy never matters for a leaper
    pub fn generate_moves(from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);

        for (dr, dc) in Self::OFFSETS {
            let new_row = from.0 as i8 + dr;
            let new_col = from.1 as i8 + dc;

            if on_board(new_row, new_col) {
                moves.push((new_row as u8, new_col as u8));
            }
        }

        tracing::debug!(?from, count = moves.len(), "knight moves generated");
        moves
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
