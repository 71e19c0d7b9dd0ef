/// Rook move generation
/// Moves along files and ranks until the edge or the first occupied square
use crate::board::{on_board, Occupancy, Square};

pub struct RookMoves;

impl RookMoves {
    /// Generate every square a Rook on `from` attacks
    /// The first occupied square on a ray is included, nothing behind it
    pub fn generate_moves(from: Square, occupied: &Occupancy) -> Vec<Square> {
        let mut moves = Vec::with_capacity(14); // Rook can have up to 14 moves

        // 4 orthogonal directions
        let directions: [(i8, i8); 4] = [
            ( 1, 0), // towards file h
            (-1, 0), // towards file a
            ( 0, 1), // towards rank 8
            ( 0, -1), // towards rank 1
        ];

        for (dr, dc) in directions {
            let mut distance = 1;
            loop {
                let new_row = from.0 as i8 + dr * distance;
                let new_col = from.1 as i8 + dc * distance;

                if !on_board(new_row, new_col) {
                    break; // Off the board, stop this direction
                }

                let to = (new_row as u8, new_col as u8);
                moves.push(to);

                if occupied.contains(&to) {
                    break; // Blocked, nothing further along this ray is visible
                }
                distance += 1;
            }
        }

        tracing::debug!(?from, count = moves.len(), "rook moves generated");
        moves
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::to_square;

    fn occupancy(labels: &[&str]) -> Occupancy {
        labels.iter().map(|l| to_square(l)).collect()
    }

    #[test]
    fn test_rook_on_empty_board_center() {
        let moves = RookMoves::generate_moves(to_square("d4"), &Occupancy::new());

        // 7 along the file + 7 along the rank
        assert_eq!(moves.len(), 14, "Rook should have 14 moves from center");

        assert!(moves.contains(&to_square("d8")), "Rook move to d8 should be possible");
        assert!(moves.contains(&to_square("d1")), "Rook move to d1 should be possible");
        assert!(moves.contains(&to_square("a4")), "Rook move to a4 should be possible");
        assert!(moves.contains(&to_square("h4")), "Rook move to h4 should be possible");

        assert!(!moves.contains(&to_square("c3")), "Rook should not move diagonally");
        assert!(!moves.contains(&to_square("e5")), "Rook should not move diagonally");
    }

    #[test]
    fn test_rook_corner() {
        let moves = RookMoves::generate_moves(to_square("a1"), &Occupancy::new());
        assert_eq!(moves.len(), 14, "Rook should have 14 moves from corner");
    }

    #[test]
    fn test_rook_blocked_on_file() {
        let occupied = occupancy(&["a4", "a6"]);
        let moves = RookMoves::generate_moves(to_square("a1"), &occupied);

        for label in ["a2", "a3", "a4"] {
            assert!(moves.contains(&to_square(label)), "Rook should reach {}", label);
        }
        for label in ["a5", "a6", "a7", "a8"] {
            assert!(!moves.contains(&to_square(label)), "Rook should not see past a4 to {}", label);
        }
        // The rank is still open
        assert!(moves.contains(&to_square("h1")), "Rook should reach h1");
        assert_eq!(moves.len(), 3 + 7);
    }

    #[test]
    fn test_rook_adjacent_blockers() {
        let occupied = occupancy(&["d5", "d3", "c4", "e4"]);
        let moves = RookMoves::generate_moves(to_square("d4"), &occupied);

        assert_eq!(moves.len(), 4, "Boxed-in rook should only reach its neighbours");
        for label in ["d5", "d3", "c4", "e4"] {
            assert!(moves.contains(&to_square(label)), "Rook should reach {}", label);
        }
    }

    #[test]
    fn test_rook_ignores_off_line_pieces() {
        let occupied = occupancy(&["e5", "b2"]);
        let moves = RookMoves::generate_moves(to_square("d4"), &occupied);
        assert_eq!(moves.len(), 14, "Diagonal pieces should not block a rook");
    }

    #[test]
    fn test_rook_rays_are_disjoint() {
        let mut moves = RookMoves::generate_moves(to_square("c6"), &occupancy(&["c8"]));
        let before = moves.len();
        moves.sort();
        moves.dedup();
        assert_eq!(moves.len(), before, "Rook rays should never overlap");
        assert!(!moves.contains(&to_square("c6")), "Rook should not include its own square");
    }
}
