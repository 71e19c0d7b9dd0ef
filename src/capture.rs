// Capture resolution
// Which black pieces can the white piece take in one move?

use crate::board::{Occupancy, Piece, Square, WhiteKind, WhitePiece};
use crate::pieces::{KnightMoves, RookMoves};

/// Collect the squares of all black pieces
pub fn occupancy(black: &[Piece]) -> Occupancy {
    black.iter().map(|piece| piece.square).collect()
}

/// Squares attacked by the white piece, given where the black pieces stand
pub fn attacked_squares(white: &WhitePiece, occupied: &Occupancy) -> Vec<Square> {
    match white.kind {
        WhiteKind::Knight => KnightMoves::generate_moves(white.square),
        WhiteKind::Rook => RookMoves::generate_moves(white.square, occupied),
    }
}

/// Return the black pieces the white piece can capture, in input order
/// An empty result just means nothing is attackable
pub fn resolve_captures(white: &WhitePiece, black: &[Piece]) -> Vec<Piece> {
    let occupied = occupancy(black);
    let attacked: Occupancy = attacked_squares(white, &occupied).into_iter().collect();

    let captures: Vec<Piece> = black
        .iter()
        .filter(|piece| attacked.contains(&piece.square))
        .copied()
        .collect();

    tracing::debug!(
        white = %white,
        attacked = attacked.len(),
        captures = captures.len(),
        "captures resolved"
    );
    captures
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{to_square, PieceKind};

    fn black(kind: PieceKind, label: &str) -> Piece {
        Piece::new(kind, to_square(label))
    }

    #[test]
    fn test_knight_captures_in_input_order() {
        let white = WhitePiece::new(WhiteKind::Knight, to_square("a1"));
        let pieces = vec![black(PieceKind::Knight, "b3"), black(PieceKind::Pawn, "c2")];

        let captures = resolve_captures(&white, &pieces);
        assert_eq!(captures, pieces, "Knight on a1 should capture both, in order");

        // Reversed input gives reversed output
        let reversed: Vec<Piece> = pieces.iter().rev().copied().collect();
        assert_eq!(resolve_captures(&white, &reversed), reversed);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let white = WhitePiece::new(WhiteKind::Knight, to_square("a1"));
        let pieces = vec![
            black(PieceKind::Pawn, "a2"),
            black(PieceKind::Pawn, "b2"),
            black(PieceKind::Queen, "b3"),
        ];

        let captures = resolve_captures(&white, &pieces);
        assert_eq!(captures, vec![black(PieceKind::Queen, "b3")]);
    }

    #[test]
    fn test_rook_no_captures() {
        let white = WhitePiece::new(WhiteKind::Rook, to_square("a1"));
        let pieces = vec![black(PieceKind::King, "h8")];

        assert!(resolve_captures(&white, &pieces).is_empty(), "h8 is off both lines of a1");
    }

    #[test]
    fn test_rook_captures_only_first_on_line() {
        let white = WhitePiece::new(WhiteKind::Rook, to_square("a1"));
        let pieces = vec![
            black(PieceKind::Bishop, "a6"),
            black(PieceKind::Pawn, "a4"),
            black(PieceKind::Knight, "e1"),
            black(PieceKind::Queen, "g1"),
        ];

        let captures = resolve_captures(&white, &pieces);
        assert_eq!(
            captures,
            vec![black(PieceKind::Pawn, "a4"), black(PieceKind::Knight, "e1")],
            "Only the nearest piece on each line can be taken"
        );
    }

    #[test]
    fn test_rook_captures_all_four_directions() {
        let white = WhitePiece::new(WhiteKind::Rook, to_square("d4"));
        let pieces = vec![
            black(PieceKind::Pawn, "d8"),
            black(PieceKind::Pawn, "d1"),
            black(PieceKind::Pawn, "a4"),
            black(PieceKind::Pawn, "h4"),
            black(PieceKind::Pawn, "e5"),
        ];

        let captures = resolve_captures(&white, &pieces);
        assert_eq!(captures, pieces[..4].to_vec());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let white = WhitePiece::new(WhiteKind::Rook, to_square("c3"));
        let pieces = vec![
            black(PieceKind::Rook, "c7"),
            black(PieceKind::King, "c5"),
            black(PieceKind::Bishop, "f3"),
        ];

        let first = resolve_captures(&white, &pieces);
        let second = resolve_captures(&white, &pieces);
        assert_eq!(first, second, "Repeated calls should agree");
        assert_eq!(first, vec![black(PieceKind::King, "c5"), black(PieceKind::Bishop, "f3")]);
    }

    #[test]
    fn test_occupancy() {
        let pieces = vec![black(PieceKind::Pawn, "a2"), black(PieceKind::King, "e8")];
        let occupied = occupancy(&pieces);
        assert_eq!(occupied.len(), 2);
        assert!(occupied.contains(&to_square("a2")));
        assert!(occupied.contains(&to_square("e8")));
    }
}
