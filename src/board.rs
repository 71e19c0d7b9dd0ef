// Board coordinates and piece definitions
// Pieces live in plain containers; there is no 8x8 grid, only squares

use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Type Definitions
// =============================================================================

/// Square coordinate (row, col) where 0-7
/// Row = file offset from 'a' (row 0 = file a, row 7 = file h)
/// Col = rank - 1 (col 0 = rank 1, col 7 = rank 8)
pub type Square = (u8, u8);

/// Squares held by black pieces, used to block sliding rays
pub type Occupancy = HashSet<Square>;

/// Type of a chess piece
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece name, case-insensitive ("Knight", "ROOK", "pawn")
    pub fn from_name(name: &str) -> Option<PieceKind> {
        let name = name.to_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&name))
    }

    /// Capitalized display name
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The only kinds a white piece may take
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum WhiteKind {
    Knight,
    Rook,
}

impl WhiteKind {
    pub fn from_name(name: &str) -> Option<WhiteKind> {
        match PieceKind::from_name(name)? {
            PieceKind::Knight => Some(WhiteKind::Knight),
            PieceKind::Rook => Some(WhiteKind::Rook),
            _ => None,
        }
    }
}

impl From<WhiteKind> for PieceKind {
    fn from(kind: WhiteKind) -> Self {
        match kind {
            WhiteKind::Knight => PieceKind::Knight,
            WhiteKind::Rook => PieceKind::Rook,
        }
    }
}

impl fmt::Display for WhiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PieceKind::from(*self).fmt(f)
    }
}

/// A black piece: kind and square, no color field
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    /// Create a new piece
    pub fn new(kind: PieceKind, square: Square) -> Self {
        Piece { kind, square }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, to_label(self.square))
    }
}

/// The single white attacker
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WhitePiece {
    pub kind: WhiteKind,
    pub square: Square,
}

impl WhitePiece {
    pub fn new(kind: WhiteKind, square: Square) -> Self {
        WhitePiece { kind, square }
    }
}

impl fmt::Display for WhitePiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, to_label(self.square))
    }
}

// =============================================================================
// Coordinate Mapping
// =============================================================================

/// Convert a label to a square (e.g., "a1" -> (0, 0), "B3" -> (1, 2))
///
/// The label should already have passed `is_valid_label`; anything else maps
/// to an unspecified square but never panics.
pub fn to_square(label: &str) -> Square {
    let bytes = label.as_bytes();
    let row = bytes
        .first()
        .map_or(0, |b| b.to_ascii_lowercase().wrapping_sub(b'a'));
    let col = bytes.get(1).map_or(0, |b| b.wrapping_sub(b'1'));
    (row, col)
}

/// Convert a square back to its display label (e.g., (0, 0) -> "A1")
/// Off-board squares give a meaningless label rather than a panic
pub fn to_label(square: Square) -> String {
    let file = b'A'.wrapping_add(square.0) as char;
    let rank = b'1'.wrapping_add(square.1) as char;
    format!("{}{}", file, rank)
}

/// Is this string a square on the board (a1..h8, file in either case)?
pub fn is_valid_label(label: &str) -> bool {
    match label.as_bytes() {
        [file, rank] => {
            matches!(file.to_ascii_lowercase(), b'a'..=b'h') && matches!(rank, b'1'..=b'8')
        }
        _ => false,
    }
}

/// Validate and convert in one step
pub fn parse_label(label: &str) -> Option<Square> {
    if is_valid_label(label) {
        Some(to_square(label))
    } else {
        None
    }
}

/// Is this one of the six piece names (case-insensitive)?
pub fn is_valid_kind(name: &str) -> bool {
    PieceKind::from_name(name).is_some()
}

/// Is the square inside the 8x8 board?
pub fn on_board(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

// =============================================================================
// Unit Tests
// =============================================================================
