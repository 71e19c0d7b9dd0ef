// Console session
// Collects the white piece and the black pieces line by line, then reports captures

use crate::board::{parse_label, to_label, Piece, PieceKind, Square, WhiteKind, WhitePiece};
use crate::capture::resolve_captures;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Most black pieces a session accepts
pub const MAX_BLACK_PIECES: usize = 16;
/// Most black pawns a session accepts
pub const MAX_BLACK_PAWNS: usize = 8;
/// Most black kings a session accepts
pub const MAX_BLACK_KINGS: usize = 1;

const WHITE_PROMPT: &str = "Enter white piece and position (e.g., knight a5): ";
const BLACK_PROMPT: &str = "Enter black piece and position (e.g., pawn d4) or 'done' to finish: ";

// =============================================================================
// Errors
// =============================================================================

/// A rejected input line; the user is asked again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input format")]
    Format,

    #[error("Invalid piece type or position")]
    PieceOrPosition,

    #[error("Position already occupied by the white piece")]
    OccupiedByWhite,

    #[error("Position already occupied by another black piece")]
    OccupiedByBlack,

    #[error("Only one black king is allowed")]
    TooManyKings,

    #[error("Only up to eight black pawns are allowed")]
    TooManyPawns,

    #[error("You must add at least one black piece before finishing.")]
    NoBlackPieces,
}

/// Failures that end the session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before the pieces were entered")]
    InputClosed,
}

// =============================================================================
// Configuration
// =============================================================================

/// Console behaviour resolved from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print prompts before reading each line
    pub prompts: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { prompts: true }
    }
}

// =============================================================================
// Line Parsing
// =============================================================================

/// Split a line into exactly (kind, label)
fn split_entry(line: &str) -> Result<(&str, &str), InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [kind, label] => Ok((*kind, *label)),
        _ => Err(InputError::Format),
    }
}

/// Parse "knight a5" style input for the white piece
pub fn parse_white(line: &str) -> Result<WhitePiece, InputError> {
    let (kind, label) = split_entry(line)?;
    match (WhiteKind::from_name(kind), parse_label(label)) {
        (Some(kind), Some(square)) => Ok(WhitePiece::new(kind, square)),
        _ => Err(InputError::PieceOrPosition),
    }
}

/// Parse "pawn d4" style input for a black piece, without placement checks
pub fn parse_black(line: &str) -> Result<Piece, InputError> {
    let (kind, label) = split_entry(line)?;
    match (PieceKind::from_name(kind), parse_label(label)) {
        (Some(kind), Some(square)) => Ok(Piece::new(kind, square)),
        _ => Err(InputError::PieceOrPosition),
    }
}

// =============================================================================
// Black Roster
// =============================================================================

/// Black pieces accepted so far, with the placement limits enforced
#[derive(Debug, Clone)]
pub struct BlackRoster {
    white_square: Square,
    pieces: Vec<Piece>,
}

impl BlackRoster {
    pub fn new(white: &WhitePiece) -> Self {
        BlackRoster {
            white_square: white.square,
            pieces: Vec::with_capacity(MAX_BLACK_PIECES),
        }
    }

    fn count(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|p| p.kind == kind).count()
    }

    /// Check a piece against the board and the count limits, then keep it
    pub fn add(&mut self, piece: Piece) -> Result<(), InputError> {
        if piece.square == self.white_square {
            return Err(InputError::OccupiedByWhite);
        }
        if self.pieces.iter().any(|p| p.square == piece.square) {
            return Err(InputError::OccupiedByBlack);
        }
        if piece.kind == PieceKind::King && self.count(PieceKind::King) >= MAX_BLACK_KINGS {
            return Err(InputError::TooManyKings);
        }
        if piece.kind == PieceKind::Pawn && self.count(PieceKind::Pawn) >= MAX_BLACK_PAWNS {
            return Err(InputError::TooManyPawns);
        }
        self.pieces.push(piece);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.pieces.len() >= MAX_BLACK_PIECES
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn into_pieces(self) -> Vec<Piece> {
        self.pieces
    }
}

// =============================================================================
// Session
// =============================================================================

/// One run of the capture query over a line-based console
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Session { input, output, config }
    }

    /// Collect all pieces, print the report and return the captured pieces
    pub fn run(&mut self) -> Result<Vec<Piece>, SessionError> {
        tracing::info!("capture query session started");

        let white = self.read_white()?;
        let black = self.read_black(&white)?;
        let captures = resolve_captures(&white, &black);
        self.report(&captures)?;

        tracing::info!(
            white = %white,
            black = black.len(),
            captures = captures.len(),
            "capture query session finished"
        );
        Ok(captures)
    }

    /// Print a prompt (if enabled) and read one trimmed, lowercased line
    /// Returns None at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        if self.config.prompts {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn reject(&mut self, line: &str, err: InputError) -> Result<(), SessionError> {
        tracing::debug!(input = line, error = %err, "input rejected");
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    fn read_white(&mut self) -> Result<WhitePiece, SessionError> {
        loop {
            let line = match self.read_line(WHITE_PROMPT)? {
                Some(line) => line,
                None => return Err(SessionError::InputClosed),
            };
            match parse_white(&line) {
                Ok(white) => {
                    tracing::debug!(white = %white, "white piece accepted");
                    writeln!(
                        self.output,
                        "White piece {} added at {}",
                        white.kind,
                        to_label(white.square)
                    )?;
                    return Ok(white);
                }
                Err(err) => self.reject(&line, err)?,
            }
        }
    }

    fn read_black(&mut self, white: &WhitePiece) -> Result<Vec<Piece>, SessionError> {
        let mut roster = BlackRoster::new(white);

        while !roster.is_full() {
            let line = match self.read_line(BLACK_PROMPT)? {
                Some(line) => line,
                None if roster.is_empty() => return Err(SessionError::InputClosed),
                None => break,
            };
            if line == "done" {
                if roster.is_empty() {
                    self.reject(&line, InputError::NoBlackPieces)?;
                    continue;
                }
                break;
            }

            match parse_black(&line).and_then(|piece| roster.add(piece).map(|()| piece)) {
                Ok(piece) => {
                    tracing::debug!(piece = %piece, total = roster.pieces().len(), "black piece accepted");
                    writeln!(
                        self.output,
                        "Black piece {} added at {}",
                        piece.kind,
                        to_label(piece.square)
                    )?;
                }
                Err(err) => self.reject(&line, err)?,
            }
        }

        Ok(roster.into_pieces())
    }

    /// Print the capture list, or the no-capture message
    pub fn report(&mut self, captures: &[Piece]) -> Result<(), SessionError> {
        if captures.is_empty() {
            writeln!(self.output, "The white piece cannot capture any black pieces.")?;
        } else {
            writeln!(self.output, "The white piece can capture the following black pieces:")?;
            for piece in captures {
                writeln!(self.output, "{}", piece)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
