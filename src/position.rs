use std::fmt::Display;

use crate::attacks;
use crate::board::Board;
use crate::castling::CastlingRights;
use crate::coordinates::Square;
use crate::piece::Color;

/// The full state of a chess game between two moves.
///
/// Aggregates the piece placement with the side to move, the castling rights and the current
/// en passant target. This is the unit the FEN codec serializes and the history stores; it is
/// `Copy`, so the move validator can simulate on an independent copy and discard it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
}

impl Position {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        Self::from_fen(crate::fen::STARTING_FEN)
            .expect("The starting position FEN string always parses successfully.")
    }

    /// Returns the piece placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color of the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the castling rights still available.
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Returns the square a pawn skipped over on the immediately preceding double-step, if any.
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Returns true if the king of the side to move is currently attacked.
    pub fn is_check(&self) -> bool {
        attacks::is_king_in_check(&self.board, self.side_to_move)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)
    }
}
