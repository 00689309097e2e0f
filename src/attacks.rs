//! Check detection: determines whether a square is attacked by a given color.
//!
//! Attack patterns mirror move shapes with one exception: a pawn *attacks* its two
//! forward-diagonal squares regardless of what occupies them, while its *move* rule requires the
//! forward square to be empty. Sliding pieces still require a clear path. All scans work outward
//! from the target square over constant offset tables, so there is no shared lookup state.

use crate::board::Board;
use crate::coordinates::Square;
use crate::piece::{Color, Piece, PieceType};

const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

const KING_OFFSETS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walks from `from` in the direction `(file_step, rank_step)` and returns the first piece
/// encountered, if any.
fn first_piece_along(board: &Board, from: Square, file_step: i8, rank_step: i8) -> Option<Piece> {
    let mut square = from;
    while let Some(next) = square.offset(file_step, rank_step) {
        if let Some(piece) = board.piece_on(next) {
            return Some(piece);
        }
        square = next;
    }
    None
}

/// Returns true if any piece of `by` attacks `square`.
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    let knight = Piece::new(by, PieceType::Knight);
    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| square.offset(df, dr).is_some_and(|sq| board.piece_on(sq) == Some(knight)))
    {
        return true;
    }

    let king = Piece::new(by, PieceType::King);
    if KING_OFFSETS
        .iter()
        .any(|&(df, dr)| square.offset(df, dr).is_some_and(|sq| board.piece_on(sq) == Some(king)))
    {
        return true;
    }

    // A pawn of `by` attacks `square` if it stands one rank behind it, toward its own side, on
    // an adjacent file.
    let pawn = Piece::new(by, PieceType::Pawn);
    let direction: i8 = match by {
        Color::White => 1,
        Color::Black => -1,
    };
    if [-1i8, 1]
        .iter()
        .any(|&df| square.offset(df, -direction).is_some_and(|sq| board.piece_on(sq) == Some(pawn)))
    {
        return true;
    }

    for &(df, dr) in &ROOK_DIRECTIONS {
        if let Some(piece) = first_piece_along(board, square, df, dr) {
            if piece.color() == by && matches!(piece.piece_type(), PieceType::Rook | PieceType::Queen) {
                return true;
            }
        }
    }

    for &(df, dr) in &BISHOP_DIRECTIONS {
        if let Some(piece) = first_piece_along(board, square, df, dr) {
            if piece.color() == by && matches!(piece.piece_type(), PieceType::Bishop | PieceType::Queen) {
                return true;
            }
        }
    }

    false
}

/// Returns the square occupied by the king of `color`, or `None` when the board holds no such
/// king (possible after importing a lenient FEN).
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = Piece::new(color, PieceType::King);
    Square::all().find(|&square| board.piece_on(square) == Some(king))
}

/// Returns true if the king of `color` is attacked by the opposite color.
///
/// A board with no king of `color` is reported as not in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(square) => is_attacked(board, square, !color),
        None => false,
    }
}
