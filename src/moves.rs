//! Move validation and execution.
//!
//! [`Position::try_move`] is the single entry point: it accepts a from/to square pair, checks it
//! against the movement rules of the piece on the origin square, simulates the move on a copy of
//! the board to reject moves that leave the mover's king attacked, and only then commits the new
//! state. Castling, en passant and promotion are resolved here as well, from the same square-pair
//! input: castling is requested by moving the king two files, promotion is applied automatically
//! (always to a queen) when a pawn reaches its last rank.

use thiserror::Error;

use crate::attacks;
use crate::board::Board;
use crate::castling::{CastlingRights, CastlingSide};
use crate::coordinates::{File, Rank, Square};
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;

/// Errors produced when a requested move is rejected.
///
/// A rejected move leaves the position untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("There is no piece on {0}")]
    NoPiece(Square),

    #[error("The piece on {0} does not belong to the side to move")]
    NotSideToMove(Square),

    #[error("The destination square is occupied by a friendly piece")]
    FriendlyCapture,

    #[error("The piece cannot move that way")]
    IllegalMovement,

    #[error("The move would leave the king in check")]
    LeavesKingInCheck,
}

fn file_delta(from: Square, to: Square) -> i8 {
    u8::from(to.file()) as i8 - u8::from(from.file()) as i8
}

fn rank_delta(from: Square, to: Square) -> i8 {
    u8::from(to.rank()) as i8 - u8::from(from.rank()) as i8
}

/// The rank direction a pawn of `color` advances in.
fn forward_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// Only meaningful when the two squares share a rank, a file or a diagonal; callers check the
/// alignment first.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let file_step = file_delta(from, to).signum();
    let rank_step = rank_delta(from, to).signum();

    let mut square = from;
    loop {
        square = match square.offset(file_step, rank_step) {
            Some(next) => next,
            None => return false,
        };
        if square == to {
            return true;
        }
        if board.piece_on(square).is_some() {
            return false;
        }
    }
}

/// Returns the castling right tied to a rook standing on `square`, when `square` is one of the
/// rook home corners of `color`.
fn rook_home_right(color: Color, square: Square) -> Option<CastlingRights> {
    let home_rank = Rank::R1.relative_to_color(color);
    if square == Square::new(File::H, home_rank) {
        Some(CastlingRights::new(color, CastlingSide::Kingside))
    } else if square == Square::new(File::A, home_rank) {
        Some(CastlingRights::new(color, CastlingSide::Queenside))
    } else {
        None
    }
}

/// Applies a regular (non-castling) move of `piece` to `board`, resolving en passant captures
/// and promotion. Legality has already been established when this runs.
fn apply_to_board(board: &mut Board, piece: Piece, from: Square, to: Square, en_passant: Option<Square>) {
    let is_pawn = piece.piece_type() == PieceType::Pawn;

    // An en passant capture lands on an empty square; the captured pawn sits beside the origin.
    if is_pawn && file_delta(from, to) != 0 && board.piece_on(to).is_none() && Some(to) == en_passant {
        board.clear_square(Square::new(to.file(), from.rank()));
    }

    board.clear_square(to);
    board.move_piece(from, to);

    if is_pawn && to.rank() == Rank::R8.relative_to_color(piece.color()) {
        board.clear_square(to);
        board.put_piece(Piece::new(piece.color(), PieceType::Queen), to);
    }
}

impl Position {
    /// Validates the move from `from` to `to` for the side to move and, when legal, plays it.
    ///
    /// On success the board, the castling rights, the en passant target and the side to move are
    /// all updated. On error the position is left exactly as it was. Moving the king two files
    /// along its home rank requests castling; every other square pair is validated as a regular
    /// move of the piece on `from`.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.board.piece_on(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::NotSideToMove(from));
        }
        // Also rejects from == to, since the origin square holds the mover's own piece.
        if self.board.piece_on(to).is_some_and(|captured| captured.color() == piece.color()) {
            return Err(MoveError::FriendlyCapture);
        }

        if piece.piece_type() == PieceType::King
            && rank_delta(from, to) == 0
            && file_delta(from, to).abs() == 2
        {
            let side =
                if file_delta(from, to) > 0 { CastlingSide::Kingside } else { CastlingSide::Queenside };
            if !self.can_castle(piece.color(), side) {
                return Err(MoveError::IllegalMovement);
            }
            self.apply_castling(piece.color(), side);
            return Ok(());
        }

        if !self.is_movement_legal(piece, from, to) {
            return Err(MoveError::IllegalMovement);
        }

        // Simulate on a copy; the live board is only replaced once the king is known to be safe.
        let mut board = self.board;
        apply_to_board(&mut board, piece, from, to, self.en_passant_square);
        if attacks::is_king_in_check(&board, piece.color()) {
            return Err(MoveError::LeavesKingInCheck);
        }

        self.update_castling_rights(piece, from, to);
        self.update_en_passant(piece, from, to);
        self.board = board;
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// Returns true if `color` may castle toward `side` in the current position.
    ///
    /// Requires the matching castling right, the king and rook on their home squares, an empty
    /// path between them, and no enemy attack on any square the king stands on or crosses
    /// (castling out of, through or into check is forbidden). The rook's path may be attacked.
    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        if !self.castling_rights.contains(CastlingRights::new(color, side)) {
            return false;
        }

        let home_rank = Rank::R1.relative_to_color(color);
        let king_square = Square::new(File::E, home_rank);
        let rook_file = match side {
            CastlingSide::Kingside => File::H,
            CastlingSide::Queenside => File::A,
        };
        if self.board.piece_on(king_square) != Some(Piece::new(color, PieceType::King))
            || self.board.piece_on(Square::new(rook_file, home_rank)) != Some(Piece::new(color, PieceType::Rook))
        {
            return false;
        }

        let between: &[File] = match side {
            CastlingSide::Kingside => &[File::F, File::G],
            CastlingSide::Queenside => &[File::D, File::C, File::B],
        };
        if between.iter().any(|&file| self.board.piece_on(Square::new(file, home_rank)).is_some()) {
            return false;
        }

        let king_path: &[File] = match side {
            CastlingSide::Kingside => &[File::E, File::F, File::G],
            CastlingSide::Queenside => &[File::E, File::D, File::C],
        };
        !king_path
            .iter()
            .any(|&file| attacks::is_attacked(&self.board, Square::new(file, home_rank), !color))
    }

    /// Plays a castling move whose eligibility has already been verified.
    fn apply_castling(&mut self, color: Color, side: CastlingSide) {
        let home_rank = Rank::R1.relative_to_color(color);
        let (king_to, rook_from, rook_to) = match side {
            CastlingSide::Kingside => (File::G, File::H, File::F),
            CastlingSide::Queenside => (File::C, File::A, File::D),
        };
        self.board.move_piece(Square::new(File::E, home_rank), Square::new(king_to, home_rank));
        self.board.move_piece(Square::new(rook_from, home_rank), Square::new(rook_to, home_rank));
        self.castling_rights.remove(CastlingRights::both(color));
        self.en_passant_square = None;
        self.side_to_move = !self.side_to_move;
    }

    /// Checks the geometric movement rule of `piece` for the pair `from`/`to`, including path
    /// clearance for sliding pieces. Does not consider checks; the caller simulates those.
    fn is_movement_legal(&self, piece: Piece, from: Square, to: Square) -> bool {
        let df = file_delta(from, to);
        let dr = rank_delta(from, to);

        match piece.piece_type() {
            PieceType::Pawn => self.is_pawn_move_legal(piece.color(), from, to),
            PieceType::Knight => (df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1),
            PieceType::Bishop => df.abs() == dr.abs() && df != 0 && path_is_clear(&self.board, from, to),
            PieceType::Rook => (df == 0) != (dr == 0) && path_is_clear(&self.board, from, to),
            PieceType::Queen => {
                (df == 0 || dr == 0 || df.abs() == dr.abs()) && path_is_clear(&self.board, from, to)
            }
            PieceType::King => df.abs().max(dr.abs()) == 1,
        }
    }

    fn is_pawn_move_legal(&self, color: Color, from: Square, to: Square) -> bool {
        let direction = forward_direction(color);
        let df = file_delta(from, to);
        let dr = rank_delta(from, to);

        if df == 0 && dr == direction {
            return self.board.piece_on(to).is_none();
        }

        if df == 0 && dr == 2 * direction {
            return from.rank() == Rank::R2.relative_to_color(color)
                && self.board.piece_on(to).is_none()
                && from.offset(0, direction).is_some_and(|skipped| self.board.piece_on(skipped).is_none());
        }

        if df.abs() == 1 && dr == direction {
            return self.board.piece_on(to).is_some_and(|captured| captured.color() != color)
                || Some(to) == self.en_passant_square;
        }

        false
    }

    /// Removes the castling rights invalidated by this move: both rights of the mover when the
    /// king moves, the matching right when a rook leaves its home corner, and the opponent's
    /// matching right when a rook is captured on its home corner.
    fn update_castling_rights(&mut self, piece: Piece, from: Square, to: Square) {
        if let Some(captured) = self.board.piece_on(to) {
            if captured.piece_type() == PieceType::Rook {
                if let Some(right) = rook_home_right(captured.color(), to) {
                    self.castling_rights.remove(right);
                }
            }
        }

        match piece.piece_type() {
            PieceType::King => self.castling_rights.remove(CastlingRights::both(piece.color())),
            PieceType::Rook => {
                if let Some(right) = rook_home_right(piece.color(), from) {
                    self.castling_rights.remove(right);
                }
            }
            _ => {}
        }
    }

    /// Sets the en passant target after a pawn double-step and clears it after any other move.
    fn update_en_passant(&mut self, piece: Piece, from: Square, to: Square) {
        self.en_passant_square = None;
        if piece.piece_type() == PieceType::Pawn && rank_delta(from, to).abs() == 2 {
            self.en_passant_square = from.offset(0, forward_direction(piece.color()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    mod pawn_tests {
        use super::*;

        #[test]
        fn test_single_push() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::E2, Square::E3), Ok(()));
            assert_eq!(position.board().piece_on(Square::E3), Some(Piece::WHITE_PAWN));
            assert_eq!(position.side_to_move(), Color::Black);
            assert_eq!(position.en_passant_square(), None);
        }

        #[test]
        fn test_double_push_sets_en_passant_target() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::E2, Square::E4), Ok(()));
            assert_eq!(position.en_passant_square(), Some(Square::E3));

            assert_eq!(position.try_move(Square::D7, Square::D5), Ok(()));
            assert_eq!(position.en_passant_square(), Some(Square::D6));
        }

        #[test]
        fn test_double_push_requires_home_rank() {
            let mut position = pos("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E3, Square::E5), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_push_onto_occupied_square_is_rejected() {
            let mut position = pos("4k3/8/8/8/4n3/4P3/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E3, Square::E4), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_double_push_blocked_by_piece_on_skipped_square() {
            let mut position = pos("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E2, Square::E4), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_diagonal_capture() {
            let mut position = pos("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E4, Square::D5), Ok(()));
            assert_eq!(position.board().piece_on(Square::D5), Some(Piece::WHITE_PAWN));
        }

        #[test]
        fn test_diagonal_without_capture_is_rejected() {
            let mut position = pos("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E4, Square::D5), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_straight_capture_is_rejected() {
            let mut position = pos("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E4, Square::E5), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_backward_move_is_rejected() {
            let mut position = pos("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E4, Square::E3), Err(MoveError::IllegalMovement));
        }
    }

    mod en_passant_tests {
        use super::*;

        #[test]
        fn test_en_passant_capture_removes_the_passed_pawn() {
            let mut position = pos("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1");
            assert_eq!(position.try_move(Square::E5, Square::F6), Ok(()));
            assert_eq!(position.board().piece_on(Square::F6), Some(Piece::WHITE_PAWN));
            assert_eq!(position.board().piece_on(Square::F5), None);
            assert_eq!(position.en_passant_square(), None);
        }

        #[test]
        fn test_en_passant_expires_after_one_move() {
            let mut position = Position::new();
            position.try_move(Square::E2, Square::E4).unwrap();
            position.try_move(Square::D7, Square::D5).unwrap();
            position.try_move(Square::E4, Square::E5).unwrap();
            position.try_move(Square::F7, Square::F5).unwrap();
            // White passes on the capture.
            position.try_move(Square::G1, Square::F3).unwrap();
            position.try_move(Square::B8, Square::C6).unwrap();
            // The f5 pawn can no longer be taken in passing.
            assert_eq!(position.try_move(Square::E5, Square::F6), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_black_en_passant_capture() {
            let mut position = pos("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
            assert_eq!(position.try_move(Square::D4, Square::E3), Ok(()));
            assert_eq!(position.board().piece_on(Square::E3), Some(Piece::BLACK_PAWN));
            assert_eq!(position.board().piece_on(Square::E4), None);
        }

        #[test]
        fn test_en_passant_rejected_without_target() {
            let mut position = pos("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E5, Square::D6), Err(MoveError::IllegalMovement));
        }
    }

    mod promotion_tests {
        use super::*;

        #[test]
        fn test_push_to_last_rank_promotes_to_queen() {
            let mut position = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::A7, Square::A8), Ok(()));
            assert_eq!(position.board().piece_on(Square::A8), Some(Piece::WHITE_QUEEN));
        }

        #[test]
        fn test_capture_on_last_rank_promotes_to_queen() {
            let mut position = pos("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::A7, Square::B8), Ok(()));
            assert_eq!(position.board().piece_on(Square::B8), Some(Piece::WHITE_QUEEN));
        }

        #[test]
        fn test_black_promotion() {
            let mut position = pos("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
            assert_eq!(position.try_move(Square::A2, Square::A1), Ok(()));
            assert_eq!(position.board().piece_on(Square::A1), Some(Piece::BLACK_QUEEN));
        }
    }

    mod piece_movement_tests {
        use super::*;

        #[test]
        fn test_knight_jumps_over_pieces() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::G1, Square::F3), Ok(()));
            assert_eq!(position.board().piece_on(Square::F3), Some(Piece::WHITE_KNIGHT));
        }

        #[test]
        fn test_knight_shape_is_enforced() {
            let mut position = pos("4k3/8/8/8/4N3/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E4, Square::E6), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::E4, Square::G6), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::E4, Square::F6), Ok(()));
        }

        #[test]
        fn test_bishop_diagonal_only() {
            let mut position = pos("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1");
            assert_eq!(position.try_move(Square::C1, Square::C4), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::C1, Square::G5), Ok(()));
        }

        #[test]
        fn test_rook_straight_only() {
            let mut position = pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
            assert_eq!(position.try_move(Square::A1, Square::B2), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::A1, Square::A5), Ok(()));
        }

        #[test]
        fn test_sliding_piece_cannot_jump() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::A1, Square::A3), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::C1, Square::E3), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::D1, Square::D3), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_queen_moves_both_lines() {
            let mut position = pos("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
            assert_eq!(position.try_move(Square::D1, Square::D8), Ok(()));

            let mut position = pos("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
            assert_eq!(position.try_move(Square::D1, Square::A4), Ok(()));

            let mut position = pos("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
            assert_eq!(position.try_move(Square::D1, Square::E3), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_king_single_step_only() {
            let mut position = pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E1, Square::E3), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::E1, Square::D2), Ok(()));
        }
    }

    mod rejection_tests {
        use super::*;

        #[test]
        fn test_empty_origin_square() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::E4, Square::E5), Err(MoveError::NoPiece(Square::E4)));
        }

        #[test]
        fn test_moving_the_opponents_piece() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::E7, Square::E5), Err(MoveError::NotSideToMove(Square::E7)));
        }

        #[test]
        fn test_capturing_a_friendly_piece() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::D1, Square::D2), Err(MoveError::FriendlyCapture));
        }

        #[test]
        fn test_null_move_is_rejected() {
            let mut position = Position::new();
            assert_eq!(position.try_move(Square::E2, Square::E2), Err(MoveError::FriendlyCapture));
        }

        #[test]
        fn test_rejected_move_leaves_position_untouched() {
            let mut position = Position::new();
            let before = position;
            assert!(position.try_move(Square::A1, Square::A5).is_err());
            assert_eq!(position, before);
        }
    }

    mod check_tests {
        use super::*;

        #[test]
        fn test_pinned_piece_cannot_move() {
            let mut position = pos("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E2, Square::C3), Err(MoveError::LeavesKingInCheck));
        }

        #[test]
        fn test_pinned_piece_can_capture_the_attacker() {
            let mut position = pos("4k3/8/8/8/8/4r3/4R3/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E2, Square::E3), Ok(()));
        }

        #[test]
        fn test_king_cannot_step_into_attack() {
            let mut position = pos("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
            assert_eq!(position.try_move(Square::E1, Square::E2), Err(MoveError::LeavesKingInCheck));
            assert_eq!(position.try_move(Square::E1, Square::F1), Ok(()));
        }

        #[test]
        fn test_check_must_be_answered() {
            // Moving the a-pawn ignores the check from the rook on e7.
            let mut position = pos("4k3/4r3/8/8/8/8/P7/4K3 w - - 0 1");
            assert!(position.is_check());
            assert_eq!(position.try_move(Square::A2, Square::A3), Err(MoveError::LeavesKingInCheck));
            assert_eq!(position.try_move(Square::E1, Square::D1), Ok(()));
        }

        #[test]
        fn test_en_passant_revealing_check_is_rejected() {
            // Capturing in passing removes both pawns from the fifth rank and exposes the king
            // to the rook on h5.
            let mut position = pos("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1");
            assert_eq!(position.try_move(Square::E5, Square::D6), Err(MoveError::LeavesKingInCheck));
        }
    }

    mod castling_tests {
        use super::*;

        #[test]
        fn test_white_kingside() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
            assert_eq!(position.try_move(Square::E1, Square::G1), Ok(()));
            assert_eq!(position.board().piece_on(Square::G1), Some(Piece::WHITE_KING));
            assert_eq!(position.board().piece_on(Square::F1), Some(Piece::WHITE_ROOK));
            assert_eq!(position.board().piece_on(Square::E1), None);
            assert_eq!(position.board().piece_on(Square::H1), None);
            assert_eq!(position.castling_rights(), CastlingRights::both(Color::Black));
        }

        #[test]
        fn test_black_queenside() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
            assert_eq!(position.try_move(Square::E8, Square::C8), Ok(()));
            assert_eq!(position.board().piece_on(Square::C8), Some(Piece::BLACK_KING));
            assert_eq!(position.board().piece_on(Square::D8), Some(Piece::BLACK_ROOK));
            assert_eq!(position.castling_rights(), CastlingRights::both(Color::White));
        }

        #[test]
        fn test_castling_requires_the_right() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1");
            assert_eq!(position.try_move(Square::E1, Square::G1), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::E1, Square::C1), Ok(()));
        }

        #[test]
        fn test_castling_requires_empty_path() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R2QK2R w KQkq - 0 1");
            assert_eq!(position.try_move(Square::E1, Square::C1), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_castling_out_of_check_is_rejected() {
            let mut position = pos("r3k2r/8/8/8/8/8/4R3/K7 b kq - 0 1");
            assert_eq!(position.try_move(Square::E8, Square::G8), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::E8, Square::C8), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_castling_through_attacked_square_is_rejected() {
            // The rook on f2 covers f8, crossed by the kingside king but not the queenside one.
            let mut position = pos("r3k2r/8/8/8/8/8/5R2/K7 b kq - 0 1");
            assert_eq!(position.try_move(Square::E8, Square::G8), Err(MoveError::IllegalMovement));
            assert_eq!(position.try_move(Square::E8, Square::C8), Ok(()));
        }

        #[test]
        fn test_attacked_rook_path_does_not_block_castling() {
            // The rook on b2 covers b8, which only the rook crosses.
            let mut position = pos("r3k2r/8/8/8/8/8/1R6/K7 b kq - 0 1");
            assert_eq!(position.try_move(Square::E8, Square::C8), Ok(()));
        }

        #[test]
        fn test_moving_the_king_revokes_both_rights() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
            position.try_move(Square::E1, Square::E2).unwrap();
            assert_eq!(position.castling_rights(), CastlingRights::both(Color::Black));
        }

        #[test]
        fn test_moving_a_rook_revokes_its_right() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
            position.try_move(Square::H1, Square::H5).unwrap();
            assert_eq!(
                position.castling_rights(),
                CastlingRights::WHITE_QUEENSIDE | CastlingRights::both(Color::Black)
            );
        }

        #[test]
        fn test_right_is_not_restored_when_the_rook_returns() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
            position.try_move(Square::H1, Square::H5).unwrap();
            position.try_move(Square::A8, Square::A7).unwrap();
            position.try_move(Square::H5, Square::H1).unwrap();
            position.try_move(Square::A7, Square::A8).unwrap();
            assert_eq!(position.try_move(Square::E1, Square::G1), Err(MoveError::IllegalMovement));
        }

        #[test]
        fn test_capturing_a_home_rook_revokes_the_opponents_right() {
            let mut position = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
            position.try_move(Square::A1, Square::A8).unwrap();
            assert_eq!(
                position.castling_rights(),
                CastlingRights::WHITE_KINGSIDE | CastlingRights::BLACK_KINGSIDE
            );
        }
    }
}
