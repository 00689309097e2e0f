//! FEN (Forsyth-Edwards Notation) codec.
//!
//! A FEN string contains 6 space-separated fields:
//!
//! 1. Piece placement: 8 ranks from 8 down to 1, separated by '/'. Letters represent pieces
//!    (uppercase white, lowercase black), digits represent runs of empty squares; every rank
//!    must describe exactly 8 files.
//! 2. Active color: "w" or "b".
//! 3. Castling availability: a subset of "KQkq", or "-".
//! 4. En passant target square in algebraic notation, or "-".
//! 5. Halfmove clock and 6. fullmove number: accepted on decode but not tracked by this engine;
//!    always written back as "0 1".

use thiserror::Error;

use crate::board::Board;
use crate::castling::CastlingRights;
use crate::coordinates::{File, Rank, Square};
use crate::piece::{Color, Piece};
use crate::position::Position;

/// The FEN string of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Errors produced when parsing a FEN string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FenError {
    #[error("The piece placement field does not describe 8 ranks of 8 files")]
    InvalidPiecePlacement,

    #[error("The active color field is not \"w\" or \"b\"")]
    InvalidActiveColor,

    #[error("The castling availability field is not \"-\" or a subset of \"KQkq\"")]
    InvalidCastlingAvailability,

    #[error("The en passant field is not \"-\" or a valid square")]
    InvalidEnPassantSquare,

    #[error("The FEN string is missing a required field")]
    MissingField,
}

fn parse_piece_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement);
    }

    let mut board = Board::default();
    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = Rank::from(7 - row as u8);
        let mut file: u8 = 0;
        for c in rank_text.chars() {
            if let Some(count) = c.to_digit(10) {
                file = file.saturating_add(count as u8);
            } else {
                let piece = Piece::try_from(c).map_err(|_| FenError::InvalidPiecePlacement)?;
                if file >= 8 {
                    return Err(FenError::InvalidPiecePlacement);
                }
                board.put_piece(piece, Square::new(File::from(file), rank));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::InvalidPiecePlacement);
        }
    }
    Ok(board)
}

fn parse_active_color(field: &str) -> Result<Color, FenError> {
    match field.to_ascii_lowercase().as_str() {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidActiveColor),
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(CastlingRights::empty());
    }

    let mut rights = CastlingRights::empty();
    for c in field.chars() {
        rights |= match c {
            'K' => CastlingRights::WHITE_KINGSIDE,
            'Q' => CastlingRights::WHITE_QUEENSIDE,
            'k' => CastlingRights::BLACK_KINGSIDE,
            'q' => CastlingRights::BLACK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastlingAvailability),
        };
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    match field {
        "-" => Ok(None),
        _ => Square::try_from(field).map(Some).map_err(|_| FenError::InvalidEnPassantSquare),
    }
}

fn write_piece_placement(board: &Board) -> String {
    let mut result = String::with_capacity(70);
    for rank in Rank::ALL.iter().rev() {
        let mut empty_count = 0;
        for file in File::ALL {
            match board.piece_on(Square::new(file, *rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        result.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    result.push(char::from(piece));
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            result.push_str(&empty_count.to_string());
        }
        if *rank != Rank::R1 {
            result.push('/');
        }
    }
    result
}

fn write_castling(rights: CastlingRights) -> String {
    if rights.is_empty() {
        return String::from("-");
    }

    let mut result = String::with_capacity(4);
    if rights.contains(CastlingRights::WHITE_KINGSIDE) {
        result.push('K');
    }
    if rights.contains(CastlingRights::WHITE_QUEENSIDE) {
        result.push('Q');
    }
    if rights.contains(CastlingRights::BLACK_KINGSIDE) {
        result.push('k');
    }
    if rights.contains(CastlingRights::BLACK_QUEENSIDE) {
        result.push('q');
    }
    result
}

fn write_en_passant(square: Option<Square>) -> String {
    match square {
        Some(square) => square.to_string(),
        None => String::from("-"),
    }
}

impl Position {
    /// Creates a chess position from a FEN string.
    ///
    /// The placement and active-color fields are required. A missing castling or en passant
    /// field is read as "-" (no rights, no target). The halfmove clock and fullmove number are
    /// accepted but ignored. Parsing builds a fresh position, so no existing state is touched
    /// when an error is returned.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut fields = fen.split_whitespace();
        let board = parse_piece_placement(fields.next().ok_or(FenError::MissingField)?)?;
        let side_to_move = parse_active_color(fields.next().ok_or(FenError::MissingField)?)?;
        let castling_rights = parse_castling(fields.next().unwrap_or("-"))?;
        let en_passant_square = parse_en_passant(fields.next().unwrap_or("-"))?;

        Ok(Position { board, side_to_move, castling_rights, en_passant_square })
    }

    /// Returns the FEN representation of the position.
    ///
    /// The halfmove clock and fullmove number are not tracked and are always written as "0 1".
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} 0 1",
            write_piece_placement(&self.board),
            char::from(self.side_to_move),
            write_castling(self.castling_rights),
            write_en_passant(self.en_passant_square)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod decoding_tests {
        use super::*;

        #[test]
        fn test_starting_position_fields() {
            let position = Position::from_fen(STARTING_FEN).unwrap();
            assert_eq!(position.side_to_move(), Color::White);
            assert_eq!(position.castling_rights(), CastlingRights::all());
            assert_eq!(position.en_passant_square(), None);
            assert_eq!(position.board().piece_on(Square::A1), Some(Piece::WHITE_ROOK));
            assert_eq!(position.board().piece_on(Square::D8), Some(Piece::BLACK_QUEEN));
            assert_eq!(position.board().piece_on(Square::H7), Some(Piece::BLACK_PAWN));
        }

        #[test]
        fn test_en_passant_target() {
            let position =
                Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
            assert_eq!(position.en_passant_square(), Some(Square::E3));
        }

        #[test]
        fn test_partial_castling_rights() {
            let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
            assert_eq!(
                position.castling_rights(),
                CastlingRights::WHITE_KINGSIDE | CastlingRights::BLACK_QUEENSIDE
            );
        }

        #[test]
        fn test_missing_castling_field_revokes_all_rights() {
            let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w").unwrap();
            assert_eq!(position.castling_rights(), CastlingRights::empty());
            assert_eq!(position.en_passant_square(), None);
        }

        #[test]
        fn test_active_color_is_case_insensitive() {
            let position = Position::from_fen("8/8/8/8/8/8/8/8 B - - 0 1").unwrap();
            assert_eq!(position.side_to_move(), Color::Black);
        }

        #[test]
        fn test_halfmove_and_fullmove_are_ignored() {
            let position = Position::from_fen("8/8/8/8/8/8/8/8 w - - 37 142").unwrap();
            assert!(position.to_fen().ends_with("0 1"));
        }

        #[test]
        fn test_empty_string_is_rejected() {
            assert_eq!(Position::from_fen(""), Err(FenError::MissingField));
        }

        #[test]
        fn test_missing_active_color_is_rejected() {
            assert_eq!(Position::from_fen("8/8/8/8/8/8/8/8"), Err(FenError::MissingField));
        }

        #[test]
        fn test_wrong_rank_count_is_rejected() {
            assert_eq!(Position::from_fen("8/8/8/8/8/8/8 w - - 0 1"), Err(FenError::InvalidPiecePlacement));
            assert_eq!(Position::from_fen("8/8/8/8/8/8/8/8/8 w - - 0 1"), Err(FenError::InvalidPiecePlacement));
        }

        #[test]
        fn test_wrong_file_count_is_rejected() {
            assert_eq!(Position::from_fen("9/8/8/8/8/8/8/8 w - - 0 1"), Err(FenError::InvalidPiecePlacement));
            assert_eq!(Position::from_fen("7/8/8/8/8/8/8/8 w - - 0 1"), Err(FenError::InvalidPiecePlacement));
            assert_eq!(
                Position::from_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1"),
                Err(FenError::InvalidPiecePlacement)
            );
        }

        #[test]
        fn test_unknown_piece_letter_is_rejected() {
            assert_eq!(Position::from_fen("7x/8/8/8/8/8/8/8 w - - 0 1"), Err(FenError::InvalidPiecePlacement));
        }

        #[test]
        fn test_invalid_active_color_is_rejected() {
            assert_eq!(Position::from_fen("8/8/8/8/8/8/8/8 x - - 0 1"), Err(FenError::InvalidActiveColor));
        }

        #[test]
        fn test_invalid_castling_character_is_rejected() {
            assert_eq!(
                Position::from_fen("8/8/8/8/8/8/8/8 w KX - 0 1"),
                Err(FenError::InvalidCastlingAvailability)
            );
        }

        #[test]
        fn test_invalid_en_passant_square_is_rejected() {
            assert_eq!(
                Position::from_fen("8/8/8/8/8/8/8/8 w - e9 0 1"),
                Err(FenError::InvalidEnPassantSquare)
            );
        }
    }

    mod encoding_tests {
        use super::*;

        #[test]
        fn test_starting_position_round_trip() {
            let position = Position::from_fen(STARTING_FEN).unwrap();
            assert_eq!(position.to_fen(), STARTING_FEN);
        }

        #[test]
        fn test_round_trip_preserves_tracked_fields() {
            let fens = [
                "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
                "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1",
                "8/8/8/3k4/8/8/4P3/4K3 b - - 0 1",
                "2kr3r/8/8/8/8/8/5R2/K7 w - - 0 1",
            ];
            for fen in fens {
                let position = Position::from_fen(fen).unwrap();
                assert_eq!(position.to_fen(), fen);
                assert_eq!(Position::from_fen(&position.to_fen()).unwrap(), position);
            }
        }
    }
}
