use std::fmt::Display;
use std::ops::Index;

use crate::coordinates::{File, Rank, Square};
use crate::piece::Piece;

/// The piece placement of a chess position: a fixed 8x8 grid of optional pieces.
///
/// The board performs no rule validation; callers enforce legality. It is `Copy`, so an
/// independent board can be obtained with a plain assignment, which is what the move validator
/// relies on for its check simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Default for Board {
    /// Creates an empty board.
    fn default() -> Self {
        Board { squares: [None; Square::COUNT] }
    }
}

impl Board {
    /// Returns the piece on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square)]
    }

    /// Places a piece on a square.
    ///
    /// The square must be empty; callers that want to replace a piece must clear the square
    /// first.
    pub fn put_piece(&mut self, piece: Piece, square: Square) {
        debug_assert_eq!(self.squares[usize::from(square)], None);

        self.squares[usize::from(square)] = Some(piece);
    }

    /// Removes whatever piece occupies `square`. Clearing an empty square is a no-op.
    pub fn clear_square(&mut self, square: Square) {
        self.squares[usize::from(square)] = None;
    }

    /// Moves the piece on `from` to the empty square `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        debug_assert!(self.squares[usize::from(from)].is_some());
        debug_assert!(self.squares[usize::from(to)].is_none());

        self.squares[usize::from(to)] = self.squares[usize::from(from)].take();
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[usize::from(square)]
    }
}

impl Display for Board {
    /// Formats the board as a compact grid with rank numbers on the left and file letters at the
    /// bottom, viewed from white's perspective. Empty squares are rendered as dots.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{}  ", rank)?;
            for file in File::ALL {
                match self.piece_on(Square::new(file, *rank)) {
                    Some(piece) => write!(f, "{}", char::from(piece))?,
                    None => write!(f, ".")?,
                }
                if file != File::H {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
