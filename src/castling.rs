use bitflags::bitflags;

use crate::piece::Color;

/// The two sides a king can castle toward.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside = 0,
    Queenside = 1,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];
}

bitflags! {
    /// The four independent castling rights of a position.
    ///
    /// Rights are granted when a position is created or decoded and are only ever removed
    /// afterwards: once a king or rook moves (or a rook is captured on its home square) the
    /// corresponding flag is lost for the rest of the game.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct CastlingRights: u8 {
        const WHITE_KINGSIDE = 1 << 0;
        const WHITE_QUEENSIDE = 1 << 1;
        const BLACK_KINGSIDE = 1 << 2;
        const BLACK_QUEENSIDE = 1 << 3;
    }
}

impl CastlingRights {
    /// Returns the single right for a color and side.
    pub fn new(color: Color, side: CastlingSide) -> CastlingRights {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => CastlingRights::WHITE_KINGSIDE,
            (Color::White, CastlingSide::Queenside) => CastlingRights::WHITE_QUEENSIDE,
            (Color::Black, CastlingSide::Kingside) => CastlingRights::BLACK_KINGSIDE,
            (Color::Black, CastlingSide::Queenside) => CastlingRights::BLACK_QUEENSIDE,
        }
    }

    /// Returns both rights of a color.
    pub fn both(color: Color) -> CastlingRights {
        CastlingRights::new(color, CastlingSide::Kingside) | CastlingRights::new(color, CastlingSide::Queenside)
    }
}
