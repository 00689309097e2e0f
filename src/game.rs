//! Game facade tying the move validator to the snapshot history.
//!
//! A [`Game`] owns a [`Position`] and a [`History`] and keeps them in step: every accepted move
//! appends the resulting FEN snapshot, and navigating the history re-decodes the snapshot the
//! cursor lands on. This is the type a GUI or protocol front end talks to.

use crate::coordinates::Square;
use crate::fen::FenError;
use crate::history::{History, HistoryError};
use crate::moves::MoveError;
use crate::position::Position;

/// A chess game: the current position plus the line of play that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    history: History,
}

impl Game {
    /// Creates a game at the standard starting position, with a one-snapshot history.
    pub fn new() -> Self {
        let position = Position::new();
        let history = History::new(position.to_fen());
        Game { position, history }
    }

    /// Creates a game from a FEN string; the history starts with that position as its only
    /// snapshot.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let position = Position::from_fen(fen)?;
        let history = History::new(position.to_fen());
        Ok(Game { position, history })
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the history of the game.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the FEN representation of the current position.
    pub fn export_position(&self) -> String {
        self.position.to_fen()
    }

    /// Replaces the current position with one decoded from `fen`.
    ///
    /// The history is left untouched: the snapshot under the cursor still describes the previous
    /// line of play, and the next accepted move appends on top of it. On error the game is
    /// unchanged.
    pub fn import_position(&mut self, fen: &str) -> Result<&Position, FenError> {
        self.position = Position::from_fen(fen)?;
        Ok(&self.position)
    }

    /// Validates and plays a move, recording the resulting position in the history.
    ///
    /// A rejected move returns the validator's error and records nothing.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<&Position, MoveError> {
        self.position.try_move(from, to)?;
        self.history.append(self.position.to_fen());
        Ok(&self.position)
    }

    /// Steps one snapshot back in the history and restores that position, or returns `None`
    /// (changing nothing) when already at the first snapshot.
    pub fn undo(&mut self) -> Option<&Position> {
        let position = Position::from_fen(self.history.undo()?).ok()?;
        self.position = position;
        Some(&self.position)
    }

    /// Steps one snapshot forward in the history and restores that position, or returns `None`
    /// when already at the last snapshot.
    pub fn redo(&mut self) -> Option<&Position> {
        let position = Position::from_fen(self.history.redo()?).ok()?;
        self.position = position;
        Some(&self.position)
    }

    /// Restores the position at an absolute history index, or returns `None` when the index is
    /// out of range.
    pub fn jump_to(&mut self, index: usize) -> Option<&Position> {
        let position = Position::from_fen(self.history.jump(index)?).ok()?;
        self.position = position;
        Some(&self.position)
    }

    /// Returns every snapshot of the game in order, ready to be persisted.
    pub fn export_history(&self) -> Vec<String> {
        self.history.export_all().to_vec()
    }

    /// Replaces the game with an imported line of play.
    ///
    /// Every entry must decode as FEN; the first invalid entry fails the import and leaves the
    /// game untouched. On success the current position becomes the last snapshot.
    pub fn import_history(&mut self, entries: Vec<String>) -> Result<&Position, HistoryError> {
        let mut position = None;
        for (index, entry) in entries.iter().enumerate() {
            position = Some(
                Position::from_fen(entry)
                    .map_err(|source| HistoryError::InvalidEntry { index, source })?,
            );
        }
        let position = position.ok_or(HistoryError::EmptyImport)?;

        self.history.import_all(entries)?;
        self.position = position;
        Ok(&self.position)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
