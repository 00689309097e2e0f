//! Linear game history.
//!
//! The history is a list of FEN snapshots with a cursor pointing at the current one. Appending
//! while the cursor sits before the last entry discards everything after the cursor first, so
//! the history always stays a single line of play with no redo branches.

use thiserror::Error;

use crate::fen::FenError;

/// Errors produced when importing a history.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Cannot import an empty history")]
    EmptyImport,

    #[error("History entry {index} is not a valid FEN string")]
    InvalidEntry {
        index: usize,
        source: FenError,
    },
}

/// An ordered list of position snapshots with a navigation cursor.
///
/// The history stores plain FEN strings and knows nothing about chess rules; callers decode the
/// snapshots they navigate to. It is never empty: it is created with an initial snapshot and an
/// import of zero entries is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Creates a history containing a single initial snapshot, with the cursor on it.
    pub fn new(initial: String) -> Self {
        History { entries: vec![initial], cursor: 0 }
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Returns the index of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of snapshots stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a snapshot after the cursor and moves the cursor onto it.
    ///
    /// Any snapshots beyond the cursor are discarded first, so playing a new move after undoing
    /// replaces the abandoned continuation.
    pub fn append(&mut self, snapshot: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    /// Moves the cursor one snapshot back and returns the snapshot it lands on, or `None` when
    /// already at the first snapshot. A `None` leaves the cursor untouched.
    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Moves the cursor one snapshot forward and returns the snapshot it lands on, or `None`
    /// when already at the last snapshot.
    pub fn redo(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Moves the cursor to an absolute index and returns the snapshot there, or `None` when the
    /// index is out of range. Jumping in either direction is allowed, including to the cursor's
    /// own index.
    pub fn jump(&mut self, index: usize) -> Option<&str> {
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = index;
        Some(self.current())
    }

    /// Returns all snapshots in order, from the initial position to the latest.
    pub fn export_all(&self) -> &[String] {
        &self.entries
    }

    /// Replaces the whole history with `entries` and puts the cursor on the last snapshot.
    ///
    /// The entries are stored as given; callers validate them as FEN beforehand. An empty list
    /// is rejected and leaves the history untouched.
    pub fn import_all(&mut self, entries: Vec<String>) -> Result<(), HistoryError> {
        if entries.is_empty() {
            return Err(HistoryError::EmptyImport);
        }
        self.cursor = entries.len() - 1;
        self.entries = entries;
        Ok(())
    }
}
