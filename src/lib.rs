//! A chess rules engine with no rendering or I/O dependency.
//!
//! The crate validates moves (including castling, en passant and forced queen
//! promotion), detects checks, converts positions to and from FEN
//! (Forsyth-Edwards Notation), and keeps a linear history of FEN snapshots
//! that supports undo, redo, jump and bulk export/import. A front end is
//! expected to drive the [`game::Game`] facade and render whatever state it
//! returns; the engine itself never touches a display or the filesystem.

pub mod attacks;
pub mod board;
pub mod castling;
pub mod coordinates;
pub mod fen;
pub mod game;
pub mod history;
pub mod moves;
pub mod piece;
pub mod position;
