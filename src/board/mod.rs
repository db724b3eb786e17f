//! Board representation and core types.
//!
//! Contains the piece and side vocabulary, square coordinates with their
//! notation codec, the palace zones, and the grid itself.

pub mod coord;
pub mod grid;
pub mod palace;
pub mod piece;

pub use coord::{Coordinate, NotationError, FILE_COUNT, RANK_COUNT};
pub use grid::{Board, SnapshotGrid};
pub use palace::{diagonal_step_on_line, in_palace, long_diagonal, palace_at, palace_center};
pub use piece::{Color, Piece, PieceKind, ALL_COLORS};
