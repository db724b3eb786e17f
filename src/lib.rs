//! Janggi (Korean chess) rules engine.
//!
//! Owns the board state, enforces per-piece movement legality, detects
//! check, and arbitrates turn order. A host drives a game through
//! [`Game::attempt_move`] and renders it from [`Game::board_snapshot`];
//! printing, command interfaces, and any network surface live outside
//! this crate.

pub mod board;
pub mod game;
pub mod rules;

pub use board::{Board, Color, Coordinate, NotationError, Piece, PieceKind, FILE_COUNT, RANK_COUNT};
pub use game::{Game, GameState, MoveError, MoveOutcome};
