//! Game orchestration.
//!
//! Owns the board, arbitrates turn order, and commits moves through a
//! validate / provisionally-apply / re-check / commit-or-roll-back
//! sequence, so a rejected move never leaves a trace on the board or the
//! turn counter.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Coordinate, NotationError, Piece, SnapshotGrid, ALL_COLORS};
use crate::rules::{check, movegen, validator};

/// Coarse game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Unfinished,
    RedWon,
    BlueWon,
}

/// The result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Origin equalled destination: the turn was passed.
    Passed,
    /// The piece was moved, capturing the given piece if any.
    Moved { captured: Option<Piece> },
}

/// Why a move attempt was rejected. The board and turn are untouched on
/// every rejection.
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    InvalidNotation(#[from] NotationError),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coordinate, to: Coordinate },

    #[error("moving from {from} to {to} leaves the general in check")]
    SelfCheckUnresolved { from: Coordinate, to: Coordinate },
}

/// Per-side check bookkeeping. `threat` remembers the square of the piece
/// that most recently delivered check, so a reply can be re-tested
/// against the standing threat.
#[derive(Debug, Clone, Copy, Default)]
struct CheckStatus {
    in_check: bool,
    threat: Option<Coordinate>,
}

/// A single game of Janggi. Blue moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    ply: u32,
    checks: [CheckStatus; 2],
}

impl Game {
    /// Starts a game from the standard starting layout.
    pub fn new() -> Game {
        Game::with_board(Board::starting_position(), Color::Blue)
    }

    /// Starts a game from an arbitrary position with the given side to
    /// move. The position must hold one general per side.
    pub fn with_board(board: Board, to_move: Color) -> Game {
        Game {
            board,
            state: GameState::Unfinished,
            ply: match to_move {
                Color::Blue => 0,
                Color::Red => 1,
            },
            checks: [CheckStatus::default(); 2],
        }
    }

    /// The side to move.
    pub fn current_turn(&self) -> Color {
        if self.ply % 2 == 0 {
            Color::Blue
        } else {
            Color::Red
        }
    }

    /// The game outcome so far.
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Returns whether the side's general is currently under attack.
    pub fn is_in_check(&self, color: Color) -> bool {
        check::is_in_check(&self.board, color)
    }

    /// The current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of every cell for presentation layers.
    pub fn board_snapshot(&self) -> SnapshotGrid {
        self.board.snapshot()
    }

    /// Validates and applies a move given in square notation. On success
    /// the turn advances; on failure the board and turn are unchanged.
    pub fn attempt_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let from = Coordinate::parse(from)?;
        let to = Coordinate::parse(to)?;
        self.play(from, to)
    }

    /// Boolean convenience wrapper around [`Game::attempt_move`].
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.attempt_move(from, to).is_ok()
    }

    /// Validates and applies a move between parsed coordinates.
    pub fn play(&mut self, from: Coordinate, to: Coordinate) -> Result<MoveOutcome, MoveError> {
        if self.state != GameState::Unfinished {
            return Err(MoveError::GameAlreadyOver);
        }

        let mover = self.current_turn();
        let piece = match self.board.get(from) {
            Some(piece) if piece.color == mover => piece,
            _ => return Err(MoveError::IllegalMove { from, to }),
        };

        // Same origin and destination is a deliberate pass.
        if from == to {
            self.ply += 1;
            return Ok(MoveOutcome::Passed);
        }

        if !validator::is_legal(&self.board, from, piece, to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        let captured = self.board.get(to);
        if captured.is_some_and(|occupant| occupant.color == mover) {
            return Err(MoveError::IllegalMove { from, to });
        }

        // Provisional apply; the snapshot backs out an unresolved check.
        let snapshot = self.board.clone();
        self.board.set(to, Some(piece));
        self.board.set(from, None);

        let status = self.checks[mover.index()];
        if status.in_check {
            if let Some(threat) = status.threat {
                let general = check::find_general(&self.board, mover);
                if check::threatens(&self.board, threat, general) {
                    self.board = snapshot;
                    return Err(MoveError::SelfCheckUnresolved { from, to });
                }
            }
            self.checks[mover.index()] = CheckStatus::default();
        }

        // Commit: re-derive both sides' check flags from the landing
        // square, remembering it as the threat for a side now in check.
        for color in ALL_COLORS {
            let general = check::find_general(&self.board, color);
            let threatened = check::threatens(&self.board, to, general);
            self.checks[color.index()] = CheckStatus {
                in_check: threatened,
                threat: threatened.then_some(to),
            };
        }

        // A side left in check with no reply that lifts the threat has
        // been mated.
        let opponent = mover.opponent();
        let opp_status = self.checks[opponent.index()];
        if opp_status.in_check {
            if let Some(threat) = opp_status.threat {
                if !movegen::has_escape(&self.board, opponent, threat) {
                    self.state = match mover {
                        Color::Red => GameState::RedWon,
                        Color::Blue => GameState::BlueWon,
                    };
                }
            }
        }

        self.ply += 1;
        Ok(MoveOutcome::Moved { captured })
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
