//! Board coordinates and square notation.
//!
//! Squares are written as a lowercase file letter 'a'-'i' followed by a
//! rank number 1-10 with no separator, e.g. "a1", "e9", "c10". Parsing and
//! formatting form a bijection: every in-range coordinate has exactly one
//! accepted spelling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of files (columns) on the board.
pub const FILE_COUNT: usize = 9;

/// Number of ranks (rows) on the board.
pub const RANK_COUNT: usize = 10;

/// Errors from square-notation parsing.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    #[error("empty square notation")]
    Empty,

    #[error("bad file letter in '{0}': expected 'a'-'i'")]
    FileOutOfRange(String),

    #[error("bad rank in '{0}': expected 1-10")]
    RankOutOfRange(String),
}

/// A board square as a zero-based (file, rank) pair. File 0 is 'a',
/// rank 0 is rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub file: u8,
    pub rank: u8,
}

impl Coordinate {
    /// Creates a coordinate, or `None` when either index is off the board.
    pub fn new(file: u8, rank: u8) -> Option<Coordinate> {
        if (file as usize) < FILE_COUNT && (rank as usize) < RANK_COUNT {
            Some(Coordinate { file, rank })
        } else {
            None
        }
    }

    /// Shifts this coordinate, or `None` when the result leaves the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Coordinate> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if file < 0 || rank < 0 {
            return None;
        }
        Coordinate::new(file as u8, rank as u8)
    }

    /// Parses square notation like "a1" or "c10".
    pub fn parse(s: &str) -> Result<Coordinate, NotationError> {
        let mut chars = s.chars();
        let file_char = chars.next().ok_or(NotationError::Empty)?;
        if !('a'..='i').contains(&file_char) {
            return Err(NotationError::FileOutOfRange(s.to_string()));
        }
        let file = file_char as u8 - b'a';

        let rank_str = chars.as_str();
        if rank_str.is_empty() || rank_str.starts_with('0') {
            return Err(NotationError::RankOutOfRange(s.to_string()));
        }
        let rank: u8 = rank_str
            .parse()
            .map_err(|_| NotationError::RankOutOfRange(s.to_string()))?;
        if !(1..=RANK_COUNT as u8).contains(&rank) {
            return Err(NotationError::RankOutOfRange(s.to_string()));
        }

        Ok(Coordinate {
            file,
            rank: rank - 1,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}
