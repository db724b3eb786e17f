//! Piece and side types.
//!
//! The seven Janggi piece kinds and the two sides, as closed enums. A
//! piece's identity never changes after placement; only its square does.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The side a piece belongs to. Blue moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

/// Both sides, in `Color::index` order.
pub const ALL_COLORS: [Color; 2] = [Color::Red, Color::Blue];

impl Color {
    /// Returns the opposing side.
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Index into per-side state arrays.
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    /// Forward direction along the rank axis. Red starts on ranks 1-4 and
    /// advances toward rank 10; blue advances the other way.
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Blue => -1,
        }
    }

    /// Returns the single-character side abbreviation.
    pub const fn abbr_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
        }
    }
}

/// The seven Janggi piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Soldier,
    General,
    Guard,
    Horse,
    Elephant,
    Chariot,
    Cannon,
}

impl PieceKind {
    /// Returns the single-character kind abbreviation.
    pub const fn abbr_char(self) -> char {
        match self {
            PieceKind::Soldier => 'S',
            PieceKind::General => 'G',
            PieceKind::Guard => 'Q',
            PieceKind::Horse => 'H',
            PieceKind::Elephant => 'E',
            PieceKind::Chariot => 'R',
            PieceKind::Cannon => 'C',
        }
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a piece of the given side and kind.
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.abbr_char(), self.color.abbr_char())
    }
}
