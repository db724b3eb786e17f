//! Board grid storage.
//!
//! A fixed 10x9 grid of optional piece occupants with bounds-checked
//! access through `Coordinate`. No movement legality lives here; cloning
//! the board is the snapshot used for move rollback.

use serde::{Deserialize, Serialize};

use super::coord::{Coordinate, FILE_COUNT, RANK_COUNT};
use super::palace::palace_center;
use super::piece::{Color, Piece, PieceKind};

/// A read-only copy of every cell as (side, kind) pairs, indexed by rank
/// then file. This is all a presentation layer needs.
pub type SnapshotGrid = [[Option<(Color, PieceKind)>; FILE_COUNT]; RANK_COUNT];

/// The 10x9 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; FILE_COUNT]; RANK_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Board {
        Board {
            cells: [[None; FILE_COUNT]; RANK_COUNT],
        }
    }

    /// Creates a board with the standard Janggi starting layout.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();

        // Soldiers on every other file, ranks 4 and 7.
        for file in (0..FILE_COUNT as u8).step_by(2) {
            board.place(file, 3, Color::Red, PieceKind::Soldier);
            board.place(file, 6, Color::Blue, PieceKind::Soldier);
        }

        // Generals on the palace centres.
        for color in [Color::Red, Color::Blue] {
            let center = palace_center(color);
            board.place(center.file, center.rank, color, PieceKind::General);
        }

        // Cannons one rank ahead of the generals.
        for file in [1, 7] {
            board.place(file, 2, Color::Red, PieceKind::Cannon);
            board.place(file, 7, Color::Blue, PieceKind::Cannon);
        }

        // Back ranks: chariot, elephant, horse, guard, -, guard, elephant, horse, chariot.
        let back = [
            (0, PieceKind::Chariot),
            (1, PieceKind::Elephant),
            (2, PieceKind::Horse),
            (3, PieceKind::Guard),
            (5, PieceKind::Guard),
            (6, PieceKind::Elephant),
            (7, PieceKind::Horse),
            (8, PieceKind::Chariot),
        ];
        for (file, kind) in back {
            board.place(file, 0, Color::Red, kind);
            board.place(file, 9, Color::Blue, kind);
        }

        board
    }

    fn place(&mut self, file: u8, rank: u8, color: Color, kind: PieceKind) {
        self.cells[rank as usize][file as usize] = Some(Piece::new(color, kind));
    }

    /// Returns the occupant of a square.
    pub fn get(&self, coord: Coordinate) -> Option<Piece> {
        self.cells[coord.rank as usize][coord.file as usize]
    }

    /// Sets or clears the occupant of a square.
    pub fn set(&mut self, coord: Coordinate, piece: Option<Piece>) {
        self.cells[coord.rank as usize][coord.file as usize] = piece;
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, cell)| {
                cell.map(|piece| {
                    (
                        Coordinate {
                            file: file as u8,
                            rank: rank as u8,
                        },
                        piece,
                    )
                })
            })
        })
    }

    /// Returns a read-only snapshot of every cell.
    pub fn snapshot(&self) -> SnapshotGrid {
        let mut grid: SnapshotGrid = [[None; FILE_COUNT]; RANK_COUNT];
        for (rank, row) in self.cells.iter().enumerate() {
            for (file, cell) in row.iter().enumerate() {
                grid[rank][file] = cell.map(|piece| (piece.color, piece.kind));
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(notation: &str) -> Coordinate {
        Coordinate::parse(notation).unwrap()
    }

    #[test]
    fn empty_board_has_no_pieces() {
        assert_eq!(Board::empty().pieces().count(), 0);
    }

    #[test]
    fn starting_position_has_sixteen_pieces_per_side() {
        let board = Board::starting_position();
        for color in [Color::Red, Color::Blue] {
            let count = board.pieces().filter(|(_, p)| p.color == color).count();
            assert_eq!(count, 16);
        }
    }

    #[test]
    fn generals_start_on_palace_centers() {
        let board = Board::starting_position();
        assert_eq!(
            board.get(at("e2")),
            Some(Piece::new(Color::Red, PieceKind::General))
        );
        assert_eq!(
            board.get(at("e9")),
            Some(Piece::new(Color::Blue, PieceKind::General))
        );
    }

    #[test]
    fn starting_layout_spot_checks() {
        let board = Board::starting_position();
        assert_eq!(
            board.get(at("a1")),
            Some(Piece::new(Color::Red, PieceKind::Chariot))
        );
        assert_eq!(
            board.get(at("b8")),
            Some(Piece::new(Color::Blue, PieceKind::Cannon))
        );
        assert_eq!(
            board.get(at("a4")),
            Some(Piece::new(Color::Red, PieceKind::Soldier))
        );
        assert_eq!(
            board.get(at("a7")),
            Some(Piece::new(Color::Blue, PieceKind::Soldier))
        );
        assert_eq!(board.get(at("e5")), None);
    }

    #[test]
    fn get_set_round_trip() {
        let mut board = Board::empty();
        let square = at("d5");
        let piece = Piece::new(Color::Red, PieceKind::Horse);
        board.set(square, Some(piece));
        assert_eq!(board.get(square), Some(piece));
        board.set(square, None);
        assert_eq!(board.get(square), None);
    }

    #[test]
    fn clone_restores_exact_state() {
        let mut board = Board::starting_position();
        let snapshot = board.clone();
        board.set(at("a4"), None);
        board.set(at("a5"), Some(Piece::new(Color::Red, PieceKind::Soldier)));
        assert_ne!(board, snapshot);
        board = snapshot.clone();
        assert_eq!(board, snapshot);
        assert_eq!(board, Board::starting_position());
    }
}
