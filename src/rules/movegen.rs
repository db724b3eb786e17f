//! Candidate-move enumeration.
//!
//! Enumerates the moves a side could put through the validator, and
//! searches them for a reply that lifts a standing check. Terminal-state
//! detection is the main consumer.

use crate::board::{Board, Color, Coordinate, FILE_COUNT, RANK_COUNT};

use super::{check, validator};

/// Enumerates every (from, to) pair the side could play under the
/// movement predicates, excluding passes and same-side captures.
pub fn candidate_moves(board: &Board, color: Color) -> Vec<(Coordinate, Coordinate)> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces().filter(|(_, p)| p.color == color) {
        for rank in 0..RANK_COUNT as u8 {
            for file in 0..FILE_COUNT as u8 {
                let to = Coordinate { file, rank };
                if to == from {
                    continue;
                }
                if let Some(occupant) = board.get(to) {
                    if occupant.color == color {
                        continue;
                    }
                }
                if validator::is_legal(board, from, piece, to) {
                    moves.push((from, to));
                }
            }
        }
    }
    moves
}

/// Returns whether the checked side has any reply after which the piece
/// on `threat` no longer reaches its general. This mirrors the
/// orchestrator's own resolution rule, so "no escape" means every reply
/// the orchestrator could accept would be rejected as unresolved check.
pub fn has_escape(board: &Board, color: Color, threat: Coordinate) -> bool {
    for (from, to) in candidate_moves(board, color) {
        let mut trial = board.clone();
        let piece = trial.get(from);
        trial.set(to, piece);
        trial.set(from, None);
        let general = check::find_general(&trial, color);
        // A capture of the threat piece leaves a friendly occupant on the
        // threat square, which `threatens` reports as no threat.
        if !check::threatens(&trial, threat, general) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};

    fn at(notation: &str) -> Coordinate {
        Coordinate::parse(notation).unwrap()
    }

    fn place(board: &mut Board, notation: &str, color: Color, kind: PieceKind) {
        board.set(at(notation), Some(Piece::new(color, kind)));
    }

    #[test]
    fn opening_moves_are_sane() {
        let board = Board::starting_position();
        let moves = candidate_moves(&board, Color::Blue);
        assert!(!moves.is_empty());
        assert!(moves.contains(&(at("a7"), at("a6"))));
        assert!(moves.contains(&(at("c10"), at("d8"))));
        // Cannon with no screen cannot advance.
        assert!(!moves.contains(&(at("b8"), at("b5"))));
        // No move lands on a friendly piece.
        for (_, to) in &moves {
            assert_ne!(board.get(*to).map(|p| p.color), Some(Color::Blue));
        }
    }

    #[test]
    fn escape_by_capturing_the_threat() {
        let mut board = Board::empty();
        place(&mut board, "e9", Color::Blue, PieceKind::General);
        place(&mut board, "e2", Color::Red, PieceKind::General);
        place(&mut board, "e8", Color::Red, PieceKind::Chariot);
        assert!(has_escape(&board, Color::Blue, at("e8")));
    }

    #[test]
    fn escape_by_blocking_the_line() {
        let mut board = Board::empty();
        place(&mut board, "e9", Color::Blue, PieceKind::General);
        place(&mut board, "e2", Color::Red, PieceKind::General);
        place(&mut board, "e4", Color::Red, PieceKind::Chariot);
        place(&mut board, "a6", Color::Blue, PieceKind::Chariot);
        // Blue's chariot can interpose on e6 (among other escapes).
        assert!(has_escape(&board, Color::Blue, at("e4")));
    }

    #[test]
    fn cornered_general_has_no_escape() {
        // Blue general boxed into d10 by its own guards and elephant;
        // a red horse on c8 checks over the empty c9 square and nothing
        // blue can reach c8 or c9.
        let mut board = Board::empty();
        place(&mut board, "d10", Color::Blue, PieceKind::General);
        place(&mut board, "d9", Color::Blue, PieceKind::Guard);
        place(&mut board, "e9", Color::Blue, PieceKind::Guard);
        place(&mut board, "e10", Color::Blue, PieceKind::Elephant);
        place(&mut board, "c8", Color::Red, PieceKind::Horse);
        place(&mut board, "e2", Color::Red, PieceKind::General);
        assert!(check::threatens(&board, at("c8"), at("d10")));
        assert!(!has_escape(&board, Color::Blue, at("c8")));
    }
}
