//! Check detection.
//!
//! Reachability queries over the board, reusing the movement predicates
//! without any notion of whose turn it is.

use crate::board::{Board, Color, Coordinate, PieceKind};

use super::validator;

/// Locates the general of the given side.
///
/// Panics when the board holds no such general: that is corrupted state,
/// not bad player input, and must abort loudly.
pub fn find_general(board: &Board, color: Color) -> Coordinate {
    board
        .pieces()
        .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::General)
        .map(|(coord, _)| coord)
        .unwrap_or_else(|| panic!("no {:?} general on the board", color))
}

/// Returns whether the piece at `attacker` could capture the occupant of
/// `target`, ignoring whose turn it is.
///
/// False when the attacker square is empty, when the two squares are
/// equal, or when the target occupant is friendly.
pub fn threatens(board: &Board, attacker: Coordinate, target: Coordinate) -> bool {
    if attacker == target {
        return false;
    }
    let Some(piece) = board.get(attacker) else {
        return false;
    };
    if let Some(occupant) = board.get(target) {
        if occupant.color == piece.color {
            return false;
        }
    }
    validator::is_legal(board, attacker, piece, target)
}

/// Returns whether any opposing piece can reach the side's general.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let general = find_general(board, color);
    board
        .pieces()
        .any(|(coord, piece)| piece.color != color && threatens(board, coord, general))
}
